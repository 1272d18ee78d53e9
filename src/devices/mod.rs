// SPDX-FileCopyrightText: The pedalio authors
// SPDX-License-Identifier: MPL-2.0

pub mod generic_midi;
pub mod hotone_ampero_2_stomp;
pub mod sonicake_pocket_master;
pub mod valeton_gp5;

use crate::device::DeviceProfile;

/// Profiles of all bundled devices, in editor display order.
///
/// The generic fallback profile is last.
pub const DEVICE_PROFILES: &[&DeviceProfile] = &[
    sonicake_pocket_master::DEVICE_PROFILE,
    valeton_gp5::DEVICE_PROFILE,
    hotone_ampero_2_stomp::DEVICE_PROFILE,
    generic_midi::DEVICE_PROFILE,
];

/// Display names of all bundled devices.
pub fn device_names() -> impl Iterator<Item = &'static str> {
    DEVICE_PROFILES.iter().map(|profile| profile.name)
}

/// Resolves a device profile by display name.
///
/// Unknown names resolve to the generic fallback profile, never to an
/// error.
#[must_use]
pub fn device_by_name(name: &str) -> &'static DeviceProfile {
    DEVICE_PROFILES
        .iter()
        .find(|profile| profile.name == name)
        .copied()
        .unwrap_or(generic_midi::DEVICE_PROFILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_device_resolves_to_generic_fallback() {
        assert!(std::ptr::eq(
            device_by_name("nonexistent"),
            generic_midi::DEVICE_PROFILE,
        ));
        assert!(std::ptr::eq(
            device_by_name("Generic MIDI Device"),
            generic_midi::DEVICE_PROFILE,
        ));
    }

    #[test]
    fn known_devices_resolve_by_name() {
        for profile in DEVICE_PROFILES {
            assert!(std::ptr::eq(device_by_name(profile.name), *profile));
        }
    }

    #[test]
    fn cc_values_stay_within_midi_range() {
        for profile in DEVICE_PROFILES {
            for cc in profile.flattened_cc() {
                assert!(cc.value <= 127, "{}: {}", profile.name, cc.name);
                assert!(cc.min <= cc.max, "{}: {}", profile.name, cc.name);
            }
        }
    }

    #[test]
    fn cc_values_unique_within_category() {
        for profile in DEVICE_PROFILES {
            for category in profile.categories {
                for (i, cc) in category.controls.iter().enumerate() {
                    let duplicate = category.controls[..i]
                        .iter()
                        .any(|other| other.value == cc.value);
                    assert!(
                        !duplicate,
                        "{}/{}: CC {}",
                        profile.name, category.name, cc.value
                    );
                }
            }
        }
    }

    #[test]
    fn template_sysex_payloads_are_framed() {
        for profile in DEVICE_PROFILES {
            for template in profile.templates {
                for button in template.buttons {
                    for sysex in [button.sysex_on, button.sysex_off].into_iter().flatten() {
                        assert!(sysex.starts_with("f0"), "{}: {}", template.name, button.name);
                        assert!(sysex.ends_with("f7"), "{}: {}", template.name, button.name);
                        assert_eq!(0, sysex.len() % 2, "{}: {}", template.name, button.name);
                    }
                }
            }
        }
    }
}
