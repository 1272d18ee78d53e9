// SPDX-FileCopyrightText: The pedalio authors
// SPDX-License-Identifier: MPL-2.0

use crate::control::{ButtonTemplate, CcCategory, CcDefinition};

/// Descriptor and reference data of one supported controller target.
///
/// Profiles are defined once as `const` data in [`crate::devices`] and
/// only ever borrowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceProfile {
    /// Display name, also the registry key.
    pub name: &'static str,
    /// Abbreviation used in compact option labels. Falls back to `name`.
    pub short_name: Option<&'static str>,
    pub brand: &'static str,
    pub model: &'static str,
    /// Physical MIDI input(s) of the device, for display only.
    pub midi_in: &'static str,
    pub midi_channel_default: u8,
    pub categories: &'static [CcCategory],
    pub templates: &'static [ButtonTemplate],
}

impl DeviceProfile {
    #[must_use]
    pub const fn short_name(&self) -> &'static str {
        match self.short_name {
            Some(short_name) => short_name,
            None => self.name,
        }
    }

    /// All CC definitions of the device, flattened in category
    /// declaration order, then within-category order.
    pub fn flattened_cc(&self) -> impl Iterator<Item = &'static CcDefinition> {
        let categories = self.categories;
        categories
            .iter()
            .flat_map(|category| category.controls.iter())
    }

    /// First CC definition with the given number, if any.
    #[must_use]
    pub fn cc_by_value(&self, value: u8) -> Option<&'static CcDefinition> {
        // Linear scan, the tables are small.
        self.flattened_cc().find(|cc| cc.value == value)
    }

    /// Display label for a CC number, `"<name> (<value>)"` for known
    /// assignments and `"CC <value>"` otherwise.
    #[must_use]
    pub fn cc_label(&self, value: u8) -> String {
        match self.cc_by_value(value) {
            Some(cc) => format!("{} ({})", cc.name, cc.value),
            None => format!("CC {value}"),
        }
    }

    #[must_use]
    pub fn template_by_name(&self, name: &str) -> Option<&'static ButtonTemplate> {
        self.templates.iter().find(|template| template.name == name)
    }
}

#[cfg(test)]
mod tests {
    use crate::devices::{generic_midi, sonicake_pocket_master, DEVICE_PROFILES};

    #[test]
    fn flattened_cc_covers_all_categories() {
        for profile in DEVICE_PROFILES {
            let per_category: usize = profile
                .categories
                .iter()
                .map(|category| category.controls.len())
                .sum();
            assert_eq!(per_category, profile.flattened_cc().count(), "{}", profile.name);
        }
    }

    #[test]
    fn cc_by_value_finds_first_match() {
        let profile = sonicake_pocket_master::DEVICE_PROFILE;
        let cc = profile.cc_by_value(43).unwrap();
        assert_eq!("NR On/Off", cc.name);
        assert!(profile.cc_by_value(3).is_none());
    }

    #[test]
    fn cc_label_degrades_gracefully() {
        let profile = sonicake_pocket_master::DEVICE_PROFILE;
        assert_eq!("NR On/Off (43)", profile.cc_label(43));
        assert_eq!("CC 3", profile.cc_label(3));
    }

    #[test]
    fn short_name_falls_back_to_name() {
        assert_eq!("SPM", sonicake_pocket_master::DEVICE_PROFILE.short_name());
        assert_eq!(
            "Generic MIDI Device",
            generic_midi::DEVICE_PROFILE.short_name()
        );
    }

    #[test]
    fn template_lookup() {
        let profile = sonicake_pocket_master::DEVICE_PROFILE;
        assert!(profile.template_by_name("STOMP (Default)").is_some());
        assert!(profile.template_by_name("No Such Template").is_none());
    }
}
