// SPDX-FileCopyrightText: The pedalio authors
// SPDX-License-Identifier: MPL-2.0

use std::fmt::Write as _;

use crate::devices::{generic_midi, DEVICE_PROFILES};

/// Builds the option list for a CC `<select>` control.
///
/// CCs of every bundled device except the generic fallback are listed in
/// one `<optgroup>` per device, followed by a "Custom CC" group with
/// every value 0-127 that no bundled device claims. The option matching
/// `selected` carries the `selected` attribute.
#[must_use]
pub fn build_cc_select_options(selected: Option<u8>) -> String {
    let mut html = String::from("<option value=\"\">-- Select CC --</option>");

    for profile in DEVICE_PROFILES {
        if std::ptr::eq(*profile, generic_midi::DEVICE_PROFILE) {
            continue;
        }
        let _ = write!(html, "<optgroup label=\"── {} ──\">", profile.name);
        for cc in profile.flattened_cc() {
            let _ = write!(
                html,
                "<option value=\"{value}\"{selected}>[{short}] {name} (CC{value})</option>",
                value = cc.value,
                selected = selected_attr(selected, cc.value),
                short = profile.short_name(),
                name = cc.name,
            );
        }
        html.push_str("</optgroup>");
    }

    html.push_str("<optgroup label=\"── Custom CC ──\">");
    for value in 0..=127u8 {
        // O(128 x total CC count) membership scan, fine at this scale.
        let claimed = DEVICE_PROFILES
            .iter()
            .any(|profile| profile.cc_by_value(value).is_some());
        if claimed {
            continue;
        }
        let _ = write!(
            html,
            "<option value=\"{value}\"{selected}>CC {value}</option>",
            selected = selected_attr(selected, value),
        );
    }
    html.push_str("</optgroup>");

    html
}

const fn selected_attr(selected: Option<u8>, value: u8) -> &'static str {
    match selected {
        Some(selected) if selected == value => " selected",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_comes_first() {
        let html = build_cc_select_options(None);
        assert!(html.starts_with("<option value=\"\">-- Select CC --</option>"));
    }

    #[test]
    fn generic_fallback_is_not_listed_as_a_group() {
        let html = build_cc_select_options(None);
        assert!(!html.contains("── Generic MIDI Device ──"));
        assert!(html.contains("── Sonicake Pocket Master ──"));
        assert!(html.contains("── Valeton GP-5 ──"));
        assert!(html.contains("── Hotone Ampero 2 Stomp ──"));
        assert!(html.contains("── Custom CC ──"));
    }

    #[test]
    fn custom_group_excludes_claimed_values() {
        let html = build_cc_select_options(None);
        let custom = html
            .split("── Custom CC ──\">")
            .nth(1)
            .expect("custom group present");
        for profile in DEVICE_PROFILES {
            for cc in profile.flattened_cc() {
                let custom_option = format!(">CC {}</option>", cc.value);
                assert!(
                    !custom.contains(&custom_option),
                    "CC {} is claimed by {}",
                    cc.value,
                    profile.name
                );
            }
        }
    }

    #[test]
    fn selected_value_is_marked_once_per_claiming_device() {
        let html = build_cc_select_options(Some(43));
        assert!(html.contains("<option value=\"43\" selected>[SPM] NR On/Off (CC43)</option>"));
    }

    #[test]
    fn unclaimed_selected_value_is_marked_in_custom_group() {
        // CC 33 is not assigned by any bundled device.
        let html = build_cc_select_options(Some(33));
        assert!(html.contains("<option value=\"33\" selected>CC 33</option>"));
    }
}
