// SPDX-FileCopyrightText: The pedalio authors
// SPDX-License-Identifier: MPL-2.0

use strum::{Display, EnumString, IntoStaticStr};

/// How a CC assignment behaves on the target device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum CcKind {
    /// Two-state switch. `on`/`off` carry the data bytes to send.
    Toggle,
    /// Continuous value within `min..=max`.
    Parameter,
    /// Device function where the value is ignored.
    System,
    /// Edge-triggered action.
    Trigger,
}

/// A single CC assignment of a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CcDefinition {
    pub name: &'static str,
    /// CC number, `0..=127`.
    pub value: u8,
    pub description: &'static str,
    pub kind: CcKind,
    pub min: u8,
    pub max: u8,
    /// Data byte sent when a `Toggle` switches on.
    pub on: Option<u8>,
    /// Data byte sent when a `Toggle` switches off.
    pub off: Option<u8>,
}

impl CcDefinition {
    #[must_use]
    pub const fn toggle(name: &'static str, value: u8, description: &'static str) -> Self {
        Self {
            name,
            value,
            description,
            kind: CcKind::Toggle,
            min: 0,
            max: 127,
            on: Some(127),
            off: Some(0),
        }
    }

    #[must_use]
    pub const fn parameter(
        name: &'static str,
        value: u8,
        description: &'static str,
        min: u8,
        max: u8,
    ) -> Self {
        Self {
            name,
            value,
            description,
            kind: CcKind::Parameter,
            min,
            max,
            on: None,
            off: None,
        }
    }

    #[must_use]
    pub const fn system(name: &'static str, value: u8, description: &'static str) -> Self {
        Self {
            name,
            value,
            description,
            kind: CcKind::System,
            min: 0,
            max: 127,
            on: None,
            off: None,
        }
    }

    #[must_use]
    pub const fn trigger(name: &'static str, value: u8, description: &'static str) -> Self {
        Self {
            name,
            value,
            description,
            kind: CcKind::Trigger,
            min: 0,
            max: 127,
            on: None,
            off: None,
        }
    }
}

/// A named group of CC assignments. Declaration order is significant
/// and preserved by all flattened views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CcCategory {
    pub name: &'static str,
    pub controls: &'static [CcDefinition],
}

/// Non-MIDI button action tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr)]
pub enum SpecialAction {
    #[strum(serialize = "TAP_TEMPO")]
    TapTempo,
}

/// One button of a template page.
///
/// A button either sends a CC (optionally with a fixed second data byte
/// for bank select patterns), a raw SysEx pair, or triggers a special
/// action such as tap tempo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonBinding {
    pub name: &'static str,
    pub cc: Option<u8>,
    /// Second data byte for bank select patterns.
    pub d2: Option<u8>,
    pub special: Option<SpecialAction>,
    /// Raw SysEx payload (hex, framed `f0…f7`) sent on press.
    pub sysex_on: Option<&'static str>,
    /// Raw SysEx payload sent when toggling back off.
    pub sysex_off: Option<&'static str>,
    /// LED color, `#rrggbb`.
    pub color: &'static str,
}

impl ButtonBinding {
    #[must_use]
    pub const fn cc(name: &'static str, cc: u8, color: &'static str) -> Self {
        Self {
            name,
            cc: Some(cc),
            d2: None,
            special: None,
            sysex_on: None,
            sysex_off: None,
            color,
        }
    }

    #[must_use]
    pub const fn bank_select(name: &'static str, cc: u8, d2: u8, color: &'static str) -> Self {
        Self {
            name,
            cc: Some(cc),
            d2: Some(d2),
            special: None,
            sysex_on: None,
            sysex_off: None,
            color,
        }
    }

    #[must_use]
    pub const fn special(name: &'static str, action: SpecialAction, color: &'static str) -> Self {
        Self {
            name,
            cc: None,
            d2: None,
            special: Some(action),
            sysex_on: None,
            sysex_off: None,
            color,
        }
    }

    #[must_use]
    pub const fn sysex_toggle(
        name: &'static str,
        sysex_on: &'static str,
        sysex_off: &'static str,
        color: &'static str,
    ) -> Self {
        Self {
            name,
            cc: None,
            d2: None,
            special: None,
            sysex_on: Some(sysex_on),
            sysex_off: Some(sysex_off),
            color,
        }
    }
}

/// A named, ordered button layout for one controller page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonTemplate {
    pub name: &'static str,
    pub buttons: &'static [ButtonBinding],
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::*;

    #[test]
    fn special_action_wire_tag() {
        assert_eq!("TAP_TEMPO", SpecialAction::TapTempo.to_string());
        assert_eq!(
            SpecialAction::TapTempo,
            SpecialAction::from_str("TAP_TEMPO").unwrap()
        );
    }

    #[test]
    fn toggle_defaults() {
        let cc = CcDefinition::toggle("NR On/Off", 43, "Noise Reducer toggle");
        assert_eq!(CcKind::Toggle, cc.kind);
        assert_eq!(Some(127), cc.on);
        assert_eq!(Some(0), cc.off);
        assert_eq!((0, 127), (cc.min, cc.max));
    }
}
