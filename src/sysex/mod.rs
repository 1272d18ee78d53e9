// SPDX-FileCopyrightText: The pedalio authors
// SPDX-License-Identifier: MPL-2.0

//! Delay-time SysEx support: the lookup table with its nearest-match
//! search, the header extractor feeding it, and the analog-input scroll
//! parameter descriptors.

pub mod codegen;
pub mod delay;
pub mod extract;

pub use self::{
    codegen::generate_module,
    delay::{DelayMillis, DelayTable, DelayTableError, DelayTimeSysex, MAX_DELAY_MS, MIN_DELAY_MS},
    extract::{extract, ExtractError},
};

/// Analog-input scroll parameter.
///
/// The SysEx payloads themselves live in firmware flash, the editor only
/// needs the names and how many discrete values each parameter has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SysexScrollParam {
    pub name: &'static str,
    pub firmware_id: u8,
    pub value_count: u16,
}

pub const SYSEX_SCROLL_PARAMS: &[SysexScrollParam] = &[
    SysexScrollParam {
        name: "PITCH - HIGH",
        firmware_id: 1,
        value_count: 25,
    },
    SysexScrollParam {
        name: "DRV - GAIN",
        firmware_id: 2,
        value_count: 101,
    },
];

/// Names of all scroll parameters, in firmware order.
pub fn sysex_scroll_param_names() -> impl Iterator<Item = &'static str> {
    SYSEX_SCROLL_PARAMS.iter().map(|param| param.name)
}

/// Number of discrete values of a scroll parameter, `0` for unknown
/// names.
#[must_use]
pub fn sysex_scroll_param_count(name: &str) -> u16 {
    SYSEX_SCROLL_PARAMS
        .iter()
        .find(|param| param.name == name)
        .map_or(0, |param| param.value_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_param_counts() {
        assert_eq!(25, sysex_scroll_param_count("PITCH - HIGH"));
        assert_eq!(101, sysex_scroll_param_count("DRV - GAIN"));
        assert_eq!(0, sysex_scroll_param_count("NO SUCH PARAM"));
    }

    #[test]
    fn scroll_param_names_are_listed_in_firmware_order() {
        let names: Vec<_> = sysex_scroll_param_names().collect();
        assert_eq!(vec!["PITCH - HIGH", "DRV - GAIN"], names);
    }
}
