// SPDX-FileCopyrightText: The pedalio authors
// SPDX-License-Identifier: MPL-2.0

use crate::{
    control::{CcCategory, CcDefinition, CcKind},
    device::DeviceProfile,
};

/// Fallback profile for unknown or custom devices.
pub const DEVICE_PROFILE: &DeviceProfile = &DeviceProfile {
    name: "Generic MIDI Device",
    short_name: None,
    brand: "Generic",
    model: "Custom",
    midi_in: "Any",
    midi_channel_default: 1,
    categories: CATEGORIES,
    templates: &[],
};

// Standard CC assignments from the MIDI 1.0 specification. No on/off
// bytes, the editor treats these as plain assignments.
const fn std_cc(name: &'static str, value: u8, kind: CcKind) -> CcDefinition {
    CcDefinition {
        name,
        value,
        description: "",
        kind,
        min: 0,
        max: 127,
        on: None,
        off: None,
    }
}

const CATEGORIES: &[CcCategory] = &[CcCategory {
    name: "Standard CCs",
    controls: &[
        std_cc("Modulation", 1, CcKind::Parameter),
        std_cc("Breath", 2, CcKind::Parameter),
        std_cc("Foot Controller", 4, CcKind::Parameter),
        std_cc("Volume", 7, CcKind::Parameter),
        std_cc("Balance", 8, CcKind::Parameter),
        std_cc("Pan", 10, CcKind::Parameter),
        std_cc("Expression", 11, CcKind::Parameter),
        std_cc("Sustain Pedal", 64, CcKind::Toggle),
        std_cc("Portamento", 65, CcKind::Toggle),
        std_cc("Sostenuto", 66, CcKind::Toggle),
        std_cc("Soft Pedal", 67, CcKind::Toggle),
        std_cc("Legato", 68, CcKind::Toggle),
        std_cc("Hold 2", 69, CcKind::Toggle),
    ],
}];
