// SPDX-FileCopyrightText: The pedalio authors
// SPDX-License-Identifier: MPL-2.0

use crate::{
    control::{ButtonBinding, ButtonTemplate, CcCategory, CcDefinition, SpecialAction},
    device::DeviceProfile,
};

pub const DEVICE_PROFILE: &DeviceProfile = &DeviceProfile {
    name: "Valeton GP-5",
    short_name: Some("GP5"),
    brand: "Valeton",
    model: "GP-5",
    midi_in: "USB-C / Bluetooth",
    midi_channel_default: 1,
    categories: CATEGORIES,
    templates: TEMPLATES,
};

const CATEGORIES: &[CcCategory] = &[
    CcCategory {
        name: "Effect Modules (Enable/Disable)",
        controls: &[
            CcDefinition::toggle("NR On/Off", 0, "Noise Reduction / Gate toggle"),
            CcDefinition::toggle("PRE On/Off", 1, "Pre-effect (Comp/Boost/Wah/Pitch) toggle"),
            CcDefinition::toggle("DST On/Off", 2, "Distortion toggle"),
            CcDefinition::toggle("AMP On/Off", 3, "Amp model toggle"),
            CcDefinition::toggle("CAB On/Off", 4, "Cabinet/IR toggle"),
            CcDefinition::toggle("EQ On/Off", 5, "EQ toggle"),
            CcDefinition::toggle("MOD On/Off", 6, "Modulation toggle"),
            CcDefinition::toggle("DLY On/Off", 7, "Delay toggle"),
            CcDefinition::toggle("RVB On/Off", 8, "Reverb toggle"),
            CcDefinition::toggle("Snaptone On/Off", 9, "NAM/Snaptone toggle"),
        ],
    },
    CcCategory {
        name: "Effect Type Selection",
        controls: &[
            CcDefinition::parameter("NR Type", 10, "Noise Reduction type (0=Gate, 1=NR, 2=NRG)", 0, 2),
            CcDefinition::parameter("PRE Type", 11, "Pre-effect type (0-23)", 0, 23),
            CcDefinition::parameter("DST Type", 12, "Distortion type (0-23)", 0, 23),
            CcDefinition::parameter("AMP Type", 13, "Amp model (0-31)", 0, 31),
            CcDefinition::parameter("CAB Type", 14, "Cabinet/IR (0-19)", 0, 19),
            CcDefinition::parameter("EQ Type", 15, "EQ type (0-4)", 0, 4),
            CcDefinition::parameter("MOD Type", 16, "Modulation type (0-14)", 0, 14),
            CcDefinition::parameter("DLY Type", 17, "Delay type (0-9)", 0, 9),
            CcDefinition::parameter("RVB Type", 18, "Reverb type (0-9)", 0, 9),
            CcDefinition::parameter("Snaptone Type", 19, "NAM model (0-79)", 0, 79),
        ],
    },
    CcCategory {
        name: "Navigation",
        controls: &[
            CcDefinition::parameter("Preset Select", 127, "Direct patch select 0-99", 0, 99),
            CcDefinition::trigger("Preset Down", 116, "Previous patch"),
            CcDefinition::trigger("Preset Up", 117, "Next patch"),
            CcDefinition::parameter("BPM", 118, "Set tempo BPM (0=40 to 127=300)", 0, 127),
        ],
    },
    CcCategory {
        name: "Volume Controls",
        controls: &[
            CcDefinition::parameter("Patch Volume", 20, "Current patch volume", 0, 127),
            CcDefinition::parameter("Input Level", 120, "Input gain", 0, 127),
            CcDefinition::toggle("CAB Bypass", 121, "Global CAB bypass"),
            CcDefinition::parameter("Master Volume", 122, "Global master volume", 0, 127),
            CcDefinition::parameter("Record Level", 123, "USB record level", 0, 127),
            CcDefinition::parameter("Monitor Level", 124, "Monitor output level", 0, 127),
            CcDefinition::parameter("Bluetooth Level", 125, "Bluetooth audio level", 0, 127),
        ],
    },
    CcCategory {
        name: "NR Parameters",
        controls: &[
            CcDefinition::parameter("NR Param 0", 21, "NR parameter 0", 0, 127),
            CcDefinition::parameter("NR Param 1", 23, "NR parameter 1", 0, 127),
            CcDefinition::parameter("NR Param 2", 24, "NR parameter 2", 0, 127),
        ],
    },
    CcCategory {
        name: "PRE Parameters",
        controls: &[
            CcDefinition::parameter("PRE Param 0", 30, "Pre-effect parameter 0", 0, 127),
            CcDefinition::parameter("PRE Param 1", 31, "Pre-effect parameter 1", 0, 127),
            CcDefinition::parameter("PRE Param 2", 32, "Pre-effect parameter 2", 0, 127),
        ],
    },
    CcCategory {
        name: "DST Parameters",
        controls: &[
            CcDefinition::parameter("DST Param 0 (Gain)", 38, "Distortion gain", 0, 127),
            CcDefinition::parameter("DST Param 1 (Bass)", 39, "Distortion bass", 0, 127),
            CcDefinition::parameter("DST Param 2 (Mid)", 40, "Distortion mid", 0, 127),
            CcDefinition::parameter("DST Param 3 (Treble)", 41, "Distortion treble", 0, 127),
            CcDefinition::parameter("DST Param 4 (Level)", 42, "Distortion level", 0, 127),
        ],
    },
    CcCategory {
        name: "AMP Parameters",
        controls: &[
            CcDefinition::parameter("AMP Param 0 (Gain)", 46, "Amp gain", 0, 127),
            CcDefinition::parameter("AMP Param 1 (Bass)", 47, "Amp bass", 0, 127),
            CcDefinition::parameter("AMP Param 2 (Mid)", 48, "Amp mid", 0, 127),
            CcDefinition::parameter("AMP Param 3 (Treble)", 49, "Amp treble", 0, 127),
            CcDefinition::parameter("AMP Param 4 (Presence)", 50, "Amp presence", 0, 127),
            CcDefinition::parameter("AMP Param 5 (Master)", 51, "Amp master volume", 0, 127),
        ],
    },
    CcCategory {
        name: "MOD Parameters",
        controls: &[
            CcDefinition::parameter("MOD Param 0 (Rate)", 70, "Modulation rate", 0, 127),
            CcDefinition::parameter("MOD Param 1 (Depth)", 71, "Modulation depth", 0, 127),
            CcDefinition::parameter("MOD Param 2", 72, "Modulation parameter 2", 0, 127),
            CcDefinition::parameter("MOD Param 3 (Mix)", 73, "Modulation mix", 0, 127),
        ],
    },
    CcCategory {
        name: "DLY Parameters",
        controls: &[
            CcDefinition::parameter("DLY Param 0 (Time)", 78, "Delay time", 0, 127),
            CcDefinition::parameter("DLY Param 1 (Feedback)", 79, "Delay feedback", 0, 127),
            CcDefinition::parameter("DLY Param 2 (Mix)", 80, "Delay mix", 0, 127),
        ],
    },
    CcCategory {
        name: "RVB Parameters",
        controls: &[
            CcDefinition::parameter("RVB Param 0 (Decay)", 86, "Reverb decay", 0, 127),
            CcDefinition::parameter("RVB Param 1 (Damping)", 87, "Reverb damping", 0, 127),
            CcDefinition::parameter("RVB Param 2 (Mix)", 88, "Reverb mix", 0, 127),
        ],
    },
    CcCategory {
        name: "Utilities",
        controls: &[CcDefinition::toggle("Tuner On/Off", 69, "Toggle tuner mode")],
    },
];

const TEMPLATES: &[ButtonTemplate] = &[
    ButtonTemplate {
        name: "STOMP Mode (CC)",
        buttons: &[
            ButtonBinding::cc("NR", 0, "#888888"),
            ButtonBinding::cc("PRE", 1, "#3f67ff"),
            ButtonBinding::cc("DST", 2, "#fc2c00"),
            ButtonBinding::special("TAP", SpecialAction::TapTempo, "#ffffff"),
            ButtonBinding::cc("EQ", 5, "#0af500"),
            ButtonBinding::cc("MOD", 6, "#ff00ff"),
            ButtonBinding::cc("DLY", 7, "#332aff"),
            ButtonBinding::cc("RVB", 8, "#8400f7"),
        ],
    },
    ButtonTemplate {
        name: "Full Chain (CC)",
        buttons: &[
            ButtonBinding::cc("NR", 0, "#888888"),
            ButtonBinding::cc("PRE", 1, "#3f67ff"),
            ButtonBinding::cc("DST", 2, "#fc2c00"),
            ButtonBinding::cc("AMP", 3, "#ff8800"),
            ButtonBinding::cc("CAB", 4, "#ffcc00"),
            ButtonBinding::cc("EQ", 5, "#0af500"),
            ButtonBinding::cc("MOD", 6, "#ff00ff"),
            ButtonBinding::cc("DLY", 7, "#332aff"),
            ButtonBinding::cc("RVB", 8, "#8400f7"),
            ButtonBinding::cc("NAM", 9, "#11f3ff"),
        ],
    },
    ButtonTemplate {
        name: "Bank Selector",
        buttons: &[
            ButtonBinding::bank_select("P1", 127, 0, "#ffffff"),
            ButtonBinding::bank_select("P2", 127, 1, "#ffffff"),
            ButtonBinding::bank_select("P3", 127, 2, "#ffffff"),
            ButtonBinding::bank_select("P4", 127, 3, "#ffffff"),
            ButtonBinding::bank_select("P5", 127, 4, "#0af500"),
            ButtonBinding::bank_select("P6", 127, 5, "#0af500"),
            ButtonBinding::bank_select("P7", 127, 6, "#0af500"),
            ButtonBinding::bank_select("P8", 127, 7, "#0af500"),
        ],
    },
    // Raw SysEx effect control predating the CC firmware.
    ButtonTemplate {
        name: "GP5 SysEx (Legacy)",
        buttons: &[
            ButtonBinding::sysex_toggle(
                "PRE",
                "f0000f00010000000a0101040900010000000000000001000000000000f7",
                "f0010900010000000a0101040900010000000000000000000000000000f7",
                "#888888",
            ),
            ButtonBinding::sysex_toggle(
                "DST",
                "f0030a00010000000a0101040900020000000000000001000000000000f7",
                "f0020c00010000000a0101040900020000000000000000000000000000f7",
                "#fc2c00",
            ),
            ButtonBinding::sysex_toggle(
                "AMP",
                "f0020900010000000a0101040900030000000000000001000000000000f7",
                "f0030f00010000000a0101040900030000000000000000000000000000f7",
                "#ff8800",
            ),
            ButtonBinding::special("TAP", SpecialAction::TapTempo, "#ffffff"),
            ButtonBinding::sysex_toggle(
                "NS",
                "f0090700010000000a0101040900090000000000000001000000000000f7",
                "f0080100010000000a0101040900090000000000000000000000000000f7",
                "#666666",
            ),
            ButtonBinding::sysex_toggle(
                "EQ",
                "f0040300010000000a0101040900050000000000000001000000000000f7",
                "f0050500010000000a0101040900050000000000000000000000000000f7",
                "#0af500",
            ),
            ButtonBinding::sysex_toggle(
                "DLY",
                "f0060500010000000a0101040900070000000000000001000000000000f7",
                "f0070300010000000a0101040900070000000000000000000000000000f7",
                "#332aff",
            ),
            ButtonBinding::sysex_toggle(
                "RVB",
                "f0080400010000000a0101040900080000000000000001000000000000f7",
                "f0090200010000000a0101040900080000000000000000000000000000f7",
                "#8400f7",
            ),
        ],
    },
];
