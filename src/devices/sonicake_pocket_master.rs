// SPDX-FileCopyrightText: The pedalio authors
// SPDX-License-Identifier: MPL-2.0

use crate::{
    control::{ButtonBinding, ButtonTemplate, CcCategory, CcDefinition, SpecialAction},
    device::DeviceProfile,
};

pub const DEVICE_PROFILE: &DeviceProfile = &DeviceProfile {
    name: "Sonicake Pocket Master",
    short_name: Some("SPM"),
    brand: "Sonicake",
    model: "Pocket Master",
    midi_in: "USB",
    midi_channel_default: 1,
    categories: CATEGORIES,
    templates: TEMPLATES,
};

const CATEGORIES: &[CcCategory] = &[
    CcCategory {
        name: "Effect Modules",
        controls: &[
            CcDefinition::toggle("NR On/Off", 43, "Noise Reducer toggle"),
            CcDefinition::toggle("FX1 On/Off", 44, "FX1 module toggle"),
            CcDefinition::toggle("DRV On/Off", 45, "Drive module toggle"),
            CcDefinition::toggle("AMP On/Off", 46, "Amp simulation toggle"),
            CcDefinition::toggle("IR On/Off", 47, "IR/Cabinet sim toggle"),
            CcDefinition::toggle("EQ On/Off", 48, "EQ module toggle"),
            CcDefinition::toggle("FX2 On/Off", 49, "FX2 module toggle"),
            CcDefinition::toggle("DLY On/Off", 50, "Delay module toggle"),
            CcDefinition::toggle("RVB On/Off", 51, "Reverb module toggle"),
        ],
    },
    CcCategory {
        name: "Navigation",
        controls: &[
            CcDefinition::parameter(
                "Preset Select",
                1,
                "1-50: User P01-P50, 51-100: Factory F01-F50",
                1,
                100,
            ),
            CcDefinition::system("Bank Down", 22, "Decrease preset bank"),
            CcDefinition::system("Bank Up", 23, "Increase preset bank"),
            CcDefinition::system("Preset Down", 24, "Previous preset"),
            CcDefinition::system("Preset Up", 25, "Next preset"),
        ],
    },
    CcCategory {
        name: "Volume Controls",
        controls: &[
            CcDefinition::parameter("Master Volume", 6, "Global master volume", 0, 100),
            CcDefinition::parameter("Preset Volume", 7, "Current preset volume", 0, 100),
        ],
    },
    CcCategory {
        name: "Utilities",
        controls: &[CcDefinition::toggle("Tuner On/Off", 58, "Toggle tuner mode")],
    },
    CcCategory {
        name: "Looper",
        controls: &[
            CcDefinition::toggle("Looper On/Off", 59, "Toggle looper mode"),
            CcDefinition::system("Looper Record", 60, "Start/stop recording"),
            CcDefinition::toggle("Looper Play/Stop", 62, "Play or stop loop"),
            CcDefinition::system("Looper Delete", 64, "Delete current loop"),
            CcDefinition::parameter("Looper Rec Volume", 65, "Recording input volume", 0, 100),
            CcDefinition::parameter("Looper Play Volume", 66, "Playback volume", 0, 100),
            CcDefinition::toggle("Looper Placement", 67, "0-63: Post, 64-127: Pre"),
        ],
    },
    CcCategory {
        name: "Drum Machine",
        controls: &[
            CcDefinition::toggle("Drum Menu On/Off", 92, "Toggle drum menu"),
            CcDefinition::toggle("Drum Play/Stop", 93, "Play or stop drums"),
            CcDefinition::parameter("Drum Rhythm", 94, "Select rhythm (0-9)", 0, 9),
            CcDefinition::parameter("Drum Volume", 95, "Drum volume level", 0, 100),
        ],
    },
];

const TEMPLATES: &[ButtonTemplate] = &[
    ButtonTemplate {
        name: "STOMP (Default)",
        buttons: &[
            ButtonBinding::cc("NR", 43, "#ffffff"),
            ButtonBinding::cc("FX1", 44, "#3f67ff"),
            ButtonBinding::cc("DRV", 45, "#fc2c00"),
            ButtonBinding::special("TAP", SpecialAction::TapTempo, "#ffffff"),
            ButtonBinding::cc("EQ", 48, "#0af500"),
            ButtonBinding::cc("FX2", 49, "#11f3ff"),
            ButtonBinding::cc("DLY", 50, "#332aff"),
            ButtonBinding::cc("RVB", 51, "#8400f7"),
        ],
    },
    ButtonTemplate {
        name: "Full Signal Chain",
        buttons: &[
            ButtonBinding::cc("NR", 43, "#888888"),
            ButtonBinding::cc("FX1", 44, "#3f67ff"),
            ButtonBinding::cc("DRV", 45, "#fc2c00"),
            ButtonBinding::cc("AMP", 46, "#ff8800"),
            ButtonBinding::cc("IR", 47, "#ffcc00"),
            ButtonBinding::cc("EQ", 48, "#0af500"),
            ButtonBinding::cc("FX2", 49, "#11f3ff"),
            ButtonBinding::cc("DLY", 50, "#332aff"),
            ButtonBinding::cc("RVB", 51, "#8400f7"),
            ButtonBinding::special("TAP", SpecialAction::TapTempo, "#ffffff"),
        ],
    },
    ButtonTemplate {
        name: "Bank Selector",
        buttons: &[
            ButtonBinding::bank_select("B1", 1, 1, "#ffffff"),
            ButtonBinding::bank_select("B2", 1, 2, "#ffffff"),
            ButtonBinding::bank_select("B3", 1, 3, "#ffffff"),
            ButtonBinding::bank_select("B4", 1, 4, "#ffffff"),
            ButtonBinding::bank_select("B5", 1, 5, "#0af500"),
            ButtonBinding::bank_select("B6", 1, 6, "#0af500"),
            ButtonBinding::bank_select("B7", 1, 7, "#0af500"),
            ButtonBinding::bank_select("B8", 1, 8, "#0af500"),
        ],
    },
    ButtonTemplate {
        name: "Wisut (10-btn)",
        buttons: &[
            ButtonBinding::bank_select("P1", 1, 1, "#ffffff"),
            ButtonBinding::bank_select("P2", 1, 2, "#ffffff"),
            ButtonBinding::bank_select("P3", 1, 3, "#ffffff"),
            ButtonBinding::bank_select("P4", 1, 4, "#ffffff"),
            ButtonBinding::bank_select("P5", 1, 5, "#0af500"),
            ButtonBinding::cc("FX1", 44, "#3f67ff"),
            ButtonBinding::cc("DRV", 45, "#fc2c00"),
            ButtonBinding::cc("FX2", 49, "#11f3ff"),
            ButtonBinding::cc("DLY", 50, "#332aff"),
            ButtonBinding::special("TAP", SpecialAction::TapTempo, "#ffffff"),
        ],
    },
];
