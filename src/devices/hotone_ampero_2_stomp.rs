// SPDX-FileCopyrightText: The pedalio authors
// SPDX-License-Identifier: MPL-2.0

use crate::{
    control::{ButtonBinding, ButtonTemplate, CcCategory, CcDefinition, SpecialAction},
    device::DeviceProfile,
};

pub const DEVICE_PROFILE: &DeviceProfile = &DeviceProfile {
    name: "Hotone Ampero 2 Stomp",
    short_name: None,
    brand: "Hotone",
    model: "Ampero 2 Stomp",
    midi_in: "USB / MIDI TRS",
    midi_channel_default: 1,
    categories: CATEGORIES,
    templates: TEMPLATES,
};

const CATEGORIES: &[CcCategory] = &[
    CcCategory {
        name: "Effect Slots",
        controls: &[
            CcDefinition::toggle("Slot A1 On/Off", 48, "Effect slot A1 toggle"),
            CcDefinition::toggle("Slot A2 On/Off", 49, "Effect slot A2 toggle"),
            CcDefinition::toggle("Slot A3 On/Off", 50, "Effect slot A3 toggle"),
            CcDefinition::toggle("Slot A4 On/Off", 51, "Effect slot A4 toggle"),
            CcDefinition::toggle("Slot A5 On/Off", 52, "Effect slot A5 toggle"),
            CcDefinition::toggle("Slot A6 On/Off", 53, "Effect slot A6 toggle"),
            CcDefinition::toggle("Slot B1 On/Off", 54, "Effect slot B1 toggle"),
            CcDefinition::toggle("Slot B2 On/Off", 55, "Effect slot B2 toggle"),
            CcDefinition::toggle("Slot B3 On/Off", 56, "Effect slot B3 toggle"),
            CcDefinition::toggle("Slot B4 On/Off", 57, "Effect slot B4 toggle"),
            CcDefinition::toggle("Slot B5 On/Off", 58, "Effect slot B5 toggle"),
            CcDefinition::toggle("Slot B6 On/Off", 59, "Effect slot B6 toggle"),
        ],
    },
    CcCategory {
        name: "Navigation",
        controls: &[
            CcDefinition::parameter("Bank Select MSB", 0, "Bank 0-2 for patch ranges", 0, 2),
            CcDefinition::system("Bank Down", 22, "Previous bank"),
            CcDefinition::system("Bank Up", 23, "Next bank"),
            CcDefinition::system("Pre-Select Menu", 24, "Open pre-select menu"),
            CcDefinition::parameter("Scene Select", 25, "Select scene 1-5", 1, 5),
            CcDefinition::system("Patch Down", 26, "Previous patch"),
            CcDefinition::system("Patch Up", 27, "Next patch"),
        ],
    },
    CcCategory {
        name: "Volume Controls",
        controls: &[CcDefinition::parameter("Patch Volume", 7, "Patch volume 0-100", 0, 100)],
    },
    CcCategory {
        name: "Expression",
        controls: &[
            CcDefinition::parameter("Expression 1/2", 11, "Expression pedal EXP1/2", 0, 127),
            CcDefinition::toggle("EXP 1/2 Switch", 13, "Switch between EXP1 and EXP2"),
        ],
    },
    CcCategory {
        name: "Quick Access",
        controls: &[
            CcDefinition::parameter("Quick Access 1", 16, "Quick access param 1", 0, 127),
            CcDefinition::system("Quick Access 1 Step", 17, "Step through QA1"),
            CcDefinition::parameter("Quick Access 2", 18, "Quick access param 2", 0, 127),
            CcDefinition::system("Quick Access 2 Step", 19, "Step through QA2"),
            CcDefinition::parameter("Quick Access 3", 20, "Quick access param 3", 0, 127),
            CcDefinition::system("Quick Access 3 Step", 21, "Step through QA3"),
        ],
    },
    CcCategory {
        name: "Mode",
        controls: &[
            CcDefinition::toggle("Unit Mode", 28, "Patch/Stomp mode switch"),
            CcDefinition::system("Display Mode", 29, "Main display mode"),
        ],
    },
    CcCategory {
        name: "Drum Machine",
        controls: &[
            CcDefinition::toggle("Drum On/Off", 36, "Drum machine toggle"),
            CcDefinition::toggle("Drum Play/Stop", 37, "Play or stop drums"),
            CcDefinition::parameter("Drum Rhythm", 38, "Select rhythm type", 0, 127),
            CcDefinition::parameter("Drum Volume", 39, "Drum volume", 0, 100),
        ],
    },
];

const TEMPLATES: &[ButtonTemplate] = &[
    ButtonTemplate {
        name: "6-Slot STOMP",
        buttons: &[
            ButtonBinding::cc("A1", 48, "#ff6b6b"),
            ButtonBinding::cc("A2", 49, "#feca57"),
            ButtonBinding::cc("A3", 50, "#48dbfb"),
            ButtonBinding::cc("A4", 51, "#1dd1a1"),
            ButtonBinding::cc("A5", 52, "#5f27cd"),
            ButtonBinding::cc("A6", 53, "#ff9ff3"),
            ButtonBinding::special("TAP", SpecialAction::TapTempo, "#ffffff"),
            ButtonBinding::cc("DRUM", 37, "#54a0ff"),
        ],
    },
    ButtonTemplate {
        name: "Scene Selector",
        buttons: &[
            ButtonBinding::bank_select("SC1", 25, 1, "#ff6b6b"),
            ButtonBinding::bank_select("SC2", 25, 2, "#feca57"),
            ButtonBinding::bank_select("SC3", 25, 3, "#48dbfb"),
            ButtonBinding::bank_select("SC4", 25, 4, "#1dd1a1"),
            ButtonBinding::bank_select("SC5", 25, 5, "#5f27cd"),
            ButtonBinding::cc("BK-", 22, "#888888"),
            ButtonBinding::cc("BK+", 23, "#888888"),
            ButtonBinding::special("TAP", SpecialAction::TapTempo, "#ffffff"),
        ],
    },
    ButtonTemplate {
        name: "Full 12 Slots",
        buttons: &[
            ButtonBinding::cc("A1", 48, "#ff6b6b"),
            ButtonBinding::cc("A2", 49, "#feca57"),
            ButtonBinding::cc("A3", 50, "#48dbfb"),
            ButtonBinding::cc("A4", 51, "#1dd1a1"),
            ButtonBinding::cc("A5", 52, "#5f27cd"),
            ButtonBinding::cc("A6", 53, "#ff9ff3"),
            ButtonBinding::cc("B1", 54, "#ff6b6b"),
            ButtonBinding::cc("B2", 55, "#feca57"),
            ButtonBinding::cc("B3", 56, "#48dbfb"),
            ButtonBinding::cc("B4", 57, "#1dd1a1"),
        ],
    },
];
