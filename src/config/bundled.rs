// SPDX-FileCopyrightText: The pedalio authors
// SPDX-License-Identifier: MPL-2.0

//! Factory configuration profiles.

use std::sync::LazyLock;

use super::{
    AnalogInputConfig, AnalogMessage, BleMode, ButtonConfig, ButtonMessage, FullConfig,
    GlobalSpecialAction, LedMode, MessageAction, MessageType, OledConfig, OledScreenMain,
    OledScreens, PresetConfig, SyncMode, SystemConfig,
};

static FULL_CONFIGS: LazyLock<Vec<(&'static str, FullConfig)>> = LazyLock::new(|| {
    vec![
        ("ESP32-S3 Default (8-btn)", esp32_s3_default()),
        ("Default (8-btn SPM)", default_8btn_spm()),
        ("Wisut (10-btn SPM)", wisut_10btn_spm()),
        ("GP5 Wisut Profile", gp5_wisut_profile()),
    ]
});

/// Names of all factory configurations.
pub fn full_config_names() -> impl Iterator<Item = &'static str> {
    FULL_CONFIGS.iter().map(|(name, _)| *name)
}

/// Factory configuration by name, `None` for unknown names.
#[must_use]
pub fn full_config_by_name(name: &str) -> Option<&'static FullConfig> {
    FULL_CONFIGS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, config)| config)
}

// GP5 direct patch select payloads, indexed by patch number.
const GP5_PATCH_SELECT: [&str; 6] = [
    "f0060c000100000006010104030000000000000000f7",
    "f0070a000100000006010104030001000000000000f7",
    "f00400000100000006010104030002000000000000f7",
    "f00506000100000006010104030003000000000000f7",
    "f00304000100000006010104030004000000000000f7",
    "f00202000100000006010104030005000000000000f7",
];

// GP5 effect block on/off payloads.
const GP5_PRE_ON: &str = "f0000f00010000000a0101040900010000000000000001000000000000f7";
const GP5_PRE_OFF: &str = "f0010900010000000a0101040900010000000000000000000000000000f7";
const GP5_DST_ON: &str = "f0030a00010000000a0101040900020000000000000001000000000000f7";
const GP5_DST_OFF: &str = "f0020c00010000000a0101040900020000000000000000000000000000f7";
const GP5_MOD_ON: &str = "f0070600010000000a0101040900060000000000000001000000000000f7";
const GP5_MOD_OFF: &str = "f0060000010000000a0101040900060000000000000000000000000000f7";
const GP5_DLY_ON: &str = "f0060500010000000a0101040900070000000000000001000000000000f7";
const GP5_DLY_OFF: &str = "f0070300010000000a0101040900070000000000000000000000000000f7";

fn button(name: &str, led_mode: LedMode, messages: Vec<ButtonMessage>) -> ButtonConfig {
    ButtonConfig {
        name: name.to_owned(),
        led_mode: Some(led_mode),
        in_selection_group: false,
        messages,
    }
}

fn in_selection(mut button: ButtonConfig) -> ButtonConfig {
    button.in_selection_group = true;
    button
}

fn with_message(mut button: ButtonConfig, message: ButtonMessage) -> ButtonConfig {
    button.messages.push(message);
    button
}

fn cc_message(action: MessageAction, data1: u8, data2: u8, rgb: &str) -> ButtonMessage {
    ButtonMessage {
        channel: Some(1),
        data1: Some(data1),
        data2: Some(data2),
        rgb: Some(rgb.to_owned()),
        ..ButtonMessage::new(action, MessageType::Cc)
    }
}

fn sysex_message(
    action: MessageAction,
    data1: u8,
    data2: u8,
    rgb: &str,
    payload: &str,
) -> ButtonMessage {
    ButtonMessage {
        channel: Some(1),
        data1: Some(data1),
        data2: Some(data2),
        rgb: Some(rgb.to_owned()),
        sysex: Some(payload.to_owned()),
        ..ButtonMessage::new(action, MessageType::Sysex)
    }
}

fn long_press(message_type: MessageType) -> ButtonMessage {
    ButtonMessage {
        channel: Some(1),
        data1: Some(0),
        data2: Some(0),
        hold_ms: Some(700),
        ..ButtonMessage::new(MessageAction::LongPress, message_type)
    }
}

/// GP5 hold-to-jump to a preset page.
fn preset_jump(slot: MessageType, rgb: &str) -> ButtonMessage {
    ButtonMessage {
        channel: Some(1),
        data1: Some(0),
        data2: Some(127),
        rgb: Some(rgb.to_owned()),
        hold_ms: Some(500),
        ..ButtonMessage::new(MessageAction::LongPress, slot)
    }
}

fn combo(partner: i8, message_type: MessageType) -> ButtonMessage {
    ButtonMessage {
        partner: Some(partner),
        ..ButtonMessage::new(MessageAction::Combo, message_type)
    }
}

/// CC toggle: `PRESS` sends 127, `2ND_PRESS` sends 0.
fn toggle_cc_dual(name: &str, cc: u8, on_rgb: &str, off_rgb: &str) -> ButtonConfig {
    button(
        name,
        LedMode::Toggle,
        vec![
            cc_message(MessageAction::Press, cc, 127, on_rgb),
            cc_message(MessageAction::SecondPress, cc, 0, off_rgb),
        ],
    )
}

fn toggle_cc(name: &str, cc: u8, rgb: &str) -> ButtonConfig {
    toggle_cc_dual(name, cc, rgb, rgb)
}

/// Program select: `PRESS` sends CC#1 with a fixed value.
fn program_select(name: &str, value: u8, rgb: &str) -> ButtonConfig {
    button(
        name,
        LedMode::Momentary,
        vec![cc_message(MessageAction::Press, 1, value, rgb)],
    )
}

fn note_button(name: &str, note: u8, rgb: &str) -> ButtonConfig {
    button(
        name,
        LedMode::Momentary,
        vec![ButtonMessage {
            channel: Some(1),
            data1: Some(note),
            data2: Some(127),
            rgb: Some(rgb.to_owned()),
            ..ButtonMessage::new(MessageAction::Press, MessageType::NoteMomentary)
        }],
    )
}

fn tap_tempo(name: &str, rgb: &str) -> ButtonConfig {
    button(
        name,
        LedMode::Momentary,
        vec![ButtonMessage {
            channel: Some(1),
            data1: Some(13),
            data2: Some(127),
            rgb: Some(rgb.to_owned()),
            rhythm_prev: Some(0),
            rhythm_next: Some(4),
            tap_lock: Some(7),
            ..ButtonMessage::new(MessageAction::Press, MessageType::TapTempo)
        }],
    )
}

/// The eight SPM stomp toggles shared by the 8-button profiles. The
/// optional long-press page switching sits on EQ and RVB.
fn spm_stomp_preset(with_page_switching: bool) -> PresetConfig {
    let mut eq = toggle_cc("EQ", 48, "#0af500");
    let mut rvb = toggle_cc("RVB", 51, "#8400f7");
    if with_page_switching {
        eq = with_message(eq, long_press(MessageType::PresetDown));
        rvb = with_message(rvb, long_press(MessageType::PresetUp));
    }
    PresetConfig {
        name: "STOMP".to_owned(),
        preset_led_mode: Some(LedMode::Normal),
        sync_mode: Some(SyncMode::Spm),
        buttons: vec![
            toggle_cc("NR", 43, "#ffffff"),
            toggle_cc("FX1", 44, "#3f67ff"),
            toggle_cc_dual("DRV", 45, "#fc2c00", "#ff0000"),
            tap_tempo("TAP", "#ffffff"),
            eq,
            toggle_cc("FX2", 49, "#11f3ff"),
            toggle_cc("DLY", 50, "#332aff"),
            rvb,
        ],
    }
}

fn bank_page(name: &str, first_bank: u8, colors: [&str; 2]) -> PresetConfig {
    let buttons = (0..8u8)
        .map(|i| {
            let rgb = colors[usize::from(i / 4)];
            let label = format!("B{}", u16::from(first_bank) + u16::from(i));
            program_select(&label, first_bank + i, rgb)
        })
        .collect();
    PresetConfig {
        name: name.to_owned(),
        preset_led_mode: Some(LedMode::Selection),
        sync_mode: None,
        buttons,
    }
}

fn note_page() -> PresetConfig {
    let names = ["1st", "2nd", "3rd", "4th", "5th", "6th", "7th", "8up"];
    let buttons = names
        .iter()
        .enumerate()
        .map(|(i, name)| program_select(name, 40 + i as u8, "#fd0000"))
        .collect();
    PresetConfig {
        name: "Note".to_owned(),
        preset_led_mode: Some(LedMode::Selection),
        sync_mode: None,
        buttons,
    }
}

fn add_page_switching(mut preset: PresetConfig, down_index: usize, up_index: usize) -> PresetConfig {
    preset.buttons[down_index]
        .messages
        .push(long_press(MessageType::PresetDown));
    preset.buttons[up_index]
        .messages
        .push(long_press(MessageType::PresetUp));
    preset
}

fn esp32_s3_default() -> FullConfig {
    let mut banks_1_8 = bank_page("BANKS 1-8", 1, ["#ffffff", "#0af500"]);
    banks_1_8.buttons[6]
        .messages
        .push(combo(7, MessageType::WifiToggle));
    let mut banks_9_16 = bank_page("BANKS 9-16", 9, ["#11f3ff", "#aa00ff"]);
    banks_9_16.buttons[6]
        .messages
        .push(combo(7, MessageType::WifiToggle));

    FullConfig {
        description: "Recommended pinout for ESP32-S3 (N16R8) - Safe for WiFi/BLE".to_owned(),
        config_name: Some("ESP32S3 TEMPLATE".to_owned()),
        last_modified: Some("2026-01-24 11:59:37".to_owned()),
        system: SystemConfig {
            ble_device_name: "CHOCOTONE S3".to_owned(),
            ap_ssid: "CHOCOTONE_S3".to_owned(),
            ap_password: "12345678".to_owned(),
            button_count: 8,
            button_pins: "38,39,40,41,42,21,8,9".to_owned(),
            led_pin: 48,
            leds_per_button: None,
            led_map: "0,1,2,3,4,5,6,7".to_owned(),
            encoder_a: 16,
            encoder_b: 17,
            encoder_btn: 18,
            ble_mode: BleMode::Client,
            brightness: Some(220),
            brightness_dim: Some(20),
            brightness_tap: Some(240),
            analog_input_count: Some(4),
            battery_adc_pin: Some(3),
            oled: Some(OledConfig {
                kind: "128x128".to_owned(),
                sda_pin: -1,
                scl_pin: -1,
                cs_pin: 10,
                dc_pin: 13,
                rst_pin: 14,
                mosi_pin: 11,
                sclk_pin: 12,
                led_pin: 15,
                screens: OledScreens {
                    main: OledScreenMain {
                        top_row_y: 4,
                        title_y: 59,
                        status_y: 44,
                        bpm_y: 32,
                        bottom_row_y: 117,
                        top_row_map: "5,6,7,8".to_owned(),
                        bottom_row_map: "1,2,3,4".to_owned(),
                        show_color_strips: true,
                        status_align: 1,
                        show_battery: true,
                        battery_x: 57,
                        battery_y: 86,
                    },
                },
            }),
            global_special_actions: vec![
                GlobalSpecialAction {
                    action: MessageAction::LongPress,
                    message_type: MessageType::PresetDown,
                    channel: 1,
                    data1: 0,
                    data2: 0,
                    hold_ms: 700,
                    label: String::new(),
                    enabled: true,
                    partner: -1,
                    index: 4,
                },
                GlobalSpecialAction {
                    action: MessageAction::LongPress,
                    message_type: MessageType::PresetUp,
                    channel: 1,
                    data1: 0,
                    data2: 0,
                    hold_ms: 700,
                    label: String::new(),
                    enabled: true,
                    partner: -1,
                    index: 7,
                },
            ],
        },
        presets: vec![
            spm_stomp_preset(false),
            banks_1_8,
            banks_9_16,
            note_page(),
        ],
        current_preset: Some(0),
        preset_count: Some(4),
        analog_inputs: vec![
            AnalogInputConfig {
                index: 0,
                pin: 4,
                name: "A1".to_owned(),
                rgb: "#f59e0b".to_owned(),
                messages: vec![AnalogMessage {
                    message_type: MessageType::SysexScroll,
                    data1: Some(1),
                }],
            },
            AnalogInputConfig {
                index: 1,
                pin: 5,
                name: "A2".to_owned(),
                rgb: "#22c55e".to_owned(),
                messages: vec![AnalogMessage {
                    message_type: MessageType::SysexScroll,
                    data1: Some(2),
                }],
            },
            AnalogInputConfig {
                index: 2,
                pin: 7,
                name: "A3".to_owned(),
                rgb: "#3b82f6".to_owned(),
                messages: vec![AnalogMessage {
                    message_type: MessageType::Cc,
                    data1: Some(11),
                }],
            },
            AnalogInputConfig {
                index: 3,
                pin: 33,
                name: "A4".to_owned(),
                rgb: "#a855f7".to_owned(),
                messages: vec![AnalogMessage {
                    message_type: MessageType::Cc,
                    data1: Some(11),
                }],
            },
        ],
    }
}

fn default_8btn_spm() -> FullConfig {
    FullConfig {
        description: "Standard 8-button config for Sonicake Pocket Master".to_owned(),
        config_name: None,
        last_modified: None,
        system: SystemConfig {
            ble_device_name: "CHOCOTONE".to_owned(),
            ap_ssid: "CHOCOTONE".to_owned(),
            ap_password: "12345678".to_owned(),
            button_count: 8,
            button_pins: "14,27,26,25,33,32,16,17".to_owned(),
            led_pin: 15,
            leds_per_button: Some(1),
            led_map: "0,1,2,3,7,6,5,4,8,9".to_owned(),
            encoder_a: 18,
            encoder_b: 19,
            encoder_btn: 23,
            ble_mode: BleMode::Client,
            brightness: Some(220),
            brightness_dim: Some(20),
            brightness_tap: None,
            analog_input_count: None,
            battery_adc_pin: None,
            oled: None,
            global_special_actions: Vec::new(),
        },
        presets: vec![
            spm_stomp_preset(true),
            add_page_switching(bank_page("BANKS 1-8", 1, ["#ffffff", "#0af500"]), 4, 7),
            add_page_switching(bank_page("BANKS 9-16", 9, ["#11f3ff", "#aa00ff"]), 4, 7),
            add_page_switching(note_page(), 4, 7),
        ],
        current_preset: None,
        preset_count: None,
        analog_inputs: Vec::new(),
    }
}

/// Shared tail of the Wisut bank pages: four SPM stomp toggles plus tap
/// tempo, with combo page switching on the FX2 slot.
fn wisut_stomp_tail() -> Vec<ButtonConfig> {
    vec![
        toggle_cc_dual("FX1", 44, "#ffffff", "#3f67ff"),
        toggle_cc_dual("DRV", 45, "#ffffff", "#ff0000"),
        with_message(
            toggle_cc_dual("FX2", 49, "#ffffff", "#11f3ff"),
            combo(3, MessageType::PresetUp),
        ),
        toggle_cc_dual("DLY", 50, "#ffffff", "#332aff"),
        tap_tempo("TAP", "#ffffff"),
    ]
}

fn wisut_bank_page(name: &str, first_program: u8, labels: [&str; 5]) -> PresetConfig {
    let mut buttons: Vec<ButtonConfig> = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let rgb = if i == 4 { "#0af500" } else { "#ffffff" };
            program_select(label, first_program + i as u8, rgb)
        })
        .collect();
    buttons[4]
        .messages
        .push(combo(0, MessageType::PresetDown));
    buttons.extend(wisut_stomp_tail());
    PresetConfig {
        name: name.to_owned(),
        preset_led_mode: Some(LedMode::Selection),
        sync_mode: None,
        buttons,
    }
}

fn wisut_gp5_page() -> PresetConfig {
    let patch_button = |name: &str, patch: usize, rgb: &str| {
        button(
            name,
            LedMode::Momentary,
            vec![sysex_message(
                MessageAction::Press,
                0,
                0,
                rgb,
                GP5_PATCH_SELECT[patch],
            )],
        )
    };
    let effect_toggle = |name: &str, rgb: &str, on: &str, off: &str| {
        button(
            name,
            LedMode::Toggle,
            vec![
                sysex_message(MessageAction::Press, 0, 0, rgb, on),
                sysex_message(MessageAction::SecondPress, 0, 0, rgb, off),
            ],
        )
    };
    PresetConfig {
        name: "GP5".to_owned(),
        preset_led_mode: Some(LedMode::Selection),
        sync_mode: None,
        buttons: vec![
            patch_button("T1", 0, "#ffffff"),
            patch_button("T2", 1, "#ffffff"),
            patch_button("T3", 2, "#ffffff"),
            patch_button("T4", 3, "#ffffff"),
            with_message(
                patch_button("T5", 4, "#0af500"),
                combo(0, MessageType::PresetDown),
            ),
            effect_toggle("PRE", "#888888", GP5_PRE_ON, GP5_PRE_OFF),
            effect_toggle("DST", "#fc2c00", GP5_DST_ON, GP5_DST_OFF),
            with_message(
                effect_toggle("MOD", "#ff00ff", GP5_MOD_ON, GP5_MOD_OFF),
                combo(3, MessageType::PresetUp),
            ),
            effect_toggle("DLY", "#332aff", GP5_DLY_ON, GP5_DLY_OFF),
            tap_tempo("TAP", "#ffffff"),
        ],
    }
}

fn wisut_note_page() -> PresetConfig {
    let mut buttons: Vec<ButtonConfig> = Vec::with_capacity(10);
    let names = ["1st", "2nd", "3rd", "4th", "5th", "6th", "7th", "8up", "9th"];
    for (i, name) in names.iter().enumerate() {
        buttons.push(program_select(name, 40 + i as u8, "#fd0000"));
    }
    buttons.push(program_select("OCT", 52, "#ffff00"));
    buttons[4]
        .messages
        .push(combo(0, MessageType::PresetDown));
    buttons[5]
        .messages
        .push(combo(6, MessageType::WifiToggle));
    buttons[7]
        .messages
        .push(combo(3, MessageType::PresetUp));
    PresetConfig {
        name: "Note".to_owned(),
        preset_led_mode: Some(LedMode::Selection),
        sync_mode: None,
        buttons,
    }
}

fn wisut_10btn_spm() -> FullConfig {
    FullConfig {
        description: "10-button config for Sonicake Pocket Master".to_owned(),
        config_name: None,
        last_modified: None,
        system: SystemConfig {
            ble_device_name: "CHOCOTONE".to_owned(),
            ap_ssid: "CHOCOTONE".to_owned(),
            ap_password: "12345678".to_owned(),
            button_count: 10,
            button_pins: "14,27,26,25,33,32,16,17,4,2".to_owned(),
            led_pin: 15,
            leds_per_button: Some(1),
            led_map: "0,1,2,3,4,9,8,7,6,5".to_owned(),
            encoder_a: 18,
            encoder_b: 19,
            encoder_btn: 23,
            ble_mode: BleMode::Client,
            brightness: None,
            brightness_dim: None,
            brightness_tap: None,
            analog_input_count: None,
            battery_adc_pin: None,
            oled: None,
            global_special_actions: Vec::new(),
        },
        presets: vec![
            wisut_bank_page("BANK 1", 1, ["P1", "P2", "P3", "P4", "P5"]),
            wisut_bank_page("BANK 2", 6, ["P6", "P7", "P8", "P9", "P10"]),
            wisut_gp5_page(),
            wisut_note_page(),
        ],
        current_preset: None,
        preset_count: None,
        analog_inputs: Vec::new(),
    }
}

fn gp5_wisut_bank1() -> PresetConfig {
    let patch_button = |name: &str, patch: usize, rgb: &str, jump: Option<MessageType>| {
        let mut btn = in_selection(button(
            name,
            LedMode::Momentary,
            vec![sysex_message(
                MessageAction::Press,
                0,
                patch as u8,
                rgb,
                GP5_PATCH_SELECT[patch],
            )],
        ));
        if let Some(slot) = jump {
            btn = with_message(btn, preset_jump(slot, "#bb86fc"));
        }
        btn
    };
    let effect_toggle = |name: &str, shadow_cc: u8, rgb: &str, on: &str, off: &str| {
        button(
            name,
            LedMode::Toggle,
            vec![
                sysex_message(MessageAction::Press, shadow_cc, 127, rgb, on),
                sysex_message(MessageAction::SecondPress, shadow_cc, 0, rgb, off),
            ],
        )
    };
    PresetConfig {
        name: "BANK-1".to_owned(),
        preset_led_mode: Some(LedMode::Hybrid),
        sync_mode: Some(SyncMode::Gp5),
        buttons: vec![
            patch_button("P1", 1, "#01becb", Some(MessageType::Preset1)),
            patch_button("P2", 2, "#4bca07", Some(MessageType::Preset2)),
            patch_button("P3", 3, "#3d00ad", Some(MessageType::Preset3)),
            patch_button("P4", 4, "#dc04a2", Some(MessageType::Preset4)),
            patch_button("P5", 5, "#f50000", None),
            effect_toggle("BOOT", 49, "#abe60a", GP5_PRE_ON, GP5_PRE_OFF),
            effect_toggle("OD", 50, "#e6740a", GP5_DST_ON, GP5_DST_OFF),
            effect_toggle("MODU", 55, "#8400f7", GP5_MOD_ON, GP5_MOD_OFF),
            effect_toggle("DELY", 56, "#0923ec", GP5_DLY_ON, GP5_DLY_OFF),
            tap_tempo("TAP", "#26c3f7"),
        ],
    }
}

fn gp5_wisut_bank2() -> PresetConfig {
    let select = |name: &str, value: u8, rgb: &str, jump: Option<MessageType>| {
        let mut btn = in_selection(button(
            name,
            LedMode::Momentary,
            vec![cc_message(MessageAction::Press, 0, value, rgb)],
        ));
        if let Some(slot) = jump {
            btn = with_message(btn, preset_jump(slot, "#bb86fc"));
        }
        btn
    };
    let mut p10 = select("P10", 10, "#f50000", None);
    p10.in_selection_group = false;
    PresetConfig {
        name: "BANK-2".to_owned(),
        preset_led_mode: Some(LedMode::Hybrid),
        sync_mode: Some(SyncMode::Gp5),
        buttons: vec![
            select("P6", 6, "#01d7f4", Some(MessageType::Preset1)),
            select("P7", 7, "#270ced", Some(MessageType::Preset2)),
            select("P8", 8, "#14f518", Some(MessageType::Preset3)),
            select("P9", 9, "#e18e19", Some(MessageType::Preset4)),
            p10,
            toggle_cc("BOOT", 49, "#87f500"),
            toggle_cc("OD", 50, "#f54900"),
            toggle_cc("MODU", 55, "#f500ed"),
            toggle_cc("DELY", 56, "#1a40ff"),
            tap_tempo("TAP", "#02f2e2"),
        ],
    }
}

fn gp5_wisut_bank3() -> PresetConfig {
    let select = |name: &str, value: u8, rgb: &str, jump: Option<MessageType>| {
        let mut btn = in_selection(button(
            name,
            LedMode::Momentary,
            vec![cc_message(MessageAction::Press, 1, value, rgb)],
        ));
        if let Some(slot) = jump {
            btn = with_message(btn, preset_jump(slot, "#bb86fc"));
        }
        btn
    };
    let single = |name: &str, value: u8| {
        button(
            name,
            LedMode::Toggle,
            vec![cc_message(MessageAction::Press, 1, value, "#aa00ff")],
        )
    };
    PresetConfig {
        name: "BANK-3".to_owned(),
        preset_led_mode: Some(LedMode::Hybrid),
        sync_mode: Some(SyncMode::Gp5),
        buttons: vec![
            select("P11", 9, "#11f3ff", Some(MessageType::Preset1)),
            select("P12", 10, "#11f3ff", Some(MessageType::Preset2)),
            select("P13", 11, "#11f3ff", Some(MessageType::Preset3)),
            select("P14", 12, "#11f3ff", Some(MessageType::Preset4)),
            select("P15", 13, "#aa00ff", None),
            single("BOOT", 14),
            single("OD", 15),
            single("MODU", 16),
            button("DELY", LedMode::Toggle, Vec::new()),
            button("TAP", LedMode::Momentary, Vec::new()),
        ],
    }
}

fn gp5_wisut_bank4() -> PresetConfig {
    let note = |name: &str, pitch: u8, jump: Option<MessageType>| {
        let mut btn = in_selection(note_button(name, pitch, "#fd0000"));
        if let Some(slot) = jump {
            btn = with_message(btn, preset_jump(slot, "#bb86fc"));
        }
        btn
    };
    let plain_note = |name: &str, pitch: u8, led_mode: LedMode| {
        let mut btn = note_button(name, pitch, "#fd0000");
        btn.led_mode = Some(led_mode);
        btn
    };
    PresetConfig {
        name: "BANK-4".to_owned(),
        preset_led_mode: Some(LedMode::Hybrid),
        sync_mode: Some(SyncMode::Gp5),
        buttons: vec![
            note("P16", 60, Some(MessageType::Preset1)),
            note("P17", 62, Some(MessageType::Preset2)),
            note("P18", 64, Some(MessageType::Preset3)),
            note("P19", 65, Some(MessageType::Preset4)),
            note("P20", 67, None),
            plain_note("BOOT", 69, LedMode::Toggle),
            plain_note("OD", 71, LedMode::Toggle),
            plain_note("MODU", 72, LedMode::Toggle),
            button("DELY", LedMode::Toggle, Vec::new()),
            button("TAP", LedMode::Momentary, Vec::new()),
        ],
    }
}

fn gp5_wisut_profile() -> FullConfig {
    FullConfig {
        description: "10-button config for Valeton GP-5 with hybrid preset/stomp banks".to_owned(),
        config_name: None,
        last_modified: None,
        system: SystemConfig {
            ble_device_name: "CHOCOTONE".to_owned(),
            ap_ssid: "CHOCOTONE".to_owned(),
            ap_password: "12345678".to_owned(),
            button_count: 10,
            button_pins: "14,27,26,25,33,32,16,17".to_owned(),
            led_pin: 15,
            leds_per_button: Some(1),
            led_map: "0,1,2,3,7,6,5,4,8,9".to_owned(),
            encoder_a: 18,
            encoder_b: 19,
            encoder_btn: 23,
            ble_mode: BleMode::Client,
            brightness: Some(70),
            brightness_dim: Some(10),
            brightness_tap: Some(70),
            analog_input_count: None,
            battery_adc_pin: None,
            oled: None,
            global_special_actions: Vec::new(),
        },
        presets: vec![
            gp5_wisut_bank1(),
            gp5_wisut_bank2(),
            gp5_wisut_bank3(),
            gp5_wisut_bank4(),
        ],
        current_preset: None,
        preset_count: None,
        analog_inputs: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_factory_configs_are_listed() {
        let names: Vec<_> = full_config_names().collect();
        assert_eq!(
            vec![
                "ESP32-S3 Default (8-btn)",
                "Default (8-btn SPM)",
                "Wisut (10-btn SPM)",
                "GP5 Wisut Profile",
            ],
            names
        );
    }

    #[test]
    fn unknown_config_name_is_none() {
        assert!(full_config_by_name("No Such Config").is_none());
    }

    #[test]
    fn button_counts_match_the_declared_hardware() {
        for name in full_config_names() {
            let config = full_config_by_name(name).unwrap();
            for preset in &config.presets {
                assert_eq!(
                    usize::from(config.system.button_count),
                    preset.buttons.len(),
                    "{name}: {}",
                    preset.name
                );
            }
        }
    }

    #[test]
    fn every_config_has_four_preset_pages() {
        for name in full_config_names() {
            let config = full_config_by_name(name).unwrap();
            assert_eq!(4, config.presets.len(), "{name}");
        }
    }

    #[test]
    fn esp32_s3_profile_declares_analog_inputs_and_oled() {
        let config = full_config_by_name("ESP32-S3 Default (8-btn)").unwrap();
        assert_eq!(Some(4), config.system.analog_input_count);
        assert_eq!(4, config.analog_inputs.len());
        let oled = config.system.oled.as_ref().unwrap();
        assert_eq!("128x128", oled.kind);
        assert_eq!(2, config.system.global_special_actions.len());
    }

    #[test]
    fn sysex_payloads_in_presets_are_framed() {
        for name in full_config_names() {
            let config = full_config_by_name(name).unwrap();
            for preset in &config.presets {
                for button in &preset.buttons {
                    for message in &button.messages {
                        if let Some(sysex) = &message.sysex {
                            assert!(sysex.starts_with("f0"), "{name}: {}", button.name);
                            assert!(sysex.ends_with("f7"), "{name}: {}", button.name);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn stomp_page_toggles_pair_press_with_second_press() {
        let config = full_config_by_name("Default (8-btn SPM)").unwrap();
        let stomp = &config.presets[0];
        let nr = &stomp.buttons[0];
        assert_eq!("NR", nr.name);
        assert_eq!(MessageAction::Press, nr.messages[0].action);
        assert_eq!(Some(127), nr.messages[0].data2);
        assert_eq!(MessageAction::SecondPress, nr.messages[1].action);
        assert_eq!(Some(0), nr.messages[1].data2);
    }
}
