// SPDX-FileCopyrightText: The pedalio authors
// SPDX-License-Identifier: MPL-2.0

//! Complete controller configuration trees.
//!
//! This is the JSON interchange format of the editor: hardware pin
//! assignments, display geometry and identity in [`SystemConfig`], plus
//! the ordered button-layout pages in [`PresetConfig`]. Field names
//! follow the firmware's camelCase JSON keys.

use serde::{Deserialize, Serialize};

mod bundled;
pub use self::bundled::{full_config_by_name, full_config_names};

/// Trigger that fires a button message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageAction {
    #[serde(rename = "PRESS")]
    Press,
    /// Alternate press of a toggling button.
    #[serde(rename = "2ND_PRESS")]
    SecondPress,
    #[serde(rename = "LONG_PRESS")]
    LongPress,
    /// Pressed together with the partner button.
    #[serde(rename = "COMBO")]
    Combo,
}

/// Payload carried by a button message, the firmware's command set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageType {
    #[serde(rename = "OFF")]
    Off,
    #[serde(rename = "NOTE_MOMENTARY")]
    NoteMomentary,
    #[serde(rename = "NOTE_ON")]
    NoteOn,
    #[serde(rename = "NOTE_OFF")]
    NoteOff,
    #[serde(rename = "CC")]
    Cc,
    #[serde(rename = "PC")]
    Pc,
    #[serde(rename = "SYSEX")]
    Sysex,
    #[serde(rename = "TAP_TEMPO")]
    TapTempo,
    #[serde(rename = "PRESET_UP")]
    PresetUp,
    #[serde(rename = "PRESET_DOWN")]
    PresetDown,
    #[serde(rename = "PRESET_1")]
    Preset1,
    #[serde(rename = "PRESET_2")]
    Preset2,
    #[serde(rename = "PRESET_3")]
    Preset3,
    #[serde(rename = "PRESET_4")]
    Preset4,
    #[serde(rename = "CLEAR_BLE_BONDS")]
    ClearBleBonds,
    #[serde(rename = "WIFI_TOGGLE")]
    WifiToggle,
    #[serde(rename = "SYSEX_SCROLL")]
    SysexScroll,
}

/// LED behavior of a button or a whole preset page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedMode {
    #[serde(rename = "NORMAL")]
    Normal,
    #[serde(rename = "TOGGLE")]
    Toggle,
    #[serde(rename = "MOMENTARY")]
    Momentary,
    #[serde(rename = "SELECTION")]
    Selection,
    #[serde(rename = "HYBRID")]
    Hybrid,
}

/// Device the preset page keeps its LED state in sync with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SyncMode {
    #[serde(rename = "SPM")]
    Spm,
    #[serde(rename = "GP5")]
    Gp5,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BleMode {
    #[serde(rename = "CLIENT")]
    Client,
    #[serde(rename = "SERVER")]
    Server,
    #[serde(rename = "DUAL")]
    Dual,
}

/// One action-to-payload binding of a button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonMessage {
    pub action: MessageAction,
    #[serde(rename = "type")]
    pub message_type: MessageType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data1: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data2: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rgb: Option<String>,
    /// Raw SysEx payload (hex, framed `f0…f7`) for `SYSEX` messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sysex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hold_ms: Option<u16>,
    /// Partner button index for `COMBO` actions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner: Option<i8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rhythm_prev: Option<i8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rhythm_next: Option<i8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tap_lock: Option<i8>,
}

impl ButtonMessage {
    /// Message with only the trigger and payload type set.
    #[must_use]
    pub fn new(action: MessageAction, message_type: MessageType) -> Self {
        Self {
            action,
            message_type,
            channel: None,
            data1: None,
            data2: None,
            rgb: None,
            sysex: None,
            hold_ms: None,
            partner: None,
            label: None,
            rhythm_prev: None,
            rhythm_next: None,
            tap_lock: None,
        }
    }
}

/// Preset-independent action bound to a button, e.g. long-press preset
/// switching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalSpecialAction {
    pub action: MessageAction,
    #[serde(rename = "type")]
    pub message_type: MessageType,
    pub channel: u8,
    pub data1: u8,
    pub data2: u8,
    pub hold_ms: u16,
    #[serde(default)]
    pub label: String,
    pub enabled: bool,
    pub partner: i8,
    /// Button the action is attached to.
    pub index: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub led_mode: Option<LedMode>,
    #[serde(default)]
    pub in_selection_group: bool,
    #[serde(default)]
    pub messages: Vec<ButtonMessage>,
}

/// One button-layout page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset_led_mode: Option<LedMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_mode: Option<SyncMode>,
    pub buttons: Vec<ButtonConfig>,
}

/// Main screen layout of the OLED.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OledScreenMain {
    pub top_row_y: u8,
    pub title_y: u8,
    pub status_y: u8,
    pub bpm_y: u8,
    pub bottom_row_y: u8,
    pub top_row_map: String,
    pub bottom_row_map: String,
    pub show_color_strips: bool,
    pub status_align: u8,
    pub show_battery: bool,
    pub battery_x: u8,
    pub battery_y: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OledScreens {
    pub main: OledScreenMain,
}

/// OLED wiring and geometry. Pins may be `-1` for "not connected".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OledConfig {
    #[serde(rename = "type")]
    pub kind: String,
    pub sda_pin: i16,
    pub scl_pin: i16,
    pub cs_pin: i16,
    pub dc_pin: i16,
    pub rst_pin: i16,
    pub mosi_pin: i16,
    pub sclk_pin: i16,
    pub led_pin: i16,
    pub screens: OledScreens,
}

/// Hardware identity and wiring of the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemConfig {
    pub ble_device_name: String,
    #[serde(rename = "apSSID")]
    pub ap_ssid: String,
    pub ap_password: String,
    pub button_count: u8,
    /// Comma-separated GPIO list, one pin per button.
    pub button_pins: String,
    pub led_pin: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leds_per_button: Option<u8>,
    /// Comma-separated button-to-LED index mapping.
    pub led_map: String,
    pub encoder_a: u8,
    pub encoder_b: u8,
    pub encoder_btn: u8,
    pub ble_mode: BleMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brightness: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brightness_dim: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brightness_tap: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analog_input_count: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery_adc_pin: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oled: Option<OledConfig>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub global_special_actions: Vec<GlobalSpecialAction>,
}

/// Message sent by an analog input; no trigger, the input is continuous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalogMessage {
    #[serde(rename = "type")]
    pub message_type: MessageType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data1: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalogInputConfig {
    pub index: u8,
    pub pin: u8,
    pub name: String,
    pub rgb: String,
    pub messages: Vec<AnalogMessage>,
}

/// A complete device profile: system settings plus preset pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullConfig {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    pub system: SystemConfig,
    pub presets: Vec<PresetConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_preset: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset_count: Option<u8>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub analog_inputs: Vec<AnalogInputConfig>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_message_uses_the_firmware_json_keys() {
        let message = ButtonMessage {
            channel: Some(1),
            data1: Some(43),
            data2: Some(127),
            rgb: Some("#ffffff".to_owned()),
            hold_ms: Some(700),
            ..ButtonMessage::new(MessageAction::Press, MessageType::Cc)
        };
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!("PRESS", json["action"]);
        assert_eq!("CC", json["type"]);
        assert_eq!(43, json["data1"]);
        assert_eq!(700, json["holdMs"]);
        // Unset optionals are omitted entirely.
        assert!(json.get("sysex").is_none());
        assert!(json.get("rhythmPrev").is_none());
    }

    #[test]
    fn second_press_round_trips_through_its_wire_tag() {
        let message = ButtonMessage::new(MessageAction::SecondPress, MessageType::Cc);
        let json = serde_json::to_string(&message).unwrap();
        assert!(json.contains("\"2ND_PRESS\""));
        let parsed: ButtonMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(message, parsed);
    }

    #[test]
    fn system_config_preserves_the_ap_ssid_key() {
        let config = full_config_by_name("Default (8-btn SPM)").unwrap();
        let json = serde_json::to_value(&config.system).unwrap();
        assert_eq!("CHOCOTONE", json["apSSID"]);
        assert_eq!("CLIENT", json["bleMode"]);
        assert!(json["buttonPins"].is_string());
    }

    #[test]
    fn full_config_round_trips() {
        let config = full_config_by_name("ESP32-S3 Default (8-btn)").unwrap();
        let json = serde_json::to_string(config).unwrap();
        let parsed: FullConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(*config, parsed);
    }
}
