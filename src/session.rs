// SPDX-FileCopyrightText: The pedalio authors
// SPDX-License-Identifier: MPL-2.0

use crate::{
    control::{ButtonTemplate, CcDefinition},
    device::DeviceProfile,
    devices,
    prefs::{PreferenceStore, PrefsError},
};

/// Storage key for the selected target device.
pub const TARGET_DEVICE_KEY: &str = "target_device";

/// Device selected on first start.
pub const DEFAULT_DEVICE_NAME: &str = "Sonicake Pocket Master";

/// Editor-side device selection.
///
/// The selection is an explicit value passed to the accessors instead of
/// process-wide state, so concurrent editor sessions and tests stay
/// independent of each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSession {
    device_name: String,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self {
            device_name: DEFAULT_DEVICE_NAME.to_owned(),
        }
    }
}

impl EditorSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores the device selection from `store`.
    ///
    /// Only names of bundled devices are adopted. Unknown names and
    /// storage errors keep the default selection.
    #[must_use]
    pub fn restore(store: &dyn PreferenceStore) -> Self {
        let mut session = Self::default();
        match store.get(TARGET_DEVICE_KEY) {
            Ok(Some(name)) => {
                if devices::device_names().any(|known| known == name) {
                    session.device_name = name;
                }
            }
            Ok(None) => (),
            Err(err) => {
                log::warn!("Failed to restore the device selection: {err}");
            }
        }
        session
    }

    /// Name the session was switched to, which is not necessarily the
    /// name of a bundled device.
    #[must_use]
    pub fn device_name(&self) -> &str {
        &self.device_name
    }

    /// Switches the selected device and persists the choice in `store`.
    ///
    /// The in-memory switch always takes effect. The returned error only
    /// reports that persisting the choice failed, callers may log or
    /// ignore it.
    pub fn select_device(
        &mut self,
        name: impl Into<String>,
        store: &dyn PreferenceStore,
    ) -> Result<(), PrefsError> {
        self.device_name = name.into();
        store.set(TARGET_DEVICE_KEY, &self.device_name)
    }

    /// Profile of the selected device, falling back to the generic
    /// profile for unknown names.
    #[must_use]
    pub fn device(&self) -> &'static DeviceProfile {
        devices::device_by_name(&self.device_name)
    }

    pub fn ccs(&self) -> impl Iterator<Item = &'static CcDefinition> {
        self.device().flattened_cc()
    }

    #[must_use]
    pub fn cc_by_value(&self, value: u8) -> Option<&'static CcDefinition> {
        self.device().cc_by_value(value)
    }

    #[must_use]
    pub fn cc_label(&self, value: u8) -> String {
        self.device().cc_label(value)
    }

    #[must_use]
    pub fn templates(&self) -> &'static [ButtonTemplate] {
        self.device().templates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::MemoryStore;

    #[test]
    fn default_session_selects_the_default_device() {
        let session = EditorSession::new();
        assert_eq!(DEFAULT_DEVICE_NAME, session.device_name());
        assert_eq!(DEFAULT_DEVICE_NAME, session.device().name);
    }

    #[test]
    fn selection_persists_across_sessions() {
        let store = MemoryStore::new();
        let mut session = EditorSession::new();
        session.select_device("Valeton GP-5", &store).unwrap();

        // A fresh session simulates a restarted editor process.
        let restored = EditorSession::restore(&store);
        assert_eq!("Valeton GP-5", restored.device_name());
    }

    #[test]
    fn unknown_persisted_name_keeps_the_default() {
        let store = MemoryStore::new();
        let mut session = EditorSession::new();
        session.select_device("No Such Device", &store).unwrap();
        assert_eq!("No Such Device", session.device_name());
        // The unknown name still resolves to the generic fallback.
        assert_eq!("Generic MIDI Device", session.device().name);

        let restored = EditorSession::restore(&store);
        assert_eq!(DEFAULT_DEVICE_NAME, restored.device_name());
    }

    #[test]
    fn empty_store_keeps_the_default() {
        let store = MemoryStore::new();
        let restored = EditorSession::restore(&store);
        assert_eq!(DEFAULT_DEVICE_NAME, restored.device_name());
    }

    #[test]
    fn sessions_do_not_share_state() {
        let store = MemoryStore::new();
        let mut first = EditorSession::new();
        let second = EditorSession::new();
        first.select_device("Valeton GP-5", &store).unwrap();
        assert_eq!(DEFAULT_DEVICE_NAME, second.device_name());
    }
}
