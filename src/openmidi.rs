// SPDX-FileCopyrightText: The pedalio authors
// SPDX-License-Identifier: MPL-2.0

use crate::{device::DeviceProfile, devices};

/// Raw-data root of the upstream OpenMIDI device database.
pub const OPENMIDI_BASE_URL: &str =
    "https://raw.githubusercontent.com/Morningstar-Engineering/openmidi/main/data/brands";

/// Placeholder for a future online refresh of the device profiles.
///
/// Resolves immediately with the bundled data; no request is issued and
/// no executor is required.
pub async fn try_update_from_openmidi() -> &'static [&'static DeviceProfile] {
    log::info!("Using bundled device database");
    devices::DEVICE_PROFILES
}
