//! Derived AVD settings
//!
//! Values computed from a system image's `build.prop`.

use serde::{Deserialize, Serialize};

use crate::property_file::{PropertyFile, SearchResult};

/// Property holding the platform API level
pub const API_LEVEL_KEY: &str = "ro.build.version.sdk";

/// Property overriding the adbd channel selection
pub const ADB_QEMUD_KEY: &str = "ro.adb.qemud";

/// API level assumed when the image does not declare one
pub const API_LEVEL_UNSPECIFIED: i32 = 10000;

/// API level assumed when the declared one is unreadable
pub const API_LEVEL_MINIMUM: i32 = 3;

/// First API level whose adbd can talk over the qemud pipe
pub const QEMUD_MIN_API_LEVEL: i32 = 16;

/// API level of the image.
///
/// An absent key means a recent, unannotated image; a malformed one means
/// a broken or very old image.
pub fn api_level(props: &PropertyFile) -> i32 {
    let field = props.get_int(API_LEVEL_KEY, API_LEVEL_UNSPECIFIED);
    match field.result {
        SearchResult::Invalid => API_LEVEL_MINIMUM,
        SearchResult::Found | SearchResult::NotFound => field.value,
    }
}

/// Raw adbd communication mode: 1 for the qemud pipe, 0 for legacy.
///
/// Values of `ro.adb.qemud` other than 0 and 1 are returned as-is.
pub fn adbd_communication_mode(props: &PropertyFile) -> i32 {
    if api_level(props) < QEMUD_MIN_API_LEVEL {
        return 0;
    }
    props.get_int_or(ADB_QEMUD_KEY, 1)
}

/// Channel used by adbd inside the guest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdbdCommunicationMode {
    /// TCP forwarding over the emulated network
    Legacy,
    /// qemud pipe
    Qemud,
}

impl AdbdCommunicationMode {
    pub fn from_raw(mode: i32) -> Self {
        if mode == 0 {
            AdbdCommunicationMode::Legacy
        } else {
            AdbdCommunicationMode::Qemud
        }
    }

    pub fn for_properties(props: &PropertyFile) -> Self {
        Self::from_raw(adbd_communication_mode(props))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AdbdCommunicationMode::Legacy => "legacy",
            AdbdCommunicationMode::Qemud => "qemud",
        }
    }
}
