//! avdinfo - Android Virtual Device property reader
//!
//! Reads the flat `key=value` property files that describe an AVD and its
//! system image, and derives the settings the emulator picks from them:
//!
//! - **API level** from `ro.build.version.sdk`, with separate fallbacks for
//!   missing and malformed values
//! - **adbd communication mode**, gated on the API level and overridable
//!   with `ro.adb.qemud`
//! - **Backend suffix** for the target CPU architecture
//!
//! ## Architecture
//!
//! - `avdinfo-core`: errors and configuration
//! - `avdinfo-emulator-bridge`: property file parsing and derived settings

#![warn(clippy::all)]

pub mod commands;

pub use avdinfo_core as core;
pub use avdinfo_emulator_bridge as emulator;

/// Prelude module for convenient imports
pub mod prelude {
    pub use avdinfo_core::AppConfig;
    pub use avdinfo_emulator_bridge::{
        adbd_communication_mode, api_level, backend_suffix, AvdLocator, FileData, IntField,
        PropertyFile, SearchResult,
    };
}
