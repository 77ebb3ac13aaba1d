//! Android Emulator Bridge
//!
//! Reads Android Virtual Device property files and derives the settings
//! the emulator needs from them.

pub mod avd;
pub mod backend;
pub mod file_data;
pub mod policy;
pub mod property_file;

pub use avd::{AvdError, AvdInfo, AvdLocator};
pub use backend::{backend_program_name, backend_suffix, supported_architectures};
pub use file_data::FileData;
pub use policy::{adbd_communication_mode, api_level, AdbdCommunicationMode};
pub use property_file::{IntField, PropertyFile, SearchResult};
