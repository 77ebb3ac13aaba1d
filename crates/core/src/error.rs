//! Error types for avdinfo
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// Main error type for avdinfo
#[derive(Error, Debug)]
pub enum AvdInfoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type alias for avdinfo operations
pub type Result<T> = std::result::Result<T, AvdInfoError>;

impl AvdInfoError {
    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            AvdInfoError::Io(e) => format!("File operation failed: {}", e),
            AvdInfoError::Config(msg) => format!("Configuration error: {}", msg),
            AvdInfoError::TomlParse(e) => format!("Configuration file is malformed: {}", e),
            AvdInfoError::NotFound(msg) => format!("Not found: {}", msg),
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message() {
        let err = AvdInfoError::NotFound("config.toml".into());
        assert_eq!(err.user_message(), "Not found: config.toml");

        let err = AvdInfoError::Config("no home directory".into());
        assert_eq!(err.to_string(), "Configuration error: no home directory");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: AvdInfoError = io.into();
        assert!(matches!(err, AvdInfoError::Io(_)));
    }
}
