//! Application Configuration
//!
//! Settings for locating Android SDK and AVD directories, plus logging.
//! Stored as TOML in the platform config directory.

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use directories::ProjectDirs;
use tracing::{info, debug};

use crate::error::{AvdInfoError, Result};

/// Android SDK configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AndroidConfig {
    /// Path to Android SDK; falls back to `ANDROID_SDK_ROOT` / `ANDROID_HOME`
    pub sdk_path: Option<PathBuf>,
    /// AVD directory; falls back to `ANDROID_AVD_HOME` / `~/.android/avd`
    pub avd_home: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Android SDK settings
    pub android: AndroidConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Get the configuration directory path
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "rdroid", "avdinfo")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the configuration file path
    pub fn config_file() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Load configuration from the default location.
    ///
    /// A missing file yields defaults; nothing is written back.
    pub async fn load() -> Result<Self> {
        let config_file = Self::config_file()
            .ok_or_else(|| AvdInfoError::Config("Cannot determine config path".into()))?;

        if config_file.exists() {
            Self::load_from(&config_file).await
        } else {
            info!("Config file not found, using defaults");
            Ok(AppConfig::default())
        }
    }

    /// Load configuration from an explicit path
    pub async fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(AvdInfoError::NotFound(path.display().to_string()));
        }

        debug!("Loading config from {:?}", path);
        let contents = tokio::fs::read_to_string(path).await?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Save configuration to file
    pub async fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let contents = toml::to_string_pretty(self)?;
        tokio::fs::write(path, contents).await?;

        debug!("Config saved to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.logging.level, "info");
        assert!(config.android.sdk_path.is_none());
        assert!(config.android.avd_home.is_none());
    }

    #[test]
    fn test_partial_toml() {
        let config = AppConfig::from_toml("[android]\nsdk_path = \"/opt/android-sdk\"\n").unwrap();
        assert_eq!(config.android.sdk_path, Some(PathBuf::from("/opt/android-sdk")));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_malformed_toml() {
        let err = AppConfig::from_toml("[android\n").unwrap_err();
        assert!(matches!(err, AvdInfoError::TomlParse(_)));
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.android.avd_home = Some(PathBuf::from("/tmp/avd"));
        config.logging.level = "debug".to_string();
        config.save_to(&path).await.unwrap();

        let loaded = AppConfig::load_from(&path).await.unwrap();
        assert_eq!(loaded, config);
    }

    #[tokio::test]
    async fn test_load_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load_from(dir.path().join("absent.toml")).await.unwrap_err();
        assert!(matches!(err, AvdInfoError::NotFound(_)));
    }
}
