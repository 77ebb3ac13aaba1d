//! AVD (Android Virtual Device) Locator
//!
//! Finds AVDs on disk and reads the settings the emulator derives from
//! their property files. Nothing here modifies an AVD.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use serde::Serialize;
use tracing::{info, debug, warn};

use avdinfo_core::AppConfig;

use crate::backend::backend_suffix;
use crate::file_data::FileData;
use crate::policy::{adbd_communication_mode, api_level};
use crate::property_file::PropertyFile;

/// Architecture assumed when `hw.cpu.arch` is missing
pub const DEFAULT_TARGET_ARCH: &str = "arm";

/// AVD errors
#[derive(Debug, thiserror::Error)]
pub enum AvdError {
    #[error("AVD not found: {0}")]
    NotFound(String),
    #[error("Cannot determine AVD home directory")]
    HomeNotFound,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Settings read from an AVD and its system image
#[derive(Debug, Clone, Serialize)]
pub struct AvdInfo {
    pub name: String,
    /// AVD content directory (`<name>.avd`)
    pub path: PathBuf,
    /// `hw.cpu.arch`
    pub target_arch: String,
    /// `abi.type`
    pub abi: Option<String>,
    /// Resolved `image.sysdir.1`
    pub system_image_dir: Option<PathBuf>,
    pub api_level: i32,
    pub adbd_communication_mode: i32,
    pub backend_suffix: Option<String>,
}

/// Locates AVDs under an AVD home directory
#[derive(Debug, Clone)]
pub struct AvdLocator {
    avd_home: PathBuf,
    sdk_root: Option<PathBuf>,
}

impl AvdLocator {
    pub fn new(avd_home: PathBuf, sdk_root: Option<PathBuf>) -> Self {
        Self { avd_home, sdk_root }
    }

    /// Resolve directories from config, then the standard environment
    /// variables, then the home directory.
    pub fn from_config(config: &AppConfig) -> Result<Self, AvdError> {
        let avd_home = match config.android.avd_home.clone() {
            Some(path) => path,
            None => env_path("ANDROID_AVD_HOME")
                .or_else(|| dirs::home_dir().map(|h| h.join(".android").join("avd")))
                .ok_or(AvdError::HomeNotFound)?,
        };

        let sdk_root = config.android.sdk_path.clone()
            .or_else(|| env_path("ANDROID_SDK_ROOT"))
            .or_else(|| env_path("ANDROID_HOME"));

        debug!("AVD home {:?}, SDK root {:?}", avd_home, sdk_root);
        Ok(Self::new(avd_home, sdk_root))
    }

    pub fn avd_home(&self) -> &Path {
        &self.avd_home
    }

    pub fn sdk_root(&self) -> Option<&Path> {
        self.sdk_root.as_deref()
    }

    /// Names of all AVDs, sorted
    pub async fn list(&self) -> Result<Vec<String>, AvdError> {
        let mut names = Vec::new();

        if !self.avd_home.exists() {
            return Ok(names);
        }

        let mut entries = tokio::fs::read_dir(&self.avd_home).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().map(|e| e == "ini").unwrap_or(false) {
                if let Some(name) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(name.to_string());
                }
            }
        }

        names.sort();
        Ok(names)
    }

    /// Content directory of AVD `name`, from the `path` key of `<name>.ini`
    pub async fn content_path(&self, name: &str) -> Result<PathBuf, AvdError> {
        let ini_path = self.avd_home.join(format!("{}.ini", name));
        let ini = match FileData::from_file(&ini_path).await {
            Ok(data) => PropertyFile::from(&data),
            Err(AvdError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                return Err(AvdError::NotFound(name.to_string()));
            }
            Err(e) => return Err(e),
        };
        match ini.get("path").filter(|p| !p.is_empty()) {
            Some(path) => Ok(PathBuf::from(path)),
            None => Ok(self.avd_home.join(format!("{}.avd", name))),
        }
    }

    /// Read the AVD's `config.ini` and its image's `build.prop`
    pub async fn inspect(&self, name: &str) -> Result<AvdInfo, AvdError> {
        let path = self.content_path(name).await?;
        info!("Inspecting AVD {} at {:?}", name, path);

        let config = match read_optional(&path.join("config.ini")).await {
            Some(config) => config,
            None => {
                warn!("AVD {} has no config.ini", name);
                PropertyFile::default()
            }
        };

        let target_arch = config.get("hw.cpu.arch")
            .filter(|a| !a.is_empty())
            .unwrap_or(DEFAULT_TARGET_ARCH)
            .to_string();
        let abi = config.get("abi.type").map(str::to_string);
        let system_image_dir = config.get("image.sysdir.1")
            .filter(|d| !d.is_empty())
            .and_then(|d| self.resolve_sdk_path(d));

        let build_prop = match read_optional(&path.join("build.prop")).await {
            Some(props) => props,
            None => match &system_image_dir {
                Some(dir) => read_optional(&dir.join("build.prop")).await.unwrap_or_default(),
                None => PropertyFile::default(),
            },
        };
        if build_prop.is_empty() {
            debug!("No build.prop properties for AVD {}", name);
        }

        Ok(AvdInfo {
            name: name.to_string(),
            path,
            api_level: api_level(&build_prop),
            adbd_communication_mode: adbd_communication_mode(&build_prop),
            backend_suffix: backend_suffix(Some(target_arch.as_str())).map(str::to_string),
            target_arch,
            abi,
            system_image_dir,
        })
    }

    fn resolve_sdk_path(&self, dir: &str) -> Option<PathBuf> {
        let dir = Path::new(dir);
        if dir.is_absolute() {
            Some(dir.to_path_buf())
        } else {
            self.sdk_root.as_ref().map(|root| root.join(dir))
        }
    }
}

/// Parse a property file, `None` if it does not exist.
///
/// A file that exists but cannot be read is treated as empty.
pub async fn read_optional(path: &Path) -> Option<PropertyFile> {
    match FileData::from_file(path).await {
        Ok(data) => Some(PropertyFile::from(&data)),
        Err(AvdError::Io(e)) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => {
            warn!("Cannot read {:?}, treating as empty: {}", path, e);
            Some(PropertyFile::default())
        }
    }
}

fn env_path(var: &str) -> Option<PathBuf> {
    std::env::var_os(var)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
