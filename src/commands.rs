//! CLI commands for avdinfo
//!
//! Each command returns the text to print so it can be checked in tests.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use anyhow::Result;
use tracing::info;

use avdinfo_core::AppConfig;
use avdinfo_emulator_bridge::{
    adbd_communication_mode, api_level, backend_program_name, backend_suffix,
    AdbdCommunicationMode, AvdLocator, FileData, PropertyFile,
};

async fn load_properties(file: &Path) -> Result<PropertyFile> {
    let data = FileData::from_file(file).await?;
    Ok(PropertyFile::from(&data))
}

/// Show the derived settings and all entries of a property file
pub struct PropsCommand {
    pub file: PathBuf,
    pub json: bool,
}

impl PropsCommand {
    pub async fn execute(&self) -> Result<String> {
        info!("Reading properties: {:?}", self.file);
        let props = load_properties(&self.file).await?;
        let mode = adbd_communication_mode(&props);
        let channel = AdbdCommunicationMode::from_raw(mode);

        if self.json {
            let value = serde_json::json!({
                "api_level": api_level(&props),
                "adbd_communication_mode": mode,
                "adbd_channel": channel.as_str(),
                "properties": props,
            });
            return Ok(serde_json::to_string_pretty(&value)?);
        }

        let mut out = String::new();
        writeln!(out, "api_level={}", api_level(&props))?;
        writeln!(out, "adbd_communication_mode={} ({})", mode, channel.as_str())?;
        writeln!(out)?;
        for (key, value) in props.iter() {
            writeln!(out, "{}={}", key, value)?;
        }
        Ok(out)
    }
}

/// Read one key as an integer
pub struct GetIntCommand {
    pub file: PathBuf,
    pub key: String,
    pub default: i32,
}

impl GetIntCommand {
    pub async fn execute(&self) -> Result<String> {
        let props = load_properties(&self.file).await?;
        let field = props.get_int(&self.key, self.default);
        Ok(format!("{} ({})", field.value, field.result.as_str()))
    }
}

/// Look up the backend for an architecture
pub struct SuffixCommand {
    pub arch: String,
}

impl SuffixCommand {
    /// `None` when the architecture has no backend
    pub fn execute(&self) -> Option<String> {
        let suffix = backend_suffix(Some(self.arch.as_str()))?;
        let program = backend_program_name(&self.arch)?;
        Some(format!("{} ({})", suffix, program))
    }
}

/// Inspect an AVD by name
pub struct AvdCommand {
    pub name: String,
    pub json: bool,
}

impl AvdCommand {
    pub async fn execute(&self, config: &AppConfig) -> Result<String> {
        let locator = AvdLocator::from_config(config)?;
        let avd = locator.inspect(&self.name).await?;

        if self.json {
            return Ok(serde_json::to_string_pretty(&avd)?);
        }

        let mut out = String::new();
        writeln!(out, "name={}", avd.name)?;
        writeln!(out, "path={}", avd.path.display())?;
        writeln!(out, "target_arch={}", avd.target_arch)?;
        if let Some(ref abi) = avd.abi {
            writeln!(out, "abi={}", abi)?;
        }
        if let Some(ref dir) = avd.system_image_dir {
            writeln!(out, "system_image_dir={}", dir.display())?;
        }
        writeln!(out, "api_level={}", avd.api_level)?;
        let channel = AdbdCommunicationMode::from_raw(avd.adbd_communication_mode);
        writeln!(out, "adbd_communication_mode={} ({})", avd.adbd_communication_mode, channel.as_str())?;
        writeln!(out, "backend_suffix={}", avd.backend_suffix.as_deref().unwrap_or("unsupported"))?;
        Ok(out)
    }
}

/// List AVD names
pub struct ListCommand;

impl ListCommand {
    pub async fn execute(&self, config: &AppConfig) -> Result<String> {
        let locator = AvdLocator::from_config(config)?;
        let names = locator.list().await?;
        Ok(names.iter().map(|n| format!("{}\n", n)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prop_file(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("build.prop");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[tokio::test]
    async fn test_props_command() {
        let dir = tempfile::tempdir().unwrap();
        let file = prop_file(&dir, "ro.build.version.sdk=15\nro.adb.qemud=1\n");

        let out = PropsCommand { file, json: false }.execute().await.unwrap();
        assert!(out.starts_with("api_level=15\nadbd_communication_mode=0 (legacy)\n"));
        assert!(out.contains("ro.adb.qemud=1\n"));
    }

    #[tokio::test]
    async fn test_props_command_json() {
        let dir = tempfile::tempdir().unwrap();
        let file = prop_file(&dir, "ro.build.version.sdk=19\n");

        let out = PropsCommand { file, json: true }.execute().await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["api_level"], 19);
        assert_eq!(value["adbd_communication_mode"], 1);
        assert_eq!(value["adbd_channel"], "qemud");
    }

    #[tokio::test]
    async fn test_get_int_command() {
        let dir = tempfile::tempdir().unwrap();
        let file = prop_file(&dir, "nineteen=19\ninvalid3=bar\n");

        let cmd = GetIntCommand { file: file.clone(), key: "nineteen".into(), default: 1138 };
        assert_eq!(cmd.execute().await.unwrap(), "19 (found)");

        let cmd = GetIntCommand { file: file.clone(), key: "invalid3".into(), default: 1138 };
        assert_eq!(cmd.execute().await.unwrap(), "1138 (invalid)");

        let cmd = GetIntCommand { file, key: "bar".into(), default: 1138 };
        assert_eq!(cmd.execute().await.unwrap(), "1138 (not-found)");
    }

    #[test]
    fn test_suffix_command() {
        let out = SuffixCommand { arch: "x86_64".into() }.execute();
        assert_eq!(out.as_deref(), Some("x86 (emulator-x86)"));
        assert!(SuffixCommand { arch: "arm64".into() }.execute().is_none());
    }

    #[tokio::test]
    async fn test_avd_and_list_commands() {
        let home = tempfile::tempdir().unwrap();
        std::fs::write(home.path().join("dev.ini"), "").unwrap();
        std::fs::create_dir_all(home.path().join("dev.avd")).unwrap();
        std::fs::write(home.path().join("dev.avd/config.ini"), "hw.cpu.arch=mips\n").unwrap();

        let mut config = AppConfig::default();
        config.android.avd_home = Some(home.path().to_path_buf());

        let out = AvdCommand { name: "dev".into(), json: false }.execute(&config).await.unwrap();
        assert!(out.contains("target_arch=mips\n"));
        assert!(out.contains("api_level=10000\n"));
        assert!(out.contains("adbd_communication_mode=1 (qemud)\n"));
        assert!(out.contains("backend_suffix=mips\n"));

        assert_eq!(ListCommand.execute(&config).await.unwrap(), "dev\n");
    }
}
