use crate::dns::types::PrivateDnsSettings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config directory not found")]
    ConfigDirNotFound,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// On-disk layout of `settings.jsonc`.
#[derive(Clone, PartialEq, Serialize, Deserialize, Default, Debug)]
pub struct SettingsFile {
    #[serde(flatten)]
    pub private_dns: PrivateDnsSettings,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_restrictions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enforcing_admin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_uri: Option<String>,
}

pub fn get_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .or_else(dirs::data_local_dir)
        .ok_or(ConfigError::ConfigDirNotFound)?;

    let app_config_dir = config_dir.join("privdns");
    Ok(app_config_dir.join("settings.jsonc"))
}

pub fn load_settings_file(path: &Path) -> Result<SettingsFile> {
    if !path.exists() {
        return Ok(SettingsFile::default());
    }

    let content = fs::read_to_string(path)?;
    let stripped = json_comments::StripComments::new(content.as_bytes());
    let file: SettingsFile = serde_json::from_reader(stripped)?;

    Ok(file)
}

/// Writes the whole file at once.
/// Note: Comments in the original file will not be preserved.
pub fn save_settings_file(path: &Path, file: &SettingsFile) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(file)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path() {
        let path = get_config_path();
        assert!(path.is_ok());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("privdns"));
        assert!(path.to_string_lossy().ends_with("settings.jsonc"));
    }

    #[test]
    fn test_load_nonexistent_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = load_settings_file(&dir.path().join("missing.jsonc")).unwrap();
        assert_eq!(file, SettingsFile::default());
    }

    #[test]
    fn test_load_with_comments() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.jsonc");
        fs::write(
            &path,
            r#"{
                // hostname mode
                "private_dns_mode": 3,
                "private_dns_specifier": "dns.example.org",
                /* managed device */
                "user_restrictions": ["no_config_private_dns"],
                "enforcing_admin": "Example Corp"
            }"#,
        )
        .unwrap();

        let file = load_settings_file(&path).unwrap();
        assert_eq!(file.private_dns.mode, 3);
        assert_eq!(file.private_dns.hostname, "dns.example.org");
        assert_eq!(file.user_restrictions, vec!["no_config_private_dns"]);
        assert_eq!(file.enforcing_admin.as_deref(), Some("Example Corp"));
        assert_eq!(file.help_uri, None);
    }

    #[test]
    fn test_save_creates_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.jsonc");
        let mut file = SettingsFile::default();
        file.private_dns.hostname = "dns.quad9.net".to_string();

        save_settings_file(&path, &file).unwrap();
        assert_eq!(load_settings_file(&path).unwrap(), file);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.jsonc");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            load_settings_file(&path),
            Err(ConfigError::Json(_))
        ));
    }
}
