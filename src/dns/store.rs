use crate::dns::config::{self, ConfigError, SettingsFile};
use crate::dns::types::{PrivateDnsMode, PrivateDnsSettings};
use std::path::{Path, PathBuf};

/// Access to the persisted private DNS pair.
pub trait SettingsStore {
    fn private_dns(&self) -> Result<PrivateDnsSettings, ConfigError>;

    /// Writes mode and hostname as one unit. `None` keeps the stored hostname.
    fn put_private_dns(
        &mut self,
        mode: PrivateDnsMode,
        hostname: Option<&str>,
    ) -> Result<(), ConfigError>;
}

/// Settings store backed by the `settings.jsonc` file.
#[derive(Clone, Debug)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn open_default() -> Result<Self, ConfigError> {
        Ok(Self::new(config::get_config_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<SettingsFile, ConfigError> {
        config::load_settings_file(&self.path)
    }
}

impl SettingsStore for FileSettingsStore {
    fn private_dns(&self) -> Result<PrivateDnsSettings, ConfigError> {
        Ok(self.load()?.private_dns)
    }

    fn put_private_dns(
        &mut self,
        mode: PrivateDnsMode,
        hostname: Option<&str>,
    ) -> Result<(), ConfigError> {
        debug_assert!(!mode.is_preset());

        let mut file = self.load()?;
        file.private_dns.mode = mode.code();
        if let Some(hostname) = hostname {
            file.private_dns.hostname = hostname.to_string();
        }
        config::save_settings_file(&self.path, &file)?;

        tracing::info!(
            mode = mode.code(),
            hostname = %file.private_dns.hostname,
            path = %self.path.display(),
            "Private DNS settings written"
        );
        Ok(())
    }
}
