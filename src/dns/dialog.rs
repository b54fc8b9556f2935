use crate::dns::config::ConfigError;
use crate::dns::metrics::{ACTION_PRIVATE_DNS_MODE, MetricsFeatureProvider};
use crate::dns::policy::{AdminPolicy, DISALLOW_CONFIG_PRIVATE_DNS, EnforcedAdmin};
use crate::dns::presets::{preset_for_hostname, preset_hostname};
use crate::dns::store::SettingsStore;
use crate::dns::types::PrivateDnsMode;
use crate::dns::validation::validate_hostname;
use thiserror::Error;

/// Inline error shown under the hostname field.
#[derive(Error, Clone, Copy, PartialEq, Eq, Debug)]
pub enum HostnameError {
    #[error("This field is required")]
    Empty,
    #[error("Hostname is not valid")]
    Invalid,
}

#[derive(Error, Debug)]
pub enum PrivateDnsError {
    #[error("{0}")]
    Hostname(#[from] HostnameError),
    #[error("Private DNS settings are managed by your administrator")]
    DisallowedByAdmin(EnforcedAdmin),
    #[error("Settings store error: {0}")]
    Store(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, PrivateDnsError>;

/// In-memory state of the open private DNS dialog.
///
/// Nothing here touches the store until [`PrivateDnsDialog::save`] succeeds;
/// dropping the dialog is a cancel.
#[derive(Clone, PartialEq, Debug)]
pub struct PrivateDnsDialog {
    mode: PrivateDnsMode,
    hostname: String,
    hostname_error: Option<HostnameError>,
}

/// Click on the preference row. Restricted users get the admin instead of a dialog.
pub fn open_editor(
    store: &impl SettingsStore,
    policy: &impl AdminPolicy,
) -> Result<PrivateDnsDialog> {
    if let Some(admin) = policy.enforced_admin(DISALLOW_CONFIG_PRIVATE_DNS) {
        tracing::info!(admin = ?admin.admin, "Private DNS editing disallowed by admin");
        return Err(PrivateDnsError::DisallowedByAdmin(admin));
    }
    PrivateDnsDialog::load(store)
}

impl PrivateDnsDialog {
    /// Reads the stored pair and resolves which radio should be checked.
    pub fn load(store: &impl SettingsStore) -> Result<Self> {
        let settings = store.private_dns()?;
        let mut mode = settings.platform_mode();

        if mode == PrivateDnsMode::ProviderHostname
            && let Some(preset) = preset_for_hostname(&settings.hostname)
        {
            mode = preset;
        }

        tracing::debug!(?mode, hostname = %settings.hostname, "Private DNS dialog loaded");

        Ok(Self {
            mode,
            hostname: settings.hostname,
            hostname_error: None,
        })
    }

    pub fn mode(&self) -> PrivateDnsMode {
        self.mode
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn hostname_error(&self) -> Option<HostnameError> {
        self.hostname_error
    }

    /// Presets carry their own hostname, so only the custom mode edits it.
    pub fn hostname_input_enabled(&self) -> bool {
        self.mode == PrivateDnsMode::ProviderHostname
    }

    pub fn select_mode(&mut self, mode: PrivateDnsMode) {
        tracing::debug!(?mode, "Private DNS selection changed");
        self.mode = mode;
        self.hostname_error = None;
    }

    pub fn edit_hostname(&mut self, text: impl Into<String>) {
        self.hostname = text.into();
        if !self.hostname.is_empty() {
            self.hostname_error = None;
        }
    }

    fn reject(&mut self, error: HostnameError) -> PrivateDnsError {
        tracing::warn!(hostname = %self.hostname, "{}", error);
        self.hostname_error = Some(error);
        error.into()
    }

    /// Validates and persists the selection, returning the stored mode.
    ///
    /// Presets are stored as the provider hostname mode with the preset's
    /// hostname. Off and opportunistic leave the stored hostname as it was.
    pub fn save(
        &mut self,
        store: &mut impl SettingsStore,
        metrics: &impl MetricsFeatureProvider,
    ) -> Result<PrivateDnsMode> {
        let selected = self.mode;
        let (mode_to_set, hostname) = match selected {
            PrivateDnsMode::ProviderHostname => {
                if self.hostname.is_empty() {
                    return Err(self.reject(HostnameError::Empty));
                }
                if !validate_hostname(&self.hostname) {
                    return Err(self.reject(HostnameError::Invalid));
                }
                (PrivateDnsMode::ProviderHostname, Some(self.hostname.as_str()))
            }
            PrivateDnsMode::Off | PrivateDnsMode::Opportunistic => (selected, None),
            preset => (PrivateDnsMode::ProviderHostname, preset_hostname(preset)),
        };

        store.put_private_dns(mode_to_set, hostname)?;
        metrics.action(ACTION_PRIVATE_DNS_MODE, mode_to_set.code());

        Ok(mode_to_set)
    }
}
