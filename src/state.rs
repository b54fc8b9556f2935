use crate::dns::{
    AdminPolicy, DISALLOW_CONFIG_PRIVATE_DNS, DevicePolicy, EnforcedAdmin, FileSettingsStore,
    LoggingMetrics, PrivateDnsDialog, PrivateDnsError, PrivateDnsMode, PrivateDnsSettings,
    open_editor,
};

#[derive(Clone, Debug)]
pub struct AppState {
    pub store: FileSettingsStore,
    pub policy: DevicePolicy,
    pub settings: PrivateDnsSettings,
    pub help_uri: Option<String>,
    pub dialog: Option<PrivateDnsDialog>,
    pub admin_notice: Option<EnforcedAdmin>,
    pub message: Option<Message>,
}

#[derive(Clone, Debug)]
pub struct Message {
    pub text: String,
    pub is_error: bool,
}

impl Message {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

impl AppState {
    pub fn new(store: FileSettingsStore) -> Self {
        let mut state = Self {
            store,
            policy: DevicePolicy::default(),
            settings: PrivateDnsSettings::default(),
            help_uri: None,
            dialog: None,
            admin_notice: None,
            message: None,
        };
        state.reload();
        state
    }

    /// Re-reads the settings file for the preference row.
    pub fn reload(&mut self) {
        match self.store.load() {
            Ok(file) => {
                self.policy = DevicePolicy::from_settings(&file);
                self.help_uri = file.help_uri.clone();
                self.settings = file.private_dns;
            }
            Err(e) => {
                tracing::error!(path = %self.store.path().display(), "Failed to load settings: {}", e);
                self.set_message(Message::error(format!("Failed to load settings: {}", e)));
            }
        }
    }

    pub fn disabled_by_admin(&self) -> bool {
        self.policy.is_restricted(DISALLOW_CONFIG_PRIVATE_DNS)
    }

    pub fn set_message(&mut self, message: Message) {
        self.message = Some(message);
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    pub fn open_dialog(&mut self) {
        self.clear_message();
        match open_editor(&self.store, &self.policy) {
            Ok(dialog) => self.dialog = Some(dialog),
            Err(PrivateDnsError::DisallowedByAdmin(admin)) => self.admin_notice = Some(admin),
            Err(e) => {
                tracing::error!("Failed to open private DNS dialog: {}", e);
                self.set_message(Message::error(e.to_string()));
            }
        }
    }

    pub fn select_mode(&mut self, mode: PrivateDnsMode) {
        let Some(dialog) = self.dialog.as_mut() else {
            tracing::error!(?mode, "Selection changed without an open dialog");
            return;
        };
        dialog.select_mode(mode);
    }

    pub fn edit_hostname(&mut self, text: String) {
        let Some(dialog) = self.dialog.as_mut() else {
            tracing::error!("Hostname edited without an open dialog");
            return;
        };
        dialog.edit_hostname(text);
    }

    pub fn save_dialog(&mut self) {
        let Some(dialog) = self.dialog.as_mut() else {
            tracing::error!("Can't find the private DNS dialog to save");
            return;
        };

        match dialog.save(&mut self.store, &LoggingMetrics) {
            Ok(mode) => {
                tracing::info!(?mode, "Private DNS mode saved");
                self.dialog = None;
                self.reload();
                let summary = self.settings.summary();
                self.set_message(Message::success(format!("Private DNS set to {}", summary)));
            }
            // Shown inline under the hostname field.
            Err(PrivateDnsError::Hostname(_)) => {}
            Err(e) => {
                tracing::error!("Failed to save private DNS settings: {}", e);
                self.set_message(Message::error(format!("Failed to save settings: {}", e)));
            }
        }
    }

    pub fn cancel_dialog(&mut self) {
        self.dialog = None;
    }

    pub fn dismiss_admin_notice(&mut self) {
        self.admin_notice = None;
    }
}
