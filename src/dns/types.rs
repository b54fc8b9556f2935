use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub enum PrivateDnsMode {
    Off,
    #[default]
    Opportunistic,
    ProviderHostname,
    Cloudflare,
    CloudflareBlockMalware,
    CloudflareBlockMalwareAndAdultContent,
    AdGuard,
    OpenDns,
    CleanBrowsing,
    Quad9,
    Quad9Unsecured,
    Quad9Ecs,
    Quad9UnsecuredEcs,
}

impl PrivateDnsMode {
    /// Radio order of the dialog, top to bottom.
    pub const ALL: [PrivateDnsMode; 13] = [
        PrivateDnsMode::Off,
        PrivateDnsMode::Cloudflare,
        PrivateDnsMode::CloudflareBlockMalware,
        PrivateDnsMode::CloudflareBlockMalwareAndAdultContent,
        PrivateDnsMode::AdGuard,
        PrivateDnsMode::OpenDns,
        PrivateDnsMode::CleanBrowsing,
        PrivateDnsMode::Quad9,
        PrivateDnsMode::Quad9Unsecured,
        PrivateDnsMode::Quad9Ecs,
        PrivateDnsMode::Quad9UnsecuredEcs,
        PrivateDnsMode::Opportunistic,
        PrivateDnsMode::ProviderHostname,
    ];

    pub fn code(&self) -> i32 {
        match self {
            PrivateDnsMode::Off => 1,
            PrivateDnsMode::Opportunistic => 2,
            PrivateDnsMode::ProviderHostname => 3,
            PrivateDnsMode::Cloudflare => 4,
            PrivateDnsMode::CloudflareBlockMalware => 5,
            PrivateDnsMode::CloudflareBlockMalwareAndAdultContent => 6,
            PrivateDnsMode::AdGuard => 7,
            PrivateDnsMode::OpenDns => 8,
            PrivateDnsMode::CleanBrowsing => 9,
            PrivateDnsMode::Quad9 => 10,
            PrivateDnsMode::Quad9Unsecured => 11,
            PrivateDnsMode::Quad9Ecs => 12,
            PrivateDnsMode::Quad9UnsecuredEcs => 13,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.code() == code)
    }

    /// Modes the settings store understands. Presets are a dialog-only layer.
    pub fn is_platform_mode(&self) -> bool {
        matches!(
            self,
            PrivateDnsMode::Off | PrivateDnsMode::Opportunistic | PrivateDnsMode::ProviderHostname
        )
    }

    pub fn is_preset(&self) -> bool {
        !self.is_platform_mode()
    }

    pub fn label(&self) -> &'static str {
        match self {
            PrivateDnsMode::Off => "Off",
            PrivateDnsMode::Opportunistic => "Automatic",
            PrivateDnsMode::ProviderHostname => "Private DNS provider hostname",
            preset => crate::dns::presets::preset_label(*preset).unwrap_or("Unknown provider"),
        }
    }

    pub fn element_id(&self) -> String {
        format!("private-dns-mode-{}", self.code())
    }
}

/// Persisted private DNS pair, as held by the settings store.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct PrivateDnsSettings {
    #[serde(rename = "private_dns_mode")]
    pub mode: i32,
    #[serde(rename = "private_dns_specifier")]
    pub hostname: String,
}

impl Default for PrivateDnsSettings {
    fn default() -> Self {
        Self {
            mode: PrivateDnsMode::Opportunistic.code(),
            hostname: String::new(),
        }
    }
}

impl PrivateDnsSettings {
    /// Stored mode as an enum. Unknown codes fall back to the platform default.
    pub fn platform_mode(&self) -> PrivateDnsMode {
        match PrivateDnsMode::from_code(self.mode) {
            Some(mode) if mode.is_platform_mode() => mode,
            _ => {
                tracing::warn!(code = self.mode, "Unknown private DNS mode, using opportunistic");
                PrivateDnsMode::Opportunistic
            }
        }
    }

    /// Text shown under the preference title.
    pub fn summary(&self) -> String {
        match self.platform_mode() {
            PrivateDnsMode::ProviderHostname => {
                match crate::dns::presets::preset_for_hostname(&self.hostname) {
                    Some(preset) => preset.label().to_string(),
                    None => self.hostname.clone(),
                }
            }
            mode => mode.label().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique_and_reversible() {
        for mode in PrivateDnsMode::ALL {
            assert_eq!(PrivateDnsMode::from_code(mode.code()), Some(mode));
        }
        assert_eq!(PrivateDnsMode::from_code(0), None);
        assert_eq!(PrivateDnsMode::from_code(14), None);
    }

    #[test]
    fn test_platform_modes() {
        assert!(PrivateDnsMode::Off.is_platform_mode());
        assert!(PrivateDnsMode::Opportunistic.is_platform_mode());
        assert!(PrivateDnsMode::ProviderHostname.is_platform_mode());
        assert!(PrivateDnsMode::AdGuard.is_preset());
        assert_eq!(
            PrivateDnsMode::ALL.iter().filter(|m| m.is_preset()).count(),
            10
        );
    }

    #[test]
    fn test_unknown_stored_code_reads_as_opportunistic() {
        let settings = PrivateDnsSettings {
            mode: 7,
            hostname: String::new(),
        };
        assert_eq!(settings.platform_mode(), PrivateDnsMode::Opportunistic);

        let settings = PrivateDnsSettings {
            mode: 42,
            hostname: String::new(),
        };
        assert_eq!(settings.platform_mode(), PrivateDnsMode::Opportunistic);
    }

    #[test]
    fn test_summary() {
        let mut settings = PrivateDnsSettings::default();
        assert_eq!(settings.summary(), "Automatic");

        settings.mode = PrivateDnsMode::Off.code();
        assert_eq!(settings.summary(), "Off");

        settings.mode = PrivateDnsMode::ProviderHostname.code();
        settings.hostname = "dns.example.org".to_string();
        assert_eq!(settings.summary(), "dns.example.org");

        settings.hostname = "dns.quad9.net".to_string();
        assert_eq!(settings.summary(), "Quad9");
    }
}
