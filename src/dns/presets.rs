use crate::dns::types::PrivateDnsMode;
use std::collections::HashMap;
use std::sync::LazyLock;

/// A named provider offered as a shortcut over the custom hostname mode.
#[derive(Debug)]
pub struct DnsPreset {
    pub mode: PrivateDnsMode,
    pub label: &'static str,
    pub hostname: &'static str,
}

pub static PRESETS: [DnsPreset; 10] = [
    DnsPreset {
        mode: PrivateDnsMode::Cloudflare,
        label: "Cloudflare",
        hostname: "one.one.one.one",
    },
    DnsPreset {
        mode: PrivateDnsMode::CloudflareBlockMalware,
        label: "Cloudflare (block malware)",
        hostname: "security.cloudflare-dns.com",
    },
    DnsPreset {
        mode: PrivateDnsMode::CloudflareBlockMalwareAndAdultContent,
        label: "Cloudflare (block malware and adult content)",
        hostname: "family.cloudflare-dns.com",
    },
    DnsPreset {
        mode: PrivateDnsMode::AdGuard,
        label: "AdGuard",
        hostname: "dns.adguard-dns.com",
    },
    DnsPreset {
        mode: PrivateDnsMode::OpenDns,
        label: "OpenDNS",
        hostname: "dns.opendns.com",
    },
    DnsPreset {
        mode: PrivateDnsMode::CleanBrowsing,
        label: "CleanBrowsing",
        hostname: "security-filter-dns.cleanbrowsing.org",
    },
    DnsPreset {
        mode: PrivateDnsMode::Quad9,
        label: "Quad9",
        hostname: "dns.quad9.net",
    },
    DnsPreset {
        mode: PrivateDnsMode::Quad9Unsecured,
        label: "Quad9 (unsecured)",
        hostname: "dns10.quad9.net",
    },
    DnsPreset {
        mode: PrivateDnsMode::Quad9Ecs,
        label: "Quad9 (ECS)",
        hostname: "dns11.quad9.net",
    },
    DnsPreset {
        mode: PrivateDnsMode::Quad9UnsecuredEcs,
        label: "Quad9 (unsecured, ECS)",
        hostname: "dns12.quad9.net",
    },
];

static BY_HOSTNAME: LazyLock<HashMap<&'static str, PrivateDnsMode>> = LazyLock::new(|| {
    PRESETS
        .iter()
        .map(|preset| (preset.hostname, preset.mode))
        .collect()
});

fn find_preset(mode: PrivateDnsMode) -> Option<&'static DnsPreset> {
    PRESETS.iter().find(|preset| preset.mode == mode)
}

pub fn preset_hostname(mode: PrivateDnsMode) -> Option<&'static str> {
    find_preset(mode).map(|preset| preset.hostname)
}

pub fn preset_label(mode: PrivateDnsMode) -> Option<&'static str> {
    find_preset(mode).map(|preset| preset.label)
}

/// Exact match only; hostnames are compared as stored.
pub fn preset_for_hostname(hostname: &str) -> Option<PrivateDnsMode> {
    BY_HOSTNAME.get(hostname).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_preset_mode_has_one_entry() {
        for mode in PrivateDnsMode::ALL {
            let entries = PRESETS.iter().filter(|p| p.mode == mode).count();
            if mode.is_preset() {
                assert_eq!(entries, 1, "{:?}", mode);
            } else {
                assert_eq!(entries, 0, "{:?}", mode);
            }
        }
    }

    #[test]
    fn test_reverse_lookup() {
        for preset in &PRESETS {
            assert_eq!(preset_for_hostname(preset.hostname), Some(preset.mode));
            assert_eq!(preset_hostname(preset.mode), Some(preset.hostname));
        }
        assert_eq!(preset_for_hostname("dns.example.org"), None);
        assert_eq!(preset_for_hostname("DNS.QUAD9.NET"), None);
        assert_eq!(preset_for_hostname(""), None);
    }

    #[test]
    fn test_platform_modes_have_no_hostname() {
        assert_eq!(preset_hostname(PrivateDnsMode::Off), None);
        assert_eq!(preset_hostname(PrivateDnsMode::ProviderHostname), None);
    }
}
