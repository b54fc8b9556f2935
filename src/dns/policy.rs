use crate::dns::config::SettingsFile;

/// User restriction that blocks edits to the private DNS setting.
pub const DISALLOW_CONFIG_PRIVATE_DNS: &str = "no_config_private_dns";

/// Administrator enforcing a restriction.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct EnforcedAdmin {
    pub restriction: String,
    pub admin: Option<String>,
}

pub trait AdminPolicy {
    fn enforced_admin(&self, restriction: &str) -> Option<EnforcedAdmin>;

    fn is_restricted(&self, restriction: &str) -> bool {
        self.enforced_admin(restriction).is_some()
    }
}

/// Device policy read from the settings file.
#[derive(Clone, Default, Debug)]
pub struct DevicePolicy {
    restrictions: Vec<String>,
    admin: Option<String>,
}

impl DevicePolicy {
    pub fn from_settings(file: &SettingsFile) -> Self {
        Self {
            restrictions: file.user_restrictions.clone(),
            admin: file.enforcing_admin.clone(),
        }
    }
}

impl AdminPolicy for DevicePolicy {
    fn enforced_admin(&self, restriction: &str) -> Option<EnforcedAdmin> {
        self.restrictions
            .iter()
            .any(|r| r == restriction)
            .then(|| EnforcedAdmin {
                restriction: restriction.to_string(),
                admin: self.admin.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrestricted_by_default() {
        let policy = DevicePolicy::default();
        assert!(!policy.is_restricted(DISALLOW_CONFIG_PRIVATE_DNS));
    }

    #[test]
    fn test_restriction_from_settings() {
        let file = SettingsFile {
            user_restrictions: vec![DISALLOW_CONFIG_PRIVATE_DNS.to_string()],
            enforcing_admin: Some("Example Corp".to_string()),
            ..Default::default()
        };
        let policy = DevicePolicy::from_settings(&file);

        assert_eq!(
            policy.enforced_admin(DISALLOW_CONFIG_PRIVATE_DNS),
            Some(EnforcedAdmin {
                restriction: DISALLOW_CONFIG_PRIVATE_DNS.to_string(),
                admin: Some("Example Corp".to_string()),
            })
        );
        assert!(!policy.is_restricted("no_config_wifi"));
    }
}
