pub mod config;
pub mod dialog;
pub mod metrics;
pub mod policy;
pub mod presets;
pub mod store;
pub mod types;
pub mod validation;

pub use dialog::{PrivateDnsDialog, PrivateDnsError, open_editor};
pub use metrics::LoggingMetrics;
pub use policy::{AdminPolicy, DISALLOW_CONFIG_PRIVATE_DNS, DevicePolicy, EnforcedAdmin};
pub use store::FileSettingsStore;
pub use types::{PrivateDnsMode, PrivateDnsSettings};
