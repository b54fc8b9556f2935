/// Action id reported after the private DNS mode is saved.
pub const ACTION_PRIVATE_DNS_MODE: u32 = 1249;

pub trait MetricsFeatureProvider {
    fn action(&self, action: u32, value: i32);
}

/// Reports actions as structured log events.
#[derive(Clone, Copy, Default, Debug)]
pub struct LoggingMetrics;

impl MetricsFeatureProvider for LoggingMetrics {
    fn action(&self, action: u32, value: i32) {
        tracing::info!(target: "privdns::metrics", action, value, "settings action");
    }
}
