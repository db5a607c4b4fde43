//! Logging cloud adapter
//!
//! Stands in for the vendor IoT framework on the bench: every startup step
//! and reset succeeds, and every publish, alert and reset is written to
//! the log.

use portable_atomic::{AtomicU32, Ordering};

use crate::domain::{NodeModel, ParamValue};
use crate::ports::platform::{PlatformError, PlatformPort};
use crate::ports::publish::{PublishError, PublishPort};
use crate::ports::reset::{ResetError, ResetPort};

/// Cloud collaborator that only logs
pub struct LoggingCloud {
    published: AtomicU32,
    alerts: AtomicU32,
    resets: AtomicU32,
}

impl LoggingCloud {
    pub const fn new() -> Self {
        Self {
            published: AtomicU32::new(0),
            alerts: AtomicU32::new(0),
            resets: AtomicU32::new(0),
        }
    }

    /// Parameter updates seen so far
    pub fn published(&self) -> u32 {
        self.published.load(Ordering::Relaxed)
    }

    /// Alerts seen so far
    pub fn alerts(&self) -> u32 {
        self.alerts.load(Ordering::Relaxed)
    }

    /// Network and factory resets requested so far
    pub fn resets(&self) -> u32 {
        self.resets.load(Ordering::Relaxed)
    }
}

impl Default for LoggingCloud {
    fn default() -> Self {
        Self::new()
    }
}

impl PublishPort for LoggingCloud {
    async fn publish(&self, device: &str, param: &str, value: ParamValue) -> Result<(), PublishError> {
        match value {
            ParamValue::Float(v) => info!("publish {}/{} = {}", device, param, v),
            ParamValue::Bool(b) => info!("publish {}/{} = {}", device, param, b),
        }
        self.published.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    async fn alert(&self, message: &str) -> Result<(), PublishError> {
        warn!("alert: {}", message);
        self.alerts.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

impl PlatformPort for LoggingCloud {
    async fn init_storage(&self) -> Result<(), PlatformError> {
        debug!("storage: nothing to initialize");
        Ok(())
    }

    async fn init_network(&self) -> Result<(), PlatformError> {
        debug!("network: nothing to initialize");
        Ok(())
    }

    async fn register_node(&self, model: &NodeModel) -> Result<(), PlatformError> {
        info!("node '{}' ({})", model.name, model.node_type);
        for device in model.devices.iter() {
            info!("  device '{}' param '{}'", device.name, device.primary.name);
        }
        Ok(())
    }

    async fn enable_ota(&self) -> Result<(), PlatformError> {
        Ok(())
    }

    async fn enable_insights(&self) -> Result<(), PlatformError> {
        Ok(())
    }

    async fn start_cloud(&self) -> Result<(), PlatformError> {
        info!("cloud agent started (logging only)");
        Ok(())
    }

    async fn start_network(&self) -> Result<(), PlatformError> {
        Ok(())
    }
}

impl ResetPort for LoggingCloud {
    async fn network_reset(&self) -> Result<(), ResetError> {
        warn!("network reset: credentials would be erased, provisioning restarted");
        self.resets.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    async fn factory_reset(&self) -> Result<(), ResetError> {
        warn!("factory reset: all persistent state would be erased");
        self.resets.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;

    #[test]
    fn test_counts_calls() {
        let cloud = LoggingCloud::new();
        block_on(async {
            cloud
                .publish("Temperature Sensor", "Temperature", ParamValue::Float(21.5))
                .await
                .unwrap();
            cloud.publish("LED Switch", "Power", ParamValue::Bool(true)).await.unwrap();
            cloud.alert("High Temperature Alert: 31.0°C!").await.unwrap();
        });
        assert_eq!(cloud.published(), 2);
        assert_eq!(cloud.alerts(), 1);
    }

    #[test]
    fn test_counts_resets() {
        let cloud = LoggingCloud::new();
        block_on(async {
            cloud.network_reset().await.unwrap();
            cloud.factory_reset().await.unwrap();
        });
        assert_eq!(cloud.resets(), 2);
    }

    #[test]
    fn test_startup_always_succeeds() {
        let cloud = LoggingCloud::new();
        block_on(async {
            assert!(cloud.init_storage().await.is_ok());
            assert!(cloud.start_cloud().await.is_ok());
        });
    }
}
