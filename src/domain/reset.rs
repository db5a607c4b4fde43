//! Reset button hold classification
//!
//! A press held past the network threshold and then released asks for a
//! network (Wi-Fi credential) reset. A press held past the factory
//! threshold triggers a factory reset while the button is still down.

use embassy_time::Duration;

/// Default hold time for a network reset (seconds)
pub const DEFAULT_WIFI_RESET_TIMEOUT_SECS: u32 = 3;

/// Default hold time for a factory reset (seconds)
pub const DEFAULT_FACTORY_RESET_TIMEOUT_SECS: u32 = 11;

/// Action requested through the reset button
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResetAction {
    /// Forget network credentials and re-enter provisioning
    NetworkReset,
    /// Erase all persistent state and restart
    FactoryReset,
}

/// Hold durations distinguishing the two reset actions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ResetThresholds {
    pub network: Duration,
    pub factory: Duration,
}

impl ResetThresholds {
    pub const fn new(network: Duration, factory: Duration) -> Self {
        Self { network, factory }
    }

    pub const fn from_secs(network_secs: u32, factory_secs: u32) -> Self {
        Self {
            network: Duration::from_secs(network_secs as u64),
            factory: Duration::from_secs(factory_secs as u64),
        }
    }

    /// Classify a completed press by how long it was held
    ///
    /// Presses shorter than the network threshold are ignored.
    pub fn classify_release(&self, held: Duration) -> Option<ResetAction> {
        if held >= self.factory {
            Some(ResetAction::FactoryReset)
        } else if held >= self.network {
            Some(ResetAction::NetworkReset)
        } else {
            None
        }
    }
}

impl Default for ResetThresholds {
    fn default() -> Self {
        Self::from_secs(
            DEFAULT_WIFI_RESET_TIMEOUT_SECS,
            DEFAULT_FACTORY_RESET_TIMEOUT_SECS,
        )
    }
}
