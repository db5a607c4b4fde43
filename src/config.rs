//! Node configuration
//!
//! Compile-time defaults mirror the reference hardware: a DHT11 on GPIO 2,
//! the LED on GPIO 10 and the reset button on GPIO 5.

use embassy_time::Duration;
use thiserror::Error;

use crate::adapters::dht::DhtModel;
use crate::domain::alert::DEFAULT_ALERT_THRESHOLD_C;
use crate::domain::reset::{
    ResetThresholds, DEFAULT_FACTORY_RESET_TIMEOUT_SECS, DEFAULT_WIFI_RESET_TIMEOUT_SECS,
};

/// Default sampling interval (seconds)
pub const DEFAULT_SAMPLING_INTERVAL_SECS: u32 = 5;

/// Delay before giving up after a fatal startup failure, so logs can drain
pub const DEFAULT_FATAL_GRACE_MS: u64 = 5000;

/// A GPIO number on the target board
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinAssignment(pub u8);

impl PinAssignment {
    pub const fn gpio(num: u8) -> Self {
        Self(num)
    }

    pub const fn number(&self) -> u8 {
        self.0
    }
}

/// Configuration errors reported by [`NodeConfig::validate`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Sampling interval must be at least one second
    #[error("sampling interval must be at least one second")]
    ZeroInterval,
    /// Factory reset hold time must exceed the network reset hold time
    #[error("factory reset hold must be longer than network reset hold")]
    ResetThresholdOrder,
    /// Alert threshold is NaN or infinite
    #[error("alert threshold must be a finite temperature")]
    NonFiniteThreshold,
}

/// Recognized configuration options for the node
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NodeConfig {
    /// Seconds between sampler ticks
    pub sampling_interval_secs: u32,
    /// Temperature above which an alert is raised (Celsius)
    pub alert_threshold_c: f32,
    /// DHT data line
    pub sensor_pin: PinAssignment,
    /// LED / actuator output
    pub led_pin: PinAssignment,
    /// Reset button input (active low)
    pub reset_button_pin: PinAssignment,
    /// Hold time for a network reset
    pub wifi_reset_timeout_secs: u32,
    /// Hold time for a factory reset
    pub factory_reset_timeout_secs: u32,
    /// Which DHT variant is fitted
    pub sensor_model: DhtModel,
    /// Node name registered with the cloud
    pub node_name: &'static str,
    /// Node type registered with the cloud
    pub node_type: &'static str,
    /// Wait before reporting a fatal startup failure
    pub fatal_grace_ms: u64,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            sampling_interval_secs: DEFAULT_SAMPLING_INTERVAL_SECS,
            alert_threshold_c: DEFAULT_ALERT_THRESHOLD_C,
            sensor_pin: PinAssignment::gpio(2),
            led_pin: PinAssignment::gpio(10),
            reset_button_pin: PinAssignment::gpio(5),
            wifi_reset_timeout_secs: DEFAULT_WIFI_RESET_TIMEOUT_SECS,
            factory_reset_timeout_secs: DEFAULT_FACTORY_RESET_TIMEOUT_SECS,
            sensor_model: DhtModel::Dht11,
            node_name: "ESP RainMaker Device",
            node_type: "DHT11 Sensor",
            fatal_grace_ms: DEFAULT_FATAL_GRACE_MS,
        }
    }
}

impl NodeConfig {
    /// Config for bench testing: sample every second
    pub fn fast_sampling() -> Self {
        Self {
            sampling_interval_secs: 1,
            ..Self::default()
        }
    }

    /// Config for battery operation: sample once a minute
    pub fn low_power() -> Self {
        Self {
            sampling_interval_secs: 60,
            ..Self::default()
        }
    }

    /// Check option consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sampling_interval_secs == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        if self.factory_reset_timeout_secs <= self.wifi_reset_timeout_secs {
            return Err(ConfigError::ResetThresholdOrder);
        }
        if !self.alert_threshold_c.is_finite() {
            return Err(ConfigError::NonFiniteThreshold);
        }
        Ok(())
    }

    pub fn sampling_interval(&self) -> Duration {
        Duration::from_secs(self.sampling_interval_secs as u64)
    }

    pub fn reset_thresholds(&self) -> ResetThresholds {
        ResetThresholds::from_secs(self.wifi_reset_timeout_secs, self.factory_reset_timeout_secs)
    }

    pub fn fatal_grace(&self) -> Duration {
        Duration::from_millis(self.fatal_grace_ms)
    }
}
