//! Temperature alert policy
//!
//! A pure threshold check. There is no hysteresis and no de-duplication:
//! every tick above the threshold produces a fresh alert.

use core::fmt::Write;

use heapless::String;

/// Default alert threshold in Celsius
pub const DEFAULT_ALERT_THRESHOLD_C: f32 = 30.0;

/// Maximum alert message length accepted by the cloud layer
pub const ALERT_MESSAGE_CAPACITY: usize = 100;

/// How urgent an alert is
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlertSeverity {
    /// Informational, no action expected
    Info,
    /// A monitored value is out of its normal range
    Warning,
    /// Immediate attention required
    Critical,
}

/// An alert raised by the policy, forwarded to the publish sink
#[derive(Clone, Debug, PartialEq)]
pub struct AlertEvent {
    /// Human readable alert text
    pub message: String<ALERT_MESSAGE_CAPACITY>,
    /// Alert severity
    pub severity: AlertSeverity,
}

impl AlertEvent {
    /// Build the high temperature alert for `temperature_c`
    ///
    /// Format: `High Temperature Alert: 31.2°C!`
    pub fn high_temperature(temperature_c: f32) -> Self {
        let mut message = String::new();
        // 100 bytes hold the longest f32 rendering at one decimal
        let _ = write!(message, "High Temperature Alert: {:.1}°C!", temperature_c);
        Self {
            message,
            severity: AlertSeverity::Warning,
        }
    }

    /// Alert text as a string slice
    pub fn as_str(&self) -> &str {
        self.message.as_str()
    }
}

/// Threshold-crossing policy for sampled temperatures
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlertPolicy {
    threshold_c: f32,
}

impl AlertPolicy {
    /// Create a policy firing strictly above `threshold_c`
    pub const fn new(threshold_c: f32) -> Self {
        Self { threshold_c }
    }

    /// Configured threshold in Celsius
    pub const fn threshold_c(&self) -> f32 {
        self.threshold_c
    }

    /// Evaluate a sampled temperature
    ///
    /// Returns an alert iff `temperature_c > threshold`. NaN never fires.
    pub fn check(&self, temperature_c: f32) -> Option<AlertEvent> {
        if temperature_c > self.threshold_c {
            Some(AlertEvent::high_temperature(temperature_c))
        } else {
            None
        }
    }
}

impl Default for AlertPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_ALERT_THRESHOLD_C)
    }
}
