//! Climate reading domain entity
//!
//! One temperature/humidity pair as produced by a single sensor read.
//! It has no knowledge of how readings are published or stored.

use core::fmt::Write;

use heapless::String;

use crate::ports::sensor::SensorError;

/// Room for two fully expanded f32 values plus the labels
pub const SUMMARY_CAPACITY: usize = 128;

/// A temperature/humidity measurement from the domain perspective.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClimateReading {
    /// Temperature in Celsius
    pub temperature_c: f32,
    /// Relative humidity in percent
    pub humidity_pct: f32,
}

impl ClimateReading {
    /// Create a new reading
    pub const fn new(temperature_c: f32, humidity_pct: f32) -> Self {
        Self {
            temperature_c,
            humidity_pct,
        }
    }

    /// Human readable form with one decimal per value
    ///
    /// Format: `Temperature: 31.2°C, Humidity: 40.0%`
    pub fn summary(&self) -> String<SUMMARY_CAPACITY> {
        let mut line = String::new();
        let _ = write!(
            line,
            "Temperature: {:.1}°C, Humidity: {:.1}%",
            self.temperature_c, self.humidity_pct
        );
        line
    }
}

/// Outcome of one sensor read.
///
/// Produced once per sampler tick and consumed immediately.
pub type SampleResult = Result<ClimateReading, SensorError>;
