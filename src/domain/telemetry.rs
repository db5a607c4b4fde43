//! Last-known telemetry values and sampler diagnostics
//!
//! Both types are meant to live in a `static` and be shared by reference
//! between the sampler task and anything that wants to read current values.

use portable_atomic::{AtomicF32, AtomicU32, Ordering};

use super::reading::ClimateReading;

/// Temperature reported before the first successful sample (Celsius)
pub const DEFAULT_TEMPERATURE_C: f32 = 0.0;

/// Humidity reported before the first successful sample (percent)
pub const DEFAULT_HUMIDITY_PCT: f32 = 0.0;

/// Most recent successfully sampled temperature and humidity.
///
/// Single writer (the sampler), any number of readers. Each field is its
/// own atomic: a reader never sees a torn field, but may see the new
/// temperature paired with the previous humidity while an update is in
/// flight. No cross-field atomicity is provided.
pub struct TelemetryState {
    temperature_c: AtomicF32,
    humidity_pct: AtomicF32,
}

impl TelemetryState {
    /// Create state holding the documented defaults
    pub const fn new() -> Self {
        Self::with_values(DEFAULT_TEMPERATURE_C, DEFAULT_HUMIDITY_PCT)
    }

    /// Create state holding explicit initial values
    pub const fn with_values(temperature_c: f32, humidity_pct: f32) -> Self {
        Self {
            temperature_c: AtomicF32::new(temperature_c),
            humidity_pct: AtomicF32::new(humidity_pct),
        }
    }

    /// Overwrite both values. No validation is performed.
    pub fn update(&self, temperature_c: f32, humidity_pct: f32) {
        self.temperature_c.store(temperature_c, Ordering::Release);
        self.humidity_pct.store(humidity_pct, Ordering::Release);
    }

    /// Last committed temperature in Celsius
    pub fn current_temperature(&self) -> f32 {
        self.temperature_c.load(Ordering::Acquire)
    }

    /// Last committed humidity in percent
    pub fn current_humidity(&self) -> f32 {
        self.humidity_pct.load(Ordering::Acquire)
    }

    /// Both values as a reading (fields loaded independently)
    pub fn snapshot(&self) -> ClimateReading {
        ClimateReading::new(self.current_temperature(), self.current_humidity())
    }
}

impl Default for TelemetryState {
    fn default() -> Self {
        Self::new()
    }
}

/// Diagnostics counters maintained by the sampler and actuator
pub struct SamplerStats {
    ticks: AtomicU32,
    reads_ok: AtomicU32,
    reads_failed: AtomicU32,
    alerts_raised: AtomicU32,
    publish_failures: AtomicU32,
}

impl SamplerStats {
    pub const fn new() -> Self {
        Self {
            ticks: AtomicU32::new(0),
            reads_ok: AtomicU32::new(0),
            reads_failed: AtomicU32::new(0),
            alerts_raised: AtomicU32::new(0),
            publish_failures: AtomicU32::new(0),
        }
    }

    pub(crate) fn record_tick(&self) {
        self.ticks.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_read(&self, ok: bool) {
        if ok {
            self.reads_ok.fetch_add(1, Ordering::Relaxed);
        } else {
            self.reads_failed.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub(crate) fn record_alert(&self) {
        self.alerts_raised.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_publish_failure(&self) {
        self.publish_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Ticks executed so far
    pub fn ticks(&self) -> u32 {
        self.ticks.load(Ordering::Relaxed)
    }

    /// Successful sensor reads
    pub fn reads_ok(&self) -> u32 {
        self.reads_ok.load(Ordering::Relaxed)
    }

    /// Failed sensor reads
    pub fn reads_failed(&self) -> u32 {
        self.reads_failed.load(Ordering::Relaxed)
    }

    /// Alerts handed to the sink
    pub fn alerts_raised(&self) -> u32 {
        self.alerts_raised.load(Ordering::Relaxed)
    }

    /// Publish or alert calls that the collaborator rejected
    pub fn publish_failures(&self) -> u32 {
        self.publish_failures.load(Ordering::Relaxed)
    }
}

impl Default for SamplerStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_before_first_sample() {
        let state = TelemetryState::new();
        assert_eq!(state.current_temperature(), DEFAULT_TEMPERATURE_C);
        assert_eq!(state.current_humidity(), DEFAULT_HUMIDITY_PCT);
    }

    #[test]
    fn test_update_overwrites_both_fields() {
        let state = TelemetryState::with_values(20.0, 50.0);
        state.update(31.2, 40.0);
        assert_eq!(state.snapshot(), ClimateReading::new(31.2, 40.0));
    }

    #[test]
    fn test_stats_counters() {
        let stats = SamplerStats::new();
        stats.record_tick();
        stats.record_read(true);
        stats.record_read(false);
        stats.record_read(false);
        assert_eq!(stats.ticks(), 1);
        assert_eq!(stats.reads_ok(), 1);
        assert_eq!(stats.reads_failed(), 2);
        assert_eq!(stats.alerts_raised(), 0);
    }
}
