//! Sensor port - abstraction for reading climate data
//!
//! This trait allows the sampler to read temperature and humidity without
//! knowing the specific hardware (DHT11, DHT22, I2C sensor, mock, etc.)

use crate::domain::ClimateReading;

/// Error type for sensor operations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// The sensor did not answer within the protocol timing
    Timeout,
    /// Frame received but its checksum does not match
    Checksum,
    /// The data line could not be driven or sampled
    Bus,
}

/// Port for reading climate data
///
/// One call performs exactly one bounded hardware read. Implementations
/// must not retry internally: the sampler's next tick is the only retry.
///
/// # Example Implementation
///
/// ```ignore
/// struct Sht31Sensor<I: I2c> {
///     i2c: I,
/// }
///
/// impl<I: I2c> SensorPort for Sht31Sensor<I> {
///     async fn read(&mut self) -> Result<ClimateReading, SensorError> {
///         let raw = self.measure().await.map_err(|_| SensorError::Bus)?;
///         Ok(ClimateReading::new(raw.celsius(), raw.humidity()))
///     }
/// }
/// ```
pub trait SensorPort {
    /// Read temperature and humidity once
    ///
    /// An adapter may block the calling context for its bounded protocol
    /// time (tens of milliseconds for a DHT), so call it from a task that
    /// can tolerate that delay.
    fn read(&mut self) -> impl core::future::Future<Output = Result<ClimateReading, SensorError>>;
}
