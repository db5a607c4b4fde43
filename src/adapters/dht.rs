//! DHT11 / DHT22 single-wire sensor adapter
//!
//! Wraps the `dht-sensor` driver and implements `SensorPort`. The driver
//! samples each bit a fixed 35 µs after its rising edge, so the decode does
//! not depend on how long a delay call or a GPIO read takes.
//!
//! The DHT11 reports whole degrees and whole percent only.

use dht_sensor::{dht11, dht22, DhtError};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::config::NodeConfig;
use crate::domain::ClimateReading;
use crate::ports::sensor::{SensorError, SensorPort};

/// Supported DHT variants
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DhtModel {
    /// DHT11: 1°C / 1% resolution, 18 ms start pulse
    Dht11,
    /// DHT22 / AM2302: 0.1°C / 0.1% resolution, 1 ms start pulse
    Dht22,
}

fn sensor_error<E>(e: DhtError<E>) -> SensorError {
    match e {
        DhtError::Timeout => SensorError::Timeout,
        DhtError::ChecksumMismatch => SensorError::Checksum,
        DhtError::PinError(_) => SensorError::Bus,
    }
}

/// DHT sensor on a single open-drain data line
///
/// `P` must be configured as open-drain with a pull-up so that driving it
/// high releases the line, and should idle high between reads. A read
/// blocks the caller for the start pulse plus roughly 5 ms.
pub struct DhtSensor<P, D> {
    pin: P,
    delay: D,
    model: DhtModel,
}

impl<P, D> DhtSensor<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    /// Create a new DHT adapter
    ///
    /// # Arguments
    ///
    /// * `pin` - Open-drain data line
    /// * `delay` - Microsecond-capable delay provider
    /// * `model` - DHT variant fitted on the line
    pub fn new(pin: P, delay: D, model: DhtModel) -> Self {
        Self { pin, delay, model }
    }

    /// Create an adapter for the variant named in `config`
    pub fn from_config(pin: P, delay: D, config: &NodeConfig) -> Self {
        Self::new(pin, delay, config.sensor_model)
    }

    /// Fitted DHT variant
    pub fn model(&self) -> DhtModel {
        self.model
    }

    /// Release the pin and delay
    pub fn release(self) -> (P, D) {
        (self.pin, self.delay)
    }

    /// Perform one complete blocking read
    pub fn read_blocking(&mut self) -> Result<ClimateReading, SensorError> {
        match self.model {
            DhtModel::Dht11 => dht11::blocking::read(&mut self.delay, &mut self.pin)
                .map(|r| ClimateReading::new(r.temperature as f32, r.relative_humidity as f32)),
            DhtModel::Dht22 => dht22::blocking::read(&mut self.delay, &mut self.pin)
                .map(|r| ClimateReading::new(r.temperature, r.relative_humidity)),
        }
        .map_err(sensor_error)
    }
}

impl<P, D> SensorPort for DhtSensor<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    async fn read(&mut self) -> Result<ClimateReading, SensorError> {
        // Bit timing cannot tolerate executor yields, so the read is blocking
        self.read_blocking()
    }
}
