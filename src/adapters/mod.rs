//! Adapters - concrete implementations of ports
//!
//! Adapters connect the node to the outside world by implementing the
//! port traits.
//!
//! # Available Adapters
//!
//! - **dht**: DHT11/DHT22 sensor through the `dht-sensor` driver
//! - **gpio**: switch output on an embedded-hal `OutputPin`
//! - **logging_cloud**: cloud stand-in that logs every call

pub mod dht;
pub mod gpio;
pub mod logging_cloud;

pub use dht::{DhtModel, DhtSensor};
pub use gpio::GpioSwitch;
pub use logging_cloud::LoggingCloud;
