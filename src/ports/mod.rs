//! Ports (interfaces) defining the boundaries of the node
//!
//! Driven ports, implemented by adapters or the vendor framework:
//!
//! - **SensorPort**: how we read temperature and humidity (DHT, mock)
//! - **PublishPort**: how values and alerts reach the cloud
//! - **PlatformPort**: startup of storage, network, node, OTA, insights
//! - **SwitchOutputPort**: the LED line
//! - **ResetPort**: network and factory reset
//!
//! Driving ports, implemented by the core and invoked by the framework:
//!
//! - **TickHandler**: the sampler's periodic tick
//! - **ParamWriteHandler**: remote parameter writes

pub mod inbound;
pub mod output;
pub mod platform;
pub mod publish;
pub mod reset;
pub mod sensor;

pub use inbound::{ParamWriteHandler, TickHandler, WriteError};
pub use output::{HardwareError, SwitchOutputPort};
pub use platform::{PlatformError, PlatformPort};
pub use publish::{PublishError, PublishPort};
pub use reset::{ResetError, ResetPort};
pub use sensor::{SensorError, SensorPort};
