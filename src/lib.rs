//! Climate node library
//!
//! Firmware core for a temperature/humidity node: a DHT sensor sampled on
//! a timer, readings and an LED switch exposed as cloud parameters, a
//! threshold alert and a reset button. The vendor IoT framework (node
//! registration, Wi-Fi, OTA, insights) is reached only through ports.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Domain Layer                                │
//! │  - ClimateReading, TelemetryState, SamplerStats                 │
//! │  - AlertPolicy, NodeModel, ResetThresholds                      │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Ports (Traits)                              │
//! │  - SensorPort, PublishPort, PlatformPort                        │
//! │  - SwitchOutputPort, ResetPort                                  │
//! │  - TickHandler, ParamWriteHandler (invoked by the framework)    │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Application                                 │
//! │  - PeriodicSampler: read → record → publish → alert             │
//! │  - SwitchActuator, ResetButton                                  │
//! │  - Node: composition root and boot sequence                     │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Adapters                                    │
//! │  - DhtSensor: DHT11/DHT22 over embedded-hal GPIO                │
//! │  - GpioSwitch: LED on an OutputPin                              │
//! │  - LoggingCloud: bench stand-in for the cloud framework         │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Features
//!
//! - `log` (default): log through the `log` facade
//! - `defmt`: log through defmt instead (use with `default-features = false`)
//! - `std`: host build with the embassy-time std driver and the simulator

#![cfg_attr(not(any(test, feature = "std")), no_std)]

// This mod MUST go first, so that the others see its macros.
mod fmt;

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;

// Re-export key domain types
pub use domain::{
    AlertEvent, AlertPolicy, AlertSeverity, ClimateReading, NodeModel, ParamValue, ResetAction,
    ResetThresholds, SampleResult, SamplerStats, SwitchCommand, TelemetryState,
};

// Re-export key port traits
pub use ports::{
    ParamWriteHandler, PlatformPort, PublishPort, ResetPort, SensorPort, SwitchOutputPort,
    TickHandler,
};

// Re-export application services and adapters
pub use adapters::{DhtModel, DhtSensor, GpioSwitch, LoggingCloud};
pub use app::{Node, PeriodicSampler, ResetButton, SwitchActuator, TickSchedule};
pub use config::{ConfigError, NodeConfig, PinAssignment};
pub use error::Error;
