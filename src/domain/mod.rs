//! Domain layer - pure logic independent of hardware and cloud
//!
//! Readings, the last-known telemetry, the alert policy, the cloud device
//! model and reset classification. Nothing here performs I/O.

pub mod alert;
pub mod model;
pub mod reading;
pub mod reset;
pub mod telemetry;

pub use alert::{AlertEvent, AlertPolicy, AlertSeverity};
pub use model::{NodeModel, ParamValue, SwitchCommand};
pub use reading::{ClimateReading, SampleResult};
pub use reset::{ResetAction, ResetThresholds};
pub use telemetry::{SamplerStats, TelemetryState};
