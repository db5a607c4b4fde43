//! Inbound ports - capabilities the core exposes to the collaborator
//!
//! The vendor framework drives the node through these instead of through
//! registered C-style callbacks: its timer service calls `on_tick`, its
//! parameter-write dispatcher calls `on_write`.

use crate::domain::ParamValue;

/// Error returned to the collaborator for a rejected parameter write
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WriteError {
    /// The value type does not match the parameter
    InvalidValue,
    /// The hardware could not apply the value
    Hardware,
}

/// Periodic work invoked by a timer service
pub trait TickHandler {
    /// Run one tick to completion
    fn on_tick(&mut self) -> impl core::future::Future<Output = ()>;
}

/// Handler for remote parameter writes
pub trait ParamWriteHandler {
    /// Apply a write of `value` to `device`/`param`
    ///
    /// Writes addressed to parameters the handler does not own are
    /// accepted and ignored.
    fn on_write(
        &self,
        device: &str,
        param: &str,
        value: ParamValue,
    ) -> impl core::future::Future<Output = Result<(), WriteError>>;
}
