//! Publish port - outbound notifications to the device-management cloud
//!
//! The core calls into this port but never implements delivery: retries,
//! connectivity and buffering belong to the collaborator.

use crate::domain::ParamValue;

/// Error type for publish operations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PublishError {
    /// The cloud layer is not reachable right now
    Unavailable,
    /// The cloud layer refused the update (unknown device or parameter)
    Rejected,
}

/// Port for reporting parameter values and raising alerts
///
/// Calls are fire-and-forget from the caller's view. Callers log and drop
/// any error; nothing returned here may stop the sampler.
///
/// Methods take `&self` so the sampler and the switch actuator can share a
/// single sink from different tasks.
pub trait PublishPort {
    /// Report a new value for `device`/`param`
    fn publish(
        &self,
        device: &str,
        param: &str,
        value: ParamValue,
    ) -> impl core::future::Future<Output = Result<(), PublishError>>;

    /// Raise an out-of-band alert
    fn alert(&self, message: &str) -> impl core::future::Future<Output = Result<(), PublishError>>;
}
