//! Reset port - the collaborator that performs network and factory resets

/// Error type for reset operations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResetError {
    /// Persistent storage could not be erased
    EraseFailed,
    /// Reset is not supported in the current state
    Unsupported,
}

/// Port for reset actions triggered by the physical button
pub trait ResetPort {
    /// Forget network credentials and restart provisioning
    fn network_reset(&self) -> impl core::future::Future<Output = Result<(), ResetError>>;

    /// Erase persistent state and restart
    fn factory_reset(&self) -> impl core::future::Future<Output = Result<(), ResetError>>;
}
