//! Crate-level error taxonomy
//!
//! Port errors stay small `Copy` enums close to their port. This type
//! groups them by what the node does about them:
//!
//! - `HardwareRead`: logged, state kept, next tick is the retry
//! - `HardwareWrite`: logged, the command counts as not applied
//! - `CollaboratorUnavailable`: logged and dropped at the boundary
//! - `FatalInit`: startup cannot continue

use thiserror::Error;

use crate::ports::output::HardwareError;
use crate::ports::platform::PlatformError;
use crate::ports::publish::PublishError;
use crate::ports::sensor::SensorError;

/// Startup step, in boot order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StartupStep {
    DriverInit,
    Storage,
    NetworkInit,
    RegisterNode,
    Ota,
    Insights,
    CloudStart,
    NetworkStart,
}

/// What went wrong in a startup step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitCause {
    Hardware(HardwareError),
    Platform(PlatformError),
}

/// A required subsystem failed to come up
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[error("{step:?} failed: {cause:?}")]
pub struct InitError {
    pub step: StartupStep,
    pub cause: InitCause,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    #[error("sensor read failed: {0:?}")]
    HardwareRead(SensorError),
    #[error("switch output failed: {0:?}")]
    HardwareWrite(HardwareError),
    #[error("cloud collaborator unavailable: {0:?}")]
    CollaboratorUnavailable(PublishError),
    #[error("fatal startup failure: {0}")]
    FatalInit(InitError),
}

impl From<SensorError> for Error {
    fn from(e: SensorError) -> Self {
        Error::HardwareRead(e)
    }
}

impl From<HardwareError> for Error {
    fn from(e: HardwareError) -> Self {
        Error::HardwareWrite(e)
    }
}

impl From<PublishError> for Error {
    fn from(e: PublishError) -> Self {
        Error::CollaboratorUnavailable(e)
    }
}

impl From<InitError> for Error {
    fn from(e: InitError) -> Self {
        Error::FatalInit(e)
    }
}
