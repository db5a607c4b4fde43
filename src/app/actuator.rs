//! Switch actuator - applies remote power commands to the LED line
//!
//! Every accepted command drives the line and echoes the state back to the
//! cloud, even when the line already holds that level.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::Mutex;

use crate::domain::model::{POWER_PARAM, SWITCH_DEVICE};
use crate::domain::{ParamValue, SamplerStats, SwitchCommand};
use crate::error::Error;
use crate::ports::inbound::{ParamWriteHandler, WriteError};
use crate::ports::output::{HardwareError, SwitchOutputPort};
use crate::ports::publish::PublishPort;

/// Drives the switch output on behalf of the cloud layer
///
/// The output sits behind an async mutex, so `apply` can be called through
/// a shared reference from whatever context delivers cloud writes.
pub struct SwitchActuator<'a, M: RawMutex, O: SwitchOutputPort, P: PublishPort> {
    output: Mutex<M, O>,
    sink: &'a P,
    stats: &'a SamplerStats,
}

impl<'a, M: RawMutex, O: SwitchOutputPort, P: PublishPort> SwitchActuator<'a, M, O, P> {
    pub fn new(output: O, sink: &'a P, stats: &'a SamplerStats) -> Self {
        Self {
            output: Mutex::new(output),
            sink,
            stats,
        }
    }

    /// Drive the line to its boot state (off)
    pub async fn init(&self) -> Result<(), HardwareError> {
        self.output.lock().await.set_state(false)
    }

    /// Apply a command and publish the accepted state
    ///
    /// On a hardware failure nothing is published and the error is
    /// returned to the caller.
    pub async fn apply(&self, command: SwitchCommand) -> Result<(), HardwareError> {
        info!(
            "Received LED switch value: {}",
            if command.desired { "ON" } else { "OFF" }
        );

        if let Err(e) = self.output.lock().await.set_state(command.desired) {
            error!("Switch not applied: {:?}", Error::from(e));
            return Err(e);
        }

        if let Err(e) = self
            .sink
            .publish(SWITCH_DEVICE, POWER_PARAM, ParamValue::Bool(command.desired))
            .await
        {
            self.stats.record_publish_failure();
            warn!("Switch state report dropped: {:?}", Error::from(e));
        }

        Ok(())
    }

    /// Last state driven onto the line
    pub async fn state(&self) -> bool {
        self.output.lock().await.state()
    }
}

impl<'a, M: RawMutex, O: SwitchOutputPort, P: PublishPort> ParamWriteHandler
    for SwitchActuator<'a, M, O, P>
{
    async fn on_write(&self, device: &str, param: &str, value: ParamValue) -> Result<(), WriteError> {
        if device != SWITCH_DEVICE || param != POWER_PARAM {
            debug!("Ignoring write to {}/{}", device, param);
            return Ok(());
        }

        let desired = value.as_bool().ok_or(WriteError::InvalidValue)?;
        self.apply(SwitchCommand::new(desired))
            .await
            .map_err(|_| WriteError::Hardware)
    }
}
