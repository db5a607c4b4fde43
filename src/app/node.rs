//! Node - composition root
//!
//! Owns the sampler and the actuator, holds references to the shared
//! telemetry, statistics and cloud collaborator, and runs the boot
//! sequence in the order the vendor framework expects.

use core::convert::Infallible;
use core::future::Future;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_time::Timer;

use crate::app::actuator::SwitchActuator;
use crate::app::sampler::PeriodicSampler;
use crate::config::{ConfigError, NodeConfig};
use crate::domain::{AlertPolicy, NodeModel, SamplerStats, TelemetryState};
use crate::error::{Error, InitCause, InitError, StartupStep};
use crate::ports::output::SwitchOutputPort;
use crate::ports::platform::{PlatformError, PlatformPort};
use crate::ports::publish::PublishPort;
use crate::ports::sensor::SensorPort;

/// The assembled node
///
/// `P` is the vendor framework: it both runs the startup entry points and
/// receives published values.
pub struct Node<'a, P, S, O, M>
where
    P: PlatformPort + PublishPort,
    S: SensorPort,
    O: SwitchOutputPort,
    M: RawMutex,
{
    config: NodeConfig,
    telemetry: &'a TelemetryState,
    stats: &'a SamplerStats,
    platform: &'a P,
    sampler: PeriodicSampler<'a, S, P>,
    actuator: SwitchActuator<'a, M, O, P>,
}

impl<'a, P, S, O, M> Node<'a, P, S, O, M>
where
    P: PlatformPort + PublishPort,
    S: SensorPort,
    O: SwitchOutputPort,
    M: RawMutex,
{
    /// Assemble the node
    ///
    /// The configuration is validated first; an inconsistent one (for
    /// example a zero sampling interval) is rejected before anything runs.
    pub fn new(
        config: NodeConfig,
        telemetry: &'a TelemetryState,
        stats: &'a SamplerStats,
        platform: &'a P,
        sensor: S,
        output: O,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let sampler = PeriodicSampler::new(
            sensor,
            telemetry,
            stats,
            platform,
            AlertPolicy::new(config.alert_threshold_c),
            config.sampling_interval(),
        );
        let actuator = SwitchActuator::new(output, platform, stats);

        Ok(Self {
            config,
            telemetry,
            stats,
            platform,
            sampler,
            actuator,
        })
    }

    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    pub fn telemetry(&self) -> &TelemetryState {
        self.telemetry
    }

    pub fn stats(&self) -> &SamplerStats {
        self.stats
    }

    pub fn actuator(&self) -> &SwitchActuator<'a, M, O, P> {
        &self.actuator
    }

    pub fn sampler_mut(&mut self) -> &mut PeriodicSampler<'a, S, P> {
        &mut self.sampler
    }

    /// Split into the sampler (run on its own task) and the actuator (handed
    /// to whatever delivers cloud writes)
    pub fn parts(&mut self) -> (&mut PeriodicSampler<'a, S, P>, &SwitchActuator<'a, M, O, P>) {
        (&mut self.sampler, &self.actuator)
    }

    /// Boot the node
    ///
    /// Driver init, storage, network init, node registration, OTA,
    /// insights, cloud start, network start. OTA and insights are best
    /// effort; every other failure is fatal and is reported after the
    /// configured grace delay.
    pub async fn start(&self) -> Result<(), Error> {
        info!("Starting node '{}' ({})", self.config.node_name, self.config.node_type);

        if let Err(e) = self.actuator.init().await {
            return self.fatal(StartupStep::DriverInit, InitCause::Hardware(e)).await;
        }

        self.required(StartupStep::Storage, self.platform.init_storage())
            .await?;
        self.required(StartupStep::NetworkInit, self.platform.init_network())
            .await?;

        let model = NodeModel::from_telemetry(
            self.config.node_name,
            self.config.node_type,
            self.telemetry,
            self.actuator.state().await,
        );
        self.required(StartupStep::RegisterNode, self.platform.register_node(&model))
            .await?;
        info!("Registered {} devices", model.devices.len());

        self.optional(StartupStep::Ota, self.platform.enable_ota()).await;
        self.optional(StartupStep::Insights, self.platform.enable_insights())
            .await;

        self.required(StartupStep::CloudStart, self.platform.start_cloud())
            .await?;
        self.required(StartupStep::NetworkStart, self.platform.start_network())
            .await?;

        info!("Node started");
        Ok(())
    }

    /// Boot, then sample forever
    pub async fn run(&mut self) -> Result<Infallible, Error> {
        self.start().await?;
        self.sampler.run().await
    }

    async fn required(
        &self,
        step: StartupStep,
        op: impl Future<Output = Result<(), PlatformError>>,
    ) -> Result<(), Error> {
        debug!("Startup step {:?}", step);
        match op.await {
            Ok(()) => Ok(()),
            Err(e) => self.fatal(step, InitCause::Platform(e)).await,
        }
    }

    async fn optional(&self, step: StartupStep, op: impl Future<Output = Result<(), PlatformError>>) {
        debug!("Startup step {:?}", step);
        if let Err(e) = op.await {
            warn!("{:?} unavailable: {:?}", step, e);
        }
    }

    async fn fatal(&self, step: StartupStep, cause: InitCause) -> Result<(), Error> {
        error!("Startup failed at {:?} ({:?}). Aborting!", step, cause);
        if self.config.fatal_grace_ms > 0 {
            Timer::after(self.config.fatal_grace()).await;
        }
        Err(Error::FatalInit(InitError { step, cause }))
    }
}
