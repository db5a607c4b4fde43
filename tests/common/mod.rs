//! Hand-written fakes for the node's ports
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use climate_node::error::StartupStep;
use climate_node::ports::{
    HardwareError, PlatformError, PlatformPort, PublishError, PublishPort, SensorError,
    SensorPort, SwitchOutputPort,
};
use climate_node::{ClimateReading, GpioSwitch, NodeModel, ParamValue, SampleResult};
use embassy_time::{Duration, Instant, Timer};
use embedded_hal::digital::{ErrorType, OutputPin};

/// Sensor returning pre-scripted results, optionally taking time per read
pub struct ScriptedSensor {
    script: VecDeque<SampleResult>,
    fallback: SampleResult,
    read_time: Option<Duration>,
    pub reads: Rc<RefCell<Vec<(Instant, Instant)>>>,
}

impl ScriptedSensor {
    pub fn new(script: impl IntoIterator<Item = SampleResult>) -> Self {
        Self {
            script: script.into_iter().collect(),
            fallback: Err(SensorError::Timeout),
            read_time: None,
            reads: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Sensor that always returns `reading`
    pub fn constant(reading: ClimateReading) -> Self {
        let mut sensor = Self::new(Vec::new());
        sensor.fallback = Ok(reading);
        sensor
    }

    pub fn with_read_time(mut self, read_time: Duration) -> Self {
        self.read_time = Some(read_time);
        self
    }
}

impl SensorPort for ScriptedSensor {
    async fn read(&mut self) -> Result<ClimateReading, SensorError> {
        let started = Instant::now();
        if let Some(read_time) = self.read_time {
            Timer::after(read_time).await;
        }
        self.reads.borrow_mut().push((started, Instant::now()));
        self.script.pop_front().unwrap_or(self.fallback)
    }
}

/// Everything the cloud collaborator was asked to do
#[derive(Clone, Debug, PartialEq)]
pub enum CloudCall {
    Publish {
        device: String,
        param: String,
        value: ParamValue,
    },
    Alert(String),
    Step(StartupStep),
    Registered(NodeModel),
}

impl CloudCall {
    pub fn publish(device: &str, param: &str, value: ParamValue) -> Self {
        CloudCall::Publish {
            device: device.to_string(),
            param: param.to_string(),
            value,
        }
    }
}

/// Cloud collaborator that records calls and can be told to fail
#[derive(Default)]
pub struct RecordingCloud {
    pub calls: RefCell<Vec<CloudCall>>,
    pub publish_fails: Cell<bool>,
    pub failing_step: Cell<Option<StartupStep>>,
}

impl RecordingCloud {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<CloudCall> {
        self.calls.borrow().clone()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn publishes(&self) -> Vec<CloudCall> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, CloudCall::Publish { .. }))
            .collect()
    }

    pub fn steps(&self) -> Vec<StartupStep> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                CloudCall::Step(step) => Some(step),
                _ => None,
            })
            .collect()
    }

    fn step(&self, step: StartupStep) -> Result<(), PlatformError> {
        self.calls.borrow_mut().push(CloudCall::Step(step));
        if self.failing_step.get() == Some(step) {
            Err(PlatformError::InitFailed)
        } else {
            Ok(())
        }
    }
}

impl PublishPort for RecordingCloud {
    async fn publish(&self, device: &str, param: &str, value: ParamValue) -> Result<(), PublishError> {
        self.calls
            .borrow_mut()
            .push(CloudCall::publish(device, param, value));
        if self.publish_fails.get() {
            Err(PublishError::Unavailable)
        } else {
            Ok(())
        }
    }

    async fn alert(&self, message: &str) -> Result<(), PublishError> {
        self.calls
            .borrow_mut()
            .push(CloudCall::Alert(message.to_string()));
        if self.publish_fails.get() {
            Err(PublishError::Unavailable)
        } else {
            Ok(())
        }
    }
}

impl PlatformPort for RecordingCloud {
    async fn init_storage(&self) -> Result<(), PlatformError> {
        self.step(StartupStep::Storage)
    }

    async fn init_network(&self) -> Result<(), PlatformError> {
        self.step(StartupStep::NetworkInit)
    }

    async fn register_node(&self, model: &NodeModel) -> Result<(), PlatformError> {
        self.step(StartupStep::RegisterNode)?;
        self.calls
            .borrow_mut()
            .push(CloudCall::Registered(model.clone()));
        Ok(())
    }

    async fn enable_ota(&self) -> Result<(), PlatformError> {
        self.step(StartupStep::Ota)
    }

    async fn enable_insights(&self) -> Result<(), PlatformError> {
        self.step(StartupStep::Insights)
    }

    async fn start_cloud(&self) -> Result<(), PlatformError> {
        self.step(StartupStep::CloudStart)
    }

    async fn start_network(&self) -> Result<(), PlatformError> {
        self.step(StartupStep::NetworkStart)
    }
}

/// What a fake output line has seen
#[derive(Default, Debug)]
pub struct LineLog {
    pub high: bool,
    pub writes: u32,
    pub transitions: u32,
    pub broken: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct LineFault;

impl embedded_hal::digital::Error for LineFault {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

/// Output pin recording writes and level transitions
#[derive(Clone, Default)]
pub struct FakeLine {
    pub log: Rc<RefCell<LineLog>>,
}

impl FakeLine {
    fn drive(&mut self, high: bool) -> Result<(), LineFault> {
        let mut log = self.log.borrow_mut();
        if log.broken {
            return Err(LineFault);
        }
        log.writes += 1;
        if log.high != high {
            log.transitions += 1;
            log.high = high;
        }
        Ok(())
    }
}

impl ErrorType for FakeLine {
    type Error = LineFault;
}

impl OutputPin for FakeLine {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.drive(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.drive(true)
    }
}

/// LED switch over a fake line, plus a handle to inspect the line
pub fn fake_led() -> (GpioSwitch<FakeLine>, Rc<RefCell<LineLog>>) {
    let line = FakeLine::default();
    let log = line.log.clone();
    (GpioSwitch::new(line), log)
}

/// Output that can never be driven
pub struct DeadOutput;

impl SwitchOutputPort for DeadOutput {
    fn set_state(&mut self, _on: bool) -> Result<(), HardwareError> {
        Err(HardwareError::Gpio)
    }

    fn state(&self) -> bool {
        false
    }
}
