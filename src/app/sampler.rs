//! Periodic sampler - read, record, publish, alert
//!
//! One tick runs `SensorPort::read`, then on success updates the telemetry,
//! publishes temperature and humidity and evaluates the alert policy. A
//! failed read is logged and nothing else happens until the next tick.
//!
//! Ticks never overlap: the run loop awaits each tick to completion before
//! computing the next deadline. A tick that overruns the interval delays
//! the next one; missed ticks are not queued or replayed.

use embassy_time::{Duration, Instant, Timer};

use crate::domain::model::{HUMIDITY_DEVICE, HUMIDITY_PARAM, TEMPERATURE_DEVICE, TEMPERATURE_PARAM};
use crate::domain::{AlertPolicy, ParamValue, SampleResult, SamplerStats, TelemetryState};
use crate::error::Error;
use crate::ports::inbound::TickHandler;
use crate::ports::publish::PublishPort;
use crate::ports::sensor::SensorPort;

/// Deadline bookkeeping for a fixed-interval, non-overlapping timer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickSchedule {
    interval: Duration,
    next: Instant,
}

impl TickSchedule {
    /// First deadline is one interval after `start`
    pub fn starting_at(start: Instant, interval: Duration) -> Self {
        Self {
            interval,
            next: start + interval,
        }
    }

    /// When the next tick should start
    pub fn deadline(&self) -> Instant {
        self.next
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Move to the following deadline once a tick has finished at `now`
    ///
    /// If the regular deadline has already passed, the next tick starts
    /// immediately and the schedule continues from `now`.
    pub fn advance(&mut self, now: Instant) -> Instant {
        let regular = self.next + self.interval;
        self.next = if regular < now { now } else { regular };
        self.next
    }
}

/// Periodic temperature/humidity sampler
pub struct PeriodicSampler<'a, S: SensorPort, P: PublishPort> {
    sensor: S,
    state: &'a TelemetryState,
    stats: &'a SamplerStats,
    sink: &'a P,
    policy: AlertPolicy,
    interval: Duration,
}

impl<'a, S: SensorPort, P: PublishPort> PeriodicSampler<'a, S, P> {
    pub fn new(
        sensor: S,
        state: &'a TelemetryState,
        stats: &'a SamplerStats,
        sink: &'a P,
        policy: AlertPolicy,
        interval: Duration,
    ) -> Self {
        Self {
            sensor,
            state,
            stats,
            sink,
            policy,
            interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn policy(&self) -> &AlertPolicy {
        &self.policy
    }

    /// Access the sensor adapter (diagnostics, tests)
    pub fn sensor_mut(&mut self) -> &mut S {
        &mut self.sensor
    }

    /// Sample forever at the configured interval
    ///
    /// The sensor read may block this task for its bounded protocol time,
    /// so run the sampler on its own task rather than on a context shared
    /// with latency-sensitive work.
    pub async fn run(&mut self) -> ! {
        info!("Sampler started, interval {} ms", self.interval.as_millis());
        let mut schedule = TickSchedule::starting_at(Instant::now(), self.interval);
        loop {
            Timer::at(schedule.deadline()).await;
            let _ = self.tick().await;
            let now = Instant::now();
            if now > schedule.deadline() + self.interval {
                warn!(
                    "Tick overran interval by {} ms",
                    (now - schedule.deadline() - self.interval).as_millis()
                );
            }
            schedule.advance(now);
        }
    }

    /// Execute one tick to completion and return what the sensor produced
    pub async fn tick(&mut self) -> SampleResult {
        self.stats.record_tick();

        let reading = match self.sensor.read().await {
            Ok(reading) => reading,
            Err(e) => {
                self.stats.record_read(false);
                error!("Failed to read from sensor: {:?}", Error::from(e));
                return Err(e);
            }
        };
        self.stats.record_read(true);

        let (temperature, humidity) = (reading.temperature_c, reading.humidity_pct);
        self.state.update(temperature, humidity);
        info!("{}", reading.summary().as_str());

        self.report(TEMPERATURE_DEVICE, TEMPERATURE_PARAM, ParamValue::Float(temperature))
            .await;
        self.report(HUMIDITY_DEVICE, HUMIDITY_PARAM, ParamValue::Float(humidity))
            .await;

        if let Some(alert) = self.policy.check(temperature) {
            warn!("{}", alert.as_str());
            self.stats.record_alert();
            if let Err(e) = self.sink.alert(alert.as_str()).await {
                self.stats.record_publish_failure();
                warn!("Alert dropped: {:?}", Error::from(e));
            }
        }

        Ok(reading)
    }

    async fn report(&self, device: &str, param: &str, value: ParamValue) {
        if let Err(e) = self.sink.publish(device, param, value).await {
            self.stats.record_publish_failure();
            warn!("Update of {}/{} dropped: {:?}", device, param, Error::from(e));
        }
    }
}

impl<'a, S: SensorPort, P: PublishPort> TickHandler for PeriodicSampler<'a, S, P> {
    async fn on_tick(&mut self) {
        let _ = self.tick().await;
    }
}
