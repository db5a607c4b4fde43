//! Climate node host simulator
//!
//! Runs the full node (boot sequence, sampler, LED actuator) on the PC
//! against a simulated DHT sensor and a cloud stand-in that only logs.
//!
//! ## Usage
//!
//! ```bash
//! # Default: 5 s interval, 30 °C threshold, run forever
//! cargo run --features std --bin climate_node_sim
//!
//! # Fast run: 1 s interval, 10 ticks, toggle the LED every 3 ticks
//! cargo run --features std --bin climate_node_sim -- --interval 1 --ticks 10 --toggle-every 3
//!
//! # Hold the reset button for 4 s, two seconds after boot (network reset)
//! cargo run --features std --bin climate_node_sim -- --interval 1 --ticks 10 --press-at 2 --hold 4
//! ```
//!
//! Log level follows `RUST_LOG` (default `info`).

use core::convert::Infallible;

use embassy_futures::block_on;
use embassy_futures::select::select3;
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_time::{Duration, Instant, Timer};
use embedded_hal::digital::ErrorType;
use embedded_hal_async::digital::Wait;

use climate_node::ports::{HardwareError, SensorError};
use climate_node::{
    ClimateReading, Error, LoggingCloud, Node, NodeConfig, ResetButton, SamplerStats, SensorPort,
    SwitchCommand, SwitchOutputPort, TelemetryState,
};

/// Every Nth read fails, like a DHT missing the occasional frame
const FAILED_READ_EVERY: u32 = 7;

struct Options {
    interval_secs: u32,
    threshold_c: Option<f32>,
    ticks: u32,
    toggle_every: u32,
    press_at_secs: Option<u64>,
    hold_secs: u64,
}

fn parse_args() -> Result<Options, String> {
    let args: Vec<String> = std::env::args().collect();

    fn value<T: std::str::FromStr>(args: &[String], flag: &str) -> Result<Option<T>, String> {
        match args.iter().position(|a| a == flag) {
            Some(idx) => args
                .get(idx + 1)
                .ok_or_else(|| format!("{} needs a value", flag))?
                .parse()
                .map(Some)
                .map_err(|_| format!("invalid value for {}", flag)),
            None => Ok(None),
        }
    }

    Ok(Options {
        interval_secs: value(&args, "--interval")?.unwrap_or(NodeConfig::default().sampling_interval_secs),
        threshold_c: value(&args, "--threshold")?,
        ticks: value(&args, "--ticks")?.unwrap_or(0),
        toggle_every: value(&args, "--toggle-every")?.unwrap_or(0),
        press_at_secs: value(&args, "--press-at")?,
        hold_secs: value(&args, "--hold")?.unwrap_or(4),
    })
}

/// Sensor that warms up slowly, cools down, and drops a frame now and then
struct SimulatedDht {
    reads: u32,
}

impl SensorPort for SimulatedDht {
    async fn read(&mut self) -> Result<ClimateReading, SensorError> {
        self.reads += 1;
        if self.reads % FAILED_READ_EVERY == 0 {
            return Err(SensorError::Timeout);
        }
        // triangle wave 26.0..=33.0 °C, period 28 reads
        let phase = (self.reads % 28) as f32;
        let offset = if phase < 14.0 { phase } else { 28.0 - phase };
        let temperature = 26.0 + offset * 0.5;
        let humidity = 55.0 - offset;
        Ok(ClimateReading::new(temperature, humidity))
    }
}

/// LED that only remembers its level
#[derive(Default)]
struct SimulatedLed {
    on: bool,
}

impl SwitchOutputPort for SimulatedLed {
    fn set_state(&mut self, on: bool) -> Result<(), HardwareError> {
        self.on = on;
        Ok(())
    }

    fn state(&self) -> bool {
        self.on
    }
}

/// Reset button pressed at most once, at a fixed time after boot
struct SimulatedButton {
    press: Option<(Instant, Duration)>,
    release_at: Option<Instant>,
}

impl ErrorType for SimulatedButton {
    type Error = Infallible;
}

impl Wait for SimulatedButton {
    async fn wait_for_high(&mut self) -> Result<(), Self::Error> {
        if let Some(at) = self.release_at {
            Timer::at(at).await;
        }
        Ok(())
    }

    async fn wait_for_low(&mut self) -> Result<(), Self::Error> {
        if self.release_at.is_some_and(|at| Instant::now() < at) {
            return Ok(());
        }
        match self.press.take() {
            Some((at, hold)) => {
                Timer::at(at).await;
                log::info!("Reset button pressed for {} s", hold.as_secs());
                self.release_at = Some(at + hold);
                Ok(())
            }
            None => core::future::pending().await,
        }
    }

    async fn wait_for_rising_edge(&mut self) -> Result<(), Self::Error> {
        self.wait_for_high().await
    }

    async fn wait_for_falling_edge(&mut self) -> Result<(), Self::Error> {
        self.wait_for_low().await
    }

    async fn wait_for_any_edge(&mut self) -> Result<(), Self::Error> {
        self.wait_for_low().await
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = parse_args()?;

    let mut config = NodeConfig {
        sampling_interval_secs: options.interval_secs,
        fatal_grace_ms: 0,
        ..NodeConfig::default()
    };
    if let Some(threshold) = options.threshold_c {
        config.alert_threshold_c = threshold;
    }

    let telemetry = TelemetryState::new();
    let stats = SamplerStats::new();
    let cloud = LoggingCloud::new();

    let mut node: Node<'_, LoggingCloud, SimulatedDht, SimulatedLed, NoopRawMutex> = Node::new(
        config,
        &telemetry,
        &stats,
        &cloud,
        SimulatedDht { reads: 0 },
        SimulatedLed::default(),
    )?;

    let booted = Instant::now();
    let button = SimulatedButton {
        press: options.press_at_secs.map(|secs| {
            (
                booted + Duration::from_secs(secs),
                Duration::from_secs(options.hold_secs),
            )
        }),
        release_at: None,
    };
    let mut reset_button = ResetButton::from_config(button, &cloud, node.config());

    let result: Result<(), Error> = block_on(async {
        node.start().await?;

        let interval = node.config().sampling_interval();
        let (sampler, actuator) = node.parts();

        // Plays the cloud side: toggles the LED like a user in the app would
        let driver = async {
            let mut led_on = false;
            let mut tick = 0u32;
            while options.ticks == 0 || tick < options.ticks {
                Timer::after(interval).await;
                tick += 1;
                if options.toggle_every > 0 && tick % options.toggle_every == 0 {
                    led_on = !led_on;
                    if let Err(e) = actuator.apply(SwitchCommand::new(led_on)).await {
                        log::error!("LED command failed: {:?}", e);
                    }
                }
            }
            // let the last tick finish
            Timer::after(Duration::from_millis(100)).await;
        };

        select3(sampler.run(), reset_button.run(), driver).await;
        Ok(())
    });

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }

    println!(
        "{} ticks, {} reads ok, {} failed, {} alerts, {} publishes, {} resets, last {:.1}°C / {:.1}%",
        stats.ticks(),
        stats.reads_ok(),
        stats.reads_failed(),
        stats.alerts_raised(),
        cloud.published(),
        cloud.resets(),
        telemetry.current_temperature(),
        telemetry.current_humidity(),
    );
    Ok(())
}
