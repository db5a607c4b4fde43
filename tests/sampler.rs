mod common;

use climate_node::domain::model::{
    HUMIDITY_DEVICE, HUMIDITY_PARAM, TEMPERATURE_DEVICE, TEMPERATURE_PARAM,
};
use climate_node::ports::SensorError;
use climate_node::{
    AlertPolicy, ClimateReading, ParamValue, PeriodicSampler, SamplerStats, TelemetryState,
    TickHandler,
};
use common::{CloudCall, RecordingCloud, ScriptedSensor};
use embassy_futures::block_on;
use embassy_futures::select::{select, Either};
use embassy_time::{Duration, Instant, Timer};

const INTERVAL: Duration = Duration::from_secs(5);

#[test]
fn successful_tick_updates_state_then_publishes() {
    let state = TelemetryState::new();
    let stats = SamplerStats::new();
    let cloud = RecordingCloud::new();
    let sensor = ScriptedSensor::new([Ok(ClimateReading::new(24.5, 55.0))]);
    let mut sampler =
        PeriodicSampler::new(sensor, &state, &stats, &cloud, AlertPolicy::default(), INTERVAL);

    let result = block_on(sampler.tick());

    assert_eq!(result, Ok(ClimateReading::new(24.5, 55.0)));
    assert_eq!(state.current_temperature(), 24.5);
    assert_eq!(state.current_humidity(), 55.0);
    assert_eq!(
        cloud.calls(),
        vec![
            CloudCall::publish(TEMPERATURE_DEVICE, TEMPERATURE_PARAM, ParamValue::Float(24.5)),
            CloudCall::publish(HUMIDITY_DEVICE, HUMIDITY_PARAM, ParamValue::Float(55.0)),
        ]
    );
    assert_eq!(stats.ticks(), 1);
    assert_eq!(stats.reads_ok(), 1);
    assert_eq!(stats.alerts_raised(), 0);
}

#[test]
fn failed_read_leaves_state_unchanged() {
    let state = TelemetryState::with_values(20.0, 50.0);
    let stats = SamplerStats::new();
    let cloud = RecordingCloud::new();
    let sensor = ScriptedSensor::new([Err(SensorError::Checksum)]);
    let mut sampler =
        PeriodicSampler::new(sensor, &state, &stats, &cloud, AlertPolicy::default(), INTERVAL);

    let result = block_on(sampler.tick());

    assert_eq!(result, Err(SensorError::Checksum));
    assert_eq!(state.snapshot(), ClimateReading::new(20.0, 50.0));
    assert!(cloud.calls().is_empty());
    assert_eq!(stats.reads_failed(), 1);
}

#[test]
fn high_temperature_then_failed_read_scenario() {
    let state = TelemetryState::new();
    let stats = SamplerStats::new();
    let cloud = RecordingCloud::new();
    let sensor = ScriptedSensor::new([
        Ok(ClimateReading::new(31.2, 40.0)),
        Err(SensorError::Timeout),
    ]);
    let mut sampler = PeriodicSampler::new(
        sensor,
        &state,
        &stats,
        &cloud,
        AlertPolicy::new(30.0),
        INTERVAL,
    );

    // t = 0
    block_on(sampler.tick()).unwrap();
    assert_eq!(
        cloud.calls(),
        vec![
            CloudCall::publish(TEMPERATURE_DEVICE, TEMPERATURE_PARAM, ParamValue::Float(31.2)),
            CloudCall::publish(HUMIDITY_DEVICE, HUMIDITY_PARAM, ParamValue::Float(40.0)),
            CloudCall::Alert("High Temperature Alert: 31.2°C!".to_string()),
        ]
    );
    assert_eq!(stats.alerts_raised(), 1);

    // t = 5: read fails
    cloud.clear();
    assert_eq!(block_on(sampler.tick()), Err(SensorError::Timeout));
    assert!(cloud.calls().is_empty());
    assert_eq!(state.snapshot(), ClimateReading::new(31.2, 40.0));
    assert_eq!(stats.reads_failed(), 1);
    assert_eq!(stats.ticks(), 2);
}

#[test]
fn alert_repeats_on_every_tick_above_threshold() {
    let state = TelemetryState::new();
    let stats = SamplerStats::new();
    let cloud = RecordingCloud::new();
    let sensor = ScriptedSensor::constant(ClimateReading::new(35.0, 30.0));
    let mut sampler =
        PeriodicSampler::new(sensor, &state, &stats, &cloud, AlertPolicy::default(), INTERVAL);

    block_on(sampler.tick()).unwrap();
    block_on(sampler.tick()).unwrap();

    let alerts = cloud
        .calls()
        .into_iter()
        .filter(|c| matches!(c, CloudCall::Alert(_)))
        .count();
    assert_eq!(alerts, 2);
}

#[test]
fn threshold_boundary_does_not_alert() {
    let state = TelemetryState::new();
    let stats = SamplerStats::new();
    let cloud = RecordingCloud::new();
    let sensor = ScriptedSensor::new([Ok(ClimateReading::new(30.0, 45.0))]);
    let mut sampler =
        PeriodicSampler::new(sensor, &state, &stats, &cloud, AlertPolicy::default(), INTERVAL);

    block_on(sampler.tick()).unwrap();

    assert_eq!(cloud.publishes().len(), 2);
    assert_eq!(cloud.calls().len(), 2);
}

#[test]
fn publish_failures_are_swallowed() {
    let state = TelemetryState::new();
    let stats = SamplerStats::new();
    let cloud = RecordingCloud::new();
    cloud.publish_fails.set(true);
    let sensor = ScriptedSensor::new([Ok(ClimateReading::new(33.0, 20.0))]);
    let mut sampler =
        PeriodicSampler::new(sensor, &state, &stats, &cloud, AlertPolicy::default(), INTERVAL);

    let result = block_on(sampler.tick());

    assert!(result.is_ok());
    assert_eq!(state.current_temperature(), 33.0);
    // both publishes and the alert were still attempted
    assert_eq!(cloud.calls().len(), 3);
    assert_eq!(stats.publish_failures(), 3);
}

#[test]
fn tick_handler_runs_one_tick() {
    let state = TelemetryState::new();
    let stats = SamplerStats::new();
    let cloud = RecordingCloud::new();
    let sensor = ScriptedSensor::new([Ok(ClimateReading::new(21.0, 60.0))]);
    let mut sampler =
        PeriodicSampler::new(sensor, &state, &stats, &cloud, AlertPolicy::default(), INTERVAL);

    block_on(sampler.on_tick());

    assert_eq!(state.snapshot(), ClimateReading::new(21.0, 60.0));
    assert_eq!(stats.ticks(), 1);
}

#[test]
fn slow_reads_delay_ticks_without_overlap() {
    let state = TelemetryState::new();
    let stats = SamplerStats::new();
    let cloud = RecordingCloud::new();
    let interval = Duration::from_millis(20);
    let read_time = Duration::from_millis(50);
    let sensor =
        ScriptedSensor::constant(ClimateReading::new(22.0, 40.0)).with_read_time(read_time);
    let reads = sensor.reads.clone();
    let mut sampler =
        PeriodicSampler::new(sensor, &state, &stats, &cloud, AlertPolicy::default(), interval);

    let started = Instant::now();
    let outcome = block_on(select(sampler.run(), Timer::after_millis(400)));
    assert!(matches!(outcome, Either::Second(())));

    let reads = reads.borrow();
    assert!(reads.len() >= 3, "only {} ticks ran", reads.len());
    // first tick waits one interval
    assert!(reads[0].0 - started >= interval);
    for pair in reads.windows(2) {
        let (_, prev_end) = pair[0];
        let (next_start, _) = pair[1];
        // never concurrent: each tick starts after the previous one ended
        assert!(next_start >= prev_end);
    }
    // ticks were delayed, not queued: no more than one per read duration
    assert!(reads.len() as u64 <= 400 / read_time.as_millis() + 1);
}

#[test]
fn fast_reads_follow_the_interval() {
    let state = TelemetryState::new();
    let stats = SamplerStats::new();
    let cloud = RecordingCloud::new();
    let interval = Duration::from_millis(40);
    let sensor = ScriptedSensor::constant(ClimateReading::new(22.0, 40.0));
    let reads = sensor.reads.clone();
    let mut sampler =
        PeriodicSampler::new(sensor, &state, &stats, &cloud, AlertPolicy::default(), interval);

    block_on(select(sampler.run(), Timer::after_millis(300)));

    let reads = reads.borrow();
    // deadlines at 40, 80, ... 280 ms
    assert!((4..=8).contains(&reads.len()), "{} ticks ran", reads.len());
    for pair in reads.windows(2) {
        let gap = pair[1].0 - pair[0].0;
        assert!(gap >= Duration::from_millis(20), "ticks {} ms apart", gap.as_millis());
    }
}
