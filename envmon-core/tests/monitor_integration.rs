//! End-to-end cycles against scripted hardware
//!
//! Covers:
//! - ordering and content of consecutive report blocks
//! - disabled sensors staying untouched
//! - failures that must not stop the loop (transport, LED, sensors)
//! - delay accounting per cycle

#![cfg(test)]

mod common;

use common::{
    RecordingDelay, RecordingLed, RecordingTransport, ScriptedAdc, ScriptedDht, ScriptedPir,
};
use envmon_core::{
    config::{MonitorConfig, SensorKind, SensorSet},
    errors::{ConfigError, ConversionError, SamplingError, SensorError},
    light::LightModel,
    monitor::MonitorBuilder,
    readings::MotionState,
};
use fugit::MillisDurationU32;

const BANNER: &str = "#############################\r\n";

fn three_sample_config() -> MonitorConfig {
    MonitorConfig::default().with_samples(3)
}

fn lux_line(raw: f32) -> String {
    let lux = LightModel::default().to_lux(raw).unwrap();
    format!("Luminosity (in Lux): {:.2}\r\n", lux)
}

#[test]
fn three_cycles_report_in_order_without_leakage() {
    let adc = ScriptedAdc::new([500, 512, 524, 1023, 1023, 1023, 100, 100, 100]).slow();
    let pir = ScriptedPir::new([true, false, true]);
    let dht = ScriptedDht::new(
        [24.0, 25.0, 26.0, 20.0, 20.0, 20.0, f32::NAN],
        [59.0, 60.0, 61.0, 40.0, 40.0, 40.0, 50.0, 50.0, 50.0],
    );

    let mut monitor = MonitorBuilder::new(
        RecordingLed::default(),
        RecordingTransport::default(),
        RecordingDelay::default(),
    )
    .config(three_sample_config())
    .light(adc)
    .motion(pir)
    .climate(dht)
    .build()
    .unwrap();

    let first = monitor.tick();
    let second = monitor.tick();
    let third = monitor.tick();

    assert_eq!(first.light.unwrap().unwrap().raw_mean, 512.0);
    assert_eq!(second.motion, Some(Ok(MotionState::Stopped)));
    assert_eq!(
        second.light.unwrap().unwrap().lux,
        Err(ConversionError::Saturated)
    );
    assert_eq!(
        third.climate.unwrap().temperature_c,
        Err(SamplingError::Sensor(SensorError::InvalidSample))
    );

    let blocks = monitor.reporter().transport().blocks();
    assert_eq!(blocks.len(), 3);

    let expected_first = [
        BANNER.to_string(),
        "Luminosity (0-1023): 512\r\n".to_string(),
        lux_line(512.0),
        "Presence: MOVING\r\n".to_string(),
        "Temperature: 25.0 oC\r\n".to_string(),
        "Humidity: 60.0%\r\n".to_string(),
        BANNER.to_string(),
    ]
    .concat();
    assert_eq!(blocks[0], expected_first);

    let expected_second = [
        BANNER,
        "Luminosity (0-1023): 1023\r\n",
        "Luminosity (in Lux): unavailable (sensor saturated)\r\n",
        "Presence: STOPPED\r\n",
        "Temperature: 20.0 oC\r\n",
        "Humidity: 40.0%\r\n",
        BANNER,
    ]
    .concat();
    assert_eq!(blocks[1], expected_second);

    let expected_third = [
        BANNER.to_string(),
        "Luminosity (0-1023): 100\r\n".to_string(),
        lux_line(100.0),
        "Presence: MOVING\r\n".to_string(),
        "Temperature: unavailable (invalid sample)\r\n".to_string(),
        "Humidity: 50.0%\r\n".to_string(),
        BANNER.to_string(),
    ]
    .concat();
    assert_eq!(blocks[2], expected_third);

    let stats = monitor.stats();
    assert_eq!(stats.cycles, 3);
    assert_eq!(stats.conversion_failures, 1);
    assert_eq!(stats.sensor_failures, 1);
    assert_eq!(stats.transport_failures, 0);

    assert_eq!(monitor.indicator().toggles, 3);
    assert!(monitor.indicator().high);
    assert_eq!(monitor.reporter().transport().flushes, 3);
}

#[test]
fn each_cycle_sleeps_samples_then_period() {
    let mut monitor = MonitorBuilder::new(
        RecordingLed::default(),
        RecordingTransport::default(),
        RecordingDelay::default(),
    )
    .config(three_sample_config().with_period(MillisDurationU32::from_ticks(250)))
    .light(ScriptedAdc::constant(400, 3))
    .motion(ScriptedPir::new([false]))
    .climate(ScriptedDht::constant(21.5, 45.0, 3))
    .build()
    .unwrap();

    monitor.tick();

    // light 3, temperature 3, humidity 3; motion is instantaneous
    let mut expected = vec![1; 9];
    expected.push(250);
    assert_eq!(monitor.delay().sleeps_ms, expected);
}

#[test]
fn disabled_sensors_are_never_read() {
    let mut adc = ScriptedAdc::constant(512, 30);
    let mut dht = ScriptedDht::constant(20.0, 50.0, 30);

    {
        let config = three_sample_config()
            .with_sensors(SensorSet::all().without(SensorKind::Light).without(SensorKind::Climate));
        let mut monitor = MonitorBuilder::new(
            RecordingLed::default(),
            RecordingTransport::default(),
            RecordingDelay::default(),
        )
        .config(config)
        .light(&mut adc)
        .motion(ScriptedPir::new([true, true]))
        .climate(&mut dht)
        .build()
        .unwrap();

        let readings = monitor.tick();
        assert!(readings.light.is_none());
        assert!(readings.climate.is_none());
        assert_eq!(readings.motion, Some(Ok(MotionState::Moving)));

        let text = monitor.reporter().transport().text();
        assert_eq!(
            text,
            [BANNER, "Presence: MOVING\r\n", BANNER].concat()
        );
        assert_eq!(monitor.delay().sleeps_ms, vec![1000]);
    }

    assert_eq!(adc.reads, 0);
    assert_eq!(dht.temperature_reads, 0);
    assert_eq!(dht.humidity_reads, 0);
}

#[test]
fn transport_failure_skips_one_block_only() {
    let mut monitor = MonitorBuilder::new(
        RecordingLed::default(),
        RecordingTransport::failing_on([1]),
        RecordingDelay::default(),
    )
    .config(three_sample_config().with_sensors(SensorSet::empty().with(SensorKind::Motion)))
    .motion(ScriptedPir::new([true, false, true]))
    .build()
    .unwrap();

    for _ in 0..3 {
        monitor.tick();
    }

    let blocks = monitor.reporter().transport().blocks();
    assert_eq!(blocks.len(), 2);
    assert!(blocks[0].contains("Presence: MOVING"));
    assert!(blocks[1].contains("Presence: MOVING"));
    assert_eq!(monitor.stats().transport_failures, 1);
    assert_eq!(monitor.stats().cycles, 3);
}

#[test]
fn broken_led_does_not_stop_the_cycle() {
    let led = RecordingLed {
        broken: true,
        ..RecordingLed::default()
    };
    let mut monitor = MonitorBuilder::new(led, RecordingTransport::default(), RecordingDelay::default())
        .config(three_sample_config().with_sensors(SensorSet::empty().with(SensorKind::Light)))
        .light(ScriptedAdc::constant(512, 3))
        .build()
        .unwrap();

    let readings = monitor.tick();
    assert!(readings.light.unwrap().is_ok());
    assert_eq!(monitor.stats().indicator_failures, 1);
    assert_eq!(monitor.reporter().transport().blocks().len(), 1);
}

#[test]
fn sensor_that_stops_answering_is_reported_unavailable() {
    // enough counts for one cycle only
    let mut monitor = MonitorBuilder::new(
        RecordingLed::default(),
        RecordingTransport::default(),
        RecordingDelay::default(),
    )
    .config(three_sample_config().with_sensors(SensorSet::empty().with(SensorKind::Light)))
    .light(ScriptedAdc::constant(800, 3))
    .build()
    .unwrap();

    assert!(monitor.tick().light.unwrap().is_ok());
    assert_eq!(
        monitor.tick().light,
        Some(Err(SamplingError::Sensor(SensorError::ReadFailed)))
    );

    let blocks = monitor.reporter().transport().blocks();
    assert_eq!(
        blocks[1],
        [
            BANNER,
            "Luminosity (0-1023): unavailable (read failed)\r\n",
            "Luminosity (in Lux): unavailable (read failed)\r\n",
            BANNER,
        ]
        .concat()
    );
    assert_eq!(monitor.stats().sensor_failures, 1);
}

#[test]
fn pir_failure_is_reported_and_next_read_recovers() {
    let mut monitor = MonitorBuilder::new(
        RecordingLed::default(),
        RecordingTransport::default(),
        RecordingDelay::default(),
    )
    .config(three_sample_config().with_sensors(SensorSet::empty().with(SensorKind::Motion)))
    .motion(ScriptedPir::with_failures([None, Some(false)]))
    .build()
    .unwrap();

    assert_eq!(
        monitor.tick().motion,
        Some(Err(SamplingError::Sensor(SensorError::ReadFailed)))
    );
    assert_eq!(monitor.tick().motion, Some(Ok(MotionState::Stopped)));

    let blocks = monitor.reporter().transport().blocks();
    assert!(blocks[0].contains("Presence: unavailable (read failed)\r\n"));
    assert!(blocks[1].contains("Presence: STOPPED\r\n"));
}

#[test]
fn enabled_sensor_without_hardware_is_rejected() {
    let result = MonitorBuilder::new(
        RecordingLed::default(),
        RecordingTransport::default(),
        RecordingDelay::default(),
    )
    .light(ScriptedAdc::default())
    .motion(ScriptedPir::default())
    .build();

    assert!(matches!(
        result,
        Err(ConfigError::MissingHardware { sensor: "climate" })
    ));
}
