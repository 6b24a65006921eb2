//! Simulated Monitor on the Host
//!
//! Runs the polling loop against simulated sensors, printing each report
//! block to stdout the way a serial console would show it.
//!
//! ## What You'll Learn
//!
//! - Wiring hardware into a monitor with `MonitorBuilder`
//! - Choosing sensors and timing through `MonitorConfig`
//! - What the report looks like when a reading fails
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_simulated_monitor
//! ```

use std::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin, StatefulOutputPin};
use envmon_core::{
    config::{ClimateModel, MonitorConfig},
    errors::SensorError,
    traits::{AnalogInput, ClimateSensor, StdoutTransport},
    time::StdDelay,
    MonitorBuilder,
};
use fugit::MillisDurationU32;
use log::{LevelFilter, Log, Metadata, Record};

/// Logs to stderr so they don't interleave with the report on stdout
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:5}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Daylight sweeping from dusk to bright and back
struct SimulatedLdr {
    step: u32,
}

impl AnalogInput for SimulatedLdr {
    type Error = Infallible;

    fn read_raw(&mut self) -> nb::Result<u16, Infallible> {
        self.step += 1;
        let phase = (self.step / 10) as f32 * 0.4;
        let level = 512.0 + 400.0 * phase.sin();
        Ok(level as u16)
    }
}

/// Someone walks past every third read
struct SimulatedPir {
    reads: u32,
}

impl ErrorType for SimulatedPir {
    type Error = Infallible;
}

impl InputPin for SimulatedPir {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        self.reads += 1;
        Ok(self.reads % 3 == 0)
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        self.is_high().map(|high| !high)
    }
}

/// DHT11 that drops a transaction now and then
struct SimulatedDht {
    reads: u32,
}

impl ClimateSensor for SimulatedDht {
    type Error = SensorError;

    fn read_temperature(&mut self) -> Result<f32, SensorError> {
        self.reads += 1;
        if self.reads % 37 == 0 {
            // DHT drivers report a failed transaction as NaN
            return Ok(f32::NAN);
        }
        Ok(22.0 + (self.reads % 5) as f32 * 0.2)
    }

    fn read_humidity(&mut self) -> Result<f32, SensorError> {
        Ok(48.0 + (self.reads % 7) as f32)
    }
}

/// Built-in LED, shown as a log line
#[derive(Default)]
struct ConsoleLed {
    on: bool,
}

impl ErrorType for ConsoleLed {
    type Error = Infallible;
}

impl OutputPin for ConsoleLed {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.on = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.on = true;
        Ok(())
    }
}

impl StatefulOutputPin for ConsoleLed {
    fn is_set_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.on)
    }

    fn is_set_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.on)
    }

    fn toggle(&mut self) -> Result<(), Infallible> {
        self.on = !self.on;
        log::debug!("LED {}", if self.on { "on" } else { "off" });
        Ok(())
    }
}

fn main() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Info);
    }

    println!("envmon Simulated Monitor");
    println!("========================\n");

    let config = MonitorConfig::default()
        .with_period(MillisDurationU32::from_ticks(500))
        .with_climate_model(ClimateModel::Dht11);

    let mut monitor = match MonitorBuilder::new(ConsoleLed::default(), StdoutTransport, StdDelay)
        .config(config)
        .light(SimulatedLdr { step: 0 })
        .motion(SimulatedPir { reads: 0 })
        .climate(SimulatedDht { reads: 0 })
        .build()
    {
        Ok(monitor) => monitor,
        Err(e) => {
            eprintln!("cannot start monitor: {}", e);
            return;
        }
    };

    for _ in 0..8 {
        monitor.tick();
    }

    let stats = monitor.stats();
    println!("\nCycles:              {}", stats.cycles);
    println!("Sensor failures:     {}", stats.sensor_failures);
    println!("Conversion failures: {}", stats.conversion_failures);
    println!("Undelivered reports: {}", stats.transport_failures);
}
