//! The Polling Loop
//!
//! A [`Monitor`] owns every hardware handle and runs one cycle per
//! [`tick`](Monitor::tick):
//!
//! ```text
//! ┌────────────┐   ┌────────────────────────────┐   ┌────────┐   ┌───────┐
//! │ toggle LED │──►│ light → motion → climate   │──►│ report │──►│ sleep │──┐
//! └────────────┘   └────────────────────────────┘   └────────┘   └───────┘  │
//!       ▲                                                                    │
//!       └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is one state (running) and no exit; [`run`](Monitor::run) only
//! returns on reset. A failure in any step is logged, counted in
//! [`MonitorStats`] and shown in the report. The next cycle starts clean.

mod builder;

pub use builder::MonitorBuilder;

use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, StatefulOutputPin},
};

use crate::{
    config::{MonitorConfig, SensorKind},
    errors::{SamplingError, SensorError},
    readings::{ClimateReading, CycleReadings, LightReading, MotionState},
    report::Reporter,
    sampler::{sample_analog, sample_humidity, sample_temperature},
    time::sleep,
    traits::{Absent, AnalogInput, ClimateSensor, Transport},
};

/// Running totals since the monitor was built
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MonitorStats {
    /// Completed cycles
    pub cycles: u32,
    /// Sampling runs or reads that failed
    pub sensor_failures: u32,
    /// Light means the illuminance model could not convert
    pub conversion_failures: u32,
    /// LED toggles the pin refused
    pub indicator_failures: u32,
    /// Report blocks that were not delivered
    pub transport_failures: u32,
}

/// Sensor polling loop
///
/// Built by [`MonitorBuilder`]. Sensor slots that were never attached keep
/// the [`Absent`] type.
pub struct Monitor<L, T, D, A = Absent, M = Absent, C = Absent> {
    config: MonitorConfig,
    light: Option<A>,
    motion: Option<M>,
    climate: Option<C>,
    indicator: L,
    reporter: Reporter<T>,
    delay: D,
    stats: MonitorStats,
}

impl<L, T, D, A, M, C> Monitor<L, T, D, A, M, C>
where
    L: StatefulOutputPin,
    T: Transport,
    D: DelayNs,
    A: AnalogInput,
    M: InputPin,
    C: ClimateSensor,
{
    /// Run one full cycle and return what was measured
    pub fn tick(&mut self) -> CycleReadings {
        log_debug!("cycle {} start", self.stats.cycles);

        self.toggle_indicator();
        let readings = self.sample_cycle();
        self.record(&readings);
        self.report(&readings);
        sleep(&mut self.delay, self.config.period);

        self.stats.cycles = self.stats.cycles.wrapping_add(1);
        readings
    }

    /// Cycle forever
    pub fn run(&mut self) -> ! {
        loop {
            let _ = self.tick();
        }
    }

    /// Sample every enabled sensor once, without reporting or sleeping
    /// for the period
    pub fn sample_cycle(&mut self) -> CycleReadings {
        let sensors = self.config.sensors;

        CycleReadings {
            light: sensors.contains(SensorKind::Light).then(|| self.sample_light()),
            motion: sensors.contains(SensorKind::Motion).then(|| self.read_motion()),
            climate: sensors.contains(SensorKind::Climate).then(|| self.sample_climate()),
        }
    }

    fn toggle_indicator(&mut self) {
        if let Err(_e) = self.indicator.toggle() {
            log_warn!("indicator toggle failed: {:?}", _e);
            self.stats.indicator_failures = self.stats.indicator_failures.saturating_add(1);
        }
    }

    fn sample_light(&mut self) -> Result<LightReading, SamplingError> {
        let adc = self
            .light
            .as_mut()
            .ok_or(SamplingError::Sensor(SensorError::NotAttached))?;
        let raw_mean = sample_analog(
            adc,
            self.config.samples,
            self.config.sample_interval,
            &mut self.delay,
        )?;

        Ok(LightReading {
            raw_mean,
            lux: self.config.light_model.to_lux(raw_mean),
        })
    }

    fn read_motion(&mut self) -> Result<MotionState, SamplingError> {
        let pin = self
            .motion
            .as_mut()
            .ok_or(SamplingError::Sensor(SensorError::NotAttached))?;

        pin.is_high().map(MotionState::from_level).map_err(|_e| {
            log_warn!("motion read failed: {:?}", _e);
            SamplingError::Sensor(SensorError::ReadFailed)
        })
    }

    fn sample_climate(&mut self) -> ClimateReading {
        let samples = self.config.samples;
        let interval = self.config.sample_interval;

        match self.climate.as_mut() {
            Some(sensor) => ClimateReading {
                temperature_c: sample_temperature(sensor, samples, interval, &mut self.delay),
                humidity_pct: sample_humidity(sensor, samples, interval, &mut self.delay),
            },
            None => {
                let missing = SamplingError::Sensor(SensorError::NotAttached);
                ClimateReading {
                    temperature_c: Err(missing),
                    humidity_pct: Err(missing),
                }
            }
        }
    }

    fn record(&mut self, readings: &CycleReadings) {
        let mut sensor_failures = 0u32;
        let mut conversion_failures = 0u32;

        match &readings.light {
            Some(Err(_e)) => {
                log_warn!("light sampling failed: {}", _e.reason());
                sensor_failures += 1;
            }
            Some(Ok(LightReading { lux: Err(_e), .. })) => {
                log_warn!("lux conversion failed: {}", _e.reason());
                conversion_failures += 1;
            }
            _ => {}
        }
        if let Some(Err(_e)) = &readings.motion {
            log_warn!("motion unavailable: {}", _e.reason());
            sensor_failures += 1;
        }
        if let Some(climate) = &readings.climate {
            if let Err(_e) = &climate.temperature_c {
                log_warn!("temperature unavailable: {}", _e.reason());
                sensor_failures += 1;
            }
            if let Err(_e) = &climate.humidity_pct {
                log_warn!("humidity unavailable: {}", _e.reason());
                sensor_failures += 1;
            }
        }

        self.stats.sensor_failures = self.stats.sensor_failures.saturating_add(sensor_failures);
        self.stats.conversion_failures =
            self.stats.conversion_failures.saturating_add(conversion_failures);
    }

    fn report(&mut self, readings: &CycleReadings) {
        match self.reporter.emit(readings) {
            Ok(_bytes) => {
                log_debug!("report sent ({} bytes)", _bytes);
            }
            Err(_e) => {
                log_warn!("report not sent: {:?}", _e);
                self.stats.transport_failures = self.stats.transport_failures.saturating_add(1);
            }
        }
    }
}

impl<L, T, D, A, M, C> Monitor<L, T, D, A, M, C> {
    /// Configuration the monitor was built with
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Diagnostics counters
    pub fn stats(&self) -> &MonitorStats {
        &self.stats
    }

    /// The reporter and its transport
    pub fn reporter(&self) -> &Reporter<T> {
        &self.reporter
    }

    /// The status LED
    pub fn indicator(&self) -> &L {
        &self.indicator
    }

    /// The shared delay
    pub fn delay(&self) -> &D {
        &self.delay
    }
}
