//! Monitor builder
//!
//! The status LED, the serial transport and the delay are always present
//! and go into [`MonitorBuilder::new`]. Sensors are attached one by one; each
//! attach changes the builder's type so the monitor ends up with concrete
//! driver types and no dynamic dispatch.

use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, StatefulOutputPin},
};

use super::{Monitor, MonitorStats};
use crate::{
    config::{MonitorConfig, SensorKind},
    errors::ConfigError,
    report::Reporter,
    traits::{Absent, AnalogInput, ClimateSensor, Transport},
};

/// Builder for [`Monitor`]
///
/// ```rust
/// use envmon_core::config::{MonitorConfig, SensorKind, SensorSet};
/// use envmon_core::errors::ConfigError;
/// use envmon_core::monitor::MonitorBuilder;
/// # use envmon_core::{errors::TransportError, traits::Transport};
/// # use embedded_hal::digital::{ErrorType, OutputPin, StatefulOutputPin};
/// # struct Led;
/// # impl ErrorType for Led { type Error = core::convert::Infallible; }
/// # impl OutputPin for Led {
/// #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// # }
/// # impl StatefulOutputPin for Led {
/// #     fn is_set_high(&mut self) -> Result<bool, Self::Error> { Ok(false) }
/// #     fn is_set_low(&mut self) -> Result<bool, Self::Error> { Ok(true) }
/// # }
/// # struct Null;
/// # impl Transport for Null { fn write_all(&mut self, _: &[u8]) -> Result<(), TransportError> { Ok(()) } }
/// # struct NoDelay;
/// # impl embedded_hal::delay::DelayNs for NoDelay { fn delay_ns(&mut self, _: u32) {} }
///
/// // every sensor is enabled by default, but none is attached
/// let result = MonitorBuilder::new(Led, Null, NoDelay).build();
/// assert!(matches!(result, Err(ConfigError::MissingHardware { sensor: "light" })));
///
/// // nothing enabled, nothing needed
/// let config = MonitorConfig::default().with_sensors(SensorSet::empty());
/// assert!(MonitorBuilder::new(Led, Null, NoDelay).config(config).build().is_ok());
/// ```
pub struct MonitorBuilder<L, T, D, A = Absent, M = Absent, C = Absent> {
    config: MonitorConfig,
    indicator: L,
    transport: T,
    delay: D,
    light: Option<A>,
    motion: Option<M>,
    climate: Option<C>,
}

impl<L, T, D> MonitorBuilder<L, T, D> {
    /// Start with the default configuration and no sensors attached
    pub fn new(indicator: L, transport: T, delay: D) -> Self {
        Self {
            config: MonitorConfig::default(),
            indicator,
            transport,
            delay,
            light: None,
            motion: None,
            climate: None,
        }
    }
}

impl<L, T, D, A, M, C> MonitorBuilder<L, T, D, A, M, C> {
    /// Replace the configuration
    pub fn config(mut self, config: MonitorConfig) -> Self {
        self.config = config;
        self
    }

    /// Attach the LDR analog input
    pub fn light<A2>(self, input: A2) -> MonitorBuilder<L, T, D, A2, M, C> {
        MonitorBuilder {
            config: self.config,
            indicator: self.indicator,
            transport: self.transport,
            delay: self.delay,
            light: Some(input),
            motion: self.motion,
            climate: self.climate,
        }
    }

    /// Attach the PIR digital input
    pub fn motion<M2>(self, pin: M2) -> MonitorBuilder<L, T, D, A, M2, C> {
        MonitorBuilder {
            config: self.config,
            indicator: self.indicator,
            transport: self.transport,
            delay: self.delay,
            light: self.light,
            motion: Some(pin),
            climate: self.climate,
        }
    }

    /// Attach the temperature/humidity sensor
    pub fn climate<C2>(self, sensor: C2) -> MonitorBuilder<L, T, D, A, M, C2> {
        MonitorBuilder {
            config: self.config,
            indicator: self.indicator,
            transport: self.transport,
            delay: self.delay,
            light: self.light,
            motion: self.motion,
            climate: Some(sensor),
        }
    }

    fn attached(&self, kind: SensorKind) -> bool {
        match kind {
            SensorKind::Light => self.light.is_some(),
            SensorKind::Motion => self.motion.is_some(),
            SensorKind::Climate => self.climate.is_some(),
        }
    }
}

impl<L, T, D, A, M, C> MonitorBuilder<L, T, D, A, M, C>
where
    L: StatefulOutputPin,
    T: Transport,
    D: DelayNs,
    A: AnalogInput,
    M: InputPin,
    C: ClimateSensor,
{
    /// Validate the configuration and hand over the hardware
    pub fn build(self) -> Result<Monitor<L, T, D, A, M, C>, ConfigError> {
        self.config.validate()?;

        if let Some(kind) = self.config.sensors.iter().find(|k| !self.attached(*k)) {
            return Err(ConfigError::MissingHardware { sensor: kind.name() });
        }

        log_info!(
            "envmon: {} samples every {} ms, period {} ms, {} baud",
            self.config.samples,
            self.config.sample_interval.ticks(),
            self.config.period.ticks(),
            self.config.baud_rate
        );
        for _kind in self.config.sensors.iter() {
            log_info!(
                "  {} on {}",
                _kind.name(),
                self.config.pins.for_sensor(_kind)
            );
        }
        if self.config.sensors.contains(SensorKind::Climate) {
            log_info!("  climate part {}", self.config.climate_model.name());
        }
        if self.config.sensors.is_empty() {
            log_warn!("no sensors enabled; reports will be empty");
        }

        Ok(Monitor {
            reporter: Reporter::with_max_adc(self.transport, self.config.light_model.max_adc),
            config: self.config,
            light: self.light,
            motion: self.motion,
            climate: self.climate,
            indicator: self.indicator,
            delay: self.delay,
            stats: MonitorStats::default(),
        })
    }
}
