//! Monitor configuration
//!
//! Everything the loop needs to know is fixed when the monitor is built:
//! which sensors run, how many samples each averages, the sample spacing,
//! the cycle period and the light model. There is no runtime configuration
//! surface; [`MonitorConfig::validate`] runs once inside
//! [`MonitorBuilder::build`](crate::monitor::MonitorBuilder::build).
//!
//! ```rust
//! use envmon_core::config::{MonitorConfig, SensorKind, SensorSet};
//!
//! let config = MonitorConfig::default()
//!     .with_sensors(SensorSet::empty().with(SensorKind::Light))
//!     .with_samples(4);
//!
//! assert!(config.sensors.contains(SensorKind::Light));
//! assert!(!config.sensors.contains(SensorKind::Motion));
//! assert!(config.validate().is_ok());
//! ```

use fugit::MillisDurationU32;

use crate::{
    constants::{
        pins::{CLIMATE_PIN, INDICATOR_PIN, LIGHT_PIN, MOTION_PIN},
        DEFAULT_CYCLE_PERIOD_MS, DEFAULT_SAMPLE_COUNT, DEFAULT_SAMPLE_INTERVAL_MS,
        SERIAL_BAUD_RATE,
    },
    errors::ConfigError,
    light::LightModel,
};

/// One of the monitored inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorKind {
    /// LDR on an analog pin
    Light,
    /// PIR on a digital pin
    Motion,
    /// DHT temperature/humidity module
    Climate,
}

impl SensorKind {
    /// All kinds, in cycle order
    pub const ALL: [SensorKind; 3] = [SensorKind::Light, SensorKind::Motion, SensorKind::Climate];

    /// Lower-case name for logs and errors
    pub const fn name(&self) -> &'static str {
        match self {
            SensorKind::Light => "light",
            SensorKind::Motion => "motion",
            SensorKind::Climate => "climate",
        }
    }

    const fn bit(&self) -> u8 {
        match self {
            SensorKind::Light => 0b001,
            SensorKind::Motion => 0b010,
            SensorKind::Climate => 0b100,
        }
    }
}

/// Set of enabled sensors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorSet(u8);

impl SensorSet {
    /// No sensors
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Light, motion and climate
    pub const fn all() -> Self {
        Self(0b111)
    }

    /// Add a sensor
    pub const fn with(self, kind: SensorKind) -> Self {
        Self(self.0 | kind.bit())
    }

    /// Remove a sensor
    pub const fn without(self, kind: SensorKind) -> Self {
        Self(self.0 & !kind.bit())
    }

    /// Membership test used by every driver step
    pub const fn contains(&self, kind: SensorKind) -> bool {
        self.0 & kind.bit() != 0
    }

    /// True when nothing is enabled
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Enabled kinds in cycle order
    pub fn iter(&self) -> impl Iterator<Item = SensorKind> + '_ {
        SensorKind::ALL.into_iter().filter(move |k| self.contains(*k))
    }
}

impl Default for SensorSet {
    fn default() -> Self {
        Self::all()
    }
}

/// DHT module variant wired to the climate pin
///
/// The protocol driver is supplied by the board; the core only records which
/// part it is so the startup log is accurate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClimateModel {
    /// DHT11: 1 °C / 1 %RH resolution
    #[default]
    Dht11,
    /// DHT22 / AM2302: 0.1 °C / 0.1 %RH resolution
    Dht22,
}

impl ClimateModel {
    /// Part name
    pub const fn name(&self) -> &'static str {
        match self {
            ClimateModel::Dht11 => "DHT11",
            ClimateModel::Dht22 => "DHT22",
        }
    }
}

/// Board pin labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinMap {
    /// LDR divider tap
    pub light: &'static str,
    /// PIR output
    pub motion: &'static str,
    /// DHT data line
    pub climate: &'static str,
    /// Status LED
    pub indicator: &'static str,
}

impl PinMap {
    /// Pin label for a sensor
    pub const fn for_sensor(&self, kind: SensorKind) -> &'static str {
        match kind {
            SensorKind::Light => self.light,
            SensorKind::Motion => self.motion,
            SensorKind::Climate => self.climate,
        }
    }
}

impl Default for PinMap {
    fn default() -> Self {
        Self {
            light: LIGHT_PIN,
            motion: MOTION_PIN,
            climate: CLIMATE_PIN,
            indicator: INDICATOR_PIN,
        }
    }
}

/// Full monitor configuration, resolved once at startup
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MonitorConfig {
    /// Which sensors the loop samples
    pub sensors: SensorSet,

    /// Readings averaged per sensor per cycle
    pub samples: u16,

    /// Delay after each individual read
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_millis"))]
    pub sample_interval: MillisDurationU32,

    /// Sleep at the end of each cycle
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_millis"))]
    pub period: MillisDurationU32,

    /// Voltage-divider and power-law constants
    pub light_model: LightModel,

    /// DHT variant on the climate pin
    pub climate_model: ClimateModel,

    /// Pin labels
    pub pins: PinMap,

    /// Serial link speed
    pub baud_rate: u32,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            sensors: SensorSet::all(),
            samples: DEFAULT_SAMPLE_COUNT,
            sample_interval: MillisDurationU32::from_ticks(DEFAULT_SAMPLE_INTERVAL_MS),
            period: MillisDurationU32::from_ticks(DEFAULT_CYCLE_PERIOD_MS),
            light_model: LightModel::default(),
            climate_model: ClimateModel::default(),
            pins: PinMap::default(),
            baud_rate: SERIAL_BAUD_RATE,
        }
    }
}

impl MonitorConfig {
    /// Replace the enabled sensor set
    pub fn with_sensors(mut self, sensors: SensorSet) -> Self {
        self.sensors = sensors;
        self
    }

    /// Set the per-sensor sample count
    pub fn with_samples(mut self, samples: u16) -> Self {
        self.samples = samples;
        self
    }

    /// Set the delay after each read
    pub fn with_sample_interval(mut self, interval: MillisDurationU32) -> Self {
        self.sample_interval = interval;
        self
    }

    /// Set the cycle period
    pub fn with_period(mut self, period: MillisDurationU32) -> Self {
        self.period = period;
        self
    }

    /// Replace the light model
    pub fn with_light_model(mut self, model: LightModel) -> Self {
        self.light_model = model;
        self
    }

    /// Set the DHT variant
    pub fn with_climate_model(mut self, model: ClimateModel) -> Self {
        self.climate_model = model;
        self
    }

    /// Check the configuration can drive a monitor.
    ///
    /// Hardware presence is checked by the builder, which knows what was
    /// attached.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.samples == 0 {
            return Err(ConfigError::ZeroSampleCount);
        }
        if self.period.ticks() == 0 {
            return Err(ConfigError::ZeroPeriod);
        }
        if self.sensors.contains(SensorKind::Light) {
            self.light_model
                .validate()
                .map_err(|reason| ConfigError::InvalidLightModel { reason })?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
fn serialize_millis<S>(value: &MillisDurationU32, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_u32(value.ticks())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_firmware() {
        let config = MonitorConfig::default();
        assert_eq!(config.samples, 10);
        assert_eq!(config.sample_interval.ticks(), 1);
        assert_eq!(config.period.ticks(), 1000);
        assert_eq!(config.baud_rate, 115_200);
        assert_eq!(config.sensors, SensorSet::all());
        assert_eq!(config.pins.light, "A0");
        assert_eq!(config.pins.for_sensor(SensorKind::Motion), "D7");
        assert_eq!(config.climate_model, ClimateModel::Dht11);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn sensor_set_membership() {
        let set = SensorSet::empty()
            .with(SensorKind::Climate)
            .with(SensorKind::Light);

        assert!(set.contains(SensorKind::Light));
        assert!(!set.contains(SensorKind::Motion));
        assert!(set.contains(SensorKind::Climate));

        let kinds: heapless::Vec<SensorKind, 3> = set.iter().collect();
        assert_eq!(kinds.as_slice(), &[SensorKind::Light, SensorKind::Climate]);

        let set = set.without(SensorKind::Light).without(SensorKind::Climate);
        assert!(set.is_empty());
    }

    #[test]
    fn zero_samples_rejected() {
        let config = MonitorConfig::default().with_samples(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroSampleCount));
    }

    #[test]
    fn zero_period_rejected() {
        let config = MonitorConfig::default().with_period(MillisDurationU32::from_ticks(0));
        assert_eq!(config.validate(), Err(ConfigError::ZeroPeriod));
    }

    #[test]
    fn bad_light_model_only_matters_when_light_enabled() {
        let broken = LightModel {
            max_adc: 0,
            ..LightModel::default()
        };

        let config = MonitorConfig::default().with_light_model(broken);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidLightModel { .. })
        ));

        let config = config.with_sensors(SensorSet::all().without(SensorKind::Light));
        assert!(config.validate().is_ok());
    }
}
