//! Per-cycle readings
//!
//! Nothing here outlives a cycle. The driver builds a fresh
//! [`CycleReadings`] every tick, hands it to the reporter and returns it to
//! the caller; the next tick starts from [`CycleReadings::default`].
//!
//! Each slot is
//! - `None` when the sensor is disabled,
//! - `Some(Err(..))` when it is enabled but the read or conversion failed,
//! - `Some(Ok(..))` otherwise.

use crate::errors::{ConversionError, SamplingError};

/// Raw ADC count from one read
pub type RawSample = u16;

/// Light sensor result for one cycle
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LightReading {
    /// Averaged raw count
    pub raw_mean: f32,
    /// Illuminance derived from `raw_mean`
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_lux"))]
    pub lux: Result<f32, ConversionError>,
}

impl LightReading {
    /// Averaged count truncated to whole ADC steps
    pub fn raw_count(&self) -> RawSample {
        // float→int `as` saturates, so out-of-range means still land in u16
        self.raw_mean as RawSample
    }
}

/// PIR state from one instantaneous read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionState {
    /// Output low: nothing moving
    Stopped,
    /// Output high: motion detected
    Moving,
}

impl MotionState {
    /// Map the PIR output level
    pub const fn from_level(high: bool) -> Self {
        if high {
            MotionState::Moving
        } else {
            MotionState::Stopped
        }
    }

    /// Report label
    pub const fn label(&self) -> &'static str {
        match self {
            MotionState::Stopped => "STOPPED",
            MotionState::Moving => "MOVING",
        }
    }
}

/// Averaged temperature and humidity
///
/// The two channels are sampled independently, so one can fail while the
/// other succeeds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClimateReading {
    /// Temperature (°C)
    pub temperature_c: Result<f32, SamplingError>,
    /// Relative humidity (%)
    pub humidity_pct: Result<f32, SamplingError>,
}

/// Everything sampled in one cycle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleReadings {
    /// Light slot
    pub light: Option<Result<LightReading, SamplingError>>,
    /// Motion slot
    pub motion: Option<Result<MotionState, SamplingError>>,
    /// Climate slot
    pub climate: Option<ClimateReading>,
}

impl CycleReadings {
    /// Number of enabled sensors whose read or conversion failed
    pub fn failure_count(&self) -> u32 {
        let mut failures = 0;
        match &self.light {
            Some(Err(_)) => failures += 1,
            Some(Ok(reading)) if reading.lux.is_err() => failures += 1,
            _ => {}
        }
        if matches!(self.motion, Some(Err(_))) {
            failures += 1;
        }
        if let Some(climate) = &self.climate {
            failures += u32::from(climate.temperature_c.is_err());
            failures += u32::from(climate.humidity_pct.is_err());
        }
        failures
    }
}

#[cfg(feature = "serde")]
fn serialize_lux<S>(value: &Result<f32, ConversionError>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match value {
        Ok(lux) => serializer.serialize_some(lux),
        Err(_) => serializer.serialize_none(),
    }
}
