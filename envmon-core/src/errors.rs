//! Error Types for Sampling, Conversion and Reporting Failures
//!
//! ## Design Philosophy
//!
//! The monitor loop never stops on a bad cycle, so every error here is a
//! value that travels into the report or the diagnostics counters:
//!
//! 1. **Small Size**: errors are `Copy` and carry only `&'static str` reasons,
//!    so they can sit inside a [`CycleReadings`](crate::readings::CycleReadings)
//!    without allocation.
//!
//! 2. **Explicit, Never Substituted**: a failed read is reported as a failure.
//!    Zeros or stale values are never passed off as measurements.
//!
//! ## Error Categories
//!
//! ### Sensor Failures
//! - [`SensorError`]: the hardware read failed or produced garbage
//! - [`SamplingError`]: an averaging run could not complete
//!
//! ### Arithmetic Edge Cases
//! - [`ConversionError`]: the voltage-divider model hit a singular point
//!
//! ### Output Failures
//! - [`ReportError`] / [`TransportError`]: the block could not be built or sent
//!
//! ### Startup
//! - [`ConfigError`]: the configuration cannot drive the monitor
//!
//! ```rust
//! use envmon_core::errors::{ConversionError, SamplingError, SensorError};
//!
//! let err = SamplingError::Sensor(SensorError::ReadFailed);
//! assert_eq!(err.reason(), "read failed");
//! assert_eq!(ConversionError::Saturated.reason(), "sensor saturated");
//! ```

use thiserror_no_std::Error;

/// Result type for sampling runs
pub type SamplingResult<T> = Result<T, SamplingError>;

/// Result type for unit conversions
pub type ConversionResult<T> = Result<T, ConversionError>;

/// A single hardware read went wrong
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// The platform read reported an error
    #[error("sensor read failed")]
    ReadFailed,

    /// The sensor answered with a non-finite value (NaN, infinity)
    #[error("sensor returned an invalid sample")]
    InvalidSample,

    /// No hardware is attached for this sensor
    #[error("sensor not attached")]
    NotAttached,
}

impl SensorError {
    /// Short reason used in report lines
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::ReadFailed => "read failed",
            Self::InvalidSample => "invalid sample",
            Self::NotAttached => "not attached",
        }
    }
}

/// An averaging run could not produce a mean
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplingError {
    /// Sample count of zero; the mean is undefined
    #[error("sample count must be at least 1")]
    NoSamples,

    /// One of the reads failed; remaining samples were not taken
    #[error("sampling aborted: {0}")]
    Sensor(SensorError),
}

impl SamplingError {
    /// Short reason used in report lines
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::NoSamples => "no samples",
            Self::Sensor(e) => e.reason(),
        }
    }
}

impl From<SensorError> for SamplingError {
    fn from(e: SensorError) -> Self {
        Self::Sensor(e)
    }
}

/// The illuminance model has no finite answer for this input
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConversionError {
    /// Input was NaN or infinite
    #[error("raw value is not a number")]
    InvalidInput,

    /// Input outside `[0, max_adc]`
    #[error("raw value {value} outside [0, {max}]")]
    OutOfRange {
        /// The averaged raw reading
        value: f32,
        /// Full-scale ADC count
        max: u16,
    },

    /// Zero volts over the fixed resistor: LDR resistance is unbounded
    #[error("no voltage across the reference resistor")]
    NoDividerVoltage,

    /// Zero volts across the LDR: resistance is zero and the power law diverges
    #[error("sensor saturated at full scale")]
    Saturated,

    /// The model produced NaN or infinity somewhere along the way
    #[error("conversion produced a non-finite result")]
    NonFinite,
}

impl ConversionError {
    /// Short reason used in report lines
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid input",
            Self::OutOfRange { .. } => "out of range",
            Self::NoDividerVoltage => "too dark",
            Self::Saturated => "sensor saturated",
            Self::NonFinite => "non-finite result",
        }
    }
}

/// Failure building or sending the report block
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportError {
    /// The block did not fit in the report buffer
    #[error("report exceeds {capacity} byte buffer")]
    Overflow {
        /// Buffer capacity in bytes
        capacity: usize,
    },

    /// The serial link refused the block
    #[error("report not delivered: {0}")]
    Transport(TransportError),
}

impl From<TransportError> for ReportError {
    fn from(e: TransportError) -> Self {
        Self::Transport(e)
    }
}

/// Failure writing to the serial link
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportError {
    /// Port is not open or not connected
    #[error("transport not connected")]
    NotConnected,

    /// Fewer bytes went out than were handed over
    #[error("short write: {written} of {expected} bytes")]
    ShortWrite {
        /// Bytes accepted by the port
        written: usize,
        /// Bytes in the block
        expected: usize,
    },

    /// The port reported a write error
    #[error("transport write failed")]
    WriteFailed,
}

/// Configuration cannot drive the monitor
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// `samples` is zero
    #[error("sample count must be at least 1")]
    ZeroSampleCount,

    /// The cycle period is zero
    #[error("cycle period must be non-zero")]
    ZeroPeriod,

    /// A sensor is enabled but no hardware was handed to the builder
    #[error("{sensor} sensor enabled but not attached")]
    MissingHardware {
        /// Which sensor
        sensor: &'static str,
    },

    /// Light model constants cannot produce a reading
    #[error("invalid light model: {reason}")]
    InvalidLightModel {
        /// What is wrong with the constants
        reason: &'static str,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for SensorError {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.reason())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SamplingError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::NoSamples => defmt::write!(fmt, "No samples"),
            Self::Sensor(e) => defmt::write!(fmt, "Sampling aborted: {}", e),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConversionError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::OutOfRange { value, max } => {
                defmt::write!(fmt, "Raw {} outside [0, {}]", value, max)
            }
            other => defmt::write!(fmt, "{}", other.reason()),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TransportError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::NotConnected => defmt::write!(fmt, "Not connected"),
            Self::ShortWrite { written, expected } => {
                defmt::write!(fmt, "Short write {}/{}", written, expected)
            }
            Self::WriteFailed => defmt::write!(fmt, "Write failed"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ReportError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Overflow { capacity } => defmt::write!(fmt, "Report over {} bytes", capacity),
            Self::Transport(e) => defmt::write!(fmt, "Report not delivered: {}", e),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::ZeroSampleCount => defmt::write!(fmt, "Zero sample count"),
            Self::ZeroPeriod => defmt::write!(fmt, "Zero period"),
            Self::MissingHardware { sensor } => {
                defmt::write!(fmt, "{} enabled but not attached", sensor)
            }
            Self::InvalidLightModel { reason } => {
                defmt::write!(fmt, "Invalid light model: {}", reason)
            }
        }
    }
}
