//! Constants for the envmon firmware core
//!
//! Every fixed number the monitor uses lives here, grouped by concern, so
//! that [`MonitorConfig::default`](crate::config::MonitorConfig::default)
//! reads as a list of names rather than magic numbers.
//!
//! ## Organization
//!
//! - **Light**: voltage-divider and power-law constants for the LDR
//! - **Time**: sample counts, sample spacing and the cycle period
//! - **Report**: serial framing and buffer sizes
//! - **Pins**: default wiring of the reference board

/// LDR voltage-divider and illuminance model constants.
pub mod light;

/// Sampling and cycle timing.
pub mod time;

/// Serial report framing.
pub mod report;

/// Default pin wiring.
pub mod pins;

pub use light::{
    LUX_CALC_EXPONENT, LUX_CALC_SCALAR, MAX_ADC_READING, ADC_REF_VOLTAGE, REF_RESISTANCE_OHMS,
};

pub use time::{DEFAULT_SAMPLE_COUNT, DEFAULT_SAMPLE_INTERVAL_MS, DEFAULT_CYCLE_PERIOD_MS};

pub use report::{REPORT_BANNER, REPORT_BUFFER_SIZE, LINE_ENDING, SERIAL_BAUD_RATE};
