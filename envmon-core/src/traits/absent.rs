//! Placeholder for sensors that are not fitted
//!
//! [`MonitorBuilder`](crate::monitor::MonitorBuilder) defaults every sensor
//! slot to [`Absent`]. The builder refuses to enable a sensor whose slot is
//! still empty, so these impls only run if a caller bypasses that check, and
//! then they fail instead of inventing a value.

use embedded_hal::digital::{self, ErrorKind};

use super::{AnalogInput, ClimateSensor};
use crate::errors::SensorError;

/// Empty sensor slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Absent;

/// Error every [`Absent`] read returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotFitted;

impl digital::Error for NotFitted {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

impl digital::ErrorType for Absent {
    type Error = NotFitted;
}

impl digital::InputPin for Absent {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Err(NotFitted)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Err(NotFitted)
    }
}

impl AnalogInput for Absent {
    type Error = SensorError;

    fn read_raw(&mut self) -> nb::Result<u16, Self::Error> {
        Err(nb::Error::Other(SensorError::NotAttached))
    }
}

impl ClimateSensor for Absent {
    type Error = SensorError;

    fn read_temperature(&mut self) -> Result<f32, Self::Error> {
        Err(SensorError::NotAttached)
    }

    fn read_humidity(&mut self) -> Result<f32, Self::Error> {
        Err(SensorError::NotAttached)
    }
}
