//! Serial Report Formatting
//!
//! One block per cycle, CRLF line endings, framed by a banner of `#`:
//!
//! ```text
//! #############################
//! Luminosity (0-1023): 512
//! Luminosity (in Lux): 123.40
//! Presence: MOVING
//! Temperature: 25.0 oC
//! Humidity: 60.0%
//! #############################
//! ```
//!
//! Disabled sensors contribute no line. A failed reading keeps its line and
//! says why, e.g. `Luminosity (in Lux): unavailable (too dark)`, so a fault
//! is visible on the serial console instead of looking like a zero.
//!
//! The block is informational, not a protocol: no schema, no versioning.

use core::fmt::{self, Write};

use heapless::String;

use crate::{
    constants::{LINE_ENDING, MAX_ADC_READING, REPORT_BANNER, REPORT_BUFFER_SIZE},
    errors::{ReportError, SamplingError},
    readings::{ClimateReading, CycleReadings, LightReading, MotionState},
    traits::Transport,
};

/// Fixed-capacity text for one block
pub type ReportBuffer = String<REPORT_BUFFER_SIZE>;

/// Write one block for `readings` into any `fmt::Write`
///
/// `max_adc` only labels the raw luminosity line.
pub fn write_report<W: Write>(out: &mut W, readings: &CycleReadings, max_adc: u16) -> fmt::Result {
    line(out, format_args!("{}", REPORT_BANNER))?;

    if let Some(light) = &readings.light {
        write_light(out, light, max_adc)?;
    }
    if let Some(motion) = &readings.motion {
        write_motion(out, motion)?;
    }
    if let Some(climate) = &readings.climate {
        write_climate(out, climate)?;
    }

    line(out, format_args!("{}", REPORT_BANNER))
}

/// Format one block into a [`ReportBuffer`]
pub fn format_report(readings: &CycleReadings, max_adc: u16) -> Result<ReportBuffer, ReportError> {
    let mut buf = ReportBuffer::new();
    write_report(&mut buf, readings, max_adc).map_err(|_| ReportError::Overflow {
        capacity: REPORT_BUFFER_SIZE,
    })?;
    Ok(buf)
}

fn line<W: Write>(out: &mut W, args: fmt::Arguments<'_>) -> fmt::Result {
    out.write_fmt(args)?;
    out.write_str(LINE_ENDING)
}

fn write_light<W: Write>(
    out: &mut W,
    light: &Result<LightReading, SamplingError>,
    max_adc: u16,
) -> fmt::Result {
    match light {
        Ok(reading) => {
            line(out, format_args!("Luminosity (0-{}): {}", max_adc, reading.raw_count()))?;
            match &reading.lux {
                Ok(lux) => line(out, format_args!("Luminosity (in Lux): {:.2}", lux)),
                Err(e) => line(out, format_args!("Luminosity (in Lux): unavailable ({})", e.reason())),
            }
        }
        Err(e) => {
            line(out, format_args!("Luminosity (0-{}): unavailable ({})", max_adc, e.reason()))?;
            line(out, format_args!("Luminosity (in Lux): unavailable ({})", e.reason()))
        }
    }
}

fn write_motion<W: Write>(out: &mut W, motion: &Result<MotionState, SamplingError>) -> fmt::Result {
    match motion {
        Ok(state) => line(out, format_args!("Presence: {}", state.label())),
        Err(e) => line(out, format_args!("Presence: unavailable ({})", e.reason())),
    }
}

fn write_climate<W: Write>(out: &mut W, climate: &ClimateReading) -> fmt::Result {
    match &climate.temperature_c {
        Ok(t) => line(out, format_args!("Temperature: {:.1} oC", t))?,
        Err(e) => line(out, format_args!("Temperature: unavailable ({})", e.reason()))?,
    }
    match &climate.humidity_pct {
        Ok(h) => line(out, format_args!("Humidity: {:.1}%", h)),
        Err(e) => line(out, format_args!("Humidity: unavailable ({})", e.reason())),
    }
}

/// Formats blocks and pushes them out of a [`Transport`]
pub struct Reporter<T> {
    transport: T,
    max_adc: u16,
}

impl<T: Transport> Reporter<T> {
    /// Reporter for the default 10-bit light input
    pub fn new(transport: T) -> Self {
        Self::with_max_adc(transport, MAX_ADC_READING)
    }

    /// Reporter labelling raw light counts against `max_adc`
    pub fn with_max_adc(transport: T, max_adc: u16) -> Self {
        Self { transport, max_adc }
    }

    /// Format `readings` and write the block; returns the bytes sent
    pub fn emit(&mut self, readings: &CycleReadings) -> Result<usize, ReportError> {
        let block = format_report(readings, self.max_adc)?;
        self.transport.write_all(block.as_bytes())?;
        self.transport.flush()?;
        Ok(block.len())
    }

    /// The underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutable access to the underlying transport
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Give the transport back
    pub fn into_transport(self) -> T {
        self.transport
    }
}
