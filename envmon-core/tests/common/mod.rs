//! Scripted hardware for integration tests
//!
//! Every fake replays a fixed script and records what the monitor did to it:
//! - [`ScriptedAdc`]: analog counts, with an optional failure point
//! - [`ScriptedPir`]: PIR levels, one per read
//! - [`ScriptedDht`]: temperature and humidity values, NaN for a bad read
//! - [`RecordingLed`]: LED level and toggle count
//! - [`RecordingTransport`]: bytes sent, split into blocks
//! - [`RecordingDelay`]: every sleep in milliseconds

#![allow(dead_code)]

use std::collections::VecDeque;
use std::convert::Infallible;

use embedded_hal::{
    delay::DelayNs,
    digital::{self, ErrorKind, ErrorType, InputPin, OutputPin, StatefulOutputPin},
};
use envmon_core::{
    errors::TransportError,
    traits::{AnalogInput, ClimateSensor, Transport},
};

/// Error returned by a fake once its script runs out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptEnded;

impl digital::Error for ScriptEnded {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Analog input replaying counts in order
#[derive(Debug, Default)]
pub struct ScriptedAdc {
    counts: VecDeque<u16>,
    /// Every conversion reports `WouldBlock` once before completing
    pub slow: bool,
    pending: bool,
    /// Completed reads
    pub reads: usize,
}

impl ScriptedAdc {
    pub fn new(counts: impl IntoIterator<Item = u16>) -> Self {
        Self {
            counts: counts.into_iter().collect(),
            ..Self::default()
        }
    }

    /// The same count `n` times
    pub fn constant(count: u16, n: usize) -> Self {
        Self::new(std::iter::repeat(count).take(n))
    }

    pub fn slow(mut self) -> Self {
        self.slow = true;
        self
    }

    pub fn remaining(&self) -> usize {
        self.counts.len()
    }
}

impl AnalogInput for ScriptedAdc {
    type Error = ScriptEnded;

    fn read_raw(&mut self) -> nb::Result<u16, ScriptEnded> {
        if self.slow && !self.pending {
            self.pending = true;
            return Err(nb::Error::WouldBlock);
        }
        self.pending = false;
        let count = self.counts.pop_front().ok_or(nb::Error::Other(ScriptEnded))?;
        self.reads += 1;
        Ok(count)
    }
}

/// PIR output replaying levels; `None` in the script is a failed read
#[derive(Debug, Default)]
pub struct ScriptedPir {
    levels: VecDeque<Option<bool>>,
    pub reads: usize,
}

impl ScriptedPir {
    pub fn new(levels: impl IntoIterator<Item = bool>) -> Self {
        Self {
            levels: levels.into_iter().map(Some).collect(),
            reads: 0,
        }
    }

    pub fn with_failures(levels: impl IntoIterator<Item = Option<bool>>) -> Self {
        Self {
            levels: levels.into_iter().collect(),
            reads: 0,
        }
    }
}

impl ErrorType for ScriptedPir {
    type Error = ScriptEnded;
}

impl InputPin for ScriptedPir {
    fn is_high(&mut self) -> Result<bool, ScriptEnded> {
        self.reads += 1;
        self.levels.pop_front().flatten().ok_or(ScriptEnded)
    }

    fn is_low(&mut self) -> Result<bool, ScriptEnded> {
        self.is_high().map(|high| !high)
    }
}

/// Climate module replaying both channels independently
#[derive(Debug, Default)]
pub struct ScriptedDht {
    temperatures: VecDeque<f32>,
    humidities: VecDeque<f32>,
    pub temperature_reads: usize,
    pub humidity_reads: usize,
}

impl ScriptedDht {
    pub fn new(
        temperatures: impl IntoIterator<Item = f32>,
        humidities: impl IntoIterator<Item = f32>,
    ) -> Self {
        Self {
            temperatures: temperatures.into_iter().collect(),
            humidities: humidities.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn constant(temperature: f32, humidity: f32, n: usize) -> Self {
        Self::new(
            std::iter::repeat(temperature).take(n),
            std::iter::repeat(humidity).take(n),
        )
    }
}

impl ClimateSensor for ScriptedDht {
    type Error = ScriptEnded;

    fn read_temperature(&mut self) -> Result<f32, ScriptEnded> {
        self.temperature_reads += 1;
        self.temperatures.pop_front().ok_or(ScriptEnded)
    }

    fn read_humidity(&mut self) -> Result<f32, ScriptEnded> {
        self.humidity_reads += 1;
        self.humidities.pop_front().ok_or(ScriptEnded)
    }
}

/// Status LED that remembers its level
#[derive(Debug, Default)]
pub struct RecordingLed {
    pub high: bool,
    pub toggles: usize,
    /// Refuse every toggle
    pub broken: bool,
}

impl ErrorType for RecordingLed {
    type Error = ScriptEnded;
}

impl OutputPin for RecordingLed {
    fn set_low(&mut self) -> Result<(), ScriptEnded> {
        self.high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), ScriptEnded> {
        self.high = true;
        Ok(())
    }
}

impl StatefulOutputPin for RecordingLed {
    fn is_set_high(&mut self) -> Result<bool, ScriptEnded> {
        Ok(self.high)
    }

    fn is_set_low(&mut self) -> Result<bool, ScriptEnded> {
        Ok(!self.high)
    }

    fn toggle(&mut self) -> Result<(), ScriptEnded> {
        if self.broken {
            return Err(ScriptEnded);
        }
        self.high = !self.high;
        self.toggles += 1;
        Ok(())
    }
}

/// Serial link capturing everything written
#[derive(Debug, Default)]
pub struct RecordingTransport {
    pub bytes: Vec<u8>,
    pub flushes: usize,
    /// Fail writes whose call index (0-based) is listed
    pub fail_on: Vec<usize>,
    writes: usize,
}

impl RecordingTransport {
    pub fn failing_on(calls: impl IntoIterator<Item = usize>) -> Self {
        Self {
            fail_on: calls.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn text(&self) -> &str {
        std::str::from_utf8(&self.bytes).unwrap()
    }

    /// Delivered blocks, split after each closing banner
    pub fn blocks(&self) -> Vec<String> {
        let banner = "#############################\r\n";
        let mut blocks = Vec::new();
        let mut current = String::new();
        let mut open = false;
        for line in self.text().split_inclusive("\r\n") {
            current.push_str(line);
            if line == banner {
                if open {
                    blocks.push(std::mem::take(&mut current));
                }
                open = !open;
            }
        }
        blocks
    }
}

impl Transport for RecordingTransport {
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        let call = self.writes;
        self.writes += 1;
        if self.fail_on.contains(&call) {
            return Err(TransportError::WriteFailed);
        }
        self.bytes.extend_from_slice(bytes);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), TransportError> {
        self.flushes += 1;
        Ok(())
    }
}

/// Delay that records instead of sleeping
#[derive(Debug, Default)]
pub struct RecordingDelay {
    pub sleeps_ms: Vec<u32>,
}

impl RecordingDelay {
    pub fn total_ms(&self) -> u64 {
        self.sleeps_ms.iter().map(|&ms| u64::from(ms)).sum()
    }
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.sleeps_ms.push(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.sleeps_ms.push(ms);
    }
}

/// Infallible analog source reading a fixed count, for property tests
pub struct FixedAdc(pub u16);

impl AnalogInput for FixedAdc {
    type Error = Infallible;

    fn read_raw(&mut self) -> nb::Result<u16, Infallible> {
        Ok(self.0)
    }
}
