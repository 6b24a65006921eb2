//! Blocking Sample Averaging
//!
//! Cheap sensors are noisy; the monitor smooths each one by reading it a
//! fixed number of times with a short sleep after every read and taking the
//! arithmetic mean.
//!
//! ```text
//! read ─ sleep ─ read ─ sleep ─ ... ─ read ─ sleep ─► sum / count
//! ```
//!
//! The final read is followed by a sleep too, so the next sensor starts one
//! interval after the last sample.
//!
//! ## Rules
//!
//! - `count == 0` is refused before any read ([`SamplingError::NoSamples`]).
//! - The first failed read aborts the run; partial sums are never reported.
//! - A NaN or infinite sample is a failed read ([`SensorError::InvalidSample`]).
//! - The sum is accumulated in `f64` so long runs of 10-bit counts stay exact.
//!
//! ```rust
//! use envmon_core::sampler::sample_mean;
//! use fugit::MillisDurationU32;
//! # struct NoDelay;
//! # impl embedded_hal::delay::DelayNs for NoDelay { fn delay_ns(&mut self, _: u32) {} }
//!
//! let mut values = [10.0, 20.0, 30.0].into_iter();
//! let mean = sample_mean(
//!     || values.next().ok_or(envmon_core::errors::SensorError::ReadFailed),
//!     3,
//!     MillisDurationU32::from_ticks(1),
//!     &mut NoDelay,
//! );
//! assert_eq!(mean, Ok(20.0));
//! ```

use embedded_hal::delay::DelayNs;
use fugit::MillisDurationU32;

use crate::{
    errors::{SamplingError, SamplingResult, SensorError},
    time::sleep,
    traits::{AnalogInput, ClimateSensor},
};

/// Average `count` reads taken `interval` apart
pub fn sample_mean<F, D>(
    mut read: F,
    count: u16,
    interval: MillisDurationU32,
    delay: &mut D,
) -> SamplingResult<f32>
where
    F: FnMut() -> Result<f32, SensorError>,
    D: DelayNs,
{
    if count == 0 {
        return Err(SamplingError::NoSamples);
    }

    let mut sum = 0.0f64;
    for _ in 0..count {
        let value = read()?;
        if !value.is_finite() {
            return Err(SamplingError::Sensor(SensorError::InvalidSample));
        }
        sum += f64::from(value);
        sleep(delay, interval);
    }

    Ok((sum / f64::from(count)) as f32)
}

/// Average an analog input, blocking on each conversion
pub fn sample_analog<A, D>(
    input: &mut A,
    count: u16,
    interval: MillisDurationU32,
    delay: &mut D,
) -> SamplingResult<f32>
where
    A: AnalogInput,
    D: DelayNs,
{
    sample_mean(
        || {
            nb::block!(input.read_raw())
                .map(f32::from)
                .map_err(|_e| {
                    log_warn!("analog read failed: {:?}", _e);
                    SensorError::ReadFailed
                })
        },
        count,
        interval,
        delay,
    )
}

/// Average the temperature channel of a climate sensor
pub fn sample_temperature<C, D>(
    sensor: &mut C,
    count: u16,
    interval: MillisDurationU32,
    delay: &mut D,
) -> SamplingResult<f32>
where
    C: ClimateSensor,
    D: DelayNs,
{
    sample_mean(
        || {
            sensor.read_temperature().map_err(|_e| {
                log_warn!("temperature read failed: {:?}", _e);
                SensorError::ReadFailed
            })
        },
        count,
        interval,
        delay,
    )
}

/// Average the humidity channel of a climate sensor
pub fn sample_humidity<C, D>(
    sensor: &mut C,
    count: u16,
    interval: MillisDurationU32,
    delay: &mut D,
) -> SamplingResult<f32>
where
    C: ClimateSensor,
    D: DelayNs,
{
    sample_mean(
        || {
            sensor.read_humidity().map_err(|_e| {
                log_warn!("humidity read failed: {:?}", _e);
                SensorError::ReadFailed
            })
        },
        count,
        interval,
        delay,
    )
}
