//! Blocking delays
//!
//! The monitor sleeps in two places: after every individual read while
//! sampling, and once at the end of each cycle. Both go through a single
//! owned [`DelayNs`], so the loop stays strictly sequential.
//!
//! On a board the HAL's timer delay plugs in directly. On a host,
//! [`StdDelay`] sleeps the current thread.

use embedded_hal::delay::DelayNs;
use fugit::MillisDurationU32;

/// Block for `duration`
#[inline]
pub fn sleep<D: DelayNs + ?Sized>(delay: &mut D, duration: MillisDurationU32) {
    delay.delay_ms(duration.ticks());
}

/// Thread-sleep delay for hosted builds
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct StdDelay;

#[cfg(feature = "std")]
impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(std::time::Duration::from_nanos(u64::from(ns)));
    }

    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(std::time::Duration::from_millis(u64::from(ms)));
    }
}
