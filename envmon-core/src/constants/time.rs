//! Timing Constants
//!
//! The monitor is a fixed-period polling loop. Sampling happens inside the
//! period, so `samples * interval` per averaged sensor must stay well below
//! the cycle period.

/// Readings averaged per sensor per cycle.
pub const DEFAULT_SAMPLE_COUNT: u16 = 10;

/// Delay after each individual read (milliseconds).
pub const DEFAULT_SAMPLE_INTERVAL_MS: u32 = 1;

/// Sleep at the end of each cycle (milliseconds).
pub const DEFAULT_CYCLE_PERIOD_MS: u32 = 1000;

/// Nanoseconds per millisecond.
pub const NS_PER_MS: u64 = 1_000_000;
