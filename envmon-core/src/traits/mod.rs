//! Hardware Boundaries of the Monitor
//!
//! The core never touches registers. Everything it reads or drives comes in
//! through a trait, so the same loop runs on a board or against test fakes.
//!
//! ## Module Organization
//!
//! - [`input`] - analog input and climate sensor traits
//! - [`output`] - serial transport trait
//! - [`absent`] - placeholder for sensors a board does not fit
//!
//! Digital pins and delays use the `embedded-hal` 1.0 traits directly:
//!
//! | Role            | Trait                                          |
//! |-----------------|------------------------------------------------|
//! | LDR divider tap | [`AnalogInput`]                                |
//! | PIR output      | [`embedded_hal::digital::InputPin`]            |
//! | DHT module      | [`ClimateSensor`]                              |
//! | Status LED      | [`embedded_hal::digital::StatefulOutputPin`]   |
//! | Serial link     | [`Transport`]                                  |
//! | Blocking sleep  | [`embedded_hal::delay::DelayNs`]               |

pub mod absent;
pub mod input;
pub mod output;

pub use absent::Absent;
pub use input::{AnalogInput, ClimateSensor};
pub use output::Transport;

#[cfg(feature = "std")]
pub use output::StdoutTransport;
