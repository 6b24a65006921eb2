//! Polling core for an ambient light, motion and climate monitor
//!
//! Reads an LDR through a voltage divider, a PIR motion output and a DHT
//! temperature/humidity module, averages the noisy channels, converts the
//! light reading to lux and prints one text block per cycle over serial.
//!
//! Key constraints:
//! - Runs `no_std` on small boards; the report is built in a fixed buffer
//! - Single-threaded and blocking; one owned delay paces everything
//! - A bad read never stops the loop and is never reported as a value
//!
//! ```no_run
//! use envmon_core::{MonitorBuilder, MonitorConfig};
//! # use envmon_core::{errors::TransportError, traits::Transport};
//! # use embedded_hal::digital::{ErrorType, InputPin, OutputPin, StatefulOutputPin};
//! # struct Led;
//! # impl ErrorType for Led { type Error = core::convert::Infallible; }
//! # impl OutputPin for Led {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # impl StatefulOutputPin for Led {
//! #     fn is_set_high(&mut self) -> Result<bool, Self::Error> { Ok(false) }
//! #     fn is_set_low(&mut self) -> Result<bool, Self::Error> { Ok(true) }
//! # }
//! # struct Pir;
//! # impl ErrorType for Pir { type Error = core::convert::Infallible; }
//! # impl InputPin for Pir {
//! #     fn is_high(&mut self) -> Result<bool, Self::Error> { Ok(false) }
//! #     fn is_low(&mut self) -> Result<bool, Self::Error> { Ok(true) }
//! # }
//! # struct Adc;
//! # impl envmon_core::AnalogInput for Adc {
//! #     type Error = ();
//! #     fn read_raw(&mut self) -> nb::Result<u16, ()> { Ok(512) }
//! # }
//! # struct Dht;
//! # impl envmon_core::ClimateSensor for Dht {
//! #     type Error = ();
//! #     fn read_temperature(&mut self) -> Result<f32, ()> { Ok(21.0) }
//! #     fn read_humidity(&mut self) -> Result<f32, ()> { Ok(40.0) }
//! # }
//! # struct Uart;
//! # impl Transport for Uart { fn write_all(&mut self, _: &[u8]) -> Result<(), TransportError> { Ok(()) } }
//! # struct Timer;
//! # impl embedded_hal::delay::DelayNs for Timer { fn delay_ns(&mut self, _: u32) {} }
//!
//! let mut monitor = MonitorBuilder::new(Led, Uart, Timer)
//!     .config(MonitorConfig::default())
//!     .light(Adc)
//!     .motion(Pir)
//!     .climate(Dht)
//!     .build()
//!     .unwrap();
//!
//! monitor.run();
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod config;
pub mod constants;
pub mod errors;
pub mod light;
pub mod monitor;
pub mod readings;
pub mod report;
pub mod sampler;
pub mod time;
pub mod traits;

// Public API
pub use config::{ClimateModel, MonitorConfig, PinMap, SensorKind, SensorSet};
pub use errors::{
    ConfigError, ConversionError, ReportError, SamplingError, SensorError, TransportError,
};
pub use light::LightModel;
pub use monitor::{Monitor, MonitorBuilder, MonitorStats};
pub use readings::{ClimateReading, CycleReadings, LightReading, MotionState};
pub use report::{format_report, Reporter};
pub use sampler::sample_mean;
pub use traits::{Absent, AnalogInput, ClimateSensor, Transport};

#[cfg(feature = "std")]
pub use time::StdDelay;
#[cfg(feature = "std")]
pub use traits::StdoutTransport;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
