//! Default Pin Wiring
//!
//! Labels of the reference board. The core never drives pins by label; they
//! are carried in [`PinMap`](crate::config::PinMap) for logging and for the
//! board setup code that builds the HAL handles.

/// LDR divider tap (analog).
pub const LIGHT_PIN: &str = "A0";

/// PIR output (digital).
pub const MOTION_PIN: &str = "D7";

/// DHT data line.
pub const CLIMATE_PIN: &str = "A1";

/// Status LED.
pub const INDICATOR_PIN: &str = "LED_BUILTIN";
