//! LDR Illuminance Model Constants
//!
//! The light sensor is an LDR on the high side of a divider with a fixed
//! 10 kΩ resistor to ground; the ADC measures the voltage over the fixed
//! resistor. The power-law fit `lux = SCALAR * R^EXPONENT` is the usual one
//! for GL55-series photoresistors.

/// Full-scale count of the 10-bit analog input.
pub const MAX_ADC_READING: u16 = 1023;

/// ADC reference (and divider supply) voltage (V).
pub const ADC_REF_VOLTAGE: f32 = 5.0;

/// Fixed divider resistor (Ω).
pub const REF_RESISTANCE_OHMS: f32 = 10_000.0;

/// Power-law scalar for the resistance → lux fit.
pub const LUX_CALC_SCALAR: f32 = 12_518_931.0;

/// Power-law exponent for the resistance → lux fit.
///
/// Negative: resistance falls as light rises.
pub const LUX_CALC_EXPONENT: f32 = -1.405;
