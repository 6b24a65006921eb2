//! Illuminance from an LDR Voltage Divider
//!
//! ## Circuit
//!
//! ```text
//!   Vref ──┬── LDR ──┬── R_ref ── GND
//!                    │
//!                  ADC pin
//! ```
//!
//! The ADC measures the voltage over the fixed resistor. From it:
//!
//! ```text
//! V_r   = raw / max_adc * Vref        voltage over R_ref
//! V_ldr = Vref - V_r                  voltage over the LDR
//! R_ldr = V_ldr / V_r * R_ref         divider ratio
//! lux   = SCALAR * R_ldr ^ EXPONENT   power-law fit, EXPONENT < 0
//! ```
//!
//! More light → lower LDR resistance → higher `raw` → higher lux.
//!
//! ## Singular Points
//!
//! The divider has two ends where the model has no finite answer:
//!
//! | raw        | V_r  | R_ldr | outcome                              |
//! |------------|------|-------|--------------------------------------|
//! | `0`        | 0    | ∞     | [`ConversionError::NoDividerVoltage`] |
//! | `max_adc`  | Vref | 0     | [`ConversionError::Saturated`]        |
//!
//! Both are reported as errors instead of letting NaN or infinity reach the
//! serial link.
//!
//! ```rust
//! use envmon_core::light::LightModel;
//! use envmon_core::errors::ConversionError;
//!
//! let model = LightModel::default();
//! let lux = model.to_lux(512.0).unwrap();
//! assert!(lux > 29.5 && lux < 30.5);
//!
//! assert_eq!(model.to_lux(0.0), Err(ConversionError::NoDividerVoltage));
//! assert_eq!(model.to_lux(1023.0), Err(ConversionError::Saturated));
//! ```

use crate::{
    constants::light::{
        ADC_REF_VOLTAGE, LUX_CALC_EXPONENT, LUX_CALC_SCALAR, MAX_ADC_READING, REF_RESISTANCE_OHMS,
    },
    errors::{ConversionError, ConversionResult},
};

/// Voltage-divider and power-law constants for one LDR circuit
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LightModel {
    /// Full-scale ADC count
    pub max_adc: u16,
    /// ADC reference and divider supply voltage (V)
    pub ref_voltage: f32,
    /// Fixed divider resistor (Ω)
    pub ref_resistance: f32,
    /// Power-law scalar
    pub scalar: f32,
    /// Power-law exponent
    pub exponent: f32,
}

impl Default for LightModel {
    fn default() -> Self {
        Self {
            max_adc: MAX_ADC_READING,
            ref_voltage: ADC_REF_VOLTAGE,
            ref_resistance: REF_RESISTANCE_OHMS,
            scalar: LUX_CALC_SCALAR,
            exponent: LUX_CALC_EXPONENT,
        }
    }
}

impl LightModel {
    /// Check the constants can produce a reading at all
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.max_adc == 0 {
            return Err("max_adc is zero");
        }
        if !(self.ref_voltage.is_finite() && self.ref_voltage > 0.0) {
            return Err("reference voltage must be positive");
        }
        if !(self.ref_resistance.is_finite() && self.ref_resistance > 0.0) {
            return Err("reference resistance must be positive");
        }
        if !self.scalar.is_finite() || !self.exponent.is_finite() {
            return Err("power-law constants must be finite");
        }
        Ok(())
    }

    /// LDR resistance (Ω) for an averaged raw reading
    pub fn resistance(&self, raw_mean: f32) -> ConversionResult<f32> {
        if !raw_mean.is_finite() {
            return Err(ConversionError::InvalidInput);
        }

        let max = f32::from(self.max_adc);
        if raw_mean < 0.0 || raw_mean > max {
            return Err(ConversionError::OutOfRange {
                value: raw_mean,
                max: self.max_adc,
            });
        }
        if raw_mean == 0.0 {
            return Err(ConversionError::NoDividerVoltage);
        }
        if raw_mean == max {
            return Err(ConversionError::Saturated);
        }

        let resistor_voltage = raw_mean / max * self.ref_voltage;
        let ldr_voltage = self.ref_voltage - resistor_voltage;
        let resistance = ldr_voltage / resistor_voltage * self.ref_resistance;

        // rounding can still land on zero right next to full scale
        if resistance <= 0.0 {
            return Err(ConversionError::Saturated);
        }
        if !resistance.is_finite() {
            return Err(ConversionError::NonFinite);
        }
        Ok(resistance)
    }

    /// Illuminance (lux) for an averaged raw reading
    pub fn to_lux(&self, raw_mean: f32) -> ConversionResult<f32> {
        let resistance = self.resistance(raw_mean)?;
        let lux = self.scalar * libm::powf(resistance, self.exponent);

        if lux.is_finite() {
            Ok(lux)
        } else {
            Err(ConversionError::NonFinite)
        }
    }
}
