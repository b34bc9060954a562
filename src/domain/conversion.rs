//! Linear conversion between temperature scales
//!
//! Every conversion goes through Celsius. The operator order of each formula
//! is fixed so results are reproducible to the last bit.

use crate::domain::format::format_number;
use crate::domain::unit::Unit;

/// One side of a conversion: a value on a given scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub value: f64,
    pub unit: Unit,
}

impl Reading {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// The same temperature expressed in Celsius
    pub fn celsius(&self) -> f64 {
        to_celsius(self.value, self.unit)
    }
}

/// Outcome of converting a reading to a target unit
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    pub converted_value: f64,
    pub target_unit: Unit,
    pub note: String,
    /// Celsius equivalent of the source reading, kept for the thermometer
    pub celsius: f64,
}

impl ConversionResult {
    /// Converts `reading` into `target`
    ///
    /// When source and target units match no arithmetic is applied to the
    /// value, but the Celsius equivalent is still computed.
    pub fn compute(reading: Reading, target: Unit) -> Self {
        let celsius = reading.celsius();

        if reading.unit == target {
            return Self {
                converted_value: reading.value,
                target_unit: target,
                note: format!("No conversion needed ({})", reading.unit.label()),
                celsius,
            };
        }

        Self {
            converted_value: from_celsius(celsius, target),
            target_unit: target,
            note: format!(
                "Converted from {} {}",
                format_number(reading.value),
                reading.unit.label()
            ),
            celsius,
        }
    }
}

pub fn to_celsius(value: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Celsius => value,
        Unit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        Unit::Kelvin => value - 273.15,
    }
}

pub fn from_celsius(celsius: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Celsius => celsius,
        Unit::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
        Unit::Kelvin => celsius + 273.15,
    }
}

/// Converts `value` from one unit to another
///
/// Identical units short-circuit and return `value` untouched.
pub fn convert(value: f64, from: Unit, to: Unit) -> f64 {
    if from == to {
        return value;
    }
    from_celsius(to_celsius(value, from), to)
}
