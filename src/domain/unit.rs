//! Temperature units
//!
//! The widget knows exactly three scales. Each unit has a single-letter code
//! used for persistence and a display label used next to the result.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A temperature scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "C")]
    Celsius,
    #[serde(rename = "F")]
    Fahrenheit,
    #[serde(rename = "K")]
    Kelvin,
}

/// Error returned when text does not name a known unit
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown temperature unit: '{input}'")]
pub struct UnitParseError {
    pub input: String,
}

impl Unit {
    /// All units in selector order
    pub const ALL: [Unit; 3] = [Unit::Celsius, Unit::Fahrenheit, Unit::Kelvin];

    /// Single-letter code ("C", "F", "K")
    pub fn code(self) -> char {
        match self {
            Unit::Celsius => 'C',
            Unit::Fahrenheit => 'F',
            Unit::Kelvin => 'K',
        }
    }

    /// Label shown next to a value
    pub fn label(self) -> &'static str {
        match self {
            Unit::Celsius => "°C",
            Unit::Fahrenheit => "°F",
            Unit::Kelvin => "K",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Unit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" | "celsius" => Ok(Unit::Celsius),
            "f" | "fahrenheit" => Ok(Unit::Fahrenheit),
            "k" | "kelvin" => Ok(Unit::Kelvin),
            _ => Err(UnitParseError {
                input: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_and_labels() {
        assert_eq!(Unit::Celsius.code(), 'C');
        assert_eq!(Unit::Kelvin.label(), "K");
        assert_eq!(Unit::Fahrenheit.to_string(), "°F");
    }

    #[test]
    fn parse_accepts_codes_and_names() {
        assert_eq!("c".parse::<Unit>().unwrap(), Unit::Celsius);
        assert_eq!(" F ".parse::<Unit>().unwrap(), Unit::Fahrenheit);
        assert_eq!("Kelvin".parse::<Unit>().unwrap(), Unit::Kelvin);
        assert!("rankine".parse::<Unit>().is_err());
    }

    #[test]
    fn serializes_as_code() {
        assert_eq!(serde_json::to_string(&Unit::Kelvin).unwrap(), "\"K\"");
        let unit: Unit = serde_json::from_str("\"F\"").unwrap();
        assert_eq!(unit, Unit::Fahrenheit);
    }
}
