//! Input validation for the temperature field

use crate::domain::conversion::Reading;
use crate::domain::unit::Unit;

/// Problems with the text typed into the temperature field
///
/// Both are recoverable: the widget shows the message and returns focus to
/// the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a temperature value.")]
    MissingValue,

    #[error("Invalid number. Please enter a numeric value.")]
    InvalidNumber,
}

/// Parses raw field text into a reading on `unit`
///
/// Surrounding whitespace is ignored. There is no range restriction, but the
/// parsed value must be finite.
pub fn validate(raw: &str, unit: Unit) -> Result<Reading, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingValue);
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Reading::new(value, unit)),
        _ => Err(ValidationError::InvalidNumber),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(raw: &str) -> Result<f64, ValidationError> {
        validate(raw, Unit::Celsius).map(|reading| reading.value)
    }

    #[test]
    fn empty_and_whitespace_are_missing() {
        assert_eq!(value(""), Err(ValidationError::MissingValue));
        assert_eq!(value("   \t"), Err(ValidationError::MissingValue));
    }

    #[test]
    fn garbage_is_invalid() {
        assert_eq!(value("abc"), Err(ValidationError::InvalidNumber));
        assert_eq!(value("12x"), Err(ValidationError::InvalidNumber));
        assert_eq!(value("1.2.3"), Err(ValidationError::InvalidNumber));
    }

    #[test]
    fn non_finite_is_invalid() {
        assert_eq!(value("NaN"), Err(ValidationError::InvalidNumber));
        assert_eq!(value("inf"), Err(ValidationError::InvalidNumber));
        assert_eq!(value("1e999"), Err(ValidationError::InvalidNumber));
    }

    #[test]
    fn numbers_are_accepted() {
        assert_eq!(value("-40"), Ok(-40.0));
        assert!(value("3.14").is_ok());
        assert_eq!(value("  98.6 "), Ok(98.6));
        assert_eq!(value("1e3"), Ok(1000.0));
        assert_eq!(value("+5"), Ok(5.0));
    }

    #[test]
    fn reading_carries_the_unit() {
        let reading = validate(" 300 ", Unit::Kelvin).unwrap();
        assert_eq!(reading, Reading::new(300.0, Unit::Kelvin));
    }

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(
            ValidationError::MissingValue.to_string(),
            "Please enter a temperature value."
        );
        assert_eq!(
            ValidationError::InvalidNumber.to_string(),
            "Invalid number. Please enter a numeric value."
        );
    }
}
