use crate::domain::unit::Unit;

/// Valid slider domain for a source unit
///
/// Roughly -50..80 °C expressed on each scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
}

impl SliderRange {
    pub const CELSIUS: SliderRange = SliderRange { min: -50.0, max: 80.0 };
    pub const FAHRENHEIT: SliderRange = SliderRange { min: -58.0, max: 176.0 };
    pub const KELVIN: SliderRange = SliderRange { min: 0.0, max: 353.0 };

    pub fn for_unit(unit: Unit) -> Self {
        match unit {
            Unit::Celsius => Self::CELSIUS,
            Unit::Fahrenheit => Self::FAHRENHEIT,
            Unit::Kelvin => Self::KELVIN,
        }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }
}

impl Default for SliderRange {
    fn default() -> Self {
        Self::CELSIUS
    }
}

/// The range input: a raw value plus the domain it is clamped into
///
/// The raw value follows the text field unclamped; clamping happens only
/// when the source unit changes or a conversion succeeds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slider {
    pub value: f64,
    pub range: SliderRange,
}

impl Slider {
    pub fn for_unit(unit: Unit) -> Self {
        Self {
            value: 0.0,
            range: SliderRange::for_unit(unit),
        }
    }

    /// Switches to the domain of `unit` and clamps the current value into it
    pub fn adapt_to(&mut self, unit: Unit) {
        self.range = SliderRange::for_unit(unit);
        self.clamp();
    }

    pub fn clamp(&mut self) {
        self.value = self.range.clamp(self.value);
    }
}

impl Default for Slider {
    fn default() -> Self {
        Self::for_unit(Unit::Celsius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_per_unit() {
        assert_eq!(SliderRange::for_unit(Unit::Celsius), SliderRange { min: -50.0, max: 80.0 });
        assert_eq!(SliderRange::for_unit(Unit::Fahrenheit), SliderRange { min: -58.0, max: 176.0 });
        assert_eq!(SliderRange::for_unit(Unit::Kelvin), SliderRange { min: 0.0, max: 353.0 });
    }

    #[test]
    fn adapting_clamps_out_of_range_values() {
        let mut slider = Slider::for_unit(Unit::Kelvin);
        slider.value = 300.0;
        slider.adapt_to(Unit::Fahrenheit);
        assert_eq!(slider.range, SliderRange::FAHRENHEIT);
        assert_eq!(slider.value, 176.0);

        slider.value = -100.0;
        slider.adapt_to(Unit::Fahrenheit);
        assert_eq!(slider.value, -58.0);
    }

    #[test]
    fn in_range_values_survive_adaptation() {
        let mut slider = Slider::for_unit(Unit::Celsius);
        slider.value = 20.0;
        slider.adapt_to(Unit::Kelvin);
        assert_eq!(slider.value, 20.0);
        assert_eq!(slider.range, SliderRange::KELVIN);
    }
}
