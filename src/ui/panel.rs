//! Plain-text view of the widget
//!
//! Used by the terminal driver; mirrors the fields a graphical host would
//! show (input, units, slider, result, note, error, thermometer).

use std::fmt;

use crate::app::state::WidgetState;
use crate::domain::format::plain_number;
use crate::domain::intensity::VisualIntensity;

const BAR_CELLS: usize = 20;

/// Display adapter for [`WidgetState`]
pub struct Panel<'a> {
    state: &'a WidgetState,
}

impl<'a> Panel<'a> {
    pub fn new(state: &'a WidgetState) -> Self {
        Self { state }
    }
}

/// Horizontal bar for a thermometer fill, e.g. `[##########..........]`
pub fn fill_bar(intensity: &VisualIntensity) -> String {
    let filled = (usize::from(intensity.fill_percent.min(100)) * BAR_CELLS + 50) / 100;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_CELLS - filled))
}

impl fmt::Display for Panel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state;

        writeln!(
            f,
            "{} -> {}   live: {}",
            state.from_unit.label(),
            state.to_unit.label(),
            if state.live_mode { "on" } else { "off" }
        )?;
        writeln!(
            f,
            "input: {:<12} slider: {} ({}..{})",
            format!("'{}'", state.input),
            plain_number(state.slider.value),
            plain_number(state.slider.range.min),
            plain_number(state.slider.range.max)
        )?;

        match &state.result {
            Some(result) => writeln!(
                f,
                "result: {} {}   {}",
                result.value_text,
                result.unit_label(),
                result.note()
            )?,
            None => writeln!(f, "result: -")?,
        }

        if let Some(error) = &state.error {
            writeln!(f, "error: {error}")?;
        }

        match &state.intensity {
            Some(i) => write!(
                f,
                "thermometer: {} {:>3}%  rgb({},{},{})",
                fill_bar(i),
                i.fill_percent,
                i.color.r,
                i.color.g,
                i.color.b
            ),
            None => write!(f, "thermometer: -"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::Intent;
    use crate::domain::intensity::{IntensityScale, map_intensity};

    #[test]
    fn bar_scales_with_fill() {
        assert_eq!(fill_bar(&map_intensity(-100.0)), format!("[{}]", ".".repeat(20)));
        assert_eq!(fill_bar(&map_intensity(100.0)), format!("[{}]", "#".repeat(20)));
        assert_eq!(fill_bar(&map_intensity(10.0)), format!("[{}{}]", "#".repeat(10), ".".repeat(10)));
    }

    #[test]
    fn panel_shows_result_and_note() {
        let mut state = WidgetState::default();
        let scale = IntensityScale::default();
        state.apply(Intent::EditInput("100".to_string()), &scale);
        state.apply(Intent::Submit, &scale);

        let text = Panel::new(&state).to_string();
        assert!(text.starts_with("°C -> °F   live: off"));
        assert!(text.contains("result: 0 °F   Converted from 100 °C"));
        assert!(text.contains("100%  rgb(255,69,0)"));
        assert!(!text.contains("error:"));
    }

    #[test]
    fn panel_shows_error() {
        let mut state = WidgetState::default();
        state.apply(Intent::Submit, &IntensityScale::default());

        let text = Panel::new(&state).to_string();
        assert!(text.contains("error: Please enter a temperature value."));
        assert!(text.contains("result: -"));
    }
}
