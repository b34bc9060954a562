//! Widget state and intent transitions
//!
//! All mutable UI state lives in [`WidgetState`]. User actions arrive as
//! [`Intent`]s and are applied atomically; anything that needs the outside
//! world (animation clock, storage, input focus) is returned as an [`Effect`]
//! for the controller to carry out.

use crate::config::Slider;
use crate::domain::animation::Frame;
use crate::domain::conversion::ConversionResult;
use crate::domain::format::{format_number, plain_number};
use crate::domain::intensity::{IntensityScale, VisualIntensity};
use crate::domain::unit::Unit;
use crate::domain::validation::{ValidationError, validate};
use crate::store::SavedState;

pub const DEFAULT_FROM_UNIT: Unit = Unit::Celsius;
pub const DEFAULT_TO_UNIT: Unit = Unit::Fahrenheit;

/// User actions the widget reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Convert the current input
    Submit,
    /// Exchange source and target units
    Swap,
    /// Reset input, result and error
    Clear,
    /// Turn live mode on or off
    SetLive(bool),
    /// Pick a new source unit
    ChangeFromUnit(Unit),
    /// Pick a new target unit
    ChangeToUnit(Unit),
    /// Text field contents changed
    EditInput(String),
    /// Range slider moved
    MoveSlider(f64),
}

/// Side effects requested by a transition
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Return keyboard focus to the text field
    FocusInput,
    /// Animate the displayed value from `from` to `to`
    StartAnimation { from: f64, to: f64 },
    /// Stop any in-flight animation
    CancelAnimation,
    /// Write the last-used inputs to storage
    Persist(SavedState),
}

/// What the result area shows
#[derive(Debug, Clone, PartialEq)]
pub struct ResultDisplay {
    pub conversion: ConversionResult,
    /// Text currently shown for the number; follows the animation
    pub value_text: String,
}

impl ResultDisplay {
    pub fn unit_label(&self) -> &'static str {
        self.conversion.target_unit.label()
    }

    pub fn note(&self) -> &str {
        &self.conversion.note
    }
}

/// Complete widget state owned by the controller
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetState {
    pub input: String,
    pub slider: Slider,
    pub from_unit: Unit,
    pub to_unit: Unit,
    pub live_mode: bool,
    pub result: Option<ResultDisplay>,
    pub error: Option<ValidationError>,
    pub intensity: Option<VisualIntensity>,
}

impl Default for WidgetState {
    fn default() -> Self {
        Self {
            input: String::new(),
            slider: Slider::for_unit(DEFAULT_FROM_UNIT),
            from_unit: DEFAULT_FROM_UNIT,
            to_unit: DEFAULT_TO_UNIT,
            live_mode: false,
            result: None,
            error: None,
            intensity: None,
        }
    }
}

impl WidgetState {
    /// Builds the startup state, seeded from saved inputs when available
    pub fn restore(saved: Option<SavedState>) -> Self {
        let mut state = Self::default();
        if let Some(saved) = saved {
            state.from_unit = saved.from_unit;
            state.to_unit = saved.to_unit;
            state.live_mode = saved.live_mode;
            state.input = plain_number(saved.value);
            state.slider.value = saved.value;
        }
        state.slider.adapt_to(state.from_unit);
        state
    }

    /// Number currently displayed in the result area, 0 when there is none
    pub fn displayed_value(&self) -> f64 {
        self.result
            .as_ref()
            .and_then(|r| r.value_text.parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }

    /// Applies an intent and returns the effects it requires
    pub fn apply(&mut self, intent: Intent, scale: &IntensityScale) -> Vec<Effect> {
        let mut effects = Vec::new();

        match intent {
            Intent::Submit => self.submit(scale, &mut effects),

            Intent::Swap => {
                std::mem::swap(&mut self.from_unit, &mut self.to_unit);
                // The old result no longer matches the units
                if self.result.take().is_some() {
                    effects.push(Effect::CancelAnimation);
                }
                self.adapt_slider();
            }

            Intent::Clear => {
                self.input.clear();
                self.result = None;
                self.error = None;
                effects.push(Effect::CancelAnimation);
                effects.push(Effect::FocusInput);
            }

            Intent::SetLive(enabled) => {
                self.live_mode = enabled;
            }

            Intent::ChangeFromUnit(unit) => {
                self.from_unit = unit;
                self.adapt_slider();
                self.submit_if_live(scale, &mut effects);
            }

            Intent::ChangeToUnit(unit) => {
                self.to_unit = unit;
                self.submit_if_live(scale, &mut effects);
            }

            Intent::EditInput(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    self.slider.value = 0.0;
                } else if let Ok(reading) = validate(trimmed, self.from_unit) {
                    self.slider.value = reading.value;
                }
                self.input = text;
                self.submit_if_live(scale, &mut effects);
            }

            Intent::MoveSlider(value) => {
                self.slider.value = value;
                self.input = plain_number(value);
                self.submit_if_live(scale, &mut effects);
            }
        }

        effects
    }

    /// Shows an animation frame in the result area
    pub fn show_frame(&mut self, frame: &Frame) {
        if let Some(result) = self.result.as_mut() {
            result.value_text = frame.text.clone();
        }
    }

    fn submit_if_live(&mut self, scale: &IntensityScale, effects: &mut Vec<Effect>) {
        if self.live_mode {
            self.submit(scale, effects);
        }
    }

    fn submit(&mut self, scale: &IntensityScale, effects: &mut Vec<Effect>) {
        self.error = None;

        let reading = match validate(&self.input, self.from_unit) {
            Ok(reading) => reading,
            Err(e) => {
                self.error = Some(e);
                self.result = None;
                effects.push(Effect::CancelAnimation);
                effects.push(Effect::FocusInput);
                return;
            }
        };

        let conversion = ConversionResult::compute(reading, self.to_unit);
        let start = self.displayed_value();
        let target = conversion.converted_value;

        self.intensity = Some(scale.map(conversion.celsius));
        self.result = Some(ResultDisplay {
            conversion,
            value_text: format_number(start),
        });
        self.slider.clamp();

        effects.push(Effect::StartAnimation {
            from: start,
            to: target,
        });
        effects.push(Effect::Persist(SavedState {
            value: reading.value,
            from_unit: self.from_unit,
            to_unit: self.to_unit,
            live_mode: self.live_mode,
        }));
    }

    /// Re-derives the slider domain for the source unit and mirrors the
    /// clamped value into the text field
    fn adapt_slider(&mut self) {
        self.slider.adapt_to(self.from_unit);
        self.input = plain_number(self.slider.value);
    }
}
