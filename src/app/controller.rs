//! Widget controller and coordination layer
//!
//! The controller owns the widget state and everything with a lifetime
//! beyond one event: the animator and the persistence cache. Hosts feed it
//! intents and per-frame callbacks; it never blocks.

use std::time::Instant;

use tracing::{debug, info};

use crate::app::state::{Effect, Intent, WidgetState};
use crate::config::WidgetConfig;
use crate::domain::animation::{AnimationTicket, Animator, Frame};
use crate::domain::intensity::IntensityScale;
use crate::store::StatePersistence;

/// What the host has to do after an intent was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dispatch {
    /// Move keyboard focus back to the text field
    pub focus_input: bool,
    /// Schedule per-frame callbacks for this animation
    pub animation: Option<AnimationTicket>,
}

/// Main widget controller
pub struct WidgetController {
    state: WidgetState,
    animator: Animator,
    persistence: StatePersistence,
    config: WidgetConfig,
    scale: IntensityScale,
}

impl WidgetController {
    /// Creates a controller, restoring the last saved inputs if any
    pub fn new(config: WidgetConfig, persistence: StatePersistence) -> Self {
        let saved = persistence.load();
        match &saved {
            Some(s) => info!(value = s.value, from = %s.from_unit, to = %s.to_unit, "restored saved state"),
            None => debug!("no saved state, starting with defaults"),
        }

        Self {
            state: WidgetState::restore(saved),
            animator: Animator::new(),
            scale: config.intensity_scale(),
            persistence,
            config,
        }
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    /// Applies an intent and carries out its effects
    pub fn dispatch(&mut self, intent: Intent, now: Instant) -> Dispatch {
        debug!(?intent, "dispatching intent");

        let effects = self.state.apply(intent, &self.scale);
        let mut outcome = Dispatch::default();

        for effect in effects {
            match effect {
                Effect::FocusInput => outcome.focus_input = true,
                Effect::CancelAnimation => {
                    self.animator.cancel();
                    outcome.animation = None;
                }
                Effect::StartAnimation { from, to } => {
                    let ticket = self
                        .animator
                        .start(from, to, self.config.animation_duration(), now);
                    outcome.animation = Some(ticket);
                }
                Effect::Persist(saved) => {
                    info!(
                        value = saved.value,
                        from = %saved.from_unit,
                        to = %saved.to_unit,
                        "converted"
                    );
                    self.persistence.save(&saved);
                }
            }
        }

        if let Some(error) = self.state.error {
            debug!(%error, "input rejected");
        }

        outcome
    }

    /// Per-frame callback
    ///
    /// Returns the frame that was shown, or `None` when the ticket belongs to
    /// a cancelled or finished animation. A `None` means the host should stop
    /// scheduling callbacks for this ticket.
    pub fn on_frame(&mut self, ticket: AnimationTicket, now: Instant) -> Option<Frame> {
        let frame = self.animator.frame(ticket, now)?;
        self.state.show_frame(&frame);
        Some(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::domain::unit::Unit;
    use crate::domain::validation::ValidationError;
    use crate::store::{KeyValueStore, MemoryStore, SavedState};

    fn controller() -> WidgetController {
        WidgetController::new(
            WidgetConfig::default(),
            StatePersistence::new(Box::new(MemoryStore::new())),
        )
    }

    fn type_and_submit(controller: &mut WidgetController, text: &str, now: Instant) -> Dispatch {
        controller.dispatch(Intent::EditInput(text.to_string()), now);
        controller.dispatch(Intent::Submit, now)
    }

    #[test]
    fn submit_animates_to_converted_value() {
        let mut controller = controller();
        let now = Instant::now();
        let outcome = type_and_submit(&mut controller, "100", now);

        let ticket = outcome.animation.unwrap();
        assert!(!outcome.focus_input);
        assert!(controller.is_animating());

        let mid = controller.on_frame(ticket, now + Duration::from_millis(350)).unwrap();
        assert!(!mid.finished);
        assert_eq!(mid.value, 106.0);

        let last = controller.on_frame(ticket, now + Duration::from_secs(1)).unwrap();
        assert!(last.finished);
        assert_eq!(controller.state().result.as_ref().unwrap().value_text, "212");
        assert!(controller.on_frame(ticket, now + Duration::from_secs(2)).is_none());
    }

    #[test]
    fn resubmitting_cancels_stale_frames() {
        let mut controller = controller();
        let now = Instant::now();
        let first = type_and_submit(&mut controller, "0", now).animation.unwrap();
        let later = now + Duration::from_millis(100);
        let second = type_and_submit(&mut controller, "100", later).animation.unwrap();

        assert!(controller.on_frame(first, later).is_none());
        let frame = controller.on_frame(second, later + Duration::from_secs(1)).unwrap();
        assert_eq!(frame.text, "212");
    }

    #[test]
    fn invalid_input_requests_focus() {
        let mut controller = controller();
        let outcome = type_and_submit(&mut controller, "abc", Instant::now());
        assert!(outcome.focus_input);
        assert!(outcome.animation.is_none());
        assert_eq!(controller.state().error, Some(ValidationError::InvalidNumber));
    }

    #[test]
    fn clear_stops_running_animation() {
        let mut controller = controller();
        let now = Instant::now();
        let ticket = type_and_submit(&mut controller, "20", now).animation.unwrap();

        let outcome = controller.dispatch(Intent::Clear, now);
        assert!(outcome.focus_input);
        assert!(!controller.is_animating());
        assert!(controller.on_frame(ticket, now).is_none());
        assert!(controller.state().result.is_none());
    }

    #[test]
    fn saved_state_is_restored() {
        let mut store = MemoryStore::new();
        let saved = SavedState {
            value: 451.0,
            from_unit: Unit::Fahrenheit,
            to_unit: Unit::Celsius,
            live_mode: true,
        };
        store
            .set("temp_last", &serde_json::to_string(&saved).unwrap())
            .unwrap();

        let controller = WidgetController::new(
            WidgetConfig::default(),
            StatePersistence::new(Box::new(store)),
        );
        let state = controller.state();
        assert_eq!(state.input, "451");
        assert_eq!(state.from_unit, Unit::Fahrenheit);
        assert_eq!(state.to_unit, Unit::Celsius);
        assert!(state.live_mode);
        assert_eq!(state.slider.value, 176.0);
    }

    #[test]
    fn thermometer_follows_latest_conversion() {
        let mut controller = controller();
        let now = Instant::now();
        type_and_submit(&mut controller, "-100", now);
        assert_eq!(controller.state().intensity.unwrap().fill_percent, 0);

        type_and_submit(&mut controller, "10", now);
        assert_eq!(controller.state().intensity.unwrap().fill_percent, 50);
    }
}
