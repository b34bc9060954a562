//! Numeric display animation
//!
//! A displayed value glides from its previous number to the new one over a
//! fixed duration. Frames are pulled by the host's per-frame callback; the
//! animator only answers "what should be shown now".
//!
//! Starting a new animation bumps a generation counter. Tickets from older
//! generations stop producing frames, so a burst of conversions (live typing)
//! never interleaves values from two animations.

use std::time::{Duration, Instant};

use crate::domain::format::{format_number, is_whole};

pub const DEFAULT_DURATION: Duration = Duration::from_millis(700);

/// Quadratic ease-in-out over `t` in `[0, 1]`
pub fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// One rendered step of an animation
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub value: f64,
    pub text: String,
    pub finished: bool,
}

/// A single interpolation from one value to another
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    from: f64,
    to: f64,
    duration: Duration,
    started_at: Instant,
}

impl Animation {
    pub fn new(from: f64, to: f64, duration: Duration, started_at: Instant) -> Self {
        Self {
            from,
            to,
            duration,
            started_at,
        }
    }

    /// Normalized progress after `elapsed`, clamped to `[0, 1]`
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Frame to display `elapsed` after the animation started
    pub fn frame_at(&self, elapsed: Duration) -> Frame {
        let t = self.progress(elapsed);
        let value = self.from + (self.to - self.from) * ease_in_out(t);
        let finished = t >= 1.0;

        // Snap whole targets so the last frame has no fractional residue
        let text = if finished && is_whole(self.to) {
            format_number(value.round())
        } else {
            format_number(value)
        };

        Frame {
            value,
            text,
            finished,
        }
    }

    pub fn frame(&self, now: Instant) -> Frame {
        self.frame_at(now.saturating_duration_since(self.started_at))
    }
}

/// Handle identifying which animation a frame callback belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTicket {
    generation: u64,
}

/// Owner of the single in-flight display animation
#[derive(Debug, Default)]
pub struct Animator {
    generation: u64,
    active: Option<Animation>,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new animation, invalidating any previous ticket
    pub fn start(&mut self, from: f64, to: f64, duration: Duration, now: Instant) -> AnimationTicket {
        self.generation += 1;
        self.active = Some(Animation::new(from, to, duration, now));
        AnimationTicket {
            generation: self.generation,
        }
    }

    /// Stops the current animation; its ticket produces no further frames
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.active = None;
    }

    /// Returns the frame for `ticket` at `now`, or `None` if the ticket is stale
    /// or its animation already delivered the final frame.
    pub fn frame(&mut self, ticket: AnimationTicket, now: Instant) -> Option<Frame> {
        if !self.is_current(ticket) {
            return None;
        }

        let frame = self.active.as_ref()?.frame(now);
        if frame.finished {
            self.active = None;
        }
        Some(frame)
    }

    pub fn is_current(&self, ticket: AnimationTicket) -> bool {
        ticket.generation == self.generation
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }
}
