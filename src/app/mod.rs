//! Application orchestration layer
//!
//! This module turns user intents into state changes and coordinates the
//! animator and persistence around them.

pub mod controller;
pub mod state;

pub use controller::{Dispatch, WidgetController};
pub use state::{Effect, Intent, ResultDisplay, WidgetState};
