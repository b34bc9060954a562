//! Temperature conversion widget core
//!
//! Converts between Celsius, Fahrenheit and Kelvin, animates the displayed
//! result, maps readings onto a thermometer indicator and remembers the
//! last-used inputs.
//!
//! ```text
//!   host events ──► Intent ──► WidgetController ──► WidgetState
//!                                  │   │
//!                     Animator ◄───┘   └───► StatePersistence ──► KeyValueStore
//! ```
//!
//! The host (a browser page, a desktop window, the bundled terminal driver)
//! forwards user actions as [`app::Intent`]s, schedules per-frame callbacks
//! for the returned animation ticket, and renders [`app::WidgetState`].

pub mod app;
pub mod config;
pub mod domain;
pub mod store;
pub mod ui;

pub use app::{Dispatch, Intent, WidgetController, WidgetState};
pub use config::WidgetConfig;
pub use domain::{ConversionResult, Reading, Unit, ValidationError, convert};
pub use store::{FileStore, KeyValueStore, MemoryStore, SavedState, StatePersistence};
