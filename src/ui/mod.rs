//! Presentation layer
//!
//! Turns widget state into something visible: a rasterized thermometer and
//! a plain-text panel.

pub mod panel;
pub mod renderer;

pub use panel::Panel;
pub use renderer::{RendererError, ThermometerLayout, ThermometerRenderer};
