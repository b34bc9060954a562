//! Configuration module for thermo-dial
//!
//! Holds the tunable widget settings and the per-unit slider domains shared
//! between the controller and the presentation layer.

pub mod slider;
pub mod widget;

pub use slider::{Slider, SliderRange};
pub use widget::{ConfigError, DEFAULT_STORAGE_KEY, WidgetConfig};
