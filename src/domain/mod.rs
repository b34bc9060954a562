//! Domain logic and core data structures
//!
//! Pure conversion, validation, formatting and presentation math. Nothing in
//! here touches storage, logging or rendering.

pub mod animation;
pub mod conversion;
pub mod format;
pub mod intensity;
pub mod unit;
pub mod validation;

pub use conversion::{ConversionResult, Reading, convert, from_celsius, to_celsius};
pub use format::format_number;
pub use intensity::{IntensityScale, Rgb, VisualIntensity, map_intensity};
pub use unit::Unit;
pub use validation::{ValidationError, validate};
