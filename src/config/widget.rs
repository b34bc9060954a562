use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::animation::DEFAULT_DURATION;
use crate::domain::intensity::{IntensityScale, Rgb};

/// Storage key the last-used inputs are saved under
pub const DEFAULT_STORAGE_KEY: &str = "temp_last";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Thermometer scale is empty: min {min} must be below max {max}")]
    EmptyScale { min: f64, max: f64 },

    #[error("Thermometer scale bounds must be finite, got {min}..{max}")]
    NonFiniteScale { min: f64, max: f64 },
}

/// Tunable widget settings
///
/// Every field has a default, so a config file only needs the keys it
/// overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Length of the result animation in milliseconds
    pub animation_ms: u64,
    /// Celsius value drawn as an empty thermometer
    pub scale_min_celsius: f64,
    /// Celsius value drawn as a full thermometer
    pub scale_max_celsius: f64,
    pub cold_color: [u8; 3],
    pub hot_color: [u8; 3],
    pub storage_key: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        let scale = IntensityScale::default();
        Self {
            animation_ms: DEFAULT_DURATION.as_millis() as u64,
            scale_min_celsius: scale.min_celsius,
            scale_max_celsius: scale.max_celsius,
            cold_color: [scale.cold.r, scale.cold.g, scale.cold.b],
            hot_color: [scale.hot.r, scale.hot.g, scale.hot.b],
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl WidgetConfig {
    /// Parses a TOML document and checks it
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: WidgetConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from `path`, falling back to defaults if the file
    /// does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = (self.scale_min_celsius, self.scale_max_celsius);
        if !min.is_finite() || !max.is_finite() {
            return Err(ConfigError::NonFiniteScale { min, max });
        }
        if min >= max {
            return Err(ConfigError::EmptyScale { min, max });
        }
        Ok(())
    }

    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }

    pub fn intensity_scale(&self) -> IntensityScale {
        let [cr, cg, cb] = self.cold_color;
        let [hr, hg, hb] = self.hot_color;
        IntensityScale {
            min_celsius: self.scale_min_celsius,
            max_celsius: self.scale_max_celsius,
            cold: Rgb::new(cr, cg, cb),
            hot: Rgb::new(hr, hg, hb),
        }
    }
}
