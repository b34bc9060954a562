//! Thermometer fill and colour derived from a Celsius reading

/// 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Per-channel linear blend towards `other` by `weight` in `[0, 1]`
    pub fn lerp(self, other: Rgb, weight: f64) -> Rgb {
        let mix = |a: u8, b: u8| -> u8 {
            let value = f64::from(a) + (f64::from(b) - f64::from(a)) * weight;
            value.round().clamp(0.0, 255.0) as u8
        };
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

/// Temperature scale of the thermometer and its colour anchors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntensityScale {
    pub min_celsius: f64,
    pub max_celsius: f64,
    pub cold: Rgb,
    pub hot: Rgb,
}

impl IntensityScale {
    pub const COLD: Rgb = Rgb::new(0, 160, 255);
    pub const HOT: Rgb = Rgb::new(255, 69, 0);

    /// Position of `celsius` on the scale, clamped to `[0, 1]`
    pub fn normalize(&self, celsius: f64) -> f64 {
        let span = self.max_celsius - self.min_celsius;
        if span <= 0.0 || celsius.is_nan() {
            return 0.0;
        }
        ((celsius - self.min_celsius) / span).clamp(0.0, 1.0)
    }

    pub fn map(&self, celsius: f64) -> VisualIntensity {
        let normalized = self.normalize(celsius);
        VisualIntensity {
            fill_percent: (normalized * 100.0).round() as u8,
            color: self.cold.lerp(self.hot, normalized),
        }
    }
}

impl Default for IntensityScale {
    fn default() -> Self {
        Self {
            min_celsius: -30.0,
            max_celsius: 50.0,
            cold: Self::COLD,
            hot: Self::HOT,
        }
    }
}

/// What the thermometer indicator shows for a reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualIntensity {
    /// Fill height, 0..=100
    pub fill_percent: u8,
    pub color: Rgb,
}

/// Maps a Celsius reading onto the default -30..50 scale
pub fn map_intensity(celsius: f64) -> VisualIntensity {
    IntensityScale::default().map(celsius)
}
