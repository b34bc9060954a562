//! Thermometer rendering
//!
//! Draws the visual intensity indicator with tiny-skia. Layout calculation is
//! kept separate from rasterization so geometry can be tested without pixels.

use std::path::Path;

use tiny_skia::{
    Color, FillRule, GradientStop, LinearGradient, Paint, PathBuilder, Pixmap, Point,
    Rect as SkiaRect, Shader, SpreadMode, Stroke, Transform,
};

use crate::domain::intensity::{Rgb, VisualIntensity};

/// Alpha at the bottom of the fill gradient (the top is opaque)
const FILL_BOTTOM_ALPHA: f32 = 0.85;

/// Rendering errors
#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("Failed to create pixmap for rendering")]
    PixmapCreationFailed,

    #[error("Canvas too small for a thermometer: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Failed to encode PNG: {0}")]
    Encoding(String),
}

/// Pre-calculated thermometer geometry
#[derive(Debug, Clone)]
pub struct ThermometerLayout {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Outline of the tube
    pub tube: SkiaRect,
    /// Filled part of the tube, absent when the fill is 0%
    pub fill: Option<SkiaRect>,
    pub bulb_center: Point,
    pub bulb_radius: f32,
    /// Fill colour, absent before the first conversion
    pub color: Option<Rgb>,
    pub outline_width: f32,
}

impl ThermometerLayout {
    /// Lays out a thermometer on a `width` x `height` canvas
    pub fn new(
        intensity: Option<&VisualIntensity>,
        width: u32,
        height: u32,
        dpi_scale: f32,
    ) -> Result<Self, RendererError> {
        let invalid = RendererError::InvalidDimensions { width, height };
        let (w, h) = (width as f32, height as f32);

        let margin = (4.0 * dpi_scale).max(1.0);
        let bulb_radius = (w / 2.0 - margin).min(h / 6.0);
        if bulb_radius <= 0.0 {
            return Err(invalid);
        }

        let bulb_center = Point::from_xy(w / 2.0, h - margin - bulb_radius);
        let tube_width = bulb_radius;
        let tube_left = (w - tube_width) / 2.0;
        let tube_height = bulb_center.y - margin;

        let tube = SkiaRect::from_xywh(tube_left, margin, tube_width, tube_height).ok_or(invalid)?;

        let fill = intensity.and_then(|i| {
            let fill_height = tube_height * f32::from(i.fill_percent.min(100)) / 100.0;
            SkiaRect::from_xywh(tube_left, tube.bottom() - fill_height, tube_width, fill_height)
                .filter(|_| fill_height > 0.0)
        });

        Ok(Self {
            canvas_width: width,
            canvas_height: height,
            tube,
            fill,
            bulb_center,
            bulb_radius,
            color: intensity.map(|i| i.color),
            outline_width: (2.0 * dpi_scale).max(1.0),
        })
    }
}

/// Thermometer renderer using tiny-skia
#[derive(Debug, Default)]
pub struct ThermometerRenderer;

impl ThermometerRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render a layout to a pixmap
    pub fn render_layout(&self, layout: &ThermometerLayout) -> Result<Pixmap, RendererError> {
        let mut pixmap = Pixmap::new(layout.canvas_width, layout.canvas_height)
            .ok_or(RendererError::PixmapCreationFailed)?;
        pixmap.fill(Color::TRANSPARENT);

        let solid = match layout.color {
            Some(rgb) => Color::from_rgba8(rgb.r, rgb.g, rgb.b, 255),
            None => Color::from_rgba8(200, 200, 200, 255),
        };

        self.render_bulb(&mut pixmap, layout, solid);
        if let (Some(fill), Some(rgb)) = (layout.fill, layout.color) {
            self.render_fill(&mut pixmap, fill, rgb);
        }
        self.render_outline(&mut pixmap, layout);

        Ok(pixmap)
    }

    /// Render straight to PNG bytes
    pub fn render_png(&self, layout: &ThermometerLayout) -> Result<Vec<u8>, RendererError> {
        self.render_layout(layout)?
            .encode_png()
            .map_err(|e| RendererError::Encoding(e.to_string()))
    }

    pub fn save_png(&self, layout: &ThermometerLayout, path: &Path) -> Result<(), RendererError> {
        self.render_layout(layout)?
            .save_png(path)
            .map_err(|e| RendererError::Encoding(e.to_string()))
    }

    /// Raw RGBA bytes (premultiplied), four per pixel
    pub fn pixmap_to_rgba(&self, pixmap: &Pixmap) -> Vec<u8> {
        pixmap.data().to_vec()
    }

    fn render_bulb(&self, pixmap: &mut Pixmap, layout: &ThermometerLayout, color: Color) {
        let Some(path) = PathBuilder::from_circle(
            layout.bulb_center.x,
            layout.bulb_center.y,
            layout.bulb_radius,
        ) else {
            return;
        };

        let mut paint = Paint::default();
        paint.set_color(color);
        paint.anti_alias = true;
        pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    fn render_fill(&self, pixmap: &mut Pixmap, fill: SkiaRect, rgb: Rgb) {
        let top = Color::from_rgba8(rgb.r, rgb.g, rgb.b, 255);
        let mut bottom = top;
        bottom.apply_opacity(FILL_BOTTOM_ALPHA);

        let shader = LinearGradient::new(
            Point::from_xy(fill.left(), fill.top()),
            Point::from_xy(fill.left(), fill.bottom()),
            vec![GradientStop::new(0.0, top), GradientStop::new(1.0, bottom)],
            SpreadMode::Pad,
            Transform::identity(),
        )
        // A one-pixel fill degenerates the gradient; paint it solid
        .unwrap_or(Shader::SolidColor(top));

        let paint = Paint {
            shader,
            ..Paint::default()
        };
        pixmap.fill_rect(fill, &paint, Transform::identity(), None);
    }

    fn render_outline(&self, pixmap: &mut Pixmap, layout: &ThermometerLayout) {
        let path = PathBuilder::from_rect(layout.tube);

        let mut paint = Paint::default();
        paint.set_color(Color::from_rgba8(90, 90, 90, 255));
        paint.anti_alias = true;

        let stroke = Stroke {
            width: layout.outline_width,
            ..Stroke::default()
        };
        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }
}
