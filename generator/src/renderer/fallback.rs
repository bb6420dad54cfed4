use tiny_skia::{
    Color, FillRule, Paint, Path, PathBuilder, Pixmap, Transform,
};

use crate::template::{Rgb, Template, VIEW_BOX};

use super::{Error, Renderer};

/// The horizontal extent of the glyph, in template units.
const LEFT: f32 = 30.0;
const RIGHT: f32 = 70.0;

/// The vertical extent of the glyph, in template units.
const TOP: f32 = 32.0;
const BOTTOM: f32 = 70.0;

/// The horizontal thickness of a glyph stroke.
const STROKE: f32 = 13.0;

/// The height of the notch between the inner edges of the strokes.
const NOTCH: f32 = 24.0;

/// A renderer that approximates the template with drawing primitives.
///
/// The gradient background is reduced to its start colour, and the glyph
/// is drawn as a fixed letter outline rather than typeset from a font.
pub struct FallbackRenderer {
    /// The solid background colour.
    background: Color,

    /// The glyph fill colour.
    foreground: Color,

    /// The glyph outline, in template units.
    glyph: Path,
}

impl FallbackRenderer {
    /// Creates a fallback renderer for a template.
    ///
    /// # Arguments
    /// *  `template` - The template to approximate.
    pub fn new(template: &Template) -> Result<Self, Error> {
        Ok(Self {
            background: color(template.gradient_start),
            foreground: color(template.glyph_color),
            glyph: glyph_outline().ok_or(Error::Glyph)?,
        })
    }
}

impl Renderer for FallbackRenderer {
    fn render(&self, size: u32) -> Result<Pixmap, Error> {
        let mut pixmap = Pixmap::new(size, size)
            .ok_or(Error::InvalidDimensions(size))?;
        pixmap.fill(self.background);

        let mut paint = Paint::default();
        paint.set_color(self.foreground);
        paint.anti_alias = true;

        let scale = size as f32 / VIEW_BOX as f32;
        pixmap.fill_path(
            &self.glyph,
            &paint,
            FillRule::Winding,
            Transform::from_scale(scale, scale),
            None,
        );

        Ok(pixmap)
    }

    fn is_fallback(&self) -> bool {
        true
    }
}

/// Converts a template colour to an opaque drawing colour.
///
/// # Arguments
/// *  `rgb` - The colour to convert.
fn color(rgb: Rgb) -> Color {
    Color::from_rgba8(rgb.0, rgb.1, rgb.2, 255)
}

/// The outline of the letter drawn in the centre of the icon.
///
/// The outer edges run from the top corners to the bottom apex; the inner
/// edges meet above it, leaving two strokes of constant width.
fn glyph_outline() -> Option<Path> {
    let mid = (LEFT + RIGHT) / 2.0;
    let mut path = PathBuilder::new();
    path.move_to(LEFT, TOP);
    path.line_to(mid, BOTTOM);
    path.line_to(RIGHT, TOP);
    path.line_to(RIGHT - STROKE, TOP);
    path.line_to(mid, BOTTOM - NOTCH);
    path.line_to(LEFT + STROKE, TOP);
    path.close();
    path.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> FallbackRenderer {
        FallbackRenderer::new(&Template::default()).unwrap()
    }

    #[test]
    fn render_dimensions() {
        for size in [72, 512] {
            let pixmap = renderer().render(size).unwrap();
            assert_eq!(pixmap.width(), size);
            assert_eq!(pixmap.height(), size);
        }
    }

    #[test]
    fn render_fills_the_background() {
        let pixmap = renderer().render(100).unwrap();
        for (x, y) in [(2, 2), (97, 2), (2, 97), (97, 97)] {
            let pixel = pixmap.pixel(x, y).unwrap();
            assert_eq!(
                (pixel.red(), pixel.green(), pixel.blue()),
                (0x1e, 0x3a, 0x8a),
            );
        }
    }

    #[test]
    fn render_draws_the_glyph() {
        let pixmap = renderer().render(100).unwrap();
        // Inside the left stroke and above the bottom apex.
        for (x, y) in [(40, 40), (50, 60)] {
            let pixel = pixmap.pixel(x, y).unwrap();
            assert_eq!(
                (pixel.red(), pixel.green(), pixel.blue()),
                (0xff, 0xff, 0xff),
            );
        }
    }

    #[test]
    fn render_is_deterministic() {
        let first = renderer().render(192).unwrap().encode_png().unwrap();
        let second = renderer().render(192).unwrap().encode_png().unwrap();
        assert_eq!(first, second);
    }
}
