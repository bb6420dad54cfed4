use std::fmt;

/// The side length of the template view box, in template units.
pub const VIEW_BOX: u32 = 100;

/// The corner radius of the background rectangle, in template units.
const CORNER_RADIUS: u32 = 20;

/// The letter drawn in the centre of every icon.
pub const GLYPH: char = 'V';

/// The font size of the glyph, in template units.
const FONT_SIZE: u32 = 50;

/// The vertical position of the glyph baseline, in template units.
const BASELINE: u32 = 68;

/// A colour with red, green and blue components.
///
/// When represented by a string, this is the CSS hexadecimal notation used
/// in the template markup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// The fixed vector template from which every icon size is derived.
///
/// The template describes a rounded rectangle filled with a diagonal
/// gradient, with a single letter centred on top. All sizes are rendered
/// from this one description.
#[derive(Clone, Debug)]
pub struct Template {
    /// The colour at the start of the background gradient.
    pub gradient_start: Rgb,

    /// The colour at the end of the background gradient.
    pub gradient_end: Rgb,

    /// The colour of the glyph.
    pub glyph_color: Rgb,
}

impl Template {
    /// Renders this template as SVG markup.
    pub fn svg(&self) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {vb} {vb}">
  <defs>
    <linearGradient id="grad" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:{start}"/>
      <stop offset="100%" style="stop-color:{end}"/>
    </linearGradient>
  </defs>
  <rect width="{vb}" height="{vb}" rx="{rx}" fill="url(#grad)"/>
  <text x="{x}" y="{y}" font-family="Arial, sans-serif" font-size="{fs}" font-weight="bold" fill="{fill}" text-anchor="middle">{glyph}</text>
</svg>
"#,
            vb = VIEW_BOX,
            start = self.gradient_start,
            end = self.gradient_end,
            rx = CORNER_RADIUS,
            x = VIEW_BOX / 2,
            y = BASELINE,
            fs = FONT_SIZE,
            fill = self.glyph_color,
            glyph = GLYPH,
        )
    }
}

impl Default for Template {
    fn default() -> Self {
        Self {
            gradient_start: Rgb(0x1e, 0x3a, 0x8a),
            gradient_end: Rgb(0x3b, 0x82, 0xf6),
            glyph_color: Rgb(0xff, 0xff, 0xff),
        }
    }
}
