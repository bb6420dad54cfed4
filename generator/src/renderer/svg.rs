use std::sync::Arc;

use tiny_skia::{Pixmap, Transform};
use usvg::fontdb;
use usvg::{Options, Tree};

use crate::template::Template;

use super::{Error, Renderer};

/// A renderer that rasterises the template through its SVG markup.
///
/// The markup is parsed once on construction; every size is then rendered
/// by scaling the template view box to the requested dimensions.
pub struct SvgRenderer {
    /// The parsed template.
    tree: Tree,
}

impl SvgRenderer {
    /// Creates a renderer backed by the system font collection.
    ///
    /// # Arguments
    /// *  `template` - The template to render.
    pub fn new(template: &Template) -> Result<Self, Error> {
        let mut fonts = fontdb::Database::new();
        fonts.load_system_fonts();
        Self::with_fonts(template, fonts)
    }

    /// Creates a renderer drawing glyphs from a specific font collection.
    ///
    /// The template glyph is typeset in a bold sans-serif face. If the
    /// collection provides none, the text element cannot be converted to
    /// outlines, and this constructor fails with [`Error::Unavailable`].
    ///
    /// # Arguments
    /// *  `template` - The template to render.
    /// *  `fonts` - The collection used to convert text to outlines.
    pub fn with_fonts(
        template: &Template,
        fonts: fontdb::Database,
    ) -> Result<Self, Error> {
        let query = fontdb::Query {
            families: &[fontdb::Family::SansSerif],
            weight: fontdb::Weight::BOLD,
            stretch: fontdb::Stretch::Normal,
            style: fontdb::Style::Normal,
        };
        if fonts.query(&query).is_none() {
            return Err(Error::Unavailable(
                "no bold sans-serif font face was found",
            ));
        }

        let mut options = Options::default();
        options.fontdb = Arc::new(fonts);
        let tree = Tree::from_str(&template.svg(), &options)
            .map_err(|e| Error::Template(e.to_string()))?;

        Ok(Self { tree })
    }
}

impl Renderer for SvgRenderer {
    fn render(&self, size: u32) -> Result<Pixmap, Error> {
        let mut pixmap = Pixmap::new(size, size)
            .ok_or(Error::InvalidDimensions(size))?;
        let scale = size as f32 / self.tree.size().width();
        resvg::render(
            &self.tree,
            Transform::from_scale(scale, scale),
            &mut pixmap.as_mut(),
        );

        Ok(pixmap)
    }

    fn is_fallback(&self) -> bool {
        false
    }
}
