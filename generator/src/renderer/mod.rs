use std::error;
use std::fmt;
use std::io;

use tiny_skia::Pixmap;

use crate::template::Template;

pub mod fallback;
pub mod svg;

/// An error relating to icon rendering.
#[derive(Debug)]
pub enum Error {
    /// The preferred rendering capability is unavailable.
    Unavailable(&'static str),

    /// The template markup could not be parsed.
    Template(String),

    /// A pixel buffer with the requested dimensions could not be created.
    InvalidDimensions(u32),

    /// The glyph outline could not be constructed.
    Glyph,

    /// A rendered icon could not be encoded as PNG.
    Encode(String),

    /// An error from the file system.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Error::*;
        match self {
            Unavailable(reason) => {
                write!(f, "rendering unavailable: {}", reason)
            }
            Template(e) => write!(f, "invalid template: {}", e),
            InvalidDimensions(size) => {
                write!(f, "invalid dimensions: {} × {}", size, size)
            }
            Glyph => write!(f, "the glyph outline is degenerate"),
            Encode(e) => write!(f, "failed to encode PNG: {}", e),
            Io(e) => e.fmt(f),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        use Error::*;
        match self {
            Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(source: io::Error) -> Self {
        Error::Io(source)
    }
}

/// A source of raster icons derived from the fixed template.
pub trait Renderer {
    /// Renders the template as a square raster image.
    ///
    /// # Arguments
    /// *  `size` - The width and height, in pixels, of the rendered image.
    fn render(&self, size: u32) -> Result<Pixmap, Error>;

    /// Whether this renderer is the lower fidelity fallback.
    fn is_fallback(&self) -> bool;
}

/// Selects a renderer for a template.
///
/// The SVG renderer is preferred. If its required capability is
/// unavailable, the basic drawing fallback is selected instead and a
/// warning is logged. Any other construction error is propagated.
///
/// # Arguments
/// *  `template` - The template to render.
pub fn select(template: &Template) -> Result<Box<dyn Renderer>, Error> {
    match svg::SvgRenderer::new(template) {
        Ok(renderer) => Ok(Box::new(renderer)),
        Err(Error::Unavailable(reason)) => {
            log::warn!("SVG rendering is unavailable: {}", reason);
            log::warn!(
                "falling back to basic raster drawing; install a \
                 sans-serif font for full fidelity icons"
            );
            Ok(Box::new(fallback::FallbackRenderer::new(template)?))
        }
        Err(e) => Err(e),
    }
}
