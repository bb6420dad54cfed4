use std::fs;
use std::path::Path;

use crate::renderer::{Error, Renderer};

/// The icon sizes, in pixels, required by the application manifest.
pub const SIZES: [u32; 8] = [72, 96, 128, 144, 152, 192, 384, 512];

/// The directory, relative to the working directory, receiving the icons.
pub const TARGET_DIR: &str = "public/icons";

/// The file name of the icon with a specific size.
///
/// # Arguments
/// *  `size` - The icon size in pixels.
pub fn file_name(size: u32) -> String {
    format!("icon-{}x{}.png", size, size)
}

/// Renders every icon size into a directory.
///
/// The directory and its parents are created if absent. One progress line
/// is printed per generated file, and a summary line on completion. Sizes
/// are rendered in order, and the first failure aborts the run.
///
/// # Arguments
/// *  `renderer` - The renderer deriving raster images from the template.
/// *  `target` - The directory receiving the generated files.
/// *  `sizes` - The icon sizes to generate.
pub fn generate<P>(
    renderer: &dyn Renderer,
    target: P,
    sizes: &[u32],
) -> Result<(), Error>
where
    P: AsRef<Path>,
{
    let target = target.as_ref();
    fs::create_dir_all(target)?;

    for &size in sizes {
        let name = file_name(size);
        let data = renderer
            .render(size)?
            .encode_png()
            .map_err(|e| Error::Encode(e.to_string()))?;
        fs::write(target.join(&name), &data)?;
        if renderer.is_fallback() {
            println!("Generated (fallback): {}", name);
        } else {
            println!("Generated: {}", name);
        }
    }

    println!();
    if renderer.is_fallback() {
        println!("Fallback icons generated!");
    } else {
        println!("All icons generated successfully!");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use tiny_skia::Pixmap;

    use crate::renderer::fallback::FallbackRenderer;
    use crate::renderer::select;
    use crate::template::Template;

    #[test]
    fn generate_writes_every_size() {
        let renderer = FallbackRenderer::new(&Template::default()).unwrap();
        let target = tempfile::tempdir().unwrap();

        generate(&renderer, target.path(), &SIZES).unwrap();

        for &size in SIZES.iter() {
            let pixmap =
                Pixmap::load_png(target.path().join(file_name(size)))
                    .unwrap();
            assert_eq!(pixmap.width(), size);
            assert_eq!(pixmap.height(), size);
        }
    }

    #[test]
    fn generate_writes_nothing_else() {
        let renderer = FallbackRenderer::new(&Template::default()).unwrap();
        let target = tempfile::tempdir().unwrap();

        generate(&renderer, target.path(), &[72, 512]).unwrap();

        let mut names = fs::read_dir(target.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect::<Vec<_>>();
        names.sort();
        assert_eq!(names, vec!["icon-512x512.png", "icon-72x72.png"]);
    }

    #[test]
    fn generate_creates_the_target_directory() {
        let renderer = FallbackRenderer::new(&Template::default()).unwrap();
        let target = tempfile::tempdir().unwrap();
        let nested = target.path().join("public").join("icons");

        generate(&renderer, &nested, &[96]).unwrap();

        assert!(nested.join(file_name(96)).is_file());
    }

    #[test]
    fn generate_with_selected_renderer() {
        let renderer = select(&Template::default()).unwrap();
        let target = tempfile::tempdir().unwrap();

        generate(renderer.as_ref(), target.path(), &SIZES).unwrap();

        assert_eq!(
            fs::read_dir(target.path()).unwrap().count(),
            SIZES.len(),
        );
    }
}
