//! SVG rasterization backends.
//!
//! PNG output is optional: builds without the `raster` feature have no
//! backend and favicon packages fall back to a deferred script.

use crate::error::Result;

/// Renders an SVG document to PNG bytes.
pub trait Rasterizer {
    /// Render `svg` into a `size` x `size` PNG.
    fn render_png(&self, svg: &str, size: u32) -> Result<Vec<u8>>;
}

/// The built-in backend, if this build has one.
#[cfg(feature = "raster")]
pub fn default_rasterizer() -> Result<Box<dyn Rasterizer>> {
    Ok(Box::new(ResvgRasterizer::new()))
}

/// The built-in backend, if this build has one.
#[cfg(not(feature = "raster"))]
pub fn default_rasterizer() -> Result<Box<dyn Rasterizer>> {
    Err(crate::error::BrandError::raster(
        "brandkit was built without the `raster` feature",
    ))
}

#[cfg(feature = "raster")]
pub use resvg_backend::ResvgRasterizer;

#[cfg(feature = "raster")]
mod resvg_backend {
    use std::io::Cursor;

    use image::{ImageFormat, Rgba, RgbaImage};
    use resvg::tiny_skia::{Pixmap, Transform};
    use resvg::usvg;

    use crate::error::{BrandError, Result};

    use super::Rasterizer;

    /// Rasterizer backed by `resvg`, with system fonts loaded for the
    /// letter mark.
    pub struct ResvgRasterizer {
        options: usvg::Options<'static>,
    }

    impl ResvgRasterizer {
        pub fn new() -> Self {
            let mut options = usvg::Options::default();
            options.fontdb_mut().load_system_fonts();
            Self { options }
        }
    }

    impl Default for ResvgRasterizer {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Rasterizer for ResvgRasterizer {
        fn render_png(&self, svg: &str, size: u32) -> Result<Vec<u8>> {
            let tree = usvg::Tree::from_str(svg, &self.options)
                .map_err(|e| BrandError::raster(format!("Invalid SVG: {}", e)))?;

            let mut pixmap = Pixmap::new(size, size).ok_or_else(|| {
                BrandError::raster(format!("Cannot allocate a {0}x{0} pixmap", size))
            })?;

            let tree_size = tree.size();
            let transform = Transform::from_scale(
                size as f32 / tree_size.width(),
                size as f32 / tree_size.height(),
            );
            resvg::render(&tree, transform, &mut pixmap.as_mut());

            encode_png(&pixmap)
        }
    }

    /// Encode a premultiplied pixmap as a straight-alpha PNG.
    fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>> {
        let mut img = RgbaImage::new(pixmap.width(), pixmap.height());
        for (src, dst) in pixmap.pixels().iter().zip(img.pixels_mut()) {
            let c = src.demultiply();
            *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
        }

        let mut buffer = Vec::new();
        img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
            .map_err(|e| BrandError::raster(format!("Failed to encode PNG: {}", e)))?;
        Ok(buffer)
    }

}
