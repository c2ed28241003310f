//! Favicon package: master SVG, PNG renditions, manifest and head tags.

use std::collections::BTreeMap;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serialize;
use serde_json::json;

use crate::error::{BrandError, Result};
use crate::types::Colour;

use super::raster::{default_rasterizer, Rasterizer};
use super::{build_favicon_svg, FaviconOptions};

/// Pixel size of the master SVG.
pub const MASTER_SIZE: u32 = 512;

/// PNG renditions, in pixels.
pub const PNG_SIZES: [u32; 6] = [16, 32, 48, 180, 192, 512];

/// Longest `short_name` written to the web manifest.
const SHORT_NAME_LEN: usize = 12;

/// `<link>` tags referencing the package files.
pub const HEAD_TAGS: &str = r#"<link rel="icon" href="/favicon.svg" type="image/svg+xml">
<link rel="icon" type="image/png" sizes="32x32" href="/favicon-32x32.png">
<link rel="icon" type="image/png" sizes="16x16" href="/favicon-16x16.png">
<link rel="apple-touch-icon" sizes="180x180" href="/apple-touch-icon.png">
<link rel="manifest" href="/site.webmanifest">"#;

/// File name for the PNG rendition at `size`.
pub fn png_file_name(size: u32) -> String {
    if size == 180 {
        "apple-touch-icon.png".to_string()
    } else {
        format!("favicon-{0}x{0}.png", size)
    }
}

/// A complete favicon set.
///
/// `pngs` maps file names to base64 PNG data and is empty when no raster
/// backend was available. `png_script` is always present so the PNGs can be
/// produced later.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaviconPackage {
    pub svg: String,
    pub pngs: BTreeMap<String, String>,
    pub webmanifest: String,
    pub html_head: String,
    pub png_script: String,
}

impl FaviconPackage {
    /// Generate the package with the default raster backend, if any.
    pub fn generate(opts: &FaviconOptions) -> Self {
        match default_rasterizer() {
            Ok(rasterizer) => Self::generate_with(opts, Some(rasterizer.as_ref())),
            Err(e) => {
                log::warn!("PNG favicons skipped: {}", e);
                Self::generate_with(opts, None)
            }
        }
    }

    /// Generate the package with an explicit raster backend.
    ///
    /// Any rasterization failure drops every PNG and leaves the SVG,
    /// manifest and fallback script in place.
    pub fn generate_with(opts: &FaviconOptions, rasterizer: Option<&dyn Rasterizer>) -> Self {
        let pngs = match rasterizer.map(|r| render_pngs(opts, r)) {
            Some(Ok(pngs)) => pngs,
            Some(Err(e)) => {
                log::warn!("PNG favicons skipped: {}", e);
                BTreeMap::new()
            }
            None => BTreeMap::new(),
        };

        Self {
            svg: build_favicon_svg(opts, MASTER_SIZE),
            pngs,
            webmanifest: web_manifest(opts),
            html_head: HEAD_TAGS.to_string(),
            png_script: png_script(),
        }
    }

    /// Decode the PNG renditions, in file-name order.
    pub fn png_bytes(&self) -> Result<Vec<(String, Vec<u8>)>> {
        self.pngs
            .iter()
            .map(|(name, data)| {
                let bytes = STANDARD.decode(data).map_err(|e| BrandError::Build {
                    message: format!("Corrupt PNG data for {}: {}", name, e),
                    help: None,
                })?;
                Ok((name.clone(), bytes))
            })
            .collect()
    }
}

fn render_pngs(opts: &FaviconOptions, rasterizer: &dyn Rasterizer) -> Result<BTreeMap<String, String>> {
    let mut pngs = BTreeMap::new();
    for size in PNG_SIZES {
        // Each size is drawn fresh so proportional strokes and text stay crisp
        let svg = build_favicon_svg(opts, size);
        let png = rasterizer.render_png(&svg, size)?;
        log::debug!("rasterized {} ({} bytes)", png_file_name(size), png.len());
        pngs.insert(png_file_name(size), STANDARD.encode(png));
    }
    Ok(pngs)
}

fn web_manifest(opts: &FaviconOptions) -> String {
    let name = opts.brand_name.trim();
    let short_name: String = name.chars().take(SHORT_NAME_LEN).collect();
    let icon = |size: u32| {
        json!({
            "src": format!("/{}", png_file_name(size)),
            "sizes": format!("{0}x{0}", size),
            "type": "image/png",
        })
    };

    let manifest = json!({
        "name": name,
        "short_name": short_name,
        "icons": [icon(192), icon(512)],
        "theme_color": opts.primary_color.to_string(),
        "background_color": opts.background_color.unwrap_or(Colour::WHITE).to_string(),
        "display": "standalone",
    });
    format!("{:#}", manifest)
}

fn png_script() -> String {
    let mut targets = String::new();
    for size in PNG_SIZES {
        targets.push_str(&format!("  [{}, \"{}\"],\n", size, png_file_name(size)));
    }

    format!(
        r#"// Rasterize favicon.svg into the PNG favicon set.
// Usage: npm install sharp && node rasterize-favicons.mjs
import {{ readFile }} from "node:fs/promises";
import sharp from "sharp";

const svg = await readFile(new URL("./favicon.svg", import.meta.url));
const targets = [
{targets}];

for (const [size, file] of targets) {{
  await sharp(svg, {{ density: 384 }})
    .resize(size, size)
    .png()
    .toFile(new URL(`./${{file}}`, import.meta.url).pathname);
  console.log(`wrote ${{file}}`);
}}
"#
    )
}
