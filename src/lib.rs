//! brandkit - procedural brand assets
//!
//! A library for generating on-brand SVG assets from a design palette:
//! tileable background patterns, section dividers, hero backgrounds and a
//! favicon package, plus the manifest that describes them.

pub mod bundle;
pub mod cli;
pub mod config;
pub mod error;
pub mod favicon;
pub mod geometry;
pub mod output;
pub mod profile;
pub mod render;
pub mod svg;
pub mod types;

pub use bundle::{AssetBundle, AssetEntry, AssetManifest, BundleFile, BundleOptions, FileContents, ManifestBuilder};
pub use config::{ProjectConfig, CONFIG_FILENAME};
pub use error::{BrandError, Result};
pub use favicon::{build_favicon_svg, FaviconOptions, FaviconPackage, FaviconShape, Rasterizer};
pub use geometry::{smooth_closed_path, wave_path, Point, SeededRandom};
pub use profile::DesignProfile;
pub use render::{
    generate_all_dividers, generate_all_heroes, generate_all_patterns, generate_divider,
    generate_hero, generate_pattern, AssetCategory, AssetType, DividerType, GeneratedAsset,
    HeroType, PatternType,
};
pub use types::{
    adjust_opacity, contrast_color, darken, hex_to_hsl, hex_to_rgb, lighten, mix_colours,
    relative_luminance, rgb_to_hex, Colour, HslColour, Palette, PaletteColors, PaletteOverrides,
};
