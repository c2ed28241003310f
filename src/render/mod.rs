//! Procedural SVG generators.
//!
//! Each generator turns a resolved [`Palette`] into a standalone SVG
//! document. Output depends only on the palette and the asset type: there is
//! no clock or global random state, so identical input gives byte-identical
//! output.

mod divider;
mod hero;
mod pattern;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Palette;

pub use divider::{generate_all_dividers, generate_divider, DividerType, DIVIDER_HEIGHT, DIVIDER_WIDTH};
pub use hero::{generate_all_heroes, generate_hero, HeroType, HERO_HEIGHT, HERO_WIDTH};
pub use pattern::{generate_all_patterns, generate_pattern, PatternType};

/// A generated SVG asset and a snippet showing how to use it from CSS.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedAsset<K> {
    #[serde(rename = "type")]
    pub kind: K,
    pub svg: String,
    pub css_usage: String,
}

/// Broad grouping of generated files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetCategory {
    Pattern,
    Divider,
    Hero,
    Favicon,
    Meta,
}

impl AssetCategory {
    pub fn name(self) -> &'static str {
        match self {
            AssetCategory::Pattern => "pattern",
            AssetCategory::Divider => "divider",
            AssetCategory::Hero => "hero",
            AssetCategory::Favicon => "favicon",
            AssetCategory::Meta => "meta",
        }
    }

    /// Bundle directory for the category; favicon and meta files sit at
    /// the bundle root.
    pub fn dir(self) -> Option<&'static str> {
        match self {
            AssetCategory::Pattern => Some("patterns"),
            AssetCategory::Divider => Some("dividers"),
            AssetCategory::Hero => Some("heroes"),
            AssetCategory::Favicon | AssetCategory::Meta => None,
        }
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A family of generated SVG assets (patterns, dividers, heroes).
pub trait AssetType: Copy + fmt::Display + 'static {
    const CATEGORY: AssetCategory;

    /// Every variant in canonical order.
    fn all() -> &'static [Self];

    /// Generate this asset for a palette.
    fn generate(self, palette: &Palette) -> GeneratedAsset<Self>;

    /// One-line human description.
    fn description(self) -> &'static str;

    /// Output file name, e.g. `pattern-dots.svg`.
    fn file_name(self) -> String {
        format!("{}-{}.svg", Self::CATEGORY, self)
    }

    /// Path inside an asset bundle, e.g. `patterns/pattern-dots.svg`.
    fn bundle_path(self) -> String {
        match Self::CATEGORY.dir() {
            Some(dir) => format!("{}/{}", dir, self.file_name()),
            None => self.file_name(),
        }
    }
}
