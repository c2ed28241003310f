//! JSON manifest describing a generated asset bundle.

use serde::{Deserialize, Serialize};

use crate::error::{BrandError, Result};
use crate::render::AssetCategory;
use crate::types::Palette;

/// File format of a bundle entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Svg,
    Png,
    Json,
    Html,
    Script,
}

/// How an entry's contents are carried in a JSON payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Encoding {
    #[serde(rename = "utf-8")]
    Utf8,
    #[serde(rename = "base64")]
    Base64,
}

/// One file in the bundle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetEntry {
    pub path: String,
    #[serde(rename = "type")]
    pub file_type: FileType,
    pub category: AssetCategory,
    pub description: String,
    pub encoding: Encoding,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
}

impl AssetEntry {
    pub fn new(
        path: impl Into<String>,
        file_type: FileType,
        category: AssetCategory,
        description: impl Into<String>,
    ) -> Self {
        let encoding = match file_type {
            FileType::Png => Encoding::Base64,
            _ => Encoding::Utf8,
        };
        Self {
            path: path.into(),
            file_type,
            category,
            description: description.into(),
            encoding,
            usage: None,
        }
    }

    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self
    }
}

/// The manifest document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetManifest {
    pub name: String,
    pub generated_by: String,
    pub palette: Palette,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head_tags: Option<String>,
    pub assets: Vec<AssetEntry>,
}

impl AssetManifest {
    /// Entries in a category, in insertion order.
    pub fn entries(&self, category: AssetCategory) -> impl Iterator<Item = &AssetEntry> {
        self.assets.iter().filter(move |e| e.category == category)
    }

    /// Pretty-printed JSON. Contains no timestamps.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| BrandError::Build {
            message: format!("Failed to serialize manifest: {}", e),
            help: None,
        })
    }
}

/// Collects entries from several generators into one manifest.
#[derive(Debug, Clone)]
pub struct ManifestBuilder {
    name: String,
    palette: Palette,
    head_tags: Option<String>,
    assets: Vec<AssetEntry>,
}

impl ManifestBuilder {
    pub fn new(name: impl Into<String>, palette: Palette) -> Self {
        Self {
            name: name.into(),
            palette,
            head_tags: None,
            assets: Vec::new(),
        }
    }

    pub fn head_tags(&mut self, html: impl Into<String>) -> &mut Self {
        self.head_tags = Some(html.into());
        self
    }

    pub fn add(&mut self, entry: AssetEntry) -> &mut Self {
        self.assets.push(entry);
        self
    }

    pub fn extend(&mut self, entries: impl IntoIterator<Item = AssetEntry>) -> &mut Self {
        self.assets.extend(entries);
        self
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn build(self) -> AssetManifest {
        AssetManifest {
            name: self.name,
            generated_by: format!("brandkit {}", env!("CARGO_PKG_VERSION")),
            palette: self.palette,
            head_tags: self.head_tags,
            assets: self.assets,
        }
    }
}
