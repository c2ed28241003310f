//! Project configuration (brandkit.yaml) parsing.
//!
//! The config names the brand, layers palette colours over an optional
//! design profile, and selects which assets a build produces.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BrandError, Result};
use crate::favicon::FaviconShape;
use crate::render::{DividerType, HeroType, PatternType};
use crate::types::{Colour, PaletteOverrides};

/// File name looked up in the working directory.
pub const CONFIG_FILENAME: &str = "brandkit.yaml";

/// Favicon settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaviconConfig {
    pub shape: FaviconShape,
    /// Web manifest background colour.
    pub background: Option<Colour>,
}

/// Project config loaded from brandkit.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Brand name, used for the favicon letter and web manifest.
    pub name: Option<String>,

    /// Palette colours. These win over the design profile.
    pub palette: PaletteOverrides,

    /// Design profile JSON, relative to the config file.
    pub profile: Option<PathBuf>,

    /// Output directory for `brandkit build`.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    pub favicon: FaviconConfig,

    /// Asset selections. Absent means every type.
    pub patterns: Option<Vec<PatternType>>,
    pub dividers: Option<Vec<DividerType>>,
    pub heroes: Option<Vec<HeroType>>,

    /// Rasterize PNG favicons.
    #[serde(default = "default_png")]
    pub png: bool,
}

fn default_output() -> PathBuf {
    PathBuf::from("dist")
}

fn default_png() -> bool {
    true
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: None,
            palette: PaletteOverrides::default(),
            profile: None,
            output: default_output(),
            favicon: FaviconConfig::default(),
            patterns: None,
            dividers: None,
            heroes: None,
            png: default_png(),
        }
    }
}

impl ProjectConfig {
    /// Load config from a brandkit.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| BrandError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty file is a valid, all-defaults config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| BrandError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// The config file in `dir`, if there is one.
    pub fn find(dir: &Path) -> Option<PathBuf> {
        let path = dir.join(CONFIG_FILENAME);
        path.is_file().then_some(path)
    }

    /// Profile path resolved against the directory holding the config.
    pub fn profile_path(&self, base: &Path) -> Option<PathBuf> {
        self.profile.as_ref().map(|p| {
            if p.is_absolute() {
                p.clone()
            } else {
                base.join(p)
            }
        })
    }

    pub fn effective_patterns(&self) -> Vec<PatternType> {
        self.patterns
            .clone()
            .unwrap_or_else(|| PatternType::ALL.to_vec())
    }

    pub fn effective_dividers(&self) -> Vec<DividerType> {
        self.dividers
            .clone()
            .unwrap_or_else(|| DividerType::ALL.to_vec())
    }

    pub fn effective_heroes(&self) -> Vec<HeroType> {
        self.heroes.clone().unwrap_or_else(|| HeroType::ALL.to_vec())
    }
}
