//! Design profiles.
//!
//! A design profile is a JSON token file describing a brand: colours,
//! typography, spacing, radii, the component names in use, and optionally a
//! CSS snapshot. Profiles feed palette resolution and are rendered into a
//! markdown fragment that can be pasted into an assistant prompt.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{BrandError, Result};
use crate::types::{contrast_color, relative_luminance, Colour, PaletteOverrides};

/// CSS lines kept in the prompt excerpt.
const CSS_EXCERPT_LINES: usize = 40;

/// Token names accepted for each palette slot, in priority order.
const SLOT_ALIASES: [(&str, &[&str]); 7] = [
    ("primary", &["primary", "brand", "brand-primary"]),
    ("secondary", &["secondary", "brand-secondary"]),
    ("accent", &["accent", "highlight"]),
    ("background", &["background", "bg"]),
    ("amber", &["amber", "warm"]),
    ("lavender", &["lavender", "cool"]),
    ("surface", &["surface", "card"]),
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignTokens {
    pub colors: BTreeMap<String, String>,
    pub typography: BTreeMap<String, Value>,
    pub spacing: BTreeMap<String, Value>,
    pub radii: BTreeMap<String, Value>,
}

/// A persisted design profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignProfile {
    pub name: String,
    #[serde(default)]
    pub tokens: DesignTokens,
    #[serde(default)]
    pub components: Vec<String>,
    #[serde(default)]
    pub css: Option<String>,
}

impl DesignProfile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| BrandError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read design profile: {}", e),
        })?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| BrandError::Parse {
            message: format!("Invalid design profile: {}", e),
            help: Some("A profile needs a \"name\" and a \"tokens.colors\" object".to_string()),
        })
    }

    /// Palette slots found in `tokens.colors`.
    ///
    /// Slot names are matched case-insensitively, with `_` treated as `-`.
    /// A recognised slot holding something other than a hex colour is an
    /// error; unrecognised tokens are ignored.
    pub fn palette(&self) -> Result<PaletteOverrides> {
        let normalized: BTreeMap<String, &str> = self
            .tokens
            .colors
            .iter()
            .map(|(k, v)| (k.trim().to_lowercase().replace('_', "-"), v.as_str()))
            .collect();

        let mut overrides = PaletteOverrides::default();
        for (slot, aliases) in SLOT_ALIASES {
            let Some((alias, value)) = aliases
                .iter()
                .find_map(|a| normalized.get(*a).map(|v| (*a, *v)))
            else {
                continue;
            };

            let colour = Colour::from_hex(value).map_err(|_| BrandError::Config {
                message: format!(
                    "Profile '{}' colour '{}' is not a hex colour: {}",
                    self.name, alias, value
                ),
                help: Some(format!("Use #RRGGBB for the {} colour", slot)),
            })?;
            *slot_mut(&mut overrides, slot) = Some(colour);
        }

        Ok(overrides)
    }

    /// Render the profile as a markdown prompt fragment.
    pub fn prompt_context(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "## Design profile: {}", self.name);

        if !self.tokens.colors.is_empty() {
            let _ = writeln!(out, "\n### Colours");
            for (name, value) in &self.tokens.colors {
                match Colour::from_hex(value) {
                    Ok(colour) => {
                        let text = if contrast_color(colour) == Colour::WHITE {
                            "light text"
                        } else {
                            "dark text"
                        };
                        let _ = writeln!(
                            out,
                            "- {}: {} (luminance {:.2}, use {})",
                            name,
                            colour,
                            relative_luminance(colour),
                            text
                        );
                    }
                    Err(_) => {
                        let _ = writeln!(out, "- {}: {}", name, value);
                    }
                }
            }
        }

        token_section(&mut out, "Typography", &self.tokens.typography);
        token_section(&mut out, "Spacing", &self.tokens.spacing);
        token_section(&mut out, "Radii", &self.tokens.radii);

        if !self.components.is_empty() {
            let _ = writeln!(out, "\n### Components\n{}", self.components.join(", "));
        }

        if let Some(css) = self.css.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
            let lines: Vec<&str> = css.lines().collect();
            let _ = writeln!(out, "\n### CSS\n```css");
            for line in lines.iter().take(CSS_EXCERPT_LINES) {
                let _ = writeln!(out, "{}", line);
            }
            if lines.len() > CSS_EXCERPT_LINES {
                let _ = writeln!(
                    out,
                    "/* {} more lines */",
                    lines.len() - CSS_EXCERPT_LINES
                );
            }
            let _ = writeln!(out, "```");
        }

        out
    }
}

fn slot_mut<'a>(overrides: &'a mut PaletteOverrides, slot: &str) -> &'a mut Option<Colour> {
    match slot {
        "primary" => &mut overrides.primary,
        "secondary" => &mut overrides.secondary,
        "accent" => &mut overrides.accent,
        "background" => &mut overrides.background,
        "amber" => &mut overrides.amber,
        "lavender" => &mut overrides.lavender,
        _ => &mut overrides.surface,
    }
}

fn token_section(out: &mut String, title: &str, tokens: &BTreeMap<String, Value>) {
    if tokens.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n### {}", title);
    for (name, value) in tokens {
        let rendered = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        let _ = writeln!(out, "- {}: {}", name, rendered);
    }
}
