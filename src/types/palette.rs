//! Brand palettes: the four required colours, three optional accents, and
//! the resolved form every generator consumes.

use serde::{Deserialize, Serialize};

use crate::error::{BrandError, Result};

use super::Colour;

/// Default for the `amber` slot.
pub const DEFAULT_AMBER: Colour = Colour::rgb(0xF2, 0xB2, 0x45);

/// Default for the `lavender` slot.
pub const DEFAULT_LAVENDER: Colour = Colour::rgb(0xCA, 0xC5, 0xF9);

/// Default for the `surface` slot.
pub const DEFAULT_SURFACE: Colour = Colour::rgb(0xFD, 0xFB, 0xF7);

/// Palette as supplied by a caller: required slots plus optional accents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteColors {
    pub primary: Colour,
    pub secondary: Colour,
    pub accent: Colour,
    pub background: Colour,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amber: Option<Colour>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lavender: Option<Colour>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface: Option<Colour>,
}

impl PaletteColors {
    /// Create a palette from the four required colours.
    pub fn new(primary: Colour, secondary: Colour, accent: Colour, background: Colour) -> Self {
        Self {
            primary,
            secondary,
            accent,
            background,
            amber: None,
            lavender: None,
            surface: None,
        }
    }

    /// Parse the four required colours from hex strings.
    pub fn from_hex(primary: &str, secondary: &str, accent: &str, background: &str) -> Result<Self> {
        Ok(Self::new(
            Colour::from_hex(primary)?,
            Colour::from_hex(secondary)?,
            Colour::from_hex(accent)?,
            Colour::from_hex(background)?,
        ))
    }

    /// Fill the optional slots with their defaults.
    pub fn resolve(&self) -> Palette {
        Palette {
            primary: self.primary,
            secondary: self.secondary,
            accent: self.accent,
            background: self.background,
            amber: self.amber.unwrap_or(DEFAULT_AMBER),
            lavender: self.lavender.unwrap_or(DEFAULT_LAVENDER),
            surface: self.surface.unwrap_or(DEFAULT_SURFACE),
        }
    }
}

/// A fully resolved palette. Every slot holds a colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub primary: Colour,
    pub secondary: Colour,
    pub accent: Colour,
    pub background: Colour,
    pub amber: Colour,
    pub lavender: Colour,
    pub surface: Colour,
}

impl Palette {
    /// Named slots in declaration order.
    pub fn slots(&self) -> [(&'static str, Colour); 7] {
        [
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("accent", self.accent),
            ("background", self.background),
            ("amber", self.amber),
            ("lavender", self.lavender),
            ("surface", self.surface),
        ]
    }
}

impl From<PaletteColors> for Palette {
    fn from(colors: PaletteColors) -> Self {
        colors.resolve()
    }
}

/// A partially specified palette, used to layer sources (design profile,
/// project config, command-line flags) before the required slots are known.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteOverrides {
    pub primary: Option<Colour>,
    pub secondary: Option<Colour>,
    pub accent: Option<Colour>,
    pub background: Option<Colour>,
    pub amber: Option<Colour>,
    pub lavender: Option<Colour>,
    pub surface: Option<Colour>,
}

impl PaletteOverrides {
    /// Layer `other` on top of `self`; slots set in `other` win.
    pub fn merge(self, other: PaletteOverrides) -> Self {
        Self {
            primary: other.primary.or(self.primary),
            secondary: other.secondary.or(self.secondary),
            accent: other.accent.or(self.accent),
            background: other.background.or(self.background),
            amber: other.amber.or(self.amber),
            lavender: other.lavender.or(self.lavender),
            surface: other.surface.or(self.surface),
        }
    }

    /// Check whether any slot is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Convert into a caller palette, failing if a required slot is missing.
    pub fn into_colors(self) -> Result<PaletteColors> {
        let missing: Vec<&str> = [
            ("primary", self.primary.is_none()),
            ("secondary", self.secondary.is_none()),
            ("accent", self.accent.is_none()),
            ("background", self.background.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, absent)| absent.then_some(name))
        .collect();

        match (self.primary, self.secondary, self.accent, self.background) {
            (Some(primary), Some(secondary), Some(accent), Some(background)) => Ok(PaletteColors {
                primary,
                secondary,
                accent,
                background,
                amber: self.amber,
                lavender: self.lavender,
                surface: self.surface,
            }),
            _ => Err(BrandError::Config {
                message: format!("Palette is missing required colours: {}", missing.join(", ")),
                help: Some(
                    "Set them in brandkit.yaml, a design profile, or with --primary/--secondary/--accent/--background"
                        .to_string(),
                ),
            }),
        }
    }
}

impl From<PaletteColors> for PaletteOverrides {
    fn from(colors: PaletteColors) -> Self {
        Self {
            primary: Some(colors.primary),
            secondary: Some(colors.secondary),
            accent: Some(colors.accent),
            background: Some(colors.background),
            amber: colors.amber,
            lavender: colors.lavender,
            surface: colors.surface,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brand() -> PaletteColors {
        PaletteColors::from_hex("#306E5E", "#4A8E7A", "#FF6719", "#FFFFFF").unwrap()
    }

    #[test]
    fn test_resolve_fills_defaults() {
        let palette = brand().resolve();
        assert_eq!(palette.amber.to_string(), "#F2B245");
        assert_eq!(palette.lavender.to_string(), "#CAC5F9");
        assert_eq!(palette.surface.to_string(), "#FDFBF7");
        assert_eq!(palette.primary.to_string(), "#306E5E");
    }

    #[test]
    fn test_resolve_keeps_explicit_slots() {
        let mut colors = brand();
        colors.amber = Some(Colour::rgb(1, 2, 3));
        assert_eq!(colors.resolve().amber, Colour::rgb(1, 2, 3));
    }

    #[test]
    fn test_deserialize_optional_slots() {
        let json = r##"{"primary":"#306E5E","secondary":"#4A8E7A","accent":"#FF6719","background":"#FFF"}"##;
        let colors: PaletteColors = serde_json::from_str(json).unwrap();
        assert_eq!(colors.background, Colour::WHITE);
        assert!(colors.amber.is_none());
    }

    #[test]
    fn test_deserialize_rejects_bad_hex() {
        let json = r##"{"primary":"#30XX5E","secondary":"#4A8E7A","accent":"#FF6719","background":"#FFF"}"##;
        assert!(serde_json::from_str::<PaletteColors>(json).is_err());
    }

    #[test]
    fn test_overrides_merge_later_wins() {
        let base = PaletteOverrides::from(brand());
        let flags = PaletteOverrides {
            accent: Some(Colour::BLACK),
            ..Default::default()
        };
        let merged = base.merge(flags);
        assert_eq!(merged.accent, Some(Colour::BLACK));
        assert_eq!(merged.primary, Some(Colour::rgb(0x30, 0x6E, 0x5E)));
    }

    #[test]
    fn test_overrides_missing_required() {
        let partial = PaletteOverrides {
            primary: Some(Colour::BLACK),
            ..Default::default()
        };
        let err = partial.into_colors().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("secondary, accent, background"), "{}", message);
    }
}
