//! Colour type and parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{BrandError, Result};

/// An opaque sRGB colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a new colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Near-black used for text on light backgrounds.
    pub const INK: Self = Self::rgb(0x1A, 0x1A, 0x1A);

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RRGGBB` (6 digits)
    ///
    /// The leading `#` is optional.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid_hex(s));
        }

        match hex.len() {
            3 => {
                let mut digits = [0u8; 3];
                for (slot, c) in digits.iter_mut().zip(hex.chars()) {
                    *slot = parse_hex_digit(c)?;
                }
                let [r, g, b] = digits;
                Ok(Self::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            6 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                Ok(Self::rgb(r, g, b))
            }
            _ => Err(invalid_hex(s)),
        }
    }

    /// Build a colour from floating point channels, clamping to [0, 255] and
    /// rounding to the nearest integer.
    pub fn from_channels(r: f64, g: f64, b: f64) -> Self {
        let channel = |v: f64| v.clamp(0.0, 255.0).round() as u8;
        Self::rgb(channel(r), channel(g), channel(b))
    }

    /// Channels as floats, in [0, 255].
    pub fn channels(self) -> [f64; 3] {
        [self.r as f64, self.g as f64, self.b as f64]
    }

    /// Uppercase `#RRGGBB` form.
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

fn invalid_hex(s: &str) -> BrandError {
    BrandError::parse(
        format!("Invalid hex colour: {:?}", s),
        Some("Use #RGB or #RRGGBB format"),
    )
}

impl FromStr for Colour {
    type Err = BrandError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for Colour {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Colour {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Colour::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| BrandError::parse(format!("Invalid hex digit: {}", c), None))
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16)
        .map_err(|_| BrandError::parse(format!("Invalid hex byte: {}", s), None))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_6digit() {
        let c = Colour::from_hex("#FF0000").unwrap();
        assert_eq!(c, Colour::rgb(255, 0, 0));

        let c = Colour::from_hex("#306e5e").unwrap();
        assert_eq!(c, Colour::rgb(0x30, 0x6E, 0x5E));
    }

    #[test]
    fn test_from_hex_3digit() {
        let c = Colour::from_hex("#ABC").unwrap();
        assert_eq!(c, Colour::rgb(0xAA, 0xBB, 0xCC));
    }

    #[test]
    fn test_from_hex_no_hash() {
        assert_eq!(Colour::from_hex("F2B245").unwrap(), Colour::rgb(0xF2, 0xB2, 0x45));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Colour::from_hex("#GGG").is_err());
        assert!(Colour::from_hex("#12345").is_err());
        assert!(Colour::from_hex("#FF000080").is_err());
        assert!(Colour::from_hex("").is_err());
        assert!(Colour::from_hex("#éé").is_err());
        assert!(Colour::from_hex("#+F+F+F").is_err());
        assert!(Colour::from_hex("+F+").is_err());
    }

    #[test]
    fn test_display_uppercase() {
        assert_eq!(Colour::rgb(0xca, 0xc5, 0xf9).to_string(), "#CAC5F9");
    }

    #[test]
    fn test_from_channels_clamps_and_rounds() {
        assert_eq!(
            Colour::from_channels(-10.0, 127.5, 300.0),
            Colour::rgb(0, 128, 255)
        );
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&Colour::rgb(1, 2, 3)).unwrap();
        assert_eq!(json, "\"#010203\"");

        let back: Colour = serde_json::from_str("\"#abc\"").unwrap();
        assert_eq!(back, Colour::rgb(0xAA, 0xBB, 0xCC));

        assert!(serde_json::from_str::<Colour>("\"nope\"").is_err());
    }
}
