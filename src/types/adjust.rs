//! Colour math: conversions, luminance, and channel blending.
//!
//! All functions are pure and total over parsed [`Colour`] values. The
//! string-taking helpers (`hex_to_rgb`, `hex_to_hsl`) are the only fallible
//! entry points, since they parse.

use serde::Serialize;

use crate::error::Result;

use super::Colour;

/// Luminance above which dark text is chosen over white.
pub const CONTRAST_THRESHOLD: f64 = 0.4;

/// A colour in HSL space: hue in degrees [0, 360), saturation and lightness
/// as percentages [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HslColour {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

/// Parse a hex string into its RGB channels.
pub fn hex_to_rgb(hex: &str) -> Result<Colour> {
    Colour::from_hex(hex)
}

/// Format RGB channels as `#RRGGBB`, clamping and rounding each channel.
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    Colour::from_channels(r, g, b).to_string()
}

/// Parse a hex string and convert it to HSL.
pub fn hex_to_hsl(hex: &str) -> Result<HslColour> {
    Ok(to_hsl(Colour::from_hex(hex)?))
}

/// Convert a colour to HSL.
pub fn to_hsl(colour: Colour) -> HslColour {
    use palette::{Hsl, IntoColor, Srgb};

    let rgb: Srgb<f32> = Srgb::new(
        colour.r as f32 / 255.0,
        colour.g as f32 / 255.0,
        colour.b as f32 / 255.0,
    );
    let hsl: Hsl = rgb.into_color();

    let hue = hsl.hue.into_positive_degrees();
    HslColour {
        hue: if hue >= 360.0 { 0.0 } else { hue },
        saturation: hsl.saturation * 100.0,
        lightness: hsl.lightness * 100.0,
    }
}

/// WCAG relative luminance in [0, 1].
pub fn relative_luminance(colour: Colour) -> f64 {
    let [r, g, b] = colour.channels().map(|c| {
        let c = c / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    });
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Pick a text colour for the given background.
///
/// Returns [`Colour::INK`] when the background luminance exceeds
/// [`CONTRAST_THRESHOLD`], white otherwise. This is a heuristic, not a
/// WCAG contrast-ratio guarantee.
pub fn contrast_color(background: Colour) -> Colour {
    if relative_luminance(background) > CONTRAST_THRESHOLD {
        Colour::INK
    } else {
        Colour::WHITE
    }
}

/// Move each channel toward white by `amount` in [0, 1].
pub fn lighten(colour: Colour, amount: f64) -> Colour {
    let amount = amount.clamp(0.0, 1.0);
    let [r, g, b] = colour.channels().map(|c| c + (255.0 - c) * amount);
    Colour::from_channels(r, g, b)
}

/// Move each channel toward black by `amount` in [0, 1].
pub fn darken(colour: Colour, amount: f64) -> Colour {
    let amount = amount.clamp(0.0, 1.0);
    let [r, g, b] = colour.channels().map(|c| c * (1.0 - amount));
    Colour::from_channels(r, g, b)
}

/// Blend two colours (0.0 = `a`, 1.0 = `b`).
pub fn mix_colours(a: Colour, b: Colour, ratio: f64) -> Colour {
    let ratio = ratio.clamp(0.0, 1.0);
    let [ar, ag, ab] = a.channels();
    let [br, bg, bb] = b.channels();
    Colour::from_channels(
        ar + (br - ar) * ratio,
        ag + (bg - ag) * ratio,
        ab + (bb - ab) * ratio,
    )
}

/// CSS `rgba(...)` string for the colour at the given opacity.
pub fn adjust_opacity(colour: Colour, opacity: f64) -> String {
    format!(
        "rgba({}, {}, {}, {})",
        colour.r,
        colour.g,
        colour.b,
        opacity.clamp(0.0, 1.0)
    )
}
