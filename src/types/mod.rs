//! Core domain types for brandkit.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Colour` - opaque sRGB colour values
//! - `PaletteColors` / `Palette` - brand palettes before and after defaulting
//! - colour math (luminance, contrast, blending)

mod adjust;
mod colour;
mod palette;

pub use adjust::{
    adjust_opacity, contrast_color, darken, hex_to_hsl, hex_to_rgb, lighten, mix_colours,
    relative_luminance, rgb_to_hex, to_hsl, HslColour, CONTRAST_THRESHOLD,
};
pub use colour::Colour;
pub use palette::{
    Palette, PaletteColors, PaletteOverrides, DEFAULT_AMBER, DEFAULT_LAVENDER, DEFAULT_SURFACE,
};
