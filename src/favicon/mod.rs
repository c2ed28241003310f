//! Favicon generation.
//!
//! A favicon is a filled shape (rounded rect, circle, hexagon, or squircle)
//! carrying the first letter of the brand name. [`build_favicon_svg`] draws
//! it at any pixel size; [`FaviconPackage`] bundles the master SVG with PNG
//! renditions, a web manifest and the HTML head tags.

mod package;
mod raster;

use std::f64::consts::PI;
use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::svg::{f1, num, Element, SvgDocument};
use crate::types::{contrast_color, darken, Colour, Palette};

pub use package::{png_file_name, FaviconPackage, HEAD_TAGS, MASTER_SIZE, PNG_SIZES};
pub use raster::{default_rasterizer, Rasterizer};

#[cfg(feature = "raster")]
pub use raster::ResvgRasterizer;

const FONT_STACK: &str = "system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif";

/// Background shape of the favicon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum FaviconShape {
    #[default]
    RoundedRect,
    Circle,
    Hexagon,
    Squircle,
}

impl FaviconShape {
    pub const ALL: [FaviconShape; 4] = [
        FaviconShape::RoundedRect,
        FaviconShape::Circle,
        FaviconShape::Hexagon,
        FaviconShape::Squircle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FaviconShape::RoundedRect => "rounded-rect",
            FaviconShape::Circle => "circle",
            FaviconShape::Hexagon => "hexagon",
            FaviconShape::Squircle => "squircle",
        }
    }
}

impl fmt::Display for FaviconShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inputs for favicon generation.
#[derive(Debug, Clone, PartialEq)]
pub struct FaviconOptions {
    pub brand_name: String,
    pub primary_color: Colour,
    /// Manifest background colour; white when absent.
    pub background_color: Option<Colour>,
    /// Enables the decorative accent stroke.
    pub accent_color: Option<Colour>,
    pub shape: FaviconShape,
}

impl FaviconOptions {
    pub fn new(brand_name: impl Into<String>, primary_color: Colour) -> Self {
        Self {
            brand_name: brand_name.into(),
            primary_color,
            background_color: None,
            accent_color: None,
            shape: FaviconShape::default(),
        }
    }

    /// Options drawing primary, accent and background from a palette.
    pub fn from_palette(brand_name: impl Into<String>, palette: &Palette, shape: FaviconShape) -> Self {
        Self {
            brand_name: brand_name.into(),
            primary_color: palette.primary,
            background_color: Some(palette.background),
            accent_color: Some(palette.accent),
            shape,
        }
    }

    pub fn with_shape(mut self, shape: FaviconShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_accent(mut self, accent: Colour) -> Self {
        self.accent_color = Some(accent);
        self
    }

    pub fn with_background(mut self, background: Colour) -> Self {
        self.background_color = Some(background);
        self
    }

    /// The uppercased first character of the brand name, if any.
    pub fn letter(&self) -> Option<String> {
        self.brand_name
            .trim()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
    }
}

/// SVG fragments for a favicon shape.
#[derive(Debug, Clone)]
pub struct ShapeParts {
    /// The filled background shape.
    pub bg: Element,
    /// Accent decoration, present only when an accent colour is given.
    pub deco: Option<Element>,
}

/// Build the background shape (and optional decoration) at `size` pixels.
pub fn shape_parts(shape: FaviconShape, size: f64, fill: Colour, accent: Option<Colour>) -> ShapeParts {
    let half = size / 2.0;

    match shape {
        FaviconShape::RoundedRect => ShapeParts {
            bg: square(0.0, size, size * 0.2).attr("fill", fill),
            deco: accent.map(|a| {
                Element::new("circle")
                    .attr("cx", f1(size * 0.78))
                    .attr("cy", f1(size * 0.22))
                    .attr("r", f1(size * 0.1))
                    .attr("fill", a)
                    .attr("opacity", num(0.25))
            }),
        },
        FaviconShape::Circle => ShapeParts {
            bg: Element::new("circle")
                .attr("cx", f1(half))
                .attr("cy", f1(half))
                .attr("r", f1(half))
                .attr("fill", fill),
            deco: accent.map(|a| {
                Element::new("circle")
                    .attr("cx", f1(half))
                    .attr("cy", f1(half))
                    .attr("r", f1(size * 0.42))
                    .attr("fill", "none")
                    .attr("stroke", a)
                    .attr("stroke-width", f1(size * 0.04))
                    .attr("opacity", num(0.2))
            }),
        },
        FaviconShape::Hexagon => {
            let radius = half * 0.96;
            ShapeParts {
                bg: Element::new("polygon")
                    .attr("points", hexagon_points(half, radius))
                    .attr("fill", fill),
                deco: accent.map(|a| {
                    Element::new("polygon")
                        .attr("points", hexagon_points(half, radius * 0.8))
                        .attr("fill", "none")
                        .attr("stroke", a)
                        .attr("stroke-width", f1(size * 0.03))
                        .attr("opacity", num(0.22))
                }),
            }
        }
        FaviconShape::Squircle => ShapeParts {
            bg: square(0.0, size, size * 0.32).attr("fill", fill),
            deco: accent.map(|a| {
                square(size * 0.08, size * 0.84, size * 0.26)
                    .attr("fill", "none")
                    .attr("stroke", a)
                    .attr("stroke-width", f1(size * 0.025))
                    .attr("opacity", num(0.25))
            }),
        },
    }
}

fn square(offset: f64, side: f64, radius: f64) -> Element {
    Element::new("rect")
        .attr("x", f1(offset))
        .attr("y", f1(offset))
        .attr("width", f1(side))
        .attr("height", f1(side))
        .attr("rx", f1(radius))
}

/// Pointy-top regular hexagon centred in a square of side `2 * center`.
fn hexagon_points(center: f64, radius: f64) -> String {
    (0..6)
        .map(|i| {
            let angle = (i as f64 * 60.0 - 90.0) * PI / 180.0;
            format!(
                "{},{}",
                f1(center + radius * angle.cos()),
                f1(center + radius * angle.sin())
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn letter_text(letter: &str, x: f64, y: f64, font_size: f64) -> Element {
    Element::new("text")
        .attr("x", f1(x))
        .attr("y", f1(y))
        .attr("text-anchor", "middle")
        .attr("dominant-baseline", "central")
        .attr("font-family", FONT_STACK)
        .attr("font-size", f1(font_size))
        .attr("font-weight", 800)
        .text(letter)
}

/// Draw the favicon as a standalone SVG at `size` pixels.
pub fn build_favicon_svg(opts: &FaviconOptions, size: u32) -> String {
    let s = size as f64;
    let half = s / 2.0;
    let parts = shape_parts(opts.shape, s, opts.primary_color, opts.accent_color);

    let mut doc = SvgDocument::new(size, size);
    doc.push(parts.bg);
    if let Some(deco) = parts.deco {
        doc.push(deco);
    }

    if let Some(letter) = opts.letter() {
        let font_size = s * 0.55;
        doc.push(
            letter_text(&letter, half + 2.0, half + 2.0, font_size)
                .attr("fill", darken(opts.primary_color, 0.4))
                .attr("opacity", num(0.12)),
        );
        doc.push(
            letter_text(&letter, half, half, font_size)
                .attr("fill", contrast_color(opts.primary_color))
                .attr("letter-spacing", "-0.02em"),
        );
    }

    doc.finish()
}
