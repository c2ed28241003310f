//! Full-width section dividers.
//!
//! Dividers are drawn on a fixed 1440x120 canvas with
//! `preserveAspectRatio="none"`, so they stretch to any container width.

use std::fmt;
use std::fmt::Write as _;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::geometry::wave_path;
use crate::svg::{f1, num, Element, SvgDocument};
use crate::types::{Colour, Palette};

use super::{AssetCategory, AssetType, GeneratedAsset};

pub const DIVIDER_WIDTH: u32 = 1440;
pub const DIVIDER_HEIGHT: u32 = 120;

/// Number of teeth in the zigzag divider.
const ZIGZAG_TEETH: u32 = 12;

/// Available section dividers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DividerType {
    Wave,
    Curve,
    Angle,
    Zigzag,
    Layered,
}

impl DividerType {
    pub const ALL: [DividerType; 5] = [
        DividerType::Wave,
        DividerType::Curve,
        DividerType::Angle,
        DividerType::Zigzag,
        DividerType::Layered,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DividerType::Wave => "wave",
            DividerType::Curve => "curve",
            DividerType::Angle => "angle",
            DividerType::Zigzag => "zigzag",
            DividerType::Layered => "layered",
        }
    }
}

impl fmt::Display for DividerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl AssetType for DividerType {
    const CATEGORY: AssetCategory = AssetCategory::Divider;

    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn generate(self, palette: &Palette) -> GeneratedAsset<Self> {
        generate_divider(self, palette)
    }

    fn description(self) -> &'static str {
        match self {
            DividerType::Wave => "Single soft wave",
            DividerType::Curve => "Gentle S-curve",
            DividerType::Angle => "Diagonal slant",
            DividerType::Zigzag => "Alternating zigzag teeth",
            DividerType::Layered => "Three overlapping waves",
        }
    }
}

/// Generate a single section divider.
pub fn generate_divider(kind: DividerType, palette: &Palette) -> GeneratedAsset<DividerType> {
    let mut doc = SvgDocument::new(DIVIDER_WIDTH, DIVIDER_HEIGHT).preserve_aspect_ratio("none");

    match kind {
        DividerType::Wave => {
            doc.push(band(wave_path(1440.0, 60.0, 30.0, 4), palette.primary, 0.08));
        }
        DividerType::Curve => {
            doc.push(fill_path(
                "M0.0,80.0 C360.0,0.0 1080.0,120.0 1440.0,40.0 L1440.0,120.0 L0.0,120.0 Z".to_string(),
                palette.primary,
                0.06,
            ));
        }
        DividerType::Angle => {
            doc.push(
                Element::new("polygon")
                    .attr("points", "0,120 1440,0 1440,120")
                    .attr("fill", palette.primary)
                    .attr("opacity", num(0.06)),
            );
        }
        DividerType::Zigzag => {
            doc.push(fill_path(zigzag_path(), palette.primary, 0.05));
        }
        DividerType::Layered => {
            let layers = [
                (50.0, 25.0, 3, palette.primary, 0.08),
                (70.0, 20.0, 4, palette.amber, 0.06),
                (90.0, 15.0, 5, palette.lavender, 0.05),
            ];
            for (y, amplitude, waves, colour, opacity) in layers {
                doc.push(band(wave_path(1440.0, y, amplitude, waves), colour, opacity));
            }
        }
    }

    let file = kind.bundle_path();
    let css_usage = format!(
        "/* Place between sections as a full-width element */\n\
         <img src=\"{file}\" alt=\"\" aria-hidden=\"true\" style=\"display:block;width:100%;height:120px\" />\n\
         /* or as a background */\n\
         background: url('{file}') no-repeat bottom / 100% 100%;"
    );

    GeneratedAsset {
        kind,
        svg: doc.finish(),
        css_usage,
    }
}

/// Generate every divider in canonical order.
pub fn generate_all_dividers(palette: &Palette) -> Vec<GeneratedAsset<DividerType>> {
    DividerType::ALL
        .iter()
        .map(|&kind| generate_divider(kind, palette))
        .collect()
}

fn fill_path(d: String, colour: Colour, opacity: f64) -> Element {
    Element::new("path")
        .attr("d", d)
        .attr("fill", colour)
        .attr("opacity", num(opacity))
}

/// Close an open wave down to the bottom edge of the canvas.
fn band(wave: String, colour: Colour, opacity: f64) -> Element {
    fill_path(
        format!("{} L1440.0,120.0 L0.0,120.0 Z", wave),
        colour,
        opacity,
    )
}

fn zigzag_path() -> String {
    let tooth = DIVIDER_WIDTH as f64 / ZIGZAG_TEETH as f64;
    let bottom = DIVIDER_HEIGHT as f64;

    let mut d = format!("M0.0,{}", f1(bottom));
    for i in 0..ZIGZAG_TEETH {
        let x = i as f64 * tooth;
        let peak = if i % 2 == 0 { 60.0 } else { 80.0 };
        let _ = write!(
            d,
            " L{},{} L{},{}",
            f1(x + tooth / 2.0),
            f1(peak),
            f1(x + tooth),
            f1(bottom)
        );
    }
    d.push_str(" Z");
    d
}
