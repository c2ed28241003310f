//! Tileable background patterns.
//!
//! Patterns are small SVG tiles intended for CSS `background-repeat`. Each
//! tile is drawn so its edges line up with the neighbouring copy.

use std::f64::consts::PI;
use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::geometry::{smooth_closed_path, wave_path, Point};
use crate::svg::{data_uri, f1, num, Element, SvgDocument};
use crate::types::{Colour, Palette};

use super::{AssetCategory, AssetType, GeneratedAsset};

/// Number of rings in the topographic pattern.
const TOPO_RINGS: u32 = 7;

/// Angular samples per topographic ring.
const TOPO_SAMPLES: usize = 24;

/// Available tiling patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PatternType {
    Dots,
    Waves,
    Grid,
    Topographic,
    CrossHatch,
    Concentric,
}

impl PatternType {
    pub const ALL: [PatternType; 6] = [
        PatternType::Dots,
        PatternType::Waves,
        PatternType::Grid,
        PatternType::Topographic,
        PatternType::CrossHatch,
        PatternType::Concentric,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PatternType::Dots => "dots",
            PatternType::Waves => "waves",
            PatternType::Grid => "grid",
            PatternType::Topographic => "topographic",
            PatternType::CrossHatch => "cross-hatch",
            PatternType::Concentric => "concentric",
        }
    }

    /// Tile size in pixels (width, height).
    pub fn tile_size(self) -> (u32, u32) {
        match self {
            PatternType::Dots => (64, 64),
            PatternType::Waves => (200, 60),
            PatternType::Grid => (40, 40),
            PatternType::Topographic => (300, 300),
            PatternType::CrossHatch => (16, 16),
            PatternType::Concentric => (200, 200),
        }
    }
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl AssetType for PatternType {
    const CATEGORY: AssetCategory = AssetCategory::Pattern;

    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn generate(self, palette: &Palette) -> GeneratedAsset<Self> {
        generate_pattern(self, palette)
    }

    fn description(self) -> &'static str {
        match self {
            PatternType::Dots => "Offset dot grid in two sizes",
            PatternType::Waves => "Stacked horizontal sine strokes",
            PatternType::Grid => "Thin line grid",
            PatternType::Topographic => "Irregular contour rings",
            PatternType::CrossHatch => "Diagonal hatching",
            PatternType::Concentric => "Evenly spaced concentric circles",
        }
    }
}

/// Generate a single tileable pattern.
pub fn generate_pattern(kind: PatternType, palette: &Palette) -> GeneratedAsset<PatternType> {
    let (width, height) = kind.tile_size();
    let mut doc = SvgDocument::new(width, height);

    match kind {
        PatternType::Dots => dots(&mut doc, palette),
        PatternType::Waves => waves(&mut doc, palette),
        PatternType::Grid => grid(&mut doc, palette),
        PatternType::Topographic => topographic(&mut doc, palette),
        PatternType::CrossHatch => cross_hatch(&mut doc, palette),
        PatternType::Concentric => concentric(&mut doc, palette),
    }

    let svg = doc.finish();
    let css_usage = format!(
        "background-image: url(\"{}\");\nbackground-repeat: repeat;\nbackground-size: {}px {}px;",
        data_uri(&svg),
        width,
        height
    );

    GeneratedAsset {
        kind,
        svg,
        css_usage,
    }
}

/// Generate every pattern in canonical order.
pub fn generate_all_patterns(palette: &Palette) -> Vec<GeneratedAsset<PatternType>> {
    PatternType::ALL
        .iter()
        .map(|&kind| generate_pattern(kind, palette))
        .collect()
}

fn stroke(d: String, colour: Colour, opacity: f64, width: f64) -> Element {
    Element::new("path")
        .attr("d", d)
        .attr("fill", "none")
        .attr("stroke", colour)
        .attr("stroke-width", num(width))
        .attr("opacity", num(opacity))
}

fn dots(doc: &mut SvgDocument, p: &Palette) {
    let dots = [
        (16.0, 16.0, 3.0, p.primary, 0.15),
        (48.0, 48.0, 3.0, p.primary, 0.15),
        (48.0, 16.0, 1.5, p.lavender, 0.3),
        (16.0, 48.0, 1.5, p.lavender, 0.3),
    ];
    for (cx, cy, r, colour, opacity) in dots {
        doc.push(
            Element::new("circle")
                .attr("cx", f1(cx))
                .attr("cy", f1(cy))
                .attr("r", f1(r))
                .attr("fill", colour)
                .attr("opacity", num(opacity)),
        );
    }
}

fn waves(doc: &mut SvgDocument, p: &Palette) {
    let lines = [
        (15.0, 6.0, p.primary, 0.12),
        (30.0, 8.0, p.amber, 0.1),
        (45.0, 5.0, p.lavender, 0.15),
    ];
    for (y, amplitude, colour, opacity) in lines {
        doc.push(
            stroke(wave_path(200.0, y, amplitude, 2), colour, opacity, 1.5)
                .attr("stroke-linecap", "round"),
        );
    }
}

fn grid(doc: &mut SvgDocument, p: &Palette) {
    doc.push(stroke(
        "M40.0,0.0 L0.0,0.0 L0.0,40.0".to_string(),
        p.primary,
        0.08,
        1.0,
    ));
}

/// Low-frequency radial noise; `seed` shifts the phase per ring.
fn contour_noise(angle: f64, seed: f64) -> f64 {
    (angle * 3.0 + seed).sin() * 0.08 + (angle * 5.0 + seed * 0.7).cos() * 0.05
}

fn topographic(doc: &mut SvgDocument, p: &Palette) {
    let center = Point::new(150.0, 150.0);
    let max_radius = 140.0;
    let colours = [p.primary, p.amber, p.lavender];

    for ring in 1..=TOPO_RINGS {
        let base = ring as f64 / TOPO_RINGS as f64 * max_radius;
        let seed = ring as f64 * 7.3;

        let points: Vec<Point> = (0..TOPO_SAMPLES)
            .map(|i| {
                let angle = i as f64 / TOPO_SAMPLES as f64 * 2.0 * PI;
                let radius = base * (1.0 + contour_noise(angle, seed));
                Point::polar(center, radius, angle)
            })
            .collect();

        let opacity = 0.03 + ring as f64 / TOPO_RINGS as f64 * 0.09;
        let colour = colours[ring as usize % colours.len()];
        doc.push(stroke(smooth_closed_path(&points, 0.2), colour, opacity, 1.0));
    }
}

fn cross_hatch(doc: &mut SvgDocument, p: &Palette) {
    let strokes = [
        (-4.0, 4.0, 4.0, -4.0),
        (0.0, 16.0, 16.0, 0.0),
        (12.0, 20.0, 20.0, 12.0),
    ];
    for (x1, y1, x2, y2) in strokes {
        doc.push(
            Element::new("line")
                .attr("x1", f1(x1))
                .attr("y1", f1(y1))
                .attr("x2", f1(x2))
                .attr("y2", f1(y2))
                .attr("stroke", p.primary)
                .attr("stroke-width", 1)
                .attr("stroke-linecap", "square")
                .attr("opacity", num(0.1)),
        );
    }
}

fn concentric(doc: &mut SvgDocument, p: &Palette) {
    let colours = [p.primary, p.lavender, p.amber];
    for i in 0..5 {
        doc.push(
            Element::new("circle")
                .attr("cx", f1(100.0))
                .attr("cy", f1(100.0))
                .attr("r", f1((i + 1) as f64 * 18.0))
                .attr("fill", "none")
                .attr("stroke", colours[i % colours.len()])
                .attr("stroke-width", num(1.5))
                .attr("opacity", num(0.04 + i as f64 * 0.02)),
        );
    }
}
