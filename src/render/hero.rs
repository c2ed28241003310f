//! Large, non-repeating hero backgrounds.
//!
//! Every hero is drawn on a 1440x800 canvas over a surface-coloured base
//! rect. The geometric variant draws from a [`SeededRandom`] seeded with the
//! palette's primary and accent colours, so the same palette always yields
//! the same scatter.

use std::f64::consts::PI;
use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::geometry::{smooth_closed_path, Point, SeededRandom};
use crate::svg::{f1, num, Element, SvgDocument};
use crate::types::{lighten, Colour, Palette};

use super::{AssetCategory, AssetType, GeneratedAsset};

pub const HERO_WIDTH: u32 = 1440;
pub const HERO_HEIGHT: u32 = 800;

const GEOMETRIC_SHAPES: usize = 10;
const BLOB_SAMPLES: usize = 8;
const BLOB_TENSION: f64 = 0.35;

/// Available hero backgrounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum HeroType {
    GradientMesh,
    Geometric,
    Blob,
    WaveLayers,
}

impl HeroType {
    pub const ALL: [HeroType; 4] = [
        HeroType::GradientMesh,
        HeroType::Geometric,
        HeroType::Blob,
        HeroType::WaveLayers,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HeroType::GradientMesh => "gradient-mesh",
            HeroType::Geometric => "geometric",
            HeroType::Blob => "blob",
            HeroType::WaveLayers => "wave-layers",
        }
    }
}

impl fmt::Display for HeroType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl AssetType for HeroType {
    const CATEGORY: AssetCategory = AssetCategory::Hero;

    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn generate(self, palette: &Palette) -> GeneratedAsset<Self> {
        generate_hero(self, palette)
    }

    fn description(self) -> &'static str {
        match self {
            HeroType::GradientMesh => "Soft radial gradient mesh",
            HeroType::Geometric => "Scattered translucent shapes",
            HeroType::Blob => "Organic blobs",
            HeroType::WaveLayers => "Stacked wave bands",
        }
    }
}

/// Generate a single hero background.
pub fn generate_hero(kind: HeroType, palette: &Palette) -> GeneratedAsset<HeroType> {
    let mut doc = SvgDocument::new(HERO_WIDTH, HERO_HEIGHT);
    doc.push(
        Element::new("rect")
            .attr("width", HERO_WIDTH)
            .attr("height", HERO_HEIGHT)
            .attr("fill", palette.surface),
    );

    match kind {
        HeroType::GradientMesh => gradient_mesh(&mut doc, palette),
        HeroType::Geometric => geometric(&mut doc, palette),
        HeroType::Blob => blobs(&mut doc, palette),
        HeroType::WaveLayers => wave_layers(&mut doc, palette),
    }

    let css_usage = format!(
        "background-image: url('{}');\nbackground-size: cover;\nbackground-position: center;",
        kind.bundle_path()
    );

    GeneratedAsset {
        kind,
        svg: doc.finish(),
        css_usage,
    }
}

/// Generate every hero background in canonical order.
pub fn generate_all_heroes(palette: &Palette) -> Vec<GeneratedAsset<HeroType>> {
    HeroType::ALL
        .iter()
        .map(|&kind| generate_hero(kind, palette))
        .collect()
}

fn gradient_mesh(doc: &mut SvgDocument, p: &Palette) {
    // (cx, cy, r) as fractions of the canvas, colour, peak opacity
    let spots = [
        (0.15, 0.2, 0.6, p.primary, 0.18),
        (0.85, 0.15, 0.5, p.accent, 0.14),
        (0.5, 0.85, 0.7, p.lavender, 0.2),
        (0.9, 0.8, 0.45, p.amber, 0.16),
        (0.3, 0.6, 0.4, p.secondary, 0.12),
    ];

    for (i, (cx, cy, r, colour, opacity)) in spots.into_iter().enumerate() {
        let id = format!("mesh-{}", i);
        doc.def(
            Element::new("radialGradient")
                .attr("id", &id)
                .attr("cx", percent(cx))
                .attr("cy", percent(cy))
                .attr("r", percent(r))
                .child(
                    Element::new("stop")
                        .attr("offset", "0%")
                        .attr("stop-color", colour)
                        .attr("stop-opacity", num(opacity)),
                )
                .child(
                    Element::new("stop")
                        .attr("offset", "100%")
                        .attr("stop-color", colour)
                        .attr("stop-opacity", "0"),
                ),
        );
        doc.push(
            Element::new("rect")
                .attr("width", HERO_WIDTH)
                .attr("height", HERO_HEIGHT)
                .attr("fill", format!("url(#{})", id)),
        );
    }
}

fn percent(fraction: f64) -> String {
    format!("{}%", num(fraction * 100.0))
}

fn geometric(doc: &mut SvgDocument, p: &Palette) {
    let mut rng = SeededRandom::new(&format!("{}{}", p.primary, p.accent));
    let colours = [p.primary, p.accent, p.amber, p.lavender, p.secondary];

    for i in 0..GEOMETRIC_SHAPES {
        let shape = (rng.next_f64() * 3.0).floor() as u32;
        let x = rng.next_f64() * HERO_WIDTH as f64;
        let y = rng.next_f64() * HERO_HEIGHT as f64;
        let size = rng.range(40.0, 160.0);
        let opacity = rng.range(0.04, 0.10);
        let colour = colours[i % colours.len()];

        let element = match shape {
            0 => Element::new("circle")
                .attr("cx", f1(x))
                .attr("cy", f1(y))
                .attr("r", f1(size / 2.0)),
            1 => {
                let rotation = rng.range(-20.0, 20.0);
                Element::new("rect")
                    .attr("x", f1(x - size / 2.0))
                    .attr("y", f1(y - size / 2.0))
                    .attr("width", f1(size))
                    .attr("height", f1(size))
                    .attr("rx", f1(size * 0.15))
                    .attr(
                        "transform",
                        format!("rotate({} {} {})", f1(rotation), f1(x), f1(y)),
                    )
            }
            _ => {
                let sides = 3 + (rng.next_f64() * 3.0).floor() as usize;
                let offset = rng.next_f64() * 2.0 * PI;
                Element::new("polygon").attr(
                    "points",
                    regular_polygon(Point::new(x, y), size / 2.0, sides, offset),
                )
            }
        };

        doc.push(element.attr("fill", colour).attr("opacity", num(opacity)));
    }
}

fn regular_polygon(center: Point, radius: f64, sides: usize, offset: f64) -> String {
    (0..sides)
        .map(|i| {
            let angle = offset + i as f64 / sides as f64 * 2.0 * PI;
            let pt = Point::polar(center, radius, angle);
            format!("{},{}", f1(pt.x), f1(pt.y))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Two-frequency radial noise; `seed` makes each blob distinct.
fn blob_noise(angle: f64, seed: f64) -> f64 {
    (angle * 2.0 + seed).sin() * 0.18 + (angle * 3.0 + seed * 1.3).cos() * 0.12
}

fn blob_path(center: Point, radius: f64, seed: f64) -> String {
    let points: Vec<Point> = (0..BLOB_SAMPLES)
        .map(|i| {
            let angle = i as f64 / BLOB_SAMPLES as f64 * 2.0 * PI;
            Point::polar(center, radius * (1.0 + blob_noise(angle, seed)), angle)
        })
        .collect();
    smooth_closed_path(&points, BLOB_TENSION)
}

fn blobs(doc: &mut SvgDocument, p: &Palette) {
    let blobs = [
        (250.0, 200.0, 220.0, p.primary, 0.08, 1.0),
        (1200.0, 150.0, 180.0, p.accent, 0.06, 2.3),
        (700.0, 600.0, 260.0, p.lavender, 0.1, 3.7),
        (1300.0, 650.0, 200.0, p.amber, 0.08, 5.1),
        (150.0, 700.0, 160.0, p.secondary, 0.06, 6.4),
    ];
    for (cx, cy, r, colour, opacity, seed) in blobs {
        doc.push(
            Element::new("path")
                .attr("d", blob_path(Point::new(cx, cy), r, seed))
                .attr("fill", colour)
                .attr("opacity", num(opacity)),
        );
    }
}

fn wave_layers(doc: &mut SvgDocument, p: &Palette) {
    let colours: [Colour; 5] = [
        p.primary,
        p.amber,
        p.lavender,
        p.accent,
        lighten(p.primary, 0.4),
    ];
    for (i, colour) in colours.into_iter().enumerate() {
        let y = 420.0 + i as f64 * 80.0;
        let amplitude = 120.0 - i as f64 * 15.0;
        let opacity = 0.1 - i as f64 * 0.015;
        doc.push(
            Element::new("path")
                .attr("d", band_path(y, amplitude))
                .attr("fill", colour)
                .attr("opacity", num(opacity)),
        );
    }
}

/// One S-curve across the hero at `y`, closed along the bottom edge.
fn band_path(y: f64, amplitude: f64) -> String {
    let (w, h) = (HERO_WIDTH as f64, HERO_HEIGHT as f64);
    format!(
        "M0.0,{y} C{},{} {},{} {},{y} L{},{} L0.0,{} Z",
        f1(w / 3.0),
        f1(y - amplitude),
        f1(w * 2.0 / 3.0),
        f1(y + amplitude),
        f1(w),
        f1(w),
        f1(h),
        f1(h),
        y = f1(y),
    )
}
