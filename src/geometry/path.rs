//! SVG path builders: smoothed closed outlines and sine-like waves.

use std::fmt::Write as _;

use crate::svg::f1;

/// A point in SVG user space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from `center` along `angle` (radians).
    pub fn polar(center: Point, radius: f64, angle: f64) -> Self {
        Self::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        )
    }
}

/// Closed cubic-Bezier path through `points` using Catmull-Rom control points.
///
/// For each segment `p1 -> p2` (with neighbours `p0`, `p3`, indexed
/// circularly) the control points are `p1 + (p2 - p0) * tension` and
/// `p2 - (p3 - p1) * tension`. The result starts with `M`, holds exactly one
/// `C` command per point, and ends with `Z`. Fewer than 3 points yield an
/// empty string.
pub fn smooth_closed_path(points: &[Point], tension: f64) -> String {
    let n = points.len();
    if n < 3 {
        return String::new();
    }

    let mut d = format!("M{},{}", f1(points[0].x), f1(points[0].y));
    for i in 0..n {
        let p0 = points[(i + n - 1) % n];
        let p1 = points[i];
        let p2 = points[(i + 1) % n];
        let p3 = points[(i + 2) % n];

        let cp1x = p1.x + (p2.x - p0.x) * tension;
        let cp1y = p1.y + (p2.y - p0.y) * tension;
        let cp2x = p2.x - (p3.x - p1.x) * tension;
        let cp2y = p2.y - (p3.y - p1.y) * tension;

        let _ = write!(
            d,
            " C{},{} {},{} {},{}",
            f1(cp1x),
            f1(cp1y),
            f1(cp2x),
            f1(cp2y),
            f1(p2.x),
            f1(p2.y)
        );
    }
    d.push_str(" Z");
    d
}

/// Open wave path across `width`, made of `wave_count` equal cubic lobes that
/// alternate above and below `y_center`. The first lobe rises (smaller y).
///
/// The path starts at `(0, y_center)` and ends at `(width, y_center)`, so
/// callers can close it into a filled band.
pub fn wave_path(width: f64, y_center: f64, amplitude: f64, wave_count: u32) -> String {
    let count = wave_count.max(1);
    let segment = width / count as f64;

    let mut d = format!("M0.0,{}", f1(y_center));
    for i in 0..count {
        let x0 = i as f64 * segment;
        let direction = if i % 2 == 0 { -1.0 } else { 1.0 };
        let peak = y_center + direction * amplitude;

        let _ = write!(
            d,
            " C{},{} {},{} {},{}",
            f1(x0 + segment / 3.0),
            f1(peak),
            f1(x0 + segment * 2.0 / 3.0),
            f1(peak),
            f1(x0 + segment),
            f1(y_center)
        );
    }
    d
}
