use brandkit::{
    build_favicon_svg, contrast_color, generate_divider, generate_hero, generate_pattern,
    hex_to_rgb, rgb_to_hex, smooth_closed_path, AssetType, Colour, DividerType, FaviconOptions,
    FaviconPackage, FaviconShape, HeroType, Palette, PaletteColors, PatternType, Point,
    SeededRandom,
};

fn palette() -> Palette {
    PaletteColors::from_hex("#306E5E", "#4A8E7A", "#FF6719", "#FFFFFF")
        .unwrap()
        .resolve()
}

#[test]
fn dots_pattern_example() {
    let svg = generate_pattern(PatternType::Dots, &palette()).svg;

    assert!(svg.contains("viewBox=\"0 0 64 64\""));
    assert_eq!(svg.matches("<circle").count(), 4);
    assert_eq!(svg.matches("fill=\"#306E5E\"").count(), 2);
    assert_eq!(svg.matches("fill=\"#CAC5F9\"").count(), 2);
}

#[test]
fn angle_divider_example() {
    let p = palette();
    let svg = generate_divider(DividerType::Angle, &p).svg;

    assert!(svg.contains("viewBox=\"0 0 1440 120\""));
    assert_eq!(svg.matches("<polygon").count(), 1);
    assert!(svg.contains(&format!("fill=\"{}\" opacity=\"0.06\"", p.primary)));
}

#[test]
fn hex_round_trip() {
    for hex in ["#306E5E", "#000000", "#FFFFFF", "#ff6719", "#CAC5F9"] {
        let c = hex_to_rgb(hex).unwrap();
        let [r, g, b] = c.channels();
        assert_eq!(rgb_to_hex(r, g, b), hex.to_uppercase());
    }
}

#[test]
fn contrast_extremes() {
    assert_eq!(contrast_color(Colour::BLACK).to_string(), "#FFFFFF");
    assert_eq!(contrast_color(Colour::WHITE).to_string(), "#1A1A1A");
}

#[test]
fn seeded_random_is_deterministic() {
    let a: Vec<f64> = SeededRandom::new("#306E5E#FF6719").take(10).collect();
    let b: Vec<f64> = SeededRandom::new("#306E5E#FF6719").take(10).collect();
    let c: Vec<f64> = SeededRandom::new("#306E5E#FF6718").take(10).collect();

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn closed_path_shape() {
    let points: Vec<Point> = (0..5)
        .map(|i| Point::polar(Point::new(50.0, 50.0), 40.0, i as f64))
        .collect();
    let d = smooth_closed_path(&points, 0.3);

    assert!(d.starts_with('M'));
    assert!(d.ends_with('Z'));
    assert_eq!(d.matches('C').count(), 5);
}

#[test]
fn every_generator_is_idempotent() {
    let p = palette();
    for &kind in PatternType::all() {
        assert_eq!(generate_pattern(kind, &p), generate_pattern(kind, &p));
    }
    for &kind in DividerType::all() {
        assert_eq!(generate_divider(kind, &p), generate_divider(kind, &p));
    }
    for &kind in HeroType::all() {
        assert_eq!(generate_hero(kind, &p), generate_hero(kind, &p));
    }
}

#[test]
fn palette_defaults_optional_slots() {
    let p = palette();
    assert_eq!(p.amber.to_string(), "#F2B245");
    assert_eq!(p.lavender.to_string(), "#CAC5F9");
    assert_eq!(p.surface.to_string(), "#FDFBF7");
}

#[test]
fn every_svg_is_a_document() {
    let p = palette();
    let svgs = PatternType::all()
        .iter()
        .map(|&k| generate_pattern(k, &p).svg)
        .chain(DividerType::all().iter().map(|&k| generate_divider(k, &p).svg))
        .chain(HeroType::all().iter().map(|&k| generate_hero(k, &p).svg));

    for svg in svgs {
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.ends_with("</svg>"));
        assert!(!svg.contains("NaN"));
    }
}

#[test]
fn favicon_without_raster_backend() {
    let opts = FaviconOptions::from_palette("Acme", &palette(), FaviconShape::Hexagon);
    let package = FaviconPackage::generate_with(&opts, None);

    assert!(package.pngs.is_empty());
    assert!(!package.png_script.is_empty());
    assert!(package.svg.contains(">A</text>"));
    assert!(package.webmanifest.contains("\"theme_color\": \"#306E5E\""));
}

#[test]
fn favicon_scales_with_size() {
    let opts = FaviconOptions::new("Acme", Colour::rgb(0x30, 0x6E, 0x5E));
    let small = build_favicon_svg(&opts, 16);
    let large = build_favicon_svg(&opts, 512);

    assert!(small.contains("viewBox=\"0 0 16 16\""));
    assert!(large.contains("viewBox=\"0 0 512 512\""));
    assert_ne!(small, large);
}
