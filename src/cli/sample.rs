//! Sample command implementation.
//!
//! Counts opaque pixel colours in an image and prints the most frequent as
//! YAML palette candidates.

use std::collections::HashMap;
use std::path::PathBuf;

use clap::Args;
use image::RgbaImage;

use crate::error::{BrandError, Result};
use crate::output::{display_path, plural, Printer};
use crate::types::Colour;

/// Pixels with alpha below this are ignored.
const MIN_ALPHA: u8 = 128;

/// Extract the most frequent colours from an image
#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Image file (PNG, JPEG, ...) to sample
    #[arg(required = true)]
    pub file: PathBuf,

    /// Maximum number of colours to output
    #[arg(long, default_value = "8")]
    pub max: usize,
}

pub fn run(args: SampleArgs, printer: &Printer) -> Result<()> {
    let path = &args.file;

    let img = image::open(path)
        .map_err(|e| BrandError::Io {
            path: path.clone(),
            message: e.to_string(),
        })?
        .to_rgba8();

    let colours = dominant_colours(&img, args.max);
    printer.status(
        "Sampled",
        &format!(
            "{} from {}",
            plural(colours.len(), "colour", "colours"),
            display_path(path)
        ),
    );

    for (i, (colour, count)) in colours.iter().enumerate() {
        println!("colour-{}: \"{}\"  # {} px", i + 1, colour, count);
    }

    Ok(())
}

/// Colours ordered by pixel count, most common first; ties break on hex
/// value so output is stable.
pub fn dominant_colours(img: &RgbaImage, max: usize) -> Vec<(Colour, usize)> {
    let mut counts: HashMap<Colour, usize> = HashMap::new();
    for pixel in img.pixels() {
        let [r, g, b, a] = pixel.0;
        if a < MIN_ALPHA {
            continue;
        }
        *counts.entry(Colour::rgb(r, g, b)).or_insert(0) += 1;
    }

    let mut colours: Vec<(Colour, usize)> = counts.into_iter().collect();
    colours.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.to_hex().cmp(&b.0.to_hex())));
    colours.truncate(max);
    colours
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::tempdir;

    fn image() -> RgbaImage {
        let mut img = RgbaImage::from_pixel(4, 4, Rgba([0x30, 0x6E, 0x5E, 255]));
        img.put_pixel(0, 0, Rgba([0xFF, 0x67, 0x19, 255]));
        img.put_pixel(1, 0, Rgba([0xFF, 0x67, 0x19, 255]));
        img.put_pixel(2, 0, Rgba([0xFF, 0xFF, 0xFF, 255]));
        img.put_pixel(3, 0, Rgba([0, 0, 0, 0]));
        img
    }

    #[test]
    fn test_dominant_colours_order() {
        let colours = dominant_colours(&image(), 8);
        assert_eq!(
            colours,
            vec![
                (Colour::rgb(0x30, 0x6E, 0x5E), 12),
                (Colour::rgb(0xFF, 0x67, 0x19), 2),
                (Colour::WHITE, 1),
            ]
        );
    }

    #[test]
    fn test_dominant_colours_max() {
        assert_eq!(dominant_colours(&image(), 1).len(), 1);
    }

    #[test]
    fn test_sample_reads_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logo.png");
        image().save(&path).unwrap();

        let args = SampleArgs {
            file: path,
            max: 2,
        };
        run(args, &Printer::plain()).unwrap();
    }

    #[test]
    fn test_sample_missing_file() {
        let args = SampleArgs {
            file: PathBuf::from("/nonexistent/logo.png"),
            max: 2,
        };
        assert!(matches!(
            run(args, &Printer::plain()),
            Err(BrandError::Io { .. })
        ));
    }
}
