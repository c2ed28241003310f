//! Palette command implementation.
//!
//! Prints every resolved palette slot with its HSL, luminance and the text
//! colour that reads best on it.

use clap::Args;
use serde::Serialize;

use crate::error::{BrandError, Result};
use crate::output::Printer;
use crate::types::{contrast_color, relative_luminance, to_hsl, Colour, HslColour, Palette};

use super::ProjectArgs;

/// Show the resolved palette with contrast information
#[derive(Args, Debug)]
pub struct PaletteArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// One palette slot, as reported by `brandkit palette`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotReport {
    pub slot: &'static str,
    pub hex: Colour,
    pub hsl: HslColour,
    pub luminance: f64,
    pub text: Colour,
}

pub fn inspect(palette: &Palette) -> Vec<SlotReport> {
    palette
        .slots()
        .into_iter()
        .map(|(slot, hex)| SlotReport {
            slot,
            hex,
            hsl: to_hsl(hex),
            luminance: relative_luminance(hex),
            text: contrast_color(hex),
        })
        .collect()
}

pub fn run(args: PaletteArgs, printer: &Printer) -> Result<()> {
    let project = args.project.load()?;
    let report = inspect(&project.palette);

    if args.json {
        let json = serde_json::to_string_pretty(&report).map_err(|e| BrandError::Build {
            message: format!("Failed to serialize palette: {}", e),
            help: None,
        })?;
        println!("{}", json);
        return Ok(());
    }

    for slot in &report {
        println!("{} {}", printer.swatch(slot.hex), format_slot(slot));
    }

    Ok(())
}

fn format_slot(slot: &SlotReport) -> String {
    format!(
        "{:<11}{}  hsl({:.0}, {:.0}%, {:.0}%)  L={:.2}  text {}",
        slot.slot,
        slot.hex,
        slot.hsl.hue,
        slot.hsl.saturation,
        slot.hsl.lightness,
        slot.luminance,
        slot.text
    )
}
