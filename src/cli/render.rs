//! Render command implementation.
//!
//! Generates one pattern, divider or hero and prints the SVG (or its CSS
//! usage snippet) to stdout, or writes it to a file.

use std::fs;
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::{BrandError, Result};
use crate::output::{display_path, format_bytes, Printer};
use crate::render::{AssetType, DividerType, GeneratedAsset, HeroType, PatternType};
use crate::types::Palette;

use super::ProjectArgs;

/// Asset family for `brandkit render`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Category {
    Pattern,
    Divider,
    Hero,
}

/// Render a single pattern, divider or hero as SVG
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Asset family
    #[arg(value_enum)]
    pub category: Category,

    /// Asset type within the family (e.g. dots, wave, blob)
    pub kind: String,

    #[command(flatten)]
    pub project: ProjectArgs,

    /// Write the SVG to this file instead of stdout
    #[arg(long, short)]
    pub out: Option<PathBuf>,

    /// Print the CSS usage snippet instead of the SVG
    #[arg(long)]
    pub css: bool,
}

/// SVG and CSS usage for one rendered asset.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub file_name: String,
    pub svg: String,
    pub css_usage: String,
}

pub fn run(args: RenderArgs, printer: &Printer) -> Result<()> {
    let project = args.project.load()?;
    let rendered = render(args.category, &args.kind, &project.palette)?;

    if args.css {
        println!("{}", rendered.css_usage);
        return Ok(());
    }

    match &args.out {
        Some(path) => {
            fs::write(path, &rendered.svg).map_err(|e| BrandError::Io {
                path: path.clone(),
                message: format!("Failed to write SVG: {}", e),
            })?;
            printer.status(
                "Rendered",
                &format!(
                    "{} -> {} {}",
                    rendered.file_name,
                    display_path(path),
                    printer.dim(&format!("({})", format_bytes(rendered.svg.len())))
                ),
            );
        }
        None => println!("{}", rendered.svg),
    }

    Ok(())
}

/// Render `kind` from `category` for a palette.
pub fn render(category: Category, kind: &str, palette: &Palette) -> Result<Rendered> {
    match category {
        Category::Pattern => render_kind::<PatternType>(kind, palette),
        Category::Divider => render_kind::<DividerType>(kind, palette),
        Category::Hero => render_kind::<HeroType>(kind, palette),
    }
}

fn render_kind<K: AssetType + ValueEnum>(kind: &str, palette: &Palette) -> Result<Rendered> {
    let kind = K::from_str(kind, true).map_err(|_| {
        let known: Vec<String> = K::all().iter().map(ToString::to_string).collect();
        BrandError::Config {
            message: format!("Unknown {} type: {}", K::CATEGORY, kind),
            help: Some(format!("Available: {}", known.join(", "))),
        }
    })?;

    let GeneratedAsset { svg, css_usage, .. } = kind.generate(palette);
    Ok(Rendered {
        file_name: kind.file_name(),
        svg,
        css_usage,
    })
}
