//! Favicon command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::bundle::AssetBundle;
use crate::error::{BrandError, Result};
use crate::favicon::{build_favicon_svg, FaviconOptions, FaviconShape};
use crate::output::{display_path, plural, Printer};

use super::build::bundle_options;
use super::{Project, ProjectArgs};

/// Generate a favicon or a complete favicon package
#[derive(Args, Debug)]
pub struct FaviconArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Background shape (overrides the config)
    #[arg(long, value_enum)]
    pub shape: Option<FaviconShape>,

    /// Pixel size of the SVG printed to stdout
    #[arg(long, default_value = "512")]
    pub size: u32,

    /// Write the full package (SVG, PNGs, web manifest, head tags) here
    #[arg(long, short)]
    pub out: Option<PathBuf>,

    /// Skip PNG rasterization
    #[arg(long)]
    pub no_png: bool,
}

pub fn run(args: FaviconArgs, printer: &Printer) -> Result<()> {
    if args.size == 0 {
        return Err(BrandError::Config {
            message: "Favicon size must be at least 1px".to_string(),
            help: None,
        });
    }

    let project = args.project.load()?;

    let Some(out) = &args.out else {
        println!("{}", build_favicon_svg(&favicon_options(&project, args.shape), args.size));
        return Ok(());
    };

    let mut options = bundle_options(&project, args.no_png);
    options.patterns.clear();
    options.dividers.clear();
    options.heroes.clear();
    if let Some(shape) = args.shape {
        options.favicon_shape = shape;
    }

    let bundle = AssetBundle::build(&options)?;
    let written = bundle.write_to(out)?;
    for file in &bundle.files {
        printer.status("Generated", &file.path);
    }
    if options.png && bundle.file("rasterize-favicons.mjs").is_some() {
        printer.warning(
            "Skipped",
            "PNG favicons; run rasterize-favicons.mjs to produce them",
        );
    }
    printer.status(
        "Finished",
        &format!(
            "{} in {}",
            plural(written.len(), "file", "files"),
            display_path(out)
        ),
    );

    Ok(())
}

fn favicon_options(project: &Project, shape: Option<FaviconShape>) -> FaviconOptions {
    let config = &project.config.favicon;
    let opts = FaviconOptions::from_palette(
        &project.name,
        &project.palette,
        shape.unwrap_or(config.shape),
    );
    match config.background {
        Some(bg) => opts.with_background(bg),
        None => opts,
    }
}
