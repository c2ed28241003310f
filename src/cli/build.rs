//! Build command implementation.
//!
//! Generates the asset bundle and writes it to the output directory, or
//! prints it as one JSON document.

use std::path::PathBuf;

use clap::Args;

use crate::bundle::{AssetBundle, BundleOptions};
use crate::error::Result;
use crate::output::{display_path, format_bytes, plural, Printer};

use super::{Project, ProjectArgs};

/// Generate the full asset bundle
#[derive(Args, Debug)]
pub struct BuildArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Output directory (overrides the config's `output`)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Print the bundle as JSON to stdout instead of writing files
    #[arg(long)]
    pub json: bool,

    /// Skip PNG favicon rasterization
    #[arg(long)]
    pub no_png: bool,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let project = args.project.load()?;
    let options = bundle_options(&project, args.no_png);
    let bundle = AssetBundle::build(&options)?;

    if args.json {
        println!("{}", bundle.to_json()?);
        return Ok(());
    }

    let output = args.output.clone().unwrap_or_else(|| project.output_dir());
    let written = bundle.write_to(&output)?;

    for file in &bundle.files {
        printer.status(
            "Generated",
            &format!(
                "{} {}",
                file.path,
                printer.dim(&format!("({})", format_bytes(file.contents.as_bytes().len())))
            ),
        );
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
            display_path(&output)
        ),
    );

    Ok(())
}

/// Bundle options from the project config.
pub fn bundle_options(project: &Project, no_png: bool) -> BundleOptions {
    let config = &project.config;
    BundleOptions {
        favicon_shape: config.favicon.shape,
        favicon_background: config.favicon.background,
        patterns: config.effective_patterns(),
        dividers: config.effective_dividers(),
        heroes: config.effective_heroes(),
        png: config.png && !no_png,
        ..BundleOptions::new(&project.name, project.palette)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_config(dir: &std::path::Path, extra: &str) -> PathBuf {
        let path = dir.join("brandkit.yaml");
        fs::write(
            &path,
            format!(
                "name: Acme\npalette:\n  primary: \"#306E5E\"\n  secondary: \"#4A8E7A\"\n  accent: \"#FF6719\"\n  background: \"#FFFFFF\"\n{}",
                extra
            ),
        )
        .unwrap();
        path
    }

    #[test]
    fn test_build_writes_bundle() {
        let dir = tempdir().unwrap();
        let config = write_config(dir.path(), "output: out\npng: false\n");

        let args = BuildArgs {
            project: ProjectArgs {
                config: Some(config),
                ..Default::default()
            },
            output: None,
            json: false,
            no_png: false,
        };
        run(args, &Printer::plain()).unwrap();

        let out = dir.path().join("out");
        assert!(out.join("patterns/pattern-dots.svg").exists());
        assert!(out.join("dividers/divider-layered.svg").exists());
        assert!(out.join("heroes/hero-gradient-mesh.svg").exists());
        assert!(out.join("favicon.svg").exists());
        assert!(out.join("rasterize-favicons.mjs").exists());
        assert!(out.join("manifest.json").exists());
        assert!(!out.join("favicon-32x32.png").exists());
    }

    #[test]
    fn test_build_respects_selection_and_output_flag() {
        let dir = tempdir().unwrap();
        let config = write_config(
            dir.path(),
            "patterns: [grid]\ndividers: []\nheroes: []\nfavicon:\n  shape: circle\n",
        );
        let out = dir.path().join("elsewhere");

        let args = BuildArgs {
            project: ProjectArgs {
                config: Some(config),
                ..Default::default()
            },
            output: Some(out.clone()),
            json: false,
            no_png: true,
        };
        run(args, &Printer::plain()).unwrap();

        assert!(out.join("patterns/pattern-grid.svg").exists());
        assert!(!out.join("patterns/pattern-dots.svg").exists());
        assert!(!out.join("dividers").exists());

        let favicon = fs::read_to_string(out.join("favicon.svg")).unwrap();
        assert!(favicon.contains("<circle"));
    }

    #[test]
    fn test_bundle_options_from_config() {
        let dir = tempdir().unwrap();
        let config = write_config(dir.path(), "png: true\nheroes: [blob]\n");
        let project = ProjectArgs {
            config: Some(config),
            ..Default::default()
        }
        .load()
        .unwrap();

        let options = bundle_options(&project, false);
        assert!(options.png);
        assert_eq!(options.heroes.len(), 1);
        assert_eq!(options.patterns.len(), 6);
        assert!(!bundle_options(&project, true).png);
    }
}
