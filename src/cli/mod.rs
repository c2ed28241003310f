pub mod build;
pub mod completions;
pub mod context;
pub mod favicon;
pub mod palette;
pub mod project;
pub mod render;
pub mod sample;

use clap::{Parser, Subcommand};

pub use project::{PaletteFlags, Project, ProjectArgs};

/// brandkit - on-brand SVG assets from a design palette
#[derive(Parser, Debug)]
#[command(name = "brandkit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the full asset bundle (patterns, dividers, heroes, favicons)
    Build(build::BuildArgs),

    /// Render a single pattern, divider or hero as SVG
    Render(render::RenderArgs),

    /// Generate a favicon or a complete favicon package
    Favicon(favicon::FaviconArgs),

    /// Show the resolved palette with contrast information
    Palette(palette::PaletteArgs),

    /// Extract the most frequent colours from an image
    Sample(sample::SampleArgs),

    /// Render a design profile as a prompt fragment
    Context(context::ContextArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
