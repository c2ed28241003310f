use clap::Parser;
use miette::Result;
use brandkit::cli::{Cli, Commands};
use brandkit::output::Printer;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => brandkit::cli::build::run(args, &printer)?,
        Commands::Render(args) => brandkit::cli::render::run(args, &printer)?,
        Commands::Favicon(args) => brandkit::cli::favicon::run(args, &printer)?,
        Commands::Palette(args) => brandkit::cli::palette::run(args, &printer)?,
        Commands::Sample(args) => brandkit::cli::sample::run(args, &printer)?,
        Commands::Context(args) => brandkit::cli::context::run(args, &printer)?,
        Commands::Completions(args) => brandkit::cli::completions::run(args)?,
    }

    Ok(())
}
