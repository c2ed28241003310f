//! Context command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::profile::DesignProfile;

/// Render a design profile as a prompt fragment
#[derive(Args, Debug)]
pub struct ContextArgs {
    /// Design profile JSON file
    #[arg(required = true)]
    pub profile: PathBuf,

    /// Also print the palette the profile resolves to
    #[arg(long)]
    pub palette: bool,
}

pub fn run(args: ContextArgs, printer: &Printer) -> Result<()> {
    let profile = DesignProfile::load(&args.profile)?;
    printer.info("Loaded", &format!("{} from {}", profile.name, display_path(&args.profile)));

    print!("{}", profile.prompt_context());

    if args.palette {
        let overrides = profile.palette()?;
        let slots = [
            ("primary", overrides.primary),
            ("secondary", overrides.secondary),
            ("accent", overrides.accent),
            ("background", overrides.background),
            ("amber", overrides.amber),
            ("lavender", overrides.lavender),
            ("surface", overrides.surface),
        ];
        println!("\n### Palette");
        for (slot, colour) in slots {
            if let Some(colour) = colour {
                println!("- {}: {}", slot, colour);
            }
        }
    }

    Ok(())
}
