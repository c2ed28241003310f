//! Project loading shared by the generating commands.
//!
//! Palette colours are layered: design profile first, then brandkit.yaml,
//! then command-line flags. Later layers win slot by slot.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::ProjectConfig;
use crate::error::Result;
use crate::profile::DesignProfile;
use crate::types::{Colour, Palette, PaletteOverrides};

/// Palette and project options
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    /// Project config file (default: ./brandkit.yaml if present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Design profile JSON (overrides the config's `profile`)
    #[arg(long)]
    pub profile: Option<PathBuf>,

    /// Brand name
    #[arg(long)]
    pub name: Option<String>,

    #[command(flatten)]
    pub colours: PaletteFlags,
}

/// Palette colour flags
#[derive(Args, Debug, Clone, Default)]
pub struct PaletteFlags {
    /// Primary colour (#RRGGBB)
    #[arg(long, value_name = "HEX")]
    pub primary: Option<Colour>,

    /// Secondary colour
    #[arg(long, value_name = "HEX")]
    pub secondary: Option<Colour>,

    /// Accent colour
    #[arg(long, value_name = "HEX")]
    pub accent: Option<Colour>,

    /// Background colour
    #[arg(long, value_name = "HEX")]
    pub background: Option<Colour>,

    /// Warm supporting colour
    #[arg(long, value_name = "HEX")]
    pub amber: Option<Colour>,

    /// Cool supporting colour
    #[arg(long, value_name = "HEX")]
    pub lavender: Option<Colour>,

    /// Hero base colour
    #[arg(long, value_name = "HEX")]
    pub surface: Option<Colour>,
}

impl From<&PaletteFlags> for PaletteOverrides {
    fn from(flags: &PaletteFlags) -> Self {
        PaletteOverrides {
            primary: flags.primary,
            secondary: flags.secondary,
            accent: flags.accent,
            background: flags.background,
            amber: flags.amber,
            lavender: flags.lavender,
            surface: flags.surface,
        }
    }
}

/// A resolved project: config plus the palette and name it implies.
#[derive(Debug, Clone)]
pub struct Project {
    pub name: String,
    pub palette: Palette,
    pub config: ProjectConfig,
    /// Directory the config was loaded from; relative config paths hang off it.
    pub base_dir: PathBuf,
}

impl Project {
    /// Output directory from the config, relative to `base_dir`.
    pub fn output_dir(&self) -> PathBuf {
        if self.config.output.is_absolute() {
            self.config.output.clone()
        } else {
            self.base_dir.join(&self.config.output)
        }
    }
}

impl ProjectArgs {
    /// Load the config and profile and resolve the palette.
    pub fn load(&self) -> Result<Project> {
        let (config, base_dir) = self.load_config()?;

        let profile_path = match &self.profile {
            Some(path) => Some(path.clone()),
            None => config.profile_path(&base_dir),
        };
        let profile = profile_path
            .as_deref()
            .map(DesignProfile::load)
            .transpose()?;

        let mut overrides = match &profile {
            Some(profile) => profile.palette()?,
            None => PaletteOverrides::default(),
        };
        overrides = overrides
            .merge(config.palette.clone())
            .merge(PaletteOverrides::from(&self.colours));

        let palette = overrides.into_colors()?.resolve();

        let name = self
            .name
            .clone()
            .or_else(|| config.name.clone())
            .or_else(|| profile.map(|p| p.name))
            .unwrap_or_default();

        log::debug!("project '{}' palette primary {}", name, palette.primary);

        Ok(Project {
            name,
            palette,
            config,
            base_dir,
        })
    }

    fn load_config(&self) -> Result<(ProjectConfig, PathBuf)> {
        let path = match &self.config {
            Some(path) => Some(path.clone()),
            None => ProjectConfig::find(Path::new(".")),
        };

        match path {
            Some(path) => {
                let config = ProjectConfig::load(&path)?;
                let base = path
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| PathBuf::from("."));
                Ok((config, base))
            }
            None => Ok((ProjectConfig::default(), PathBuf::from("."))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BrandError;
    use std::fs;
    use tempfile::tempdir;

    fn flags() -> PaletteFlags {
        PaletteFlags {
            primary: Some(Colour::rgb(0x30, 0x6E, 0x5E)),
            secondary: Some(Colour::rgb(0x4A, 0x8E, 0x7A)),
            accent: Some(Colour::rgb(0xFF, 0x67, 0x19)),
            background: Some(Colour::WHITE),
            ..Default::default()
        }
    }

    #[test]
    fn test_flags_only() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("brandkit.yaml");
        fs::write(&config, "").unwrap();

        let args = ProjectArgs {
            config: Some(config),
            name: Some("Acme".to_string()),
            colours: flags(),
            ..Default::default()
        };
        let project = args.load().unwrap();
        assert_eq!(project.name, "Acme");
        assert_eq!(project.palette.primary, Colour::rgb(0x30, 0x6E, 0x5E));
        assert_eq!(project.palette.amber, crate::types::DEFAULT_AMBER);
        assert_eq!(project.output_dir(), dir.path().join("dist"));
    }

    #[test]
    fn test_layering_order() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("profile.json"),
            r##"{"name": "FromProfile", "tokens": {"colors": {
                "primary": "#000001", "secondary": "#000002",
                "accent": "#000003", "background": "#000004", "surface": "#000005"
            }}}"##,
        )
        .unwrap();
        let config = dir.path().join("brandkit.yaml");
        fs::write(
            &config,
            "profile: profile.json\npalette:\n  secondary: \"#00000A\"\n  accent: \"#00000B\"\n",
        )
        .unwrap();

        let args = ProjectArgs {
            config: Some(config),
            colours: PaletteFlags {
                accent: Some(Colour::rgb(0, 0, 0x0C)),
                ..Default::default()
            },
            ..Default::default()
        };
        let project = args.load().unwrap();

        assert_eq!(project.name, "FromProfile");
        assert_eq!(project.palette.primary, Colour::rgb(0, 0, 1));
        assert_eq!(project.palette.secondary, Colour::rgb(0, 0, 0x0A));
        assert_eq!(project.palette.accent, Colour::rgb(0, 0, 0x0C));
        assert_eq!(project.palette.surface, Colour::rgb(0, 0, 5));
    }

    #[test]
    fn test_missing_slots_are_reported() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("brandkit.yaml");
        fs::write(&config, "palette:\n  primary: \"#306E5E\"\n").unwrap();

        let args = ProjectArgs {
            config: Some(config),
            ..Default::default()
        };
        let err = args.load().unwrap_err();
        match err {
            BrandError::Config { message, help } => {
                assert!(message.contains("secondary"));
                assert!(help.unwrap().contains("--primary"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
