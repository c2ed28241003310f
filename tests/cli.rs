use std::fs;
use std::path::PathBuf;

use brandkit::cli::build::{self, BuildArgs};
use brandkit::cli::ProjectArgs;
use brandkit::output::Printer;
use brandkit::{AssetBundle, DesignProfile, ProjectConfig};
use tempfile::tempdir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn fixture_config_parses() {
    let config = ProjectConfig::load(&fixture("brandkit.yaml")).unwrap();
    assert_eq!(config.name.as_deref(), Some("Acme"));
    assert!(!config.png);
    assert_eq!(config.effective_patterns().len(), 2);
}

#[test]
fn project_layers_profile_under_config() {
    let project = ProjectArgs {
        config: Some(fixture("brandkit.yaml")),
        ..Default::default()
    }
    .load()
    .unwrap();

    assert_eq!(project.name, "Acme");
    // primary comes from the profile's `brand` alias
    assert_eq!(project.palette.primary.to_string(), "#306E5E");
    // accent in brandkit.yaml wins over the profile
    assert_eq!(project.palette.accent.to_string(), "#FF6719");
}

#[test]
fn build_into_temp_directory() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("assets");

    let args = BuildArgs {
        project: ProjectArgs {
            config: Some(fixture("brandkit.yaml")),
            ..Default::default()
        },
        output: Some(out.clone()),
        json: false,
        no_png: false,
    };
    build::run(args, &Printer::plain()).unwrap();

    let expected = [
        "patterns/pattern-dots.svg",
        "patterns/pattern-topographic.svg",
        "dividers/divider-angle.svg",
        "heroes/hero-geometric.svg",
        "heroes/hero-blob.svg",
        "favicon.svg",
        "site.webmanifest",
        "head.html",
        "rasterize-favicons.mjs",
        "manifest.json",
    ];
    for path in expected {
        assert!(out.join(path).is_file(), "missing {}", path);
    }
    assert!(!out.join("patterns/pattern-grid.svg").exists());

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("manifest.json")).unwrap()).unwrap();
    assert_eq!(manifest["name"], "Acme");
    assert_eq!(manifest["assets"].as_array().unwrap().len(), expected.len() - 1);
    assert_eq!(manifest["palette"]["accent"], "#FF6719");
}

#[test]
fn json_payload_matches_written_files() {
    let project = ProjectArgs {
        config: Some(fixture("brandkit.yaml")),
        ..Default::default()
    }
    .load()
    .unwrap();
    let options = build::bundle_options(&project, true);
    let bundle = AssetBundle::build(&options).unwrap();

    let dir = tempdir().unwrap();
    bundle.write_to(dir.path()).unwrap();

    let json: serde_json::Value = serde_json::from_str(&bundle.to_json().unwrap()).unwrap();
    let hero = json["files"]["heroes/hero-blob.svg"].as_str().unwrap();
    assert_eq!(
        hero,
        fs::read_to_string(dir.path().join("heroes/hero-blob.svg")).unwrap()
    );
}

#[test]
fn profile_fixture_context() {
    let profile = DesignProfile::load(&fixture("acme-profile.json")).unwrap();
    let context = profile.prompt_context();

    assert!(context.starts_with("## Design profile: Acme Studio\n"));
    assert!(context.contains("- brand: #306E5E"));
    assert!(context.contains("- text-muted: #6B7280"));
    assert!(context.contains("### Components\nButton, Card, Navbar"));
    assert!(context.contains("--brand: #306E5E;"));
}
