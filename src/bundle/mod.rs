//! Asset bundles.
//!
//! A bundle is everything generated for one brand: the selected patterns,
//! dividers and heroes, the favicon package, and a manifest describing each
//! file. Bundles are built in memory and can be written to a directory or
//! serialized as a single JSON payload.

mod manifest;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serialize;

use crate::error::{BrandError, Result};
use crate::favicon::{FaviconOptions, FaviconPackage, FaviconShape, Rasterizer, HEAD_TAGS, PNG_SIZES};
use crate::render::{AssetCategory, AssetType, DividerType, HeroType, PatternType};
use crate::types::{Colour, Palette};

pub use manifest::{AssetEntry, AssetManifest, Encoding, FileType, ManifestBuilder};

/// Name of the manifest file written alongside the assets.
pub const MANIFEST_FILE: &str = "manifest.json";

/// What to put in a bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct BundleOptions {
    pub name: String,
    pub palette: Palette,
    pub favicon_shape: FaviconShape,
    /// Manifest background colour; the palette background when absent.
    pub favicon_background: Option<Colour>,
    pub patterns: Vec<PatternType>,
    pub dividers: Vec<DividerType>,
    pub heroes: Vec<HeroType>,
    /// Attempt PNG favicons. When false only the fallback script is written.
    pub png: bool,
}

impl BundleOptions {
    /// Every asset type, default favicon shape, PNGs enabled.
    pub fn new(name: impl Into<String>, palette: Palette) -> Self {
        Self {
            name: name.into(),
            palette,
            favicon_shape: FaviconShape::default(),
            favicon_background: None,
            patterns: PatternType::ALL.to_vec(),
            dividers: DividerType::ALL.to_vec(),
            heroes: HeroType::ALL.to_vec(),
            png: true,
        }
    }

    fn favicon_options(&self) -> FaviconOptions {
        let opts = FaviconOptions::from_palette(&self.name, &self.palette, self.favicon_shape);
        match self.favicon_background {
            Some(bg) => opts.with_background(bg),
            None => opts,
        }
    }
}

/// Contents of a bundle file.
#[derive(Debug, Clone, PartialEq)]
pub enum FileContents {
    Text(String),
    Binary(Vec<u8>),
}

impl FileContents {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            FileContents::Text(text) => text.as_bytes(),
            FileContents::Binary(bytes) => bytes,
        }
    }
}

/// A file in a bundle, addressed by its path relative to the bundle root.
#[derive(Debug, Clone, PartialEq)]
pub struct BundleFile {
    pub path: String,
    pub contents: FileContents,
}

/// A generated asset bundle.
#[derive(Debug, Clone)]
pub struct AssetBundle {
    pub files: Vec<BundleFile>,
    pub manifest: AssetManifest,
}

#[derive(Serialize)]
struct Payload<'a> {
    manifest: &'a AssetManifest,
    files: BTreeMap<&'a str, String>,
}

impl AssetBundle {
    /// Build a bundle, rasterizing favicons with the default backend when
    /// `options.png` is set.
    pub fn build(options: &BundleOptions) -> Result<Self> {
        let favicon = options.favicon_options();
        let package = if options.png {
            FaviconPackage::generate(&favicon)
        } else {
            FaviconPackage::generate_with(&favicon, None)
        };
        Self::assemble(options, package)
    }

    /// Build a bundle with an explicit raster backend.
    pub fn build_with(options: &BundleOptions, rasterizer: Option<&dyn Rasterizer>) -> Result<Self> {
        let package = FaviconPackage::generate_with(&options.favicon_options(), rasterizer);
        Self::assemble(options, package)
    }

    fn assemble(options: &BundleOptions, package: FaviconPackage) -> Result<Self> {
        let mut files = Vec::new();
        let mut manifest = ManifestBuilder::new(options.name.trim(), options.palette);

        add_svgs(&options.patterns, &options.palette, &mut files, &mut manifest);
        add_svgs(&options.dividers, &options.palette, &mut files, &mut manifest);
        add_svgs(&options.heroes, &options.palette, &mut files, &mut manifest);
        add_favicon(package, &mut files, &mut manifest)?;

        log::debug!("bundle '{}': {} files", options.name, files.len());

        Ok(Self {
            files,
            manifest: manifest.build(),
        })
    }

    /// Look up a file by bundle path.
    pub fn file(&self, path: &str) -> Option<&BundleFile> {
        self.files.iter().find(|f| f.path == path)
    }

    /// Write every file and `manifest.json` under `dir`, creating
    /// directories as needed. Returns the written paths in order.
    pub fn write_to(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let manifest = self.manifest.to_json()?;
        let mut written = Vec::with_capacity(self.files.len() + 1);

        let entries = self
            .files
            .iter()
            .map(|f| (f.path.as_str(), f.contents.as_bytes()))
            .chain(std::iter::once((MANIFEST_FILE, manifest.as_bytes())));

        for (rel, bytes) in entries {
            let path = dir.join(rel);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|e| BrandError::Io {
                    path: parent.to_path_buf(),
                    message: format!("Failed to create directory: {}", e),
                })?;
            }
            fs::write(&path, bytes).map_err(|e| BrandError::Io {
                path: path.clone(),
                message: format!("Failed to write file: {}", e),
            })?;
            written.push(path);
        }

        Ok(written)
    }

    /// The whole bundle as one JSON document: the manifest plus a map of
    /// path to contents, with binary files base64-encoded.
    pub fn to_json(&self) -> Result<String> {
        let files = self
            .files
            .iter()
            .map(|f| {
                let contents = match &f.contents {
                    FileContents::Text(text) => text.clone(),
                    FileContents::Binary(bytes) => STANDARD.encode(bytes),
                };
                (f.path.as_str(), contents)
            })
            .collect();

        let payload = Payload {
            manifest: &self.manifest,
            files,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| BrandError::Build {
            message: format!("Failed to serialize bundle: {}", e),
            help: None,
        })
    }
}

fn add_svgs<K: AssetType>(
    kinds: &[K],
    palette: &Palette,
    files: &mut Vec<BundleFile>,
    manifest: &mut ManifestBuilder,
) {
    for &kind in kinds {
        let asset = kind.generate(palette);
        let path = kind.bundle_path();
        log::debug!("generated {}", path);

        manifest.add(
            AssetEntry::new(&path, FileType::Svg, K::CATEGORY, kind.description())
                .with_usage(asset.css_usage),
        );
        files.push(BundleFile {
            path,
            contents: FileContents::Text(asset.svg),
        });
    }
}

fn add_favicon(
    package: FaviconPackage,
    files: &mut Vec<BundleFile>,
    manifest: &mut ManifestBuilder,
) -> Result<()> {
    let mut push = |path: &str, file_type, category, description: &str, contents| {
        manifest.add(AssetEntry::new(path, file_type, category, description));
        files.push(BundleFile {
            path: path.to_string(),
            contents,
        });
    };

    push(
        "favicon.svg",
        FileType::Svg,
        AssetCategory::Favicon,
        "Scalable favicon",
        FileContents::Text(package.svg.clone()),
    );

    // Decode in size order so the manifest lists icons small to large
    let mut pngs: BTreeMap<String, Vec<u8>> = package.png_bytes()?.into_iter().collect();
    for size in PNG_SIZES {
        let name = crate::favicon::png_file_name(size);
        if let Some(bytes) = pngs.remove(&name) {
            push(
                &name,
                FileType::Png,
                AssetCategory::Favicon,
                &format!("{0}x{0} PNG icon", size),
                FileContents::Binary(bytes),
            );
        }
    }

    push(
        "site.webmanifest",
        FileType::Json,
        AssetCategory::Meta,
        "Web app manifest",
        FileContents::Text(package.webmanifest.clone()),
    );
    push(
        "head.html",
        FileType::Html,
        AssetCategory::Meta,
        "Favicon <link> tags for the document head",
        FileContents::Text(package.html_head.clone()),
    );

    if package.pngs.is_empty() {
        push(
            "rasterize-favicons.mjs",
            FileType::Script,
            AssetCategory::Meta,
            "Node script that renders the PNG favicons from favicon.svg",
            FileContents::Text(package.png_script.clone()),
        );
    }

    manifest.head_tags(HEAD_TAGS);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PaletteColors;
    use tempfile::tempdir;

    struct SolidRasterizer;

    impl Rasterizer for SolidRasterizer {
        fn render_png(&self, _svg: &str, size: u32) -> Result<Vec<u8>> {
            Ok(vec![0x89, b'P', b'N', b'G', size as u8])
        }
    }

    fn options() -> BundleOptions {
        let palette = PaletteColors::from_hex("#306E5E", "#4A8E7A", "#FF6719", "#FFFFFF")
            .unwrap()
            .resolve();
        BundleOptions::new("Acme", palette)
    }

    fn paths(bundle: &AssetBundle) -> Vec<&str> {
        bundle.files.iter().map(|f| f.path.as_str()).collect()
    }

    #[test]
    fn test_layout_without_pngs() {
        let bundle = AssetBundle::build_with(&options(), None).unwrap();
        let paths = paths(&bundle);

        assert_eq!(paths.len(), 6 + 5 + 4 + 4);
        assert_eq!(paths[0], "patterns/pattern-dots.svg");
        assert!(paths.contains(&"dividers/divider-zigzag.svg"));
        assert!(paths.contains(&"heroes/hero-wave-layers.svg"));
        assert!(paths.contains(&"favicon.svg"));
        assert!(paths.contains(&"site.webmanifest"));
        assert!(paths.contains(&"head.html"));
        assert!(paths.contains(&"rasterize-favicons.mjs"));
        assert!(!paths.iter().any(|p| p.ends_with(".png")));
    }

    #[test]
    fn test_layout_with_pngs() {
        let bundle = AssetBundle::build_with(&options(), Some(&SolidRasterizer)).unwrap();
        let pngs: Vec<&str> = paths(&bundle)
            .into_iter()
            .filter(|p| p.ends_with(".png"))
            .collect();

        assert_eq!(
            pngs,
            vec![
                "favicon-16x16.png",
                "favicon-32x32.png",
                "favicon-48x48.png",
                "apple-touch-icon.png",
                "favicon-192x192.png",
                "favicon-512x512.png",
            ]
        );
        assert!(bundle.file("rasterize-favicons.mjs").is_none());
        assert_eq!(
            bundle.file("apple-touch-icon.png").unwrap().contents,
            FileContents::Binary(vec![0x89, b'P', b'N', b'G', 180])
        );
    }

    #[test]
    fn test_selection_is_respected() {
        let mut opts = options();
        opts.patterns = vec![PatternType::Grid];
        opts.dividers = vec![];
        opts.heroes = vec![HeroType::Blob];

        let bundle = AssetBundle::build_with(&opts, None).unwrap();
        assert_eq!(bundle.manifest.entries(AssetCategory::Pattern).count(), 1);
        assert_eq!(bundle.manifest.entries(AssetCategory::Divider).count(), 0);
        assert_eq!(bundle.manifest.entries(AssetCategory::Hero).count(), 1);
        assert!(bundle.file("heroes/hero-blob.svg").is_some());
    }

    #[test]
    fn test_manifest_matches_files() {
        let bundle = AssetBundle::build_with(&options(), Some(&SolidRasterizer)).unwrap();
        let listed: Vec<&str> = bundle.manifest.assets.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(listed, paths(&bundle));
        assert_eq!(bundle.manifest.head_tags.as_deref(), Some(HEAD_TAGS));

        let dots = &bundle.manifest.assets[0];
        assert_eq!(dots.category, AssetCategory::Pattern);
        assert!(dots.usage.as_deref().unwrap().contains("background-image"));
    }

    #[test]
    fn test_usage_points_at_bundled_file() {
        let bundle = AssetBundle::build_with(&options(), None).unwrap();
        let linked = bundle
            .manifest
            .assets
            .iter()
            .filter(|e| matches!(e.category, AssetCategory::Divider | AssetCategory::Hero));

        let mut checked = 0;
        for entry in linked {
            let usage = entry.usage.as_deref().unwrap();
            assert!(usage.contains(&entry.path), "{}: {}", entry.path, usage);
            assert!(bundle.file(&entry.path).is_some());
            checked += 1;
        }
        assert_eq!(checked, 9);
    }

    #[test]
    fn test_favicon_background_override() {
        let mut opts = options();
        opts.favicon_background = Some(Colour::rgb(0x10, 0x10, 0x10));
        let bundle = AssetBundle::build_with(&opts, None).unwrap();
        let FileContents::Text(manifest) = &bundle.file("site.webmanifest").unwrap().contents else {
            panic!("webmanifest should be text");
        };
        assert!(manifest.contains("\"background_color\": \"#101010\""));
    }

    #[test]
    fn test_write_to_directory() {
        let dir = tempdir().unwrap();
        let bundle = AssetBundle::build_with(&options(), Some(&SolidRasterizer)).unwrap();
        let written = bundle.write_to(dir.path()).unwrap();

        assert_eq!(written.len(), bundle.files.len() + 1);
        assert!(dir.path().join("patterns/pattern-waves.svg").exists());
        assert!(dir.path().join("heroes/hero-geometric.svg").exists());
        assert_eq!(
            fs::read(dir.path().join("favicon-32x32.png")).unwrap(),
            vec![0x89, b'P', b'N', b'G', 32]
        );

        let manifest = fs::read_to_string(dir.path().join(MANIFEST_FILE)).unwrap();
        let json: serde_json::Value = serde_json::from_str(&manifest).unwrap();
        assert_eq!(json["name"], "Acme");
    }

    #[test]
    fn test_json_payload_encodes_binaries() {
        let bundle = AssetBundle::build_with(&options(), Some(&SolidRasterizer)).unwrap();
        let json: serde_json::Value = serde_json::from_str(&bundle.to_json().unwrap()).unwrap();

        let png = json["files"]["favicon-16x16.png"].as_str().unwrap();
        assert_eq!(STANDARD.decode(png).unwrap(), vec![0x89, b'P', b'N', b'G', 16]);
        assert!(json["files"]["favicon.svg"].as_str().unwrap().starts_with("<svg"));
        assert_eq!(json["manifest"]["assets"][0]["path"], "patterns/pattern-dots.svg");
    }

    #[test]
    fn test_bundle_is_deterministic() {
        let a = AssetBundle::build_with(&options(), None).unwrap().to_json().unwrap();
        let b = AssetBundle::build_with(&options(), None).unwrap().to_json().unwrap();
        assert_eq!(a, b);
    }
}
