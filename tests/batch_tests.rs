//! # Batch Tests
//!
//! End-to-end runs of the batch driver against a temporary directory,
//! decoding every written PNG to check its dimensions and pixel format.

use calcicon::batch::{self, BatchConfig, MANIFEST_FILE, icon_file_name};
use calcicon::icon::{CalculatorIcon, IconRenderer, SvgIcon};
use calcicon::REQUIRED_SIZES;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;

/// Sorted file names in a directory.
fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Decode a written icon and check it against its size.
fn check_icon(dir: &Path, size: u32) {
    let path = dir.join(icon_file_name(size));
    let decoded = image::open(&path).unwrap_or_else(|e| panic!("{}: {}", path.display(), e));
    assert_eq!((decoded.width(), decoded.height()), (size, size));
    assert!(decoded.color().has_alpha(), "{} lacks alpha", path.display());
}

#[test]
fn test_generates_all_required_sizes() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = BatchConfig::new(dir.path());
    config.write_manifest = false;

    let report = batch::generate(&CalculatorIcon::default(), &config);
    assert!(report.is_success());
    assert_eq!(report.succeeded(), 8);

    let mut expected: Vec<String> = REQUIRED_SIZES.iter().map(|&s| icon_file_name(s)).collect();
    expected.sort();
    assert_eq!(file_names(dir.path()), expected);

    for size in REQUIRED_SIZES {
        check_icon(dir.path(), size);
    }
}

#[test]
fn test_written_png_matches_render() {
    let dir = tempfile::tempdir().unwrap();
    let config = BatchConfig {
        sizes: vec![96],
        output_dir: dir.path().to_path_buf(),
        write_manifest: false,
    };
    let renderer = CalculatorIcon::default();
    batch::generate(&renderer, &config);

    let written = image::open(dir.path().join("icon-96x96.png")).unwrap().to_rgba8();
    let rendered = renderer.render(96).unwrap();
    assert_eq!(written.as_raw(), rendered.as_raw());
}

#[test]
fn test_rerun_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("icon-72x72.png");
    fs::write(&path, b"stale").unwrap();

    let config = BatchConfig {
        sizes: vec![72],
        output_dir: dir.path().to_path_buf(),
        write_manifest: false,
    };
    let report = batch::generate(&CalculatorIcon::default(), &config);
    assert!(report.is_success());
    check_icon(dir.path(), 72);
}

#[test]
fn test_manifest_lists_successful_sizes() {
    let dir = tempfile::tempdir().unwrap();
    let config = BatchConfig {
        sizes: vec![192, 0, 512],
        output_dir: dir.path().to_path_buf(),
        write_manifest: true,
    };
    let report = batch::generate(&CalculatorIcon::default(), &config);
    assert_eq!(report.failed(), 1);
    assert_eq!(report.manifest.as_deref(), Some(dir.path().join(MANIFEST_FILE).as_path()));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join(MANIFEST_FILE)).unwrap()).unwrap();
    let srcs: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|icon| icon["src"].as_str().unwrap())
        .collect();
    assert_eq!(srcs, vec!["icons/icon-192x192.png", "icons/icon-512x512.png"]);
}

#[test]
fn test_svg_renderer_batch() {
    let dir = tempfile::tempdir().unwrap();
    let config = BatchConfig {
        sizes: vec![72, 144],
        output_dir: dir.path().to_path_buf(),
        write_manifest: false,
    };
    let report = batch::generate(&SvgIcon::builtin().unwrap(), &config);
    assert!(report.is_success());
    check_icon(dir.path(), 72);
    check_icon(dir.path(), 144);
}
