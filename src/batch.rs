//! # Batch Icon Generation
//!
//! Renders one icon per requested size and writes each to
//! `icon-{S}x{S}.png` under the output directory. Sizes are independent:
//! they render in parallel and a failure on one never stops the others.
//!
//! ## Example
//!
//! ```no_run
//! use calcicon::batch::{self, BatchConfig};
//! use calcicon::icon::CalculatorIcon;
//!
//! let config = BatchConfig::new("icons");
//! let report = batch::generate(&CalculatorIcon::default(), &config);
//! println!("{} of {} icons written", report.succeeded(), report.outcomes.len());
//! ```

use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::IconError;
use crate::icon::{IconRenderer, REQUIRED_SIZES};

/// Name of the manifest fragment written next to the icons.
pub const MANIFEST_FILE: &str = "icons.json";

/// What to generate and where.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Edge lengths to render
    pub sizes: Vec<u32>,
    /// Directory receiving the PNG files (created if missing)
    pub output_dir: PathBuf,
    /// Also write an `icons.json` manifest fragment
    pub write_manifest: bool,
}

impl BatchConfig {
    /// All required PWA sizes into `output_dir`, with a manifest fragment.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            sizes: REQUIRED_SIZES.to_vec(),
            output_dir: output_dir.into(),
            write_manifest: true,
        }
    }
}

/// Result of one size.
#[derive(Debug)]
pub struct IconOutcome {
    pub size: u32,
    pub path: PathBuf,
    pub result: Result<(), IconError>,
}

/// Per-size outcomes, sorted by size.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<IconOutcome>,
    /// Manifest path, when one was written
    pub manifest: Option<PathBuf>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

/// One entry of a web app manifest `icons` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime: String,
    pub purpose: String,
}

impl ManifestIcon {
    pub fn for_size(size: u32) -> Self {
        Self {
            src: format!("icons/{}", icon_file_name(size)),
            sizes: format!("{}x{}", size, size),
            mime: "image/png".to_string(),
            purpose: "any maskable".to_string(),
        }
    }
}

/// File name for an icon of the given size.
pub fn icon_file_name(size: u32) -> String {
    format!("icon-{}x{}.png", size, size)
}

/// Render and write every configured size.
///
/// Prints one line per size. Repeated sizes are rendered once, so no two
/// workers ever write the same file. Never fails as a whole; inspect the
/// report.
pub fn generate(renderer: &dyn IconRenderer, config: &BatchConfig) -> BatchReport {
    let dir_ready = std::fs::create_dir_all(&config.output_dir);

    let mut sizes = config.sizes.clone();
    sizes.sort_unstable();
    sizes.dedup();

    let mut outcomes: Vec<IconOutcome> = sizes
        .par_iter()
        .map(|&size| {
            let path = config.output_dir.join(icon_file_name(size));
            let result = match &dir_ready {
                Ok(()) => write_icon(renderer, size, &path),
                Err(e) => Err(IconError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to create {}: {}", config.output_dir.display(), e),
                ))),
            };
            report_outcome(size, &path, &result);
            IconOutcome { size, path, result }
        })
        .collect();
    outcomes.sort_by_key(|o| o.size);

    let mut report = BatchReport {
        outcomes,
        manifest: None,
    };

    if config.write_manifest && report.succeeded() > 0 {
        let path = config.output_dir.join(MANIFEST_FILE);
        match write_manifest(&report, &path) {
            Ok(()) => {
                println!("[icons] wrote {}", path.display());
                report.manifest = Some(path);
            }
            Err(e) => eprintln!("[icons] failed to write {}: {}", path.display(), e),
        }
    }

    report
}

/// Render a single size and save it as PNG, overwriting any existing file.
pub fn write_icon(renderer: &dyn IconRenderer, size: u32, path: &Path) -> Result<(), IconError> {
    let image = renderer.render(i64::from(size))?;
    image.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

fn report_outcome(size: u32, path: &Path, result: &Result<(), IconError>) {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    match result {
        Ok(()) => println!("[icons] wrote {} ({}x{})", name, size, size),
        Err(e) => eprintln!("[icons] failed {}x{}: {}", size, size, e),
    }
}

fn write_manifest(report: &BatchReport, path: &Path) -> Result<(), IconError> {
    let icons: Vec<ManifestIcon> = report
        .outcomes
        .iter()
        .filter(|o| o.result.is_ok())
        .map(|o| ManifestIcon::for_size(o.size))
        .collect();
    let json = serde_json::to_string_pretty(&icons)?;
    std::fs::write(path, json)?;
    Ok(())
}
