//! # Calcicon - PWA Icon Toolkit
//!
//! Calcicon produces the icon set for the calculator web app and serves the
//! app locally for testing. It provides:
//!
//! - **Icon rendering**: a hand-drawn calculator glyph and an SVG rasterizer
//!   behind one [`icon::IconRenderer`] trait
//! - **Batch generation**: every PWA size written as `icon-{S}x{S}.png`
//! - **Static serving**: a directory server with service-worker headers
//!
//! ## Quick Start
//!
//! ```no_run
//! use calcicon::{
//!     batch::{self, BatchConfig},
//!     icon::{CalculatorIcon, Palette},
//! };
//!
//! let renderer = CalculatorIcon::new(Palette::default());
//! let report = batch::generate(&renderer, &BatchConfig::new("icons"));
//! assert!(report.is_success());
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`icon`] | Renderers, layout and canvas |
//! | [`batch`] | Multi-size generation and manifest fragment |
//! | [`server`] | Static file server |
//! | [`error`] | Error types |

pub mod batch;
pub mod error;
pub mod icon;
pub mod server;

// Re-exports for convenience
pub use error::IconError;
pub use icon::{IconRenderer, REQUIRED_SIZES};
