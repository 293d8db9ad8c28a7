//! # Calcicon CLI
//!
//! Command-line interface for generating PWA icons and serving the app.
//!
//! ## Usage
//!
//! ```bash
//! # Write all PWA icon sizes into ./icons
//! calcicon generate
//!
//! # Rasterize an SVG instead of drawing the glyph
//! calcicon generate --svg icons/icon.svg --out icons
//!
//! # Only a couple of sizes, no manifest fragment
//! calcicon generate --sizes 192,512 --no-manifest
//!
//! # Render the 200px logo
//! calcicon logo --out logo.png
//!
//! # Serve the current directory on port 8000
//! calcicon serve
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use calcicon::{
    IconError,
    batch::{self, BatchConfig},
    icon::{CalculatorIcon, IconRenderer, Palette, SvgIcon},
    server::{self, ServerConfig},
};

/// Calcicon - PWA icon generator and local server
#[derive(Parser, Debug)]
#[command(name = "calcicon")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the PWA icon set
    Generate {
        /// Output directory
        #[arg(long, default_value = "icons")]
        out: PathBuf,

        /// Comma-separated edge lengths (defaults to all PWA sizes)
        #[arg(long, value_delimiter = ',')]
        sizes: Option<Vec<u32>>,

        /// Rasterize this SVG instead of drawing the calculator glyph
        #[arg(long, value_name = "FILE")]
        svg: Option<PathBuf>,

        /// Skip writing the icons.json manifest fragment
        #[arg(long)]
        no_manifest: bool,
    },

    /// Render a single square logo
    Logo {
        /// Output PNG file
        #[arg(long, default_value = "logo.png")]
        out: PathBuf,

        /// Edge length in pixels
        #[arg(long, default_value = "200", allow_negative_numbers = true)]
        size: i64,

        /// Rasterize this SVG instead of drawing the calculator glyph
        #[arg(long, value_name = "FILE")]
        svg: Option<PathBuf>,
    },

    /// Serve a directory with PWA headers
    Serve {
        /// Directory to serve
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Address to listen on
        #[arg(long, default_value = "0.0.0.0:8000")]
        listen: String,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), IconError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            out,
            sizes,
            svg,
            no_manifest,
        } => {
            let renderer = renderer_for(svg.as_ref(), Palette::default())?;
            let mut config = BatchConfig::new(out);
            if let Some(sizes) = sizes {
                config.sizes = sizes;
            }
            config.write_manifest = !no_manifest;

            println!(
                "Generating {} icons with the {} renderer into {}...",
                config.sizes.len(),
                renderer.name(),
                config.output_dir.display()
            );
            let report = batch::generate(renderer.as_ref(), &config);

            println!();
            if report.is_success() {
                println!("All {} icons generated successfully!", report.succeeded());
            } else {
                println!(
                    "{} icons generated, {} failed",
                    report.succeeded(),
                    report.failed()
                );
            }
        }
        Commands::Logo { out, size, svg } => {
            let renderer = renderer_for(svg.as_ref(), Palette::logo())?;
            let image = renderer.render(size)?;
            image.save_with_format(&out, image::ImageFormat::Png)?;
            println!("Saved {}x{} logo to {}", size, size, out.display());
        }
        Commands::Serve { root, listen } => {
            let config = ServerConfig {
                root,
                listen_addr: listen,
            };
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(config))?;
        }
    }

    Ok(())
}

/// Pick the SVG renderer when a file is given, else the drawn glyph.
fn renderer_for(
    svg: Option<&PathBuf>,
    palette: Palette,
) -> Result<Box<dyn IconRenderer>, IconError> {
    match svg {
        Some(path) => Ok(Box::new(SvgIcon::open(path)?)),
        None => Ok(Box::new(CalculatorIcon::new(palette))),
    }
}
