//! `filmclut` — applies Hald CLUT film simulations to still images.
//!
//! **Usage:**
//! ```text
//! filmclut apply --clut "Fuji Velvia 50.png" --input test.jpg --output out.jpg
//! filmclut identity [--level 8] --output hald_8.png
//! ```
//!
//! `FILMCLUT_LOG` sets the log filter, `FILMCLUT_THREADS` the worker count.

mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use filmclut_core::HaldClut;
use filmclut_core::io::{apply_to_file, save_image};
use tracing_subscriber::EnvFilter;

use config::{CliConfig, DEFAULT_IDENTITY_LEVEL};

/// Hald CLUT film simulation.
#[derive(Parser)]
#[command(name = "filmclut", about = "Apply Hald CLUT film simulations to images")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Filter an image through a Hald CLUT.
    Apply {
        /// Hald CLUT image (N³ × N³ pixels).
        #[arg(long)]
        clut: PathBuf,
        /// Source image.
        #[arg(long)]
        input: PathBuf,
        /// Destination; format follows the extension.
        #[arg(long)]
        output: PathBuf,
    },
    /// Write an identity Hald CLUT, the starting point for new looks.
    Identity {
        /// Hald level (2..=16); the image side is level³.
        #[arg(long, default_value_t = DEFAULT_IDENTITY_LEVEL)]
        level: u32,
        /// Destination PNG.
        #[arg(long)]
        output: PathBuf,
    },
}

fn init_tracing(config: &CliConfig) {
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| {
        eprintln!("invalid FILMCLUT_LOG '{}', using 'info'", config.log_filter);
        EnvFilter::new("info")
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn init_thread_pool(config: &CliConfig) -> Result<()> {
    if let Some(threads) = config.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure worker threads")?;
        tracing::debug!("using {threads} worker threads");
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = CliConfig::default();
    init_tracing(&config);
    init_thread_pool(&config)?;

    match args.command {
        Command::Apply {
            clut,
            input,
            output,
        } => {
            apply_to_file(&clut, &input, &output).with_context(|| {
                format!(
                    "Failed to apply {} to {}",
                    clut.display(),
                    input.display()
                )
            })?;
            println!("Written: {}", output.display());
        }
        Command::Identity { level, output } => {
            let clut = HaldClut::identity(level)
                .with_context(|| format!("Failed to build level-{level} identity CLUT"))?;
            save_image(&clut.to_rgb_image(), &output)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            tracing::info!(
                "identity CLUT level {level} ({}x{})",
                clut.geometry().image_side(),
                clut.geometry().image_side()
            );
            println!("Written: {}", output.display());
        }
    }

    Ok(())
}
