use chroma_key::{Rgb, Tolerance};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use logo_keyer::models::{AppConfig, ConfigSource, RemoveBgOverrides};
use logo_keyer::services::{self, RemovalRequest};

#[derive(Parser)]
#[command(name = "logo-keyer")]
#[command(about = "Inspect logo images and remove flat backgrounds")]
struct Cli {
    /// YAML config file (overrides CONFIG_FILE and ./logo-keyer.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print image size and RGBA values at corners and edge midpoints
    Inspect {
        /// Image to inspect (defaults to inspect.path from config)
        path: Option<PathBuf>,
    },
    /// Make pixels close to the background color transparent and crop
    RemoveBg {
        /// Input image (defaults to remove_bg.input from config)
        input: Option<PathBuf>,

        /// Output PNG path (defaults to remove_bg.output from config)
        output: Option<PathBuf>,

        /// Summed per-channel distance below which a pixel is background
        #[arg(short, long)]
        tolerance: Option<Tolerance>,

        /// Background color as hex RGB (e.g. "#FFFFFF"); default samples pixel (0, 0)
        #[arg(short, long)]
        background: Option<Rgb>,

        /// Crop to visible content (the default unless the config says otherwise)
        #[arg(long, overrides_with = "no_crop")]
        crop: bool,

        /// Keep the full canvas instead of cropping to visible content
        #[arg(long, overrides_with = "crop")]
        no_crop: bool,

        /// Re-compress the output PNG with oxipng
        #[arg(long, overrides_with = "no_optimize")]
        optimize: bool,

        /// Write the PNG as encoded, even if the config enables optimization
        #[arg(long, overrides_with = "optimize")]
        no_optimize: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "logo_keyer=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let source = ConfigSource::locate(cli.config);

    match cli.command {
        Some(Commands::Inspect { path }) => run_inspect_command(path, &source),
        Some(Commands::RemoveBg {
            input,
            output,
            tolerance,
            background,
            crop,
            no_crop,
            optimize,
            no_optimize,
        }) => {
            let overrides = RemoveBgOverrides {
                input,
                output,
                tolerance,
                background,
                crop: flag_pair(crop, no_crop),
                optimize: flag_pair(optimize, no_optimize),
            };
            run_remove_bg_command(overrides, &source)
        }
        None => run_status_command(&source),
    }
}

/// `Some(true)` for `--x`, `Some(false)` for `--no-x`, `None` when neither
/// was given. clap's `overrides_with` leaves at most one of them set.
fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// Inspect an image. Every failure, config errors included, is printed and
/// the command still exits successfully.
fn run_inspect_command(path: Option<PathBuf>, source: &ConfigSource) -> anyhow::Result<()> {
    match services::inspect_or_configured(path, source) {
        Ok(report) => print!("{report}"),
        Err(e) => println!("Error: {e}"),
    }
    Ok(())
}

/// Remove the background. Any failure aborts with a non-zero exit.
fn run_remove_bg_command(overrides: RemoveBgOverrides, source: &ConfigSource) -> anyhow::Result<()> {
    let config = AppConfig::load(source)?;
    let request = RemovalRequest::resolve(overrides, &config.remove_bg)?;

    let summary = services::remove_background(&request)?;
    println!("Saved to {}", summary.output.display());
    Ok(())
}

/// Display version and resolved configuration
fn run_status_command(source: &ConfigSource) -> anyhow::Result<()> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config = AppConfig::load(source)?;

    fn show(path: &Option<PathBuf>) -> String {
        path.as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(not set)".to_string())
    }

    let remove_bg = &config.remove_bg;
    let background = match remove_bg.background_color()? {
        Some(rgb) => rgb.to_hex(),
        None => "(pixel at 0,0)".to_string(),
    };

    println!("logo-keyer v{VERSION}\n");
    println!("Config: {source}\n");
    println!("inspect:");
    println!("  path       = {}", show(&config.inspect.path));
    println!("remove-bg:");
    println!("  input      = {}", show(&remove_bg.input));
    println!("  output     = {}", show(&remove_bg.output));
    println!("  tolerance  = {}", remove_bg.tolerance());
    println!("  background = {background}");
    println!("  crop       = {}", remove_bg.crop);
    println!("  optimize   = {}", remove_bg.optimize);
    println!("\nRun 'logo-keyer --help' for usage.");
    Ok(())
}
