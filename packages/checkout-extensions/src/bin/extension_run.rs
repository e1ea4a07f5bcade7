//! Runs a checkout extension against a host payload.
//!
//! Reads the JSON payload from `--input` (or stdin) and prints the result JSON
//! on stdout. Logs go to stderr so stdout stays machine readable.

use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use checkout_extensions::{cart_transform, long_delivery};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "extension_run")]
#[command(about = "Evaluate a checkout extension against a JSON payload")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand cart lines whose product links a free variant
    CartTransform {
        /// Payload file (defaults to stdin)
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// Decide whether the long delivery banner is shown
    LongDeliveryBanner {
        /// Payload file (defaults to stdin)
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

fn read_payload(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read payload from {}", path.display())),
        None => {
            let mut payload = String::new();
            io::stdin()
                .read_to_string(&mut payload)
                .context("Failed to read payload from stdin")?;
            Ok(payload)
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,checkout_extensions=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let output = match &cli.command {
        Commands::CartTransform { input } => {
            let payload = read_payload(input.as_ref())?;
            cart_transform::run_json(&payload).context("Cart transform failed")?
        }
        Commands::LongDeliveryBanner { input } => {
            let payload = read_payload(input.as_ref())?;
            long_delivery::render_json(&payload).context("Long delivery banner failed")?
        }
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", output).context("Failed to write result")?;

    Ok(())
}
