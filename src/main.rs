//! panel-export - LED matrix asset export tool
//!
//! Converts an animated image (GIF, APNG, or any static image) into the hex
//! memory image a 64x64 1/32-scan RGB matrix driver loads with `$readmemh`.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use panel_export::{convert_animation, HEX_EXT};

#[derive(Parser)]
#[command(name = "panel-export")]
#[command(about = "LED matrix asset export tool")]
#[command(version)]
struct Cli {
    /// Input animation (GIF, APNG, or a static image)
    input: PathBuf,

    /// Output hex memory image (defaults to the input path with a .hex extension)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let output = cli
        .output
        .unwrap_or_else(|| cli.input.with_extension(HEX_EXT));
    tracing::info!("Converting {:?} -> {:?}", cli.input, output);

    let converted = convert_animation(&cli.input, &output)?;

    println!(
        "Generated {} with {} frames.",
        output.display(),
        converted.frame_count
    );
    println!("Total hex lines: {}", converted.words.len());

    Ok(())
}
