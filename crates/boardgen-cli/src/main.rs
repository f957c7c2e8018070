//! Kopiatan board generator.
//!
//! Reads `<boards-dir>/<NAME>.txt` and writes the engine header (or JSON graph)
//! for it to `<out-dir>`.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod generate;

use generate::{Format, Options};

/// Compile an ASCII hex board into engine graph construction code.
#[derive(Debug, Parser)]
#[command(name = "boardgen", version, about)]
struct Args {
    /// Board name (an identifier); reads <NAME>.txt and generates <NAME>Board
    name: String,

    /// Directory holding board texts
    #[arg(long, env = "BOARDGEN_BOARDS_DIR", default_value = "boards")]
    boards_dir: PathBuf,

    /// Directory generated files are written to
    #[arg(long, env = "BOARDGEN_OUT_DIR", default_value = "generated")]
    out_dir: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Header)]
    format: Format,

    /// Fail when a link cannot be followed back
    #[arg(long)]
    strict: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let options = Options {
        name: args.name,
        boards_dir: args.boards_dir,
        out_dir: args.out_dir,
        format: args.format,
        strict: args.strict,
    };

    let written = generate::run(&options)?;
    info!("Wrote {}", written.display());
    Ok(())
}
