//! # Abacus Entry Point
//!
//! ## Startup Sequence
//! 1. Parse arguments
//! 2. Initialize tracing (logging)
//! 3. Load configuration (defaults → abacus.toml → ABACUS_* env)
//! 4. Open a calculator session
//! 5. Evaluate `--keys` once, or run the REPL on stdin

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use abacus_cli::repl::{self, Session};
use abacus_cli::state::ConfigState;
use abacus_cli::usage::TracingSink;
use anyhow::Result;
use clap::Parser;
use tracing::info;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Immediate-execution calculator",
    long_about = "Immediate-execution calculator. Keys are separated by spaces: \
                  digits, '.', + - × ÷ (or * / x), =, C, CE."
)]
struct Args {
    /// Key sequence to evaluate once, e.g. "3 + 4 × 2 ="
    #[arg(short, long)]
    keys: Option<String>,

    /// Path to abacus.toml
    #[arg(short, long, env = "ABACUS_CONFIG")]
    config: Option<PathBuf>,

    /// Print full snapshots as JSON instead of the display text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    abacus_cli::init_tracing();

    // A path the user named must load; a broken platform file only warns.
    let config = match args.config {
        Some(path) => ConfigState::load(Some(path))?,
        None => ConfigState::load_or_default(None),
    };
    info!(
        precision = ?config.display.precision,
        analytics = config.analytics.enabled,
        "Configuration loaded"
    );

    let session = Session::new(config, Arc::new(TracingSink), args.json)?;

    match args.keys {
        Some(keys) => {
            let text = session.evaluate(&keys)?;
            println!("{}", text);
        }
        None => {
            let stdin = io::stdin();
            repl::run(&session, stdin.lock(), io::stdout())?;
        }
    }

    Ok(())
}
