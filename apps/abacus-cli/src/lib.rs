//! # Abacus CLI Library
//!
//! Presentation layer for the Abacus calculator engine: state wrappers,
//! configuration, usage observation, commands, and the REPL.
//!
//! ## Module Organization
//! ```text
//! abacus_cli/
//! ├── lib.rs          ◄─── You are here (logging setup & exports)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── calculator.rs ◄─ Calculator registry (Arc<Mutex<..>>)
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── calculator.rs ◄─ open / press / get / close
//! │   └── config.rs   ◄─── get_config
//! ├── usage.rs        ◄─── "tool used" events and sinks
//! ├── repl.rs         ◄─── Line-oriented front end
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Layering
//! The engine in `abacus-core` knows nothing about this crate. Everything
//! here calls into it and renders what it returns; nothing here changes how
//! a key is interpreted.

pub mod commands;
pub mod error;
pub mod repl;
pub mod state;
pub mod usage;

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so stdout carries only calculator output.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every command
/// - `RUST_LOG=abacus_cli::usage=info` - Show usage events only
/// - Default: `warn,abacus_cli=info`
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,abacus_cli=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
