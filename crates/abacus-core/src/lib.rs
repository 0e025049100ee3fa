//! # abacus-core: Calculator Engine for Abacus
//!
//! This crate is the **heart** of Abacus. It contains the immediate-execution
//! calculator engine as plain values and pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Abacus Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Presentation (apps/abacus-cli)                     │   │
//! │  │    REPL / one-shot ──► commands ──► CalculatorState registry    │   │
//! │  │    config, logging, usage sinks                                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Key                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ abacus-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   entry   │  │  engine   │  │ evaluator │  │  format   │  │   │
//! │  │   │  buffer   │  │ pending + │  │  a op b   │  │ shortest  │  │   │
//! │  │   │  & mode   │  │ controller│  │           │  │ round-trip│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO SHARED STATE                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Digit, Operator, EntryMode, Key, snapshots
//! - [`entry`] - Entry buffer (display text + entry mode)
//! - [`evaluator`] - Binary operator evaluation
//! - [`engine`] - The calculator and its transition controller
//! - [`format`] - Result-to-text formatting
//! - [`input`] - Parsing keypad tokens and keyboard keys
//! - [`error`] - Input parsing errors
//!
//! ## Design Principles
//!
//! 1. **Left to right**: operators evaluate immediately, there is no precedence
//! 2. **No error channel in the engine**: the display is always parseable and
//!    division by zero shows `Infinity`/`NaN` instead of failing
//! 3. **Plain values**: a [`Calculator`] is an ordinary struct; whoever needs
//!    sharing wraps it
//!
//! ## Example Usage
//!
//! ```rust
//! use abacus_core::{parse_keys, Calculator};
//!
//! let mut calc = Calculator::new();
//! calc.press_all(parse_keys("3 + 4 × 2").unwrap());
//! assert_eq!(calc.equals(), "14");
//!
//! calc.press_all(parse_keys("5 ÷ 0").unwrap());
//! assert_eq!(calc.equals(), "Infinity");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod engine;
pub mod entry;
pub mod error;
pub mod evaluator;
pub mod format;
pub mod input;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use engine::{transition, Calculator};
pub use entry::EntryBuffer;
pub use error::{CoreError, CoreResult};
pub use evaluator::evaluate;
pub use format::format_number;
pub use input::parse_keys;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// What the display shows after start-up, `C` and `CE`.
pub const INITIAL_DISPLAY: &str = "0";
