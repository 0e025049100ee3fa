//! # Commands Module
//!
//! All commands exposed to a front end (the bundled REPL, or any other UI).
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs         ◄─── You are here (exports)
//! ├── calculator.rs  ◄─── Open, drive, inspect, close calculators
//! └── config.rs      ◄─── Configuration retrieval
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the registry
//! fn close_calculator(calculators: &CalculatorState, widget_id: &str)
//!
//! // Registry, config for rendering, and a usage sink
//! fn press_key(calculators: &CalculatorState, config: &ConfigState,
//!              usage: &dyn UsageSink, widget_id: &str, key: &str)
//! ```

pub mod calculator;
pub mod config;
