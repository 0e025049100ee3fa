//! # State Module
//!
//! Manages application state for the presentation layer.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────┐        ┌──────────────────────┐               │
//! │  │   CalculatorState    │        │     ConfigState      │               │
//! │  │                      │        │                      │               │
//! │  │  Arc<Mutex<          │        │  display precision   │               │
//! │  │    HashMap<Uuid,     │        │  analytics settings  │               │
//! │  │      Calculator>>>   │        │  session limits      │               │
//! │  └──────────────────────┘        └──────────────────────┘               │
//! │                                                                         │
//! │  THREAD SAFETY:                                                         │
//! │  • CalculatorState: Arc<Mutex<T>> for exclusive access per transition   │
//! │  • ConfigState: Read-only after initialization                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod calculator;
mod config;

pub use calculator::CalculatorState;
pub use config::{
    AnalyticsSettings, ConfigError, ConfigState, DisplaySettings, SessionSettings, MAX_PRECISION,
};
