//! # Calculator State
//!
//! Registry of open calculator widgets.
//!
//! ## Thread Safety
//! The registry is wrapped in `Arc<Mutex<T>>` because:
//! 1. Several commands may address calculators at once
//! 2. Each transition must run to completion before the next one starts
//!
//! Every widget owns its own [`Calculator`]; widgets never share state.
//!
//! ## Widget Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Widget Operations                                    │
//! │                                                                         │
//! │  UI Action              Command               Registry Change           │
//! │  ─────────              ───────               ───────────────           │
//! │  Open calculator ─────► open_calculator() ──► insert(id, new engine)    │
//! │  Press key ───────────► press_key() ────────► engine.press(key)         │
//! │  Close widget ────────► close_calculator() ─► remove(id)                │
//! │                                                                         │
//! │  NOTE: All operations hold the lock only for one transition.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use abacus_core::Calculator;
use uuid::Uuid;

/// Managed registry of calculator widgets.
#[derive(Debug, Clone)]
pub struct CalculatorState {
    widgets: Arc<Mutex<HashMap<Uuid, Calculator>>>,
    max_widgets: usize,
}

impl CalculatorState {
    /// Creates an empty registry holding at most `max_widgets` calculators.
    pub fn new(max_widgets: usize) -> Self {
        CalculatorState {
            widgets: Arc::new(Mutex::new(HashMap::new())),
            max_widgets,
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, Calculator>> {
        // Engine transitions cannot panic half-way, so a poisoned map is
        // still consistent.
        self.widgets.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Opens a new calculator and returns its id, or `None` when the
    /// registry is full.
    pub fn open(&self) -> Option<Uuid> {
        let mut widgets = self.lock();
        if widgets.len() >= self.max_widgets {
            return None;
        }
        let id = Uuid::new_v4();
        widgets.insert(id, Calculator::new());
        Some(id)
    }

    /// Closes a calculator. Returns `false` if the id was unknown.
    pub fn close(&self, id: &Uuid) -> bool {
        self.lock().remove(id).is_some()
    }

    /// Ids of every open calculator.
    pub fn ids(&self) -> Vec<Uuid> {
        self.lock().keys().copied().collect()
    }

    /// Number of open calculators.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Executes a function with read access to one calculator.
    pub fn with_calculator<F, R>(&self, id: &Uuid, f: F) -> Option<R>
    where
        F: FnOnce(&Calculator) -> R,
    {
        self.lock().get(id).map(f)
    }

    /// Executes a function with write access to one calculator.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// state.with_calculator_mut(&id, |calc| calc.press(key).to_string());
    /// ```
    pub fn with_calculator_mut<F, R>(&self, id: &Uuid, f: F) -> Option<R>
    where
        F: FnOnce(&mut Calculator) -> R,
    {
        self.lock().get_mut(id).map(f)
    }
}
