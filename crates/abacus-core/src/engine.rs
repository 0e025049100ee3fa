//! # Calculator Engine
//!
//! The transition controller: routes each key to the entry buffer, the
//! pending operation, and the evaluator.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │        digit / . / CE                           digit / . / CE          │
//! │         ┌────────┐                               ┌────────┐             │
//! │         ▼        │         operator              ▼        │             │
//! │     ┌──────────────┐ ──────────────────────► ┌──────────────┐           │
//! │     │     Idle     │                         │   Chained    │ ◄─┐       │
//! │     │ no operator  │ ◄────────────────────── │ operand + op │   │ op    │
//! │     └──────────────┘       = or C            └──────────────┘ ──┘       │
//! │                                            (evaluates left to right)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no precedence. `3 + 4 × 2 =` is `(3 + 4) × 2 = 14`: pressing `×`
//! immediately folds `3 + 4` into `7`.

use crate::entry::EntryBuffer;
use crate::evaluator::evaluate;
use crate::types::{CalculatorSnapshot, Digit, EntryMode, Key, Operator, Phase};

/// Left-hand operand and operator waiting for a second operand.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct PendingOperation {
    operand: Option<f64>,
    operator: Option<Operator>,
}

/// One calculator instance.
///
/// Instances are plain values with no shared state; any number of them can
/// live side by side.
///
/// ## Example
/// ```rust
/// use abacus_core::{Calculator, Digit, Operator};
///
/// let mut calc = Calculator::new();
/// calc.input_digit(Digit::try_from('3').unwrap());
/// calc.input_operator(Operator::Add);
/// calc.input_digit(Digit::try_from('4').unwrap());
/// calc.input_operator(Operator::Multiply);
/// calc.input_digit(Digit::try_from('2').unwrap());
/// assert_eq!(calc.equals(), "14");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Calculator {
    entry: EntryBuffer,
    pending: PendingOperation,
}

impl Calculator {
    /// Creates an engine showing `0` with no pending operation.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Text currently on the display.
    #[inline]
    pub fn display(&self) -> &str {
        self.entry.display()
    }

    #[inline]
    pub fn pending_operand(&self) -> Option<f64> {
        self.pending.operand
    }

    #[inline]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending.operator
    }

    #[inline]
    pub fn entry_mode(&self) -> EntryMode {
        self.entry.mode()
    }

    /// `Chained` while an operator is pending, `Idle` otherwise.
    pub fn phase(&self) -> Phase {
        if self.pending.operator.is_some() {
            Phase::Chained
        } else {
            Phase::Idle
        }
    }

    /// Serializable view for the presentation layer.
    pub fn snapshot(&self) -> CalculatorSnapshot {
        CalculatorSnapshot {
            display: self.display().to_string(),
            pending_operand: self.pending.operand,
            pending_operator: self.pending.operator,
            entry_mode: self.entry_mode(),
            showing_result: self.entry.showing_result(),
            phase: self.phase(),
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Types a digit.
    pub fn input_digit(&mut self, digit: Digit) -> &str {
        self.entry.input_digit(digit);
        self.display()
    }

    /// Types a decimal point.
    pub fn input_decimal_point(&mut self) -> &str {
        self.entry.input_decimal_point();
        self.display()
    }

    /// Presses a binary operator.
    ///
    /// ## Behavior
    /// - No pending operand: the display becomes the pending operand
    /// - Operand and operator pending: `operand op display` is evaluated
    ///   right away and becomes both the display and the new operand
    /// - Either way `op` becomes the pending operator and the next digit
    ///   starts a fresh operand
    ///
    /// Pressing two operators in a row evaluates against the displayed
    /// value again: `3 + ×` shows `6`.
    pub fn input_operator(&mut self, op: Operator) -> &str {
        let value = self.entry.value();

        match (self.pending.operand, self.pending.operator) {
            (None, _) => self.pending.operand = Some(value),
            (Some(operand), Some(previous)) => {
                let result = evaluate(operand, previous, value);
                self.entry.show_result(result);
                self.pending.operand = Some(result);
            }
            (Some(_), None) => {}
        }

        self.pending.operator = Some(op);
        self.entry.await_operand();
        self.display()
    }

    /// Completes the pending operation, if there is one.
    ///
    /// With nothing pending this is a no-op: `7 =` leaves `7` on screen.
    pub fn equals(&mut self) -> &str {
        if let (Some(operand), Some(op)) = (self.pending.operand, self.pending.operator) {
            let result = evaluate(operand, op, self.entry.value());
            self.entry.show_result(result);
            self.pending = PendingOperation::default();
        }
        self.display()
    }

    /// Resets everything to the initial state.
    pub fn clear(&mut self) -> &str {
        *self = Calculator::new();
        self.display()
    }

    /// Resets only the display, keeping any pending chain.
    pub fn clear_entry(&mut self) -> &str {
        self.entry.clear_entry();
        self.display()
    }

    /// Dispatches one key to the matching operation.
    pub fn press(&mut self, key: Key) -> &str {
        match key {
            Key::Digit(digit) => self.input_digit(digit),
            Key::DecimalPoint => self.input_decimal_point(),
            Key::Operator(op) => self.input_operator(op),
            Key::Equals => self.equals(),
            Key::Clear => self.clear(),
            Key::ClearEntry => self.clear_entry(),
        }
    }

    /// Presses every key in order and returns the final display.
    pub fn press_all<I>(&mut self, keys: I) -> &str
    where
        I: IntoIterator<Item = Key>,
    {
        for key in keys {
            self.press(key);
        }
        self.display()
    }
}

/// Pure transition: the state after pressing `key` in `state`.
///
/// ## Example
/// ```rust
/// use abacus_core::{transition, Calculator, Key};
///
/// let before = Calculator::new();
/// let after = transition(&before, Key::DecimalPoint);
/// assert_eq!(before.display(), "0");
/// assert_eq!(after.display(), "0.");
/// ```
pub fn transition(state: &Calculator, key: Key) -> Calculator {
    let mut next = state.clone();
    next.press(key);
    next
}
