//! # Entry Buffer
//!
//! Accumulates digit and decimal-point keystrokes into the display text.
//!
//! ## Keystroke Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Entry Buffer Transitions                            │
//! │                                                                         │
//! │  Key      Mode = AwaitingOperand        Mode = Continuing               │
//! │  ───      ──────────────────────        ─────────────────               │
//! │  digit    display = d                   "0" → d, else display + d       │
//! │           mode → Continuing                                             │
//! │                                                                         │
//! │  .        display = "0."                append "." unless present       │
//! │           mode → Continuing                                             │
//! │                                                                         │
//! │  CE       display = "0" (mode and pending chain untouched)              │
//! │                                                                         │
//! │  Any keystroke above also drops the "showing a result" flag.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The buffer only ever holds an intermediate numeric literal or a
//! formatted result, so [`EntryBuffer::value`] never has to report an error.

use crate::format::format_number;
use crate::types::{Digit, EntryMode};
use crate::INITIAL_DISPLAY;

/// The display text plus the mode deciding how the next keystroke lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryBuffer {
    display: String,
    mode: EntryMode,
    /// Set while the display holds an evaluation result rather than
    /// something the user typed.
    showing_result: bool,
}

impl EntryBuffer {
    /// Creates a buffer showing `0`, awaiting a fresh operand.
    pub fn new() -> Self {
        EntryBuffer {
            display: INITIAL_DISPLAY.to_string(),
            mode: EntryMode::AwaitingOperand,
            showing_result: false,
        }
    }

    /// Current display text.
    #[inline]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Current entry mode.
    #[inline]
    pub fn mode(&self) -> EntryMode {
        self.mode
    }

    /// Whether the display holds an evaluation result.
    #[inline]
    pub fn showing_result(&self) -> bool {
        self.showing_result
    }

    /// Applies a digit keystroke.
    ///
    /// ## Example
    /// ```rust
    /// use abacus_core::{Digit, EntryBuffer};
    ///
    /// let mut entry = EntryBuffer::new();
    /// entry.input_digit(Digit::try_from('0').unwrap());
    /// entry.input_digit(Digit::try_from('0').unwrap());
    /// entry.input_digit(Digit::try_from('5').unwrap());
    /// assert_eq!(entry.display(), "5");
    /// ```
    pub fn input_digit(&mut self, digit: Digit) {
        self.showing_result = false;
        match self.mode {
            EntryMode::AwaitingOperand => {
                self.display = digit.to_string();
                self.mode = EntryMode::Continuing;
            }
            EntryMode::Continuing => {
                if self.display == INITIAL_DISPLAY {
                    self.display = digit.to_string();
                } else {
                    self.display.push(digit.as_char());
                }
            }
        }
    }

    /// Applies a decimal-point keystroke. A second point in the same
    /// operand is ignored.
    pub fn input_decimal_point(&mut self) {
        self.showing_result = false;
        match self.mode {
            EntryMode::AwaitingOperand => {
                self.display = "0.".to_string();
                self.mode = EntryMode::Continuing;
            }
            EntryMode::Continuing => {
                if !self.display.contains('.') {
                    self.display.push('.');
                }
            }
        }
    }

    /// Resets the display to `0`, leaving the mode alone.
    pub fn clear_entry(&mut self) {
        self.display = INITIAL_DISPLAY.to_string();
        self.showing_result = false;
    }

    /// Shows an evaluation result. The next digit starts a new operand.
    pub fn show_result(&mut self, value: f64) {
        self.display = format_number(value);
        self.mode = EntryMode::AwaitingOperand;
        self.showing_result = true;
    }

    /// Marks the current display as complete so the next digit replaces it.
    /// A typed operand stays a typed operand.
    pub fn await_operand(&mut self) {
        self.mode = EntryMode::AwaitingOperand;
    }

    /// Numeric value of the display.
    ///
    /// Accepts everything the buffer can hold, including `0.`, `1e+21`,
    /// `Infinity` and `NaN`.
    pub fn value(&self) -> f64 {
        self.display.parse().unwrap_or(f64::NAN)
    }
}

impl Default for EntryBuffer {
    fn default() -> Self {
        Self::new()
    }
}
