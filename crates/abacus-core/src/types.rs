//! # Domain Types
//!
//! Typed vocabulary shared by the engine and its callers.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Digit       │   │    Operator     │   │   EntryMode     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  0..=9 (u8)     │   │  + - × ÷ =      │   │  AwaitingOperand│       │
//! │  └─────────────────┘   └─────────────────┘   │  Continuing     │       │
//! │                                              └─────────────────┘       │
//! │  ┌─────────────────┐   ┌──────────────────────────────────────────┐    │
//! │  │      Key        │   │          CalculatorSnapshot              │    │
//! │  │  ─────────────  │   │  ──────────────────────────────────────  │    │
//! │  │  one input      │   │  display, pending operand/operator,      │    │
//! │  │  event          │   │  entry mode, phase (serialized to UI)    │    │
//! │  └─────────────────┘   └──────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::CoreError;

// =============================================================================
// Digit
// =============================================================================

/// A single decimal digit, `0` through `9`.
///
/// ## Example
/// ```rust
/// use abacus_core::Digit;
///
/// let seven = Digit::try_from('7').unwrap();
/// assert_eq!(seven.value(), 7);
/// assert_eq!(seven.as_char(), '7');
/// assert!(Digit::try_from('a').is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Numeric value of the digit.
    #[inline]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// ASCII character for the digit.
    #[inline]
    pub const fn as_char(&self) -> char {
        (b'0' + self.0) as char
    }
}

impl TryFrom<char> for Digit {
    type Error = CoreError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .map(|d| Digit(d as u8))
            .ok_or_else(|| CoreError::InvalidDigit(c.to_string()))
    }
}

impl TryFrom<u8> for Digit {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value <= 9 {
            Ok(Digit(value))
        } else {
            Err(CoreError::InvalidDigit(value.to_string()))
        }
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// =============================================================================
// Operator
// =============================================================================

/// A binary operator the engine can hold as pending.
///
/// `Equals` is the pass-through operator: evaluating `a = b` yields `b`.
/// It only matters when an `=` is chained into a later operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Equals,
}

impl Operator {
    /// Symbol shown on the keypad.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
            Operator::Equals => "=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Parses keypad symbols plus the ASCII spellings people type.
///
/// ## Example
/// ```rust
/// use abacus_core::Operator;
///
/// assert_eq!("×".parse::<Operator>().unwrap(), Operator::Multiply);
/// assert_eq!("*".parse::<Operator>().unwrap(), Operator::Multiply);
/// assert_eq!("/".parse::<Operator>().unwrap(), Operator::Divide);
/// assert!("%".parse::<Operator>().is_err());
/// ```
impl FromStr for Operator {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Operator::Add),
            "-" | "−" => Ok(Operator::Subtract),
            "×" | "*" | "x" | "X" => Ok(Operator::Multiply),
            "÷" | "/" => Ok(Operator::Divide),
            "=" => Ok(Operator::Equals),
            other => Err(CoreError::UnknownOperator(other.to_string())),
        }
    }
}

// =============================================================================
// Entry Mode
// =============================================================================

/// Whether the next digit starts a new operand or extends the current one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum EntryMode {
    /// Next digit replaces the display.
    #[default]
    AwaitingOperand,
    /// Next digit is appended to the display.
    Continuing,
}

// =============================================================================
// Phase
// =============================================================================

/// Logical state of the operator chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No pending operator.
    #[default]
    Idle,
    /// An operator is waiting for its second operand.
    Chained,
}

// =============================================================================
// Key
// =============================================================================

/// One discrete input event forwarded by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(Digit),
    DecimalPoint,
    Operator(Operator),
    Equals,
    Clear,
    ClearEntry,
}

impl Key {
    /// Short name used in logs and usage events.
    pub fn label(&self) -> String {
        match self {
            Key::Digit(d) => d.to_string(),
            Key::DecimalPoint => ".".to_string(),
            Key::Operator(op) => op.symbol().to_string(),
            Key::Equals => "=".to_string(),
            Key::Clear => "C".to_string(),
            Key::ClearEntry => "CE".to_string(),
        }
    }
}

impl From<Digit> for Key {
    fn from(digit: Digit) -> Self {
        Key::Digit(digit)
    }
}

impl From<Operator> for Key {
    fn from(op: Operator) -> Self {
        Key::Operator(op)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// Read-only view of an engine, handed to the presentation layer.
///
/// Non-finite pending operands serialize as `null` in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorSnapshot {
    /// Text currently on the display.
    pub display: String,
    /// Left-hand side of the next evaluation.
    pub pending_operand: Option<f64>,
    /// Operator waiting for its second operand.
    pub pending_operator: Option<Operator>,
    pub entry_mode: EntryMode,
    /// True when `display` is an evaluation result, false when it is an
    /// operand the user typed (even one already committed by an operator).
    pub showing_result: bool,
    pub phase: Phase,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_from_char_and_u8() {
        assert_eq!(Digit::try_from('0').unwrap().value(), 0);
        assert_eq!(Digit::try_from(9u8).unwrap().as_char(), '9');
        assert!(Digit::try_from(10u8).is_err());
        assert!(Digit::try_from('.').is_err());
    }

    #[test]
    fn test_operator_symbols_round_trip() {
        for op in [
            Operator::Add,
            Operator::Subtract,
            Operator::Multiply,
            Operator::Divide,
            Operator::Equals,
        ] {
            assert_eq!(op.symbol().parse::<Operator>().unwrap(), op);
        }
    }

    #[test]
    fn test_operator_ascii_aliases() {
        assert_eq!("x".parse::<Operator>().unwrap(), Operator::Multiply);
        assert_eq!("X".parse::<Operator>().unwrap(), Operator::Multiply);
        assert_eq!("−".parse::<Operator>().unwrap(), Operator::Subtract);
        assert!(matches!(
            "^".parse::<Operator>(),
            Err(CoreError::UnknownOperator(_))
        ));
    }

    #[test]
    fn test_entry_mode_default() {
        assert_eq!(EntryMode::default(), EntryMode::AwaitingOperand);
    }

    #[test]
    fn test_key_labels() {
        assert_eq!(Key::Operator(Operator::Divide).label(), "÷");
        assert_eq!(Key::ClearEntry.label(), "CE");
        assert_eq!(Key::from(Digit::try_from('4').unwrap()).label(), "4");
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let snapshot = CalculatorSnapshot {
            display: "12".to_string(),
            pending_operand: Some(3.0),
            pending_operator: Some(Operator::Add),
            entry_mode: EntryMode::Continuing,
            showing_result: false,
            phase: Phase::Chained,
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["pendingOperator"], "add");
        assert_eq!(json["entryMode"], "continuing");
        assert_eq!(json["phase"], "chained");
        assert_eq!(json["showingResult"], false);
    }
}
