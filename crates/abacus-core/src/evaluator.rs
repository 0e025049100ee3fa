//! # Evaluator
//!
//! Applies one binary operator to two operands.
//!
//! ## Division by Zero
//! Dividing by zero is not an error. IEEE-754 gives `±Infinity` (or `NaN`
//! for `0 ÷ 0`) and that value flows on to the display as text. The engine
//! keeps running; the next operand or `C` carries on from there.

use crate::types::Operator;

/// Evaluates `a op b`.
///
/// ## Example
/// ```rust
/// use abacus_core::{evaluate, Operator};
///
/// assert_eq!(evaluate(3.0, Operator::Add, 4.0), 7.0);
/// assert_eq!(evaluate(9.0, Operator::Equals, 2.0), 2.0);
/// assert!(evaluate(5.0, Operator::Divide, 0.0).is_infinite());
/// ```
pub fn evaluate(a: f64, op: Operator, b: f64) -> f64 {
    match op {
        Operator::Add => a + b,
        Operator::Subtract => a - b,
        Operator::Multiply => a * b,
        Operator::Divide => a / b,
        Operator::Equals => b,
    }
}
