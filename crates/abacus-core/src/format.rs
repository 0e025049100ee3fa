//! # Number Formatting
//!
//! Turns evaluation results into display text.
//!
//! ## Layout Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Digits are the SHORTEST string that parses back to the same f64.       │
//! │  Where the decimal point goes depends on the decimal exponent n         │
//! │  (value = 0.d1d2..dk × 10^n):                                           │
//! │                                                                         │
//! │    k ≤ n ≤ 21      →  digits + zeros          1e20  → 100000000000000000000
//! │    0 < n ≤ 21      →  ddd.ddd                 12.5  → 12.5             │
//! │    -6 < n ≤ 0      →  0.000ddd                1e-6  → 0.000001         │
//! │    otherwise       →  d.ddde±x                1e21  → 1e+21            │
//! │                                                                         │
//! │  Non-finite: Infinity, -Infinity, NaN.   Negative zero: 0               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No rounding happens here. `0.1 + 0.2` displays as `0.30000000000000004`;
//! trimming that is the presentation layer's call.

/// Formats a number the way the display shows it.
///
/// ## Example
/// ```rust
/// use abacus_core::format::format_number;
///
/// assert_eq!(format_number(14.0), "14");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(5.0 / 0.0), "Infinity");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let (digits, n) = shortest_digits(value.abs());
    let k = digits.len() as i32;

    let body = if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{}.{}", int_part, frac_part)
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let exp = n - 1;
        let exp_sign = if exp >= 0 { '+' } else { '-' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", lead, exp_sign, exp.abs())
        } else {
            format!("{}.{}e{}{}", lead, rest, exp_sign, exp.abs())
        }
    };

    format!("{}{}", sign, body)
}

/// Returns the shortest round-trip significant digits of a positive finite
/// value, and `n` such that `value = 0.digits × 10^n`.
fn shortest_digits(value: f64) -> (String, i32) {
    // `{:e}` already yields the shortest round-trip mantissa, e.g. "1.25e-3"
    let sci = format!("{:e}", value);
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| c.is_ascii_digit()).collect();
    (digits, exponent + 1)
}
