//! # Input Parsing
//!
//! Turns untyped input from the UI into [`Key`]s.
//!
//! ## Input Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Source              Example              Entry point                   │
//! │  ──────              ───────              ───────────                   │
//! │  Keypad button text  "×", "CE", "7"       "×".parse::<Key>()            │
//! │  Keyboard key name   "Enter", "Escape"    Key::from_keyboard("Enter")   │
//! │  Typed sequence      "12.5 × 2 ="         parse_keys("12.5 × 2 =")      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::str::FromStr;

use crate::error::{CoreError, CoreResult};
use crate::types::{Digit, Key, Operator};

/// Parses one keypad token.
///
/// ## Accepted Tokens
/// - `0`..`9`
/// - `.` or `,` (decimal point)
/// - operator symbols and aliases (`+ - × ÷ * / x`)
/// - `=`
/// - `C`, `AC`, `CLEAR` (clear), `CE` (clear entry), any case
///
/// ## Example
/// ```rust
/// use abacus_core::{Key, Operator};
///
/// assert_eq!("ce".parse::<Key>().unwrap(), Key::ClearEntry);
/// assert_eq!("*".parse::<Key>().unwrap(), Key::Operator(Operator::Multiply));
/// assert!("sqrt".parse::<Key>().is_err());
/// ```
impl FromStr for Key {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.is_empty() {
            return Err(CoreError::EmptyInput);
        }

        match token.to_ascii_uppercase().as_str() {
            "C" | "AC" | "CLEAR" => return Ok(Key::Clear),
            "CE" => return Ok(Key::ClearEntry),
            "." | "," => return Ok(Key::DecimalPoint),
            "=" => return Ok(Key::Equals),
            _ => {}
        }

        let mut chars = token.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii_digit() {
                return Digit::try_from(c).map(Key::Digit);
            }
        }

        token
            .parse::<Operator>()
            .map(Key::Operator)
            .map_err(|_| CoreError::UnknownKey(token.to_string()))
    }
}

impl Key {
    /// Maps a browser keyboard key name to a calculator key.
    ///
    /// Returns `None` for keys the calculator ignores.
    ///
    /// ## Example
    /// ```rust
    /// use abacus_core::Key;
    ///
    /// assert_eq!(Key::from_keyboard("Enter"), Some(Key::Equals));
    /// assert_eq!(Key::from_keyboard("Escape"), Some(Key::Clear));
    /// assert_eq!(Key::from_keyboard("Tab"), None);
    /// ```
    pub fn from_keyboard(name: &str) -> Option<Key> {
        match name {
            "." | "," | "Decimal" => Some(Key::DecimalPoint),
            "+" => Some(Key::Operator(Operator::Add)),
            "-" => Some(Key::Operator(Operator::Subtract)),
            "*" => Some(Key::Operator(Operator::Multiply)),
            "/" => Some(Key::Operator(Operator::Divide)),
            "Enter" | "=" => Some(Key::Equals),
            "Escape" => Some(Key::Clear),
            "Delete" => Some(Key::ClearEntry),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Digit::try_from(c).ok().map(Key::Digit),
                    _ => None,
                }
            }
        }
    }
}

/// Parses a whitespace-separated key sequence.
///
/// A token made only of digits and decimal points (`12.5` or `12,5`)
/// expands into one key per character, so numbers can be typed naturally.
///
/// ## Example
/// ```rust
/// use abacus_core::{parse_keys, Calculator};
///
/// let keys = parse_keys("12.5 × 2 =").unwrap();
/// assert_eq!(keys.len(), 7);
///
/// let mut calc = Calculator::new();
/// assert_eq!(calc.press_all(keys), "25");
/// ```
pub fn parse_keys(input: &str) -> CoreResult<Vec<Key>> {
    let mut keys: Vec<Key> = Vec::new();

    for token in input.split_whitespace() {
        let is_number = token
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == ',');
        if token.chars().count() > 1 && is_number {
            for c in token.chars() {
                keys.push(c.to_string().parse::<Key>()?);
            }
        } else {
            keys.push(token.parse::<Key>()?);
        }
    }

    Ok(keys)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(c: char) -> Key {
        Key::Digit(Digit::try_from(c).unwrap())
    }

    #[test]
    fn test_parse_single_tokens() {
        assert_eq!("7".parse::<Key>().unwrap(), digit('7'));
        assert_eq!(".".parse::<Key>().unwrap(), Key::DecimalPoint);
        assert_eq!(",".parse::<Key>().unwrap(), Key::DecimalPoint);
        assert_eq!("=".parse::<Key>().unwrap(), Key::Equals);
        assert_eq!("÷".parse::<Key>().unwrap(), Key::Operator(Operator::Divide));
        assert_eq!("x".parse::<Key>().unwrap(), Key::Operator(Operator::Multiply));
    }

    #[test]
    fn test_clear_tokens_any_case() {
        assert_eq!("c".parse::<Key>().unwrap(), Key::Clear);
        assert_eq!("AC".parse::<Key>().unwrap(), Key::Clear);
        assert_eq!("Clear".parse::<Key>().unwrap(), Key::Clear);
        assert_eq!("Ce".parse::<Key>().unwrap(), Key::ClearEntry);
    }

    #[test]
    fn test_unknown_and_empty_tokens() {
        assert_eq!(
            "%".parse::<Key>(),
            Err(CoreError::UnknownKey("%".to_string()))
        );
        assert_eq!("   ".parse::<Key>(), Err(CoreError::EmptyInput));
    }

    #[test]
    fn test_keyboard_mapping() {
        assert_eq!(Key::from_keyboard("5"), Some(digit('5')));
        assert_eq!(
            Key::from_keyboard("*"),
            Some(Key::Operator(Operator::Multiply))
        );
        assert_eq!(Key::from_keyboard("Delete"), Some(Key::ClearEntry));
        assert_eq!(Key::from_keyboard("="), Some(Key::Equals));
        assert_eq!(Key::from_keyboard("a"), None);
        assert_eq!(Key::from_keyboard("Shift"), None);
    }

    #[test]
    fn test_parse_keys_expands_numbers() {
        let keys = parse_keys("10.5 + 3").unwrap();
        assert_eq!(
            keys,
            vec![
                digit('1'),
                digit('0'),
                Key::DecimalPoint,
                digit('5'),
                Key::Operator(Operator::Add),
                digit('3'),
            ]
        );
    }

    #[test]
    fn test_parse_keys_expands_comma_decimal() {
        assert_eq!(parse_keys("12,5").unwrap(), parse_keys("12.5").unwrap());
        assert_eq!(
            parse_keys(",5").unwrap(),
            vec![Key::DecimalPoint, digit('5')]
        );
    }

    #[test]
    fn test_parse_keys_rejects_unknown_token() {
        assert_eq!(
            parse_keys("1 + foo"),
            Err(CoreError::UnknownKey("foo".to_string()))
        );
    }

    #[test]
    fn test_parse_keys_empty_input() {
        assert_eq!(parse_keys("").unwrap(), Vec::<Key>::new());
    }
}
