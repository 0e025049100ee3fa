//! # Calculator Commands
//!
//! Commands that open, drive, and close calculator widgets.
//!
//! ## Widget Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Calculator Lifecycle                                 │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                         │
//! │  │  Opened  │────►│ In Use   │────►│  Closed  │                         │
//! │  │  "0"     │     │          │     │          │                         │
//! │  └──────────┘     └──────────┘     └──────────┘                         │
//! │                        │                                                │
//! │                   press_key                                             │
//! │                   press_keys                                            │
//! │                   get_calculator                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each command takes exactly the state it needs. Every response carries the
//! engine snapshot plus the display text as rendered with the configured
//! precision.

use abacus_core::{parse_keys, CalculatorSnapshot, Key};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{ApiError, ErrorCode};
use crate::state::{CalculatorState, ConfigState};
use crate::usage::{UsageEvent, UsageSink};

/// Calculator response: widget id, rendered display, and raw snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorResponse {
    pub widget_id: String,
    /// Display text after presentation rounding.
    pub display: String,
    pub snapshot: CalculatorSnapshot,
}

impl CalculatorResponse {
    fn new(config: &ConfigState, widget_id: Uuid, snapshot: CalculatorSnapshot) -> Self {
        CalculatorResponse {
            widget_id: widget_id.to_string(),
            display: config.render_display(&snapshot),
            snapshot,
        }
    }
}

fn parse_widget_id(widget_id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(widget_id.trim())
        .map_err(|_| ApiError::validation(format!("Invalid widget id: {}", widget_id)))
}

fn record_usage(config: &ConfigState, usage: &dyn UsageSink, widget_id: Uuid, keys: &[Key]) {
    if !config.analytics.enabled {
        return;
    }
    for key in keys {
        usage.record(&UsageEvent::new(&config.analytics, widget_id, key.label()));
    }
}

/// Opens a new calculator widget.
///
/// ## Returns
/// The fresh calculator, showing `0`
pub fn open_calculator(
    calculators: &CalculatorState,
    config: &ConfigState,
) -> Result<CalculatorResponse, ApiError> {
    let id = calculators.open().ok_or_else(|| {
        ApiError::new(
            ErrorCode::SessionLimit,
            format!(
                "Cannot open more than {} calculators",
                config.session.max_widgets
            ),
        )
    })?;
    debug!(widget_id = %id, "open_calculator command");

    get_calculator(calculators, config, &id.to_string())
}

/// Closes a calculator widget.
pub fn close_calculator(calculators: &CalculatorState, widget_id: &str) -> Result<(), ApiError> {
    debug!(widget_id = %widget_id, "close_calculator command");

    let id = parse_widget_id(widget_id)?;
    if calculators.close(&id) {
        Ok(())
    } else {
        Err(ApiError::not_found("Calculator", widget_id))
    }
}

/// Gets the current state of a calculator without pressing anything.
pub fn get_calculator(
    calculators: &CalculatorState,
    config: &ConfigState,
    widget_id: &str,
) -> Result<CalculatorResponse, ApiError> {
    let id = parse_widget_id(widget_id)?;
    calculators
        .with_calculator(&id, |calc| calc.snapshot())
        .map(|snapshot| CalculatorResponse::new(config, id, snapshot))
        .ok_or_else(|| ApiError::not_found("Calculator", widget_id))
}

/// Ids of all open calculators.
pub fn list_calculators(calculators: &CalculatorState) -> Vec<String> {
    calculators.ids().iter().map(Uuid::to_string).collect()
}

/// Presses one key.
///
/// ## Arguments
/// * `widget_id` - Calculator to drive
/// * `key` - Keypad token (`7`, `.`, `×`, `=`, `C`, `CE`, ...)
///
/// ## Returns
/// Updated calculator
pub fn press_key(
    calculators: &CalculatorState,
    config: &ConfigState,
    usage: &dyn UsageSink,
    widget_id: &str,
    key: &str,
) -> Result<CalculatorResponse, ApiError> {
    debug!(widget_id = %widget_id, key = %key, "press_key command");

    let key: Key = key.parse()?;
    apply_keys(calculators, config, usage, widget_id, vec![key])
}

/// Presses a whitespace-separated key sequence.
///
/// The whole sequence is parsed before anything is pressed, so an
/// unknown token leaves the calculator untouched.
///
/// ## Example
/// ```rust,ignore
/// press_keys(&calcs, &config, &sink, &id, "3 + 4 × 2 =")?; // display "14"
/// ```
pub fn press_keys(
    calculators: &CalculatorState,
    config: &ConfigState,
    usage: &dyn UsageSink,
    widget_id: &str,
    keys: &str,
) -> Result<CalculatorResponse, ApiError> {
    debug!(widget_id = %widget_id, keys = %keys, "press_keys command");

    let keys = parse_keys(keys)?;
    apply_keys(calculators, config, usage, widget_id, keys)
}

fn apply_keys(
    calculators: &CalculatorState,
    config: &ConfigState,
    usage: &dyn UsageSink,
    widget_id: &str,
    keys: Vec<Key>,
) -> Result<CalculatorResponse, ApiError> {
    let id = parse_widget_id(widget_id)?;

    let snapshot = calculators
        .with_calculator_mut(&id, |calc| {
            calc.press_all(keys.iter().copied());
            calc.snapshot()
        })
        .ok_or_else(|| ApiError::not_found("Calculator", widget_id))?;

    // Observers see the keys only after the engine has settled.
    record_usage(config, usage, id, &keys);

    Ok(CalculatorResponse::new(config, id, snapshot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usage::MemorySink;
    use abacus_core::{EntryMode, Operator, Phase};

    fn setup() -> (CalculatorState, ConfigState, MemorySink, String) {
        let config = ConfigState::default();
        let calculators = CalculatorState::new(config.session.max_widgets);
        let id = open_calculator(&calculators, &config).unwrap().widget_id;
        (calculators, config, MemorySink::new(), id)
    }

    #[test]
    fn test_open_calculator_starts_at_zero() {
        let (calculators, config, _, id) = setup();
        let response = get_calculator(&calculators, &config, &id).unwrap();
        assert_eq!(response.display, "0");
        assert_eq!(response.snapshot.phase, Phase::Idle);
        assert_eq!(list_calculators(&calculators), vec![id]);
    }

    #[test]
    fn test_press_key_sequence() {
        let (calculators, config, sink, id) = setup();
        for key in ["3", "+", "4", "×", "2"] {
            press_key(&calculators, &config, &sink, &id, key).unwrap();
        }
        let response = press_key(&calculators, &config, &sink, &id, "=").unwrap();
        assert_eq!(response.display, "14");
    }

    #[test]
    fn test_press_keys_chain() {
        let (calculators, config, sink, id) = setup();
        let response = press_keys(&calculators, &config, &sink, &id, "9 + CE 3").unwrap();
        assert_eq!(response.display, "3");
        assert_eq!(response.snapshot.pending_operand, Some(9.0));
        assert_eq!(response.snapshot.pending_operator, Some(Operator::Add));
        assert_eq!(response.snapshot.entry_mode, EntryMode::Continuing);

        let response = press_key(&calculators, &config, &sink, &id, "=").unwrap();
        assert_eq!(response.display, "12");
    }

    #[test]
    fn test_invalid_sequence_leaves_calculator_untouched() {
        let (calculators, config, sink, id) = setup();
        press_keys(&calculators, &config, &sink, &id, "12").unwrap();

        let err = press_keys(&calculators, &config, &sink, &id, "+ 3 sqrt").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidKey);

        let response = get_calculator(&calculators, &config, &id).unwrap();
        assert_eq!(response.display, "12");
        assert_eq!(response.snapshot.pending_operator, None);
    }

    #[test]
    fn test_unknown_and_malformed_widget_ids() {
        let (calculators, config, sink, _) = setup();

        let err = press_key(&calculators, &config, &sink, "not-a-uuid", "1").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let missing = Uuid::new_v4().to_string();
        let err = get_calculator(&calculators, &config, &missing).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_close_calculator() {
        let (calculators, config, _, id) = setup();
        close_calculator(&calculators, &id).unwrap();
        assert!(get_calculator(&calculators, &config, &id).is_err());
        assert_eq!(
            close_calculator(&calculators, &id).unwrap_err().code,
            ErrorCode::NotFound
        );
    }

    #[test]
    fn test_session_limit() {
        let mut config = ConfigState::default();
        config.session.max_widgets = 1;
        let calculators = CalculatorState::new(config.session.max_widgets);

        open_calculator(&calculators, &config).unwrap();
        let err = open_calculator(&calculators, &config).unwrap_err();
        assert_eq!(err.code, ErrorCode::SessionLimit);
    }

    #[test]
    fn test_usage_recorded_only_when_enabled() {
        let (calculators, mut config, sink, id) = setup();
        press_keys(&calculators, &config, &sink, &id, "1 +").unwrap();
        assert!(sink.events().is_empty());

        config.analytics.enabled = true;
        press_keys(&calculators, &config, &sink, &id, "2 =").unwrap();
        let keys: Vec<String> = sink.events().into_iter().map(|e| e.key).collect();
        assert_eq!(keys, vec!["2", "="]);
    }

    #[test]
    fn test_usage_does_not_change_result() {
        let (calculators, mut config, sink, id) = setup();
        config.analytics.enabled = true;
        let response = press_keys(&calculators, &config, &sink, &id, "5 ÷ 0 =").unwrap();
        assert_eq!(response.display, "Infinity");
        assert_eq!(sink.events().len(), 4);
    }

    #[test]
    fn test_rendered_display_uses_precision() {
        let (calculators, mut config, sink, id) = setup();
        config.display.precision = Some(2);
        let response = press_keys(&calculators, &config, &sink, &id, "2 ÷ 3 =").unwrap();
        assert_eq!(response.display, "0.67");
        assert_eq!(response.snapshot.display, "0.6666666666666666");
    }
}
