//! # REPL
//!
//! Line-oriented front end: each input line is a key sequence, each output
//! line is the resulting display.
//!
//! ```text
//! 3 + 4          →  4
//! × 2 =          →  14
//! 5 ÷ 0 =        →  Infinity
//! :state         →  {"widgetId":"…","display":"Infinity","snapshot":{…}}
//! :quit
//! ```

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use tracing::debug;

use crate::commands::calculator::{
    close_calculator, get_calculator, open_calculator, press_keys, CalculatorResponse,
};
use crate::commands::config::get_config;
use crate::error::ApiError;
use crate::state::{CalculatorState, ConfigState};
use crate::usage::UsageSink;

/// What one input line produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Text to print.
    Print(String),
    /// Blank line, nothing to do.
    Skip,
    /// `:quit`
    Quit,
}

/// One calculator widget driven from the terminal.
pub struct Session {
    calculators: CalculatorState,
    config: ConfigState,
    usage: Arc<dyn UsageSink>,
    widget_id: String,
    json: bool,
}

impl Session {
    /// Opens a calculator for this session.
    pub fn new(
        config: ConfigState,
        usage: Arc<dyn UsageSink>,
        json: bool,
    ) -> Result<Self, ApiError> {
        let calculators = CalculatorState::new(config.session.max_widgets);
        let widget_id = open_calculator(&calculators, &config)?.widget_id;
        debug!(widget_id = %widget_id, "REPL session opened");

        Ok(Session {
            calculators,
            config,
            usage,
            widget_id,
            json,
        })
    }

    /// Presses a key sequence and formats the response.
    pub fn evaluate(&self, keys: &str) -> Result<String, ApiError> {
        let response = press_keys(
            &self.calculators,
            &self.config,
            self.usage.as_ref(),
            &self.widget_id,
            keys,
        )?;
        self.format(&response)
    }

    /// Handles one input line.
    pub fn handle_line(&self, line: &str) -> LineOutcome {
        let line = line.trim();
        let result = match line {
            "" => return LineOutcome::Skip,
            ":quit" | ":q" => return LineOutcome::Quit,
            ":state" => get_calculator(&self.calculators, &self.config, &self.widget_id)
                .and_then(|response| to_json(&response)),
            ":config" => to_json(&get_config(&self.config)),
            keys => self.evaluate(keys),
        };

        match result {
            Ok(text) => LineOutcome::Print(text),
            Err(err) => LineOutcome::Print(format!("error: {}", err.message)),
        }
    }

    fn format(&self, response: &CalculatorResponse) -> Result<String, ApiError> {
        if self.json {
            to_json(response)
        } else {
            Ok(response.display.clone())
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        // Closing only fails if the widget is already gone.
        let _ = close_calculator(&self.calculators, &self.widget_id);
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::internal(e.to_string()))
}

/// Reads lines from `input` until EOF or `:quit`, writing one line of
/// output per non-blank input line.
pub fn run<R: BufRead, W: Write>(session: &Session, input: R, mut output: W) -> io::Result<()> {
    for line in input.lines() {
        match session.handle_line(&line?) {
            LineOutcome::Print(text) => {
                writeln!(output, "{}", text)?;
                output.flush()?;
            }
            LineOutcome::Skip => {}
            LineOutcome::Quit => break,
        }
    }
    Ok(())
}
