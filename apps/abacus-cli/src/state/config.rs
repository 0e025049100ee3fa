//! # Configuration State
//!
//! Site-wide settings, constructed once at startup and passed to the
//! commands that need them. Nothing here is global.
//!
//! ## Configuration Sources (later overrides earlier)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Defaults (this file)                                                │
//! │  2. TOML file: --config path, or the platform config dir                │
//! │     ~/.config/abacus/abacus.toml (Linux)                                │
//! │     ~/Library/Application Support/com.abacus.abacus/abacus.toml (macOS) │
//! │  3. Environment variables (ABACUS_*)                                    │
//! │  4. validate()                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [display]
//! precision = 10      # cap fractional digits of shown results (omit = exact)
//!
//! [analytics]
//! enabled = true
//! event_name = "tool_used"
//! tool_name = "calculator"
//!
//! [session]
//! max_widgets = 16
//! ```
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::{Path, PathBuf};

use abacus_core::CalculatorSnapshot;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Largest accepted `display.precision`.
pub const MAX_PRECISION: u32 = 20;

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    LoadFailed(String),

    #[error("Failed to parse config: {0}")]
    ParseFailed(String),

    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}

// =============================================================================
// Sections
// =============================================================================

/// How results are rendered.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplaySettings {
    /// Maximum fractional digits for shown results. `None` shows the exact
    /// shortest representation the engine produced.
    pub precision: Option<u32>,
}

/// Usage observation ("tool used" events).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnalyticsSettings {
    pub enabled: bool,
    pub event_name: String,
    pub tool_name: String,
}

impl Default for AnalyticsSettings {
    fn default() -> Self {
        AnalyticsSettings {
            enabled: false,
            event_name: "tool_used".to_string(),
            tool_name: "calculator".to_string(),
        }
    }
}

/// Limits on open calculators.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SessionSettings {
    pub max_widgets: usize,
}

impl Default for SessionSettings {
    fn default() -> Self {
        SessionSettings { max_widgets: 16 }
    }
}

// =============================================================================
// Config State
// =============================================================================

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ConfigState {
    #[serde(default)]
    pub display: DisplaySettings,

    #[serde(default)]
    pub analytics: AnalyticsSettings,

    #[serde(default)]
    pub session: SessionSettings,
}

impl ConfigState {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// An explicit `config_path` must exist. Without one, the platform
    /// config file is used when present and skipped otherwise.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::load`], reading `ABACUS_*` through `lookup`.
    pub fn load_with<F>(config_path: Option<PathBuf>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match config_path {
            Some(path) => Self::from_file(&path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_overrides(lookup)?;
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            Self::default()
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::LoadFailed(format!("{}: {}", path.display(), e)))?;
        Ok(toml::from_str(&contents)?)
    }

    /// Applies `ABACUS_*` overrides read through `lookup`.
    ///
    /// ## Variables
    /// - `ABACUS_PRECISION`: display precision, or `exact` to disable
    /// - `ABACUS_ANALYTICS_ENABLED`: `true` / `false`
    /// - `ABACUS_ANALYTICS_EVENT`: event name
    /// - `ABACUS_MAX_WIDGETS`: open calculator limit
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(precision) = lookup("ABACUS_PRECISION") {
            self.display.precision = match precision.trim() {
                "exact" | "" => None,
                value => Some(
                    value
                        .parse()
                        .map_err(|_| ConfigError::InvalidValue("ABACUS_PRECISION".into()))?,
                ),
            };
        }

        if let Some(enabled) = lookup("ABACUS_ANALYTICS_ENABLED") {
            self.analytics.enabled = enabled
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("ABACUS_ANALYTICS_ENABLED".into()))?;
        }

        if let Some(event) = lookup("ABACUS_ANALYTICS_EVENT") {
            self.analytics.event_name = event;
        }

        if let Some(max) = lookup("ABACUS_MAX_WIDGETS") {
            self.session.max_widgets = max
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("ABACUS_MAX_WIDGETS".into()))?;
        }

        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(precision) = self.display.precision {
            if precision > MAX_PRECISION {
                return Err(ConfigError::Invalid(format!(
                    "display.precision must be at most {}, got {}",
                    MAX_PRECISION, precision
                )));
            }
        }

        if self.analytics.enabled && self.analytics.event_name.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "analytics.event_name is required when analytics is enabled".into(),
            ));
        }

        if self.session.max_widgets == 0 {
            return Err(ConfigError::Invalid(
                "session.max_widgets must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "abacus", "abacus")
            .map(|dirs| dirs.config_dir().join("abacus.toml"))
    }

    /// Renders a snapshot's display text.
    ///
    /// Precision only applies to evaluation results, so a user entering
    /// `0.123456` sees every digit they pressed, before and after pressing
    /// an operator.
    /// Non-finite and exponent-form results are shown as the engine wrote
    /// them.
    ///
    /// ## Example
    /// ```rust,ignore
    /// config.display.precision = Some(4);
    /// // engine shows 0.30000000000000004 → rendered 0.3
    /// ```
    pub fn render_display(&self, snapshot: &CalculatorSnapshot) -> String {
        let Some(precision) = self.display.precision else {
            return snapshot.display.clone();
        };
        if !snapshot.showing_result {
            return snapshot.display.clone();
        }

        let text = snapshot.display.as_str();
        let fraction_len = match text.split_once('.') {
            Some((_, fraction)) if fraction.chars().all(|c| c.is_ascii_digit()) => fraction.len(),
            _ => return snapshot.display.clone(),
        };
        if fraction_len <= precision as usize {
            return snapshot.display.clone();
        }

        let value: f64 = match text.parse() {
            Ok(value) => value,
            Err(_) => return snapshot.display.clone(),
        };
        let rounded = format!("{:.*}", precision as usize, value);
        let trimmed = if rounded.contains('.') {
            rounded.trim_end_matches('0').trim_end_matches('.')
        } else {
            rounded.as_str()
        };

        if trimmed == "-0" {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abacus_core::{parse_keys, Calculator};
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn snapshot_after(keys: &str) -> CalculatorSnapshot {
        let mut calc = Calculator::new();
        calc.press_all(parse_keys(keys).unwrap());
        calc.snapshot()
    }

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_config() {
        let config = ConfigState::default();
        assert_eq!(config.display.precision, None);
        assert!(!config.analytics.enabled);
        assert_eq!(config.analytics.event_name, "tool_used");
        assert_eq!(config.session.max_widgets, 16);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: ConfigState = toml::from_str("[display]\nprecision = 4\n").unwrap();
        assert_eq!(config.display.precision, Some(4));
        assert_eq!(config.analytics, AnalyticsSettings::default());
        assert_eq!(config.session.max_widgets, 16);
    }

    fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("abacus.toml");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_reads_file_then_env() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "[display]\nprecision = 4\n\n[analytics]\nenabled = true\nevent_name = \"from_file\"\n",
        );
        let vars = env(&[("ABACUS_ANALYTICS_EVENT", "from_env")]);

        let config = ConfigState::load_with(Some(path), |k| vars.get(k).cloned()).unwrap();
        assert_eq!(config.display.precision, Some(4));
        assert!(config.analytics.enabled);
        assert_eq!(config.analytics.event_name, "from_env");
        assert_eq!(config.session.max_widgets, 16);
    }

    #[test]
    fn test_load_validates_after_env() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[display]\nprecision = 30\n");

        let err = ConfigState::load_with(Some(path.clone()), |_| None).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let vars = env(&[("ABACUS_PRECISION", "exact")]);
        let config = ConfigState::load_with(Some(path), |k| vars.get(k).cloned()).unwrap();
        assert_eq!(config.display.precision, None);
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.toml");
        let err = ConfigState::load(Some(path)).unwrap_err();
        assert!(matches!(err, ConfigError::LoadFailed(ref msg) if msg.contains("missing.toml")));
    }

    #[test]
    fn test_load_malformed_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[display\nprecision = ");
        let err = ConfigState::load(Some(path)).unwrap_err();
        assert!(matches!(err, ConfigError::ParseFailed(_)));
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[session]\nmax_widgets = \"lots\"\n");
        assert_eq!(ConfigState::load_or_default(Some(path)), ConfigState::default());
    }

    #[test]
    fn test_env_overrides() {
        let vars = env(&[
            ("ABACUS_PRECISION", "6"),
            ("ABACUS_ANALYTICS_ENABLED", "true"),
            ("ABACUS_ANALYTICS_EVENT", "calc_used"),
            ("ABACUS_MAX_WIDGETS", "2"),
        ]);
        let mut config = ConfigState::default();
        config.apply_overrides(|k| vars.get(k).cloned()).unwrap();

        assert_eq!(config.display.precision, Some(6));
        assert!(config.analytics.enabled);
        assert_eq!(config.analytics.event_name, "calc_used");
        assert_eq!(config.session.max_widgets, 2);
    }

    #[test]
    fn test_env_precision_exact_disables_rounding() {
        let vars = env(&[("ABACUS_PRECISION", "exact")]);
        let mut config = ConfigState::default();
        config.display.precision = Some(3);
        config.apply_overrides(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(config.display.precision, None);
    }

    #[test]
    fn test_env_invalid_value() {
        let vars = env(&[("ABACUS_MAX_WIDGETS", "many")]);
        let mut config = ConfigState::default();
        let err = config.apply_overrides(|k| vars.get(k).cloned()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref name) if name == "ABACUS_MAX_WIDGETS"));
    }

    #[test]
    fn test_validation() {
        let mut config = ConfigState::default();
        config.display.precision = Some(MAX_PRECISION + 1);
        assert!(config.validate().is_err());

        config.display.precision = Some(2);
        config.session.max_widgets = 0;
        assert!(config.validate().is_err());

        config.session.max_widgets = 1;
        config.analytics.enabled = true;
        config.analytics.event_name = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_render_exact_by_default() {
        let config = ConfigState::default();
        assert_eq!(
            config.render_display(&snapshot_after("0.1 + 0.2 =")),
            "0.30000000000000004"
        );
    }

    #[test]
    fn test_render_rounds_results() {
        let mut config = ConfigState::default();
        config.display.precision = Some(4);
        assert_eq!(config.render_display(&snapshot_after("0.1 + 0.2 =")), "0.3");
        assert_eq!(config.render_display(&snapshot_after("2 ÷ 3 =")), "0.6667");
        assert_eq!(config.render_display(&snapshot_after("1 ÷ 8 =")), "0.125");
    }

    #[test]
    fn test_render_leaves_typing_alone() {
        let mut config = ConfigState::default();
        config.display.precision = Some(2);
        assert_eq!(
            config.render_display(&snapshot_after("3.14159")),
            "3.14159"
        );
    }

    #[test]
    fn test_render_leaves_committed_operand_alone() {
        let mut config = ConfigState::default();
        config.display.precision = Some(2);
        let snapshot = snapshot_after("3.14159 +");
        assert_eq!(snapshot.pending_operand, Some(3.14159));
        assert_eq!(config.render_display(&snapshot), "3.14159");
        assert_eq!(config.render_display(&snapshot_after("3.14159 + 1 ×")), "4.14");
    }

    #[test]
    fn test_render_leaves_sentinels_and_exponents_alone() {
        let mut config = ConfigState::default();
        config.display.precision = Some(2);
        assert_eq!(config.render_display(&snapshot_after("5 ÷ 0 =")), "Infinity");
        assert_eq!(
            config.render_display(&snapshot_after("1.5 ÷ 10000000 =")),
            "1.5e-7"
        );
    }

    #[test]
    fn test_render_negative_zero() {
        let mut config = ConfigState::default();
        config.display.precision = Some(2);
        assert_eq!(config.render_display(&snapshot_after("0 - 0.001 =")), "0");
    }
}
