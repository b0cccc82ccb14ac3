//! Console configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable              | Default | Meaning                                  |
//! |-----------------------|---------|------------------------------------------|
//! | `WAREHOUSE_LOG`       | `warn`  | tracing filter (overridden by `RUST_LOG`) |
//! | `WAREHOUSE_SEED_DEMO` | `true`  | start with the demo products             |
//! | `WAREHOUSE_TODAY`     | unset   | pin "today" to a `YYYY-MM-DD` date       |

use std::env;

use chrono::NaiveDate;

/// Console configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// tracing-subscriber filter directive
    pub log_filter: String,

    /// Seed Banana / Apple / Steak at startup
    pub seed_demo: bool,

    /// Fixed date used instead of the local clock
    pub today: Option<NaiveDate>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            log_filter: "warn".to_string(),
            seed_demo: true,
            today: None,
        }
    }
}

impl ConsoleConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup (tests pass a closure over a map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ConsoleConfig::default();

        // Blank values count as unset.
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let log_filter = var("WAREHOUSE_LOG").unwrap_or(defaults.log_filter);

        let seed_demo = match var("WAREHOUSE_SEED_DEMO") {
            Some(raw) => parse_bool(&raw)
                .ok_or_else(|| ConfigError::InvalidValue("WAREHOUSE_SEED_DEMO".to_string()))?,
            None => defaults.seed_demo,
        };

        let today = var("WAREHOUSE_TODAY")
            .map(|raw| {
                NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                    .map_err(|_| ConfigError::InvalidValue("WAREHOUSE_TODAY".to_string()))
            })
            .transpose()?;

        Ok(ConsoleConfig {
            log_filter,
            seed_demo,
            today,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<ConsoleConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ConsoleConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(load(&[]).unwrap(), ConsoleConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("WAREHOUSE_LOG", "debug"),
            ("WAREHOUSE_SEED_DEMO", "off"),
            ("WAREHOUSE_TODAY", "2024-02-29"),
        ])
        .unwrap();

        assert_eq!(config.log_filter, "debug");
        assert!(!config.seed_demo);
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2024, 2, 29));
    }

    #[test]
    fn test_invalid_values() {
        let err = load(&[("WAREHOUSE_SEED_DEMO", "maybe")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for WAREHOUSE_SEED_DEMO");

        let err = load(&[("WAREHOUSE_TODAY", "29/02/2024")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for WAREHOUSE_TODAY");
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = load(&[
            ("WAREHOUSE_LOG", "  "),
            ("WAREHOUSE_SEED_DEMO", ""),
            ("WAREHOUSE_TODAY", " "),
        ])
        .unwrap();
        assert_eq!(config, ConsoleConfig::default());
    }
}
