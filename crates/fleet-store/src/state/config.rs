//! # Fleet Configuration
//!
//! Settings read once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`FLEET_*`)
//! 2. Config file (`fleet.toml`, or the path in `FLEET_CONFIG`)
//! 3. Defaults (this file)
//!
//! ## Example `fleet.toml`
//! ```toml
//! currency_code = "INR"
//! currency_symbol = "₹"
//! currency_decimals = 2
//! seed_demo_data = true
//! default_role = "Manager"
//! log_filter = "info,fleet=debug"
//! ```

use std::path::{Path, PathBuf};

use fleet_core::{Money, Role};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ConfigError, ConfigResult};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "fleet.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FleetConfig {
    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places shown for amounts (0 or 2)
    pub currency_decimals: u8,

    /// Start from the demo fleet instead of an empty one
    pub seed_demo_data: bool,

    /// Role assumed when the caller does not name one
    pub default_role: Role,

    /// `tracing` filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for FleetConfig {
    fn default() -> Self {
        FleetConfig {
            currency_code: "INR".to_string(),
            currency_symbol: "₹".to_string(),
            currency_decimals: 2,
            seed_demo_data: true,
            default_role: Role::Viewer,
            log_filter: "info,fleet=debug".to_string(),
        }
    }
}

impl FleetConfig {
    /// Loads configuration from file and environment.
    ///
    /// A missing file is not an error; defaults are used instead.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        let path = config_path
            .or_else(|| std::env::var("FLEET_CONFIG").ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        if path.exists() {
            info!(?path, "Loading fleet config from file");
            config = Self::from_file(&path)?;
        } else {
            debug!(?path, "Config file not found, using defaults");
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    fn apply_env_overrides(&mut self) -> ConfigResult<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies `FLEET_*` overrides read through `lookup`.
    ///
    /// ## Variables
    /// - `FLEET_CURRENCY`: currency code
    /// - `FLEET_SEED_DEMO`: `true`/`false` (also `1`/`0`, `yes`/`no`)
    /// - `FLEET_ROLE`: `admin`, `manager` or `viewer`
    /// - `FLEET_LOG`: log filter
    pub fn apply_overrides<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(code) = lookup("FLEET_CURRENCY") {
            self.currency_code = code.trim().to_uppercase();
        }

        if let Some(raw) = lookup("FLEET_SEED_DEMO") {
            self.seed_demo_data = match raw.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" => true,
                "false" | "0" | "no" => false,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "FLEET_SEED_DEMO".to_string(),
                        value: raw,
                        reason: "expected true or false".to_string(),
                    })
                }
            };
        }

        if let Some(raw) = lookup("FLEET_ROLE") {
            self.default_role = raw.parse().map_err(|reason| ConfigError::InvalidValue {
                key: "FLEET_ROLE".to_string(),
                value: raw.clone(),
                reason,
            })?;
        }

        if let Some(filter) = lookup("FLEET_LOG") {
            self.log_filter = filter;
        }

        Ok(())
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !matches!(self.currency_decimals, 0 | 2) {
            return Err(ConfigError::InvalidValue {
                key: "currency_decimals".to_string(),
                value: self.currency_decimals.to_string(),
                reason: "must be 0 or 2".to_string(),
            });
        }
        if self.currency_symbol.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "currency_symbol".to_string(),
                value: String::new(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Formats an amount with the configured symbol.
    ///
    /// ## Example
    /// ```rust
    /// use fleet_core::Money;
    /// use fleet_store::FleetConfig;
    ///
    /// let config = FleetConfig::default();
    /// assert_eq!(config.format_currency(Money::from_minor(55150)), "₹551.50");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        if self.currency_decimals == 0 {
            return format!("{}{}{}", sign, self.currency_symbol, amount.rounded_major().abs());
        }
        format!(
            "{}{}{}.{:02}",
            sign,
            self.currency_symbol,
            amount.major().abs(),
            amount.minor_part().abs()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = FleetConfig::default();
        assert_eq!(config.currency_code, "INR");
        assert_eq!(config.default_role, Role::Viewer);
        assert!(config.seed_demo_data);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_format_currency() {
        let config = FleetConfig::default();
        assert_eq!(config.format_currency(Money::from_major(95000)), "₹95000.00");
        assert_eq!(config.format_currency(Money::from_minor(1)), "₹0.01");
        assert_eq!(config.format_currency(Money::from_minor(-123_45)), "-₹123.45");

        let whole = FleetConfig {
            currency_decimals: 0,
            ..FleetConfig::default()
        };
        assert_eq!(whole.format_currency(Money::from_minor(88240)), "₹882");
        assert_eq!(whole.format_currency(Money::from_minor(55150)), "₹552");
    }

    #[test]
    fn test_overrides() {
        let mut config = FleetConfig::default();
        config
            .apply_overrides(lookup(&[
                ("FLEET_CURRENCY", "usd"),
                ("FLEET_SEED_DEMO", "no"),
                ("FLEET_ROLE", "Manager"),
                ("FLEET_LOG", "warn"),
            ]))
            .unwrap();

        assert_eq!(config.currency_code, "USD");
        assert!(!config.seed_demo_data);
        assert_eq!(config.default_role, Role::Manager);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_bad_override_is_reported() {
        let mut config = FleetConfig::default();
        let err = config
            .apply_overrides(lookup(&[("FLEET_ROLE", "owner")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "FLEET_ROLE"));

        let err = config
            .apply_overrides(lookup(&[("FLEET_SEED_DEMO", "maybe")]))
            .unwrap_err();
        assert!(err.to_string().contains("FLEET_SEED_DEMO"));
    }

    #[test]
    fn test_parse_toml() {
        let config: FleetConfig = toml::from_str(
            r#"
            currency_decimals = 0
            default_role = "Admin"
            "#,
        )
        .unwrap();
        assert_eq!(config.currency_decimals, 0);
        assert_eq!(config.default_role, Role::Admin);
        assert_eq!(config.currency_symbol, "₹");
    }

    #[test]
    fn test_validate_rejects_odd_decimals() {
        let config = FleetConfig {
            currency_decimals: 3,
            ..FleetConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = FleetConfig::load(Some(PathBuf::from("/nonexistent/fleet.toml"))).unwrap();
        assert_eq!(config.currency_symbol, "₹");
    }
}
