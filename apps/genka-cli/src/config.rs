//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable                   | Default                    |
//! |----------------------------|----------------------------|
//! | `GENKA_FIXED_COST_ENABLED` | `false`                    |
//! | `GENKA_MONTHLY_FIXED_COST` | `0`                        |
//! | `GENKA_MONTHLY_PRODUCTION` | `0`                        |
//! | `GENKA_FONT_PATHS`         | Windows Japanese fonts     |
//! | `GENKA_INCLUDE_PRICE`      | `true`                     |
//! | `GENKA_INCLUDE_DATE`       | `true`                     |

use std::path::PathBuf;

use genka_core::label::DEFAULT_FONT_CANDIDATES;
use genka_core::validation::{validate_store_settings, StoreSettingsDraft};
use genka_core::{FixedCostAllocation, ValidationError};

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Store fixed cost settings
    pub fixed_cost: FixedCostAllocation,

    /// Font files probed in order for the label
    pub font_paths: Vec<PathBuf>,

    /// Print the selling price on labels
    pub include_price: bool,

    /// Print the manufacture date on labels
    pub include_date: bool,
}

impl CliConfig {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let settings = StoreSettingsDraft {
            fixed_cost_enabled: parse_bool(&lookup, "GENKA_FIXED_COST_ENABLED", false)?,
            monthly_fixed_cost: lookup("GENKA_MONTHLY_FIXED_COST").unwrap_or_else(|| "0".to_string()),
            monthly_production: lookup("GENKA_MONTHLY_PRODUCTION").unwrap_or_else(|| "0".to_string()),
        };

        let font_paths = match lookup("GENKA_FONT_PATHS") {
            Some(raw) => raw
                .split(':')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(PathBuf::from)
                .collect(),
            None => DEFAULT_FONT_CANDIDATES.iter().map(PathBuf::from).collect(),
        };

        Ok(CliConfig {
            fixed_cost: validate_store_settings(&settings)?,
            font_paths,
            include_price: parse_bool(&lookup, "GENKA_INCLUDE_PRICE", true)?,
            include_date: parse_bool(&lookup, "GENKA_INCLUDE_DATE", true)?,
        })
    }
}

fn parse_bool<F>(lookup: &F, name: &str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => match raw.trim().to_lowercase().as_str() {
            "true" | "1" | "on" | "yes" => Ok(true),
            "false" | "0" | "off" | "no" => Ok(false),
            _ => Err(ConfigError::InvalidValue(name.to_string())),
        },
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Invalid store settings: {0}")]
    Settings(#[from] ValidationError),
}
