//! # Configuration
//!
//! Loads the calculator configuration at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line region edits (`--add-region`, `--remove-region`)
//! 2. Environment variables (`RETAIL_*`)
//! 3. Defaults (this file)
//!
//! ## Environment Variables
//! - `RETAIL_REGION_TAXES`: comma-separated `CODE=RATE` list, replaces the
//!   default table entirely (e.g. `AUK=0.0685,WLG=0.08`)
//! - `RETAIL_CURRENCY_SYMBOL`: symbol used in the text summary (default `$`)
//!
//! The configuration is read-only once loaded. Region edits build a new
//! table, they never modify the loaded one.

use retail_core::validation::parse_region_tax_rate;
use retail_core::{RegionTaxMap, ValidationError};
use serde::Serialize;

/// Env var holding the region tax table.
pub const REGION_TAXES_VAR: &str = "RETAIL_REGION_TAXES";

/// Env var holding the currency symbol.
pub const CURRENCY_SYMBOL_VAR: &str = "RETAIL_CURRENCY_SYMBOL";

/// Built-in region table used when `RETAIL_REGION_TAXES` is unset.
pub const DEFAULT_REGION_TAXES: [(&str, f64); 5] = [
    ("AUK", 0.0685),
    ("WLG", 0.08),
    ("WAI", 0.0625),
    ("CHC", 0.04),
    ("TAS", 0.0825),
];

/// Calculator configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetailConfig {
    /// Region code → tax rate table handed to the pricing core.
    pub region_tax_map: RegionTaxMap,

    /// Currency symbol for the text summary.
    pub currency_symbol: String,
}

impl Default for RetailConfig {
    /// Five New Zealand regions, dollar symbol.
    fn default() -> Self {
        RetailConfig {
            region_tax_map: RegionTaxMap::from_entries(DEFAULT_REGION_TAXES),
            currency_symbol: "$".to_string(),
        }
    }
}

impl RetailConfig {
    /// Loads configuration from environment variables with fallback to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to
    /// its value. Lets tests supply variables without touching the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = RetailConfig::default();

        if let Some(raw) = lookup(REGION_TAXES_VAR) {
            config.region_tax_map = parse_region_taxes(&raw)?;
        }

        if let Some(symbol) = lookup(CURRENCY_SYMBOL_VAR) {
            config.currency_symbol = symbol;
        }

        Ok(config)
    }
}

/// Parses one `CODE=RATE` entry.
///
/// The code is returned as written; [`RegionTaxMap::with_region`] does the
/// normalizing and format checks.
pub fn parse_region_entry(entry: &str) -> Result<(String, f64), ConfigError> {
    let (code, rate) = entry
        .split_once('=')
        .ok_or_else(|| ConfigError::MalformedEntry(entry.trim().to_string()))?;

    let rate = parse_region_tax_rate(rate).map_err(|source| ConfigError::InvalidRegion {
        entry: entry.trim().to_string(),
        source,
    })?;

    Ok((code.trim().to_string(), rate))
}

/// Parses a full `CODE=RATE,CODE=RATE` list into a region table.
///
/// Every entry goes through the same checks as adding a region by hand,
/// so a bad entry is an error rather than a silently missing region.
pub fn parse_region_taxes(raw: &str) -> Result<RegionTaxMap, ConfigError> {
    let entries: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect();

    if entries.is_empty() {
        return Err(ConfigError::InvalidValue(REGION_TAXES_VAR.to_string()));
    }

    entries
        .into_iter()
        .try_fold(RegionTaxMap::new(), |map, entry| {
            let (code, rate) = parse_region_entry(entry)?;
            map.with_region(&code, rate)
                .map_err(|source| ConfigError::InvalidRegion {
                    entry: entry.to_string(),
                    source,
                })
        })
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Malformed region entry '{0}', expected CODE=RATE")]
    MalformedEntry(String),

    #[error("Invalid region entry '{entry}': {source}")]
    InvalidRegion {
        entry: String,
        #[source]
        source: ValidationError,
    },
}

// =============================================================================
// Unit Tests
// =============================================================================
