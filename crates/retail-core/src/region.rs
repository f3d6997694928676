//! # Region Tax Table
//!
//! Mapping from 3-letter region code to tax rate.
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Who Owns the Region Table?                           │
//! │                                                                         │
//! │  Caller (CLI config, web form store, ...)                               │
//! │     │                                                                   │
//! │     │  &RegionTaxMap  (borrowed, read-only)                             │
//! │     ▼                                                                   │
//! │  tax_rate() / calculate_final_price()                                   │
//! │                                                                         │
//! │  Edits never happen in place:                                           │
//! │     map.with_region("NEW", 0.05)  ──► Ok(new map)                       │
//! │     map.without_region("AUK")     ──► Ok(new map)                       │
//! │  The input map is untouched either way.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Keys are stored uppercase. `BTreeMap` keeps iteration and JSON output in
//! a stable, sorted order.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{ValidationError, ValidationResult};
use crate::validation::{normalize_region_code, validate_tax_rate};

// =============================================================================
// Lookup Seam
// =============================================================================

/// Anything that can answer "what is the tax rate for this (uppercase) code?".
///
/// Implemented for [`RegionTaxMap`] and for plain `HashMap`/`BTreeMap`
/// tables, so callers holding their own mapping don't need to convert it.
pub trait TaxTable {
    /// Looks up an already-uppercased region code.
    fn rate_for(&self, code: &str) -> Option<f64>;
}

impl TaxTable for HashMap<String, f64> {
    fn rate_for(&self, code: &str) -> Option<f64> {
        self.get(code).copied()
    }
}

impl TaxTable for BTreeMap<String, f64> {
    fn rate_for(&self, code: &str) -> Option<f64> {
        self.get(code).copied()
    }
}

// =============================================================================
// RegionTaxMap
// =============================================================================

/// Region code → tax rate table supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RegionTaxMap(BTreeMap<String, f64>);

impl RegionTaxMap {
    /// Creates an empty table.
    pub fn new() -> Self {
        RegionTaxMap(BTreeMap::new())
    }

    /// Builds a table from trusted entries. Keys are uppercased; no other
    /// validation happens here (use [`RegionTaxMap::with_region`] for that).
    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        RegionTaxMap(
            entries
                .into_iter()
                .map(|(code, rate)| (code.as_ref().to_uppercase(), rate))
                .collect(),
        )
    }

    /// Returns the rate for an exact (uppercase) code.
    pub fn get(&self, code: &str) -> Option<f64> {
        self.0.get(code).copied()
    }

    /// Checks if the table has an entry for an exact (uppercase) code.
    pub fn contains(&self, code: &str) -> bool {
        self.0.contains_key(code)
    }

    /// Number of regions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks if the table has no regions.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Region codes in sorted order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `(code, rate)` pairs in sorted code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(code, rate)| (code.as_str(), *rate))
    }

    /// Returns a new table with `code` added at `rate`.
    ///
    /// ## Rules
    /// - `code` is trimmed and uppercased, then must be exactly 3 letters A-Z
    /// - `code` must not already be present
    /// - `rate` must be finite and within `[0, 1]`
    ///
    /// ## Example
    /// ```rust
    /// use retail_core::region::RegionTaxMap;
    ///
    /// let base = RegionTaxMap::from_entries([("AUK", 0.0685)]);
    /// let extended = base.with_region(" nel ", 0.05).unwrap();
    ///
    /// assert_eq!(extended.get("NEL"), Some(0.05));
    /// assert!(!base.contains("NEL")); // base untouched
    /// assert!(base.with_region("AUK", 0.1).is_err());
    /// ```
    pub fn with_region(&self, code: &str, rate: f64) -> ValidationResult<RegionTaxMap> {
        let code = normalize_region_code("region code", code)?;

        if self.contains(&code) {
            return Err(ValidationError::Duplicate {
                field: "region code".to_string(),
                value: code,
            });
        }

        validate_tax_rate(rate)?;

        let mut entries = self.0.clone();
        entries.insert(code, rate);
        Ok(RegionTaxMap(entries))
    }

    /// Returns a new table without `code`.
    ///
    /// Fails if the code is unknown, or if it is the only region left.
    pub fn without_region(&self, code: &str) -> ValidationResult<RegionTaxMap> {
        let code = code.trim().to_uppercase();

        if !self.contains(&code) {
            return Err(ValidationError::NotFound {
                field: "region code".to_string(),
                value: code,
            });
        }

        if self.len() == 1 {
            return Err(ValidationError::LastEntry { value: code });
        }

        let mut entries = self.0.clone();
        entries.remove(&code);
        Ok(RegionTaxMap(entries))
    }
}

impl TaxTable for RegionTaxMap {
    fn rate_for(&self, code: &str) -> Option<f64> {
        self.get(code)
    }
}

impl<K: AsRef<str>> FromIterator<(K, f64)> for RegionTaxMap {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        RegionTaxMap::from_entries(iter)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
