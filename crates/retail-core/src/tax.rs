//! # Tax Module
//!
//! Region tax rate lookup.
//!
//! ## Lookup Rules
//! ```text
//! region ──► empty? ──yes──► 0.0
//!              │
//!              no
//!              ▼
//!         uppercase ──► table.rate_for(code) ──► Some(rate) ──► rate
//!                                           └──► None       ──► 0.0
//! ```
//!
//! Unknown regions are silently untaxed, never an error.

use crate::region::TaxTable;

/// Returns the tax rate (as a decimal) for a region code.
///
/// The lookup is case-insensitive on the input side; the table's keys are
/// expected to be uppercase already.
///
/// ## Example
/// ```rust
/// use retail_core::region::RegionTaxMap;
/// use retail_core::tax::tax_rate;
///
/// let table = RegionTaxMap::from_entries([("AUK", 0.0685)]);
///
/// assert_eq!(tax_rate("auk", &table), 0.0685);
/// assert_eq!(tax_rate("XYZ", &table), 0.0);
/// assert_eq!(tax_rate("", &table), 0.0);
/// ```
pub fn tax_rate<T: TaxTable + ?Sized>(region: &str, region_tax_map: &T) -> f64 {
    if region.is_empty() {
        return 0.0;
    }

    let code = region.to_uppercase();
    region_tax_map.rate_for(&code).unwrap_or(0.0)
}

/// Same as [`tax_rate`] for callers whose region may be missing.
pub fn tax_rate_for<T: TaxTable + ?Sized>(region: Option<&str>, region_tax_map: &T) -> f64 {
    region.map_or(0.0, |region| tax_rate(region, region_tax_map))
}

/// Returns the tax rate as a percentage label, e.g. `"8%"` or `"6.85%"`.
pub fn tax_rate_label<T: TaxTable + ?Sized>(region: &str, region_tax_map: &T) -> String {
    crate::percent_label(tax_rate(region, region_tax_map))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::RegionTaxMap;
    use std::collections::HashMap;

    fn region_tax_map() -> RegionTaxMap {
        RegionTaxMap::from_entries([
            ("AUK", 0.0685),
            ("WLG", 0.08),
            ("WAI", 0.0625),
            ("CHC", 0.04),
            ("TAS", 0.0825),
        ])
    }

    #[test]
    fn test_supported_regions() {
        let map = region_tax_map();
        assert_eq!(tax_rate("AUK", &map), 0.0685);
        assert_eq!(tax_rate("WLG", &map), 0.08);
        assert_eq!(tax_rate("WAI", &map), 0.0625);
        assert_eq!(tax_rate("CHC", &map), 0.04);
        assert_eq!(tax_rate("TAS", &map), 0.0825);
    }

    #[test]
    fn test_case_insensitive() {
        let map = region_tax_map();
        assert_eq!(tax_rate("auk", &map), 0.0685);
        assert_eq!(tax_rate("wLg", &map), 0.08);
        assert_eq!(tax_rate("ChC", &map), 0.04);
    }

    #[test]
    fn test_unknown_or_invalid_regions() {
        let map = region_tax_map();
        assert_eq!(tax_rate("", &map), 0.0);
        assert_eq!(tax_rate("XYZ", &map), 0.0);
        assert_eq!(tax_rate("123", &map), 0.0);
        assert_eq!(tax_rate_for(None, &map), 0.0);
        assert_eq!(tax_rate_for(Some("tas"), &map), 0.0825);
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(tax_rate("AUK", &RegionTaxMap::new()), 0.0);
    }

    #[test]
    fn test_plain_hash_map() {
        let mut map = HashMap::new();
        map.insert("WLG".to_string(), 0.08);
        assert_eq!(tax_rate("wlg", &map), 0.08);
    }

    #[test]
    fn test_tax_rate_label() {
        let map = region_tax_map();
        assert_eq!(tax_rate_label("WLG", &map), "8%");
        assert_eq!(tax_rate_label("AUK", &map), "6.85%");
        assert_eq!(tax_rate_label("TAS", &map), "8.25%");
        assert_eq!(tax_rate_label("XYZ", &map), "0%");
    }
}
