//! # Discount Module
//!
//! Tiered volume discount on the raw order total.
//!
//! ## Tier Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  total >=      rate                                                     │
//! │  ─────────     ─────                                                    │
//! │  50,000        15%                                                      │
//! │  10,000        10%                                                      │
//! │   7,000         7%                                                      │
//! │   5,000         5%                                                      │
//! │   1,000         3%                                                      │
//! │  (else)         0%                                                      │
//! │                                                                         │
//! │  Thresholds are inclusive lower bounds, scanned top-down.               │
//! │  1000.00 → 3%, 999.99 → 0%                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::total::is_valid_amount;

/// Discount tiers as `(threshold, rate)` pairs, highest threshold first.
pub const DISCOUNT_TIERS: [(f64, f64); 5] = [
    (50_000.0, 0.15),
    (10_000.0, 0.10),
    (7_000.0, 0.07),
    (5_000.0, 0.05),
    (1_000.0, 0.03),
];

/// Returns the discount rate (as a decimal) for a pre-discount total.
///
/// Invalid totals (NaN, infinite, negative) get no discount.
///
/// ## Example
/// ```rust
/// use retail_core::discount::discount_rate;
///
/// assert_eq!(discount_rate(999.99), 0.0);
/// assert_eq!(discount_rate(1000.0), 0.03);
/// assert_eq!(discount_rate(50_000.0), 0.15);
/// assert_eq!(discount_rate(f64::NAN), 0.0);
/// ```
pub fn discount_rate(total: f64) -> f64 {
    if !is_valid_amount(total) {
        return 0.0;
    }

    DISCOUNT_TIERS
        .iter()
        .find(|(threshold, _)| total >= *threshold)
        .map(|(_, rate)| *rate)
        .unwrap_or(0.0)
}

/// Returns the discount rate as a percentage label, e.g. `"5%"`.
///
/// ```rust
/// use retail_core::discount::discount_rate_label;
///
/// assert_eq!(discount_rate_label(5_000.0), "5%");
/// assert_eq!(discount_rate_label(10.0), "0%");
/// ```
pub fn discount_rate_label(total: f64) -> String {
    crate::percent_label(discount_rate(total))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_first_tier() {
        assert_eq!(discount_rate(0.0), 0.0);
        assert_eq!(discount_rate(999.99), 0.0);
    }

    #[test]
    fn test_three_percent_tier() {
        assert_eq!(discount_rate(1000.0), 0.03);
        assert_eq!(discount_rate(4999.99), 0.03);
    }

    #[test]
    fn test_five_percent_tier() {
        assert_eq!(discount_rate(5000.0), 0.05);
        assert_eq!(discount_rate(6999.99), 0.05);
    }

    #[test]
    fn test_seven_percent_tier() {
        assert_eq!(discount_rate(7000.0), 0.07);
        assert_eq!(discount_rate(9999.99), 0.07);
    }

    #[test]
    fn test_ten_percent_tier() {
        assert_eq!(discount_rate(10_000.0), 0.10);
        assert_eq!(discount_rate(49_999.99), 0.10);
    }

    #[test]
    fn test_fifteen_percent_tier() {
        assert_eq!(discount_rate(50_000.0), 0.15);
        assert_eq!(discount_rate(100_000.0), 0.15);
    }

    #[test]
    fn test_invalid_totals() {
        assert_eq!(discount_rate(f64::NAN), 0.0);
        assert_eq!(discount_rate(-100.0), 0.0);
        assert_eq!(discount_rate(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_tiers_are_sorted_descending() {
        assert!(DISCOUNT_TIERS
            .windows(2)
            .all(|pair| pair[0].0 > pair[1].0 && pair[0].1 > pair[1].1));
    }

    #[test]
    fn test_discount_rate_label() {
        assert_eq!(discount_rate_label(0.0), "0%");
        assert_eq!(discount_rate_label(1_000.0), "3%");
        assert_eq!(discount_rate_label(7_000.0), "7%");
        assert_eq!(discount_rate_label(10_000.0), "10%");
        assert_eq!(discount_rate_label(60_000.0), "15%");
    }
}
