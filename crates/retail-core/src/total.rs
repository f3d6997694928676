//! # Total Module
//!
//! Raw order total: quantity × unit price, before discount or tax.
//!
//! ## Invalid Input
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  calculate_total(quantity, price_per_item)                              │
//! │                                                                         │
//! │  NaN / ±inf / negative on either side ──► 0.0                           │
//! │  otherwise                              ──► quantity * price_per_item   │
//! │                                                                         │
//! │  Never panics, never returns an error.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

/// Returns `true` when `value` is a finite, non-negative number.
#[inline]
pub(crate) fn is_valid_amount(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// Calculates the raw total price before any discounts or taxes.
///
/// ## Example
/// ```rust
/// use retail_core::total::calculate_total;
///
/// assert_eq!(calculate_total(2.0, 5.0), 10.0);
/// assert_eq!(calculate_total(-1.0, 10.0), 0.0);
/// assert_eq!(calculate_total(f64::NAN, 10.0), 0.0);
/// ```
pub fn calculate_total(quantity: f64, price_per_item: f64) -> f64 {
    if !is_valid_amount(quantity) || !is_valid_amount(price_per_item) {
        return 0.0;
    }

    quantity * price_per_item
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        assert_eq!(calculate_total(2.0, 5.0), 10.0);
        assert_eq!(calculate_total(10.0, 100.0), 1000.0);
        assert_eq!(calculate_total(0.0, 100.0), 0.0);
        assert_eq!(calculate_total(100.0, 0.0), 0.0);
    }

    #[test]
    fn test_fractional_price() {
        assert_eq!(calculate_total(3.0, 2.5), 7.5);
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(calculate_total(-1.0, 10.0), 0.0);
        assert_eq!(calculate_total(5.0, -100.0), 0.0);
        assert_eq!(calculate_total(-2.0, -2.0), 0.0);
    }

    #[test]
    fn test_non_finite_values() {
        assert_eq!(calculate_total(f64::NAN, 100.0), 0.0);
        assert_eq!(calculate_total(100.0, f64::NAN), 0.0);
        assert_eq!(calculate_total(f64::INFINITY, 10.0), 0.0);
        assert_eq!(calculate_total(10.0, f64::INFINITY), 0.0);
        assert_eq!(calculate_total(f64::NEG_INFINITY, 10.0), 0.0);
    }

    #[test]
    fn test_negative_zero_is_valid() {
        // -0.0 >= 0.0 holds, so it is treated like zero
        assert_eq!(calculate_total(-0.0, 10.0), 0.0);
    }
}
