//! # retail-core: Pure Pricing Logic for the Retail Calculator
//!
//! This crate turns a quantity, a unit price and a region code into a full
//! price breakdown: subtotal, tiered volume discount, regional tax, final
//! total. Every function is pure, with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Retail Calculator Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │             Front End (retail-cli, web form, ...)               │   │
//! │  │   raw input ──► validation ──► quote ──► rendered summary       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │  &RegionTaxMap passed on every call    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ retail-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   total   │  │ discount  │  │    tax    │  │ breakdown │  │   │
//! │  │   │  q × p    │  │  tiers    │  │  lookup   │  │  compose  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • NO LOGGING • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`total`] - quantity × unit price
//! - [`discount`] - tiered discount rate
//! - [`tax`] - region tax lookup
//! - [`breakdown`] - composes the above into a [`PriceBreakdown`]
//! - [`region`] - the caller-owned [`RegionTaxMap`]
//! - [`validation`] - form input rules, run before pricing
//! - [`types`] - the [`PriceBreakdown`] record
//! - [`error`] - validation error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, bit for bit
//! 2. **Never Fail**: pricing degrades invalid numbers to `0` instead of erroring
//! 3. **Explicit Table**: the region tax table is a parameter, never ambient state
//! 4. **Discount Before Tax**: tax is charged on the discounted total
//!
//! ## Example Usage
//!
//! ```rust
//! use retail_core::{calculate_final_price, RegionTaxMap};
//!
//! let table = RegionTaxMap::from_entries([("AUK", 0.0685), ("WLG", 0.08)]);
//! let breakdown = calculate_final_price(10.0, 1000.0, "auk", &table);
//!
//! assert_eq!(breakdown.total, 10_000.0);
//! assert_eq!(breakdown.discount_rate, 0.1);
//! assert_eq!(breakdown.discounted_total, 9000.0);
//! assert!((breakdown.final_total - 9616.5).abs() < 1e-9);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod breakdown;
pub mod discount;
pub mod error;
pub mod region;
pub mod tax;
pub mod total;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use retail_core::calculate_final_price` instead of
// `use retail_core::breakdown::calculate_final_price`

pub use breakdown::{calculate_final_price, final_price_value};
pub use discount::{discount_rate, discount_rate_label};
pub use error::{CoreError, ValidationError, ValidationResult};
pub use region::{RegionTaxMap, TaxTable};
pub use tax::{tax_rate, tax_rate_for, tax_rate_label};
pub use total::calculate_total;
pub use types::PriceBreakdown;
pub use validation::{FormErrors, QuoteForm, ValidatedQuote};

// =============================================================================
// Crate-Level Helpers
// =============================================================================

/// Formats a decimal rate as a percentage label: `0.0685` → `"6.85%"`.
///
/// Float noise from `rate * 100` (e.g. `7.000000000000001`) is rounded away
/// at four decimal places. Zero, negative and non-finite rates print `"0%"`.
pub(crate) fn percent_label(rate: f64) -> String {
    if !rate.is_finite() || rate <= 0.0 {
        return "0%".to_string();
    }

    let pct = format!("{:.4}", rate * 100.0);
    let pct = pct.trim_end_matches('0').trim_end_matches('.');
    format!("{pct}%")
}

#[cfg(test)]
mod tests {
    use super::percent_label;

    #[test]
    fn test_percent_label() {
        assert_eq!(percent_label(0.0), "0%");
        assert_eq!(percent_label(0.07), "7%");
        assert_eq!(percent_label(0.15), "15%");
        assert_eq!(percent_label(0.0685), "6.85%");
        assert_eq!(percent_label(0.0625), "6.25%");
        assert_eq!(percent_label(1.0), "100%");
        assert_eq!(percent_label(f64::NAN), "0%");
    }
}
