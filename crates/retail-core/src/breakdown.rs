//! # Breakdown Module
//!
//! Composes total, discount and tax into a [`PriceBreakdown`].
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  quantity, price ──► calculate_total ──► total                          │
//! │                                            │                            │
//! │                                            ▼                            │
//! │                                     discount_rate(total)                │
//! │                                            │                            │
//! │                                            ▼                            │
//! │                                     discounted_total                    │
//! │                                            │                            │
//! │  region, table ──► tax_rate ───────────────┤                            │
//! │                                            ▼                            │
//! │                                tax on discounted_total                  │
//! │                                            │                            │
//! │                                            ▼                            │
//! │                                       final_total                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Tax is charged on the post-discount amount, never on the gross total.

use crate::discount::discount_rate;
use crate::region::TaxTable;
use crate::tax::tax_rate;
use crate::total::calculate_total;
use crate::types::PriceBreakdown;

/// Calculates the full price breakdown for an order line.
///
/// Never fails: invalid quantity or price yields a zero total, which flows
/// through as zeros; an unknown region yields a zero tax rate.
///
/// ## Example
/// ```rust
/// use retail_core::breakdown::calculate_final_price;
/// use retail_core::region::RegionTaxMap;
///
/// let table = RegionTaxMap::from_entries([("WLG", 0.08)]);
/// let breakdown = calculate_final_price(2.0, 100.0, "WLG", &table);
///
/// assert_eq!(breakdown.total, 200.0);
/// assert_eq!(breakdown.discount_rate, 0.0);
/// assert_eq!(breakdown.tax_amount, 16.0);
/// assert_eq!(breakdown.final_total, 216.0);
/// ```
pub fn calculate_final_price<T: TaxTable + ?Sized>(
    quantity: f64,
    price_per_item: f64,
    region: &str,
    region_tax_map: &T,
) -> PriceBreakdown {
    let total = calculate_total(quantity, price_per_item);
    let discount_rate = discount_rate(total);
    let discount_amount = total * discount_rate;
    let discounted_total = total - discount_amount;
    let tax_rate = tax_rate(region, region_tax_map);
    let tax_amount = discounted_total * tax_rate;
    let final_total = discounted_total + tax_amount;

    PriceBreakdown {
        quantity,
        price_per_item,
        region: region.to_string(),
        total,
        discount_rate,
        discount_amount,
        discounted_total,
        tax_rate,
        tax_amount,
        final_total,
    }
}

/// Returns only the amount payable.
pub fn final_price_value<T: TaxTable + ?Sized>(
    quantity: f64,
    price_per_item: f64,
    region: &str,
    region_tax_map: &T,
) -> f64 {
    calculate_final_price(quantity, price_per_item, region, region_tax_map).final_total
}

// =============================================================================
// Unit Tests
// =============================================================================
