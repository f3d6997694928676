//! # Domain Types
//!
//! The price breakdown record produced by the pricing pipeline.
//!
//! ## Field Relationships
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        PriceBreakdown                                   │
//! │                                                                         │
//! │  quantity × price_per_item ──────────────► total                        │
//! │  total × discount_rate ──────────────────► discount_amount              │
//! │  total − discount_amount ────────────────► discounted_total             │
//! │  discounted_total × tax_rate ────────────► tax_amount                   │
//! │  discounted_total + tax_amount ──────────► final_total                  │
//! │                                                                         │
//! │  Discount always comes before tax.                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Price Breakdown
// =============================================================================

/// Full result of a price calculation.
///
/// `quantity`, `price_per_item` and `region` are echoed back exactly as
/// supplied (not normalized) for traceability. A fresh value is built on
/// every call; nothing is shared between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    /// Number of items, as supplied.
    pub quantity: f64,

    /// Unit price, as supplied.
    pub price_per_item: f64,

    /// Region code, as supplied (not uppercased).
    pub region: String,

    /// quantity × price_per_item, or 0 for invalid input.
    pub total: f64,

    /// One of 0, 0.03, 0.05, 0.07, 0.10, 0.15.
    pub discount_rate: f64,

    pub discount_amount: f64,

    pub discounted_total: f64,

    /// From the region table, or 0 for unknown regions.
    pub tax_rate: f64,

    pub tax_amount: f64,

    /// Amount payable.
    pub final_total: f64,
}

impl PriceBreakdown {
    /// Renders the "Calculation Summary" block using `currency_symbol`.
    ///
    /// ## Example
    /// ```rust
    /// use retail_core::breakdown::calculate_final_price;
    /// use retail_core::region::RegionTaxMap;
    ///
    /// let table = RegionTaxMap::from_entries([("WLG", 0.08)]);
    /// let summary = calculate_final_price(2.0, 100.0, "WLG", &table).summary("$");
    ///
    /// assert!(summary.contains("Final Total: $216.00"));
    /// ```
    pub fn summary(&self, currency_symbol: &str) -> String {
        let money = |value: f64| format!("{currency_symbol}{value:.2}");

        [
            "Calculation Summary".to_string(),
            format!("Total: {}", money(self.total)),
            format!("Discount Rate: {:.0}%", self.discount_rate * 100.0),
            format!("Discount Amount: {}", money(self.discount_amount)),
            format!("Discounted Total: {}", money(self.discounted_total)),
            format!("Tax Rate: {:.2}%", self.tax_rate * 100.0),
            format!("Tax Amount: {}", money(self.tax_amount)),
            format!("Final Total: {}", money(self.final_total)),
        ]
        .join("\n")
    }
}

/// Display uses `$`. Use [`PriceBreakdown::summary`] for another symbol.
impl fmt::Display for PriceBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary("$"))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
