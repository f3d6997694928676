//! # Quote Command
//!
//! Validates the raw form fields, then prices the order line.

use retail_core::{calculate_final_price, QuoteForm, RegionTaxMap};
use tracing::{info, warn};

use crate::cli::QuoteArgs;
use crate::error::AppResult;

/// Runs a quote and returns the rendered output.
///
/// ## Flow
/// ```text
/// QuoteArgs (raw strings)
///      │
///      ▼
/// QuoteForm::validate ──► FormErrors ──► AppError (every field message)
///      │
///      ▼
/// calculate_final_price ──► summary text or JSON
/// ```
pub fn run(
    args: &QuoteArgs,
    region_tax_map: &RegionTaxMap,
    currency_symbol: &str,
) -> AppResult<String> {
    let form = QuoteForm::new(&args.quantity, &args.price, &args.region);

    let quote = form.validate(region_tax_map).map_err(|errors| {
        warn!(%errors, "Quote form rejected");
        errors
    })?;

    let breakdown = calculate_final_price(
        f64::from(quote.quantity),
        quote.price_per_item,
        &quote.region,
        region_tax_map,
    );

    info!(
        quantity = quote.quantity,
        region = %quote.region,
        discount_rate = breakdown.discount_rate,
        final_total = breakdown.final_total,
        "Quote computed"
    );

    if args.json {
        Ok(serde_json::to_string_pretty(&breakdown)?)
    } else {
        Ok(breakdown.summary(currency_symbol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RetailConfig;
    use crate::error::AppError;

    fn args(quantity: &str, price: &str, region: &str, json: bool) -> QuoteArgs {
        QuoteArgs {
            quantity: quantity.to_string(),
            price: price.to_string(),
            region: region.to_string(),
            json,
        }
    }

    #[test]
    fn test_text_quote() {
        let config = RetailConfig::default();
        let output = run(&args("10", "1000", "auk", false), &config.region_tax_map, "$").unwrap();

        assert!(output.starts_with("Calculation Summary"));
        assert!(output.contains("Discount Rate: 10%"));
        assert!(output.contains("Tax Amount: $616.50"));
        assert!(output.contains("Final Total: $9616.50"));
    }

    #[test]
    fn test_json_quote() {
        let config = RetailConfig::default();
        let output = run(&args("2", "100", "WLG", true), &config.region_tax_map, "$").unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["quantity"], 2.0);
        assert_eq!(json["region"], "WLG");
        assert_eq!(json["taxRate"], 0.08);
        assert_eq!(json["finalTotal"], 216.0);
    }

    #[test]
    fn test_overflowing_total_is_rejected() {
        let config = RetailConfig::default();
        let err = run(&args("4000000000", "1e308", "AUK", false), &config.region_tax_map, "$")
            .unwrap_err();

        assert!(matches!(err, AppError::Core(_)));
        assert!(err
            .to_string()
            .contains("price is too large for the requested quantity"));
    }

    #[test]
    fn test_invalid_form_reports_every_field() {
        let config = RetailConfig::default();
        let err = run(&args("0", "abc", "XYZ", false), &config.region_tax_map, "$").unwrap_err();

        assert!(matches!(err, AppError::Core(_)));
        let message = err.to_string();
        assert!(message.contains("quantity must be a positive integer"));
        assert!(message.contains("price must be a positive number"));
        assert!(message.contains("region 'XYZ' is not a known region"));
    }
}
