//! # Validation Module
//!
//! Form input validation for the retail calculator.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form / CLI (THIS MODULE)                                     │
//! │  ├── Raw strings → typed values                                        │
//! │  ├── quantity: positive integer                                        │
//! │  ├── price: positive number                                            │
//! │  └── region: exactly 3 letters, present in the tax table               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Pricing functions                                            │
//! │  └── Anything still invalid degrades to 0 (never errors)               │
//! │                                                                         │
//! │  Defense in depth: the form catches it, the core survives it           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use retail_core::validation::{parse_price, parse_quantity};
//!
//! assert_eq!(parse_quantity("10").unwrap(), 10);
//! assert!(parse_quantity("2.5").is_err());
//! assert!(parse_price("-1").is_err());
//! ```

use std::fmt;

use crate::error::{ValidationError, ValidationResult};
use crate::region::RegionTaxMap;

/// Exact length of a region code.
pub const REGION_CODE_LEN: usize = 3;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses a raw quantity field.
///
/// ## Rules
/// - Must not be empty
/// - Must be a whole number greater than zero (`"5"`, `"5.0"` and `"1e2"`
///   are accepted, `"2.5"` and `"0"` are not)
/// - Must fit in a `u32`
pub fn parse_quantity(raw: &str) -> ValidationResult<u32> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: "quantity".to_string(),
        });
    }

    let invalid = || ValidationError::MustBeInteger {
        field: "quantity".to_string(),
    };

    let value: f64 = raw.parse().map_err(|_| invalid())?;
    if !value.is_finite() || value <= 0.0 || value.fract() != 0.0 {
        return Err(invalid());
    }

    if value > f64::from(u32::MAX) {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1.0,
            max: f64::from(u32::MAX),
        });
    }

    Ok(value as u32)
}

/// Parses a raw price-per-item field.
///
/// ## Rules
/// - Must not be empty
/// - Must be a finite number greater than zero
pub fn parse_price(raw: &str) -> ValidationResult<f64> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: "price".to_string(),
        });
    }

    let invalid = || ValidationError::MustBePositive {
        field: "price".to_string(),
    };

    let value: f64 = raw.parse().map_err(|_| invalid())?;
    if !value.is_finite() || value <= 0.0 {
        return Err(invalid());
    }

    Ok(value)
}

/// Validates a tax rate for the region table.
///
/// ## Rules
/// - Must be finite
/// - Must be within `[0, 1]` (0% to 100%)
pub fn validate_tax_rate(rate: f64) -> ValidationResult<()> {
    if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
        return Err(ValidationError::OutOfRange {
            field: "tax rate".to_string(),
            min: 0.0,
            max: 1.0,
        });
    }

    Ok(())
}

/// Parses a raw tax rate field (e.g. `"0.0685"`).
///
/// Only plain decimal notation is accepted: digits, optionally followed by a
/// dot and more digits. No sign, no exponent.
pub fn parse_region_tax_rate(raw: &str) -> ValidationResult<f64> {
    let raw = raw.trim();

    let out_of_range = || ValidationError::OutOfRange {
        field: "tax rate".to_string(),
        min: 0.0,
        max: 1.0,
    };

    let all_digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    let well_formed = match raw.split_once('.') {
        Some((whole, frac)) => all_digits(whole) && all_digits(frac),
        None => all_digits(raw),
    };
    if !well_formed {
        return Err(out_of_range());
    }

    let rate: f64 = raw.parse().map_err(|_| out_of_range())?;
    validate_tax_rate(rate)?;

    Ok(rate)
}

// =============================================================================
// Region Validators
// =============================================================================

/// Trims and uppercases a region code, then checks it is exactly three
/// ASCII letters.
///
/// `field` names the input in the error message ("region" on the quote form,
/// "region code" when editing the table).
///
/// ## Example
/// ```rust
/// use retail_core::validation::normalize_region_code;
///
/// assert_eq!(normalize_region_code("region", " auk ").unwrap(), "AUK");
/// assert!(normalize_region_code("region", "AU").is_err());
/// assert!(normalize_region_code("region", "A1K").is_err());
/// ```
pub fn normalize_region_code(field: &str, raw: &str) -> ValidationResult<String> {
    let code = raw.trim().to_uppercase();

    let is_code =
        code.len() == REGION_CODE_LEN && code.chars().all(|c| c.is_ascii_uppercase());
    if !is_code {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be exactly 3 letters".to_string(),
        });
    }

    Ok(code)
}

/// Checks that an (already normalized) region code is in the table.
pub fn validate_known_region(code: &str, region_tax_map: &RegionTaxMap) -> ValidationResult<()> {
    if !region_tax_map.contains(code) {
        return Err(ValidationError::NotFound {
            field: "region".to_string(),
            value: code.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Quote Form
// =============================================================================

/// Raw quote form input, exactly as typed.
#[derive(Debug, Clone, Default)]
pub struct QuoteForm {
    pub quantity: String,
    pub price: String,
    pub region: String,
}

/// A quote form that passed every field check.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedQuote {
    pub quantity: u32,
    pub price_per_item: f64,
    /// Normalized (uppercase) region code, known to the table.
    pub region: String,
}

/// Per-field errors from [`QuoteForm::validate`].
///
/// Every field is checked, so a form can show all messages at once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors {
    pub quantity: Option<ValidationError>,
    pub price: Option<ValidationError>,
    pub region: Option<ValidationError>,
}

impl FormErrors {
    /// Checks if no field failed.
    pub fn is_empty(&self) -> bool {
        self.quantity.is_none() && self.price.is_none() && self.region.is_none()
    }

    /// All field errors in form order.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        [&self.quantity, &self.price, &self.region]
            .into_iter()
            .flatten()
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.iter().map(ToString::to_string).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for FormErrors {}

impl QuoteForm {
    /// Creates a form from raw field values.
    pub fn new(
        quantity: impl Into<String>,
        price: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        QuoteForm {
            quantity: quantity.into(),
            price: price.into(),
            region: region.into(),
        }
    }

    /// Validates every field against the form rules and the region table.
    ///
    /// ## Flow
    /// ```text
    /// quantity ──► parse_quantity ─────────────┐
    /// price    ──► parse_price ──► q × p finite ┼──► all Ok?  ──► ValidatedQuote
    /// region   ──► normalize ──► known region ─┘     else    ──► FormErrors
    /// ```
    ///
    /// A quantity and price that are each fine on their own but whose
    /// product overflows are rejected on the price field.
    pub fn validate(&self, region_tax_map: &RegionTaxMap) -> Result<ValidatedQuote, FormErrors> {
        let quantity = parse_quantity(&self.quantity);
        let price = match (&quantity, parse_price(&self.price)) {
            (Ok(qty), Ok(price)) if !(f64::from(*qty) * price).is_finite() => {
                Err(ValidationError::TotalTooLarge {
                    field: "price".to_string(),
                })
            }
            (_, price) => price,
        };
        let region = normalize_region_code("region", &self.region)
            .and_then(|code| validate_known_region(&code, region_tax_map).map(|()| code));

        match (quantity, price, region) {
            (Ok(quantity), Ok(price_per_item), Ok(region)) => Ok(ValidatedQuote {
                quantity,
                price_per_item,
                region,
            }),
            (quantity, price, region) => Err(FormErrors {
                quantity: quantity.err(),
                price: price.err(),
                region: region.err(),
            }),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn region_tax_map() -> RegionTaxMap {
        RegionTaxMap::from_entries([("AUK", 0.0685), ("WLG", 0.08)])
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("1").unwrap(), 1);
        assert_eq!(parse_quantity(" 10 ").unwrap(), 10);
        assert_eq!(parse_quantity("5.0").unwrap(), 5);

        assert!(matches!(
            parse_quantity(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(parse_quantity("0").is_err());
        assert!(parse_quantity("-1").is_err());
        assert!(parse_quantity("2.5").is_err());
        assert!(parse_quantity("abc").is_err());
        assert!(parse_quantity("NaN").is_err());
        assert!(parse_quantity("inf").is_err());
    }

    #[test]
    fn test_parse_quantity_above_u32_is_out_of_range() {
        assert_eq!(parse_quantity("4294967295").unwrap(), u32::MAX);

        let err = parse_quantity("4294967296").unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { .. }));
        assert_eq!(
            err.to_string(),
            "quantity must be a number between 1 and 4294967295"
        );
    }

    #[test]
    fn test_parse_quantity_message() {
        let err = parse_quantity("2.5").unwrap_err();
        assert_eq!(err.to_string(), "quantity must be a positive integer");
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("100").unwrap(), 100.0);
        assert_eq!(parse_price("0.99").unwrap(), 0.99);

        assert!(parse_price("").is_err());
        assert!(parse_price("0").is_err());
        assert!(parse_price("-5").is_err());
        assert!(parse_price("free").is_err());
        assert!(parse_price("inf").is_err());
    }

    #[test]
    fn test_validate_tax_rate() {
        assert!(validate_tax_rate(0.0).is_ok());
        assert!(validate_tax_rate(0.0685).is_ok());
        assert!(validate_tax_rate(1.0).is_ok());
        assert!(validate_tax_rate(1.0001).is_err());
        assert!(validate_tax_rate(-0.1).is_err());
        assert!(validate_tax_rate(f64::INFINITY).is_err());
    }

    #[test]
    fn test_parse_region_tax_rate() {
        assert_eq!(parse_region_tax_rate("0.07").unwrap(), 0.07);
        assert_eq!(parse_region_tax_rate("1").unwrap(), 1.0);
        assert_eq!(parse_region_tax_rate("0").unwrap(), 0.0);

        assert!(parse_region_tax_rate("").is_err());
        assert!(parse_region_tax_rate("1.5").is_err());
        assert!(parse_region_tax_rate("-0.1").is_err());
        assert!(parse_region_tax_rate(".5").is_err());
        assert!(parse_region_tax_rate("5.").is_err());
        assert!(parse_region_tax_rate("1e-2").is_err());
    }

    #[test]
    fn test_normalize_region_code() {
        assert_eq!(normalize_region_code("region", "auk").unwrap(), "AUK");
        assert_eq!(normalize_region_code("region", " WlG ").unwrap(), "WLG");

        let err = normalize_region_code("region", "AUCK").unwrap_err();
        assert_eq!(err.to_string(), "region must be exactly 3 letters");
        assert!(normalize_region_code("region", "").is_err());
        assert!(normalize_region_code("region", "12A").is_err());
    }

    #[test]
    fn test_validate_known_region() {
        let map = region_tax_map();
        assert!(validate_known_region("AUK", &map).is_ok());
        assert!(validate_known_region("XYZ", &map).is_err());
    }

    #[test]
    fn test_quote_form_valid() {
        let quote = QuoteForm::new("10", "1000", "auk")
            .validate(&region_tax_map())
            .unwrap();
        assert_eq!(
            quote,
            ValidatedQuote {
                quantity: 10,
                price_per_item: 1000.0,
                region: "AUK".to_string(),
            }
        );
    }

    #[test]
    fn test_quote_form_collects_all_errors() {
        let errors = QuoteForm::new("0", "-3", "toolong")
            .validate(&region_tax_map())
            .unwrap_err();

        assert!(errors.quantity.is_some());
        assert!(errors.price.is_some());
        assert!(errors.region.is_some());
        assert_eq!(errors.iter().count(), 3);
        assert_eq!(
            errors.to_string(),
            "quantity must be a positive integer; price must be a positive number; \
             region must be exactly 3 letters"
        );
    }

    #[test]
    fn test_quote_form_unknown_region() {
        let errors = QuoteForm::new("1", "5", "XYZ")
            .validate(&region_tax_map())
            .unwrap_err();

        assert!(errors.quantity.is_none());
        assert!(errors.price.is_none());
        assert_eq!(
            errors.region,
            Some(ValidationError::NotFound {
                field: "region".to_string(),
                value: "XYZ".to_string(),
            })
        );
    }

    #[test]
    fn test_quote_form_rejects_overflowing_total() {
        let errors = QuoteForm::new("4000000000", "1e308", "AUK")
            .validate(&region_tax_map())
            .unwrap_err();

        assert!(errors.quantity.is_none());
        assert!(errors.region.is_none());
        assert_eq!(
            errors.price,
            Some(ValidationError::TotalTooLarge {
                field: "price".to_string(),
            })
        );
    }

    #[test]
    fn test_quote_form_accepts_large_finite_total() {
        let quote = QuoteForm::new("4000000000", "1e290", "AUK")
            .validate(&region_tax_map())
            .unwrap();
        assert_eq!(quote.quantity, 4_000_000_000);
    }

    #[test]
    fn test_default_form_errors_are_empty() {
        assert!(FormErrors::default().is_empty());
    }
}
