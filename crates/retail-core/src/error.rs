//! # Error Types
//!
//! Domain-specific error types for retail-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  retail-core errors (this file)                                        │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Form / region table input failures             │
//! │                                                                         │
//! │  retail-cli errors (separate crate)                                    │
//! │  ├── ConfigError      - Bad environment configuration                  │
//! │  └── AppError         - What the user sees before exit                 │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → stderr                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Where Errors Do NOT Exist
//! The pricing functions (`calculate_total`, `discount_rate`, `tax_rate`,
//! `calculate_final_price`) never fail. Invalid numbers degrade to `0`.
//! Errors only come out of the validation layer that callers run first.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Several form fields failed at once.
    #[error("Invalid form input: {0}")]
    Form(#[from] crate::validation::FormErrors),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Each variant maps directly to the message a form shows under the field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be strictly positive.
    #[error("{field} must be a positive number")]
    MustBePositive { field: String },

    /// Value must be a positive whole number.
    #[error("{field} must be a positive integer")]
    MustBeInteger { field: String },

    /// Invalid format (e.g., region code with digits).
    #[error("{field} {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Numeric value is out of range.
    #[error("{field} must be a number between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Value is fine alone, but quantity × price is not a finite number.
    #[error("{field} is too large for the requested quantity")]
    TotalTooLarge { field: String },

    /// Duplicate value (e.g., region code already in the table).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },

    /// Value is not a member of the known set.
    #[error("{field} '{value}' is not a known region")]
    NotFound { field: String, value: String },

    /// The last region of a table cannot be removed.
    #[error("cannot remove '{value}': at least one region must remain")]
    LastEntry { value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
