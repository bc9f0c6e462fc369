//! # Error Types
//!
//! Domain-specific error types for tisso-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tisso-core errors (this file)                                         │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  storefront errors (app crate)                                         │
//! │  └── ApiError         - What the presentation layer sees               │
//! │                                                                         │
//! │  Flow: CoreError → ApiError            (commands)                      │
//! │        ValidationError → CatalogError → ApiError  (catalog loading)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! - A selection that resolves to no variant: the add action is simply
//!   disabled.
//! - A catalog entry with no variants and no colors/sizes: it resolves to an
//!   empty variant table.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product cannot be found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// A color label that the product does not offer.
    ///
    /// ## When This Occurs
    /// - The presentation layer sends a label outside the product's color
    ///   options (stale UI, or a third color past the option cap)
    #[error("Color {label} is not offered for {product}")]
    UnknownColor { product: String, label: String },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when catalog data or caller input doesn't meet
/// requirements. Used for early validation before business logic runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., unparseable price text).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., two products with the same key).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::UnknownColor {
            product: "1".to_string(),
            label: "Red".to_string(),
        };
        assert_eq!(err.to_string(), "Color Red is not offered for 1");

        let err = CoreError::ProductNotFound("7".to_string());
        assert_eq!(err.to_string(), "Product not found: 7");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "title".to_string(),
        };
        assert_eq!(err.to_string(), "title is required");

        let err = ValidationError::Duplicate {
            field: "product".to_string(),
            value: "1".to_string(),
        };
        assert_eq!(err.to_string(), "product '1' already exists");
    }
}
