//! # Validation Module
//!
//! Input validation utilities for catalog data and cart input.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde)                                      │
//! │  ├── Shape of the catalog JSON                                         │
//! │  └── Price text parsing                                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Required fields, non-negative prices                              │
//! │  └── Unique product keys across the catalog                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Resolver                                                     │
//! │  └── Degrades to an empty variant table, never fails                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tisso_core::money::Money;
//! use tisso_core::validation::validate_price;
//!
//! assert!(validate_price("price", Money::from_cents(98000)).is_ok());
//! assert!(validate_price("price", Money::from_cents(-1)).is_err());
//! ```

use std::collections::HashSet;

use crate::catalog::CatalogEntry;
use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted product title.
const MAX_TITLE_LEN: usize = 200;

/// Highest accepted configured price: one billion major units.
pub const MAX_PRICE: Money = Money::from_major(1_000_000_000);

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product title.
///
/// ## Rules
/// - Must not be empty
/// - At most 200 characters
pub fn validate_title(title: &str) -> ValidationResult<()> {
    let title = title.trim();

    if title.is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    if title.chars().count() > MAX_TITLE_LEN {
        return Err(ValidationError::OutOfRange {
            field: "title length".to_string(),
            min: 1,
            max: MAX_TITLE_LEN as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a configured price, in cents.
///
/// ## Rules
/// - Zero is allowed (free items)
/// - Must not be negative
/// - Must not exceed [`MAX_PRICE`]
pub fn validate_price(field: &str, price: Money) -> ValidationResult<()> {
    if price.is_negative() || price > MAX_PRICE {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: MAX_PRICE.cents(),
        });
    }

    Ok(())
}

// =============================================================================
// Catalog Validators
// =============================================================================

/// Validates one catalog entry.
///
/// Empty variant/color/size lists are accepted: the resolver turns them into
/// an empty table and the modal simply offers nothing.
pub fn validate_catalog_entry(entry: &CatalogEntry) -> ValidationResult<()> {
    validate_title(&entry.title)?;

    if let Some(base_price) = entry.base_price {
        validate_price("basePrice", base_price)?;
    }
    if let Some(price) = entry.price {
        validate_price("price", price)?;
    }

    for spec in entry.variants.iter().flatten() {
        if let Some(price) = spec.price {
            validate_price("variant price", price)?;
        }
    }

    Ok(())
}

/// Validates a whole catalog: every entry, plus unique product keys.
pub fn validate_catalog(entries: &[CatalogEntry]) -> ValidationResult<()> {
    let mut seen = HashSet::new();

    for entry in entries {
        validate_catalog_entry(entry)?;

        if !seen.insert(entry.product_key()) {
            return Err(ValidationError::Duplicate {
                field: "product".to_string(),
                value: entry.product_key().to_string(),
            });
        }
    }

    Ok(())
}
