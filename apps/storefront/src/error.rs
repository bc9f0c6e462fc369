//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  Presentation layer           Rust                                      │
//! │  ──────────────────           ────                                      │
//! │                                                                         │
//! │  select_color("Red")                                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Store gone? ──── ApiError::not_initialized() ───────┐           │  │
//! │  │         │                                             │           │  │
//! │  │         ▼                                             ▼           │  │
//! │  │  Domain error? ─── CoreError::UnknownColor ──────── ApiError ───►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A selection that resolves to no variant is not an error: `add_to_cart`
//! answers with `AddOutcome::Disabled`.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;
use tisso_core::{CoreError, ValidationError};

/// API error returned from storefront commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_INITIALIZED",
///   "message": "Cart store not initialized"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A shared store was used before it was created or after it was torn
    /// down. Always a programming error in the caller.
    NotInitialized,

    /// Product not in the catalog
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Catalog could not be read, parsed or validated
    CatalogError,

    /// A product command arrived while no product modal is open
    ModalClosed,

    /// Internal error (poisoned lock, etc.)
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// The cart store is not available.
    pub fn not_initialized() -> Self {
        ApiError::new(ErrorCode::NotInitialized, "Cart store not initialized")
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{resource} not found: {id}"))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// No product modal is open.
    pub fn modal_closed() -> Self {
        ApiError::new(ErrorCode::ModalClosed, "No product is open")
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id),
            CoreError::UnknownColor { .. } => ApiError::validation(err.to_string()),
        }
    }
}

// =============================================================================
// Catalog Error
// =============================================================================

/// Failures while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid catalog: {0}")]
    Invalid(#[from] ValidationError),
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        tracing::error!("Catalog load failed: {}", err);
        ApiError::new(ErrorCode::CatalogError, err.to_string())
    }
}
