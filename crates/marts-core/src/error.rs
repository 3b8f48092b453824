//! # Error Types
//!
//! Domain-specific error types for marts-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  marts-core errors (this file)                                         │
//! │  ├── CoreError        - Catalog and order failures                     │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  Storefront errors (in app)                                            │
//! │  └── ApiError         - What the UI sees (serialized)                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → UI                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both failure kinds the ordering core knows about (bad quantity, empty
//! order) are recoverable by the user. Nothing here is fatal.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Catalog and order errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A selection event carried a value the catalog cannot store.
    ///
    /// ## When This Occurs
    /// - Quantity is negative
    /// - Quantity is so large its price or the order total overflows
    /// - Quantity text from the selector is not a number
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// No catalog item has the given ID.
    #[error("Catalog item not found: {0}")]
    ItemNotFound(String),

    /// Submission attempted with every quantity at zero.
    ///
    /// ## User Workflow
    /// ```text
    /// Click "Email Order"
    ///      │
    ///      ▼
    /// No item has quantity > 0
    ///      │
    ///      ▼
    /// EmptyOrder
    ///      │
    ///      ▼
    /// UI shows: "No products selected" (no link is opened)
    /// ```
    #[error("Order is empty: add at least one product before submitting")]
    EmptyOrder,
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative (got {value})")]
    Negative { field: String, value: i64 },

    /// Value is valid on its own but its price cannot be represented.
    #[error("{field} is too large (got {value})")]
    TooLarge { field: String, value: i64 },

    /// Invalid format (e.g., quantity text that is not a number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
