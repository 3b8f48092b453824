//! # Validation Module
//!
//! Input checks that run before a selection or sign-in touches state.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend                                                     │
//! │  └── Quantity selector only offers 0..=10000 in thousands              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Storefront command                                           │
//! │  └── THIS MODULE: parse + range checks, customer fields present        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Catalog                                                      │
//! │  └── Item lookup by ID                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog is a store, not a gatekeeper: quantities only have to be
//! non-negative integers.

use crate::error::ValidationError;
use crate::types::CustomerIdentity;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Quantity
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be zero or positive
///
/// ## Example
/// ```rust
/// use marts_core::validation::validate_quantity;
///
/// assert!(validate_quantity(0).is_ok());
/// assert!(validate_quantity(2500).is_ok());
/// assert!(validate_quantity(-1).is_err());
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::Negative {
            field: "quantity".to_string(),
            value: qty,
        });
    }

    Ok(())
}

/// Parses a quantity coming from the selector as text.
///
/// Surrounding whitespace is ignored. Anything that is not a base-10
/// integer, or is negative, is rejected.
pub fn parse_quantity(text: &str) -> ValidationResult<i64> {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Required {
            field: "quantity".to_string(),
        });
    }

    let qty = trimmed
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: format!("'{}' is not a whole number", trimmed),
        })?;

    validate_quantity(qty)?;
    Ok(qty)
}

// =============================================================================
// Identifiers
// =============================================================================

/// Validates a catalog item ID.
pub fn validate_item_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "item id".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Customer
// =============================================================================

/// Validates the identity handed over by the authentication collaborator.
///
/// ## Rules
/// - Name, email and mobile must all be non-blank
/// - Email must contain an `@` with text on both sides
pub fn validate_customer(customer: &CustomerIdentity) -> ValidationResult<()> {
    for (field, value) in [
        ("full name", &customer.full_name),
        ("email", &customer.email),
        ("mobile", &customer.mobile),
    ] {
        if value.trim().is_empty() {
            return Err(ValidationError::Required {
                field: field.to_string(),
            });
        }
    }

    match customer.email.trim().split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must look like name@domain".to_string(),
        }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
