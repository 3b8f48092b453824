//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  Command Function                                                       │
//! │  Result<T, ApiError>                                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Not signed in? ──────── ApiError::unauthenticated() ────────┐         │
//! │         │                                                     │         │
//! │         ▼                                                     ▼         │
//! │  Core error? ─── CoreError::EmptyOrder ─────────────────► ApiError ──►  │
//! │         │        (carries the "No products selected"         UI shows   │
//! │         │         notification)                              message    │
//! │         ▼                                                               │
//! │  Success ─────────────────────────────────────────────────────────────► │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! The UI receives both a machine-readable `code` and a human-readable
//! `message`. Rejections the customer must see also carry a `notification`.

use serde::Serialize;

use marts_core::{CoreError, Notification, ValidationError};

use crate::state::ConfigError;

/// API error returned from storefront commands.
///
/// ```json
/// {
///   "code": "EMPTY_ORDER",
///   "message": "Order is empty: add at least one product before submitting",
///   "notification": { "kind": "empty_order_rejected" }
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,

    /// Event the UI should render, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Unknown catalog item
    NotFound,

    /// Malformed quantity, channel or identity
    ValidationError,

    /// Submission with nothing selected
    EmptyOrder,

    /// Command needs a signed-in customer
    Unauthenticated,

    /// Bad startup configuration
    ConfigError,

    /// Internal error (500)
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            notification: None,
        }
    }

    pub fn with_notification(mut self, notification: Notification) -> Self {
        self.notification = Some(notification);
        self
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    pub fn unauthenticated() -> Self {
        ApiError::new(ErrorCode::Unauthenticated, "Please sign in to place an order")
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ItemNotFound(id) => ApiError::not_found("Catalog item", &id),
            CoreError::InvalidInput(e) => ApiError::validation(e.to_string()),
            CoreError::EmptyOrder => {
                ApiError::new(ErrorCode::EmptyOrder, CoreError::EmptyOrder.to_string())
                    .with_notification(Notification::EmptyOrderRejected)
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::internal(format!("Serialization error: {}", err))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_order_carries_notification() {
        let err = ApiError::from(CoreError::EmptyOrder);
        assert_eq!(err.code, ErrorCode::EmptyOrder);
        assert_eq!(err.notification, Some(Notification::EmptyOrderRejected));

        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "EMPTY_ORDER");
        assert_eq!(json["notification"]["kind"], "empty_order_rejected");
    }

    #[test]
    fn test_core_error_mapping() {
        let err = ApiError::from(CoreError::ItemNotFound("9".to_string()));
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Catalog item not found: 9");

        let err = ApiError::from(CoreError::InvalidInput(ValidationError::Negative {
            field: "quantity".to_string(),
            value: -5,
        }));
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.notification.is_none());

        let json = serde_json::to_value(&err).unwrap();
        assert!(json.get("notification").is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ApiError::unauthenticated().to_string(),
            "[Unauthenticated] Please sign in to place an order"
        );
    }
}
