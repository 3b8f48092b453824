//! User-facing events raised by order submission.
//!
//! The core only describes what happened; rendering (toasts, banners,
//! terminal output) belongs to the host.

use serde::Serialize;
use std::fmt;
use ts_rs::TS;

use crate::money::Money;
use crate::types::OrderId;

/// Outcome of a submission attempt, as the customer should see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum Notification {
    /// Nothing was selected; no link may be opened.
    EmptyOrderRejected,
    /// Transcript built and links ready for dispatch.
    OrderAccepted { order_id: OrderId, total: Money },
}

impl Notification {
    pub fn title(&self) -> &'static str {
        match self {
            Notification::EmptyOrderRejected => "No products selected",
            Notification::OrderAccepted { .. } => "Order placed successfully!",
        }
    }

    pub fn description(&self) -> String {
        match self {
            Notification::EmptyOrderRejected => {
                "Please add at least one product to your order before submitting.".to_string()
            }
            Notification::OrderAccepted { order_id, total } => {
                format!("Your order ID is {}. Total amount: {}", order_id, total)
            }
        }
    }

    /// Rejections are rendered with the destructive style.
    pub fn is_destructive(&self) -> bool {
        matches!(self, Notification::EmptyOrderRejected)
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_text() {
        let n = Notification::EmptyOrderRejected;
        assert_eq!(n.title(), "No products selected");
        assert!(n.is_destructive());
    }

    #[test]
    fn test_accepted_text() {
        let n = Notification::OrderAccepted {
            order_id: OrderId::from_parts(1700000000000, 42),
            total: Money::from_rupees(1470),
        };
        assert_eq!(
            n.description(),
            "Your order ID is BM170000000000042. Total amount: 1470 Rs"
        );
        assert!(!n.is_destructive());
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let json = serde_json::to_value(Notification::EmptyOrderRejected).unwrap();
        assert_eq!(json["kind"], "empty_order_rejected");
    }
}
