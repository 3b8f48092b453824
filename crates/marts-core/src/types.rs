//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  CatalogItem    │   │CustomerIdentity │   │    OrderId      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id, title      │   │  full_name      │   │  "BM" prefix    │       │
//! │  │  base_rate      │   │  email          │   │  millis         │       │
//! │  │  quantity       │   │  mobile         │   │  suffix         │       │
//! │  │  total_price    │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │ RatePerThousand │   │    Channel      │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  rupees (i64)   │   │  Email          │                             │
//! │  │  270 = 270/1000 │   │  Messaging      │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Rate
// =============================================================================

/// A price in rupees per 1000 units of quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RatePerThousand(i64);

impl RatePerThousand {
    #[inline]
    pub const fn new(rupees: i64) -> Self {
        RatePerThousand(rupees)
    }

    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0
    }

    /// Prices `quantity` units at this rate, rounded half up.
    ///
    /// `None` if the price does not fit in [`Money`].
    #[inline]
    pub fn price_for(&self, quantity: i64) -> Option<Money> {
        Money::at_rate(*self, quantity)
    }

    #[inline]
    pub fn checked_add(self, other: RatePerThousand) -> Option<RatePerThousand> {
        self.0.checked_add(other.0).map(RatePerThousand)
    }
}


// =============================================================================
// Catalog Item
// =============================================================================

/// A purchasable product variant with the customer's current selection.
///
/// `id`, `title` and both rates are fixed when the catalog is built.
/// `quantity` and `double_side` change with selection events, and
/// `total_price` follows them. The fields are private so the price can
/// never drift from its inputs; see [`crate::catalog::recompute`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CatalogItem {
    id: String,
    title: String,
    base_rate: RatePerThousand,
    additional_rate: RatePerThousand,
    quantity: i64,
    double_side: bool,
    total_price: Money,
}

impl CatalogItem {
    /// Creates an unselected item (quantity 0, single-sided, price 0).
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        base_rate: i64,
        additional_rate: i64,
    ) -> Self {
        CatalogItem {
            id: id.into(),
            title: title.into(),
            base_rate: RatePerThousand::new(base_rate),
            additional_rate: RatePerThousand::new(additional_rate),
            quantity: 0,
            double_side: false,
            total_price: Money::zero(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn base_rate(&self) -> RatePerThousand {
        self.base_rate
    }

    /// Surcharge per 1000 when printed on both sides.
    pub fn additional_rate(&self) -> RatePerThousand {
        self.additional_rate
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn double_side(&self) -> bool {
        self.double_side
    }

    pub fn total_price(&self) -> Money {
        self.total_price
    }

    /// Rate for single- or double-sided printing of this item.
    ///
    /// `None` only for rates too large to add up.
    pub fn rate_for(&self, double_side: bool) -> Option<RatePerThousand> {
        if double_side {
            self.base_rate.checked_add(self.additional_rate)
        } else {
            Some(self.base_rate)
        }
    }

    /// Whether this item is part of the order.
    #[inline]
    pub fn is_line_item(&self) -> bool {
        self.quantity > 0
    }

    /// Stores a selection with its already computed price.
    pub(crate) fn set_selection(&mut self, quantity: i64, double_side: bool, total_price: Money) {
        self.quantity = quantity;
        self.double_side = double_side;
        self.total_price = total_price;
    }
}

// =============================================================================
// Customer Identity
// =============================================================================

/// The signed-in customer, supplied by the authentication collaborator.
///
/// The ordering core only reads these fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CustomerIdentity {
    pub full_name: String,
    pub email: String,
    pub mobile: String,
}

impl CustomerIdentity {
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        mobile: impl Into<String>,
    ) -> Self {
        CustomerIdentity {
            full_name: full_name.into(),
            email: email.into(),
            mobile: mobile.into(),
        }
    }
}

// =============================================================================
// Order ID
// =============================================================================

/// Best-effort order identifier: `BM{millis}{suffix}`.
///
/// Two submissions in the same millisecond can draw the same suffix, so
/// this is a reference for humans, not a primary key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderId(String);

impl OrderId {
    pub const PREFIX: &'static str = "BM";

    /// Builds the ID from a millisecond timestamp and a suffix below 1000.
    pub fn from_parts(timestamp_millis: i64, suffix: u32) -> Self {
        OrderId(format!("{}{}{}", Self::PREFIX, timestamp_millis, suffix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Channel
// =============================================================================

/// Delivery mechanism for an order transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Channel {
    /// `mailto:` link to the shop inbox.
    Email,
    /// Messaging-service link to the shop's number.
    Messaging,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Email => "email",
            Channel::Messaging => "messaging",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" | "mail" => Ok(Channel::Email),
            "messaging" | "whatsapp" => Ok(Channel::Messaging),
            other => Err(ValidationError::InvalidFormat {
                field: "channel".to_string(),
                reason: format!("unknown channel '{}', expected email or messaging", other),
            }),
        }
    }
}

// =============================================================================
// Destinations
// =============================================================================

/// Where submitted orders are sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Destinations {
    /// Inbox for `mailto:` orders.
    pub order_email: String,
    /// International number for the messaging link, digits only.
    pub messaging_number: String,
    /// Where customers send their artwork before ordering.
    pub design_email: String,
}

impl Default for Destinations {
    fn default() -> Self {
        Destinations {
            order_email: "info@businessmarts.site".to_string(),
            messaging_number: "9599270456".to_string(),
            design_email: "design@businessmarts.site".to_string(),
        }
    }
}
