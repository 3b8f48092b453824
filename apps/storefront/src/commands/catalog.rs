//! # Catalog Commands
//!
//! Selection events from the product list.
//!
//! ## Selection Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Selection Lifecycle                                  │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                         │
//! │  │ Nothing  │────►│ Selected │────►│ Submitted│                         │
//! │  │ selected │     │ items    │     │ (links)  │                         │
//! │  └──────────┘     └──────────┘     └──────────┘                         │
//! │       ▲                │                                                │
//! │       │           set_quantity                                          │
//! │       │           set_double_side                                       │
//! │       │                │                                                │
//! │       └──── logout ────┘                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;

use marts_core::{Catalog, CatalogItem, Money, QUANTITY_OPTIONS};

use super::require_customer;
use crate::error::ApiError;
use crate::state::{CatalogState, SessionState};

/// Catalog response including items and the running total.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub items: Vec<CatalogItem>,
    pub total_order_value: Money,
}

impl From<&Catalog> for CatalogResponse {
    fn from(catalog: &Catalog) -> Self {
        CatalogResponse {
            items: catalog.items().to_vec(),
            total_order_value: catalog.total_order_value(),
        }
    }
}

/// Gets every item with its current selection and price.
pub fn get_catalog(catalog: &CatalogState) -> CatalogResponse {
    debug!("get_catalog command");
    catalog.with_catalog(|c| CatalogResponse::from(c))
}

/// Quantities the selector should offer.
pub fn get_quantity_options() -> Vec<i64> {
    QUANTITY_OPTIONS.to_vec()
}

/// Sets an item's quantity from the selector's string value.
///
/// ## Arguments
/// * `item_id` - Catalog item ID ("1".."7")
/// * `quantity` - Selector value, e.g. "2000"; "0" removes the item
///
/// ## Returns
/// Updated catalog with recomputed prices
pub fn set_quantity(
    session: &SessionState,
    catalog: &CatalogState,
    item_id: &str,
    quantity: &str,
) -> Result<CatalogResponse, ApiError> {
    debug!(item_id = %item_id, quantity = %quantity, "set_quantity command");
    require_customer(session)?;

    catalog.with_catalog_mut(|c| {
        c.set_quantity_text(item_id, quantity)?;
        Ok::<_, ApiError>(CatalogResponse::from(&*c))
    })
}

/// Turns double-sided printing on or off for an item.
pub fn set_double_side(
    session: &SessionState,
    catalog: &CatalogState,
    item_id: &str,
    enabled: bool,
) -> Result<CatalogResponse, ApiError> {
    debug!(item_id = %item_id, enabled = %enabled, "set_double_side command");
    require_customer(session)?;

    catalog.with_catalog_mut(|c| {
        c.set_double_side(item_id, enabled)?;
        Ok::<_, ApiError>(CatalogResponse::from(&*c))
    })
}
