//! # Catalog & Pricing Engine
//!
//! Owns the fixed list of business-card variants and keeps every item's
//! `total_price` in step with its selection.
//!
//! ## Recompute-on-Write
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Selection Events                                     │
//! │                                                                         │
//! │  Quantity selector ───► set_quantity(id, 2000) ──┐                     │
//! │                                                   ├──► recompute(item)  │
//! │  Double-side box  ───► set_double_side(id, true) ┘         │            │
//! │                                                             ▼            │
//! │                                        total_price = round(rate × q/1000)│
//! │                                                                         │
//! │  total_order_value() ──► Σ total_price (on demand, never cached)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog is a plain value owned by whoever hosts the session. There
//! is no process-wide instance.

use serde::Serialize;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::CatalogItem;
use crate::validation::{parse_quantity, validate_item_id, validate_quantity};

/// Surcharge per 1000 for double-sided printing, shared by every card.
pub const DOUBLE_SIDE_RATE: i64 = 100;

/// Quantities offered by the selector. Zero means "not needed".
pub const QUANTITY_OPTIONS: [i64; 11] = [
    0, 1000, 2000, 3000, 4000, 5000, 6000, 7000, 8000, 9000, 10000,
];

/// `(id, title, base rate per 1000)` for the business-card range.
const BUSINESS_CARDS: [(&str, &str, i64); 7] = [
    ("1", "Without lamination Cards", 270),
    ("2", "Gloss Coated Small Cards", 300),
    ("3", "Without Lamination Small Cards", 250),
    ("4", "Gloss Coated Cards", 330),
    ("5", "Gloss Laminated Cards", 350),
    ("6", "Matt Lamination Cards", 650),
    ("7", "Matt lamination UV coated Cards", 1100),
];

// =============================================================================
// Pricing
// =============================================================================

/// Returns `item` with `total_price` derived from its current selection.
///
/// `round((base + double_side × additional) × quantity / 1000)` when the
/// quantity is positive, otherwise 0. Calling it again on the result changes
/// nothing.
///
/// ## Errors
/// [`CoreError::InvalidInput`] if the price does not fit in [`Money`].
///
/// ## Example
/// ```rust
/// use marts_core::catalog::recompute;
/// use marts_core::types::CatalogItem;
///
/// let item = recompute(CatalogItem::new("1", "Cards", 270, 100)).unwrap();
/// assert_eq!(item.total_price().rupees(), 0);
/// ```
pub fn recompute(mut item: CatalogItem) -> CoreResult<CatalogItem> {
    let (quantity, double_side) = (item.quantity(), item.double_side());
    let price = price_of(&item, quantity, double_side)?;
    item.set_selection(quantity, double_side, price);
    Ok(item)
}

/// Price of `item` for a selection it may not hold yet.
fn price_of(item: &CatalogItem, quantity: i64, double_side: bool) -> CoreResult<Money> {
    if quantity <= 0 {
        return Ok(Money::zero());
    }

    item.rate_for(double_side)
        .and_then(|rate| rate.price_for(quantity))
        .ok_or_else(|| too_large(quantity))
}

fn too_large(quantity: i64) -> CoreError {
    CoreError::InvalidInput(ValidationError::TooLarge {
        field: "quantity".to_string(),
        value: quantity,
    })
}

// =============================================================================
// Catalog
// =============================================================================

/// Ordered, fixed set of catalog items for one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Builds a catalog from items, clearing any selection they carry.
    pub fn new(items: Vec<CatalogItem>) -> Self {
        let mut catalog = Catalog { items };
        catalog.reset();
        catalog
    }

    /// The seven business-card variants, nothing selected.
    pub fn business_cards() -> Self {
        Catalog::new(
            BUSINESS_CARDS
                .iter()
                .map(|(id, title, rate)| CatalogItem::new(*id, *title, *rate, DOUBLE_SIDE_RATE))
                .collect(),
        )
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up an item by ID.
    pub fn get(&self, item_id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|i| i.id() == item_id)
    }

    fn position(&self, item_id: &str) -> CoreResult<usize> {
        validate_item_id(item_id)?;
        self.items
            .iter()
            .position(|i| i.id() == item_id)
            .ok_or_else(|| CoreError::ItemNotFound(item_id.to_string()))
    }

    /// Prices a new selection for the item at `index` and stores it.
    ///
    /// Nothing changes unless both the item price and the order total fit
    /// in [`Money`].
    fn apply_selection(
        &mut self,
        index: usize,
        quantity: i64,
        double_side: bool,
    ) -> CoreResult<&CatalogItem> {
        let price = price_of(&self.items[index], quantity, double_side)?;

        let others = self
            .items
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, item)| item.total_price());
        Money::checked_sum(others)
            .and_then(|total| total.checked_add(price))
            .ok_or_else(|| too_large(quantity))?;

        let item = &mut self.items[index];
        item.set_selection(quantity, double_side, price);
        Ok(&*item)
    }

    /// Stores a new quantity for an item and reprices it.
    ///
    /// Any non-negative integer is accepted; the selector's thousands are a
    /// UI convention, not a rule of the engine.
    ///
    /// ## Errors
    /// - [`CoreError::InvalidInput`] if `quantity` is negative, or so large
    ///   that the item price or the order total would overflow
    /// - [`CoreError::ItemNotFound`] if no item has `item_id`
    pub fn set_quantity(&mut self, item_id: &str, quantity: i64) -> CoreResult<&CatalogItem> {
        validate_quantity(quantity)?;
        let index = self.position(item_id)?;
        let double_side = self.items[index].double_side();
        self.apply_selection(index, quantity, double_side)
    }

    /// Like [`Catalog::set_quantity`], for the selector's string value.
    ///
    /// ## Example
    /// ```rust
    /// use marts_core::Catalog;
    ///
    /// let mut catalog = Catalog::business_cards();
    /// let item = catalog.set_quantity_text("1", "2000").unwrap();
    /// assert_eq!(item.total_price().rupees(), 540);
    ///
    /// assert!(catalog.set_quantity_text("1", "lots").is_err());
    /// ```
    pub fn set_quantity_text(&mut self, item_id: &str, text: &str) -> CoreResult<&CatalogItem> {
        let quantity = parse_quantity(text)?;
        self.set_quantity(item_id, quantity)
    }

    /// Turns double-sided printing on or off and reprices the item.
    ///
    /// Fails like [`Catalog::set_quantity`] when the surcharge pushes the
    /// price out of range.
    pub fn set_double_side(&mut self, item_id: &str, enabled: bool) -> CoreResult<&CatalogItem> {
        let index = self.position(item_id)?;
        let quantity = self.items[index].quantity();
        self.apply_selection(index, quantity, enabled)
    }

    /// Sum of every item's `total_price`.
    ///
    /// Every write checks that the total fits, so this never overflows.
    pub fn total_order_value(&self) -> Money {
        Money::checked_sum(self.items.iter().map(CatalogItem::total_price)).unwrap_or_default()
    }

    /// Items with a positive quantity, in catalog order.
    pub fn line_items(&self) -> impl Iterator<Item = &CatalogItem> + '_ {
        self.items.iter().filter(|i| i.is_line_item())
    }

    pub fn has_line_items(&self) -> bool {
        self.items.iter().any(CatalogItem::is_line_item)
    }

    /// Clears every selection: quantity 0, single-sided.
    pub fn reset(&mut self) {
        for item in &mut self.items {
            item.set_selection(0, false, Money::zero());
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::business_cards()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
