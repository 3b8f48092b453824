//! # Catalog State
//!
//! Holds the session's catalog: the seven card variants and whatever the
//! customer has selected so far.
//!
//! ## Catalog Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog State Operations                             │
//! │                                                                         │
//! │  Frontend Action          Command                 Catalog Change        │
//! │  ───────────────          ───────                 ──────────────        │
//! │                                                                         │
//! │  Pick quantity ──────────► set_quantity() ──────► item.quantity = n     │
//! │                                                   (price recomputed)    │
//! │  Tick double side ───────► set_double_side() ───► item.double_side = b  │
//! │                                                   (price recomputed)    │
//! │  Logout ─────────────────► logout() ────────────► catalog.reset()      │
//! │                                                                         │
//! │  View page ──────────────► get_catalog() ───────► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use marts_core::Catalog;

/// Shared handle to the session catalog.
///
/// A poisoned lock is taken over. Every catalog mutation reprices before
/// it returns, so the guarded value is always consistent.
#[derive(Debug, Clone)]
pub struct CatalogState {
    catalog: Arc<Mutex<Catalog>>,
}

impl CatalogState {
    /// Creates state holding the business-card catalog with nothing selected.
    pub fn new() -> Self {
        CatalogState::from_catalog(Catalog::business_cards())
    }

    pub fn from_catalog(catalog: Catalog) -> Self {
        CatalogState {
            catalog: Arc::new(Mutex::new(catalog)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Catalog> {
        self.catalog.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Executes a function with read access to the catalog.
    ///
    /// ## Usage
    /// ```rust
    /// # use marts_storefront_lib::state::CatalogState;
    /// let state = CatalogState::new();
    /// let total = state.with_catalog(|c| c.total_order_value());
    /// assert!(total.is_zero());
    /// ```
    pub fn with_catalog<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Catalog) -> R,
    {
        let catalog = self.lock();
        f(&catalog)
    }

    /// Executes a function with write access to the catalog.
    pub fn with_catalog_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Catalog) -> R,
    {
        let mut catalog = self.lock();
        f(&mut catalog)
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}
