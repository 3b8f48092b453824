//! # Storefront Commands
//!
//! Every action the ordering page can take.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── session.rs  ◄─── sign_in, logout, current_customer
//! ├── catalog.rs  ◄─── get_catalog, set_quantity, set_double_side
//! └── order.rs    ◄─── submit_order
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Read only
//! fn get_catalog(catalog: &CatalogState) -> CatalogResponse
//!
//! // Needs a signed-in customer and the catalog
//! fn set_quantity(session: &SessionState, catalog: &CatalogState, ...)
//!
//! // Needs everything
//! fn submit_order(session: &SessionState, catalog: &CatalogState, config: &ConfigState, ...)
//! ```

pub mod catalog;
pub mod order;
pub mod session;

use marts_core::CustomerIdentity;

use crate::error::ApiError;
use crate::state::SessionState;

/// Returns the signed-in customer or an `UNAUTHENTICATED` error.
pub(crate) fn require_customer(session: &SessionState) -> Result<CustomerIdentity, ApiError> {
    session.current().ok_or_else(ApiError::unauthenticated)
}
