//! # State Module
//!
//! Manages session-scoped state for the storefront.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything, each
//! concern gets its own type and each command asks only for what it needs.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │ SessionState │  │ CatalogState │  │   ConfigState    │              │
//! │  │              │  │              │  │                  │              │
//! │  │  Arc<Mutex<  │  │  Arc<Mutex<  │  │  shop_name       │              │
//! │  │   Option<    │  │    Catalog   │  │  destinations    │              │
//! │  │   Customer>  │  │  >>          │  │                  │              │
//! │  │  >>          │  │              │  │                  │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • SessionState / CatalogState: Arc<Mutex<T>> for exclusive access     │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod catalog;
mod config;
mod session;

pub use catalog::CatalogState;
pub use config::{ConfigError, ConfigState};
pub use session::SessionState;
