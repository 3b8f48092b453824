//! # marts-core: Pure Ordering Logic for Business Marts
//!
//! This crate is the pricing and order-serialization engine behind the
//! Business Marts storefront. It contains the business-card catalog, the
//! per-thousand pricing rule and the order transcript, as pure functions
//! with no I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Business Marts Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (web page)                          │   │
//! │  │    Quantity selects ──► Double-side boxes ──► Order buttons     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Storefront commands                          │   │
//! │  │    set_quantity, set_double_side, submit_order, logout          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ marts-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   money   │  │   order   │  │ validation│  │   │
//! │  │   │  Catalog  │  │   Money   │  │ Transcript│  │   rules   │  │   │
//! │  │   │ recompute │  │ rounding  │  │  payloads │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • CLOCK AND RANDOMNESS INJECTED           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CatalogItem, CustomerIdentity, OrderId, Channel)
//! - [`money`] - Whole-rupee Money type and per-thousand rounding
//! - [`catalog`] - The catalog and recompute-on-write pricing
//! - [`order`] - Order IDs, transcripts, channel payloads, submission
//! - [`notification`] - Accepted/rejected events for the host to render
//! - [`error`] - Domain error types
//! - [`validation`] - Input checks
//!
//! ## Example Usage
//!
//! ```rust
//! use marts_core::Catalog;
//!
//! let mut catalog = Catalog::business_cards();
//! catalog.set_quantity("1", 1000).unwrap();
//! catalog.set_quantity("2", 3000).unwrap();
//! catalog.set_double_side("2", true).unwrap();
//!
//! assert_eq!(catalog.total_order_value().rupees(), 1470);
//! ```

pub mod catalog;
pub mod error;
pub mod money;
pub mod notification;
pub mod order;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{Catalog, QUANTITY_OPTIONS};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use notification::Notification;
pub use order::{
    build_channel_payload, build_order_transcript, generate_order_id, submit_order,
    ChannelPayload, Clock, OrderSubmission, RandomSource, SystemClock, ThreadRandom, Transcript,
};
pub use types::*;

/// Unit label appended to every price in transcripts and notifications.
pub const CURRENCY_LABEL: &str = "Rs";
