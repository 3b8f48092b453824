//! # Business Marts Storefront Library
//!
//! Host for the ordering page: session, selection state and the commands
//! the page invokes. Pricing and order formatting live in `marts-core`.
//!
//! ## Module Organization
//! ```text
//! marts_storefront_lib/
//! ├── lib.rs          ◄─── You are here (logging & run)
//! ├── cli.rs          ◄─── Arguments and text rendering
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── Signed-in customer
//! │   ├── catalog.rs  ◄─── Selection state
//! │   └── config.rs   ◄─── Shop name and destinations
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── session.rs  ◄─── Sign in / logout
//! │   ├── catalog.rs  ◄─── Quantity and double-side selection
//! │   └── order.rs    ◄─── Submission
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod state;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cli::Cli;
use error::ApiError;
use state::{CatalogState, ConfigState, SessionState};

/// Runs one storefront session from the command line.
///
/// ## Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Load ConfigState from MARTS_* variables                             │
/// │  2. Sign in (when --name/--email/--mobile are given)                    │
/// │  3. Apply --select and --double in order                                │
/// │  4. --channel given?  yes ──► submit_order, render receipt              │
/// │                       no  ──► render price list                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// Returns the text (or JSON) to print.
pub fn run(cli: Cli) -> Result<String, ApiError> {
    let config = ConfigState::from_env()?;
    info!(shop = %config.shop_name, "Starting storefront");
    execute(&cli, &config)
}

/// Same as [`run`] with an already loaded configuration.
pub fn execute(cli: &Cli, config: &ConfigState) -> Result<String, ApiError> {
    let session = SessionState::new();
    let catalog = CatalogState::new();

    if let Some(customer) = cli.customer()? {
        commands::session::sign_in(&session, customer)?;
    }

    for selection in &cli.selections {
        commands::catalog::set_quantity(
            &session,
            &catalog,
            &selection.item_id,
            &selection.quantity,
        )?;
    }

    for item_id in &cli.double_side {
        commands::catalog::set_double_side(&session, &catalog, item_id, true)?;
    }

    let output = match cli.channel {
        Some(channel) => {
            let receipt = commands::order::submit_order(&session, &catalog, config, channel)?;
            if cli.json {
                serde_json::to_string_pretty(&receipt)?
            } else {
                cli::render_receipt(&receipt, config)
            }
        }
        None => {
            let response = commands::catalog::get_catalog(&catalog);
            if cli.json {
                serde_json::to_string_pretty(&response)?
            } else {
                cli::render_catalog(&response, config)
            }
        }
    };

    debug!("Session finished");
    Ok(output)
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so stdout carries only the rendered output.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=marts=trace` - Show trace for marts crates only
/// - Default: INFO, DEBUG for marts crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,marts=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
