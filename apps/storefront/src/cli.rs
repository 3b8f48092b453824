//! # Command Line
//!
//! Arguments for the terminal storefront, plus the text rendering of
//! command responses.
//!
//! ```text
//! marts-storefront                                   # show the price list
//! marts-storefront --name "Asha Rao" --email asha@example.com \
//!     --mobile 9876543210 --select 1=1000 --select 2=3000 \
//!     --double 2 --channel email                     # place an order
//! ```

use clap::Parser;

use marts_core::{Channel, CustomerIdentity};

use crate::commands::catalog::CatalogResponse;
use crate::commands::order::OrderReceipt;
use crate::error::ApiError;
use crate::state::ConfigState;

#[derive(Parser, Debug, Default, Clone)]
#[command(
    name = "marts-storefront",
    about = "Order business cards from Business Marts",
    version
)]
pub struct Cli {
    #[arg(
        long,
        env = "MARTS_CUSTOMER_NAME",
        value_name = "NAME",
        help = "Customer full name"
    )]
    pub name: Option<String>,

    #[arg(
        long,
        env = "MARTS_CUSTOMER_EMAIL",
        value_name = "EMAIL",
        help = "Customer email address"
    )]
    pub email: Option<String>,

    #[arg(
        long,
        env = "MARTS_CUSTOMER_MOBILE",
        value_name = "MOBILE",
        help = "Customer mobile number"
    )]
    pub mobile: Option<String>,

    #[arg(
        long = "select",
        value_name = "ID=QTY",
        value_parser = parse_selection,
        help = "Select a quantity for a catalog item, e.g. 2=3000 (repeatable)"
    )]
    pub selections: Vec<Selection>,

    #[arg(
        long = "double",
        value_name = "ID",
        help = "Print the item on both sides (repeatable)"
    )]
    pub double_side: Vec<String>,

    #[arg(
        long,
        value_name = "CHANNEL",
        help = "Submit the order by email or messaging; omit to only show prices"
    )]
    pub channel: Option<Channel>,

    #[arg(long, help = "Print JSON instead of text")]
    pub json: bool,
}

/// One `--select ID=QTY` argument, unparsed beyond the split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub item_id: String,
    pub quantity: String,
}

fn parse_selection(raw: &str) -> Result<Selection, String> {
    let (item_id, quantity) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected ID=QTY, got '{}'", raw))?;

    if item_id.trim().is_empty() {
        return Err(format!("missing item ID in '{}'", raw));
    }

    Ok(Selection {
        item_id: item_id.trim().to_string(),
        quantity: quantity.to_string(),
    })
}

impl Cli {
    /// Identity from `--name`, `--email` and `--mobile`.
    ///
    /// All three or none; a partial identity is rejected.
    pub fn customer(&self) -> Result<Option<CustomerIdentity>, ApiError> {
        match (&self.name, &self.email, &self.mobile) {
            (Some(name), Some(email), Some(mobile)) => {
                Ok(Some(CustomerIdentity::new(name, email, mobile)))
            }
            (None, None, None) => Ok(None),
            _ => Err(ApiError::validation(
                "--name, --email and --mobile must be given together",
            )),
        }
    }
}

// =============================================================================
// Text Rendering
// =============================================================================

const ROW_HEADER: [&str; 6] = ["ID", "Product", "Rate/1000", "Qty", "2-side", "Price"];

fn row(cells: [&str; 6]) -> String {
    format!(
        "{:<3} {:<34} {:>9} {:>6} {:>6} {:>9}\n",
        cells[0], cells[1], cells[2], cells[3], cells[4], cells[5]
    )
}

/// Price list with current selections and the running total.
pub fn render_catalog(response: &CatalogResponse, config: &ConfigState) -> String {
    let mut out = format!("{}\n", config.shop_name);
    out.push_str(&row(ROW_HEADER));

    for item in &response.items {
        out.push_str(&row([
            item.id(),
            item.title(),
            &item.base_rate().rupees().to_string(),
            &item.quantity().to_string(),
            if item.double_side() { "yes" } else { "no" },
            &item.total_price().to_string(),
        ]));
    }

    out.push_str(&format!("Total: {}", response.total_order_value));
    out
}

/// Confirmation shown after a successful submission.
pub fn render_receipt(receipt: &OrderReceipt, config: &ConfigState) -> String {
    let notification = &receipt.submission.notification;
    format!(
        "{}\n{}\n\n{}\n\nSend your design files to {}\nOpen to send ({}): {}",
        notification.title(),
        notification.description(),
        receipt.submission.transcript.as_str(),
        config.destinations.design_email,
        receipt.channel,
        receipt.dispatch_uri,
    )
}
