//! # Order Formatter
//!
//! Turns a catalog selection into a transcript and two dispatch links.
//!
//! ## Submission Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    submit_order()                                       │
//! │                                                                         │
//! │  Catalog ──► any quantity > 0? ──no──► EmptyOrder (no ID, no links)     │
//! │                    │ yes                                                │
//! │                    ▼                                                    │
//! │  generate_order_id(clock, random) ──► "BM1718000000000417"              │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  build_order_transcript(catalog, customer, id) ──► Transcript           │
//! │                    │                                                    │
//! │          ┌─────────┴──────────┐                                         │
//! │          ▼                    ▼                                         │
//! │   Email payload        Messaging payload                                │
//! │   mailto:...?subject=  https://wa.me/...?text=                          │
//! │   &body=                                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is a pure function of its inputs except the clock and
//! random source, which are injected.

use rand::Rng;
use serde::Serialize;
use ts_rs::TS;

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::notification::Notification;
use crate::types::{CatalogItem, Channel, CustomerIdentity, Destinations, OrderId};

/// Exclusive upper bound of the order ID's random suffix.
pub const ORDER_SUFFIX_BOUND: u32 = 1000;

/// First line of every messaging payload.
pub const MESSAGING_PREAMBLE: &str = "NEW ORDER FROM BUSINESS MARTS";

// =============================================================================
// Injected Collaborators
// =============================================================================

/// Source of wall-clock time for order IDs.
pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;
}

/// Source of the order ID's random suffix.
pub trait RandomSource {
    /// A value in `0..bound`.
    fn next_below(&mut self, bound: u32) -> u32;
}

/// Reads `chrono::Utc::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Draws from `rand::thread_rng()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_below(&mut self, bound: u32) -> u32 {
        rand::thread_rng().gen_range(0..bound)
    }
}

/// Generates a best-effort order ID: `"BM"`, the clock's millis, then a
/// suffix in `0..1000` (not zero-padded).
///
/// ## Example
/// ```rust
/// use marts_core::order::{generate_order_id, Clock, RandomSource};
///
/// struct Fixed;
/// impl Clock for Fixed {
///     fn now_millis(&self) -> i64 { 1718000000000 }
/// }
/// impl RandomSource for Fixed {
///     fn next_below(&mut self, _bound: u32) -> u32 { 417 }
/// }
///
/// let id = generate_order_id(&Fixed, &mut Fixed);
/// assert_eq!(id.as_str(), "BM1718000000000417");
/// ```
pub fn generate_order_id<C, R>(clock: &C, random: &mut R) -> OrderId
where
    C: Clock + ?Sized,
    R: RandomSource + ?Sized,
{
    let timestamp = clock.now_millis();
    // Clamp in case a custom source ignores the bound
    let suffix = random.next_below(ORDER_SUFFIX_BOUND) % ORDER_SUFFIX_BOUND;
    OrderId::from_parts(timestamp, suffix)
}

// =============================================================================
// Order
// =============================================================================

/// Snapshot of a submission: the selected items and their total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Order {
    pub order_id: OrderId,
    pub line_items: Vec<CatalogItem>,
    pub total_order_value: Money,
}

impl Order {
    /// Captures the catalog's line items under `order_id`.
    ///
    /// ## Errors
    /// [`CoreError::EmptyOrder`] if nothing has a positive quantity.
    pub fn from_catalog(catalog: &Catalog, order_id: OrderId) -> CoreResult<Order> {
        let line_items: Vec<CatalogItem> = catalog.line_items().cloned().collect();
        if line_items.is_empty() {
            return Err(CoreError::EmptyOrder);
        }

        // Zero-priced items add nothing, so this equals the line total
        let total_order_value = catalog.total_order_value();
        Ok(Order {
            order_id,
            line_items,
            total_order_value,
        })
    }
}

// =============================================================================
// Transcript
// =============================================================================

/// Canonical text rendering of an order, independent of channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Transcript {
    pub order_id: OrderId,
    pub total_order_value: Money,
    pub text: String,
}

impl Transcript {
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Renders the order transcript.
///
/// Sections come in a fixed order: order details (one block per line
/// item), order summary, customer information. Consumers match on this
/// text, so field labels and blank lines must not change.
///
/// ## Errors
/// [`CoreError::EmptyOrder`] if no item has a positive quantity.
pub fn build_order_transcript(
    catalog: &Catalog,
    customer: &CustomerIdentity,
    order_id: &OrderId,
) -> CoreResult<Transcript> {
    let order = Order::from_catalog(catalog, order_id.clone())?;
    Ok(render(&order, customer))
}

fn render(order: &Order, customer: &CustomerIdentity) -> Transcript {
    let mut text = String::from("=== ORDER DETAILS ===\n\n");

    for item in &order.line_items {
        text.push_str(&format!(
            "PRODUCT: {}\nQUANTITY: {}\nDOUBLE SIDE: {}\nPRICE: {}\n\n",
            item.title(),
            item.quantity(),
            yes_no(item.double_side()),
            item.total_price(),
        ));
    }

    text.push_str(&format!(
        "=== ORDER SUMMARY ===\nORDER ID: {}\nTOTAL ORDER VALUE: {}\n\n",
        order.order_id, order.total_order_value,
    ));

    text.push_str(&format!(
        "=== CUSTOMER INFORMATION ===\n\nNAME: {}\nEMAIL: {}\nMOBILE: {}\n\n",
        customer.full_name, customer.email, customer.mobile,
    ));

    Transcript {
        order_id: order.order_id.clone(),
        total_order_value: order.total_order_value,
        text,
    }
}

// =============================================================================
// Channel Payloads
// =============================================================================

/// A transcript wrapped for one delivery channel.
///
/// `subject` and `body` are already percent-encoded; `uri` is ready to be
/// opened by the dispatch collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ChannelPayload {
    pub channel: Channel,
    pub subject: Option<String>,
    pub body: String,
    pub uri: String,
}

/// Wraps a transcript into the envelope for `channel`.
///
/// - Email: subject `New Order from {name} (ID: {id})`, body is the
///   transcript itself.
/// - Messaging: body is the preamble line, a blank line, then the
///   transcript.
///
/// ## Example
/// ```rust
/// use marts_core::order::build_channel_payload;
/// # use marts_core::order::{build_order_transcript};
/// # use marts_core::{Catalog, Channel, CustomerIdentity, Destinations, OrderId};
/// # let mut catalog = Catalog::business_cards();
/// # catalog.set_quantity("1", 1000).unwrap();
/// # let customer = CustomerIdentity::new("Asha Rao", "asha@example.com", "9876543210");
/// # let transcript =
/// #     build_order_transcript(&catalog, &customer, &OrderId::from_parts(1, 2)).unwrap();
/// let payload = build_channel_payload(
///     Channel::Email,
///     &transcript,
///     &customer,
///     &Destinations::default(),
/// );
/// assert!(payload.uri.starts_with("mailto:info@businessmarts.site?subject="));
/// assert_eq!(urlencoding::decode(&payload.body).unwrap(), transcript.text);
/// ```
pub fn build_channel_payload(
    channel: Channel,
    transcript: &Transcript,
    customer: &CustomerIdentity,
    destinations: &Destinations,
) -> ChannelPayload {
    match channel {
        Channel::Email => {
            let subject = format!(
                "New Order from {} (ID: {})",
                customer.full_name, transcript.order_id
            );
            let subject = urlencoding::encode(&subject).into_owned();
            let body = urlencoding::encode(&transcript.text).into_owned();
            let uri = format!(
                "mailto:{}?subject={}&body={}",
                destinations.order_email, subject, body
            );
            ChannelPayload {
                channel,
                subject: Some(subject),
                body,
                uri,
            }
        }
        Channel::Messaging => {
            let message = format!("{}\n\n{}", MESSAGING_PREAMBLE, transcript.text);
            let body = urlencoding::encode(&message).into_owned();
            let uri = format!(
                "https://wa.me/{}?text={}",
                destinations.messaging_number, body
            );
            ChannelPayload {
                channel,
                subject: None,
                body,
                uri,
            }
        }
    }
}

// =============================================================================
// Submission
// =============================================================================

/// Everything a host needs after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderSubmission {
    pub order_id: OrderId,
    pub total_order_value: Money,
    pub line_count: usize,
    pub transcript: Transcript,
    pub email: ChannelPayload,
    pub messaging: ChannelPayload,
    pub notification: Notification,
}

impl OrderSubmission {
    /// Payload for the channel the customer picked.
    pub fn payload(&self, channel: Channel) -> &ChannelPayload {
        match channel {
            Channel::Email => &self.email,
            Channel::Messaging => &self.messaging,
        }
    }
}

/// Runs a full submission against the current catalog.
///
/// The empty check happens before an ID is drawn, so a rejected attempt
/// consumes neither the clock nor the random source.
///
/// ## Errors
/// [`CoreError::EmptyOrder`] if no item has a positive quantity. The
/// caller must not dispatch anything in that case.
pub fn submit_order<C, R>(
    catalog: &Catalog,
    customer: &CustomerIdentity,
    clock: &C,
    random: &mut R,
    destinations: &Destinations,
) -> CoreResult<OrderSubmission>
where
    C: Clock + ?Sized,
    R: RandomSource + ?Sized,
{
    if !catalog.has_line_items() {
        return Err(CoreError::EmptyOrder);
    }

    let order_id = generate_order_id(clock, random);
    let order = Order::from_catalog(catalog, order_id)?;
    let transcript = render(&order, customer);

    let email = build_channel_payload(Channel::Email, &transcript, customer, destinations);
    let messaging = build_channel_payload(Channel::Messaging, &transcript, customer, destinations);

    Ok(OrderSubmission {
        notification: Notification::OrderAccepted {
            order_id: order.order_id.clone(),
            total: order.total_order_value,
        },
        order_id: order.order_id,
        total_order_value: order.total_order_value,
        line_count: order.line_items.len(),
        transcript,
        email,
        messaging,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedClock(i64);

    impl Clock for FixedClock {
        fn now_millis(&self) -> i64 {
            self.0
        }
    }

    struct SeqRandom {
        values: Vec<u32>,
        calls: usize,
    }

    impl SeqRandom {
        fn new(values: &[u32]) -> Self {
            SeqRandom {
                values: values.to_vec(),
                calls: 0,
            }
        }
    }

    impl RandomSource for SeqRandom {
        fn next_below(&mut self, _bound: u32) -> u32 {
            let v = self.values[self.calls % self.values.len()];
            self.calls += 1;
            v
        }
    }

    fn customer() -> CustomerIdentity {
        CustomerIdentity::new("Asha Rao", "asha@example.com", "9876543210")
    }

    fn sample_catalog() -> Catalog {
        let mut catalog = Catalog::business_cards();
        catalog.set_quantity("1", 1000).unwrap();
        catalog.set_quantity("2", 3000).unwrap();
        catalog.set_double_side("2", true).unwrap();
        catalog
    }

    const SAMPLE_TRANSCRIPT: &str = "=== ORDER DETAILS ===\n\n\
        PRODUCT: Without lamination Cards\n\
        QUANTITY: 1000\n\
        DOUBLE SIDE: No\n\
        PRICE: 270 Rs\n\n\
        PRODUCT: Gloss Coated Small Cards\n\
        QUANTITY: 3000\n\
        DOUBLE SIDE: Yes\n\
        PRICE: 1200 Rs\n\n\
        === ORDER SUMMARY ===\n\
        ORDER ID: BM1718000000000417\n\
        TOTAL ORDER VALUE: 1470 Rs\n\n\
        === CUSTOMER INFORMATION ===\n\n\
        NAME: Asha Rao\n\
        EMAIL: asha@example.com\n\
        MOBILE: 9876543210\n\n";

    #[test]
    fn test_generate_order_id_format() {
        let id = generate_order_id(&FixedClock(1718000000000), &mut SeqRandom::new(&[417]));
        assert_eq!(id.as_str(), "BM1718000000000417");

        let id = generate_order_id(&FixedClock(1718000000000), &mut SeqRandom::new(&[5]));
        assert_eq!(id.as_str(), "BM17180000000005");
    }

    #[test]
    fn test_generate_order_id_clamps_suffix() {
        let id = generate_order_id(&FixedClock(1), &mut SeqRandom::new(&[1417]));
        assert_eq!(id.as_str(), "BM1417");
    }

    #[test]
    fn test_system_sources() {
        let mut random = ThreadRandom;
        for _ in 0..100 {
            assert!(random.next_below(ORDER_SUFFIX_BOUND) < ORDER_SUFFIX_BOUND);
        }
        let id = generate_order_id(&SystemClock, &mut random);
        assert!(id.as_str().starts_with("BM"));
        assert!(id.as_str()[2..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_transcript_exact_text() {
        let id = OrderId::from_parts(1718000000000, 417);
        let transcript = build_order_transcript(&sample_catalog(), &customer(), &id).unwrap();

        assert_eq!(transcript.text, SAMPLE_TRANSCRIPT);
        assert_eq!(transcript.order_id, id);
        assert_eq!(transcript.total_order_value.rupees(), 1470);
    }

    #[test]
    fn test_transcript_skips_unselected_items() {
        let mut catalog = Catalog::business_cards();
        catalog.set_double_side("3", true).unwrap();
        catalog.set_quantity("7", 1000).unwrap();

        let transcript =
            build_order_transcript(&catalog, &customer(), &OrderId::from_parts(1, 1)).unwrap();
        assert_eq!(transcript.text.matches("PRODUCT: ").count(), 1);
        assert!(transcript.text.contains("PRODUCT: Matt lamination UV coated Cards\n"));
        assert!(!transcript.text.contains("Without Lamination Small Cards"));
    }

    #[test]
    fn test_transcript_empty_order() {
        let catalog = Catalog::business_cards();
        let result = build_order_transcript(&catalog, &customer(), &OrderId::from_parts(1, 1));
        assert!(matches!(result, Err(CoreError::EmptyOrder)));
    }

    #[test]
    fn test_email_payload_round_trip() {
        let id = OrderId::from_parts(1718000000000, 417);
        let transcript = build_order_transcript(&sample_catalog(), &customer(), &id).unwrap();
        let payload =
            build_channel_payload(Channel::Email, &transcript, &customer(), &Destinations::default());

        assert_eq!(urlencoding::decode(&payload.body).unwrap(), transcript.text);

        let subject = payload.subject.as_deref().unwrap();
        assert_eq!(
            urlencoding::decode(subject).unwrap(),
            "New Order from Asha Rao (ID: BM1718000000000417)"
        );
        assert_eq!(
            payload.uri,
            format!(
                "mailto:info@businessmarts.site?subject={}&body={}",
                subject, payload.body
            )
        );
        assert!(!payload.body.contains('\n'));
        assert!(!payload.body.contains(' '));
    }

    #[test]
    fn test_messaging_payload() {
        let id = OrderId::from_parts(1718000000000, 417);
        let transcript = build_order_transcript(&sample_catalog(), &customer(), &id).unwrap();
        let destinations = Destinations {
            messaging_number: "15550001111".to_string(),
            ..Destinations::default()
        };
        let payload =
            build_channel_payload(Channel::Messaging, &transcript, &customer(), &destinations);

        assert!(payload.subject.is_none());
        assert!(payload.uri.starts_with("https://wa.me/15550001111?text="));
        assert_eq!(
            urlencoding::decode(&payload.body).unwrap(),
            format!("NEW ORDER FROM BUSINESS MARTS\n\n{}", SAMPLE_TRANSCRIPT)
        );
    }

    #[test]
    fn test_customer_text_is_encoded() {
        let mut catalog = Catalog::business_cards();
        catalog.set_quantity("5", 1000).unwrap();
        let tricky = CustomerIdentity::new("Ravi & Sons", "a+b@example.com", "+91 99");
        let transcript =
            build_order_transcript(&catalog, &tricky, &OrderId::from_parts(1, 1)).unwrap();
        let payload =
            build_channel_payload(Channel::Email, &transcript, &tricky, &Destinations::default());

        // A raw '&' would split the mailto query
        assert_eq!(payload.uri.matches('&').count(), 1);
        assert_eq!(urlencoding::decode(&payload.body).unwrap(), transcript.text);
    }

    #[test]
    fn test_submit_order() {
        let mut random = SeqRandom::new(&[417]);
        let submission = submit_order(
            &sample_catalog(),
            &customer(),
            &FixedClock(1718000000000),
            &mut random,
            &Destinations::default(),
        )
        .unwrap();

        assert_eq!(submission.order_id.as_str(), "BM1718000000000417");
        assert_eq!(submission.total_order_value.rupees(), 1470);
        assert_eq!(submission.line_count, 2);
        assert_eq!(submission.transcript.text, SAMPLE_TRANSCRIPT);
        assert_eq!(submission.payload(Channel::Email), &submission.email);
        assert_eq!(submission.payload(Channel::Messaging).channel, Channel::Messaging);
        assert_eq!(
            submission.notification.description(),
            "Your order ID is BM1718000000000417. Total amount: 1470 Rs"
        );
    }

    #[test]
    fn test_submit_empty_order_draws_no_id() {
        let mut random = SeqRandom::new(&[1]);
        let result = submit_order(
            &Catalog::business_cards(),
            &customer(),
            &FixedClock(1),
            &mut random,
            &Destinations::default(),
        );
        assert!(matches!(result, Err(CoreError::EmptyOrder)));
        assert_eq!(random.calls, 0);
    }

    #[test]
    fn test_order_from_catalog() {
        let order = Order::from_catalog(&sample_catalog(), OrderId::from_parts(1, 1)).unwrap();
        assert_eq!(order.line_items.len(), 2);
        assert_eq!(order.total_order_value, sample_catalog().total_order_value());
    }
}
