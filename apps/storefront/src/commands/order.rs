//! # Order Commands
//!
//! Submission of the current selection through email or messaging.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Customer clicks "Email Order" or "WhatsApp Order"                      │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  submit_order(channel)                                                  │
//! │                    │                                                    │
//! │         ┌──────────┴───────────┐                                        │
//! │         ▼                      ▼                                        │
//! │  nothing selected        something selected                             │
//! │  EMPTY_ORDER +           OrderReceipt {                                 │
//! │  "No products selected"    dispatch_uri: mailto:/wa.me link,            │
//! │  (nothing to open)         submission: transcript, notification }       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Opening `dispatch_uri` is left to whoever hosts the page.

use serde::Serialize;
use tracing::{debug, info, warn};

use marts_core::{
    submit_order as build_submission, Channel, Clock, CoreError, OrderSubmission, RandomSource,
    SystemClock, ThreadRandom,
};

use super::require_customer;
use crate::error::ApiError;
use crate::state::{CatalogState, ConfigState, SessionState};

/// Result of an accepted submission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    /// Channel the customer chose
    pub channel: Channel,

    /// Link the host should open for that channel
    pub dispatch_uri: String,

    /// Transcript, both payloads and the "Order placed successfully!" event
    pub submission: OrderSubmission,
}

/// Submits the current selection using the system clock and thread RNG.
pub fn submit_order(
    session: &SessionState,
    catalog: &CatalogState,
    config: &ConfigState,
    channel: Channel,
) -> Result<OrderReceipt, ApiError> {
    submit_order_with(
        session,
        catalog,
        config,
        channel,
        &SystemClock,
        &mut ThreadRandom,
    )
}

/// Submits the current selection with explicit ID sources.
///
/// The catalog is left as it is, so the customer can resubmit through
/// the other channel.
pub fn submit_order_with<C, R>(
    session: &SessionState,
    catalog: &CatalogState,
    config: &ConfigState,
    channel: Channel,
    clock: &C,
    random: &mut R,
) -> Result<OrderReceipt, ApiError>
where
    C: Clock + ?Sized,
    R: RandomSource + ?Sized,
{
    debug!(channel = %channel, "submit_order command");
    let customer = require_customer(session)?;

    let result = catalog.with_catalog(|c| {
        build_submission(c, &customer, clock, random, &config.destinations)
    });

    let submission = match result {
        Ok(submission) => submission,
        Err(CoreError::EmptyOrder) => {
            warn!(email = %customer.email, "Order rejected: no products selected");
            return Err(CoreError::EmptyOrder.into());
        }
        Err(e) => return Err(e.into()),
    };

    info!(
        order_id = %submission.order_id,
        total = %submission.total_order_value,
        lines = submission.line_count,
        channel = %channel,
        "Order accepted"
    );

    Ok(OrderReceipt {
        channel,
        dispatch_uri: submission.payload(channel).uri.clone(),
        submission,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use marts_core::{CustomerIdentity, Notification};

    struct Fixed;

    impl Clock for Fixed {
        fn now_millis(&self) -> i64 {
            1718000000000
        }
    }

    impl RandomSource for Fixed {
        fn next_below(&mut self, _bound: u32) -> u32 {
            417
        }
    }

    fn setup() -> (SessionState, CatalogState, ConfigState) {
        let session = SessionState::new();
        session
            .sign_in(CustomerIdentity::new(
                "Asha Rao",
                "asha@example.com",
                "9876543210",
            ))
            .unwrap();
        (session, CatalogState::new(), ConfigState::default())
    }

    fn select_sample(catalog: &CatalogState) {
        catalog.with_catalog_mut(|c| {
            c.set_quantity("1", 1000).unwrap();
            c.set_quantity("2", 3000).unwrap();
            c.set_double_side("2", true).unwrap();
        });
    }

    #[test]
    fn test_email_submission() {
        let (session, catalog, config) = setup();
        select_sample(&catalog);

        let receipt =
            submit_order_with(&session, &catalog, &config, Channel::Email, &Fixed, &mut Fixed)
                .unwrap();

        assert_eq!(receipt.channel, Channel::Email);
        assert!(receipt
            .dispatch_uri
            .starts_with("mailto:info@businessmarts.site?subject=New%20Order%20from%20Asha%20Rao"));
        assert_eq!(
            receipt.submission.notification.description(),
            "Your order ID is BM1718000000000417. Total amount: 1470 Rs"
        );
        assert_eq!(receipt.submission.line_count, 2);
        assert!(receipt
            .submission
            .transcript
            .text
            .contains("ORDER ID: BM1718000000000417\n"));
    }

    #[test]
    fn test_messaging_submission_uses_configured_number() {
        let (session, catalog, mut config) = setup();
        config.destinations.messaging_number = "15550001111".to_string();
        select_sample(&catalog);

        let receipt = submit_order_with(
            &session,
            &catalog,
            &config,
            Channel::Messaging,
            &Fixed,
            &mut Fixed,
        )
        .unwrap();

        assert!(receipt
            .dispatch_uri
            .starts_with("https://wa.me/15550001111?text=NEW%20ORDER%20FROM%20BUSINESS%20MARTS"));
    }

    #[test]
    fn test_receipt_json_carries_one_notification() {
        let (session, catalog, config) = setup();
        select_sample(&catalog);

        let receipt =
            submit_order_with(&session, &catalog, &config, Channel::Email, &Fixed, &mut Fixed)
                .unwrap();
        let json = serde_json::to_value(&receipt).unwrap();

        assert!(json.get("notification").is_none());
        assert_eq!(json["submission"]["notification"]["kind"], "order_accepted");
        assert_eq!(json["submission"]["notification"]["order_id"], "BM1718000000000417");
    }

    #[test]
    fn test_empty_order_rejected() {
        let (session, catalog, config) = setup();

        let err = submit_order(&session, &catalog, &config, Channel::Email).unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyOrder);
        assert_eq!(err.notification, Some(Notification::EmptyOrderRejected));
    }

    #[test]
    fn test_requires_sign_in() {
        let (_, catalog, config) = setup();
        select_sample(&catalog);

        let err =
            submit_order(&SessionState::new(), &catalog, &config, Channel::Email).unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthenticated);
    }

    #[test]
    fn test_submission_keeps_selection() {
        let (session, catalog, config) = setup();
        select_sample(&catalog);

        submit_order(&session, &catalog, &config, Channel::Email).unwrap();
        let receipt = submit_order(&session, &catalog, &config, Channel::Messaging).unwrap();
        assert_eq!(receipt.submission.total_order_value.rupees(), 1470);
    }
}
