//! Session commands: who is ordering, and logout.

use tracing::{debug, info};

use marts_core::CustomerIdentity;

use super::require_customer;
use crate::error::ApiError;
use crate::state::{CatalogState, SessionState};

/// Signs a customer in, replacing any previous session.
pub fn sign_in(
    session: &SessionState,
    customer: CustomerIdentity,
) -> Result<CustomerIdentity, ApiError> {
    debug!(email = %customer.email, "sign_in command");
    session.sign_in(customer.clone())?;
    info!(name = %customer.full_name, "Customer signed in");
    Ok(customer)
}

/// The signed-in customer.
pub fn current_customer(session: &SessionState) -> Result<CustomerIdentity, ApiError> {
    require_customer(session)
}

/// Ends the session and clears every selection.
///
/// Returns the customer who was signed in, if any.
pub fn logout(session: &SessionState, catalog: &CatalogState) -> Option<CustomerIdentity> {
    debug!("logout command");
    let previous = session.logout();
    catalog.with_catalog_mut(|c| c.reset());

    if let Some(customer) = &previous {
        info!(name = %customer.full_name, "Customer logged out");
    }
    previous
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn asha() -> CustomerIdentity {
        CustomerIdentity::new("Asha Rao", "asha@example.com", "9876543210")
    }

    #[test]
    fn test_sign_in_and_current() {
        let session = SessionState::new();
        assert_eq!(
            current_customer(&session).unwrap_err().code,
            ErrorCode::Unauthenticated
        );

        sign_in(&session, asha()).unwrap();
        assert_eq!(current_customer(&session).unwrap(), asha());
    }

    #[test]
    fn test_sign_in_rejects_bad_identity() {
        let session = SessionState::new();
        let err = sign_in(&session, CustomerIdentity::new("Asha", "nope", "1")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_logout_resets_catalog() {
        let session = SessionState::new();
        let catalog = CatalogState::new();
        sign_in(&session, asha()).unwrap();
        catalog
            .with_catalog_mut(|c| c.set_quantity("6", 2000).map(|_| ()))
            .unwrap();

        assert_eq!(logout(&session, &catalog), Some(asha()));
        assert!(!session.is_signed_in());
        assert!(catalog.with_catalog(|c| c.total_order_value().is_zero()));
    }
}
