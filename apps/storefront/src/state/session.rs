//! Signed-in customer for the current session.
//!
//! Stands in for the authentication collaborator: it hands out the
//! customer identity and supports logout. Nothing else here mutates the
//! identity once it is stored.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use marts_core::validation::validate_customer;
use marts_core::{CustomerIdentity, ValidationError};

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    customer: Arc<Mutex<Option<CustomerIdentity>>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Option<CustomerIdentity>> {
        self.customer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stores `customer` as the signed-in identity, replacing any previous one.
    pub fn sign_in(&self, customer: CustomerIdentity) -> Result<(), ValidationError> {
        validate_customer(&customer)?;
        *self.lock() = Some(customer);
        Ok(())
    }

    /// Clears the session, returning who was signed in.
    pub fn logout(&self) -> Option<CustomerIdentity> {
        self.lock().take()
    }

    /// A copy of the signed-in identity, if any.
    pub fn current(&self) -> Option<CustomerIdentity> {
        self.lock().clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.lock().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asha() -> CustomerIdentity {
        CustomerIdentity::new("Asha Rao", "asha@example.com", "9876543210")
    }

    #[test]
    fn test_sign_in_and_logout() {
        let session = SessionState::new();
        assert!(!session.is_signed_in());

        session.sign_in(asha()).unwrap();
        assert_eq!(session.current(), Some(asha()));

        assert_eq!(session.logout(), Some(asha()));
        assert!(session.current().is_none());
        assert!(session.logout().is_none());
    }

    #[test]
    fn test_invalid_identity_is_not_stored() {
        let session = SessionState::new();
        let err = session
            .sign_in(CustomerIdentity::new("", "asha@example.com", "1"))
            .unwrap_err();
        assert!(matches!(err, ValidationError::Required { .. }));
        assert!(!session.is_signed_in());
    }
}
