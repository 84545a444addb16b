//! Admin authentication seam and session state.
//!
//! The verifier is a capability interface so the in-process credential
//! comparison in compass-infra can be replaced by a real mechanism
//! without touching any calling code.

use compass_types::error::AuthError;

/// Checks an admin username/password pair.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// In-memory authentication state for the admin surface.
///
/// Session-scoped only: no token, no expiry, gone when the process exits.
#[derive(Debug, Default)]
pub struct AdminSession {
    authenticated: bool,
}

impl AdminSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Attempt a login. A failed attempt clears no state -- an already
    /// authenticated session stays authenticated.
    pub fn login(
        &mut self,
        verifier: &impl CredentialVerifier,
        username: &str,
        password: &str,
    ) -> Result<(), AuthError> {
        if verifier.verify(username, password) {
            self.authenticated = true;
            tracing::info!("admin login");
            Ok(())
        } else {
            tracing::warn!("admin login rejected");
            Err(AuthError::InvalidCredentials)
        }
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedVerifier;

    impl CredentialVerifier for FixedVerifier {
        fn verify(&self, username: &str, password: &str) -> bool {
            username == "admin" && password == "secret"
        }
    }

    #[test]
    fn login_with_valid_credentials_authenticates() {
        let mut session = AdminSession::new();
        assert!(!session.is_authenticated());
        session.login(&FixedVerifier, "admin", "secret").unwrap();
        assert!(session.is_authenticated());
    }

    #[test]
    fn failed_login_reports_error_and_clears_nothing() {
        let mut session = AdminSession::new();
        session.login(&FixedVerifier, "admin", "secret").unwrap();

        let result = session.login(&FixedVerifier, "admin", "wrong");
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
        // Still authenticated from before.
        assert!(session.is_authenticated());
    }

    #[test]
    fn logout_clears_authentication() {
        let mut session = AdminSession::new();
        session.login(&FixedVerifier, "admin", "secret").unwrap();
        session.logout();
        assert!(!session.is_authenticated());
    }
}
