//! Placeholder credential verifier.
//!
//! Compares the admin pair from configuration in-process. Deliberately
//! behind the [`CredentialVerifier`] seam so a real authentication
//! mechanism can replace it without touching any caller.

use compass_core::auth::CredentialVerifier;
use compass_types::config::AdminConfig;

/// Fixed username/password comparison.
pub struct StaticCredentialVerifier {
    username: String,
    password: String,
}

impl StaticCredentialVerifier {
    pub fn new(config: &AdminConfig) -> Self {
        Self {
            username: config.username.clone(),
            password: config.password.clone(),
        }
    }
}

impl CredentialVerifier for StaticCredentialVerifier {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}
