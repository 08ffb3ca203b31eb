//! Shared-secret token validator.

use crate::{AuthError, AuthenticatedUser, TokenValidator};
use async_trait::async_trait;

/// Validator that accepts exactly one configured bearer secret.
///
/// Stands in for an external identity provider in single-tenant and
/// self-hosted deployments: every caller presenting the secret maps to the
/// same configured identity.
#[derive(Debug, Clone)]
pub struct SharedSecretValidator {
    secret: String,
    identity: AuthenticatedUser,
}

impl SharedSecretValidator {
    /// Creates a validator for the given secret with a default admin
    /// identity.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            identity: AuthenticatedUser {
                email: "admin@gdptrend.local".to_string(),
                subject: "shared-secret".to_string(),
            },
        }
    }

    /// Overrides the identity assigned to callers of this secret.
    pub fn with_identity(mut self, identity: AuthenticatedUser) -> Self {
        self.identity = identity;
        self
    }
}

/// Byte-wise comparison that always walks both inputs fully.
fn eq_constant_time(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |diff, (x, y)| diff | (x ^ y)) == 0
}

#[async_trait]
impl TokenValidator for SharedSecretValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        if eq_constant_time(token.as_bytes(), self.secret.as_bytes()) {
            Ok(self.identity.clone())
        } else {
            Err(AuthError::InvalidToken("secret mismatch".to_string()))
        }
    }
}
