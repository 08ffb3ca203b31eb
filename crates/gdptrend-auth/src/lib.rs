#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Authentication primitives for GDPTrend.
//!
//! Identity verification itself belongs to an external provider; this
//! crate carries the seam:
//!
//! - [`AuthenticatedUser`] — identity extracted from a validated token
//! - [`TokenValidator`] — async trait, implement per identity provider
//! - [`AuthLayer`] / [`AuthService`] — Tower middleware parameterised over
//!   `TokenValidator`
//! - [`SharedSecretValidator`] — stand-in validator comparing a configured
//!   bearer secret
//! - [`AuthConfig`] — configuration for the middleware

mod error;
mod middleware;
mod user;
mod validator;

use async_trait::async_trait;

pub use error::AuthError;
pub use middleware::{AuthLayer, AuthService};
pub use user::AuthenticatedUser;
pub use validator::SharedSecretValidator;

/// Configuration for the auth middleware.
#[derive(Clone, Debug)]
pub struct AuthConfig {
    /// Whether authentication is enabled. When false, all requests pass
    /// through unauthenticated (dev mode).
    pub enabled: bool,
    /// Realm advertised in `WWW-Authenticate` on a 401.
    pub realm: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            realm: "gdptrend".to_string(),
        }
    }
}

impl AuthConfig {
    /// Config with authentication required.
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }
}

/// Validates a bearer token and extracts the caller's identity.
///
/// Implement once per identity provider; the middleware calls
/// [`validate`](TokenValidator::validate) with the raw token.
#[async_trait]
pub trait TokenValidator: Send + Sync + 'static {
    /// Validates a token, returning the authenticated user on success.
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
