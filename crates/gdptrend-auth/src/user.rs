//! Authenticated user identity.

/// An authenticated user identity, extracted from a validated token.
///
/// Stored in HTTP request extensions by the auth middleware; handlers read
/// it with `Extension<AuthenticatedUser>` when they need the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The user's email address.
    pub email: String,
    /// The user's unique subject identifier.
    pub subject: String,
}

impl AuthenticatedUser {
    /// Extracts the user from HTTP request `Parts`, if present.
    pub fn from_parts(parts: &http::request::Parts) -> Option<&AuthenticatedUser> {
        parts.extensions.get::<AuthenticatedUser>()
    }
}
