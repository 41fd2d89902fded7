//! Authenticated Identity
//!
//! Authentication itself is delegated to the hosted identity provider; by the
//! time a request reaches this crate an upstream layer has already validated
//! the credentials and inserted an [`AuthenticatedUser`] into the request
//! extensions. This module only recovers that identity.

use axum::extract::FromRequestParts;
use http::request::Parts;

use crate::error::AuthzError;

/// Current user context carried through the request
///
/// Created by the upstream authentication layer and injected via
/// `req.extensions_mut().insert(user)`.
///
/// # Example
///
/// ```ignore
/// async fn handler(user: AuthenticatedUser) -> Json<()> {
///     println!("user: {}, role: {}", user.email, user.role);
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// User ID at the identity provider
    pub id: String,
    /// Login email
    pub email: String,
    /// Primary role name
    pub role: String,
}

impl AuthenticatedUser {
    pub fn new(id: impl Into<String>, email: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    /// Whether this user holds the admin role
    pub fn is_admin(&self) -> bool {
        self.role == crate::authz::ADMIN_ROLE
    }
}

/// Extract the authenticated user from request extensions
///
/// Rejects with 401 Unauthorized when no upstream layer injected an identity.
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AuthzError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<AuthenticatedUser>() {
            Some(user) => Ok(user.clone()),
            None => {
                tracing::warn!(uri = %parts.uri, "Request reached guarded route without identity");
                Err(AuthzError::Unauthorized)
            }
        }
    }
}
