//! Route Guards
//!
//! Axum middleware that gates routes on the authorization evaluator:
//! permission checks for resource operations, role checks for role-restricted
//! areas, and an admin-only guard for the user management screens.
//!
//! Guards assume an upstream authentication layer already injected an
//! [`AuthenticatedUser`] into the request extensions; a missing identity is a
//! 401, a failed check a 403.

use std::sync::Arc;

use axum::{
    extract::Request,
    middleware::Next,
    response::Response,
};

use crate::authz::{AuthorizationEvaluator, RoleRequirement};
use crate::error::AuthzError;
use crate::identity::AuthenticatedUser;

/// Permission check middleware - requires `resource:action`
///
/// # Usage
///
/// ```ignore
/// use axum::middleware;
/// Router::new()
///     .route("/api/rfqs", post(handler::create))
///     .layer(middleware::from_fn(require_permission(authz.clone(), "rfq", "create")));
/// ```
///
/// # Errors
///
/// - 401 Unauthorized when no identity was injected
/// - 403 Forbidden when the user's role lacks the permission
pub fn require_permission(
    authz: Arc<AuthorizationEvaluator>,
    resource: &'static str,
    action: &'static str,
) -> impl Fn(
    Request,
    Next,
) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Response, AuthzError>> + Send>>
+ Clone {
    move |req: Request, next: Next| {
        let authz = authz.clone();
        Box::pin(async move {
            let user = req.current_user()?;

            if !authz.has_permission(&user.role, resource, action) {
                tracing::warn!(
                    user_id = %user.id,
                    role = %user.role,
                    resource,
                    action,
                    "Permission denied"
                );
                return Err(AuthzError::Forbidden(format!(
                    "Permission denied: {}:{}",
                    resource, action
                )));
            }

            Ok(next.run(req).await)
        })
    }
}

/// Role check middleware - requires one of the listed roles
///
/// Accepts a single role or a list; admin passes regardless.
///
/// # Usage
///
/// ```ignore
/// Router::new()
///     .route("/api/approvals", get(handler::list))
///     .layer(middleware::from_fn(require_role(authz.clone(), ["buyer", "manager"])));
/// ```
///
/// # Errors
///
/// - 401 Unauthorized when no identity was injected
/// - 403 Forbidden when the user's role is not in the set
pub fn require_role(
    authz: Arc<AuthorizationEvaluator>,
    required: impl Into<RoleRequirement>,
) -> impl Fn(
    Request,
    Next,
) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Response, AuthzError>> + Send>>
+ Clone {
    let required = required.into();
    move |req: Request, next: Next| {
        let authz = authz.clone();
        let required = required.clone();
        Box::pin(async move {
            let user = req.current_user()?;

            if !authz.has_role(&user.role, required.clone()) {
                tracing::warn!(
                    user_id = %user.id,
                    role = %user.role,
                    required = ?required.roles(),
                    "Role requirement not met"
                );
                return Err(AuthzError::Forbidden(format!(
                    "Role required: {}",
                    required.roles().join(", ")
                )));
            }

            Ok(next.run(req).await)
        })
    }
}

/// Admin guard - requires the admin role
///
/// # Errors
///
/// Non-admin users get 403 Forbidden.
pub async fn require_admin(req: Request, next: Next) -> Result<Response, AuthzError> {
    let user = req.current_user()?;
    if !user.is_admin() {
        tracing::warn!(
            user_id = %user.id,
            role = %user.role,
            "Admin-only route denied"
        );
        return Err(AuthzError::Forbidden("Admin role required".to_string()));
    }

    Ok(next.run(req).await)
}

/// Extension method to read the [`AuthenticatedUser`] off a request
pub trait AuthenticatedUserExt {
    /// Get the injected identity
    ///
    /// # Errors
    ///
    /// 401 Unauthorized when no identity is present.
    fn current_user(&self) -> Result<&AuthenticatedUser, AuthzError>;
}

impl AuthenticatedUserExt for Request {
    fn current_user(&self) -> Result<&AuthenticatedUser, AuthzError> {
        self.extensions()
            .get::<AuthenticatedUser>()
            .ok_or(AuthzError::Unauthorized)
    }
}
