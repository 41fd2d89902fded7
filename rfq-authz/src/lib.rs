//! RFQ Platform Authorization
//!
//! Role-based access control for the B2B Request-for-Quote procurement
//! platform: buyers create RFQs, suppliers respond with offers, managers
//! approve, admins manage users. This crate answers two questions for every
//! guarded operation:
//!
//! - may this role perform `resource:action`?
//! - does this role satisfy a role requirement?
//!
//! Decisions are pure lookups over an immutable, injected grant table; they
//! never fail and never touch I/O. Authentication is delegated to the hosted
//! identity provider — an upstream layer injects the [`AuthenticatedUser`]
//! this crate consumes.
//!
//! # Module structure
//!
//! ```text
//! rfq-authz/src/
//! ├── authz/        # grant table and evaluator
//! ├── guard.rs      # axum route guards
//! ├── identity.rs   # authenticated user context
//! ├── config.rs     # env + grants-file configuration
//! └── error.rs      # error type and HTTP mapping
//! ```
//!
//! # Example
//!
//! ```
//! use rfq_authz::{AuthorizationEvaluator, RoleGrants};
//!
//! let authz = AuthorizationEvaluator::new(RoleGrants::platform_defaults());
//!
//! assert!(authz.has_permission("buyer", "rfq", "create"));
//! assert!(!authz.has_permission("supplier", "rfq", "create"));
//! assert!(authz.has_role("admin", "buyer"));
//! ```

pub mod authz;
pub mod config;
pub mod error;
pub mod guard;
pub mod identity;

// Re-export public types
pub use authz::{ADMIN_ROLE, AuthorizationEvaluator, RoleGrants, RoleRequirement};
pub use config::AuthzConfig;
pub use error::{AuthzError, Result};
pub use guard::{AuthenticatedUserExt, require_admin, require_permission, require_role};
pub use identity::AuthenticatedUser;
