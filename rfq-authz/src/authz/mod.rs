//! Authorization module
//!
//! Role-based access control for the RFQ platform:
//! - [`RoleGrants`] - static role -> permissions table
//! - [`AuthorizationEvaluator`] - permission and role decisions
//! - [`RoleRequirement`] - single-or-list role requirement

pub mod evaluator;
pub mod grants;

pub use evaluator::{AuthorizationEvaluator, RoleRequirement};
pub use grants::{ADMIN_ROLE, RoleGrants};
