//! Authorization Evaluator
//!
//! Pure permission and role decisions over an injected [`RoleGrants`] table.
//!
//! Both operations are synchronous, side-effect free and infallible: "no
//! permission" and "unrecognized role" are both an ordinary `false`, never an
//! error. Callers that need to distinguish the two would leak which roles
//! exist, so the evaluator deliberately does not.

use serde::{Deserialize, Serialize};

use super::grants::{ADMIN_ROLE, RoleGrants};

/// A role requirement: a single role or any-of a set of roles
///
/// Route configurations may write either `"buyer"` or `["buyer", "manager"]`;
/// both shapes normalize to a list before comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoleRequirement {
    /// Exactly one acceptable role
    One(String),
    /// Any role from the set is acceptable
    AnyOf(Vec<String>),
}

impl RoleRequirement {
    /// The acceptable roles as a slice
    pub fn roles(&self) -> &[String] {
        match self {
            Self::One(role) => std::slice::from_ref(role),
            Self::AnyOf(roles) => roles,
        }
    }
}

impl From<&str> for RoleRequirement {
    fn from(role: &str) -> Self {
        Self::One(role.to_string())
    }
}

impl From<String> for RoleRequirement {
    fn from(role: String) -> Self {
        Self::One(role)
    }
}

impl From<Vec<String>> for RoleRequirement {
    fn from(roles: Vec<String>) -> Self {
        Self::AnyOf(roles)
    }
}

impl From<Vec<&str>> for RoleRequirement {
    fn from(roles: Vec<&str>) -> Self {
        Self::AnyOf(roles.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for RoleRequirement {
    fn from(roles: &[&str]) -> Self {
        Self::AnyOf(roles.iter().map(|r| r.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for RoleRequirement {
    fn from(roles: [&str; N]) -> Self {
        Self::AnyOf(roles.iter().map(|r| r.to_string()).collect())
    }
}

/// Authorization decisions for the RFQ platform
///
/// Holds the immutable grant table; every decision is a pure lookup.
///
/// # Rules
///
/// 1. The `admin` role passes every check unconditionally
/// 2. A `"*"` grant passes every permission check for that role
/// 3. Otherwise `"resource:action"` must match exactly, or be covered by a
///    `"resource:*"` grant
///
/// # Example
///
/// ```
/// use rfq_authz::{AuthorizationEvaluator, RoleGrants};
///
/// let authz = AuthorizationEvaluator::new(RoleGrants::platform_defaults());
/// assert!(authz.has_permission("buyer", "rfq", "create"));
/// assert!(!authz.has_permission("buyer", "catalog", "create"));
/// assert!(authz.has_role("manager", ["buyer", "manager"]));
/// ```
#[derive(Debug, Clone)]
pub struct AuthorizationEvaluator {
    grants: RoleGrants,
}

impl AuthorizationEvaluator {
    /// Create an evaluator over an explicit grant table
    pub fn new(grants: RoleGrants) -> Self {
        Self { grants }
    }

    /// Evaluator over the built-in RFQ platform grant table
    pub fn platform_defaults() -> Self {
        Self::new(RoleGrants::platform_defaults())
    }

    /// The underlying grant table
    pub fn grants(&self) -> &RoleGrants {
        &self.grants
    }

    /// Check whether `role` may perform `action` on `resource`
    ///
    /// Matching is case-sensitive with no normalization. Unknown roles,
    /// resources and actions simply yield `false`.
    pub fn has_permission(&self, role: &str, resource: &str, action: &str) -> bool {
        // Admin bypass, independent of the configured grant list
        if role == ADMIN_ROLE {
            return true;
        }

        let permissions = self.grants.permissions(role);

        if permissions.iter().any(|p| p == "*") {
            return true;
        }

        let target = format!("{}:{}", resource, action);
        if permissions.iter().any(|p| *p == target) {
            return true;
        }

        let resource_wildcard = format!("{}:*", resource);
        permissions.iter().any(|p| *p == resource_wildcard)
    }

    /// Check whether `role` satisfies a role requirement
    ///
    /// Admin satisfies every requirement, even when `"admin"` is not listed.
    /// An empty requirement denies every non-admin role.
    pub fn has_role(&self, role: &str, required: impl Into<RoleRequirement>) -> bool {
        if role == ADMIN_ROLE {
            return true;
        }
        required.into().roles().iter().any(|r| r == role)
    }
}

impl Default for AuthorizationEvaluator {
    fn default() -> Self {
        Self::platform_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform() -> AuthorizationEvaluator {
        AuthorizationEvaluator::platform_defaults()
    }

    #[test]
    fn admin_has_every_permission() {
        let authz = platform();
        assert!(authz.has_permission("admin", "rfq", "create"));
        assert!(authz.has_permission("admin", "supplier", "read"));
        assert!(authz.has_permission("admin", "catalog", "create"));
        assert!(authz.has_permission("admin", "user", "manage"));
        assert!(authz.has_permission("admin", "nonexistent", "whatever"));
    }

    #[test]
    fn admin_bypass_does_not_depend_on_grant_table() {
        // Even with no admin entry at all the bypass holds
        let authz = AuthorizationEvaluator::new(RoleGrants::empty());
        assert!(authz.has_permission("admin", "rfq", "delete"));
        assert!(authz.has_role("admin", "buyer"));
    }

    #[test]
    fn wildcard_grant_allows_everything() {
        let authz = AuthorizationEvaluator::new(
            RoleGrants::empty().with_role("superuser", ["*"]),
        );
        assert!(authz.has_permission("superuser", "rfq", "create"));
        assert!(authz.has_permission("superuser", "anything", "at-all"));
    }

    #[test]
    fn exact_grant_matches_only_that_permission() {
        let authz =
            AuthorizationEvaluator::new(RoleGrants::empty().with_role("clerk", ["rfq:create"]));
        assert!(authz.has_permission("clerk", "rfq", "create"));
        assert!(!authz.has_permission("clerk", "rfq", "delete"));
        assert!(!authz.has_permission("clerk", "supplier", "read"));
    }

    #[test]
    fn resource_wildcard_covers_every_action_on_that_resource() {
        let authz =
            AuthorizationEvaluator::new(RoleGrants::empty().with_role("curator", ["catalog:*"]));
        assert!(authz.has_permission("curator", "catalog", "create"));
        assert!(authz.has_permission("curator", "catalog", "anything"));
        assert!(!authz.has_permission("curator", "rfq", "read"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let authz =
            AuthorizationEvaluator::new(RoleGrants::empty().with_role("clerk", ["rfq:create"]));
        assert!(!authz.has_permission("clerk", "RFQ", "create"));
        assert!(!authz.has_permission("clerk", "rfq", "Create"));
        assert!(!authz.has_permission("Clerk", "rfq", "create"));
    }

    #[test]
    fn unknown_role_is_denied_without_error() {
        let authz = platform();
        assert!(!authz.has_permission("guest", "rfq", "read"));
        assert!(!authz.has_permission("", "rfq", "read"));
        assert!(!authz.has_role("guest", "buyer"));
    }

    #[test]
    fn empty_inputs_are_denied_without_error() {
        let authz = platform();
        assert!(!authz.has_permission("buyer", "", ""));
        assert!(!authz.has_role("buyer", Vec::<String>::new()));
        // Admin still bypasses even an empty requirement
        assert!(authz.has_role("admin", Vec::<String>::new()));
    }

    #[test]
    fn role_checks_accept_single_and_multiple_forms() {
        let authz = platform();
        assert!(authz.has_role("admin", "buyer"));
        assert!(authz.has_role("buyer", "buyer"));
        assert!(!authz.has_role("supplier", "buyer"));
        assert!(authz.has_role("manager", ["buyer", "manager"]));
        assert!(!authz.has_role("supplier", ["buyer", "manager"]));
    }

    #[test]
    fn repeated_calls_return_identical_results() {
        let authz = platform();
        for _ in 0..3 {
            assert!(authz.has_permission("buyer", "rfq", "create"));
            assert!(!authz.has_permission("buyer", "catalog", "create"));
            assert!(authz.has_role("manager", ["buyer", "manager"]));
        }
    }

    #[test]
    fn buyer_end_to_end_scenario() {
        // Literal buyer grant list from the platform
        let authz = AuthorizationEvaluator::new(RoleGrants::empty().with_role(
            "buyer",
            [
                "rfq:create",
                "rfq:read",
                "rfq:update",
                "rfq:delete",
                "supplier:read",
                "catalog:read",
                "offer:read",
                "verification:request",
            ],
        ));
        assert!(authz.has_permission("buyer", "rfq", "create"));
        assert!(authz.has_permission("buyer", "supplier", "read"));
        assert!(!authz.has_permission("buyer", "catalog", "create"));
    }

    #[test]
    fn platform_role_expectations() {
        let authz = platform();
        assert!(authz.has_permission("supplier", "rfq", "read"));
        assert!(authz.has_permission("supplier", "catalog", "create"));
        assert!(!authz.has_permission("supplier", "rfq", "create"));

        assert!(authz.has_permission("manager", "rfq", "read"));
        assert!(authz.has_permission("manager", "user", "manage"));
        assert!(!authz.has_permission("manager", "rfq", "delete"));
    }

    #[test]
    fn role_requirement_deserializes_both_shapes() {
        let one: RoleRequirement = serde_json::from_str(r#""buyer""#).expect("single role");
        assert_eq!(one.roles(), ["buyer"]);

        let many: RoleRequirement =
            serde_json::from_str(r#"["buyer", "manager"]"#).expect("role list");
        assert_eq!(many.roles(), ["buyer", "manager"]);
    }
}
