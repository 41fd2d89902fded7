//! Role Grant Table
//!
//! Static mapping from role name to its granted permission strings.
//!
//! ## Design principles
//! - Permissions are opaque `"resource:action"` tokens, matched case-sensitively
//! - `"*"` grants every action on every resource; `"resource:*"` grants every
//!   action on one resource
//! - The table is built once at startup and never mutated afterwards

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Role whose checks always succeed, regardless of its configured grants
pub const ADMIN_ROLE: &str = "admin";

/// Buyer default permissions
pub const DEFAULT_BUYER_PERMISSIONS: &[&str] = &[
    "rfq:create",
    "rfq:read",
    "rfq:update",
    "rfq:delete",
    "supplier:read",
    "catalog:read",
    "offer:read",
    "verification:request",
];

/// Supplier default permissions
pub const DEFAULT_SUPPLIER_PERMISSIONS: &[&str] = &[
    "rfq:read",
    "catalog:create",
    "catalog:read",
    "catalog:update",
    "catalog:delete",
    "offer:create",
    "offer:read",
    "offer:update",
    "verification:request",
];

/// Manager default permissions
pub const DEFAULT_MANAGER_PERMISSIONS: &[&str] = &[
    "rfq:read",
    "rfq:approve",
    "supplier:read",
    "catalog:read",
    "offer:read",
    "user:manage",
    "analytics:read",
];

/// Admin default permissions
///
/// The wildcard grant co-exists with the hard-coded admin bypass in the
/// evaluator; removing it from a custom table does not demote admin.
pub const DEFAULT_ADMIN_PERMISSIONS: &[&str] = &["*"];

/// Immutable role -> permissions mapping
///
/// Constructed once from static configuration and injected into
/// [`AuthorizationEvaluator`](crate::authz::AuthorizationEvaluator).
/// Serializes as a plain JSON object: `{ "buyer": ["rfq:create", ...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleGrants {
    grants: HashMap<String, Vec<String>>,
}

impl RoleGrants {
    /// Create a grant table from an explicit mapping
    pub fn new(grants: HashMap<String, Vec<String>>) -> Self {
        Self { grants }
    }

    /// Empty grant table (every non-admin check denies)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Built-in grant table for the RFQ platform roles
    pub fn platform_defaults() -> Self {
        let mut grants = HashMap::new();
        grants.insert(ADMIN_ROLE.to_string(), to_owned(DEFAULT_ADMIN_PERMISSIONS));
        grants.insert("buyer".to_string(), to_owned(DEFAULT_BUYER_PERMISSIONS));
        grants.insert(
            "supplier".to_string(),
            to_owned(DEFAULT_SUPPLIER_PERMISSIONS),
        );
        grants.insert("manager".to_string(), to_owned(DEFAULT_MANAGER_PERMISSIONS));
        Self { grants }
    }

    /// Add or replace a role's permission list (builder style)
    ///
    /// Only meant for assembling a table before it is handed to the
    /// evaluator; the evaluator itself never mutates the table.
    pub fn with_role(
        mut self,
        role: impl Into<String>,
        permissions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.grants.insert(
            role.into(),
            permissions.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Permissions granted to a role
    ///
    /// Unknown roles yield an empty list, not an error.
    pub fn permissions(&self, role: &str) -> &[String] {
        self.grants.get(role).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the table has an entry for this role
    pub fn contains_role(&self, role: &str) -> bool {
        self.grants.contains_key(role)
    }

    /// Configured role names (arbitrary order)
    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.grants.keys().map(String::as_str)
    }

    /// Number of configured roles
    pub fn len(&self) -> usize {
        self.grants.len()
    }

    /// Whether the table has no roles at all
    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }
}

fn to_owned(permissions: &[&str]) -> Vec<String> {
    permissions.iter().map(|s| s.to_string()).collect()
}
