use std::path::{Path, PathBuf};

use crate::authz::RoleGrants;
use crate::error::AuthzError;

/// Authorization configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | RBAC_GRANTS_FILE | (unset) | Path to a JSON grants file; built-in table when unset |
/// | ENVIRONMENT | development | Runtime environment |
///
/// # Grants file format
///
/// A JSON object from role name to permission list:
///
/// ```json
/// { "buyer": ["rfq:create", "rfq:read"], "auditor": ["report:*"] }
/// ```
#[derive(Debug, Clone)]
pub struct AuthzConfig {
    /// Optional path to a JSON grants file
    pub grants_file: Option<PathBuf>,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl AuthzConfig {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults.
    pub fn from_env() -> Self {
        Self {
            grants_file: std::env::var("RBAC_GRANTS_FILE").ok().map(PathBuf::from),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Configuration pointing at an explicit grants file
    ///
    /// Mostly useful in tests.
    pub fn with_grants_file(path: impl Into<PathBuf>) -> Self {
        let mut config = Self::from_env();
        config.grants_file = Some(path.into());
        config
    }

    /// Whether this is a production environment
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Whether this is a development environment
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Load the grant table this configuration points at
    ///
    /// Falls back to the built-in platform table when no file is configured.
    ///
    /// # Errors
    ///
    /// [`AuthzError::Config`] when the file cannot be read or is not a valid
    /// JSON grants object.
    pub fn load_grants(&self) -> Result<RoleGrants, AuthzError> {
        match &self.grants_file {
            Some(path) => load_grants_file(path),
            None => {
                tracing::debug!("No grants file configured, using built-in platform table");
                Ok(RoleGrants::platform_defaults())
            }
        }
    }
}

impl Default for AuthzConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn load_grants_file(path: &Path) -> Result<RoleGrants, AuthzError> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        AuthzError::Config(format!("cannot read grants file {}: {}", path.display(), e))
    })?;

    let grants: RoleGrants = serde_json::from_str(&raw).map_err(|e| {
        AuthzError::Config(format!("invalid grants file {}: {}", path.display(), e))
    })?;

    tracing::info!(
        roles = grants.len(),
        path = %path.display(),
        "Loaded role grant table"
    );
    Ok(grants)
}
