//! SASL Principal ACL Policy
//!
//! Grants everything to one SASL-authenticated principal and read access to
//! the world, for every node in the tree. This is the policy a secured client
//! installs so that its own service identity keeps full control of the nodes
//! it creates while other tenants can still inspect them.

use super::AclPolicy;
use crate::acl::{AclEntry, AclId, PermissionSet};
use crate::error::{AclError, Result};

/// Fixed two-entry policy derived from a single configured principal
#[derive(Debug, Clone)]
pub struct SaslAclPolicy {
    /// Entry order is a display contract: the owning principal first, the
    /// world grant second. Authorization is the union of matching entries.
    entries: [AclEntry; 2],
}

impl SaslAclPolicy {
    /// Build the policy for the given authenticated principal.
    ///
    /// Fails with `InvalidConfig` if the principal is empty; an anonymous
    /// identity holding an ALL grant is a misconfiguration that must halt
    /// startup, not a usable default.
    pub fn new(principal: impl Into<String>) -> Result<Self> {
        let principal = principal.into();
        validate_principal(&principal)?;

        Ok(Self {
            entries: [
                AclEntry::new(PermissionSet::all(), AclId::sasl(principal)),
                AclEntry::world_read(),
            ],
        })
    }

    /// The principal this policy grants full permissions to
    pub fn principal(&self) -> &str {
        &self.entries[0].id.id
    }
}

impl AclPolicy for SaslAclPolicy {
    fn name(&self) -> &'static str {
        "sasl"
    }

    fn default_acl(&self) -> &[AclEntry] {
        &self.entries
    }

    fn acl_for_path(&self, _path: &str) -> &[AclEntry] {
        // Path-independent: every node gets the same pair. The path is
        // accepted unvalidated so callers can resolve before any path
        // normalization happens.
        &self.entries
    }
}

/// Validate that a principal name is acceptable as a SASL identity
fn validate_principal(principal: &str) -> Result<()> {
    if principal.is_empty() {
        return Err(AclError::InvalidConfig(
            "acl principal cannot be empty".to_string(),
        ));
    }

    if principal.len() > 255 {
        return Err(AclError::InvalidConfig(
            "acl principal too long (max 255 bytes)".to_string(),
        ));
    }

    if principal.contains(['\0', '\n', '\r', '\t']) {
        return Err(AclError::InvalidConfig(
            "acl principal contains control characters".to_string(),
        ));
    }

    Ok(())
}
