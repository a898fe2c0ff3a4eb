//! Open ACL Policy
//!
//! Grants everything to everyone on every node: the behavior an unconfigured
//! client falls back to, made selectable as an explicit provider.

use super::AclPolicy;
use crate::acl::AclEntry;
use tracing::warn;

/// Permissive policy for deployments without authentication
#[derive(Debug, Clone)]
pub struct OpenAclPolicy {
    entries: [AclEntry; 1],
}

impl OpenAclPolicy {
    pub fn new() -> Self {
        warn!("open acl policy in use: every node is world-writable");
        Self {
            entries: [AclEntry::world_all()],
        }
    }
}

impl Default for OpenAclPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl AclPolicy for OpenAclPolicy {
    fn name(&self) -> &'static str {
        "open"
    }

    fn default_acl(&self) -> &[AclEntry] {
        &self.entries
    }

    fn acl_for_path(&self, _path: &str) -> &[AclEntry] {
        &self.entries
    }
}
