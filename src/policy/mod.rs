//! ACL Resolution Policies
//!
//! The capability every policy satisfies plus the shipped implementations.
//! The client asks its policy which entries to attach whenever it creates or
//! inspects a node; policies only compute entry lists, they never apply them.

pub mod open;
pub mod pattern;
pub mod sasl;

pub use open::OpenAclPolicy;
pub use pattern::{CompiledPathPattern, PatternAclPolicy};
pub use sasl::SaslAclPolicy;

use crate::acl::AclEntry;
use crate::config::{AclPolicyConfig, AclProviderKind};
use crate::error::Result;
use std::sync::Arc;
use tracing::info;

/// Capability interface for ACL resolution.
///
/// Implementations hold only immutable data after construction: both
/// operations are pure, total, and safe to call from any number of threads
/// without synchronization. Returned slices are referentially stable for the
/// lifetime of the policy and are never empty.
pub trait AclPolicy: Send + Sync {
    /// Tag identifying the policy variant, for logs and diagnostics
    fn name(&self) -> &'static str;

    /// Entries for node-creation operations that name no specific path
    fn default_acl(&self) -> &[AclEntry];

    /// Entries to enforce for the given path. Any string is accepted,
    /// malformed paths included; resolution cannot fail.
    fn acl_for_path(&self, path: &str) -> &[AclEntry];
}

/// Build the policy selected by the given configuration.
///
/// Validation failures propagate to the caller performing setup and are meant
/// to halt startup; a misconfigured ACL policy must never be silently
/// replaced with a permissive one.
pub fn create_policy(config: &AclPolicyConfig) -> Result<Arc<dyn AclPolicy>> {
    config.validate()?;

    let policy: Arc<dyn AclPolicy> = match config.provider {
        AclProviderKind::Open => Arc::new(OpenAclPolicy::new()),
        AclProviderKind::Sasl => {
            let principal = config.principal.as_deref().unwrap_or_default();
            Arc::new(SaslAclPolicy::new(principal)?)
        }
        AclProviderKind::Pattern => {
            let mut policy = PatternAclPolicy::new(config.compile_fallback()?)?;
            for rule in &config.rules {
                policy = policy.with_rule(&rule.path, rule.compile_entries()?)?;
            }
            Arc::new(policy)
        }
    };

    info!(provider = policy.name(), "acl policy initialized");
    Ok(policy)
}
