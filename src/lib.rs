//! ACL resolution policies for the RustCoord coordination-service client.
//!
//! Whenever the client creates or inspects a node it asks its configured
//! [`AclPolicy`] which access-control entries apply. Policies are pure and
//! immutable after construction; configuration errors surface at startup and
//! resolution itself can never fail.

pub mod acl;
pub mod config;
pub mod error;
pub mod policy;

pub use acl::{AclEntry, AclId, Permission, PermissionSet, Scheme};
pub use config::{AclEntryConfig, AclPolicyConfig, AclProviderKind, AclRuleConfig};
pub use error::{AclError, Result};
pub use policy::{create_policy, AclPolicy, OpenAclPolicy, PatternAclPolicy, SaslAclPolicy};
