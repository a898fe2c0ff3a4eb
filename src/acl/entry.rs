//! ACL Entries and Identities
//!
//! The (scheme, identity, permissions) triples attached to coordination-service
//! nodes, plus the predefined entry lists the service defines for common cases.

use super::PermissionSet;
use crate::error::{AclError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Authentication scheme an ACL identity is interpreted under
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// Anyone, authenticated or not; the only valid identity is "anyone"
    World,

    /// Any identity the current session has authenticated as
    Auth,

    /// username:password-digest credentials
    Digest,

    /// Client address or CIDR range
    Ip,

    /// SASL-authenticated principal (Kerberos or similar)
    Sasl,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::World => "world",
            Scheme::Auth => "auth",
            Scheme::Digest => "digest",
            Scheme::Ip => "ip",
            Scheme::Sasl => "sasl",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scheme {
    type Err = AclError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "world" => Ok(Scheme::World),
            "auth" => Ok(Scheme::Auth),
            "digest" => Ok(Scheme::Digest),
            "ip" => Ok(Scheme::Ip),
            "sasl" => Ok(Scheme::Sasl),
            other => Err(AclError::UnknownScheme(other.to_string())),
        }
    }
}

/// Identity the world scheme requires
pub const ANYONE: &str = "anyone";

/// An identity under a specific authentication scheme
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct AclId {
    pub scheme: Scheme,
    pub id: String,
}

impl AclId {
    pub fn new(scheme: Scheme, id: impl Into<String>) -> Self {
        Self {
            scheme,
            id: id.into(),
        }
    }

    /// The world/anyone identity
    pub fn anyone() -> Self {
        Self::new(Scheme::World, ANYONE)
    }

    /// A SASL-authenticated principal
    pub fn sasl(principal: impl Into<String>) -> Self {
        Self::new(Scheme::Sasl, principal)
    }
}

impl fmt::Display for AclId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.scheme, self.id)
    }
}

/// A single access-control entry: a permission set granted to an identity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct AclEntry {
    pub permissions: PermissionSet,
    pub id: AclId,
}

impl AclEntry {
    pub fn new(permissions: PermissionSet, id: AclId) -> Self {
        Self { permissions, id }
    }

    /// Grant READ to the world/anyone identity
    pub fn world_read() -> Self {
        Self::new(PermissionSet::read_only(), AclId::anyone())
    }

    /// Grant every permission to the world/anyone identity
    pub fn world_all() -> Self {
        Self::new(PermissionSet::all(), AclId::anyone())
    }

    /// The (scheme string, identity string, permission bitmask) triple in the
    /// client's wire-level ACL format
    pub fn as_wire_triple(&self) -> (&'static str, &str, u8) {
        (self.id.scheme.as_str(), &self.id.id, self.permissions.bits())
    }
}

impl fmt::Display for AclEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.id, self.permissions)
    }
}

/// Completely open node: anyone may do anything
pub fn open_unsafe() -> Vec<AclEntry> {
    vec![AclEntry::world_all()]
}

/// World-readable node with no other grants
pub fn read_unsafe() -> Vec<AclEntry> {
    vec![AclEntry::world_read()]
}

/// Full permissions for whichever identities the creating session
/// authenticated as
pub fn creator_all() -> Vec<AclEntry> {
    vec![AclEntry::new(
        PermissionSet::all(),
        AclId::new(Scheme::Auth, ""),
    )]
}
