//! Node Permissions
//!
//! Permission flags and bitmask sets for coordination-service ACL entries.
//! The string form ("cdrwa") matches what the service's CLI and admin tooling
//! print, so it is also the form used in configuration files.

use crate::error::{AclError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Permission enumeration for node-level access control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Permission {
    /// Read node data and list children
    Read = 0b00001,

    /// Set node data
    Write = 0b00010,

    /// Create child nodes
    Create = 0b00100,

    /// Delete child nodes
    Delete = 0b01000,

    /// Set ACLs and inspect node internals
    Admin = 0b10000,
}

/// All flags in canonical display order (create, delete, read, write, admin).
const CANONICAL_ORDER: [Permission; 5] = [
    Permission::Create,
    Permission::Delete,
    Permission::Read,
    Permission::Write,
    Permission::Admin,
];

impl Permission {
    pub fn from_bits(bits: u8) -> Vec<Permission> {
        let mut permissions = Vec::new();
        for permission in CANONICAL_ORDER {
            if bits & permission as u8 != 0 {
                permissions.push(permission);
            }
        }
        permissions
    }

    pub fn to_bits(permissions: &[Permission]) -> u8 {
        permissions.iter().fold(0u8, |acc, &perm| acc | perm as u8)
    }

    /// Single-character flag used in the string form
    pub fn flag(&self) -> char {
        match self {
            Permission::Read => 'r',
            Permission::Write => 'w',
            Permission::Create => 'c',
            Permission::Delete => 'd',
            Permission::Admin => 'a',
        }
    }

    /// Parse a single flag character
    pub fn from_flag(flag: char) -> Result<Permission> {
        match flag {
            'r' => Ok(Permission::Read),
            'w' => Ok(Permission::Write),
            'c' => Ok(Permission::Create),
            'd' => Ok(Permission::Delete),
            'a' => Ok(Permission::Admin),
            other => Err(AclError::InvalidPermission(other)),
        }
    }
}

/// Set of permissions for efficient membership checks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PermissionSet {
    bits: u8,
}

impl PermissionSet {
    const ALL_BITS: u8 = 0b11111;

    pub fn new() -> Self {
        Self { bits: 0 }
    }

    /// Union of every flag
    pub fn all() -> Self {
        Self {
            bits: Self::ALL_BITS,
        }
    }

    /// Read flag only
    pub fn read_only() -> Self {
        Self {
            bits: Permission::Read as u8,
        }
    }

    pub fn with_permission(mut self, permission: Permission) -> Self {
        self.bits |= permission as u8;
        self
    }

    pub fn contains(&self, permission: Permission) -> bool {
        (self.bits & permission as u8) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn has_all(&self, permissions: &[Permission]) -> bool {
        let required_bits = Permission::to_bits(permissions);
        (self.bits & required_bits) == required_bits
    }

    pub fn has_any(&self, permissions: &[Permission]) -> bool {
        let check_bits = Permission::to_bits(permissions);
        (self.bits & check_bits) != 0
    }

    pub fn union(&self, other: PermissionSet) -> PermissionSet {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Raw bitmask, as carried in the client's wire-level ACL format
    pub fn bits(&self) -> u8 {
        self.bits
    }
}

impl From<Vec<Permission>> for PermissionSet {
    fn from(permissions: Vec<Permission>) -> Self {
        Self {
            bits: Permission::to_bits(&permissions),
        }
    }
}

impl From<&[Permission]> for PermissionSet {
    fn from(permissions: &[Permission]) -> Self {
        Self {
            bits: Permission::to_bits(permissions),
        }
    }
}

impl fmt::Display for PermissionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for permission in CANONICAL_ORDER {
            if self.contains(permission) {
                write!(f, "{}", permission.flag())?;
            }
        }
        Ok(())
    }
}

impl FromStr for PermissionSet {
    type Err = AclError;

    fn from_str(s: &str) -> Result<Self> {
        let mut set = PermissionSet::new();
        for flag in s.chars() {
            set = set.with_permission(Permission::from_flag(flag)?);
        }
        Ok(set)
    }
}

impl From<PermissionSet> for String {
    fn from(set: PermissionSet) -> Self {
        set.to_string()
    }
}

impl TryFrom<String> for PermissionSet {
    type Error = AclError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}
