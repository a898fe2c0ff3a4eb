use crate::acl::{AclEntry, AclId, PermissionSet, Scheme, ANYONE};
use crate::error::{AclError, Result};
use serde::{Deserialize, Serialize};

/// ACL policy configuration, typically one `[acl]` block in the client's
/// config file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AclPolicyConfig {
    /// Which policy variant to build
    pub provider: AclProviderKind,

    /// SASL principal granted full permissions; required by the sasl provider
    pub principal: Option<String>,

    /// Ordered path rules; pattern provider only
    #[serde(default)]
    pub rules: Vec<AclRuleConfig>,

    /// Entries for paths no rule matches; required by the pattern provider
    #[serde(default)]
    pub fallback: Vec<AclEntryConfig>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AclProviderKind {
    Open,
    Sasl,
    Pattern,
}

/// One path rule for the pattern provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AclRuleConfig {
    /// Path pattern: exact, "/base/**" subtree, single-`*` wildcard, or regex
    pub path: String,

    /// Entries installed on matching paths
    pub entries: Vec<AclEntryConfig>,
}

/// One configured ACL entry, in the string forms used by admin tooling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AclEntryConfig {
    pub scheme: String,
    pub id: String,
    pub permissions: String,
}

impl AclEntryConfig {
    /// Compile the string forms into a typed entry
    pub fn compile(&self) -> Result<AclEntry> {
        let scheme: Scheme = self.scheme.parse()?;
        let permissions: PermissionSet = self.permissions.parse()?;

        if permissions.is_empty() {
            return Err(AclError::InvalidConfig(format!(
                "entry for '{}:{}' grants no permissions",
                self.scheme, self.id
            )));
        }

        if scheme == Scheme::World && self.id != ANYONE {
            return Err(AclError::InvalidConfig(format!(
                "world scheme only accepts the '{ANYONE}' identity, got '{}'",
                self.id
            )));
        }

        Ok(AclEntry::new(permissions, AclId::new(scheme, self.id.clone())))
    }
}

impl Default for AclPolicyConfig {
    fn default() -> Self {
        Self {
            provider: AclProviderKind::Open,
            principal: None,
            rules: Vec::new(),
            fallback: Vec::new(),
        }
    }
}

impl AclPolicyConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AclPolicyConfig =
            toml::from_str(&content).map_err(|e| AclError::InvalidConfig(e.to_string()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        match self.provider {
            AclProviderKind::Open => {}
            AclProviderKind::Sasl => {
                if self.principal.as_deref().unwrap_or("").is_empty() {
                    return Err(AclError::InvalidConfig(
                        "sasl provider requires a non-empty principal".to_string(),
                    ));
                }
            }
            AclProviderKind::Pattern => {
                if self.fallback.is_empty() {
                    return Err(AclError::InvalidConfig(
                        "pattern provider requires fallback entries".to_string(),
                    ));
                }
            }
        }

        Ok(())
    }

    /// Compile the fallback entry list for the pattern provider
    pub fn compile_fallback(&self) -> Result<Vec<AclEntry>> {
        self.fallback.iter().map(AclEntryConfig::compile).collect()
    }
}

impl AclRuleConfig {
    /// Compile this rule's entry list
    pub fn compile_entries(&self) -> Result<Vec<AclEntry>> {
        self.entries.iter().map(AclEntryConfig::compile).collect()
    }
}
