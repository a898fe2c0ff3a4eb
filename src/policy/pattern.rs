//! Per-Path ACL Policy
//!
//! Maps compiled path patterns to entry lists. Rules are checked in insertion
//! order and the first match wins; paths no rule matches fall back to a
//! mandatory default list, so resolution is total.

use super::AclPolicy;
use crate::acl::AclEntry;
use crate::error::{AclError, Result};
use tracing::debug;

/// Compiled path pattern for efficient matching
#[derive(Debug, Clone)]
pub enum CompiledPathPattern {
    /// Match every path
    All,

    /// Exact path match
    Exact(String),

    /// Match a node and its entire subtree (written "/a/b/**")
    Subtree(String),

    /// Single-wildcard pattern (e.g. "/brokers/*/state")
    Wildcard { prefix: String, suffix: String },

    /// Regex pattern, anchored to the full path
    Regex(regex::Regex),
}

impl CompiledPathPattern {
    /// Compile a pattern string into an efficient matcher
    pub fn compile(pattern: &str) -> Result<Self> {
        if pattern.is_empty() {
            return Err(AclError::InvalidPathPattern {
                pattern: pattern.to_string(),
                reason: "pattern cannot be empty".to_string(),
            });
        }

        if pattern == "*" {
            return Ok(CompiledPathPattern::All);
        }

        if let Some(base) = pattern.strip_suffix("/**") {
            return Ok(CompiledPathPattern::Subtree(base.to_string()));
        }

        if pattern.contains('*') {
            let parts: Vec<&str> = pattern.split('*').collect();
            if parts.len() == 2 {
                return Ok(CompiledPathPattern::Wildcard {
                    prefix: parts[0].to_string(),
                    suffix: parts[1].to_string(),
                });
            }
            return Err(AclError::InvalidPathPattern {
                pattern: pattern.to_string(),
                reason: "at most one '*' wildcard is supported".to_string(),
            });
        }

        if pattern.chars().any(|c| "[]{}()^$+?|\\".contains(c)) {
            let regex = regex::Regex::new(&format!("^(?:{pattern})$")).map_err(|e| {
                AclError::InvalidPathPattern {
                    pattern: pattern.to_string(),
                    reason: e.to_string(),
                }
            })?;
            return Ok(CompiledPathPattern::Regex(regex));
        }

        Ok(CompiledPathPattern::Exact(pattern.to_string()))
    }

    /// Test if this pattern matches a given path
    pub fn matches(&self, path: &str) -> bool {
        match self {
            CompiledPathPattern::All => true,
            CompiledPathPattern::Exact(exact) => path == exact,
            CompiledPathPattern::Subtree(base) => {
                path == base || (path.starts_with(base) && path[base.len()..].starts_with('/'))
            }
            CompiledPathPattern::Wildcard { prefix, suffix } => {
                path.len() >= prefix.len() + suffix.len()
                    && path.starts_with(prefix)
                    && path.ends_with(suffix)
            }
            CompiledPathPattern::Regex(regex) => regex.is_match(path),
        }
    }
}

/// One ordered rule: a pattern and the entries it installs
#[derive(Debug, Clone)]
struct PathRule {
    pattern: CompiledPathPattern,
    entries: Vec<AclEntry>,
}

/// Ordered per-path policy with a mandatory fallback list
#[derive(Debug, Clone)]
pub struct PatternAclPolicy {
    rules: Vec<PathRule>,
    fallback: Vec<AclEntry>,
}

impl PatternAclPolicy {
    /// Create a policy that resolves every path to `fallback` until rules
    /// are added. The fallback list must be non-empty so resolution can
    /// never produce an empty ACL.
    pub fn new(fallback: Vec<AclEntry>) -> Result<Self> {
        if fallback.is_empty() {
            return Err(AclError::InvalidConfig(
                "pattern policy fallback entries cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            rules: Vec::new(),
            fallback,
        })
    }

    /// Append a rule; later rules only apply where earlier ones do not match
    pub fn with_rule(mut self, pattern: &str, entries: Vec<AclEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(AclError::InvalidConfig(format!(
                "rule '{pattern}' must grant at least one entry"
            )));
        }

        let compiled = CompiledPathPattern::compile(pattern)?;
        debug!(pattern, entries = entries.len(), "compiled acl path rule");

        self.rules.push(PathRule {
            pattern: compiled,
            entries,
        });
        Ok(self)
    }

    /// Number of configured rules
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

impl AclPolicy for PatternAclPolicy {
    fn name(&self) -> &'static str {
        "pattern"
    }

    fn default_acl(&self) -> &[AclEntry] {
        &self.fallback
    }

    fn acl_for_path(&self, path: &str) -> &[AclEntry] {
        for rule in &self.rules {
            if rule.pattern.matches(path) {
                return &rule.entries;
            }
        }
        &self.fallback
    }
}
