use thiserror::Error;

pub type Result<T> = std::result::Result<T, AclError>;

#[derive(Error, Debug)]
pub enum AclError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown ACL scheme: {0}")]
    UnknownScheme(String),

    #[error("Invalid permission flag: {0}")]
    InvalidPermission(char),

    #[error("Invalid path pattern '{pattern}': {reason}")]
    InvalidPathPattern { pattern: String, reason: String },
}
