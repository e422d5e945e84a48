//! Error types for AUMChain

use std::fmt;

#[derive(Debug, Clone)]
pub enum ChainError {
    InvalidBlock(String),
    InvalidTransaction(String),
    InvalidConfig(String),
    ConfigParse(String),
    MiningCancelled,
    IoError(String),
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ChainError::InvalidBlock(msg) => write!(f, "Invalid block: {}", msg),
            ChainError::InvalidTransaction(msg) => write!(f, "Invalid transaction: {}", msg),
            ChainError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            ChainError::ConfigParse(msg) => write!(f, "Configuration parse error: {}", msg),
            ChainError::MiningCancelled => write!(f, "Mining cancelled"),
            ChainError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for ChainError {}

impl From<std::io::Error> for ChainError {
    fn from(err: std::io::Error) -> Self {
        ChainError::IoError(err.to_string())
    }
}

impl From<toml::de::Error> for ChainError {
    fn from(err: toml::de::Error) -> Self {
        ChainError::ConfigParse(err.to_string())
    }
}

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, ChainError>;
