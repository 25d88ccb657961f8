//! Errors callers may want to tell apart from plain I/O failures

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PeekError {
    #[error("Worksheet '{name}' not found (available: {})", available.join(", "))]
    SheetNotFound { name: String, available: Vec<String> },

    #[error("Configuration error: {0}")]
    InvalidConfig(String),
}
