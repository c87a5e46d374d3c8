//! Engine error types

use thiserror::Error;

/// Engine error
#[derive(Error, Debug)]
pub enum EngineError {
    /// Rule tree is deeper than the configured limit
    #[error("Rule tree depth {depth} exceeds configured maximum {max}")]
    DepthExceeded { depth: usize, max: usize },

    /// Rule parameter validation failed
    #[error("Invalid rule: {0}")]
    InvalidRule(#[from] precept_core::CoreError),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
