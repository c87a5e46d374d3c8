//! Error types for PRECEPT Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid rule parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
