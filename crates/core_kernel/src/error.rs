//! Core error types used across the workspace

use thiserror::Error;

/// Core error type for the kernel
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        CoreError::Validation(message.into())
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        CoreError::Configuration(message.into())
    }
}
