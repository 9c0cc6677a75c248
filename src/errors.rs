// src/errors.rs

//! Crate-wide error type.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::Period;

#[derive(Error, Debug)]
pub enum CostMonitorError {
    #[error("Config not found at {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Invalid config at `{path}`: {message}")]
    SchemaValidation { path: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No actual spend reported for configured period '{0}'")]
    MissingActual(Period),

    #[error("Actual spend for '{period}' is not a valid amount: {value}")]
    InvalidActual { period: Period, value: f64 },

    #[error("Cost source unavailable: {0}")]
    CostSourceUnavailable(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CostMonitorError {
    /// Shorthand for a schema error at a dotted field path.
    pub fn schema(path: impl Into<String>, message: impl Into<String>) -> Self {
        CostMonitorError::SchemaValidation {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Field path of a schema error, if this is one.
    pub fn field_path(&self) -> Option<&str> {
        match self {
            CostMonitorError::SchemaValidation { path, .. } => Some(path),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CostMonitorError>;
