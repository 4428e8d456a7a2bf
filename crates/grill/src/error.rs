#![forbid(unsafe_code)]

//! Grill error model.
//!
//! Errors only arise while configuring or attaching a grid. Once attached,
//! gesture handling reports ignored events through transitions and logs
//! instead of failing.

use grill_layout::LayoutError;
use thiserror::Error;

/// Top-level error type for the grill facade.
#[derive(Debug, Error)]
pub enum GrillError {
    /// I/O failure reading a configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML configuration could not be parsed.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    /// JSON configuration could not be parsed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// Configuration values out of range.
    #[error("invalid configuration: {}", .0.join("; "))]
    InvalidConfig(Vec<String>),
    /// The tiles cannot be laid out.
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Standard result type for grill APIs.
pub type Result<T> = std::result::Result<T, GrillError>;
