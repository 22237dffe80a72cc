//! Error types for NHK4S.

use std::io;

/// Errors produced while setting up the pointer screen.
#[derive(Debug, thiserror::Error)]
pub enum Nhk4sError {
    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, Nhk4sError>;

/// The host refused a synthetic touch sequence.
///
/// This is the only runtime failure the pointer controller knows about. It is
/// reported to the user and dropped; the tap is never retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("synthetic input rejected: {0}")]
pub struct DispatchError(pub String);
