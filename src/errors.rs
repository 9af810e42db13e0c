//! Error types shared across the application.

use std::fmt::{Display, Formatter};

use crate::codec::DecodeError;
use crate::registry::CompositionError;

/// Shared application result type.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error enumeration covering all domain failure modes.
///
/// Wire-decode failures and registry-composition failures keep their
/// structured form so callers can produce precise diagnostics; the
/// remaining variants carry plumbing context as plain messages.
#[derive(Debug)]
pub enum AppError {
    /// Configuration parsing or validation failure.
    Config(String),
    /// Wire payload failed to decode into a typed resource.
    Decode(DecodeError),
    /// Tool registry composition failure — startup-fatal.
    Compose(CompositionError),
    /// Platform service operation failure.
    Platform(String),
    /// Requested entity does not exist.
    NotFound(String),
    /// MCP protocol or transport failure.
    Mcp(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Decode(err) => write!(f, "decode: {err}"),
            Self::Compose(err) => write!(f, "compose: {err}"),
            Self::Platform(msg) => write!(f, "platform: {msg}"),
            Self::NotFound(msg) => write!(f, "not found: {msg}"),
            Self::Mcp(msg) => write!(f, "mcp: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<DecodeError> for AppError {
    fn from(err: DecodeError) -> Self {
        Self::Decode(err)
    }
}

impl From<CompositionError> for AppError {
    fn from(err: CompositionError) -> Self {
        Self::Compose(err)
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(format!("invalid config: {err}"))
    }
}
