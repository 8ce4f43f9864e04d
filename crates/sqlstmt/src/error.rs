//! Error types for sqlstmt

use crate::statement::StatementKind;
use thiserror::Error;

/// Result type alias for sqlstmt operations
pub type StmtResult<T> = Result<T, StmtError>;

/// Error types for statement building and rendering
#[derive(Debug, Error)]
pub enum StmtError {
    /// The destination sink refused a write while rendering
    #[error("Write error: {0}")]
    Write(#[from] std::fmt::Error),

    /// A statement starter of a different kind was issued on a builder
    /// configured with [`RestatementPolicy::Reject`](crate::RestatementPolicy::Reject)
    #[error("Statement conflict: builder holds {current}, refused {requested}")]
    StatementConflict {
        current: StatementKind,
        requested: StatementKind,
    },

    /// Configuration parse error
    #[error("Config error: {0}")]
    Config(String),
}

impl StmtError {
    /// Create a statement conflict error
    pub fn conflict(current: StatementKind, requested: StatementKind) -> Self {
        Self::StatementConflict { current, requested }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this is a statement conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::StatementConflict { .. })
    }

    /// Check if this is a sink write error
    pub fn is_write(&self) -> bool {
        matches!(self, Self::Write(_))
    }
}

impl From<toml::de::Error> for StmtError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}
