use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupErrorKind {
    NotFound,
    Transport,
    Parse,
}

/// Why a lookup produced no record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("no pokemon matches '{query}' (status {status})")]
    NotFound { query: String, status: u16 },
    #[error("transport failure looking up '{query}': {message}")]
    Transport { query: String, message: String },
    #[error("malformed response for '{query}': {message}")]
    Parse { query: String, message: String },
}

impl LookupError {
    pub fn not_found(query: impl Into<String>, status: u16) -> Self {
        Self::NotFound {
            query: query.into(),
            status,
        }
    }

    pub fn transport(query: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            query: query.into(),
            message: message.into(),
        }
    }

    pub fn parse(query: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            query: query.into(),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> LookupErrorKind {
        match self {
            Self::NotFound { .. } => LookupErrorKind::NotFound,
            Self::Transport { .. } => LookupErrorKind::Transport,
            Self::Parse { .. } => LookupErrorKind::Parse,
        }
    }

    pub fn query(&self) -> &str {
        match self {
            Self::NotFound { query, .. }
            | Self::Transport { query, .. }
            | Self::Parse { query, .. } => query,
        }
    }
}

/// A response decoded as JSON but violating a record invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("pokemon name is empty")]
    EmptyName,
    #[error("pokemon id {0} is not a positive 32-bit integer")]
    InvalidId(i64),
}
