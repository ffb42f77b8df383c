//! Failure values captured from remote administrative calls.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cursor::CursorError;

/// A failure outcome from a remote call.
///
/// A fault is either per-key (one entity, partition, or config resource
/// failed; recovered into an [`crate::Either`] alternate) or submission-level
/// (a batched call could not be issued at all; propagated to the caller).
/// Which of the two a given value represents is decided by where it is
/// produced, not by its kind.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum Fault {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("not authorized: {0}")]
    Authorization(String),

    #[error("invalid offset spec: {0}")]
    InvalidOffsetSpec(String),

    #[error("invalid cursor: {0}")]
    InvalidCursor(String),

    #[error("client error: {0}")]
    Client(String),

    #[error("{0}")]
    Unknown(String),
}

/// A cursor that fails to decode faults the request that carried it.
impl From<CursorError> for Fault {
    fn from(error: CursorError) -> Self {
        Fault::InvalidCursor(error.to_string())
    }
}

impl Fault {
    /// Terse machine-readable discriminator, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Fault::NotFound(_) => "not_found",
            Fault::Authorization(_) => "authorization",
            Fault::InvalidOffsetSpec(_) => "invalid_offset_spec",
            Fault::InvalidCursor(_) => "invalid_cursor",
            Fault::Client(_) => "client",
            Fault::Unknown(_) => "unknown",
        }
    }
}
