//! Result union for a single logical remote operation.

use serde::{Deserialize, Serialize};

/// Holds exactly one of a success value or a failure cause for one logical
/// operation. Created at the moment a remote call settles, immutable after,
/// and consumed by the merge step that owns its key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Either<P, A> {
    /// The operation produced a value.
    Primary(P),
    /// The operation failed; the alternate carries the cause.
    Alternate(A),
}

impl<P, A> Either<P, A> {
    /// Wrap a settled remote-call outcome, applying `transform` to the raw
    /// value only on the success path. An error outcome always yields the
    /// alternate, no matter what the call also produced.
    pub fn of<V, F>(outcome: Result<V, A>, transform: F) -> Self
    where
        F: FnOnce(V) -> P,
    {
        match outcome {
            Ok(value) => Either::Primary(transform(value)),
            Err(cause) => Either::Alternate(cause),
        }
    }

    pub fn is_primary_present(&self) -> bool {
        matches!(self, Either::Primary(_))
    }

    pub fn primary(&self) -> Option<&P> {
        match self {
            Either::Primary(value) => Some(value),
            Either::Alternate(_) => None,
        }
    }

    pub fn primary_mut(&mut self) -> Option<&mut P> {
        match self {
            Either::Primary(value) => Some(value),
            Either::Alternate(_) => None,
        }
    }

    pub fn alternate(&self) -> Option<&A> {
        match self {
            Either::Primary(_) => None,
            Either::Alternate(cause) => Some(cause),
        }
    }

    pub fn into_primary(self) -> Option<P> {
        match self {
            Either::Primary(value) => Some(value),
            Either::Alternate(_) => None,
        }
    }

    pub fn into_alternate(self) -> Option<A> {
        match self {
            Either::Primary(_) => None,
            Either::Alternate(cause) => Some(cause),
        }
    }
}
