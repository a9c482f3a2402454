//! Result of routing one call through the batch controller.

use crate::Result;

/// What a dispatched call produced.
///
/// In immediate mode the call completes with the decoded body. In queued
/// mode nothing is sent: the caller gets the position its outcome will
/// occupy in the next drain.
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub enum Reply<T> {
    Completed(T),
    Queued { index: usize },
}

impl<T> Reply<T> {
    pub fn is_queued(&self) -> bool {
        matches!(self, Reply::Queued { .. })
    }

    pub fn queued_index(&self) -> Option<usize> {
        match self {
            Reply::Queued { index } => Some(*index),
            Reply::Completed(_) => None,
        }
    }

    pub fn completed(self) -> Option<T> {
        match self {
            Reply::Completed(v) => Some(v),
            Reply::Queued { .. } => None,
        }
    }

    pub fn as_completed(&self) -> Option<&T> {
        match self {
            Reply::Completed(v) => Some(v),
            Reply::Queued { .. } => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Reply<U> {
        match self {
            Reply::Completed(v) => Reply::Completed(f(v)),
            Reply::Queued { index } => Reply::Queued { index },
        }
    }

    pub fn try_map<U>(self, f: impl FnOnce(T) -> Result<U>) -> Result<Reply<U>> {
        match self {
            Reply::Completed(v) => Ok(Reply::Completed(f(v)?)),
            Reply::Queued { index } => Ok(Reply::Queued { index }),
        }
    }
}
