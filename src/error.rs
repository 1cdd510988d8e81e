//! Error types returned by queue operations.
//!
//! Every rejected item rides back to the caller inside the error value, so
//! work handed to a closed or full queue is never silently dropped — the
//! producer can log it, retry it, or route it elsewhere.

use std::error;
use std::fmt;

use thiserror::Error;

/// Returned by [`WorkQueue::bounded`](crate::WorkQueue::bounded) when the
/// requested capacity is zero.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("queue capacity must be at least 1")]
pub struct InvalidCapacity;

/// Returned by [`put`](crate::WorkQueue::put) when the queue has been
/// closed. Carries the rejected item.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PutError<T>(pub T);

impl<T> PutError<T> {
    /// Recovers the item that could not be enqueued.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for PutError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        "PutError(..)".fmt(f)
    }
}

impl<T> fmt::Display for PutError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        "putting into a closed queue".fmt(f)
    }
}

impl<T> error::Error for PutError<T> {}

/// Returned by [`try_put`](crate::WorkQueue::try_put). Carries the
/// rejected item in both variants.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum TryPutError<T> {
    /// The queue is at capacity.
    Full(T),
    /// The queue has been closed.
    Closed(T),
}

impl<T> TryPutError<T> {
    /// Recovers the item that could not be enqueued.
    pub fn into_inner(self) -> T {
        match self {
            TryPutError::Full(item) | TryPutError::Closed(item) => item,
        }
    }

    pub fn is_full(&self) -> bool {
        matches!(self, TryPutError::Full(_))
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, TryPutError::Closed(_))
    }
}

impl<T> fmt::Debug for TryPutError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TryPutError::Full(_) => "Full(..)".fmt(f),
            TryPutError::Closed(_) => "Closed(..)".fmt(f),
        }
    }
}

impl<T> fmt::Display for TryPutError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TryPutError::Full(_) => "putting into a full queue".fmt(f),
            TryPutError::Closed(_) => "putting into a closed queue".fmt(f),
        }
    }
}

impl<T> error::Error for TryPutError<T> {}

/// Returned by [`put_timeout`](crate::WorkQueue::put_timeout). Carries the
/// rejected item in both variants.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum PutTimeoutError<T> {
    /// The deadline expired before space became available.
    Timeout(T),
    /// The queue has been closed.
    Closed(T),
}

impl<T> PutTimeoutError<T> {
    /// Recovers the item that could not be enqueued.
    pub fn into_inner(self) -> T {
        match self {
            PutTimeoutError::Timeout(item) | PutTimeoutError::Closed(item) => item,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, PutTimeoutError::Timeout(_))
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, PutTimeoutError::Closed(_))
    }
}

impl<T> fmt::Debug for PutTimeoutError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PutTimeoutError::Timeout(_) => "Timeout(..)".fmt(f),
            PutTimeoutError::Closed(_) => "Closed(..)".fmt(f),
        }
    }
}

impl<T> fmt::Display for PutTimeoutError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PutTimeoutError::Timeout(_) => "timed out waiting for queue space".fmt(f),
            PutTimeoutError::Closed(_) => "putting into a closed queue".fmt(f),
        }
    }
}

impl<T> error::Error for PutTimeoutError<T> {}

/// Returned by [`take`](crate::WorkQueue::take) when the queue is closed
/// and fully drained: the end-of-stream signal.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("taking from an empty and closed queue")]
pub struct TakeError;

/// Returned by [`try_take`](crate::WorkQueue::try_take).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TryTakeError {
    /// The queue is currently empty but still open.
    #[error("taking from an empty queue")]
    Empty,
    /// The queue is closed and fully drained.
    #[error("taking from an empty and closed queue")]
    Closed,
}

impl TryTakeError {
    pub fn is_empty(&self) -> bool {
        matches!(self, TryTakeError::Empty)
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, TryTakeError::Closed)
    }
}

/// Returned by [`take_timeout`](crate::WorkQueue::take_timeout).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TakeTimeoutError {
    /// The deadline expired before an item became available.
    #[error("timed out waiting for an item")]
    Timeout,
    /// The queue is closed and fully drained.
    #[error("taking from an empty and closed queue")]
    Closed,
}

impl TakeTimeoutError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, TakeTimeoutError::Timeout)
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, TakeTimeoutError::Closed)
    }
}
