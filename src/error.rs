//! Engine error types.
//!
//! Every failure in this crate is locally recoverable and reported as a
//! value — a rejected move leaves the store untouched. `MalformedTime` and
//! `NonPositiveDuration` indicate corrupt input and abort the triggering
//! load or edit; the rest are ordinary rejections the caller surfaces to
//! the view.

use crate::models::SessionId;
use thiserror::Error;

/// Result alias used throughout the engine.
pub type EngineResult<T> = Result<T, EngineError>;

/// Failures the engine can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A clock string was not valid `HH:MM`.
    #[error("malformed clock time: '{0}'")]
    MalformedTime(String),

    /// A time range ended at or before it started.
    #[error("non-positive duration: start {start_min} >= end {end_min} (minutes)")]
    NonPositiveDuration { start_min: i32, end_min: i32 },

    /// No session exists under the given identity.
    #[error("unknown session: {0}")]
    NotFound(SessionId),

    /// A move destination is outside the period table, inside a break
    /// period, or its encoding could not be parsed.
    #[error("invalid move target: {0}")]
    InvalidTarget(String),

    /// The destination double-books an (axis value, day) lane.
    #[error("destination conflicts with session {with}")]
    AxisConflict { with: SessionId },
}
