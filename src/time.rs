//! Clock and period geometry.
//!
//! Pure conversions between wall-clock strings (`HH:MM`), minutes since
//! midnight, and grid period spans. Every move goes through [`shift_end`]
//! so that relocating a session never silently changes its length.
//!
//! # Time Model
//! The engine works in whole minutes since midnight. `HH:MM` strings exist
//! only at the document and drag-target boundaries and are parsed exactly
//! once, there.

use crate::error::{EngineError, EngineResult};

/// Parses an `HH:MM` clock string to minutes since midnight.
///
/// Accepts `0..=23` hours and `0..=59` minutes; anything else — missing
/// colon, non-numeric parts, out-of-range values — is [`EngineError::MalformedTime`].
pub fn to_minutes(clock: &str) -> EngineResult<i32> {
    let malformed = || EngineError::MalformedTime(clock.to_string());

    let (h, m) = clock.split_once(':').ok_or_else(malformed)?;
    let hours: i32 = h.trim().parse().map_err(|_| malformed())?;
    let minutes: i32 = m.trim().parse().map_err(|_| malformed())?;

    if !(0..24).contains(&hours) || !(0..60).contains(&minutes) {
        return Err(malformed());
    }
    Ok(hours * 60 + minutes)
}

/// Renders minutes since midnight as a zero-padded `HH:MM` string.
pub fn format_minutes(minutes: i32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Number of grid periods a `[start, end)` clock range spans.
///
/// `max(1, ceil((end - start) / period_len))`. Fails with
/// [`EngineError::NonPositiveDuration`] if `end <= start`.
pub fn span_periods(start: &str, end: &str, period_len_min: i32) -> EngineResult<u32> {
    span_periods_min(to_minutes(start)?, to_minutes(end)?, period_len_min)
}

/// Minutes-based variant of [`span_periods`] for internal callers that
/// already hold parsed times.
pub fn span_periods_min(start_min: i32, end_min: i32, period_len_min: i32) -> EngineResult<u32> {
    if end_min <= start_min {
        return Err(EngineError::NonPositiveDuration { start_min, end_min });
    }
    let duration = end_min - start_min;
    let span = (duration + period_len_min - 1) / period_len_min;
    Ok(span.max(1) as u32)
}

/// Computes the end time for a session restarted at `new_start_min`,
/// preserving its original duration.
#[inline]
pub fn shift_end(new_start_min: i32, duration_min: i32) -> i32 {
    new_start_min + duration_min
}
