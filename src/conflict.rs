//! Conflict detection policies.
//!
//! Two distinct checks:
//! - the **restricted-window** check flags sessions overlapping a fixed
//!   institutional interval (the midday prayer window). It only warns;
//!   flagged sessions remain schedulable.
//! - the **axis collision** check finds true double-bookings of an
//!   (axis value, day) lane. This is a hard conflict: the move engine
//!   rejects any relocation that triggers it.
//!
//! All interval comparisons are half-open: `[start, end)`.

use crate::index::Axis;
use crate::models::{Day, Session, SessionId, TimeSlot};

/// Default restricted window: midday (Dhuhr) prayer, 11:40-12:30,
/// as `(start_min, end_min)`.
pub const DHUHR_WINDOW: (i32, i32) = (11 * 60 + 40, 12 * 60 + 30);

/// Whether a slot overlaps the `[window_start, window_end)` restricted
/// interval. Flag only — never blocks a move.
pub fn overlaps_restricted_window(slot: &TimeSlot, window_start: i32, window_end: i32) -> bool {
    slot.start_min < window_end && slot.end_min > window_start
}

/// Finds the first session double-booking an (axis value, day) lane
/// against the proposed `[start_min, end_min)` range.
///
/// `excluding` is the session being moved; it never conflicts with itself.
/// Returns the colliding session, or `None` if the lane is free.
pub fn collides_on_axis<'a>(
    axis: Axis,
    axis_value: &str,
    day: Day,
    start_min: i32,
    end_min: i32,
    sessions: &'a [Session],
    excluding: SessionId,
) -> Option<&'a Session> {
    sessions.iter().find(|s| {
        s.id != excluding
            && s.slot.day == day
            && on_axis_value(s, axis, axis_value)
            && s.slot.overlaps_range(start_min, end_min)
    })
}

/// All sessions overlapping the `[window_start, window_end)` restricted
/// interval, for surfacing as warnings.
pub fn restricted_window_warnings(
    sessions: &[Session],
    window_start: i32,
    window_end: i32,
) -> Vec<&Session> {
    sessions
        .iter()
        .filter(|s| overlaps_restricted_window(&s.slot, window_start, window_end))
        .collect()
}

fn on_axis_value(session: &Session, axis: Axis, axis_value: &str) -> bool {
    match axis {
        Axis::Room => session.room == axis_value,
        Axis::Section => session.serves_section(axis_value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::to_minutes;

    fn session_at(room: &str, day: Day, start: &str, end: &str) -> Session {
        let slot = TimeSlot::new(
            day,
            to_minutes(start).unwrap(),
            to_minutes(end).unwrap(),
            0,
        );
        Session::new("IF-301", room, slot).with_section("IF-3A")
    }

    #[test]
    fn test_restricted_window_flags_exact_overlap() {
        let s = session_at("R1", Day::Monday, "11:40", "12:30");
        let (ws, we) = DHUHR_WINDOW;
        assert!(overlaps_restricted_window(&s.slot, ws, we));
    }

    #[test]
    fn test_restricted_window_touching_not_flagged() {
        let (ws, we) = DHUHR_WINDOW;
        let before = session_at("R1", Day::Monday, "10:50", "11:40");
        let after = session_at("R1", Day::Monday, "12:30", "13:20");
        assert!(!overlaps_restricted_window(&before.slot, ws, we));
        assert!(!overlaps_restricted_window(&after.slot, ws, we));
    }

    #[test]
    fn test_collides_on_room_axis() {
        let a = session_at("R1", Day::Monday, "08:20", "09:10");
        let b = session_at("R2", Day::Monday, "10:00", "10:50");
        let sessions = vec![a.clone(), b.clone()];

        // Moving b into R1 Monday 08:20-09:10 collides with a
        let hit = collides_on_axis(
            Axis::Room,
            "R1",
            Day::Monday,
            to_minutes("08:20").unwrap(),
            to_minutes("09:10").unwrap(),
            &sessions,
            b.id,
        );
        assert_eq!(hit.map(|s| s.id), Some(a.id));
    }

    #[test]
    fn test_back_to_back_is_free() {
        let a = session_at("R1", Day::Monday, "08:20", "09:10");
        let b = session_at("R2", Day::Monday, "10:00", "10:50");
        let sessions = vec![a, b.clone()];

        let hit = collides_on_axis(
            Axis::Room,
            "R1",
            Day::Monday,
            to_minutes("09:10").unwrap(),
            to_minutes("10:00").unwrap(),
            &sessions,
            b.id,
        );
        assert!(hit.is_none());
    }

    #[test]
    fn test_no_self_collision() {
        let a = session_at("R1", Day::Monday, "08:20", "09:10");
        let sessions = vec![a.clone()];
        let hit = collides_on_axis(
            Axis::Room,
            "R1",
            Day::Monday,
            a.slot.start_min,
            a.slot.end_min,
            &sessions,
            a.id,
        );
        assert!(hit.is_none());
    }

    #[test]
    fn test_different_day_is_free() {
        let a = session_at("R1", Day::Monday, "08:20", "09:10");
        let b = session_at("R2", Day::Tuesday, "08:20", "09:10");
        let sessions = vec![a, b.clone()];
        let hit = collides_on_axis(
            Axis::Room,
            "R1",
            Day::Tuesday,
            b.slot.start_min,
            b.slot.end_min,
            &sessions,
            b.id,
        );
        assert!(hit.is_none());
    }

    #[test]
    fn test_collides_on_section_axis() {
        let a = session_at("R1", Day::Monday, "08:20", "09:10"); // serves IF-3A
        let b = session_at("R2", Day::Monday, "13:20", "14:10");
        let sessions = vec![a.clone(), b.clone()];

        // IF-3A is busy 08:20-09:10 regardless of room
        let hit = collides_on_axis(
            Axis::Section,
            "IF-3A",
            Day::Monday,
            to_minutes("08:20").unwrap(),
            to_minutes("09:10").unwrap(),
            &sessions,
            b.id,
        );
        assert_eq!(hit.map(|s| s.id), Some(a.id));
    }

    #[test]
    fn test_warnings_scan() {
        let flagged = session_at("R1", Day::Monday, "11:40", "12:30");
        let clear = session_at("R2", Day::Monday, "08:20", "09:10");
        let sessions = vec![flagged.clone(), clear];

        let (ws, we) = DHUHR_WINDOW;
        let warnings = restricted_window_warnings(&sessions, ws, we);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].id, flagged.id);
    }
}
