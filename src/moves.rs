//! Move validation and application, plus the direct field-edit path.
//!
//! A drag gesture only touches the store at drop time: the drop produces a
//! [`MoveCommand`], [`apply_move`] validates it, and on success returns a
//! new store value. A rejected move returns the typed reason and leaves
//! the input store untouched — the caller reverts the interaction
//! visually and keeps rendering from the old store.
//!
//! Field edits ([`SessionPatch`]) go through the same store-replace path
//! but bypass collision checks; the UI layer is trusted for domain
//! validity there, except that an inverted time range is always rejected.

use crate::conflict::collides_on_axis;
use crate::error::{EngineError, EngineResult};
use crate::index::Axis;
use crate::models::{Day, Session, SessionId, TimeGrid, TimeSlot};
use crate::store::SessionStore;
use crate::time::{shift_end, to_minutes};
use tracing::debug;

/// A validated-on-parse relocation request.
///
/// Structured once at the boundary; no string encodings travel past here.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveCommand {
    /// Session being moved.
    pub session_id: SessionId,
    /// Which axis the view is keyed on; decides which field the move rewrites.
    pub axis: Axis,
    /// Destination room or section label.
    pub axis_value: String,
    /// Destination day.
    pub day: Day,
    /// Destination start, minutes since midnight.
    pub start_min: i32,
}

impl MoveCommand {
    /// Parses a drop-target encoding of the form `"axisValue|HH:MM"`.
    ///
    /// Malformed encodings are [`EngineError::InvalidTarget`], never a panic.
    pub fn parse_target(
        session_id: SessionId,
        axis: Axis,
        day: Day,
        target: &str,
    ) -> EngineResult<MoveCommand> {
        let (axis_value, clock) = target
            .split_once('|')
            .ok_or_else(|| EngineError::InvalidTarget(target.to_string()))?;
        if axis_value.is_empty() {
            return Err(EngineError::InvalidTarget(target.to_string()));
        }
        let start_min =
            to_minutes(clock).map_err(|_| EngineError::InvalidTarget(target.to_string()))?;

        Ok(MoveCommand {
            session_id,
            axis,
            axis_value: axis_value.to_string(),
            day,
            start_min,
        })
    }
}

/// Validates a move and applies it to the store.
///
/// Steps: identity lookup, destination period check (must exist and not be
/// a break), duration-preserving end computation, axis collision check,
/// then `replace`. Any rejection returns the input store unread — the
/// caller's store value is still valid.
pub fn apply_move(
    store: &SessionStore,
    grid: &TimeGrid,
    cmd: &MoveCommand,
) -> EngineResult<SessionStore> {
    let session = store
        .by_id(cmd.session_id)
        .ok_or(EngineError::NotFound(cmd.session_id))?;

    let period_index = grid.period_starting_at(cmd.start_min).ok_or_else(|| {
        EngineError::InvalidTarget(format!(
            "no period starts at {}",
            crate::time::format_minutes(cmd.start_min)
        ))
    })?;
    if grid.periods()[period_index].breaktime {
        return Err(EngineError::InvalidTarget(format!(
            "{} is a break period",
            crate::time::format_minutes(cmd.start_min)
        )));
    }

    // Duration is invariant under every move.
    let end_min = shift_end(cmd.start_min, session.duration_min());

    if let Some(other) = collides_on_axis(
        cmd.axis,
        &cmd.axis_value,
        cmd.day,
        cmd.start_min,
        end_min,
        store.all(),
        cmd.session_id,
    ) {
        debug!(session = %cmd.session_id, with = %other.id, "move rejected: axis conflict");
        return Err(EngineError::AxisConflict { with: other.id });
    }

    let mut moved = session.clone();
    moved.slot = TimeSlot::new(cmd.day, cmd.start_min, end_min, period_index as u32);
    match cmd.axis {
        Axis::Room => moved.room = cmd.axis_value.clone(),
        // On the section axis the destination lane is a single section.
        Axis::Section => moved.section_labels = vec![cmd.axis_value.clone()],
    }

    debug!(session = %cmd.session_id, day = ?cmd.day, start_min = cmd.start_min, "move applied");
    store.replace(cmd.session_id, moved)
}

/// A partial field edit, applied by identity without move validation.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionPatch {
    pub room: Option<String>,
    pub lecturers: Option<Vec<String>>,
    pub section_labels: Option<Vec<String>>,
    pub slot: Option<TimeSlot>,
    pub participant_count: Option<u32>,
}

/// Applies a field patch through the store-replace path.
///
/// Trusted except for one check: a patched slot with `end <= start` is
/// rejected as [`EngineError::NonPositiveDuration`].
pub fn apply_patch(
    store: &SessionStore,
    id: SessionId,
    patch: &SessionPatch,
) -> EngineResult<SessionStore> {
    let session = store.by_id(id).ok_or(EngineError::NotFound(id))?;

    if let Some(slot) = &patch.slot {
        if slot.end_min <= slot.start_min {
            return Err(EngineError::NonPositiveDuration {
                start_min: slot.start_min,
                end_min: slot.end_min,
            });
        }
    }

    let mut patched = session.clone();
    if let Some(room) = &patch.room {
        patched.room = room.clone();
    }
    if let Some(lecturers) = &patch.lecturers {
        patched.lecturers = lecturers.clone();
    }
    if let Some(labels) = &patch.section_labels {
        patched.section_labels = labels.clone();
    }
    if let Some(slot) = &patch.slot {
        patched.slot = *slot;
    }
    if let Some(count) = patch.participant_count {
        patched.participant_count = count;
    }

    store.replace(id, patched)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_at(room: &str, day: Day, start: &str, end: &str) -> Session {
        let start_min = to_minutes(start).unwrap();
        let slot = TimeSlot::new(day, start_min, to_minutes(end).unwrap(), 0);
        Session::new("IF-301", room, slot).with_section("IF-3A")
    }

    fn two_session_store() -> (SessionStore, SessionId, SessionId) {
        let a = session_at("R1", Day::Monday, "08:20", "09:10");
        let b = session_at("R2", Day::Monday, "10:00", "10:50");
        let (ida, idb) = (a.id, b.id);
        (SessionStore::new().add(a).add(b), ida, idb)
    }

    fn move_cmd(id: SessionId, room: &str, day: Day, start: &str) -> MoveCommand {
        MoveCommand {
            session_id: id,
            axis: Axis::Room,
            axis_value: room.into(),
            day,
            start_min: to_minutes(start).unwrap(),
        }
    }

    #[test]
    fn test_parse_target() {
        let id = SessionId::new();
        let cmd = MoveCommand::parse_target(id, Axis::Room, Day::Monday, "R101|08:20").unwrap();
        assert_eq!(cmd.axis_value, "R101");
        assert_eq!(cmd.start_min, 500);
    }

    #[test]
    fn test_parse_target_malformed() {
        let id = SessionId::new();
        for bad in ["R101", "R101|", "R101|8h20", "|08:20", ""] {
            assert!(
                matches!(
                    MoveCommand::parse_target(id, Axis::Room, Day::Monday, bad),
                    Err(EngineError::InvalidTarget(_))
                ),
                "expected InvalidTarget for {bad:?}"
            );
        }
    }

    #[test]
    fn test_move_into_occupied_lane_rejected() {
        let grid = TimeGrid::institutional();
        let (store, ida, idb) = two_session_store();

        let err = apply_move(&store, &grid, &move_cmd(idb, "R1", Day::Monday, "08:20"))
            .unwrap_err();
        assert_eq!(err, EngineError::AxisConflict { with: ida });
        // Store untouched
        assert_eq!(store.by_id(idb).unwrap().room, "R2");
    }

    #[test]
    fn test_back_to_back_move_succeeds() {
        let grid = TimeGrid::institutional();
        let (store, _, idb) = two_session_store();

        let store2 = apply_move(&store, &grid, &move_cmd(idb, "R1", Day::Monday, "09:10"))
            .unwrap();
        let moved = store2.by_id(idb).unwrap();
        assert_eq!(moved.room, "R1");
        assert_eq!(moved.slot.start_min, to_minutes("09:10").unwrap());
        assert_eq!(moved.slot.end_min, to_minutes("10:00").unwrap());
    }

    #[test]
    fn test_move_preserves_duration_and_identity() {
        let grid = TimeGrid::institutional();
        let (store, _, idb) = two_session_store();
        let before = store.by_id(idb).unwrap().duration_min();

        let store2 =
            apply_move(&store, &grid, &move_cmd(idb, "R3", Day::Thursday, "13:20")).unwrap();
        let moved = store2.by_id(idb).unwrap();
        assert_eq!(moved.duration_min(), before);
        assert_eq!(moved.id, idb);
        assert_eq!(moved.slot.day, Day::Thursday);
    }

    #[test]
    fn test_move_updates_period_index() {
        let grid = TimeGrid::institutional();
        let (store, _, idb) = two_session_store();

        let store2 = apply_move(&store, &grid, &move_cmd(idb, "R2", Day::Monday, "10:00"))
            .unwrap();
        assert_eq!(store2.by_id(idb).unwrap().slot.period_index, 3);
    }

    #[test]
    fn test_move_to_break_period_rejected() {
        let grid = TimeGrid::institutional();
        let (store, _, idb) = two_session_store();

        let err = apply_move(&store, &grid, &move_cmd(idb, "R1", Day::Monday, "17:30"))
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidTarget(_)));
    }

    #[test]
    fn test_move_off_grid_rejected() {
        let grid = TimeGrid::institutional();
        let (store, _, idb) = two_session_store();

        // 10:05 is inside a period but no period starts there
        let err = apply_move(&store, &grid, &move_cmd(idb, "R1", Day::Monday, "10:05"))
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidTarget(_)));
    }

    #[test]
    fn test_move_unknown_session() {
        let grid = TimeGrid::institutional();
        let (store, ..) = two_session_store();
        let ghost = SessionId::new();

        let err =
            apply_move(&store, &grid, &move_cmd(ghost, "R1", Day::Monday, "08:20")).unwrap_err();
        assert_eq!(err, EngineError::NotFound(ghost));
    }

    #[test]
    fn test_section_axis_move_rewrites_sections() {
        let grid = TimeGrid::institutional();
        let s = session_at("R1", Day::Monday, "08:20", "09:10");
        let id = s.id;
        let store = SessionStore::new().add(s);

        let cmd = MoveCommand {
            session_id: id,
            axis: Axis::Section,
            axis_value: "IF-3B".into(),
            day: Day::Monday,
            start_min: to_minutes("10:00").unwrap(),
        };
        let store2 = apply_move(&store, &grid, &cmd).unwrap();
        let moved = store2.by_id(id).unwrap();
        assert_eq!(moved.section_labels, vec!["IF-3B"]);
        assert_eq!(moved.room, "R1"); // room untouched on section axis
    }

    #[test]
    fn test_restricted_window_is_not_a_move_blocker() {
        // 11:40-12:30 overlaps the prayer window exactly; the window
        // flags the session but the move must still be accepted.
        let grid = TimeGrid::institutional();
        let (store, _, idb) = two_session_store();

        let store2 =
            apply_move(&store, &grid, &move_cmd(idb, "R2", Day::Monday, "11:40")).unwrap();
        let moved = store2.by_id(idb).unwrap();
        let (ws, we) = crate::conflict::DHUHR_WINDOW;
        assert!(crate::conflict::overlaps_restricted_window(&moved.slot, ws, we));
    }

    #[test]
    fn test_patch_fields() {
        let (store, ida, _) = two_session_store();
        let patch = SessionPatch {
            room: Some("Lab-2".into()),
            lecturers: Some(vec!["Dr. Sari".into(), "Dr. Budi".into()]),
            ..Default::default()
        };

        let store2 = apply_patch(&store, ida, &patch).unwrap();
        let edited = store2.by_id(ida).unwrap();
        assert_eq!(edited.room, "Lab-2");
        assert_eq!(edited.lecturers.len(), 2);
        // Unpatched fields survive
        assert_eq!(edited.slot, store.by_id(ida).unwrap().slot);
    }

    #[test]
    fn test_patch_rejects_inverted_slot() {
        let (store, ida, _) = two_session_store();
        let patch = SessionPatch {
            slot: Some(TimeSlot::new(Day::Monday, 600, 600, 3)),
            ..Default::default()
        };
        assert!(matches!(
            apply_patch(&store, ida, &patch),
            Err(EngineError::NonPositiveDuration { .. })
        ));
    }

    #[test]
    fn test_patch_unknown_session() {
        let (store, ..) = two_session_store();
        assert!(matches!(
            apply_patch(&store, SessionId::new(), &SessionPatch::default()),
            Err(EngineError::NotFound(_))
        ));
    }
}
