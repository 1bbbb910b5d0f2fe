//! View projections: filtered and grouped slices for rendering.
//!
//! All functions are pure and borrow from the session list they are
//! given. They are re-derived on every store change; nothing here may
//! cache references across a store replacement.

use crate::index::Axis;
use crate::models::{Day, Session};
use std::collections::BTreeMap;

/// Distinct axis values observed across the sessions, sorted.
///
/// The axis is derived, never stored: rooms or section labels exist only
/// as long as some session references them.
pub fn unique_axis_values(sessions: &[Session], axis: Axis) -> Vec<String> {
    let mut values: Vec<String> = match axis {
        Axis::Room => sessions.iter().map(|s| s.room.clone()).collect(),
        Axis::Section => sessions
            .iter()
            .flat_map(|s| s.section_labels.iter().cloned())
            .collect(),
    };
    values.sort();
    values.dedup();
    values
}

/// Sessions whose section set contains `label`.
pub fn filter_by_section<'a>(sessions: &'a [Session], label: &str) -> Vec<&'a Session> {
    sessions.iter().filter(|s| s.serves_section(label)).collect()
}

/// Sessions grouped by day, each group sorted by start time.
///
/// Days without sessions are absent from the map.
pub fn group_by_day(sessions: &[Session]) -> BTreeMap<Day, Vec<&Session>> {
    let mut groups: BTreeMap<Day, Vec<&Session>> = BTreeMap::new();
    for session in sessions {
        groups.entry(session.slot.day).or_default().push(session);
    }
    for group in groups.values_mut() {
        group.sort_by_key(|s| s.slot.start_min);
    }
    groups
}

/// Sessions grouped by owning program, sorted by name for stable coloring.
pub fn group_by_program(sessions: &[Session]) -> BTreeMap<String, Vec<&Session>> {
    let mut groups: BTreeMap<String, Vec<&Session>> = BTreeMap::new();
    for session in sessions {
        groups
            .entry(session.program.clone())
            .or_default()
            .push(session);
    }
    groups
}
