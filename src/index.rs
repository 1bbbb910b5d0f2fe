//! Grid indexing: projecting sessions onto (axis value, day, period) cells.
//!
//! The index is a read-only projection rebuilt from the store on every
//! render. It is deliberately permissive: true overlaps are a modeling
//! error, but the indexer records them in a collision list for
//! the conflict layer to surface instead of failing the projection.
//!
//! A multi-period session occupies its starting period and marks the
//! remaining covered periods as continuation cells: no session reference,
//! but not free either.

use crate::error::EngineResult;
use crate::models::{Day, Session, SessionId, TimeGrid};
use crate::time::span_periods_min;
use std::collections::HashMap;

/// The dimension the grid is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// One lane per distinct room.
    Room,
    /// One lane per distinct class section. A session serving several
    /// sections occupies one lane per section.
    Section,
}

/// Day selection for an index build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    /// Index every teaching day.
    All,
    /// Index a single day.
    Only(Day),
}

impl DayFilter {
    fn matches(&self, day: Day) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Only(d) => *d == day,
        }
    }
}

/// Address of one grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellKey {
    /// Room name or section label, per the build axis.
    pub axis_value: String,
    pub day: Day,
    /// Period index into the [`TimeGrid`].
    pub period: usize,
}

impl CellKey {
    pub fn new(axis_value: impl Into<String>, day: Day, period: usize) -> Self {
        Self {
            axis_value: axis_value.into(),
            day,
            period,
        }
    }
}

/// State of an addressed cell. Unaddressed cells are free.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// First period of a session; carries the occupant.
    Occupied(SessionId),
    /// Covered by a multi-period session that started earlier.
    Continuation,
}

/// A cell claimed by two sessions: a true overlap on one lane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub axis_value: String,
    pub day: Day,
    pub period: usize,
    /// The session already holding the cell.
    pub first: SessionId,
    /// The session whose claim was turned away.
    pub second: SessionId,
}

/// The built projection: cell map plus everything the build discovered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridIndex {
    /// (axis value, day, period) → cell state. First claimant wins.
    pub cells: HashMap<CellKey, CellState>,
    /// True overlaps discovered during the build.
    pub collisions: Vec<Collision>,
    /// Sessions whose start time falls outside every grid period;
    /// excluded from `cells` rather than failing the projection.
    pub skipped: Vec<SessionId>,
}

impl GridIndex {
    /// Projects `sessions` onto the grid for one axis and day selection.
    ///
    /// Linear in sessions × periods spanned. Rebuild after every store
    /// change; nothing here caches across store values.
    pub fn build(
        sessions: &[Session],
        axis: Axis,
        day_filter: DayFilter,
        grid: &TimeGrid,
    ) -> GridIndex {
        let mut index = GridIndex::default();
        // Resolves the holder behind a Continuation cell for collision reports.
        let mut claims: HashMap<CellKey, SessionId> = HashMap::new();

        for session in sessions {
            if !day_filter.matches(session.slot.day) {
                continue;
            }

            let (start_period, span) = match placement(session, grid) {
                Ok(Some(p)) => p,
                Ok(None) | Err(_) => {
                    index.skipped.push(session.id);
                    continue;
                }
            };

            for value in axis_values(session, axis) {
                for offset in 0..span as usize {
                    let period = start_period + offset;
                    if period >= grid.len() {
                        break;
                    }
                    let key = CellKey::new(value, session.slot.day, period);

                    if let Some(&holder) = claims.get(&key) {
                        index.collisions.push(Collision {
                            axis_value: key.axis_value,
                            day: session.slot.day,
                            period,
                            first: holder,
                            second: session.id,
                        });
                        continue;
                    }

                    claims.insert(key.clone(), session.id);
                    let state = if offset == 0 {
                        CellState::Occupied(session.id)
                    } else {
                        CellState::Continuation
                    };
                    index.cells.insert(key, state);
                }
            }
        }

        index
    }

    /// State of a cell; `None` means free.
    pub fn cell(&self, axis_value: &str, day: Day, period: usize) -> Option<CellState> {
        self.cells
            .get(&CellKey::new(axis_value, day, period))
            .copied()
    }
}

/// Start period and span for a session, `Ok(None)` if off-grid.
fn placement(session: &Session, grid: &TimeGrid) -> EngineResult<Option<(usize, u32)>> {
    let Some(start_period) = grid.period_at(session.slot.start_min) else {
        return Ok(None);
    };
    let span = span_periods_min(
        session.slot.start_min,
        session.slot.end_min,
        grid.period_len_min(),
    )?;
    Ok(Some((start_period, span)))
}

fn axis_values(session: &Session, axis: Axis) -> Vec<&str> {
    match axis {
        Axis::Room => vec![session.room.as_str()],
        Axis::Section => session
            .section_labels
            .iter()
            .map(|s| s.as_str())
            .collect(),
    }
}
