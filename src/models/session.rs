//! Session (course-class meeting) model.
//!
//! A session is one meeting of a course class: a set of sections taught by
//! some lecturers, in a room, at a day/time slot. Sessions are immutable
//! values — edits and moves build a replacement and swap it into the store
//! by identity; nothing is mutated in place.
//!
//! # Identity
//! Each session carries a durable opaque [`SessionId`] assigned when the
//! timetable document is loaded. Identity never depends on room, day, or
//! time, so a session stays addressable across any number of moves.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Durable opaque session identity.
///
/// Assigned at load time, independent of every mutable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Generates a fresh identity.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Teaching day. The institutional week runs Monday through Saturday.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Day {
    /// All teaching days in week order.
    pub const ALL: [Day; 6] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
    ];

    /// Wire name used by the timetable document.
    pub fn name(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
        }
    }

    /// Parses a wire name. Returns `None` for anything unrecognized.
    pub fn from_name(name: &str) -> Option<Self> {
        Day::ALL.iter().copied().find(|d| d.name() == name)
    }
}

/// Morning or evening class track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    Morning,
    Evening,
}

/// Placement of a session on the week grid.
///
/// Times are minutes since midnight; the range is half-open
/// `[start_min, end_min)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Teaching day.
    pub day: Day,
    /// Start, minutes since midnight (inclusive).
    pub start_min: i32,
    /// End, minutes since midnight (exclusive).
    pub end_min: i32,
    /// Index of the starting period in the institutional grid.
    pub period_index: u32,
}

impl TimeSlot {
    /// Creates a slot.
    pub fn new(day: Day, start_min: i32, end_min: i32, period_index: u32) -> Self {
        Self {
            day,
            start_min,
            end_min,
            period_index,
        }
    }

    /// Duration in minutes.
    #[inline]
    pub fn duration_min(&self) -> i32 {
        self.end_min - self.start_min
    }

    /// Half-open overlap with a `[start, end)` minute range on the same day.
    #[inline]
    pub fn overlaps_range(&self, start_min: i32, end_min: i32) -> bool {
        self.start_min < end_min && start_min < self.end_min
    }
}

/// A course-class meeting placed on the timetable.
///
/// A session may serve several class sections at once (joint lectures);
/// on the room axis it still occupies exactly one room lane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Durable identity (see module docs).
    pub id: SessionId,
    /// Course code.
    pub class_id: String,
    /// Course display name.
    pub class_name: String,
    /// Class sections served by this meeting. At least one.
    pub section_labels: Vec<String>,
    /// Owning academic program, used for grouping and coloring.
    pub program: String,
    /// Lecturer names, ordered, possibly empty.
    pub lecturers: Vec<String>,
    /// Room — the axis value when indexing by room.
    pub room: String,
    /// Grid placement.
    pub slot: TimeSlot,
    /// Credit units (sks), a duration proxy in periods.
    pub credit_units: u32,
    /// Whether the course needs a laboratory room.
    pub requires_lab: bool,
    /// Enrolled participant count.
    pub participant_count: u32,
    /// Morning or evening track.
    pub kind: SessionKind,
    /// Minutes of overlap with the institutional prayer window, if any.
    pub prayer_overlap_min: u32,
    /// Whether the session was placed in a lab room for lack of space.
    pub overflowed_to_lab: bool,
}

impl Session {
    /// Creates a session with a fresh identity and the given placement.
    /// Remaining fields start empty/zero and are set via `with_*`.
    pub fn new(class_id: impl Into<String>, room: impl Into<String>, slot: TimeSlot) -> Self {
        Self {
            id: SessionId::new(),
            class_id: class_id.into(),
            class_name: String::new(),
            section_labels: Vec::new(),
            program: String::new(),
            lecturers: Vec::new(),
            room: room.into(),
            slot,
            credit_units: 0,
            requires_lab: false,
            participant_count: 0,
            kind: SessionKind::Morning,
            prayer_overlap_min: 0,
            overflowed_to_lab: false,
        }
    }

    /// Sets the course display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.class_name = name.into();
        self
    }

    /// Adds a section label.
    pub fn with_section(mut self, label: impl Into<String>) -> Self {
        self.section_labels.push(label.into());
        self
    }

    /// Sets the owning program.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Adds a lecturer.
    pub fn with_lecturer(mut self, name: impl Into<String>) -> Self {
        self.lecturers.push(name.into());
        self
    }

    /// Sets credit units.
    pub fn with_credits(mut self, sks: u32) -> Self {
        self.credit_units = sks;
        self
    }

    /// Sets the participant count.
    pub fn with_participants(mut self, count: u32) -> Self {
        self.participant_count = count;
        self
    }

    /// Sets the class track.
    pub fn with_kind(mut self, kind: SessionKind) -> Self {
        self.kind = kind;
        self
    }

    /// Session duration in minutes.
    #[inline]
    pub fn duration_min(&self) -> i32 {
        self.slot.duration_min()
    }

    /// Whether this session serves the given section.
    pub fn serves_section(&self, label: &str) -> bool {
        self.section_labels.iter().any(|s| s == label)
    }
}
