//! Timetable document: the external JSON interface.
//!
//! The document is produced by an external optimizer run and consumed
//! back by collaborators; this engine reads the `schedule` array and
//! carries the run metrics (`fitness`, violation counts, `iterations`)
//! opaquely — it never interprets them.
//!
//! Wire field names are fixed by the document format and mapped here with
//! serde renames. Clock times travel as `HH:MM` strings and are parsed
//! exactly once, at [`TimetableDocument::into_store`]; corrupt time data
//! aborts the whole load without producing a partial store. Each loaded
//! session receives a fresh durable [`SessionId`] — identity never
//! round-trips through the document.

use crate::error::{EngineError, EngineResult};
use crate::models::{Day, Session, SessionId, SessionKind, TimeSlot};
use crate::store::SessionStore;
use crate::time::{format_minutes, to_minutes};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Top-level timetable document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimetableDocument {
    /// Optimizer objective value; opaque to this engine.
    pub fitness: f64,
    #[serde(rename = "hardViolations")]
    pub hard_violations: u32,
    #[serde(rename = "softViolations")]
    pub soft_violations: u32,
    pub iterations: u64,
    pub schedule: Vec<SessionRecord>,
}

/// One session in wire form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(rename = "classId")]
    pub class_id: String,
    #[serde(rename = "className")]
    pub class_name: String,
    /// Section labels, comma-joined.
    #[serde(rename = "class")]
    pub class: String,
    pub prodi: String,
    pub lecturers: Vec<String>,
    pub room: String,
    #[serde(rename = "timeSlot")]
    pub time_slot: TimeSlotRecord,
    pub sks: u32,
    #[serde(rename = "needsLab")]
    pub needs_lab: bool,
    pub participants: u32,
    #[serde(rename = "classType")]
    pub class_type: SessionKind,
    #[serde(rename = "prayerTimeAdded")]
    pub prayer_time_added: u32,
    #[serde(rename = "isOverflowToLab")]
    pub is_overflow_to_lab: bool,
}

/// Wire form of a time slot. Times are `HH:MM` strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlotRecord {
    pub period: u32,
    pub day: Day,
    #[serde(rename = "startTime")]
    pub start_time: String,
    #[serde(rename = "endTime")]
    pub end_time: String,
}

impl TimetableDocument {
    /// Creates a document carrying run metrics and an empty schedule.
    pub fn new(fitness: f64, hard_violations: u32, soft_violations: u32, iterations: u64) -> Self {
        Self {
            fitness,
            hard_violations,
            soft_violations,
            iterations,
            schedule: Vec::new(),
        }
    }

    /// Fills the schedule from a store.
    pub fn with_store(mut self, store: &SessionStore) -> Self {
        self.schedule = store.all().iter().map(SessionRecord::from_session).collect();
        self
    }

    /// Decodes a document from JSON. Structural problems (missing fields,
    /// unknown day or class-type names) fail here.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Encodes the document to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Builds a session store from the schedule, assigning each session a
    /// fresh durable identity.
    ///
    /// Fails on the first corrupt record (`MalformedTime`,
    /// `NonPositiveDuration`) without producing a partial store.
    pub fn into_store(&self) -> EngineResult<SessionStore> {
        let sessions = self
            .schedule
            .iter()
            .map(SessionRecord::to_session)
            .collect::<EngineResult<Vec<_>>>()?;
        debug!(sessions = sessions.len(), "timetable document loaded");
        Ok(SessionStore::from_sessions(sessions))
    }
}

impl SessionRecord {
    /// Converts a wire record into a domain session with a fresh identity.
    pub fn to_session(&self) -> EngineResult<Session> {
        let start_min = to_minutes(&self.time_slot.start_time)?;
        let end_min = to_minutes(&self.time_slot.end_time)?;
        if end_min <= start_min {
            return Err(EngineError::NonPositiveDuration { start_min, end_min });
        }

        let section_labels: Vec<String> = self
            .class
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Session {
            id: SessionId::new(),
            class_id: self.class_id.clone(),
            class_name: self.class_name.clone(),
            section_labels,
            program: self.prodi.clone(),
            lecturers: self.lecturers.clone(),
            room: self.room.clone(),
            slot: TimeSlot::new(self.time_slot.day, start_min, end_min, self.time_slot.period),
            credit_units: self.sks,
            requires_lab: self.needs_lab,
            participant_count: self.participants,
            kind: self.class_type,
            prayer_overlap_min: self.prayer_time_added,
            overflowed_to_lab: self.is_overflow_to_lab,
        })
    }

    /// Renders a domain session back to wire form.
    pub fn from_session(session: &Session) -> SessionRecord {
        SessionRecord {
            class_id: session.class_id.clone(),
            class_name: session.class_name.clone(),
            class: session.section_labels.join(","),
            prodi: session.program.clone(),
            lecturers: session.lecturers.clone(),
            room: session.room.clone(),
            time_slot: TimeSlotRecord {
                period: session.slot.period_index,
                day: session.slot.day,
                start_time: format_minutes(session.slot.start_min),
                end_time: format_minutes(session.slot.end_min),
            },
            sks: session.credit_units,
            needs_lab: session.requires_lab,
            participants: session.participant_count,
            class_type: session.kind,
            prayer_time_added: session.prayer_overlap_min,
            is_overflow_to_lab: session.overflowed_to_lab,
        }
    }
}
