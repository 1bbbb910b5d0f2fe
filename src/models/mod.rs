//! Timetable domain models.
//!
//! Core data types for the manual-editing engine: sessions (course-class
//! meetings), their placement on the week grid, and the institutional
//! period table.
//!
//! # Domain Mapping
//!
//! | gridplan | Timetable term |
//! |----------|----------------|
//! | Session | One course-class meeting |
//! | TimeSlot | (day, start, end, period) placement |
//! | TimeGrid | Ordered period table, 07:30-20:50 |
//! | Axis | Room lanes or class-section lanes |

mod grid;
mod session;

pub use grid::{Period, TimeGrid, PERIOD_LEN_MIN};
pub use session::{Day, Session, SessionId, SessionKind, TimeSlot};
