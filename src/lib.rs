//! Timetable grid and manual rescheduling engine.
//!
//! Projects a flat list of course-class sessions onto a 2-D grid keyed by
//! an axis (room or class section) × (day, period), and validates and
//! applies drag-initiated moves that relocate a session while preserving
//! its duration. There is no optimizer here: this crate is the
//! manual-editing surface over an in-memory session list.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Session`, `SessionId`, `TimeSlot`,
//!   `TimeGrid`, `Day`
//! - **`time`**: Clock/period geometry (`to_minutes`, `span_periods`,
//!   `shift_end`)
//! - **`store`**: `SessionStore`, the immutable single source of truth
//! - **`index`**: `GridIndex`, the per-render (axis, day, period) projection
//! - **`conflict`**: Restricted-window flags and axis double-booking checks
//! - **`moves`**: `MoveCommand` parsing, move validation/application,
//!   field-edit patches
//! - **`view`**: Pure filtered/grouped projections for rendering
//! - **`document`**: The external JSON timetable document
//!
//! # Data Flow
//!
//! Document → `SessionStore` → `GridIndex` (per render) → view projections.
//! A drop produces a `MoveCommand`; `apply_move` consults the conflict
//! checks and returns a new store on success, or a typed rejection that
//! leaves the old store untouched.

pub mod conflict;
pub mod document;
pub mod error;
pub mod index;
pub mod models;
pub mod moves;
pub mod store;
pub mod time;
pub mod view;

pub use error::{EngineError, EngineResult};
pub use index::{Axis, CellState, DayFilter, GridIndex};
pub use models::{Day, Session, SessionId, SessionKind, TimeGrid, TimeSlot};
pub use moves::{apply_move, apply_patch, MoveCommand, SessionPatch};
pub use store::SessionStore;
