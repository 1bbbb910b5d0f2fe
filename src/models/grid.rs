//! Period table: the grid's time dimension.
//!
//! The institutional day is an ordered sequence of fixed-length periods.
//! Some periods are designated non-teaching breaks; those are rendered on
//! the grid but are never valid move targets.
//!
//! # Default Grid
//! 07:30-20:50 in sixteen 50-minute periods, with a non-teaching break at
//! 17:30-18:20 (evening prayer, morning/evening track boundary). The
//! midday prayer window 11:40-12:30 stays a teaching period: sessions
//! overlapping it are flagged by the conflict layer but remain
//! schedulable there.

use serde::{Deserialize, Serialize};

/// Length of one teaching period in minutes.
pub const PERIOD_LEN_MIN: i32 = 50;

/// One fixed period of the institutional day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// Display label ("1", "2", ... or "Break").
    pub label: String,
    /// Start, minutes since midnight (inclusive).
    pub start_min: i32,
    /// End, minutes since midnight (exclusive).
    pub end_min: i32,
    /// Non-teaching break; not a selectable move target.
    pub breaktime: bool,
}

impl Period {
    /// Whether a clock minute falls inside this period.
    #[inline]
    pub fn contains(&self, minute: i32) -> bool {
        minute >= self.start_min && minute < self.end_min
    }
}

/// The ordered period table covering the institutional day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeGrid {
    periods: Vec<Period>,
    period_len_min: i32,
}

impl TimeGrid {
    /// Builds a grid from an explicit period list.
    pub fn new(periods: Vec<Period>, period_len_min: i32) -> Self {
        Self {
            periods,
            period_len_min,
        }
    }

    /// The default institutional grid (see module docs).
    pub fn institutional() -> Self {
        // 07:30 start, uniform 50-minute periods
        let breaks = [12usize]; // 17:30-18:20
        let mut periods = Vec::with_capacity(16);
        let mut start = 7 * 60 + 30;
        let mut teaching_no = 0;

        for i in 0..16 {
            let breaktime = breaks.contains(&i);
            let label = if breaktime {
                "Break".to_string()
            } else {
                teaching_no += 1;
                teaching_no.to_string()
            };
            periods.push(Period {
                label,
                start_min: start,
                end_min: start + PERIOD_LEN_MIN,
                breaktime,
            });
            start += PERIOD_LEN_MIN;
        }

        Self::new(periods, PERIOD_LEN_MIN)
    }

    /// All periods in day order.
    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    /// Period length in minutes.
    #[inline]
    pub fn period_len_min(&self) -> i32 {
        self.period_len_min
    }

    /// Number of periods.
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Whether the grid has no periods.
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Index of the period containing a clock minute, if any.
    pub fn period_at(&self, minute: i32) -> Option<usize> {
        self.periods.iter().position(|p| p.contains(minute))
    }

    /// Index of the period starting exactly at a clock minute, if any.
    pub fn period_starting_at(&self, minute: i32) -> Option<usize> {
        self.periods.iter().position(|p| p.start_min == minute)
    }

    /// Whether a clock minute falls inside a non-teaching break.
    pub fn is_break(&self, minute: i32) -> bool {
        self.period_at(minute)
            .map(|i| self.periods[i].breaktime)
            .unwrap_or(false)
    }
}

impl Default for TimeGrid {
    fn default() -> Self {
        Self::institutional()
    }
}
