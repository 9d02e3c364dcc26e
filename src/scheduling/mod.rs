//! The shift resolution core: pure, synchronous functions that merge the
//! three independently-edited scheduling sources (recurring patterns,
//! specific shifts, time-off requests) into an authoritative per-day answer.
//!
//! Nothing in this module touches the database; callers fetch the rows once
//! per visible week and invoke these functions per employee and day.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::database::models::TimeOffStatus;

pub mod aggregate;
pub mod calendar;
pub mod resolver;
pub mod validate;

pub use aggregate::{headcount, total_hours, week_total_hours};
pub use calendar::{day_index, week_dates, weekday_from_index};
pub use resolver::resolve;
pub use validate::{validate_recurring_pattern, validate_specific_shift, validate_time_off};

/// A single worked interval within a resolved day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Which source produced the intervals of a resolved day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShiftSource {
    Specific,
    Recurring,
}

/// The authoritative working status of one employee on one calendar day.
///
/// Exactly one variant applies; callers are forced to handle all three
/// rather than probing optional fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DaySchedule {
    TimeOff {
        status: TimeOffStatus,
        reason: Option<String>,
    },
    Shifts {
        intervals: Vec<ShiftInterval>,
        source: ShiftSource,
    },
    Empty,
}

impl DaySchedule {
    pub fn is_working(&self) -> bool {
        matches!(self, DaySchedule::Shifts { .. })
    }
}

/// Errors raised by write-time validation. Conflicts always name the row
/// they collide with so callers can update it explicitly or abort.
#[derive(Debug, Error, PartialEq)]
pub enum ScheduleError {
    #[error("invalid input: {0}")]
    Validation(String),

    #[error("conflicts with existing record {existing_id}: {detail}")]
    Conflict { existing_id: i64, detail: String },
}
