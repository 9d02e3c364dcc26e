use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A weekly-repeating work pattern. `day_of_week` is a 0-6 index into the
/// configured week (0 = week start, see `Config::week_start_day`). The shift
/// applies on dates within `[effective_from, effective_until]`, where a
/// missing `effective_until` means the window is open-ended.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RecurringShift {
    pub id: i64,
    pub employee_id: i64,
    pub day_of_week: i64,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub effective_from: NaiveDate,
    pub effective_until: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringShiftInput {
    pub day_of_week: i64,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub effective_from: NaiveDate,
    pub effective_until: Option<NaiveDate>,
}

impl RecurringShift {
    /// Whether this pattern row is in force on the given date. Both window
    /// bounds are inclusive.
    pub fn applies_on(&self, date: NaiveDate) -> bool {
        self.effective_from <= date && self.effective_until.is_none_or(|until| date <= until)
    }
}
