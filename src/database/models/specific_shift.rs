use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A concrete, date-bound shift. Its presence suppresses the recurring
/// pattern for that employee on that calendar date.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SpecificShift {
    pub id: i64,
    pub employee_id: i64,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub location_id: Option<i64>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecificShiftInput {
    pub employee_id: i64,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub location_id: Option<i64>,
}

impl SpecificShift {
    pub fn date(&self) -> NaiveDate {
        self.start_time.date()
    }
}
