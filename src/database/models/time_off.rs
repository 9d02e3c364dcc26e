use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::macros::string_enum;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TimeOffRequest {
    pub id: i64,
    pub employee_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: TimeOffStatus,
    pub leave_type: LeaveType,
    pub reason: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeOffRequestInput {
    pub employee_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub leave_type: LeaveType,
    pub reason: Option<String>,
}

string_enum! {
    #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
    pub enum TimeOffStatus {
        Pending => "pending",
        Approved => "approved",
        Declined => "declined",
    }
}

string_enum! {
    #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
    pub enum LeaveType {
        Paid => "paid",
        Unpaid => "unpaid",
    }
}

impl TimeOffRequest {
    /// Pending and approved requests both block scheduling; declined ones
    /// have no effect on the roster.
    pub fn is_active(&self) -> bool {
        matches!(self.status, TimeOffStatus::Pending | TimeOffStatus::Approved)
    }

    /// Whether the (inclusive) request range covers the given date.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}
