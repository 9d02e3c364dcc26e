//! Write-time conflict checks. The validators never repair a bad write;
//! they reject it and name the colliding row so the editor can either
//! target that row explicitly or abort.

use chrono::NaiveDate;

use crate::database::models::{RecurringShiftInput, SpecificShift, TimeOffRequest};
use crate::scheduling::{ScheduleError, ShiftInterval};

/// Validate a candidate specific shift against the employee's existing rows
/// for the same date.
///
/// `shift_id` identifies the row being edited, if any. An edit may freely
/// overlap the row it replaces; everything else on the same day that the
/// proposed interval would overlap is a conflict. Non-overlapping rows on
/// the same date are legal split shifts, not conflicts.
pub fn validate_specific_shift(
    employee_id: i64,
    proposed: &ShiftInterval,
    shift_id: Option<i64>,
    existing: &[SpecificShift],
) -> Result<(), ScheduleError> {
    if proposed.end <= proposed.start {
        return Err(ScheduleError::Validation(
            "shift end must be after its start".to_string(),
        ));
    }
    if proposed.start.date() != proposed.end.date() {
        return Err(ScheduleError::Validation(
            "a specific shift must start and end on the same calendar date".to_string(),
        ));
    }

    let date = proposed.start.date();
    for shift in existing {
        if shift.employee_id != employee_id || shift.date() != date {
            continue;
        }
        if shift_id == Some(shift.id) {
            continue;
        }
        if proposed.start < shift.end_time && shift.start_time < proposed.end {
            return Err(ScheduleError::Conflict {
                existing_id: shift.id,
                detail: format!(
                    "proposed shift {} - {} overlaps shift {} - {}",
                    proposed.start, proposed.end, shift.start_time, shift.end_time
                ),
            });
        }
    }

    Ok(())
}

/// Validate a candidate time-off range against the employee's existing
/// requests. Overlap with another active (pending or approved) request is a
/// conflict; declined requests are dead and never block.
pub fn validate_time_off(
    employee_id: i64,
    start_date: NaiveDate,
    end_date: NaiveDate,
    request_id: Option<i64>,
    existing: &[TimeOffRequest],
) -> Result<(), ScheduleError> {
    if end_date < start_date {
        return Err(ScheduleError::Validation(
            "time-off end date must not precede its start date".to_string(),
        ));
    }

    for request in existing {
        if request.employee_id != employee_id || !request.is_active() {
            continue;
        }
        if request_id == Some(request.id) {
            continue;
        }
        if start_date <= request.end_date && request.start_date <= end_date {
            return Err(ScheduleError::Conflict {
                existing_id: request.id,
                detail: format!(
                    "requested {} - {} overlaps {} request {} - {}",
                    start_date, end_date, request.status, request.start_date, request.end_date
                ),
            });
        }
    }

    Ok(())
}

/// Per-row invariant checks on a replacement weekly pattern, run before the
/// atomic delete-and-insert is attempted.
pub fn validate_recurring_pattern(pattern: &[RecurringShiftInput]) -> Result<(), ScheduleError> {
    for (index, row) in pattern.iter().enumerate() {
        if !(0..=6).contains(&row.day_of_week) {
            return Err(ScheduleError::Validation(format!(
                "pattern row {}: day_of_week {} is outside 0-6",
                index, row.day_of_week
            )));
        }
        if row.end_time <= row.start_time {
            return Err(ScheduleError::Validation(format!(
                "pattern row {}: end time must be after start time",
                index
            )));
        }
        if let Some(until) = row.effective_until {
            if until < row.effective_from {
                return Err(ScheduleError::Validation(format!(
                    "pattern row {}: effective window ends before it begins",
                    index
                )));
            }
        }
    }

    Ok(())
}
