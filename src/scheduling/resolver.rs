//! The precedence merge at the heart of staff scheduling.
//!
//! Evaluation order is strict and first-match-wins:
//! 1. an active (pending or approved) time-off request covering the date,
//! 2. specific shifts dated that day, which override the weekly pattern,
//! 3. recurring shifts whose day-of-week and effective window match,
//! 4. otherwise the day is empty.

use chrono::{NaiveDate, Weekday};

use crate::database::models::{RecurringShift, SpecificShift, TimeOffRequest, TimeOffStatus};
use crate::scheduling::calendar::day_index;
use crate::scheduling::{DaySchedule, ShiftInterval, ShiftSource};

/// Compute the working status of `employee_id` on `date` from the three
/// already-fetched sources. Pure and deterministic; rows belonging to other
/// employees are ignored, so week-scoped multi-employee fetches can be
/// passed in unsliced.
pub fn resolve(
    employee_id: i64,
    date: NaiveDate,
    recurring: &[RecurringShift],
    specific: &[SpecificShift],
    time_off: &[TimeOffRequest],
    week_start: Weekday,
) -> DaySchedule {
    // Time off always wins: an employee cannot be rostered during
    // pending-or-approved leave, whatever shift rows exist for the day.
    if let Some(request) = blocking_time_off(employee_id, date, time_off) {
        return DaySchedule::TimeOff {
            status: request.status,
            reason: request.reason.clone(),
        };
    }

    let mut overrides: Vec<ShiftInterval> = specific
        .iter()
        .filter(|shift| shift.employee_id == employee_id && shift.date() == date)
        .map(|shift| ShiftInterval {
            start: shift.start_time,
            end: shift.end_time,
        })
        .collect();

    if !overrides.is_empty() {
        // Split shifts are intentional: keep every row, ordered by start.
        overrides.sort_by_key(|interval| interval.start);
        return DaySchedule::Shifts {
            intervals: overrides,
            source: ShiftSource::Specific,
        };
    }

    let slot = day_index(date, week_start) as i64;
    let mut pattern: Vec<ShiftInterval> = recurring
        .iter()
        .filter(|shift| {
            shift.employee_id == employee_id
                && shift.day_of_week == slot
                && shift.applies_on(date)
        })
        .map(|shift| ShiftInterval {
            start: date.and_time(shift.start_time),
            end: date.and_time(shift.end_time),
        })
        .collect();

    if !pattern.is_empty() {
        pattern.sort_by_key(|interval| interval.start);
        return DaySchedule::Shifts {
            intervals: pattern,
            source: ShiftSource::Recurring,
        };
    }

    DaySchedule::Empty
}

/// The active request that blocks `date`, if any. When several overlap the
/// same day an approved request beats a pending one (an approved block is
/// authoritative), with submission order breaking remaining ties so repeated
/// calls pick the same row.
fn blocking_time_off<'a>(
    employee_id: i64,
    date: NaiveDate,
    time_off: &'a [TimeOffRequest],
) -> Option<&'a TimeOffRequest> {
    time_off
        .iter()
        .filter(|req| req.employee_id == employee_id && req.is_active() && req.covers(date))
        .min_by_key(|req| {
            let rank = match req.status {
                TimeOffStatus::Approved => 0,
                TimeOffStatus::Pending => 1,
                TimeOffStatus::Declined => 2,
            };
            (rank, req.created_at, req.id)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, NaiveTime};
    use pretty_assertions::assert_eq;

    use crate::database::models::LeaveType;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn dt(date: NaiveDate, h: u32, m: u32) -> NaiveDateTime {
        date.and_time(t(h, m))
    }

    fn recurring(
        id: i64,
        employee_id: i64,
        day_of_week: i64,
        start: NaiveTime,
        end: NaiveTime,
        from: NaiveDate,
        until: Option<NaiveDate>,
    ) -> RecurringShift {
        RecurringShift {
            id,
            employee_id,
            day_of_week,
            start_time: start,
            end_time: end,
            effective_from: from,
            effective_until: until,
            created_at: dt(from, 0, 0),
            updated_at: dt(from, 0, 0),
        }
    }

    fn specific(id: i64, employee_id: i64, start: NaiveDateTime, end: NaiveDateTime) -> SpecificShift {
        SpecificShift {
            id,
            employee_id,
            start_time: start,
            end_time: end,
            location_id: None,
            created_at: start,
            updated_at: start,
        }
    }

    fn time_off(
        id: i64,
        employee_id: i64,
        from: NaiveDate,
        to: NaiveDate,
        status: TimeOffStatus,
    ) -> TimeOffRequest {
        TimeOffRequest {
            id,
            employee_id,
            start_date: from,
            end_date: to,
            status,
            leave_type: LeaveType::Paid,
            reason: Some("family trip".to_string()),
            created_at: dt(from, 0, 0) - chrono::Duration::days(30) + chrono::Duration::hours(id as i64),
            updated_at: dt(from, 0, 0),
        }
    }

    // 2024-03-04 is a Monday; day 0 in a Monday-started week.
    const MONDAY: (i32, u32, u32) = (2024, 3, 4);

    fn monday() -> NaiveDate {
        d(MONDAY.0, MONDAY.1, MONDAY.2)
    }

    #[test]
    fn recurring_pattern_fills_an_ordinary_day() {
        let rec = vec![recurring(1, 7, 0, t(10, 0), t(19, 0), d(2024, 1, 1), None)];
        let result = resolve(7, monday(), &rec, &[], &[], Weekday::Mon);
        assert_eq!(
            result,
            DaySchedule::Shifts {
                intervals: vec![ShiftInterval {
                    start: dt(monday(), 10, 0),
                    end: dt(monday(), 19, 0),
                }],
                source: ShiftSource::Recurring,
            }
        );
    }

    #[test]
    fn specific_shift_suppresses_the_recurring_pattern() {
        let rec = vec![recurring(1, 7, 0, t(10, 0), t(19, 0), d(2024, 1, 1), None)];
        let spec = vec![specific(10, 7, dt(monday(), 12, 0), dt(monday(), 18, 0))];
        let result = resolve(7, monday(), &rec, &spec, &[], Weekday::Mon);
        assert_eq!(
            result,
            DaySchedule::Shifts {
                intervals: vec![ShiftInterval {
                    start: dt(monday(), 12, 0),
                    end: dt(monday(), 18, 0),
                }],
                source: ShiftSource::Specific,
            }
        );
    }

    #[test]
    fn approved_time_off_beats_every_shift_source() {
        let rec = vec![recurring(1, 7, 0, t(10, 0), t(19, 0), d(2024, 1, 1), None)];
        let spec = vec![specific(10, 7, dt(monday(), 12, 0), dt(monday(), 18, 0))];
        let off = vec![time_off(3, 7, d(2024, 3, 1), d(2024, 3, 8), TimeOffStatus::Approved)];
        let result = resolve(7, monday(), &rec, &spec, &off, Weekday::Mon);
        assert_eq!(
            result,
            DaySchedule::TimeOff {
                status: TimeOffStatus::Approved,
                reason: Some("family trip".to_string()),
            }
        );
    }

    #[test]
    fn pending_time_off_also_blocks_but_declined_does_not() {
        let off = vec![time_off(3, 7, monday(), monday(), TimeOffStatus::Pending)];
        let result = resolve(7, monday(), &[], &[], &off, Weekday::Mon);
        assert!(matches!(
            result,
            DaySchedule::TimeOff {
                status: TimeOffStatus::Pending,
                ..
            }
        ));

        let declined = vec![time_off(4, 7, monday(), monday(), TimeOffStatus::Declined)];
        let result = resolve(7, monday(), &[], &[], &declined, Weekday::Mon);
        assert_eq!(result, DaySchedule::Empty);
    }

    #[test]
    fn approved_request_is_preferred_over_an_overlapping_pending_one() {
        let off = vec![
            time_off(5, 7, monday(), monday(), TimeOffStatus::Pending),
            time_off(6, 7, monday(), monday(), TimeOffStatus::Approved),
        ];
        let result = resolve(7, monday(), &[], &[], &off, Weekday::Mon);
        assert!(matches!(
            result,
            DaySchedule::TimeOff {
                status: TimeOffStatus::Approved,
                ..
            }
        ));
    }

    #[test]
    fn effective_window_is_inclusive_at_both_ends() {
        let rec = vec![recurring(
            1,
            7,
            0,
            t(9, 0),
            t(17, 0),
            d(2024, 1, 1),
            Some(monday()),
        )];

        // date == effective_until: still in force.
        assert!(resolve(7, monday(), &rec, &[], &[], Weekday::Mon).is_working());

        // The following Monday is outside the window.
        let next_monday = d(2024, 3, 11);
        assert_eq!(
            resolve(7, next_monday, &rec, &[], &[], Weekday::Mon),
            DaySchedule::Empty
        );

        // Before effective_from, nothing applies either.
        let earlier_monday = d(2023, 12, 25);
        assert_eq!(
            resolve(7, earlier_monday, &rec, &[], &[], Weekday::Mon),
            DaySchedule::Empty
        );
    }

    #[test]
    fn split_shifts_return_every_interval_in_start_order() {
        let spec = vec![
            specific(11, 7, dt(monday(), 14, 0), dt(monday(), 18, 0)),
            specific(10, 7, dt(monday(), 9, 0), dt(monday(), 13, 0)),
        ];
        let result = resolve(7, monday(), &[], &spec, &[], Weekday::Mon);
        let DaySchedule::Shifts { intervals, source } = result else {
            panic!("expected shifts");
        };
        assert_eq!(source, ShiftSource::Specific);
        assert_eq!(intervals.len(), 2);
        assert_eq!(intervals[0].start, dt(monday(), 9, 0));
        assert_eq!(intervals[1].start, dt(monday(), 14, 0));
    }

    #[test]
    fn overlapping_recurring_windows_union_as_split_shifts() {
        let rec = vec![
            recurring(1, 7, 0, t(16, 0), t(20, 0), d(2024, 1, 1), None),
            recurring(2, 7, 0, t(8, 0), t(12, 0), d(2023, 6, 1), None),
        ];
        let result = resolve(7, monday(), &rec, &[], &[], Weekday::Mon);
        let DaySchedule::Shifts { intervals, source } = result else {
            panic!("expected shifts");
        };
        assert_eq!(source, ShiftSource::Recurring);
        assert_eq!(intervals.len(), 2);
        assert_eq!(intervals[0].start, dt(monday(), 8, 0));
    }

    #[test]
    fn other_employees_rows_are_ignored() {
        let rec = vec![recurring(1, 99, 0, t(10, 0), t(19, 0), d(2024, 1, 1), None)];
        let spec = vec![specific(10, 99, dt(monday(), 12, 0), dt(monday(), 18, 0))];
        let off = vec![time_off(3, 99, monday(), monday(), TimeOffStatus::Approved)];
        assert_eq!(
            resolve(7, monday(), &rec, &spec, &off, Weekday::Mon),
            DaySchedule::Empty
        );
    }

    #[test]
    fn resolution_is_idempotent() {
        let rec = vec![recurring(1, 7, 0, t(10, 0), t(19, 0), d(2024, 1, 1), None)];
        let spec = vec![specific(10, 7, dt(monday(), 12, 0), dt(monday(), 18, 0))];
        let off = vec![time_off(3, 7, d(2024, 3, 1), d(2024, 3, 8), TimeOffStatus::Pending)];
        let first = resolve(7, monday(), &rec, &spec, &off, Weekday::Mon);
        let second = resolve(7, monday(), &rec, &spec, &off, Weekday::Mon);
        assert_eq!(first, second);
    }
}
