//! Display totals computed from resolved days: hours for grid footers and
//! per-employee weekly sums, headcount for coverage rows.

use crate::scheduling::DaySchedule;

/// Hours worked in one resolved day. Time off and empty days contribute
/// nothing. Interval ends are full datetimes, so a shift running past
/// midnight sums to its literal duration.
pub fn total_hours(day: &DaySchedule) -> f64 {
    match day {
        DaySchedule::Shifts { intervals, .. } => intervals
            .iter()
            .map(|interval| (interval.end - interval.start).num_minutes() as f64 / 60.0)
            .sum(),
        DaySchedule::TimeOff { .. } | DaySchedule::Empty => 0.0,
    }
}

/// Sum of hours across a sequence of resolved days, e.g. one employee's
/// visible week.
pub fn week_total_hours(days: &[DaySchedule]) -> f64 {
    days.iter().map(total_hours).sum()
}

/// How many of the given resolved days carry at least one shift. Applied to
/// one grid column (same day, all employees) this is the day's headcount.
pub fn headcount(days: &[DaySchedule]) -> usize {
    days.iter().filter(|day| day.is_working()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
    use pretty_assertions::assert_eq;

    use crate::database::models::TimeOffStatus;
    use crate::scheduling::{ShiftInterval, ShiftSource};

    fn dt(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 4)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(h, m, 0).unwrap())
    }

    #[test]
    fn split_shift_day_sums_both_intervals() {
        let day = DaySchedule::Shifts {
            intervals: vec![
                ShiftInterval {
                    start: dt(9, 0),
                    end: dt(13, 0),
                },
                ShiftInterval {
                    start: dt(14, 0),
                    end: dt(18, 0),
                },
            ],
            source: ShiftSource::Specific,
        };
        assert_eq!(total_hours(&day), 8.0);
    }

    #[test]
    fn time_off_and_empty_days_count_zero_hours() {
        let off = DaySchedule::TimeOff {
            status: TimeOffStatus::Approved,
            reason: None,
        };
        assert_eq!(total_hours(&off), 0.0);
        assert_eq!(total_hours(&DaySchedule::Empty), 0.0);
    }

    #[test]
    fn midnight_crossing_shift_uses_the_literal_difference() {
        let day = DaySchedule::Shifts {
            intervals: vec![ShiftInterval {
                start: dt(22, 0),
                end: dt(22, 0) + chrono::Duration::hours(6),
            }],
            source: ShiftSource::Specific,
        };
        assert_eq!(total_hours(&day), 6.0);
    }

    #[test]
    fn partial_hours_are_fractional() {
        let day = DaySchedule::Shifts {
            intervals: vec![ShiftInterval {
                start: dt(9, 0),
                end: dt(12, 30),
            }],
            source: ShiftSource::Recurring,
        };
        assert_eq!(total_hours(&day), 3.5);
    }

    #[test]
    fn weekly_totals_and_headcount_ignore_non_working_days() {
        let days = vec![
            DaySchedule::Shifts {
                intervals: vec![ShiftInterval {
                    start: dt(9, 0),
                    end: dt(17, 0),
                }],
                source: ShiftSource::Recurring,
            },
            DaySchedule::TimeOff {
                status: TimeOffStatus::Pending,
                reason: None,
            },
            DaySchedule::Empty,
        ];
        assert_eq!(week_total_hours(&days), 8.0);
        assert_eq!(headcount(&days), 1);
    }
}
