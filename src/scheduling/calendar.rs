//! Week arithmetic shared by every screen and endpoint. The week-start
//! convention is passed in explicitly (sourced from `Config::week_start_day`)
//! so no call site can quietly disagree about which day opens the week.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Map a 0-6 configuration index to a weekday, 0 = Monday.
pub fn weekday_from_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Mon),
        1 => Some(Weekday::Tue),
        2 => Some(Weekday::Wed),
        3 => Some(Weekday::Thu),
        4 => Some(Weekday::Fri),
        5 => Some(Weekday::Sat),
        6 => Some(Weekday::Sun),
        _ => None,
    }
}

/// Slot of `date` within a week that starts on `week_start`: 0 for the week
/// start itself through 6 for the day before the next one. This is the index
/// space used by `RecurringShift::day_of_week`.
pub fn day_index(date: NaiveDate, week_start: Weekday) -> u8 {
    let date_offset = date.weekday().num_days_from_monday();
    let start_offset = week_start.num_days_from_monday();
    ((date_offset + 7 - start_offset) % 7) as u8
}

/// The seven consecutive dates of the week containing `anchor`, beginning at
/// the most recent date (or `anchor` itself) whose weekday is `week_start`.
pub fn week_dates(anchor: NaiveDate, week_start: Weekday) -> [NaiveDate; 7] {
    let first = anchor - Duration::days(day_index(anchor, week_start) as i64);
    std::array::from_fn(|i| first + Duration::days(i as i64))
}
