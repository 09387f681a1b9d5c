//! Pure calendrical math: month arithmetic and the 42-cell month grid.
//!
//! Everything in this module is a pure function: same month in, same dates out, no
//! hidden state. Months are represented by their first day (a
//! [`NaiveDate`] with `day == 1`); every function normalizes its input, so passing any
//! day of the month works too.

use chrono::{Datelike, Duration, NaiveDate};

/// A displayed month always spans 6 full weeks, 7 days each, regardless of the month's
/// actual length.
pub const GRID_LEN: usize = 42;

/// The first day of the month `date` belongs to.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    // Day 1 exists in every month, this cannot fail
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap()
}

/// The first day of the following month. Rolls the year over at December.
pub fn next_month(month: NaiveDate) -> NaiveDate {
    let first = first_of_month(month);
    match first.month() {
        12 => NaiveDate::from_ymd_opt(first.year() + 1, 1, 1),
        m => NaiveDate::from_ymd_opt(first.year(), m + 1, 1),
    }
    .unwrap()
}

/// The first day of the preceding month. Rolls the year over at January.
pub fn previous_month(month: NaiveDate) -> NaiveDate {
    let first = first_of_month(month);
    match first.month() {
        1 => NaiveDate::from_ymd_opt(first.year() - 1, 12, 1),
        m => NaiveDate::from_ymd_opt(first.year(), m - 1, 1),
    }
    .unwrap()
}

/// How many days the month of `date` has.
pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = first_of_month(date);
    next_month(first).signed_duration_since(first).num_days() as u32
}

/// The 42 dates a month view displays, in ascending order without gaps.
///
/// The grid starts on the Sunday on or before day 1 (the leading cells are the trailing
/// days of the previous month), contains every day of the given month, and is padded
/// with the first days of the next month until all 6 weeks are full. A month that ends
/// early in its 6th week therefore still produces a full trailing week of next-month days.
pub fn month_grid(month: NaiveDate) -> Vec<NaiveDate> {
    let first = first_of_month(month);
    let offset = first.weekday().num_days_from_sunday() as i64;
    let start = first - Duration::days(offset);
    (0..GRID_LEN as i64)
        .map(|day| start + Duration::days(day))
        .collect()
}
