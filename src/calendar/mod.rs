//! Month grids and per-day task statistics.
//!
//! The [`grid`] module computes *which* 42 dates a month view displays; the
//! [`aggregate`] module computes *what* each of these days holds. Both are pure
//! functions, driven by the [`CalendarController`](crate::controller::CalendarController).

pub mod aggregate;
pub mod grid;

pub use aggregate::{aggregate, indicator_magnitude, DayCell, IndicatorTier};
pub use grid::{days_in_month, first_of_month, month_grid, next_month, previous_month, GRID_LEN};

use chrono::NaiveDate;

/// Header labels of the 7 grid columns. The grid starts weeks on Sunday.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// A month header in the usual "March 2024" form.
pub fn format_month(month: NaiveDate) -> String {
    month.format("%B %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_headers() {
        let march = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(format_month(march), "March 2024");
    }
}
