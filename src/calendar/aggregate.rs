//! Joining a day grid against the task collection.

use std::collections::HashMap;
use std::fmt::{Display, Error, Formatter};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config;
use crate::task::Task;

/// One of the 42 cells of a displayed month, along with its task statistics.
///
/// Cells are derived values: they are recomputed from scratch by [`aggregate`] on every
/// relevant change and never mutated in place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DayCell {
    date: NaiveDate,
    task_count: u32,
    completed_count: u32,
}

impl DayCell {
    pub fn date(&self) -> NaiveDate {
        self.date
    }
    pub fn task_count(&self) -> u32 {
        self.task_count
    }
    pub fn completed_count(&self) -> u32 {
        self.completed_count
    }

    /// Whether this cell belongs to the given month (as opposed to the previous/next
    /// months' overflow days padding the grid).
    pub fn in_month(&self, month: NaiveDate) -> bool {
        self.date.year() == month.year() && self.date.month() == month.month()
    }

    /// Completion ratio of this day, `0.0` when the day holds no task.
    pub fn progress(&self) -> f32 {
        if self.task_count == 0 {
            0.0
        } else {
            self.completed_count as f32 / self.task_count as f32
        }
    }

    /// The magnitude of this day's progress indicator, on the 4..=20 scale the tier
    /// boundaries are defined against. See [`indicator_magnitude`].
    pub fn indicator_magnitude(&self) -> f32 {
        indicator_magnitude(self.completed_count, config::max_task_count())
    }

    /// The tier this day's progress indicator falls into.
    pub fn indicator_tier(&self) -> IndicatorTier {
        IndicatorTier::from_magnitude(self.indicator_magnitude())
    }
}

/// Normalized progress-indicator magnitude: `completed_count` scaled against
/// `max_task_count`, stretched to the 0..=20 range and clamped into 4..=20 so that even
/// an empty day keeps a visible minimum.
pub fn indicator_magnitude(completed_count: u32, max_task_count: u32) -> f32 {
    // A zero reference scale would divide by zero
    let scale = max_task_count.max(1);
    (completed_count as f32 / scale as f32 * 20.0).clamp(4.0, 20.0)
}

/// Discrete progress-indicator classification other components key their rendering off of.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorTier {
    /// Little of the day's workload is done
    Low,
    /// The day is partially done
    Mid,
    /// The day is (close to) fully done
    Complete,
}

impl IndicatorTier {
    /// Classify a magnitude computed by [`indicator_magnitude`].
    /// Boundaries are inclusive: exactly `6.0` is still `Low`, exactly `19.0` is still `Mid`.
    pub fn from_magnitude(magnitude: f32) -> Self {
        if magnitude <= 6.0 {
            IndicatorTier::Low
        } else if magnitude <= 19.0 {
            IndicatorTier::Mid
        } else {
            IndicatorTier::Complete
        }
    }
}

impl Display for IndicatorTier {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            IndicatorTier::Low => write!(f, "low"),
            IndicatorTier::Mid => write!(f, "mid"),
            IndicatorTier::Complete => write!(f, "complete"),
        }
    }
}

/// Populate task statistics for every date of a day grid.
///
/// Tasks are matched on exact calendar-date equality (not month-only). The whole result
/// is recomputed on every call; task collections are expected to stay small, and the
/// grid is bounded anyway, so there is no incremental update to get wrong.
pub fn aggregate(grid: &[NaiveDate], tasks: &[Task]) -> Vec<DayCell> {
    // Index the collection by date first, so a grid pass is O(days + tasks)
    let mut counts: HashMap<NaiveDate, (u32, u32)> = HashMap::new();
    for task in tasks {
        let entry = counts.entry(task.date()).or_insert((0, 0));
        entry.0 += 1;
        if task.completed() {
            entry.1 += 1;
        }
    }

    grid.iter()
        .map(|date| {
            let (task_count, completed_count) = counts.get(date).copied().unwrap_or((0, 0));
            DayCell {
                date: *date,
                task_count,
                completed_count,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::grid::month_grid;
    use crate::task::TaskId;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(title: &str, completed: bool, date: NaiveDate) -> Task {
        Task::new_with_parameters(TaskId::random(), title.to_string(), completed, date)
    }

    #[test]
    fn counts_match_on_exact_dates() {
        let grid = month_grid(day(2024, 3, 1));
        let tasks = vec![
            task("watering", false, day(2024, 3, 15)),
            task("groceries", true, day(2024, 3, 15)),
            task("vacuuming", true, day(2024, 3, 16)),
            // Same day number, different month: must not be counted on March 15th
            task("taxes", false, day(2024, 4, 15)),
        ];

        let cells = aggregate(&grid, &tasks);
        let march_15 = cells.iter().find(|c| c.date() == day(2024, 3, 15)).unwrap();
        assert_eq!(march_15.task_count(), 2);
        assert_eq!(march_15.completed_count(), 1);
        assert_eq!(march_15.progress(), 0.5);

        let march_17 = cells.iter().find(|c| c.date() == day(2024, 3, 17)).unwrap();
        assert_eq!(march_17.task_count(), 0);
        assert_eq!(march_17.completed_count(), 0);
        assert_eq!(march_17.progress(), 0.0);

        // April 15th is outside the 42-day window of March 2024
        let total: u32 = cells.iter().map(|c| c.task_count()).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn aggregation_is_idempotent_and_order_independent() {
        let grid = month_grid(day(2024, 3, 1));
        let mut tasks = vec![
            task("a", false, day(2024, 3, 2)),
            task("b", true, day(2024, 3, 2)),
            task("c", true, day(2024, 2, 28)),
        ];

        let once = aggregate(&grid, &tasks);
        let twice = aggregate(&grid, &tasks);
        assert_eq!(once, twice);

        tasks.reverse();
        assert_eq!(aggregate(&grid, &tasks), once);
    }

    #[test]
    fn overflow_days_are_aggregated_too() {
        // Grid of March 2024 starts on February 25th and ends on April 6th
        let grid = month_grid(day(2024, 3, 1));
        let tasks = vec![
            task("in the leading padding", true, day(2024, 2, 26)),
            task("in the trailing padding", false, day(2024, 4, 5)),
        ];

        let cells = aggregate(&grid, &tasks);
        assert_eq!(
            cells.iter().find(|c| c.date() == day(2024, 2, 26)).unwrap().completed_count(),
            1
        );
        assert_eq!(
            cells.iter().find(|c| c.date() == day(2024, 4, 5)).unwrap().task_count(),
            1
        );
    }

    #[test]
    fn tier_boundaries_are_inclusive() {
        assert_eq!(IndicatorTier::from_magnitude(6.0), IndicatorTier::Low);
        assert_eq!(IndicatorTier::from_magnitude(6.1), IndicatorTier::Mid);
        assert_eq!(IndicatorTier::from_magnitude(19.0), IndicatorTier::Mid);
        assert_eq!(IndicatorTier::from_magnitude(19.1), IndicatorTier::Complete);
    }

    #[test]
    fn magnitude_is_clamped() {
        // 0/10 → 0, clamped up to the visible minimum
        assert_eq!(indicator_magnitude(0, 10), 4.0);
        // 3/10 * 20 = 6: right on the low/mid boundary
        assert_eq!(indicator_magnitude(3, 10), 6.0);
        assert_eq!(indicator_magnitude(10, 10), 20.0);
        // More completed tasks than the reference scale: clamped down
        assert_eq!(indicator_magnitude(25, 10), 20.0);
    }

    #[test]
    fn in_month_distinguishes_overflow_days() {
        let grid = month_grid(day(2024, 3, 1));
        let cells = aggregate(&grid, &[]);
        assert!(!cells[0].in_month(day(2024, 3, 1)));
        assert!(cells[5].in_month(day(2024, 3, 1)));
        assert!(cells[35].in_month(day(2024, 3, 1)));
        assert!(!cells[36].in_month(day(2024, 3, 1)));
    }
}
