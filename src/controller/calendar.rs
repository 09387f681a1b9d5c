//! The month-calendar side of the board.

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::calendar::{aggregate, first_of_month, format_month, month_grid};
use crate::calendar::{next_month, previous_month, DayCell};
use crate::store::SharedState;

/// See [`CalendarController::view_state`]
pub type CalendarViewReceiver = watch::Receiver<CalendarViewState>;

/// Everything a month view needs to render itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalendarViewState {
    current_month: NaiveDate,
    days: Vec<DayCell>,
    selected_date: NaiveDate,
}

impl CalendarViewState {
    /// First day of the displayed month.
    pub fn current_month(&self) -> NaiveDate {
        self.current_month
    }

    /// The 42 displayed days, in ascending order without gaps.
    pub fn days(&self) -> &[DayCell] {
        &self.days
    }

    /// The displayed days, one row of 7 per week.
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.days.chunks(7)
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    /// The cell displaying `date`, if it is part of the current grid.
    pub fn day(&self, date: NaiveDate) -> Option<&DayCell> {
        self.days.iter().find(|cell| cell.date() == date)
    }
}

/// Owns month navigation, and keeps the displayed grid consistent with the store.
///
/// The only controller-local state is the currently displayed month; day cells and the
/// selection always derive from the [`SharedState`]. Spawn [`Self::run`] on your runtime
/// to have the view state follow store mutations:
///
/// ```
/// # use std::sync::Arc;
/// # use corkboard::{SharedState, CalendarController};
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let store = Arc::new(SharedState::new());
/// let calendar = Arc::new(CalendarController::new(store.clone()));
/// let watcher = calendar.clone();
/// tokio::spawn(async move { watcher.run().await });
/// # });
/// ```
pub struct CalendarController {
    store: Arc<SharedState>,
    current_month: Mutex<NaiveDate>,
    view_state: watch::Sender<CalendarViewState>,
}

impl CalendarController {
    /// Create a controller displaying the month of the currently selected date.
    pub fn new(store: Arc<SharedState>) -> Self {
        let month = first_of_month(store.selected_date());
        let initial = Self::compute(&store, month);
        let (view_state, _) = watch::channel(initial);
        Self {
            store,
            current_month: Mutex::new(month),
            view_state,
        }
    }

    /// Subscribe to the view-state stream. A new state is published on every relevant
    /// change; slow consumers only ever see the latest one.
    pub fn view_state(&self) -> CalendarViewReceiver {
        self.view_state.subscribe()
    }

    /// Display a month. Any date denotes its month; day-of-month is ignored.
    ///
    /// This never fails: month arithmetic rolls years over in both directions.
    pub fn load_month(&self, month: NaiveDate) {
        let month = first_of_month(month);
        log::debug!("loading {}", format_month(month));
        *self.current_month.lock().unwrap() = month;
        self.refresh();
    }

    /// Display the month after the current one.
    pub fn next_month(&self) {
        let current = *self.current_month.lock().unwrap();
        self.load_month(next_month(current));
    }

    /// Display the month before the current one.
    pub fn previous_month(&self) {
        let current = *self.current_month.lock().unwrap();
        self.load_month(previous_month(current));
    }

    /// Select a day. The displayed month does not change, even for a date outside it;
    /// the selection itself lives in the store, where the task side picks it up too.
    pub fn select_date(&self, date: NaiveDate) {
        self.store.set_selected_date(date);
    }

    /// React to store mutations until the store is gone.
    ///
    /// Each recomputation runs to completion before the next notification is processed,
    /// so there is no overlapping refresh for this controller.
    pub async fn run(&self) {
        let mut dates = self.store.subscribe_selected_date();
        let mut tasks = self.store.subscribe_tasks();

        // Catch up on mutations that happened between construction and subscription
        self.refresh();

        loop {
            let changed = tokio::select! {
                res = dates.changed() => res,
                res = tasks.changed() => res,
            };
            if changed.is_err() {
                // The store has been dropped, there is nothing left to observe
                return;
            }
            self.refresh();
        }
    }

    /// Recompute the whole view state from the store and publish it.
    fn refresh(&self) {
        let month = *self.current_month.lock().unwrap();
        self.view_state.send_replace(Self::compute(&self.store, month));
    }

    fn compute(store: &SharedState, month: NaiveDate) -> CalendarViewState {
        let days = aggregate(&month_grid(month), &store.tasks());
        CalendarViewState {
            current_month: month,
            days,
            selected_date: store.selected_date(),
        }
    }
}
