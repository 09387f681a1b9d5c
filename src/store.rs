//! The shared state both controllers read from and write through.
//!
//! [`SharedState`] is the single source of truth for the currently selected day and for
//! the task collection. It does not know about calendars or task lists: it only holds
//! values and notifies whoever subscribed whenever one of them is replaced. \
//! The [controllers](crate::controller) never talk to each other; every coordination
//! between them goes through this store.
//!
//! There is intentionally no global instance. Build one, wrap it in an [`Arc`](std::sync::Arc)
//! and hand a clone to every component that needs it.

use chrono::{Local, NaiveDate};
use tokio::sync::watch;

use crate::task::Task;

/// See [`SharedState::subscribe_selected_date`]
pub type SelectedDateReceiver = watch::Receiver<NaiveDate>;
/// See [`SharedState::subscribe_tasks`]
pub type TaskListReceiver = watch::Receiver<Vec<Task>>;

/// The single in-process authoritative holder of selection and task data.
///
/// Both fields are observable values: a mutator unconditionally replaces the whole
/// value and notifies every subscriber. Subscribers always converge on the latest
/// value ("latest value wins"), and a read after a notification is never stale.
pub struct SharedState {
    selected_date: watch::Sender<NaiveDate>,
    tasks: watch::Sender<Vec<Task>>,
}

impl SharedState {
    /// Create a state with `selected_date` set to today (local time) and no tasks.
    pub fn new() -> Self {
        Self::new_with_selected_date(Local::now().date_naive())
    }

    /// Create a state with a specific initial selection and no tasks.
    pub fn new_with_selected_date(date: NaiveDate) -> Self {
        let (selected_date, _) = watch::channel(date);
        let (tasks, _) = watch::channel(Vec::new());
        Self {
            selected_date,
            tasks,
        }
    }

    /// The currently selected day.
    pub fn selected_date(&self) -> NaiveDate {
        *self.selected_date.borrow()
    }

    /// A copy of the current task collection.
    pub fn tasks(&self) -> Vec<Task> {
        self.tasks.borrow().clone()
    }

    /// Replace the selected day and notify subscribers.
    ///
    /// Any valid date is accepted, including dates outside the currently displayed month.
    pub fn set_selected_date(&self, date: NaiveDate) {
        log::debug!("selected date is now {}", date);
        self.selected_date.send_replace(date);
    }

    /// Replace the whole task collection and notify subscribers.
    ///
    /// This is a replacement, not a merge: whatever was stored before is discarded.
    /// An empty collection is valid input.
    pub fn set_tasks(&self, tasks: Vec<Task>) {
        log::debug!("task collection replaced ({} tasks)", tasks.len());
        self.tasks.send_replace(tasks);
    }

    /// Subscribe to selection changes.
    ///
    /// Every mutation is observed at most once per receiver, and a receiver that lags
    /// behind several mutations only sees the latest value.
    pub fn subscribe_selected_date(&self) -> SelectedDateReceiver {
        self.selected_date.subscribe()
    }

    /// Subscribe to task-collection changes. Same semantics as [`Self::subscribe_selected_date`].
    pub fn subscribe_tasks(&self) -> TaskListReceiver {
        self.tasks.subscribe()
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}
