//! The task-list side of the board.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::store::SharedState;
use crate::task::{Task, TaskId};

/// See [`TaskController::view_state`]
pub type TaskViewReceiver = watch::Receiver<TaskViewState>;

/// The task list of the currently selected day.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskViewState {
    tasks: Vec<Task>,
}

impl TaskViewState {
    /// The displayed tasks, in collection order. They all share the same date.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}

/// Maintains the selected day's task list, and owns every task mutation.
///
/// All operations write whole updated collections through the
/// [`SharedState`]; this controller holds no task data of its own, so its list can
/// never diverge from what the calendar side displays. Spawn [`Self::run`] to have the
/// list follow selection and collection changes (see
/// [`CalendarController`](crate::controller::CalendarController) for the pattern).
pub struct TaskController {
    store: Arc<SharedState>,
    view_state: watch::Sender<TaskViewState>,
}

impl TaskController {
    pub fn new(store: Arc<SharedState>) -> Self {
        let initial = Self::filtered(&store, store.selected_date());
        let (view_state, _) = watch::channel(initial);
        Self { store, view_state }
    }

    /// Subscribe to the view-state stream. Latest value wins, as for the calendar stream.
    pub fn view_state(&self) -> TaskViewReceiver {
        self.view_state.subscribe()
    }

    /// Publish the task list of the given day.
    pub fn load_tasks(&self, date: NaiveDate) {
        self.view_state
            .send_replace(Self::filtered(&self.store, date));
    }

    /// Add a new, uncompleted task on the currently selected day.
    ///
    /// The caller only provides the title: the id is freshly generated, and the date is
    /// always the live selection, not something the caller can override. The created
    /// task is returned so callers can address it later.
    pub fn add_task(&self, title: String) -> Task {
        let task = Task::new(title, self.store.selected_date());
        log::debug!("adding task {} on {}", task.id(), task.date());
        let mut tasks = self.store.tasks();
        tasks.push(task.clone());
        self.store.set_tasks(tasks);
        task
    }

    /// Remove the task with this id. Silently does nothing if there is none: callers
    /// cannot distinguish "not found" from "already removed".
    pub fn delete_task(&self, id: &TaskId) {
        let mut tasks = self.store.tasks();
        let had = tasks.len();
        tasks.retain(|task| task.id() != id);
        if tasks.len() == had {
            log::debug!("no task {} to delete", id);
        }
        self.store.set_tasks(tasks);
    }

    /// Flip the completion flag of the task with this id. Silently does nothing if
    /// there is none.
    pub fn toggle_completion(&self, id: &TaskId) {
        let mut tasks = self.store.tasks();
        match tasks.iter_mut().find(|task| task.id() == id) {
            Some(task) => task.set_completed(!task.completed()),
            None => log::debug!("no task {} to toggle", id),
        }
        self.store.set_tasks(tasks);
    }

    /// React to store mutations until the store is gone. Same serialization guarantees
    /// as [`CalendarController::run`](crate::controller::CalendarController::run).
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
                return;
            }
            self.refresh();
        }
    }

    /// Re-filter against the live selection and publish.
    fn refresh(&self) {
        self.load_tasks(self.store.selected_date());
    }

    fn filtered(store: &SharedState, date: NaiveDate) -> TaskViewState {
        let tasks = store
            .tasks()
            .into_iter()
            .filter(|task| task.date() == date)
            .collect();
        TaskViewState { tasks }
    }
}
