//! To-do tasks pinned to a calendar day

use std::fmt::{Display, Error, Formatter};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Persistent, unique identifier of a [`Task`].
///
/// Ids are minted by the library (see [`TaskId::random`]) and stay stable for the
/// whole lifetime of the task, so callers can keep them around to address a task later.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId {
    content: String,
}

impl TaskId {
    /// Generate a random TaskId.
    pub fn random() -> Self {
        let random = Uuid::new_v4().to_hyphenated().to_string();
        Self { content: random }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        Self {
            content: s.to_string(),
        }
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", self.content)
    }
}

/// A to-do task, belonging to exactly one calendar day.
///
/// Tasks are plain values: the authoritative copy lives in the
/// [`SharedState`](crate::store::SharedState) task collection, and mutation happens by
/// writing an updated collection back through it (see
/// [`TaskController`](crate::controller::TaskController)).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// The task ID
    id: TaskId,
    /// The display name of the task
    title: String,
    /// Whether this task has been completed
    completed: bool,
    /// The calendar day this task belongs to (no time-of-day)
    date: NaiveDate,
}

impl Task {
    /// Create a brand new, uncompleted Task on the given day.
    /// This will pick a new (random) task ID.
    pub fn new(title: String, date: NaiveDate) -> Self {
        Self::new_with_parameters(TaskId::random(), title, false, date)
    }

    /// Create a new Task instance with full control over every field.
    pub fn new_with_parameters(id: TaskId, title: String, completed: bool, date: NaiveDate) -> Self {
        Self {
            id,
            title,
            completed,
            date,
        }
    }

    pub fn id(&self) -> &TaskId {
        &self.id
    }
    pub fn title(&self) -> &str {
        &self.title
    }
    pub fn completed(&self) -> bool {
        self.completed
    }
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn set_title(&mut self, title: String) {
        self.title = title;
    }
    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
}
