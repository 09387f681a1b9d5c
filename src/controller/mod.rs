//! The two controllers presentation code talks to.
//!
//! Each controller subscribes to the [`SharedState`](crate::store::SharedState) and owns
//! an outbound view-state stream UI code can watch. Controllers never call each other:
//! when an operation on one of them mutates the store, the other one picks the change up
//! through its own subscription. The relative order in which the two controllers react
//! to the same mutation is unspecified; both always converge on a view consistent with
//! the latest store value.

pub mod calendar;
pub mod task;

pub use calendar::{CalendarController, CalendarViewState};
pub use task::{TaskController, TaskViewState};
