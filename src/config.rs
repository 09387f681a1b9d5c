//! Support for library configuration options

use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;

/// Reference task count the day-cell progress indicators are scaled against (a day holding
/// this many completed tasks displays a full-length indicator).
/// Feel free to override it when initing this library.
pub static MAX_TASK_COUNT: Lazy<Arc<Mutex<u32>>> = Lazy::new(|| Arc::new(Mutex::new(10)));

/// The current value of [`MAX_TASK_COUNT`].
pub fn max_task_count() -> u32 {
    *MAX_TASK_COUNT.lock().unwrap()
}
