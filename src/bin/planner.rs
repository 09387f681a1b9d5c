//! A text-mode walk-through of the corkboard API.
//!
//! This builds the store and both controllers, performs a few task operations and some
//! month navigation, and renders what a UI would display. \
//! You can set the RUST_LOG environment variable to display more info about what the
//! store and the controllers are doing.

use std::sync::Arc;

use chrono::Datelike;

use corkboard::calendar::{format_month, IndicatorTier, WEEKDAY_LABELS};
use corkboard::{CalendarController, CalendarViewState, SharedState, TaskController};

#[tokio::main]
async fn main() {
    env_logger::init();

    let store = Arc::new(SharedState::new());
    let calendar = Arc::new(CalendarController::new(store.clone()));
    let tasks = Arc::new(TaskController::new(store.clone()));

    let watcher = calendar.clone();
    tokio::spawn(async move { watcher.run().await });
    let watcher = tasks.clone();
    tokio::spawn(async move { watcher.run().await });

    let mut calendar_view = calendar.view_state();
    let mut task_view = tasks.view_state();

    let today = store.selected_date();
    println!("Adding a few tasks on {}...\n", today);
    let watering = tasks.add_task("Water the plants".to_string());
    tasks.add_task("Buy groceries".to_string());
    tasks.add_task("Call the plumber".to_string());
    tasks.toggle_completion(watering.id());

    // Both controllers react on their own; wait until each caught up with the last mutation
    calendar_view
        .wait_for(|state| {
            state
                .day(today)
                .map_or(false, |cell| cell.task_count() == 3 && cell.completed_count() == 1)
        })
        .await
        .unwrap();
    task_view
        .wait_for(|state| state.tasks().len() == 3)
        .await
        .unwrap();

    print_month(&calendar_view.borrow());

    println!("\nTasks on {}:", today);
    for task in task_view.borrow().tasks() {
        let mark = if task.completed() { "x" } else { " " };
        println!("  [{}] {}", mark, task.title());
    }

    println!("\nMoving to the next month...\n");
    let displayed = calendar_view.borrow().current_month();
    calendar.next_month();
    calendar_view
        .wait_for(|state| state.current_month() != displayed)
        .await
        .unwrap();
    print_month(&calendar_view.borrow());
    calendar.previous_month();

    let state = task_view.borrow().clone();
    println!("\nTask view state, as JSON:");
    println!("{}", serde_json::to_string_pretty(&state).unwrap());
}

fn print_month(state: &CalendarViewState) {
    println!("{:^28}", format_month(state.current_month()));
    for label in WEEKDAY_LABELS.iter() {
        print!("{:>4}", label);
    }
    println!();

    for week in state.weeks() {
        for cell in week {
            let marker = if cell.task_count() == 0 {
                ' '
            } else {
                match cell.indicator_tier() {
                    IndicatorTier::Low => '.',
                    IndicatorTier::Mid => '+',
                    IndicatorTier::Complete => '*',
                }
            };
            print!(" {:>2}{}", cell.date().day(), marker);
        }
        println!();
    }
    println!("Selected date: {}", state.selected_date());
}
