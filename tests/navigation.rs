
use corkboard::Task;
use scenarii::{date, wait_for_counts, Board};

#[tokio::test]
async fn next_and_previous_month_roll_the_year_over() {
    let _ = env_logger::builder().is_test(true).try_init();

    let board = Board::start(date(2024, 3, 15));
    let mut view = board.calendar_view();

    board.calendar.next_month();
    view.wait_for(|state| state.current_month() == date(2024, 4, 1))
        .await
        .unwrap();

    // Any day denotes its month
    board.calendar.load_month(date(2024, 12, 25));
    board.calendar.next_month();
    view.wait_for(|state| state.current_month() == date(2025, 1, 1))
        .await
        .unwrap();

    board.calendar.previous_month();
    view.wait_for(|state| state.current_month() == date(2024, 12, 1))
        .await
        .unwrap();
}

#[tokio::test]
async fn loading_a_month_publishes_its_full_grid() {
    let _ = env_logger::builder().is_test(true).try_init();

    let board = Board::start(date(2024, 3, 15));
    let mut view = board.calendar_view();

    // Seed the store directly: a whole-collection replacement, like an import would do
    board.store.set_tasks(vec![
        Task::new("in the leading padding".to_string(), date(2024, 2, 29)),
        Task::new("mid-month".to_string(), date(2024, 3, 15)),
    ]);

    board.calendar.load_month(date(2024, 3, 1));
    wait_for_counts(&mut view, date(2024, 2, 29), 1, 0).await;
    wait_for_counts(&mut view, date(2024, 3, 15), 1, 0).await;

    let state = view.borrow().clone();
    assert_eq!(state.days().len(), 42);
    assert_eq!(state.days()[0].date(), date(2024, 2, 25));
    assert_eq!(state.days()[41].date(), date(2024, 4, 6));
    assert_eq!(state.weeks().count(), 6);
    for week in state.weeks() {
        assert_eq!(week.len(), 7);
    }
}
