//! Domain-focused tests for task construction and validation.

use crate::task::domain::{
    CategoryName, NewTaskData, OwnerId, Priority, RecurrenceInterval, Task, TaskDomainError,
    TaskStatus, Title,
};
use chrono::Days;
use mockable::{Clock, DefaultClock};
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

fn new_task_data(owner: OwnerId, title: &str) -> NewTaskData {
    NewTaskData {
        owner,
        title: Title::new(title).expect("valid title"),
        description: String::new(),
        due_date: None,
        priority: Priority::Medium,
        status: None,
        category: None,
        recurring: false,
        recurrence_interval: None,
    }
}

#[rstest]
fn title_rejects_empty_value() {
    assert_eq!(Title::new("   "), Err(TaskDomainError::EmptyTitle));
}

#[rstest]
fn title_rejects_overlong_value() {
    let result = Title::new("x".repeat(256));
    assert_eq!(result, Err(TaskDomainError::TitleTooLong(256)));
}

#[rstest]
fn title_trims_surrounding_whitespace() {
    let title = Title::new("  Water the plants  ").expect("valid title");
    assert_eq!(title.as_str(), "Water the plants");
}

#[rstest]
fn category_name_rejects_empty_value() {
    assert_eq!(
        CategoryName::new(""),
        Err(TaskDomainError::EmptyCategoryName)
    );
}

#[rstest]
fn new_task_defaults_to_pending_without_completion_timestamp(clock: DefaultClock) {
    let task =
        Task::new(new_task_data(OwnerId::new(), "Water the plants"), &clock).expect("valid task");

    assert_eq!(task.status(), TaskStatus::Pending);
    assert!(task.completed_at().is_none());
    assert_eq!(task.created_at(), task.updated_at());
}

#[rstest]
fn new_task_with_completed_status_stamps_completion(clock: DefaultClock) {
    let mut data = new_task_data(OwnerId::new(), "Already done");
    data.status = Some(TaskStatus::Completed);

    let task = Task::new(data, &clock).expect("valid task");

    assert_eq!(task.status(), TaskStatus::Completed);
    assert!(task.completed_at().is_some());
}

#[rstest]
fn new_task_rejects_past_due_date(clock: DefaultClock) {
    let today = clock.utc().date_naive();
    let yesterday = today.pred_opt().expect("representable date");
    let mut data = new_task_data(OwnerId::new(), "Late already");
    data.due_date = Some(yesterday);

    let result = Task::new(data, &clock);

    assert_eq!(
        result,
        Err(TaskDomainError::DueDatePast {
            due: yesterday,
            today,
        })
    );
}

#[rstest]
fn new_task_accepts_due_date_of_today(clock: DefaultClock) {
    let today = clock.utc().date_naive();
    let mut data = new_task_data(OwnerId::new(), "Due today");
    data.due_date = Some(today);

    let task = Task::new(data, &clock).expect("valid task");
    assert_eq!(task.due_date(), Some(today));
}

#[rstest]
fn new_task_accepts_future_due_date(clock: DefaultClock) {
    let future = clock
        .utc()
        .date_naive()
        .checked_add_days(Days::new(30))
        .expect("representable date");
    let mut data = new_task_data(OwnerId::new(), "Plenty of time");
    data.due_date = Some(future);

    let task = Task::new(data, &clock).expect("valid task");
    assert_eq!(task.due_date(), Some(future));
}

#[rstest]
fn new_task_rejects_recurring_flag_without_interval(clock: DefaultClock) {
    let mut data = new_task_data(OwnerId::new(), "Recurring chore");
    data.recurring = true;

    let result = Task::new(data, &clock);
    assert_eq!(result, Err(TaskDomainError::MissingRecurrenceInterval));
}

#[rstest]
#[case(Priority::Low, "low")]
#[case(Priority::Medium, "medium")]
#[case(Priority::High, "high")]
fn priority_storage_representation_round_trips(#[case] priority: Priority, #[case] text: &str) {
    assert_eq!(priority.as_str(), text);
    assert_eq!(Priority::try_from(text), Ok(priority));
}

#[rstest]
#[case(TaskStatus::Pending, "pending")]
#[case(TaskStatus::Completed, "completed")]
fn status_storage_representation_round_trips(#[case] status: TaskStatus, #[case] text: &str) {
    assert_eq!(status.as_str(), text);
    assert_eq!(TaskStatus::try_from(text), Ok(status));
}

#[rstest]
#[case(RecurrenceInterval::Daily, "daily", 1)]
#[case(RecurrenceInterval::Weekly, "weekly", 7)]
fn interval_storage_representation_round_trips(
    #[case] interval: RecurrenceInterval,
    #[case] text: &str,
    #[case] days: u64,
) {
    assert_eq!(interval.as_str(), text);
    assert_eq!(RecurrenceInterval::try_from(text), Ok(interval));
    assert_eq!(interval.days(), days);
}

#[rstest]
fn status_parse_is_case_insensitive() {
    assert_eq!(TaskStatus::try_from(" Completed "), Ok(TaskStatus::Completed));
}

#[rstest]
fn status_parse_rejects_unknown_value() {
    assert!(TaskStatus::try_from("archived").is_err());
}

#[rstest]
fn task_serializes_and_deserializes(clock: DefaultClock) {
    let task =
        Task::new(new_task_data(OwnerId::new(), "Round trip"), &clock).expect("valid task");

    let json = serde_json::to_string(&task).expect("serializable task");
    let restored: Task = serde_json::from_str(&json).expect("deserializable task");

    assert_eq!(restored, task);
}
