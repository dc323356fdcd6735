//! Domain-focused tests for the task entity, title validation, status
//! parsing, and filter semantics.

use crate::task::domain::{
    ParseTaskStatusError, PersistedTaskData, Task, TaskDomainError, TaskFilter, TaskId, TaskStatus,
    TaskTitle,
};
use chrono::{Duration, Utc};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

fn pending_task(title: &str, clock: &DefaultClock) -> Task {
    let validated = TaskTitle::new(title).expect("valid title");
    Task::new(validated, None, None, clock)
}

#[rstest]
fn task_title_rejects_empty_value() {
    assert_eq!(TaskTitle::new(""), Err(TaskDomainError::EmptyTitle));
}

#[rstest]
fn task_title_rejects_whitespace_only_value() {
    assert_eq!(TaskTitle::new("   \t "), Err(TaskDomainError::EmptyTitle));
}

#[rstest]
fn task_title_preserves_original_value() {
    let title = TaskTitle::new("  Ship the release  ").expect("valid title");
    assert_eq!(title.as_str(), "  Ship the release  ");
}

#[rstest]
fn task_new_starts_pending_without_id_or_completion(clock: DefaultClock) {
    let before = Utc::now();
    let task = Task::new(
        TaskTitle::new("Write changelog").expect("valid title"),
        Some("Cover the storage rework".to_owned()),
        None,
        &clock,
    );
    let after = Utc::now();

    assert_eq!(task.id(), None);
    assert_eq!(task.status(), TaskStatus::Pending);
    assert_eq!(task.completed_at(), None);
    assert_eq!(task.title(), "Write changelog");
    assert_eq!(task.description(), Some("Cover the storage rework"));
    assert!(task.created_at() >= before && task.created_at() <= after);
}

#[rstest]
fn mark_completed_sets_status_and_timestamp(clock: DefaultClock) {
    let mut task = pending_task("Review PR", &clock);
    let before = Utc::now();
    task.mark_completed(&clock);
    let after = Utc::now();

    assert_eq!(task.status(), TaskStatus::Completed);
    let completed_at = task.completed_at().expect("completion timestamp set");
    assert!(completed_at >= before && completed_at <= after);
}

#[rstest]
fn mark_completed_is_unconditional_and_overwrites(clock: DefaultClock) {
    let mut task = pending_task("Review PR", &clock);
    task.mark_completed(&clock);
    let first = task.completed_at().expect("first completion timestamp");

    std::thread::sleep(std::time::Duration::from_millis(10));
    task.mark_completed(&clock);
    let second = task.completed_at().expect("second completion timestamp");

    // The raw entity transition always restamps; the service layer is
    // responsible for guarding repeated completion.
    assert!(second > first);
}

#[rstest]
fn from_persisted_round_trips_all_fields() {
    let created_at = Utc::now();
    let completed_at = created_at + Duration::minutes(5);
    let task = Task::from_persisted(PersistedTaskData {
        id: TaskId::new(7),
        title: "Archived task".to_owned(),
        description: None,
        status: TaskStatus::Completed,
        due_date: None,
        completed_at: Some(completed_at),
        created_at,
    });

    assert_eq!(task.id(), Some(TaskId::new(7)));
    assert_eq!(task.title(), "Archived task");
    assert_eq!(task.status(), TaskStatus::Completed);
    assert_eq!(task.completed_at(), Some(completed_at));
    assert_eq!(task.created_at(), created_at);
}

#[rstest]
#[case(TaskStatus::Pending, "pending")]
#[case(TaskStatus::Completed, "completed")]
fn status_as_str_matches_storage_values(#[case] status: TaskStatus, #[case] expected: &str) {
    assert_eq!(status.as_str(), expected);
}

#[rstest]
#[case("pending", TaskStatus::Pending)]
#[case("completed", TaskStatus::Completed)]
#[case("  Completed ", TaskStatus::Completed)]
fn status_try_from_accepts_normalized_values(#[case] value: &str, #[case] expected: TaskStatus) {
    assert_eq!(TaskStatus::try_from(value), Ok(expected));
}

#[rstest]
fn status_try_from_rejects_unknown_value() {
    assert_eq!(
        TaskStatus::try_from("cancelled"),
        Err(ParseTaskStatusError("cancelled".to_owned()))
    );
}

#[rstest]
fn filter_default_matches_everything(clock: DefaultClock) {
    let task = pending_task("Anything", &clock);
    assert!(TaskFilter::default().matches(&task));
}

#[rstest]
fn filter_date_bounds_are_inclusive(clock: DefaultClock) {
    let task = pending_task("Bounded", &clock);
    let created_at = task.created_at();

    assert!(
        TaskFilter::new()
            .with_from_date(created_at)
            .with_to_date(created_at)
            .matches(&task)
    );
    assert!(
        !TaskFilter::new()
            .with_from_date(created_at + Duration::seconds(1))
            .matches(&task)
    );
    assert!(
        !TaskFilter::new()
            .with_to_date(created_at - Duration::seconds(1))
            .matches(&task)
    );
}

#[rstest]
fn filter_status_criterion_is_exact(clock: DefaultClock) {
    let mut task = pending_task("Status check", &clock);
    assert!(
        TaskFilter::new()
            .with_status(TaskStatus::Pending)
            .matches(&task)
    );
    assert!(
        !TaskFilter::new()
            .with_status(TaskStatus::Completed)
            .matches(&task)
    );

    task.mark_completed(&clock);
    assert!(
        TaskFilter::new()
            .with_status(TaskStatus::Completed)
            .matches(&task)
    );
}

#[rstest]
fn filter_title_substring_is_case_sensitive(clock: DefaultClock) {
    let task = pending_task("Deploy staging cluster", &clock);
    assert!(
        TaskFilter::new()
            .with_title_contains("staging")
            .matches(&task)
    );
    assert!(
        !TaskFilter::new()
            .with_title_contains("Staging")
            .matches(&task)
    );
}

#[rstest]
fn filter_criteria_combine_conjunctively(clock: DefaultClock) {
    let task = pending_task("Rotate credentials", &clock);
    let matching = TaskFilter::new()
        .with_status(TaskStatus::Pending)
        .with_title_contains("credentials");
    let mismatching_status = TaskFilter::new()
        .with_status(TaskStatus::Completed)
        .with_title_contains("credentials");

    assert!(matching.matches(&task));
    assert!(!mismatching_status.matches(&task));
}
