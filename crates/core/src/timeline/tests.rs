//! Property-based tests for timeline module.

use chrono::{DateTime, Duration, TimeZone, Utc};
use filmflow_shared::types::{MilestoneId, TaskId};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::analytics::{TimelineAnalytics, highlighted_tasks};
use super::types::{
    MilestoneStatus, MilestoneType, Phase, Priority, TaskStatus, TimelineMilestone, TimelineTask,
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 12, 15, 12, 0, 0).unwrap()
}

fn task_status() -> impl Strategy<Value = TaskStatus> {
    prop_oneof![
        Just(TaskStatus::NotStarted),
        Just(TaskStatus::InProgress),
        Just(TaskStatus::Completed),
        Just(TaskStatus::Delayed),
        Just(TaskStatus::Blocked),
    ]
}

fn priority() -> impl Strategy<Value = Priority> {
    prop_oneof![
        Just(Priority::Low),
        Just(Priority::Medium),
        Just(Priority::High),
        Just(Priority::Critical),
    ]
}

fn phase() -> impl Strategy<Value = Phase> {
    prop::sample::select(Phase::ALL.to_vec())
}

fn milestone_status() -> impl Strategy<Value = MilestoneStatus> {
    prop_oneof![
        Just(MilestoneStatus::Upcoming),
        Just(MilestoneStatus::Current),
        Just(MilestoneStatus::Completed),
        Just(MilestoneStatus::Missed),
    ]
}

fn task_strategy() -> impl Strategy<Value = TimelineTask> {
    (
        0u8..=100,
        task_status(),
        priority(),
        phase(),
        -60i64..60,
        0usize..3,
    )
        .prop_map(|(progress, status, priority, category, end_offset, deps)| {
            TimelineTask {
                id: TaskId::generate(),
                title: "Generated".to_string(),
                start_date: now() + Duration::days(end_offset - 10),
                end_date: now() + Duration::days(end_offset),
                duration: 10,
                progress,
                status,
                priority,
                dependencies: (0..deps).map(|i| TaskId::new(format!("task-{i}"))).collect(),
                category,
            }
        })
}

fn milestone_strategy() -> impl Strategy<Value = TimelineMilestone> {
    (milestone_status(), -60i64..90).prop_map(|(status, offset)| TimelineMilestone {
        id: MilestoneId::generate(),
        title: "Generated".to_string(),
        date: now() + Duration::days(offset),
        kind: MilestoneType::Deadline,
        status,
        importance: Priority::Medium,
        related_tasks: Vec::new(),
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Analytics are a pure function of their inputs.
    #[test]
    fn prop_analytics_idempotent(
        tasks in prop::collection::vec(task_strategy(), 0..20),
        milestones in prop::collection::vec(milestone_strategy(), 0..10),
    ) {
        let first = TimelineAnalytics::compute(&tasks, &milestones, now());
        let second = TimelineAnalytics::compute(&tasks, &milestones, now());

        prop_assert_eq!(first, second);
    }

    /// Progress averages stay within 0-100.
    #[test]
    fn prop_progress_bounded(
        tasks in prop::collection::vec(task_strategy(), 0..20),
    ) {
        let analytics = TimelineAnalytics::compute(&tasks, &[], now());
        let hundred = Decimal::ONE_HUNDRED;

        prop_assert!(analytics.overall_progress >= Decimal::ZERO);
        prop_assert!(analytics.overall_progress <= hundred);
        for phase in Phase::ALL {
            let progress = analytics.phase_progress.get(phase);
            prop_assert!(progress >= Decimal::ZERO && progress <= hundred);
        }
    }

    /// Status counters partition a subset of the tasks.
    #[test]
    fn prop_counts_bounded(
        tasks in prop::collection::vec(task_strategy(), 0..20),
    ) {
        let analytics = TimelineAnalytics::compute(&tasks, &[], now());
        let counted = analytics.completed_tasks
            + analytics.in_progress_tasks
            + analytics.delayed_tasks
            + analytics.blocked_tasks;

        prop_assert_eq!(analytics.total_tasks, tasks.len());
        prop_assert!(counted <= analytics.total_tasks);
        prop_assert!(analytics.critical_tasks <= analytics.total_tasks - analytics.completed_tasks);
        prop_assert!(analytics.overdue_tasks <= analytics.total_tasks - analytics.completed_tasks);
    }

    /// Highlighted tasks keep input order and satisfy the filter.
    #[test]
    fn prop_highlighted_is_ordered_subset(
        tasks in prop::collection::vec(task_strategy(), 0..20),
    ) {
        let highlighted = highlighted_tasks(&tasks);
        let expected: Vec<TaskId> = tasks
            .iter()
            .filter(|t| {
                t.priority == Priority::Critical
                    || t.dependencies.is_empty()
                    || t.status == TaskStatus::Blocked
            })
            .map(|t| t.id.clone())
            .collect();

        prop_assert_eq!(highlighted, expected);
    }

    /// Only upcoming milestones inside the horizon are counted.
    #[test]
    fn prop_upcoming_milestones(
        milestones in prop::collection::vec(milestone_strategy(), 0..10),
    ) {
        let horizon = now() + Duration::days(30);
        let expected = milestones
            .iter()
            .filter(|m| m.status == MilestoneStatus::Upcoming && m.date <= horizon)
            .count();

        let analytics = TimelineAnalytics::compute(&[], &milestones, now());

        prop_assert_eq!(analytics.upcoming_milestones, expected);
    }
}
