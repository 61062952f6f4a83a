//! In-memory timeline state with the dashboard's mutation operations.

use chrono::{DateTime, Utc};
use filmflow_shared::types::{MilestoneId, TaskId};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::analytics::TimelineAnalytics;
use super::types::{
    MilestonePatch, NewMilestone, NewTask, TaskPatch, TimelineMilestone, TimelineTask,
};
use crate::windows::AnalyticsWindows;

/// Tasks and milestones of one production, owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineBoard {
    tasks: Vec<TimelineTask>,
    milestones: Vec<TimelineMilestone>,
}

impl TimelineBoard {
    /// Creates a board from already loaded data.
    #[must_use]
    pub fn new(tasks: Vec<TimelineTask>, milestones: Vec<TimelineMilestone>) -> Self {
        Self { tasks, milestones }
    }

    /// Tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[TimelineTask] {
        &self.tasks
    }

    /// Milestones in insertion order.
    #[must_use]
    pub fn milestones(&self) -> &[TimelineMilestone] {
        &self.milestones
    }

    /// Looks up a task by ID.
    #[must_use]
    pub fn task(&self, id: &TaskId) -> Option<&TimelineTask> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Looks up a milestone by ID.
    #[must_use]
    pub fn milestone(&self, id: &MilestoneId) -> Option<&TimelineMilestone> {
        self.milestones.iter().find(|m| &m.id == id)
    }

    /// Computes analytics over the current state with the default horizon.
    #[must_use]
    pub fn analytics(&self, now: DateTime<Utc>) -> TimelineAnalytics {
        TimelineAnalytics::compute(&self.tasks, &self.milestones, now)
    }

    /// Computes analytics over the current state with explicit windows.
    #[must_use]
    pub fn analytics_with(
        &self,
        now: DateTime<Utc>,
        windows: &AnalyticsWindows,
    ) -> TimelineAnalytics {
        TimelineAnalytics::compute_with(&self.tasks, &self.milestones, now, windows)
    }

    /// Replace-merges `patch` into the task with the given ID.
    ///
    /// Returns `false` (and changes nothing) if no task has that ID.
    pub fn update_task(&mut self, id: &TaskId, patch: &TaskPatch) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| &t.id == id) else {
            debug!(task_id = %id, "Task not found, update skipped");
            return false;
        };

        patch.apply(task);
        debug!(task_id = %id, "Task updated");
        true
    }

    /// Appends a task under a freshly generated ID.
    pub fn add_task(&mut self, task: NewTask) -> TaskId {
        let id = TaskId::generate();
        self.insert_task(task.with_id(id.clone()));
        id
    }

    /// Appends a task that already carries an ID.
    pub fn insert_task(&mut self, task: TimelineTask) {
        debug!(task_id = %task.id, title = %task.title, "Task added");
        self.tasks.push(task);
    }

    /// Replace-merges `patch` into the milestone with the given ID.
    ///
    /// Returns `false` (and changes nothing) if no milestone has that ID.
    pub fn update_milestone(&mut self, id: &MilestoneId, patch: &MilestonePatch) -> bool {
        let Some(milestone) = self.milestones.iter_mut().find(|m| &m.id == id) else {
            debug!(milestone_id = %id, "Milestone not found, update skipped");
            return false;
        };

        patch.apply(milestone);
        debug!(milestone_id = %id, "Milestone updated");
        true
    }

    /// Appends a milestone under a freshly generated ID.
    pub fn add_milestone(&mut self, milestone: NewMilestone) -> MilestoneId {
        let id = MilestoneId::generate();
        self.insert_milestone(milestone.with_id(id.clone()));
        id
    }

    /// Appends a milestone that already carries an ID.
    pub fn insert_milestone(&mut self, milestone: TimelineMilestone) {
        debug!(milestone_id = %milestone.id, title = %milestone.title, "Milestone added");
        self.milestones.push(milestone);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::types::{MilestoneStatus, MilestoneType, Phase, Priority, TaskStatus};
    use chrono::{Duration, TimeZone};
    use rust_decimal_macros::dec;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 12, 15, 12, 0, 0).unwrap()
    }

    fn new_task(title: &str) -> NewTask {
        NewTask {
            title: title.to_string(),
            start_date: now(),
            end_date: now() + Duration::days(3),
            duration: 3,
            progress: 0,
            status: TaskStatus::NotStarted,
            priority: Priority::Medium,
            dependencies: Vec::new(),
            category: Phase::PostProduction,
        }
    }

    fn new_milestone(title: &str) -> NewMilestone {
        NewMilestone {
            title: title.to_string(),
            date: now() + Duration::days(14),
            kind: MilestoneType::Review,
            status: MilestoneStatus::Upcoming,
            importance: Priority::High,
            related_tasks: Vec::new(),
        }
    }

    #[test]
    fn test_tasks_are_appended() {
        let mut board = TimelineBoard::default();
        let first = board.add_task(new_task("Rough cut"));
        let second = board.add_task(new_task("Color grading"));

        assert_ne!(first, second);
        assert_eq!(board.tasks()[0].id, first);
        assert_eq!(board.tasks()[1].id, second);
        assert!(second.as_str().starts_with("task-"));
    }

    #[test]
    fn test_update_task_merges_fields() {
        let mut board = TimelineBoard::default();
        let id = board.add_task(new_task("Sound mix"));
        let patch = TaskPatch {
            progress: Some(75),
            status: Some(TaskStatus::InProgress),
            ..TaskPatch::default()
        };

        assert!(board.update_task(&id, &patch));

        let task = board.task(&id).unwrap();
        assert_eq!(task.progress, 75);
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.title, "Sound mix");
    }

    #[test]
    fn test_update_missing_task_is_noop() {
        let mut board = TimelineBoard::default();
        board.add_task(new_task("Sound mix"));
        let before = board.clone();
        let patch = TaskPatch {
            progress: Some(10),
            ..TaskPatch::default()
        };

        assert!(!board.update_task(&TaskId::from("task-404"), &patch));
        assert_eq!(board, before);
    }

    #[test]
    fn test_milestones_are_appended_and_updated() {
        let mut board = TimelineBoard::default();
        let first = board.add_milestone(new_milestone("Director's cut review"));
        let second = board.add_milestone(new_milestone("Festival delivery"));

        assert_eq!(board.milestones()[1].id, second);

        let patch = MilestonePatch {
            status: Some(MilestoneStatus::Completed),
            ..MilestonePatch::default()
        };
        assert!(board.update_milestone(&first, &patch));
        assert!(!board.update_milestone(&MilestoneId::from("milestone-404"), &patch));

        assert_eq!(board.milestone(&first).unwrap().status, MilestoneStatus::Completed);
        assert_eq!(board.milestone(&second).unwrap().status, MilestoneStatus::Upcoming);
    }

    #[test]
    fn test_analytics_reflects_changes() {
        let mut board = TimelineBoard::default();
        let id = board.add_task(new_task("Titles"));
        board.add_task(new_task("Credits"));
        board.add_milestone(new_milestone("Lock"));

        board.update_task(
            &id,
            &TaskPatch {
                progress: Some(100),
                status: Some(TaskStatus::Completed),
                ..TaskPatch::default()
            },
        );

        let analytics = board.analytics(now());

        assert_eq!(analytics.total_tasks, 2);
        assert_eq!(analytics.completed_tasks, 1);
        assert_eq!(analytics.overall_progress, dec!(50));
        assert_eq!(analytics.upcoming_milestones, 1);
    }
}
