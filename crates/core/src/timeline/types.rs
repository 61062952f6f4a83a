//! Timeline data types.

use chrono::{DateTime, Utc};
use filmflow_shared::types::{MilestoneId, TaskId};
use serde::{Deserialize, Serialize};

/// Task status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Work has not begun.
    NotStarted,
    /// Work is ongoing.
    InProgress,
    /// Work is done.
    Completed,
    /// Work is behind schedule.
    Delayed,
    /// Work cannot proceed.
    Blocked,
}

/// Priority of a task, also used as milestone importance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Low.
    Low,
    /// Medium.
    Medium,
    /// High.
    High,
    /// Critical.
    Critical,
}

/// Production phase a task belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Development, casting, scouting.
    PreProduction,
    /// Principal photography.
    Production,
    /// Editing, grading, sound.
    PostProduction,
    /// Paperwork, contracts, accounting.
    Admin,
}

impl Phase {
    /// All phases in production order.
    pub const ALL: [Self; 4] = [
        Self::PreProduction,
        Self::Production,
        Self::PostProduction,
        Self::Admin,
    ];
}

/// A scheduled unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineTask {
    /// Task ID.
    pub id: TaskId,
    /// Title.
    pub title: String,
    /// Planned start.
    pub start_date: DateTime<Utc>,
    /// Planned end.
    pub end_date: DateTime<Utc>,
    /// Planned duration in days.
    pub duration: u32,
    /// Completion percentage, 0-100.
    pub progress: u8,
    /// Status.
    pub status: TaskStatus,
    /// Priority.
    pub priority: Priority,
    /// IDs of tasks this one waits for. Neither existence nor cycles are
    /// checked.
    #[serde(default)]
    pub dependencies: Vec<TaskId>,
    /// Production phase.
    pub category: Phase,
}

/// Input for adding a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    /// Title.
    pub title: String,
    /// Planned start.
    pub start_date: DateTime<Utc>,
    /// Planned end.
    pub end_date: DateTime<Utc>,
    /// Planned duration in days.
    pub duration: u32,
    /// Completion percentage, 0-100.
    pub progress: u8,
    /// Status.
    pub status: TaskStatus,
    /// Priority.
    pub priority: Priority,
    /// IDs of tasks this one waits for.
    #[serde(default)]
    pub dependencies: Vec<TaskId>,
    /// Production phase.
    pub category: Phase,
}

impl NewTask {
    /// Assigns an identifier, producing a full task.
    #[must_use]
    pub fn with_id(self, id: TaskId) -> TimelineTask {
        TimelineTask {
            id,
            title: self.title,
            start_date: self.start_date,
            end_date: self.end_date,
            duration: self.duration,
            progress: self.progress,
            status: self.status,
            priority: self.priority,
            dependencies: self.dependencies,
            category: self.category,
        }
    }
}

/// Partial update of a task. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    /// New title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New start.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    /// New end.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    /// New duration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// New progress.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
    /// New status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    /// New priority.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    /// New dependency list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<TaskId>>,
    /// New phase.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Phase>,
}

impl TaskPatch {
    /// Merges the supplied fields into `target`.
    pub fn apply(&self, target: &mut TimelineTask) {
        if let Some(title) = &self.title {
            target.title.clone_from(title);
        }
        if let Some(start_date) = self.start_date {
            target.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            target.end_date = end_date;
        }
        if let Some(duration) = self.duration {
            target.duration = duration;
        }
        if let Some(progress) = self.progress {
            target.progress = progress;
        }
        if let Some(status) = self.status {
            target.status = status;
        }
        if let Some(priority) = self.priority {
            target.priority = priority;
        }
        if let Some(dependencies) = &self.dependencies {
            target.dependencies.clone_from(dependencies);
        }
        if let Some(category) = self.category {
            target.category = category;
        }
    }
}

/// Milestone kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneType {
    /// Hard deadline.
    Deadline,
    /// Review session.
    Review,
    /// Delivery to a client or distributor.
    Delivery,
    /// Sign-off.
    Approval,
}

/// Milestone status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneStatus {
    /// Not reached yet.
    Upcoming,
    /// Being worked towards right now.
    Current,
    /// Reached.
    Completed,
    /// Date passed without being reached.
    Missed,
}

/// A dated checkpoint on the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineMilestone {
    /// Milestone ID.
    pub id: MilestoneId,
    /// Title.
    pub title: String,
    /// Due date.
    pub date: DateTime<Utc>,
    /// Kind.
    #[serde(rename = "type")]
    pub kind: MilestoneType,
    /// Status.
    pub status: MilestoneStatus,
    /// Importance.
    pub importance: Priority,
    /// Tasks feeding into this milestone.
    #[serde(default)]
    pub related_tasks: Vec<TaskId>,
}

/// Input for adding a milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMilestone {
    /// Title.
    pub title: String,
    /// Due date.
    pub date: DateTime<Utc>,
    /// Kind.
    #[serde(rename = "type")]
    pub kind: MilestoneType,
    /// Status.
    pub status: MilestoneStatus,
    /// Importance.
    pub importance: Priority,
    /// Tasks feeding into this milestone.
    #[serde(default)]
    pub related_tasks: Vec<TaskId>,
}

impl NewMilestone {
    /// Assigns an identifier, producing a full milestone.
    #[must_use]
    pub fn with_id(self, id: MilestoneId) -> TimelineMilestone {
        TimelineMilestone {
            id,
            title: self.title,
            date: self.date,
            kind: self.kind,
            status: self.status,
            importance: self.importance,
            related_tasks: self.related_tasks,
        }
    }
}

/// Partial update of a milestone. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestonePatch {
    /// New title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New due date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    /// New kind.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<MilestoneType>,
    /// New status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MilestoneStatus>,
    /// New importance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<Priority>,
    /// New related task list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_tasks: Option<Vec<TaskId>>,
}

impl MilestonePatch {
    /// Merges the supplied fields into `target`.
    pub fn apply(&self, target: &mut TimelineMilestone) {
        if let Some(title) = &self.title {
            target.title.clone_from(title);
        }
        if let Some(date) = self.date {
            target.date = date;
        }
        if let Some(kind) = self.kind {
            target.kind = kind;
        }
        if let Some(status) = self.status {
            target.status = status;
        }
        if let Some(importance) = self.importance {
            target.importance = importance;
        }
        if let Some(related_tasks) = &self.related_tasks {
            target.related_tasks.clone_from(related_tasks);
        }
    }
}
