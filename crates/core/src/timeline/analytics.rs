//! Timeline analytics aggregation.

use chrono::{DateTime, Utc};
use filmflow_shared::types::TaskId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::delay::ScheduleDelay;
use super::types::{MilestoneStatus, Phase, Priority, TaskStatus, TimelineMilestone, TimelineTask};
use crate::windows::{AnalyticsWindows, days_after};

/// Mean task progress per production phase; zero for a phase with no tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseProgress {
    /// Pre-production.
    pub pre_production: Decimal,
    /// Production.
    pub production: Decimal,
    /// Post-production.
    pub post_production: Decimal,
    /// Admin.
    pub admin: Decimal,
}

impl PhaseProgress {
    /// Progress of a single phase.
    #[must_use]
    pub fn get(&self, phase: Phase) -> Decimal {
        match phase {
            Phase::PreProduction => self.pre_production,
            Phase::Production => self.production,
            Phase::PostProduction => self.post_production,
            Phase::Admin => self.admin,
        }
    }
}

/// Summary metrics over a production's tasks and milestones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineAnalytics {
    /// Number of tasks.
    pub total_tasks: usize,
    /// Tasks with status completed.
    pub completed_tasks: usize,
    /// Tasks with status in progress.
    pub in_progress_tasks: usize,
    /// Tasks with status delayed.
    pub delayed_tasks: usize,
    /// Tasks with status blocked.
    pub blocked_tasks: usize,
    /// Mean task progress, zero without tasks.
    pub overall_progress: Decimal,
    /// Upcoming milestones due within the horizon.
    pub upcoming_milestones: usize,
    /// Critical-priority tasks not yet completed.
    pub critical_tasks: usize,
    /// Tasks worth watching; see [`highlighted_tasks`].
    pub highlighted_tasks: Vec<TaskId>,
    /// Unfinished tasks whose end date has passed.
    pub overdue_tasks: usize,
    /// Mean progress per phase.
    pub phase_progress: PhaseProgress,
}

impl TimelineAnalytics {
    /// Computes analytics with the default 30-day milestone horizon.
    #[must_use]
    pub fn compute(
        tasks: &[TimelineTask],
        milestones: &[TimelineMilestone],
        now: DateTime<Utc>,
    ) -> Self {
        Self::compute_with(tasks, milestones, now, &AnalyticsWindows::default())
    }

    /// Computes analytics with an explicit milestone horizon.
    #[must_use]
    pub fn compute_with(
        tasks: &[TimelineTask],
        milestones: &[TimelineMilestone],
        now: DateTime<Utc>,
        windows: &AnalyticsWindows,
    ) -> Self {
        let count_status = |status: TaskStatus| tasks.iter().filter(|t| t.status == status).count();

        // No lower bound: upcoming milestones already in the past still count.
        let horizon = days_after(now, windows.milestone_horizon_days);
        let upcoming_milestones = milestones
            .iter()
            .filter(|m| m.status == MilestoneStatus::Upcoming && m.date <= horizon)
            .count();

        let critical_tasks = tasks
            .iter()
            .filter(|t| t.priority == Priority::Critical && t.status != TaskStatus::Completed)
            .count();

        let overdue_tasks = tasks
            .iter()
            .filter(|t| t.status != TaskStatus::Completed)
            .filter(|t| ScheduleDelay::between(t.end_date, now).is_delayed)
            .count();

        let phase_mean = |phase: Phase| mean_progress(tasks.iter().filter(|t| t.category == phase));

        Self {
            total_tasks: tasks.len(),
            completed_tasks: count_status(TaskStatus::Completed),
            in_progress_tasks: count_status(TaskStatus::InProgress),
            delayed_tasks: count_status(TaskStatus::Delayed),
            blocked_tasks: count_status(TaskStatus::Blocked),
            overall_progress: mean_progress(tasks.iter()),
            upcoming_milestones,
            critical_tasks,
            highlighted_tasks: highlighted_tasks(tasks),
            overdue_tasks,
            phase_progress: PhaseProgress {
                pre_production: phase_mean(Phase::PreProduction),
                production: phase_mean(Phase::Production),
                post_production: phase_mean(Phase::PostProduction),
                admin: phase_mean(Phase::Admin),
            },
        }
    }
}

/// Tasks that are critical, have no dependencies, or are blocked, in input
/// order.
///
/// A flat filter, not a longest-path computation over the dependency graph.
#[must_use]
pub fn highlighted_tasks(tasks: &[TimelineTask]) -> Vec<TaskId> {
    tasks
        .iter()
        .filter(|t| {
            t.priority == Priority::Critical
                || t.dependencies.is_empty()
                || t.status == TaskStatus::Blocked
        })
        .map(|t| t.id.clone())
        .collect()
}

fn mean_progress<'a>(tasks: impl Iterator<Item = &'a TimelineTask>) -> Decimal {
    let (sum, count) = tasks.fold((Decimal::ZERO, 0_u32), |(sum, count), task| {
        (sum + Decimal::from(task.progress), count + 1)
    });

    if count == 0 {
        Decimal::ZERO
    } else {
        sum / Decimal::from(count)
    }
}
