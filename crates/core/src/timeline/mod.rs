//! Production timeline: task progress, milestones and schedule slippage.

pub mod analytics;
pub mod board;
pub mod delay;
pub mod types;

#[cfg(test)]
mod tests;

pub use analytics::{PhaseProgress, TimelineAnalytics, highlighted_tasks};
pub use board::TimelineBoard;
pub use delay::ScheduleDelay;
pub use types::{
    MilestonePatch, MilestoneStatus, MilestoneType, NewMilestone, NewTask, Phase, Priority,
    TaskPatch, TaskStatus, TimelineMilestone, TimelineTask,
};
