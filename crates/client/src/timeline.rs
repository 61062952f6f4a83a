//! Timeline endpoints.

use filmflow_core::timeline::{
    MilestonePatch, NewMilestone, NewTask, TaskPatch, TimelineBoard, TimelineMilestone,
    TimelineTask,
};
use filmflow_shared::types::{MilestoneId, ProjectId, TaskId};
use reqwest::Method;
use tracing::info;

use crate::client::ApiClient;
use crate::error::ClientResult;

impl ApiClient {
    /// Lists a project's tasks.
    pub async fn list_tasks(&self, project: &ProjectId) -> ClientResult<Vec<TimelineTask>> {
        self.get_all(&format!("/projects/{project}/timeline/tasks/"))
            .await
    }

    /// Lists a project's milestones.
    pub async fn list_milestones(
        &self,
        project: &ProjectId,
    ) -> ClientResult<Vec<TimelineMilestone>> {
        self.get_all(&format!("/projects/{project}/timeline/milestones/"))
            .await
    }

    /// Applies a partial update to a task and returns the stored copy.
    pub async fn update_task(&self, id: &TaskId, patch: &TaskPatch) -> ClientResult<TimelineTask> {
        let updated = self
            .send_json(Method::PATCH, &format!("/timeline/tasks/{id}/"), patch)
            .await?;
        info!(task_id = %id, "Task updated on backend");
        Ok(updated)
    }

    /// Creates a task and returns it with its backend ID.
    pub async fn create_task(
        &self,
        project: &ProjectId,
        task: &NewTask,
    ) -> ClientResult<TimelineTask> {
        let created: TimelineTask = self
            .send_json(
                Method::POST,
                &format!("/projects/{project}/timeline/tasks/"),
                task,
            )
            .await?;
        info!(project_id = %project, task_id = %created.id, "Task created on backend");
        Ok(created)
    }

    /// Applies a partial update to a milestone and returns the stored copy.
    pub async fn update_milestone(
        &self,
        id: &MilestoneId,
        patch: &MilestonePatch,
    ) -> ClientResult<TimelineMilestone> {
        let updated = self
            .send_json(Method::PATCH, &format!("/timeline/milestones/{id}/"), patch)
            .await?;
        info!(milestone_id = %id, "Milestone updated on backend");
        Ok(updated)
    }

    /// Creates a milestone and returns it with its backend ID.
    pub async fn create_milestone(
        &self,
        project: &ProjectId,
        milestone: &NewMilestone,
    ) -> ClientResult<TimelineMilestone> {
        let created: TimelineMilestone = self
            .send_json(
                Method::POST,
                &format!("/projects/{project}/timeline/milestones/"),
                milestone,
            )
            .await?;
        info!(
            project_id = %project,
            milestone_id = %created.id,
            "Milestone created on backend"
        );
        Ok(created)
    }

    /// Loads tasks and milestones concurrently into a board.
    pub async fn load_timeline(&self, project: &ProjectId) -> ClientResult<TimelineBoard> {
        let (tasks, milestones) = tokio::try_join!(
            self.list_tasks(project),
            self.list_milestones(project)
        )?;

        info!(
            project_id = %project,
            tasks = tasks.len(),
            milestones = milestones.len(),
            "Timeline loaded"
        );
        Ok(TimelineBoard::new(tasks, milestones))
    }
}
