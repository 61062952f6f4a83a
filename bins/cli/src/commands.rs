//! Command handlers: load data, compute, render.

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use filmflow_client::ApiClient;
use filmflow_core::budget::BudgetBook;
use filmflow_core::{AnalyticsCache, AnalyticsWindows};
use filmflow_core::fixtures::{demo_budget, demo_timeline};
use filmflow_core::timeline::TimelineBoard;
use filmflow_shared::types::ProjectId;
use filmflow_shared::{AppConfig, AppError, Session};
use tracing::{debug, info, warn};

use crate::SourceArgs;
use crate::render;

/// Everything a command needs besides its own arguments.
pub struct Context {
    config: AppConfig,
    cache: AnalyticsCache,
    token: Option<String>,
    now: DateTime<Utc>,
}

impl Context {
    pub fn new(config: AppConfig, token: Option<String>, now: DateTime<Utc>) -> Self {
        let cache = AnalyticsCache::from_config(&config.analytics);
        Self {
            config,
            cache,
            token,
            now,
        }
    }

    fn windows(&self) -> AnalyticsWindows {
        AnalyticsWindows::from(&self.config.analytics)
    }

    fn client(&self) -> anyhow::Result<ApiClient> {
        let client = ApiClient::new(&self.config.api).context("Failed to build HTTP client")?;

        Ok(match &self.token {
            Some(token) => client.with_session(Session::from_access_token(token.clone())),
            None => {
                warn!("No access token supplied, sending anonymous requests");
                client
            }
        })
    }

    fn project(source: &SourceArgs) -> Result<ProjectId, AppError> {
        source
            .project
            .as_deref()
            .map(ProjectId::from)
            .ok_or_else(|| AppError::Validation("Either --project or --demo is required".into()))
    }

    async fn load_budget(&self, source: &SourceArgs) -> anyhow::Result<BudgetBook> {
        if source.demo {
            info!("Using demo budget");
            return Ok(demo_budget(self.now));
        }

        let project = Self::project(source)?;
        info!(project_id = %project, base_url = %self.config.api.base_url, "Loading budget");
        self.client()?
            .load_budget(&project)
            .await
            .with_context(|| format!("Failed to load budget for project {project}"))
    }

    async fn load_timeline(&self, source: &SourceArgs) -> anyhow::Result<TimelineBoard> {
        if source.demo {
            info!("Using demo timeline");
            return Ok(demo_timeline(self.now));
        }

        let project = Self::project(source)?;
        info!(project_id = %project, base_url = %self.config.api.base_url, "Loading timeline");
        self.client()?
            .load_timeline(&project)
            .await
            .with_context(|| format!("Failed to load timeline for project {project}"))
    }
}

/// `filmflow budget`
pub async fn budget(
    context: &Context,
    source: &SourceArgs,
    forecast_days: u32,
) -> anyhow::Result<String> {
    let book = context.load_budget(source).await?;
    let report = context
        .cache
        .budget_report(&book, context.now, forecast_days, &context.windows());
    debug!(cached = report.cached, "Budget report ready");
    let report = report.value;

    if source.json {
        return serde_json::to_string_pretty(&report).context("Failed to encode report");
    }
    Ok(render::budget_report(&report, context.config.display.currency))
}

/// `filmflow timeline`
pub async fn timeline(context: &Context, source: &SourceArgs) -> anyhow::Result<String> {
    let board = context.load_timeline(source).await?;
    let windows = context.windows();
    let analytics = context.cache.timeline_analytics(&board, context.now, &windows);
    debug!(cached = analytics.cached, "Timeline analytics ready");
    let analytics = analytics.value;

    if source.json {
        return serde_json::to_string_pretty(&analytics).context("Failed to encode analytics");
    }
    Ok(render::timeline_summary(&board, &analytics, context.now, &windows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn context() -> Context {
        Context::new(
            AppConfig::default(),
            None,
            Utc.with_ymd_and_hms(2024, 12, 15, 18, 30, 0).unwrap(),
        )
    }

    fn demo(json: bool) -> SourceArgs {
        SourceArgs {
            project: None,
            demo: true,
            json,
        }
    }

    #[tokio::test]
    async fn test_demo_budget_json() {
        let output = budget(&context(), &demo(true), 14).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["analytics"]["total_allocated"], "5000000");
        assert_eq!(value["forecast"]["days"], 14);
        assert_eq!(value["breakdown"].as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_demo_timeline_text() {
        let output = timeline(&context(), &demo(false)).await.unwrap();

        assert!(output.contains("Principal photography"));
        assert!(output.contains("Wrap of principal photography"));
    }

    #[tokio::test]
    async fn test_missing_project_is_error() {
        let source = SourceArgs {
            project: None,
            demo: false,
            json: false,
        };

        let err = budget(&context(), &source, 30).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::Validation(_))
        ));
    }
}
