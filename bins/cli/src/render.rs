//! Plain-text rendering of reports.

use chrono::{DateTime, Duration, Utc};
use filmflow_core::AnalyticsWindows;
use filmflow_core::budget::{BudgetReport, CategoryStatus, VarianceStatus};
use filmflow_core::timeline::{
    MilestoneStatus, Phase, ScheduleDelay, TaskStatus, TimelineAnalytics, TimelineBoard,
};
use filmflow_shared::format::{
    format_currency, format_duration, format_percentage, format_relative_time,
};
use filmflow_shared::types::Currency;

/// Renders the budget summary, forecast and category table.
pub fn budget_report(report: &BudgetReport, currency: Currency) -> String {
    let analytics = &report.analytics;
    let forecast = &report.forecast;
    let money = |amount| format_currency(amount, currency);

    let mut lines = vec![
        format!("Budget as of {}", report.as_of.format("%-d %B %Y %H:%M UTC")),
        String::new(),
        format!("  Allocated       {}", money(analytics.total_allocated)),
        format!("  Spent           {}", money(analytics.total_spent)),
        format!("  Forecasted      {}", money(analytics.total_forecasted)),
        format!(
            "  Utilization     {}",
            format_percentage(analytics.utilization_rate, 1)
        ),
        format!("  Variance        {}", money(analytics.forecast_variance)),
        format!("  Burn rate       {} / day", money(analytics.burn_rate)),
        format!(
            "  Categories      {} over budget, {} warning, {} critical",
            analytics.categories_over_budget,
            analytics.categories_warning,
            analytics.categories_critical
        ),
        format!("  Recently edited {}", analytics.recently_modified),
        String::new(),
        format!("Forecast, next {} days", forecast.days),
        format!("  Projected spend {}", money(forecast.projected_spend)),
        format!("  Projected total {}", money(forecast.projected_total)),
        format!("  Remaining       {}", money(forecast.projected_remaining)),
    ];

    match (forecast.days_to_completion, forecast.completion_date) {
        (Some(days), Some(date)) => lines.push(format!(
            "  Budget exhausted in {} ({})",
            format_duration(days),
            date.format("%-d %B %Y")
        )),
        _ => lines.push("  No spending in the burn window".to_string()),
    }
    if forecast.is_over_budget {
        lines.push("  Projected to exceed the allocation".to_string());
    }

    lines.push(String::new());
    lines.push("Categories".to_string());
    for row in &report.breakdown {
        lines.push(format!(
            "  {:<24} {:>15} {:>15} {:>7}  {}",
            row.category,
            money(row.spent),
            money(row.allocated),
            format_percentage(row.utilization_percent, 0),
            flag(row.status, row.variance_status)
        ));
    }

    lines.join("\n")
}

/// Renders timeline progress, highlighted tasks and upcoming milestones.
pub fn timeline_summary(
    board: &TimelineBoard,
    analytics: &TimelineAnalytics,
    now: DateTime<Utc>,
    windows: &AnalyticsWindows,
) -> String {
    let mut lines = vec![
        format!(
            "Timeline: {} tasks, {} overall",
            analytics.total_tasks,
            format_percentage(analytics.overall_progress, 1)
        ),
        format!(
            "  {} completed, {} in progress, {} delayed, {} blocked",
            analytics.completed_tasks,
            analytics.in_progress_tasks,
            analytics.delayed_tasks,
            analytics.blocked_tasks
        ),
        format!(
            "  {} critical open, {} overdue",
            analytics.critical_tasks, analytics.overdue_tasks
        ),
        String::new(),
        "Phases".to_string(),
    ];

    for phase in Phase::ALL {
        lines.push(format!(
            "  {:<16} {:>6}",
            phase_label(phase),
            format_percentage(analytics.phase_progress.get(phase), 0)
        ));
    }

    lines.push(String::new());
    lines.push("Highlighted tasks".to_string());
    for task in analytics
        .highlighted_tasks
        .iter()
        .filter_map(|id| board.task(id))
    {
        let delay = ScheduleDelay::between(task.end_date, now);
        let overdue = if task.status != TaskStatus::Completed && delay.is_delayed {
            format!(", {} overdue", format_duration(delay.delay_days))
        } else {
            String::new()
        };
        lines.push(format!(
            "  {:<36} {:>3}% {}{overdue}",
            task.title,
            task.progress,
            status_label(task.status)
        ));
    }

    let horizon = now
        .checked_add_signed(Duration::days(i64::from(windows.milestone_horizon_days)))
        .unwrap_or(DateTime::<Utc>::MAX_UTC);
    lines.push(String::new());
    lines.push(format!(
        "Upcoming milestones ({} in the next {} days)",
        analytics.upcoming_milestones, windows.milestone_horizon_days
    ));
    for milestone in board
        .milestones()
        .iter()
        .filter(|m| m.status == MilestoneStatus::Upcoming && m.date <= horizon)
    {
        lines.push(format!(
            "  {:<36} {}",
            milestone.title,
            format_relative_time(milestone.date, now)
        ));
    }

    lines.join("\n")
}

fn flag(status: CategoryStatus, variance: VarianceStatus) -> &'static str {
    match (status, variance) {
        (_, VarianceStatus::Unfavorable) => "OVER",
        (CategoryStatus::Critical, _) => "critical",
        (CategoryStatus::Warning, _) => "warning",
        (CategoryStatus::OnTrack, _) => "",
    }
}

fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::PreProduction => "Pre-production",
        Phase::Production => "Production",
        Phase::PostProduction => "Post-production",
        Phase::Admin => "Admin",
    }
}

fn status_label(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::NotStarted => "not started",
        TaskStatus::InProgress => "in progress",
        TaskStatus::Completed => "completed",
        TaskStatus::Delayed => "delayed",
        TaskStatus::Blocked => "blocked",
    }
}
