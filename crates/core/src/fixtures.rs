//! Demo production data for offline mode and tests.
//!
//! Timestamps are placed relative to the supplied reference time so that
//! window-based metrics look the same whenever the demo is run.

use chrono::{DateTime, Duration, Utc};
use filmflow_shared::types::{CategoryId, MilestoneId, TaskId, TransactionId};
use rust_decimal::Decimal;

use crate::budget::{
    BudgetBook, BudgetCategory, BudgetTransaction, CategoryStatus, TransactionType,
};
use crate::timeline::{
    MilestoneStatus, MilestoneType, Phase, Priority, TaskStatus, TimelineBoard, TimelineMilestone,
    TimelineTask,
};

fn ago(now: DateTime<Utc>, days: i64, hours: i64, minutes: i64) -> DateTime<Utc> {
    now - Duration::days(days) - Duration::hours(hours) - Duration::minutes(minutes)
}

fn in_days(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    now + Duration::days(days)
}

fn category(
    id: &str,
    name: &str,
    amounts: [i64; 3],
    status: CategoryStatus,
    last_updated: DateTime<Utc>,
) -> BudgetCategory {
    let [allocated, spent, forecasted] = amounts.map(Decimal::from);
    BudgetCategory {
        id: CategoryId::from(id),
        category: name.to_string(),
        allocated,
        spent,
        remaining: allocated - spent,
        forecasted,
        status,
        last_updated: Some(last_updated),
    }
}

fn expense(
    id: &str,
    date: DateTime<Utc>,
    amount: i64,
    description: &str,
    category: &str,
) -> BudgetTransaction {
    BudgetTransaction {
        id: TransactionId::from(id),
        date,
        amount: Decimal::from(amount),
        description: description.to_string(),
        category: category.to_string(),
        kind: TransactionType::Expense,
    }
}

/// A mid-shoot feature film budget: six departments, one over budget, and
/// twelve expenses from the last week and a half.
#[must_use]
pub fn demo_budget(now: DateTime<Utc>) -> BudgetBook {
    const CAMERA: &str = "Camera & Lighting";
    const CAST: &str = "Cast & Crew";
    const LOCATIONS: &str = "Locations";
    const POST: &str = "Post Production";
    const EQUIPMENT: &str = "Equipment";
    const CATERING: &str = "Catering & Transport";

    let categories = vec![
        category(
            "cat-1",
            CAMERA,
            [1_200_000, 780_000, 1_150_000],
            CategoryStatus::OnTrack,
            ago(now, 0, 8, 0),
        ),
        category(
            "cat-2",
            CAST,
            [1_500_000, 920_000, 1_480_000],
            CategoryStatus::Warning,
            ago(now, 1, 2, 15),
        ),
        category(
            "cat-3",
            LOCATIONS,
            [800_000, 450_000, 750_000],
            CategoryStatus::OnTrack,
            ago(now, 2, 7, 10),
        ),
        category(
            "cat-4",
            POST,
            [700_000, 150_000, 680_000],
            CategoryStatus::OnTrack,
            ago(now, 4, 9, 0),
        ),
        category(
            "cat-5",
            EQUIPMENT,
            [500_000, 520_000, 550_000],
            CategoryStatus::Critical,
            ago(now, 0, 4, 45),
        ),
        category(
            "cat-6",
            CATERING,
            [300_000, 80_000, 290_000],
            CategoryStatus::OnTrack,
            ago(now, 1, 0, 30),
        ),
    ];

    let transactions = vec![
        expense("tx-1", ago(now, 1, 4, 10), -45_000, "RED camera rental, week 3", CAMERA),
        expense("tx-2", ago(now, 3, 9, 15), -28_000, "LED panel set purchase", CAMERA),
        expense("tx-3", ago(now, 5, 1, 45), -15_000, "Lens filters and accessories", CAMERA),
        expense("tx-4", ago(now, 0, 10, 30), -85_000, "Lead cast, week 4", CAST),
        expense("tx-5", ago(now, 2, 6, 0), -32_000, "Costume and make-up artists", CAST),
        expense("tx-6", ago(now, 3, 4, 30), -65_000, "Historic castle rental, 3 days", LOCATIONS),
        expense("tx-7", ago(now, 7, 8, 15), -25_000, "City centre filming permit", LOCATIONS),
        expense("tx-8", ago(now, 5, 3, 10), -38_000, "DaVinci Resolve Studio license", POST),
        expense("tx-9", ago(now, 0, 7, 0), -42_000, "Spare batteries and memory cards", EQUIPMENT),
        expense("tx-10", ago(now, 1, 2, 30), -35_000, "Drone purchase", EQUIPMENT),
        expense("tx-11", ago(now, 1, 0, 45), -18_000, "Crew catering, week 4", CATERING),
        expense("tx-12", ago(now, 2, 11, 0), -12_000, "Equipment transport to location", CATERING),
    ];

    BudgetBook::new(categories, transactions)
}

struct TaskSpec {
    id: &'static str,
    title: &'static str,
    window: (i64, i64),
    progress: u8,
    status: TaskStatus,
    priority: Priority,
    dependencies: &'static [&'static str],
    phase: Phase,
}

impl TaskSpec {
    fn build(&self, now: DateTime<Utc>) -> TimelineTask {
        let (start, end) = self.window;
        TimelineTask {
            id: TaskId::from(self.id),
            title: self.title.to_string(),
            start_date: in_days(now, start),
            end_date: in_days(now, end),
            duration: u32::try_from(end - start).unwrap_or(0),
            progress: self.progress,
            status: self.status,
            priority: self.priority,
            dependencies: self.dependencies.iter().copied().map(TaskId::from).collect(),
            category: self.phase,
        }
    }
}

const DEMO_TASKS: [TaskSpec; 10] = [
    TaskSpec {
        id: "task-1",
        title: "Script breakdown and scheduling",
        window: (-60, -45),
        progress: 100,
        status: TaskStatus::Completed,
        priority: Priority::High,
        dependencies: &[],
        phase: Phase::PreProduction,
    },
    TaskSpec {
        id: "task-2",
        title: "Casting",
        window: (-55, -35),
        progress: 100,
        status: TaskStatus::Completed,
        priority: Priority::Critical,
        dependencies: &["task-1"],
        phase: Phase::PreProduction,
    },
    TaskSpec {
        id: "task-3",
        title: "Location scouting",
        window: (-50, -30),
        progress: 100,
        status: TaskStatus::Completed,
        priority: Priority::Medium,
        dependencies: &["task-1"],
        phase: Phase::PreProduction,
    },
    TaskSpec {
        id: "task-4",
        title: "Principal photography",
        window: (-25, 10),
        progress: 70,
        status: TaskStatus::InProgress,
        priority: Priority::Critical,
        dependencies: &["task-2", "task-3"],
        phase: Phase::Production,
    },
    TaskSpec {
        id: "task-5",
        title: "Second unit aerial shots",
        window: (-10, -2),
        progress: 60,
        status: TaskStatus::Delayed,
        priority: Priority::Medium,
        dependencies: &["task-4"],
        phase: Phase::Production,
    },
    TaskSpec {
        id: "task-6",
        title: "Night shoot permits",
        window: (-15, 5),
        progress: 40,
        status: TaskStatus::Blocked,
        priority: Priority::High,
        dependencies: &["task-3"],
        phase: Phase::Admin,
    },
    TaskSpec {
        id: "task-7",
        title: "Dailies review and assembly edit",
        window: (-20, 20),
        progress: 35,
        status: TaskStatus::InProgress,
        priority: Priority::High,
        dependencies: &["task-4"],
        phase: Phase::PostProduction,
    },
    TaskSpec {
        id: "task-8",
        title: "Sound design and mix",
        window: (15, 45),
        progress: 0,
        status: TaskStatus::NotStarted,
        priority: Priority::Medium,
        dependencies: &["task-7"],
        phase: Phase::PostProduction,
    },
    TaskSpec {
        id: "task-9",
        title: "Color grading",
        window: (20, 40),
        progress: 0,
        status: TaskStatus::NotStarted,
        priority: Priority::High,
        dependencies: &["task-7"],
        phase: Phase::PostProduction,
    },
    TaskSpec {
        id: "task-10",
        title: "Insurance and contracts",
        window: (-60, 60),
        progress: 50,
        status: TaskStatus::InProgress,
        priority: Priority::Low,
        dependencies: &[],
        phase: Phase::Admin,
    },
];

fn milestone(
    id: &str,
    title: &str,
    date: DateTime<Utc>,
    kind: MilestoneType,
    status: MilestoneStatus,
    importance: Priority,
    related: &[&str],
) -> TimelineMilestone {
    TimelineMilestone {
        id: MilestoneId::from(id),
        title: title.to_string(),
        date,
        kind,
        status,
        importance,
        related_tasks: related.iter().copied().map(TaskId::from).collect(),
    }
}

/// A production timeline midway through the shoot: pre-production done,
/// photography running, post-production starting, one blocked permit.
#[must_use]
pub fn demo_timeline(now: DateTime<Utc>) -> TimelineBoard {
    let tasks = DEMO_TASKS.iter().map(|spec| spec.build(now)).collect();

    let milestones = vec![
        milestone(
            "milestone-1",
            "Cast approved",
            in_days(now, -35),
            MilestoneType::Approval,
            MilestoneStatus::Completed,
            Priority::High,
            &["task-2"],
        ),
        milestone(
            "milestone-2",
            "Wrap of principal photography",
            in_days(now, 10),
            MilestoneType::Deadline,
            MilestoneStatus::Upcoming,
            Priority::Critical,
            &["task-4"],
        ),
        milestone(
            "milestone-3",
            "Director's cut review",
            in_days(now, 25),
            MilestoneType::Review,
            MilestoneStatus::Upcoming,
            Priority::High,
            &["task-7"],
        ),
        milestone(
            "milestone-4",
            "Festival delivery",
            in_days(now, 60),
            MilestoneType::Delivery,
            MilestoneStatus::Upcoming,
            Priority::Critical,
            &["task-8", "task-9"],
        ),
        milestone(
            "milestone-5",
            "Night shoot permits granted",
            in_days(now, -3),
            MilestoneType::Deadline,
            MilestoneStatus::Missed,
            Priority::High,
            &["task-6"],
        ),
    ];

    TimelineBoard::new(tasks, milestones)
}
