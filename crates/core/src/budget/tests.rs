//! Property-based tests for budget module.

use chrono::{DateTime, Duration, TimeZone, Utc};
use filmflow_shared::types::{CategoryId, TransactionId};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::analytics::{BURN_RATE_DP, BudgetAnalytics, burn_rate};
use super::book::BudgetBook;
use super::types::{
    BudgetCategory, BudgetTransaction, CategoryStatus, NewTransaction, TransactionType,
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 12, 15, 18, 30, 0).unwrap()
}

/// Strategy for amounts from 0.00 to 10,000,000.00.
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn status() -> impl Strategy<Value = CategoryStatus> {
    prop_oneof![
        Just(CategoryStatus::OnTrack),
        Just(CategoryStatus::Warning),
        Just(CategoryStatus::Critical),
    ]
}

fn kind() -> impl Strategy<Value = TransactionType> {
    prop_oneof![
        Just(TransactionType::Expense),
        Just(TransactionType::Adjustment),
        Just(TransactionType::Transfer),
    ]
}

fn category_strategy() -> impl Strategy<Value = BudgetCategory> {
    (0usize..4, amount(), amount(), amount(), status(), 0i64..30).prop_map(
        |(name, allocated, spent, forecasted, status, age_days)| BudgetCategory {
            id: CategoryId::generate(),
            category: format!("Department {name}"),
            allocated,
            spent,
            remaining: allocated - spent,
            forecasted,
            status,
            last_updated: Some(now() - Duration::days(age_days)),
        },
    )
}

fn transaction_strategy() -> impl Strategy<Value = BudgetTransaction> {
    (0usize..4, amount(), kind(), 0i64..90).prop_map(|(name, amount, kind, age_days)| {
        BudgetTransaction {
            id: TransactionId::generate(),
            date: now() - Duration::days(age_days),
            amount: -amount,
            description: "Generated".to_string(),
            category: format!("Department {name}"),
            kind,
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Analytics are a pure function of their inputs.
    #[test]
    fn prop_analytics_idempotent(
        categories in prop::collection::vec(category_strategy(), 0..12),
        transactions in prop::collection::vec(transaction_strategy(), 0..24),
    ) {
        let first = BudgetAnalytics::compute(&categories, &transactions, now());
        let second = BudgetAnalytics::compute(&categories, &transactions, now());

        prop_assert_eq!(first, second);
    }

    /// Utilization is spent / allocated * 100, or zero without allocation.
    #[test]
    fn prop_utilization_rate(
        categories in prop::collection::vec(category_strategy(), 0..12),
    ) {
        let analytics = BudgetAnalytics::compute(&categories, &[], now());

        if analytics.total_allocated.is_zero() {
            prop_assert_eq!(analytics.utilization_rate, Decimal::ZERO);
        } else {
            prop_assert_eq!(
                analytics.utilization_rate,
                analytics.total_spent / analytics.total_allocated * dec!(100)
            );
        }
    }

    /// Status counters never exceed the number of categories.
    #[test]
    fn prop_counts_bounded(
        categories in prop::collection::vec(category_strategy(), 0..12),
    ) {
        let analytics = BudgetAnalytics::compute(&categories, &[], now());

        let flagged = analytics.categories_warning + analytics.categories_critical;
        prop_assert!(flagged <= categories.len());
        prop_assert!(analytics.categories_over_budget <= categories.len());
        prop_assert!(analytics.recently_modified <= categories.len());
    }

    /// Burn rate equals in-window expense spend divided by the window.
    #[test]
    fn prop_burn_rate_matches_window_sum(
        transactions in prop::collection::vec(transaction_strategy(), 0..24),
    ) {
        let cutoff = now() - Duration::days(30);
        let expected: Decimal = transactions
            .iter()
            .filter(|t| t.kind == TransactionType::Expense && t.date > cutoff)
            .map(|t| t.amount.abs())
            .sum::<Decimal>();
        let expected = (expected / dec!(30)).round_dp(BURN_RATE_DP);

        prop_assert_eq!(burn_rate(&transactions, now(), 30), expected);
        prop_assert!(burn_rate(&transactions, now(), 30) >= Decimal::ZERO);
    }

    /// Forecast arithmetic is internally consistent.
    #[test]
    fn prop_forecast_consistent(
        categories in prop::collection::vec(category_strategy(), 1..8),
        transactions in prop::collection::vec(transaction_strategy(), 0..24),
        days in 0u32..365,
    ) {
        let analytics = BudgetAnalytics::compute(&categories, &transactions, now());
        let forecast = analytics.forecast(days, now());

        prop_assert_eq!(forecast.projected_total - forecast.projected_spend, analytics.total_spent);
        prop_assert_eq!(forecast.is_over_budget, forecast.projected_remaining < Decimal::ZERO);

        let weeks = forecast.cash_flow_by_week.len();
        prop_assert!(weeks <= days.div_ceil(7) as usize);
        if weeks < days.div_ceil(7) as usize {
            prop_assert_eq!(forecast.cash_flow_by_week[weeks - 1].remaining, Decimal::ZERO);
        }
    }

    /// An expense charges exactly the categories carrying its name.
    #[test]
    fn prop_expense_charges_by_name(
        categories in prop::collection::vec(category_strategy(), 1..8),
        charge in amount(),
        target in 0usize..4,
    ) {
        let mut book = BudgetBook::new(categories.clone(), Vec::new());
        let name = format!("Department {target}");

        book.add_transaction(NewTransaction {
            date: now(),
            amount: -charge,
            description: "Generated".to_string(),
            category: name.clone(),
            kind: TransactionType::Expense,
        });

        for (before, after) in categories.iter().zip(book.categories()) {
            if before.category == name {
                prop_assert_eq!(after.spent, before.spent + charge);
                prop_assert_eq!(after.remaining, after.allocated - after.spent);
            } else {
                prop_assert_eq!(after, before);
            }
        }
    }
}
