//! Display formatting for dashboard figures.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::{Currency, Money};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Formats an amount as whole currency units, e.g. `1,200,000 CZK`.
#[must_use]
pub fn format_currency(amount: Decimal, currency: Currency) -> String {
    Money::new(amount, currency).to_string()
}

/// Formats a percentage with a fixed number of decimals, e.g. `42.5%`.
#[must_use]
pub fn format_percentage(value: Decimal, decimals: u32) -> String {
    let rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.prec$}%", prec = decimals as usize)
}

/// Formats `current / total` as a whole percentage.
#[must_use]
pub fn format_progress(current: Decimal, total: Decimal) -> String {
    if total.is_zero() {
        return "0%".to_string();
    }
    format_percentage(current / total * Decimal::ONE_HUNDRED, 0)
}

/// Formats a span of days in the coarsest sensible unit.
#[must_use]
pub fn format_duration(days: i64) -> String {
    match days {
        i64::MIN..=0 => "less than a day".to_string(),
        1 => "1 day".to_string(),
        2..=6 => format!("{days} days"),
        7..=29 => plural((days + 3) / 7, "week"),
        30..=364 => plural((days + 15) / 30, "month"),
        _ => plural((days + 182) / 365, "year"),
    }
}

/// Formats `date` relative to `now` (today, in 3 days, 2 weeks ago, ...).
///
/// Dates more than 30 days away fall back to an absolute date.
#[must_use]
pub fn format_relative_time(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff_ms = (date - now).num_milliseconds().abs();
    let days = (diff_ms + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY;
    let future = date > now;

    match days {
        0 => "today".to_string(),
        1 if future => "tomorrow".to_string(),
        1 => "yesterday".to_string(),
        2..=7 if future => format!("in {days} days"),
        2..=7 => format!("{days} days ago"),
        8..=30 => {
            let weeks = plural((days + 6) / 7, "week");
            if future {
                format!("in {weeks}")
            } else {
                format!("{weeks} ago")
            }
        }
        _ => date.format("%-d %B %Y").to_string(),
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(42.46), 1, "42.5%")]
    #[case(dec!(50), 1, "50.0%")]
    #[case(dec!(99.5), 0, "100%")]
    #[case(dec!(0), 2, "0.00%")]
    fn test_format_percentage(
        #[case] value: Decimal,
        #[case] decimals: u32,
        #[case] expected: &str,
    ) {
        assert_eq!(format_percentage(value, decimals), expected);
    }

    #[test]
    fn test_format_progress() {
        assert_eq!(format_progress(dec!(3), dec!(4)), "75%");
        assert_eq!(format_progress(dec!(3), dec!(0)), "0%");
    }

    #[rstest]
    #[case(0, "less than a day")]
    #[case(1, "1 day")]
    #[case(5, "5 days")]
    #[case(7, "1 week")]
    #[case(20, "3 weeks")]
    #[case(45, "2 months")]
    #[case(400, "1 year")]
    #[case(900, "2 years")]
    fn test_format_duration(#[case] days: i64, #[case] expected: &str) {
        assert_eq!(format_duration(days), expected);
    }

    #[test]
    fn test_format_relative_time() {
        let now = Utc.with_ymd_and_hms(2024, 12, 15, 12, 0, 0).unwrap();

        assert_eq!(format_relative_time(now, now), "today");
        assert_eq!(format_relative_time(now + Duration::hours(5), now), "tomorrow");
        assert_eq!(format_relative_time(now - Duration::hours(5), now), "yesterday");
        assert_eq!(format_relative_time(now + Duration::days(3), now), "in 3 days");
        assert_eq!(format_relative_time(now - Duration::days(3), now), "3 days ago");
        assert_eq!(format_relative_time(now - Duration::days(10), now), "2 weeks ago");
        assert_eq!(format_relative_time(now + Duration::days(14), now), "in 2 weeks");
        assert_eq!(
            format_relative_time(now - Duration::days(60), now),
            "16 October 2024"
        );
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(dec!(780000), Currency::Czk), "780,000 CZK");
    }
}
