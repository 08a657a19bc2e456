// Property-based tests for the calendar grid and countdown text

use chrono::{Datelike, Duration, Local, NaiveDate, TimeZone};
use event_planner::services::calendar::build_month;
use event_planner::utils::date::{days_in_month, first_weekday_offset, remaining_time};
use proptest::prelude::*;

proptest! {
    /// Leading blanks plus day cells fill whole weeks except for the tail,
    /// and day 1 lands in the column of its weekday.
    #[test]
    fn prop_month_tiles_seven_column_grid(
        year in 1900..2200i32,
        month in 1..=12u32,
    ) {
        let offset = first_weekday_offset(month, year);
        let days = days_in_month(month, year);
        prop_assert!(offset < 7);
        prop_assert!((28..=31).contains(&days));

        let total = offset + days;
        let rows = total.div_ceil(7);
        prop_assert!(rows * 7 - total < 7, "at most one partial row");

        let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        let last = NaiveDate::from_ymd_opt(year, month, days).unwrap();
        prop_assert!(last.succ_opt().map(|d| d.day0() == 0).unwrap_or(true));

        prop_assert_eq!(first.weekday().num_days_from_monday(), offset);
        prop_assert_eq!((offset + days - 1) % 7, last.weekday().num_days_from_monday());
    }

    /// The grid builder agrees with the date helpers.
    #[test]
    fn prop_build_month_matches_helpers(
        year in 1970..2100i32,
        month in 1..=12u32,
    ) {
        let today = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        let grid = build_month(month, year, &[], today);
        prop_assert_eq!(grid.leading_blanks, first_weekday_offset(month, year));
        prop_assert_eq!(grid.days.len() as u32, days_in_month(month, year));
        prop_assert!(grid.days[0].is_today);
    }

    /// Countdown components recombine to the whole-second difference.
    #[test]
    fn prop_remaining_time_recombines(ms in 0i64..10_000_000_000i64) {
        let now = Local.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).earliest().unwrap();
        let text = remaining_time(now + Duration::milliseconds(ms), now);

        let parts: Vec<i64> = text
            .split_whitespace()
            .filter_map(|word| word.parse().ok())
            .collect();
        prop_assert_eq!(parts.len(), 4);
        prop_assert!(parts[1] < 24 && parts[2] < 60 && parts[3] < 60);

        let total = parts[0] * 86_400 + parts[1] * 3_600 + parts[2] * 60 + parts[3];
        prop_assert_eq!(total, ms / 1_000);
    }
}
