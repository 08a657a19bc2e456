use chrono::{Datelike, Local, NaiveDate, TimeZone};

use super::{MONTH_NAMES, WEEKDAY_NAMES};
use crate::models::event::Event;
use crate::utils::date::{days_in_month, first_weekday_offset, start_of_day_in};

/// Visual state of a day cell, highest precedence first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayHighlight {
    Today,
    WithinSpan,
    StartsHere,
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Short weekday label, e.g. "Mon"
    pub weekday: &'static str,
    pub is_today: bool,
    /// Some event starts on this calendar day
    pub is_start_on_day: bool,
    /// Local midnight of this day lies inside some event's [start, end]
    pub is_within_span: bool,
    /// Events starting on this day; span-only days are not counted
    pub event_count: usize,
}

impl DayCell {
    fn new(date: NaiveDate, events: &[Event], today: NaiveDate) -> Self {
        let weekday = WEEKDAY_NAMES[date.weekday().num_days_from_monday() as usize];
        let event_count = events.iter().filter(|e| starts_on(e, date)).count();

        Self {
            date,
            weekday,
            is_today: date == today,
            is_start_on_day: event_count > 0,
            is_within_span: events.iter().any(|e| spans(e, date)),
            event_count,
        }
    }

    /// Today's marker is never hidden by an event colour.
    pub fn highlight(&self) -> DayHighlight {
        if self.is_today {
            DayHighlight::Today
        } else if self.is_within_span {
            DayHighlight::WithinSpan
        } else if self.is_start_on_day {
            DayHighlight::StartsHere
        } else {
            DayHighlight::Default
        }
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }
}

/// One month laid out on a Monday-first 7-column grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    /// 1-12
    pub month: u32,
    pub name: &'static str,
    /// Blank cells before day 1
    pub leading_blanks: u32,
    pub days: Vec<DayCell>,
}

impl MonthGrid {
    /// Number of grid rows needed for the leading blanks plus the days.
    pub fn week_rows(&self) -> usize {
        (self.leading_blanks as usize + self.days.len()).div_ceil(7)
    }
}

pub fn build_month(month: u32, year: i32, events: &[Event], today: NaiveDate) -> MonthGrid {
    let days = (1..=days_in_month(month, year))
        .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
        .map(|date| DayCell::new(date, events, today))
        .collect();

    MonthGrid {
        year,
        month,
        name: MONTH_NAMES[(month as usize).saturating_sub(1) % 12],
        leading_blanks: first_weekday_offset(month, year),
        days,
    }
}

/// All twelve months of `year`.
pub fn build_year(year: i32, events: &[Event], today: NaiveDate) -> Vec<MonthGrid> {
    (1..=12)
        .map(|month| build_month(month, year, events, today))
        .collect()
}

/// Events shown when `date` is clicked: those spanning it or starting on it,
/// in collection order.
pub fn events_on_day(events: &[Event], date: NaiveDate) -> Vec<&Event> {
    events
        .iter()
        .filter(|e| spans(e, date) || starts_on(e, date))
        .collect()
}

fn starts_on(event: &Event, date: NaiveDate) -> bool {
    event.start.date_naive() == date
}

fn spans(event: &Event, date: NaiveDate) -> bool {
    spans_in(&Local, event, date)
}

fn spans_in<Tz: TimeZone>(tz: &Tz, event: &Event, date: NaiveDate) -> bool {
    start_of_day_in(tz, date)
        .map(|midnight| midnight.with_timezone(&Local))
        .is_some_and(|midnight| midnight >= event.start && midnight <= event.end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use chrono_tz::America::Santiago;
    use pretty_assertions::assert_eq;

    fn at(m: u32, d: u32, h: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, m, d, h, 0, 0).earliest().unwrap()
    }

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, m, d).unwrap()
    }

    fn event(id: i64, name: &str, start: DateTime<Local>, end: DateTime<Local>) -> Event {
        Event {
            id,
            name: name.to_string(),
            start,
            end,
        }
    }

    fn cell(grid: &MonthGrid, day: u32) -> &DayCell {
        &grid.days[day as usize - 1]
    }

    #[test]
    fn test_build_year_has_twelve_months() {
        let year = build_year(2026, &[], date(1, 1));
        assert_eq!(year.len(), 12);
        assert_eq!(year[1].name, "February");
        assert_eq!(year[1].days.len(), 28);
    }

    #[test]
    fn test_month_leading_blanks_and_weekdays() {
        // October 2026 starts on a Thursday
        let grid = build_month(10, 2026, &[], date(1, 1));
        assert_eq!(grid.leading_blanks, 3);
        assert_eq!(cell(&grid, 1).weekday, "Thu");
        assert_eq!(cell(&grid, 5).weekday, "Mon");
        assert_eq!(grid.week_rows(), 5);
    }

    #[test]
    fn test_start_day_counts_events() {
        let events = vec![
            event(1, "Morning", at(3, 10, 9), at(3, 10, 10)),
            event(2, "Evening", at(3, 10, 19), at(3, 10, 20)),
        ];
        let grid = build_month(3, 2026, &events, date(1, 1));
        let day = cell(&grid, 10);
        assert!(day.is_start_on_day);
        assert_eq!(day.event_count, 2);
        assert!(!day.is_within_span, "midnight precedes both starts");
        assert_eq!(day.highlight(), DayHighlight::StartsHere);
    }

    #[test]
    fn test_multi_day_span() {
        let events = vec![event(1, "Trip", at(5, 4, 12), at(5, 7, 12))];
        let grid = build_month(5, 2026, &events, date(1, 1));

        assert_eq!(cell(&grid, 4).highlight(), DayHighlight::StartsHere);
        for day in 5..=7 {
            let c = cell(&grid, day);
            assert_eq!(c.highlight(), DayHighlight::WithinSpan, "day {}", day);
            assert_eq!(c.event_count, 0, "span-only days are not counted");
        }
        assert_eq!(cell(&grid, 8).highlight(), DayHighlight::Default);
    }

    #[test]
    fn test_event_starting_at_midnight_spans_its_start_day() {
        let events = vec![event(1, "All day", at(6, 1, 0), at(6, 1, 23))];
        let grid = build_month(6, 2026, &events, date(1, 1));
        let day = cell(&grid, 1);
        assert!(day.is_within_span);
        assert!(day.is_start_on_day);
        assert_eq!(day.highlight(), DayHighlight::WithinSpan);
    }

    #[test]
    fn test_end_before_start_has_empty_span() {
        let events = vec![event(1, "Odd", at(7, 10, 12), at(7, 8, 12))];
        let grid = build_month(7, 2026, &events, date(1, 1));
        assert!(grid.days.iter().all(|d| !d.is_within_span));
        assert!(cell(&grid, 10).is_start_on_day);
    }

    #[test]
    fn test_today_takes_precedence_over_span() {
        let events = vec![event(1, "Conference", at(9, 1, 0), at(9, 30, 0))];
        let grid = build_month(9, 2026, &events, date(9, 15));
        let today = cell(&grid, 15);
        assert!(today.is_within_span);
        assert_eq!(today.highlight(), DayHighlight::Today);
        assert_eq!(cell(&grid, 16).highlight(), DayHighlight::WithinSpan);
    }

    #[test]
    fn test_events_on_day_keeps_collection_order() {
        let events = vec![
            event(1, "Breakfast", at(8, 20, 8), at(8, 20, 9)),
            event(2, "Elsewhere", at(8, 21, 8), at(8, 21, 9)),
            event(3, "Dinner", at(8, 20, 19), at(8, 20, 21)),
        ];
        let matched: Vec<i64> = events_on_day(&events, date(8, 20))
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(matched, vec![1, 3]);
    }

    #[test]
    fn test_span_covers_day_whose_midnight_is_skipped() {
        let start = Santiago.with_ymd_and_hms(2026, 9, 5, 12, 0, 0).unwrap();
        let end = Santiago.with_ymd_and_hms(2026, 9, 7, 12, 0, 0).unwrap();
        let trip = event(1, "Trip", start.with_timezone(&Local), end.with_timezone(&Local));

        assert!(!spans_in(&Santiago, &trip, date(9, 5)));
        assert!(spans_in(&Santiago, &trip, date(9, 6)));
        assert!(spans_in(&Santiago, &trip, date(9, 7)));
        assert!(!spans_in(&Santiago, &trip, date(9, 8)));
    }

    #[test]
    fn test_events_on_day_includes_spanning_events() {
        let events = vec![event(1, "Festival", at(4, 1, 10), at(4, 3, 22))];
        assert_eq!(events_on_day(&events, date(4, 2)).len(), 1);
        assert!(events_on_day(&events, date(4, 4)).is_empty());
    }
}
