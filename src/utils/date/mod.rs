// Date utility functions
// Calendar arithmetic, countdown text and display formatting

use chrono::{
    DateTime, Datelike, Duration, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset,
    TimeZone, Utc,
};

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Input format used by the start/end fields of the event form.
pub const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Number of days in `month` (1-12) of `year`.
///
/// Computed as the day before the first of the following month. Returns 0
/// for a month outside 1-12.
pub fn days_in_month(month: u32, year: i32) -> u32 {
    if !(1..=12).contains(&month) {
        return 0;
    }

    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(0)
}

/// Day of week with Monday as 0 and Sunday as 6.
///
/// Returns `None` when the date does not exist (e.g. February 30th).
pub fn day_of_week_monday_first(day: u32, month: u32, year: i32) -> Option<u32> {
    NaiveDate::from_ymd_opt(year, month, day).map(|date| date.weekday().num_days_from_monday())
}

/// Monday-first weekday of the 1st of the month, i.e. the number of blank
/// cells that precede day 1 in a 7-column grid.
pub fn first_weekday_offset(month: u32, year: i32) -> u32 {
    day_of_week_monday_first(1, month, year).unwrap_or(0)
}

/// Human readable time remaining from `now` until `target`.
///
/// Each component is floored independently and the result is never clamped,
/// so a target in the past yields negative components.
pub fn remaining_time(target: DateTime<Local>, now: DateTime<Local>) -> String {
    let diff = target.timestamp_millis() - now.timestamp_millis();

    let days = diff.div_euclid(MS_PER_DAY);
    let hours = (diff % MS_PER_DAY).div_euclid(MS_PER_HOUR);
    let minutes = (diff % MS_PER_HOUR).div_euclid(MS_PER_MINUTE);
    let seconds = (diff % MS_PER_MINUTE).div_euclid(MS_PER_SECOND);

    format!(
        "{} days {} hours {} minutes {} seconds left",
        days, hours, minutes, seconds
    )
}

/// Local midnight at the start of `date`.
///
/// Picks the earliest instant when midnight is ambiguous. Where a forward
/// DST transition skips midnight, the first instant after the gap is used.
pub fn start_of_day(date: NaiveDate) -> Option<DateTime<Local>> {
    start_of_day_in(&Local, date)
}

/// [`start_of_day`] in an explicit time zone.
pub fn start_of_day_in<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> Option<DateTime<Tz>> {
    localize_in(tz, date.and_time(NaiveTime::MIN))
}

fn localize(naive: NaiveDateTime) -> Option<DateTime<Local>> {
    localize_in(&Local, naive)
}

fn localize_in<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> Option<DateTime<Tz>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => {
            // Wall-clock time inside a gap: read it with the offset in force
            // before the transition, which lands past the gap by the same amount
            let before = tz
                .offset_from_utc_datetime(&(naive - Duration::days(1)))
                .fix();
            naive
                .checked_sub_signed(Duration::seconds(i64::from(before.local_minus_utc())))
                .map(|utc| tz.from_utc_datetime(&utc))
        }
    }
}

/// UTC ISO-8601 timestamp with millisecond precision, e.g.
/// `2026-10-16T09:30:00.000Z`. This is the text the search box matches.
pub fn to_iso_string(instant: DateTime<Local>) -> String {
    instant
        .with_timezone(&Utc)
        .format("%Y-%m-%dT%H:%M:%S%.3fZ")
        .to_string()
}

/// Long header date, e.g. `Friday, 16 October 2026`.
pub fn format_header_date(now: DateTime<Local>) -> String {
    now.format("%A, %-d %B %Y").to_string()
}

/// 24-hour header clock, e.g. `14:05:09`.
pub fn format_header_time(now: DateTime<Local>) -> String {
    now.format("%H:%M:%S").to_string()
}

/// Day-first timestamp shown under each list entry, e.g. `16/10/2026, 14:05:09`.
pub fn format_list_timestamp(instant: DateTime<Local>) -> String {
    instant.format("%d/%m/%Y, %H:%M:%S").to_string()
}

/// Formats an instant for the form's datetime fields.
pub fn format_input(instant: DateTime<Local>) -> String {
    instant.format(INPUT_FORMAT).to_string()
}

/// Parses the form's datetime fields. Accepts `YYYY-MM-DDTHH:MM` with an
/// optional `:SS` suffix, interpreted in local time.
pub fn parse_input(text: &str) -> Option<DateTime<Local>> {
    let text = text.trim();
    NaiveDateTime::parse_from_str(text, INPUT_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .and_then(localize)
}
