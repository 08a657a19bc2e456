// Test fixtures - reusable test data
// Provides consistent test data across all test files

#![allow(dead_code)]

use chrono::{DateTime, Duration, Local, TimeZone};
use event_planner::models::event::Event;

/// Sample instants for testing
pub mod dates {
    use super::*;

    /// Oct 16, 2026 at noon, used as "now"
    pub fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).earliest().unwrap()
    }

    /// Dec 24, 2026 at 18:00
    pub fn christmas_eve() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 12, 24, 18, 0, 0).earliest().unwrap()
    }

    /// Feb 29, 2028 (leap year) at 12:00
    pub fn leap_day_2028() -> DateTime<Local> {
        Local.with_ymd_and_hms(2028, 2, 29, 12, 0, 0).earliest().unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    /// Three upcoming events with distinct starts, sorted ascending
    pub fn upcoming() -> Vec<Event> {
        let now = dates::now();
        vec![
            Event::new(1, "Book club", now + Duration::days(1), now + Duration::days(1) + Duration::hours(2))
                .unwrap(),
            Event::new(2, "Road trip", now + Duration::days(3), now + Duration::days(6)).unwrap(),
            Event::new(3, "Christmas dinner", dates::christmas_eve(), dates::christmas_eve() + Duration::hours(4))
                .unwrap(),
        ]
    }

    /// An event that finished yesterday
    pub fn finished() -> Event {
        let now = dates::now();
        Event::new(9, "Finished", now - Duration::days(2), now - Duration::days(1)).unwrap()
    }
}
