//! Year calendar construction and day matching.
//!
//! Builds the twelve month grids shown by the calendar view, computes each
//! day cell's highlight from the event list, and produces the detail modal
//! contents when a day is clicked.

mod grid;
mod modal;

pub use grid::{build_month, build_year, events_on_day, DayCell, DayHighlight, MonthGrid};
pub use modal::{DetailModal, EventSnapshot};

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Column headers, Monday first.
pub const WEEKDAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
