//! Main panel views and the actions they hand back to the app.

pub mod calendar_view;
pub mod list_view;
mod month_day_cell;
pub(crate) mod palette;

use chrono::NaiveDate;

/// Mutation requested by a view; the app applies it to the planner after
/// rendering so views only ever see read-only snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlannerAction {
    Edit(i64),
    Delete(i64),
    OpenDay(NaiveDate),
}
