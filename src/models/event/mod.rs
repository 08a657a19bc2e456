// Event module
// Planner event model and its persisted record shape

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

use crate::utils::date::to_iso_string;

/// Validation failures for event mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    #[error("Event name cannot be empty")]
    EmptyName,
    #[error("Event end time must not be before its start time")]
    EndBeforeStart,
    #[error("Event with id {0} not found")]
    NotFound(i64),
}

/// A named interval the user is counting down to.
///
/// Serialized as `{ "id", "name", "startDate", "endDate" }` with UTC ISO-8601
/// timestamps (`2026-10-16T09:30:00.000Z`). Records written with a single `date` field load as an event
/// that starts and ends at that instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredEvent")]
pub struct Event {
    /// Creation timestamp in milliseconds, unique within a collection
    pub id: i64,
    pub name: String,
    #[serde(rename = "startDate", serialize_with = "serialize_iso")]
    pub start: DateTime<Local>,
    #[serde(rename = "endDate", serialize_with = "serialize_iso")]
    pub end: DateTime<Local>,
}

fn serialize_iso<S: Serializer>(
    instant: &DateTime<Local>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&to_iso_string(*instant))
}

impl Event {
    /// Create a validated event.
    ///
    /// # Examples
    /// ```
    /// use event_planner::models::event::Event;
    /// use chrono::{Duration, Local};
    ///
    /// let start = Local::now();
    /// let event = Event::new(1, "Launch", start, start + Duration::hours(2)).unwrap();
    /// assert_eq!(event.name, "Launch");
    /// ```
    pub fn new(
        id: i64,
        name: impl Into<String>,
        start: DateTime<Local>,
        end: DateTime<Local>,
    ) -> Result<Self, EventError> {
        let event = Self {
            id,
            name: name.into(),
            start,
            end,
        };
        event.validate()?;
        Ok(event)
    }

    /// Check the rules applied to user input. Loaded events skip this.
    pub fn validate(&self) -> Result<(), EventError> {
        validate_fields(&self.name, self.start, self.end)
    }

    /// Whether the event has finished as of `now`.
    pub fn is_expired(&self, now: DateTime<Local>) -> bool {
        self.end <= now
    }
}

pub(crate) fn validate_fields(
    name: &str,
    start: DateTime<Local>,
    end: DateTime<Local>,
) -> Result<(), EventError> {
    if name.trim().is_empty() {
        return Err(EventError::EmptyName);
    }

    if end < start {
        return Err(EventError::EndBeforeStart);
    }

    Ok(())
}

/// Wire shape accepted when reading persisted events.
#[derive(Debug, Deserialize)]
struct StoredEvent {
    id: i64,
    name: String,
    #[serde(rename = "startDate")]
    start_date: Option<DateTime<Local>>,
    #[serde(rename = "endDate")]
    end_date: Option<DateTime<Local>>,
    date: Option<DateTime<Local>>,
}

impl TryFrom<StoredEvent> for Event {
    type Error = String;

    fn try_from(stored: StoredEvent) -> Result<Self, Self::Error> {
        let start = stored
            .start_date
            .or(stored.date)
            .ok_or_else(|| format!("event {} has no start date", stored.id))?;
        let end = stored.end_date.or(stored.date).unwrap_or(start);

        Ok(Event {
            id: stored.id,
            name: stored.name,
            start,
            end,
        })
    }
}
