use chrono::{DateTime, Local, NaiveDate};

use super::grid::events_on_day;
use crate::models::event::Event;
use crate::utils::date::remaining_time;

/// Plain copy of an event shown in the detail modal. The countdown is
/// derived from `start` whenever it is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSnapshot {
    pub id: i64,
    pub name: String,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
}

impl EventSnapshot {
    pub fn remaining(&self, now: DateTime<Local>) -> String {
        remaining_time(self.start, now)
    }
}

impl From<&Event> for EventSnapshot {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id,
            name: event.name.clone(),
            start: event.start,
            end: event.end,
        }
    }
}

/// State of the day detail popup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailModal {
    date: Option<NaiveDate>,
    entries: Vec<EventSnapshot>,
}

impl DetailModal {
    /// Replace the contents with every event matching `date`.
    pub fn open(&mut self, date: NaiveDate, events: &[Event]) {
        self.entries = events_on_day(events, date)
            .into_iter()
            .map(EventSnapshot::from)
            .collect();
        self.date = Some(date);
    }

    pub fn close(&mut self) {
        self.date = None;
        self.entries.clear();
    }

    pub fn is_open(&self) -> bool {
        self.date.is_some()
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn entries(&self) -> &[EventSnapshot] {
        &self.entries
    }

    /// Drop a deleted event from an open modal.
    pub fn forget(&mut self, id: i64) {
        self.entries.retain(|entry| entry.id != id);
    }
}
