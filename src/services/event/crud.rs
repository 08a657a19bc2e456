use super::EventStore;
use crate::models::event::{validate_fields, Event, EventError};
use chrono::{DateTime, Local};

impl EventStore {
    /// Add a new event with an id derived from `now`.
    ///
    /// The id is the creation time in milliseconds, bumped forward when an
    /// event created in the same millisecond already holds it.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        start: DateTime<Local>,
        end: DateTime<Local>,
        now: DateTime<Local>,
    ) -> Result<&Event, EventError> {
        let name = name.into();
        validate_fields(&name, start, end)?;

        let mut id = now.timestamp_millis();
        while self.get(id).is_some() {
            id += 1;
        }

        self.events.push(Event {
            id,
            name,
            start,
            end,
        });
        self.sort();

        log::debug!("Added event {}", id);
        self.get(id).ok_or(EventError::NotFound(id))
    }

    /// Replace the fields of the event with `id`.
    pub fn update(
        &mut self,
        id: i64,
        name: impl Into<String>,
        start: DateTime<Local>,
        end: DateTime<Local>,
    ) -> Result<(), EventError> {
        let name = name.into();
        validate_fields(&name, start, end)?;

        let event = self
            .events
            .iter_mut()
            .find(|event| event.id == id)
            .ok_or(EventError::NotFound(id))?;

        event.name = name;
        event.start = start;
        event.end = end;
        self.sort();

        log::debug!("Updated event {}", id);
        Ok(())
    }

    /// Remove the event with `id`, returning it if present.
    pub fn remove(&mut self, id: i64) -> Option<Event> {
        let index = self.events.iter().position(|event| event.id == id)?;
        log::debug!("Removed event {}", id);
        Some(self.events.remove(index))
    }

    /// Drop every event whose end is at or before `now`.
    ///
    /// Idempotent: a second call with the same `now` removes nothing.
    pub fn prune_expired(&mut self, now: DateTime<Local>) -> usize {
        let before = self.events.len();
        self.events.retain(|event| !event.is_expired(now));
        let removed = before - self.events.len();

        if removed > 0 {
            log::info!("Pruned {} expired event(s)", removed);
        }
        removed
    }
}
