use super::EventStore;
use crate::models::event::Event;
use crate::utils::date::to_iso_string;

impl EventStore {
    /// Look up an event by id.
    pub fn get(&self, id: i64) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Events whose name or ISO start/end timestamp contains `term`,
    /// ignoring case. An empty term matches everything.
    pub fn filter(&self, term: &str) -> Vec<&Event> {
        let needle = term.to_lowercase();
        if needle.is_empty() {
            return self.events.iter().collect();
        }

        self.events
            .iter()
            .filter(|event| matches_search(event, &needle))
            .collect()
    }
}

fn matches_search(event: &Event, needle: &str) -> bool {
    event.name.to_lowercase().contains(needle)
        || to_iso_string(event.start).to_lowercase().contains(needle)
        || to_iso_string(event.end).to_lowercase().contains(needle)
}
