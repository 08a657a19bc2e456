//! In-memory event collection.
//! Keeps events ordered by start time and provides the mutation and
//! query operations the planner drives, split across focused submodules.

use crate::models::event::Event;

pub mod crud;
pub mod queries;

/// Ordered collection of planner events, sorted ascending by start.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventStore {
    pub(crate) events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from loaded events, restoring the start-time order.
    pub fn from_events(events: Vec<Event>) -> Self {
        let mut store = Self { events };
        store.sort();
        store
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Stable sort so events sharing a start keep their relative order.
    pub(crate) fn sort(&mut self) {
        self.events.sort_by_key(|event| event.start);
    }
}
