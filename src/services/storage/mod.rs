//! Key-value storage for planner state.
//!
//! `LocalStorage` is the string-keyed store the planner persists into. The
//! SQLite [`Database`] is the on-disk implementation and [`MemoryStorage`]
//! backs tests and throwaway sessions. [`EventRepository`] owns the
//! serialization of the event list under the `"dates"` key.

use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};
use std::collections::HashMap;

use crate::models::event::Event;
use crate::services::database::Database;

/// Key under which the event list is stored.
pub const EVENTS_KEY: &str = "dates";

/// String key-value storage.
pub trait LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: LocalStorage + ?Sized> LocalStorage for &mut S {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }
}

impl LocalStorage for Database {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.connection()
            .query_row(
                "SELECT value FROM local_storage WHERE key = ?",
                [key],
                |row| row.get(0),
            )
            .optional()
            .context(format!("Failed to read storage key '{}'", key))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.connection()
            .execute(
                "INSERT INTO local_storage (key, value, updated_at)
                 VALUES (?1, ?2, CURRENT_TIMESTAMP)
                 ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at",
                params![key, value],
            )
            .context(format!("Failed to write storage key '{}'", key))?;
        Ok(())
    }
}

/// Volatile storage kept in a map.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocalStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Loads and saves the full event list as a JSON array.
pub struct EventRepository<S: LocalStorage> {
    storage: S,
}

impl<S: LocalStorage> EventRepository<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Restore the persisted events.
    ///
    /// Missing, unreadable or malformed data yields an empty list; the
    /// problem is logged rather than surfaced.
    pub fn load(&self) -> Vec<Event> {
        let raw = match self.storage.get_item(EVENTS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                log::warn!("Failed to read stored events: {err:?}");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Event>>(&raw) {
            Ok(events) => {
                log::info!("Loaded {} stored event(s)", events.len());
                events
            }
            Err(err) => {
                log::warn!("Discarding malformed stored events: {}", err);
                Vec::new()
            }
        }
    }

    /// Overwrite the persisted list with `events`.
    pub fn save(&mut self, events: &[Event]) -> Result<()> {
        let json = serde_json::to_string(events).context("Failed to serialize events")?;
        self.storage.set_item(EVENTS_KEY, &json)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
