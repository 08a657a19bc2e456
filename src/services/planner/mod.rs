//! Top-level planner controller.
//!
//! `Planner` owns the canonical event collection together with the clock,
//! form, search, view and modal state the UI renders. Every mutation of the
//! collection is written back through the [`EventRepository`].

use chrono::{DateTime, Datelike, Local, NaiveDate};
use thiserror::Error;

use crate::models::event::{Event, EventError};
use crate::models::settings::ViewMode;
use crate::services::calendar::{build_year, DetailModal, MonthGrid};
use crate::services::event::EventStore;
use crate::services::storage::{EventRepository, LocalStorage};
use crate::utils::date::{format_input, parse_input};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlannerError {
    #[error("Enter a name and both dates")]
    Incomplete,
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error(transparent)]
    Event(#[from] EventError),
}

/// Text held by the add/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventForm {
    pub name: String,
    /// `YYYY-MM-DDTHH:MM`
    pub start: String,
    /// `YYYY-MM-DDTHH:MM`
    pub end: String,
}

impl EventForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.start.trim().is_empty() && !self.end.trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(i64),
    Updated(i64),
}

pub struct Planner<S: LocalStorage> {
    repository: EventRepository<S>,
    store: EventStore,
    now: DateTime<Local>,
    view: ViewMode,
    search_term: String,
    form: EventForm,
    editing: Option<i64>,
    modal: DetailModal,
}

impl<S: LocalStorage> Planner<S> {
    /// Restore persisted events from `storage` and drop any already over.
    pub fn load(storage: S, now: DateTime<Local>, view: ViewMode) -> Self {
        let repository = EventRepository::new(storage);
        let store = EventStore::from_events(repository.load());

        let mut planner = Self {
            repository,
            store,
            now,
            view,
            search_term: String::new(),
            form: EventForm::default(),
            editing: None,
            modal: DetailModal::default(),
        };
        planner.tick(now);
        planner
    }

    /// Advance the clock and prune expired events, persisting if any were
    /// removed. Returns the number pruned.
    pub fn tick(&mut self, now: DateTime<Local>) -> usize {
        self.now = now;
        let removed = self.store.prune_expired(now);
        if removed > 0 {
            if let Some(id) = self.editing {
                if self.store.get(id).is_none() {
                    self.cancel_edit();
                }
            }
            self.refresh_modal();
            self.persist();
        }
        removed
    }

    pub fn now(&self) -> DateTime<Local> {
        self.now
    }

    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }

    pub fn events(&self) -> &[Event] {
        self.store.events()
    }

    /// Events matching the current search term.
    pub fn visible_events(&self) -> Vec<&Event> {
        self.store.filter(&self.search_term)
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn toggle_view(&mut self) {
        self.view = self.view.toggled();
    }

    pub fn form(&self) -> &EventForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut EventForm {
        &mut self.form
    }

    /// Id of the event loaded into the form, if editing.
    pub fn editing(&self) -> Option<i64> {
        self.editing
    }

    /// Add a new event from the form, or update the one being edited.
    ///
    /// An incomplete form leaves everything untouched. On success the form
    /// is cleared and edit mode ends.
    pub fn submit(&mut self, now: DateTime<Local>) -> Result<SubmitOutcome, PlannerError> {
        if !self.form.is_complete() {
            return Err(PlannerError::Incomplete);
        }

        let start = parse_input(&self.form.start)
            .ok_or_else(|| PlannerError::InvalidDate(self.form.start.clone()))?;
        let end = parse_input(&self.form.end)
            .ok_or_else(|| PlannerError::InvalidDate(self.form.end.clone()))?;
        let name = self.form.name.trim().to_string();

        let outcome = match self.editing {
            Some(id) => {
                self.store.update(id, name, start, end)?;
                SubmitOutcome::Updated(id)
            }
            None => SubmitOutcome::Added(self.store.add(name, start, end, now)?.id),
        };

        self.form.clear();
        self.editing = None;
        self.refresh_modal();
        self.persist();
        Ok(outcome)
    }

    /// Load the event into the form for editing.
    pub fn begin_edit(&mut self, id: i64) -> bool {
        let Some(event) = self.store.get(id) else {
            return false;
        };

        self.form = EventForm {
            name: event.name.clone(),
            start: format_input(event.start),
            end: format_input(event.end),
        };
        self.editing = Some(id);
        true
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.form.clear();
    }

    pub fn delete(&mut self, id: i64) -> bool {
        if self.store.remove(id).is_none() {
            return false;
        }

        if self.editing == Some(id) {
            self.cancel_edit();
        }
        self.modal.forget(id);
        self.persist();
        true
    }

    /// Month grids for the current year.
    pub fn calendar(&self) -> Vec<MonthGrid> {
        build_year(self.now.year(), self.store.events(), self.today())
    }

    pub fn open_day(&mut self, date: NaiveDate) {
        self.modal.open(date, self.store.events());
    }

    pub fn close_modal(&mut self) {
        self.modal.close();
    }

    pub fn modal(&self) -> &DetailModal {
        &self.modal
    }

    pub fn repository(&self) -> &EventRepository<S> {
        &self.repository
    }

    /// Rebuild the open modal's snapshots from the current collection.
    fn refresh_modal(&mut self) {
        if let Some(date) = self.modal.date() {
            self.modal.open(date, self.store.events());
        }
    }

    fn persist(&mut self) {
        if let Err(err) = self.repository.save(self.store.events()) {
            log::error!("Failed to persist events: {err:?}");
        }
    }
}
