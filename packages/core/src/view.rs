//! Client-side state of one moderation queue.
//!
//! A row lives in the view while its request is pending. A successful
//! decision removes it; a failed one leaves it exactly where it was. The view
//! never re-fetches on its own.

use std::collections::BTreeSet;

use crate::{Category, Notification, Outcome, PendingRequest, QueueSpec, RequestKey};

/// What the queue currently has to show.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Ready(Vec<PendingRequest>),
    /// The list could not be loaded; holds the message shown in its place.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueueView {
    category: Category,
    state: LoadState,
    in_flight: BTreeSet<RequestKey>,
}

impl QueueView {
    /// A view that has not received its first response yet.
    pub fn new(category: Category) -> Self {
        Self {
            category,
            state: LoadState::Loading,
            in_flight: BTreeSet::new(),
        }
    }

    pub fn with_rows(category: Category, rows: Vec<PendingRequest>) -> Self {
        Self {
            category,
            state: LoadState::Ready(rows),
            in_flight: BTreeSet::new(),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn spec(&self) -> QueueSpec {
        self.category.spec()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Rows in server order; empty unless the list loaded.
    pub fn rows(&self) -> &[PendingRequest] {
        match &self.state {
            LoadState::Ready(rows) => rows,
            _ => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.rows().len()
    }

    /// True only for a loaded list with nothing left in it.
    pub fn is_empty(&self) -> bool {
        matches!(&self.state, LoadState::Ready(rows) if rows.is_empty())
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    pub fn contains(&self, key: &RequestKey) -> bool {
        self.rows().iter().any(|row| &row.key == key)
    }

    pub fn is_in_flight(&self, key: &RequestKey) -> bool {
        self.in_flight.contains(key)
    }

    /// Reloading keeps in-flight marks; only [`Self::finish_decision`]
    /// clears them, so a reloaded row cannot be decided twice.
    pub fn start_loading(&mut self) {
        self.state = LoadState::Loading;
    }

    pub fn finish_load(&mut self, result: Result<Vec<PendingRequest>, String>) {
        self.state = match result {
            Ok(rows) => LoadState::Ready(rows),
            Err(message) => LoadState::Failed(message),
        };
    }

    /// Mark a row as having a decision in flight.
    ///
    /// Returns false when the row is gone or already has one pending, in
    /// which case no mutation should be issued.
    pub fn begin_decision(&mut self, key: &RequestKey) -> bool {
        if !self.contains(key) {
            return false;
        }
        self.in_flight.insert(key.clone())
    }

    /// Apply the server's answer to a decision.
    ///
    /// `Ok` carries the server's message, if it sent one. On success the
    /// row is removed; on failure it stays untouched.
    pub fn finish_decision(
        &mut self,
        key: &RequestKey,
        outcome: Outcome,
        result: Result<Option<String>, String>,
    ) -> Notification {
        self.in_flight.remove(key);
        match result {
            Ok(message) => {
                self.remove(key);
                Notification::success(
                    message.unwrap_or_else(|| outcome.default_message().to_string()),
                )
            }
            Err(message) => Notification::error(message),
        }
    }

    /// Remove the row with this key. Returns whether a row was removed.
    pub fn remove(&mut self, key: &RequestKey) -> bool {
        let LoadState::Ready(rows) = &mut self.state else {
            return false;
        };
        match rows.iter().position(|row| &row.key == key) {
            Some(index) => {
                rows.remove(index);
                true
            }
            None => false,
        }
    }
}
