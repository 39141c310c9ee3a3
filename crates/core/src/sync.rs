//! List synchronisation
//!
//! A `ListSync` holds the locally displayed collection for one resource and
//! reconciles it with what the server reports. Every fetch is issued a
//! ticket; a response carrying an older ticket than the latest one is
//! discarded.

use std::collections::HashSet;

use crate::error::{ConsoleError, ServerErrorKind};
use crate::traits::Identified;
use crate::types::EntityId;

/// Lifecycle phase of a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Sequence number handed out by `ListSync::begin_fetch`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// Result of completing a fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response was applied. `missing` lists identifiers that were
    /// displayed before but are absent from the new collection.
    Applied { missing: Vec<EntityId> },
    /// A newer fetch was started; the response was dropped
    Stale,
}

impl FetchOutcome {
    /// Whether the applied response revealed out-of-sync records
    pub fn has_missing(&self) -> bool {
        matches!(self, FetchOutcome::Applied { missing } if !missing.is_empty())
    }
}

/// How a delete attempt was reconciled with the local collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteResolution {
    /// The server confirmed the delete; the record was removed
    Removed,
    /// The server no longer had the record; it was removed locally and a
    /// refresh is due
    AlreadyGone,
    /// The delete was refused; the collection is unchanged
    Rejected {
        kind: Option<ServerErrorKind>,
        message: String,
    },
}

/// Locally held collection for one resource
#[derive(Debug, Clone)]
pub struct ListSync<T> {
    items: Vec<T>,
    previous: Vec<EntityId>,
    phase: Phase,
    latest: u64,
    fetched: usize,
    last_error: Option<String>,
}

impl<T> Default for ListSync<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            previous: Vec::new(),
            phase: Phase::Idle,
            latest: 0,
            fetched: 0,
            last_error: None,
        }
    }
}

impl<T: Identified + Clone> ListSync<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently displayed records
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Message of the last failed fetch, cleared by the next success
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of records the last applied fetch returned.
    ///
    /// Local prepends and removals do not change it, so server paging
    /// decisions follow what the server actually sent.
    pub fn fetched_len(&self) -> usize {
        self.fetched
    }

    /// Find a displayed record by id
    pub fn get(&self, id: &EntityId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Enter `Loading` and issue a ticket for the new request.
    ///
    /// The identifiers currently displayed are remembered so the response
    /// can be compared against them.
    pub fn begin_fetch(&mut self) -> Ticket {
        self.latest += 1;
        self.phase = Phase::Loading;
        self.previous = self.items.iter().map(|item| item.id().clone()).collect();
        Ticket(self.latest)
    }

    /// Whether `ticket` belongs to the most recent fetch
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }

    /// Apply a fetched collection.
    ///
    /// Missing records are only reported when something was displayed
    /// before and the size changed.
    pub fn complete_fetch(&mut self, ticket: Ticket, items: Vec<T>) -> FetchOutcome {
        if !self.is_current(ticket) {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.latest,
                "Discarding stale list response"
            );
            return FetchOutcome::Stale;
        }

        let missing = if !self.previous.is_empty() && self.previous.len() != items.len() {
            let fresh: HashSet<&EntityId> = items.iter().map(|item| item.id()).collect();
            self.previous
                .iter()
                .filter(|id| !fresh.contains(id))
                .cloned()
                .collect()
        } else {
            Vec::new()
        };

        if !missing.is_empty() {
            tracing::warn!(count = missing.len(), "Records disappeared from the server");
        }

        self.fetched = items.len();
        self.items = items;
        self.previous.clear();
        self.phase = Phase::Success;
        self.last_error = None;
        FetchOutcome::Applied { missing }
    }

    /// Record a failed fetch, keeping the displayed collection
    pub fn fail_fetch(&mut self, ticket: Ticket, error: &ConsoleError) -> FetchOutcome {
        if !self.is_current(ticket) {
            return FetchOutcome::Stale;
        }
        self.previous.clear();
        self.phase = Phase::Error;
        self.last_error = Some(error.user_message());
        FetchOutcome::Applied {
            missing: Vec::new(),
        }
    }

    /// Return to `Idle` once the outcome has been shown
    pub fn settle(&mut self) {
        if self.phase != Phase::Loading {
            self.phase = Phase::Idle;
        }
    }

    /// Insert a newly created record at the top
    pub fn prepend(&mut self, item: T) {
        self.items.insert(0, item);
    }

    /// Replace the record with the same id. Returns false if it is not
    /// displayed.
    pub fn replace(&mut self, item: T) -> bool {
        match self.items.iter_mut().find(|existing| existing.id() == item.id()) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    /// Remove a record by id
    pub fn remove(&mut self, id: &EntityId) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    /// Reconcile the outcome of a server delete with the local collection.
    ///
    /// Success and 404 both remove the record; any other failure leaves
    /// the collection untouched.
    pub fn resolve_delete<R>(
        &mut self,
        id: &EntityId,
        result: &Result<R, ConsoleError>,
    ) -> DeleteResolution {
        match result {
            Ok(_) => {
                self.remove(id);
                DeleteResolution::Removed
            }
            Err(e) if e.is_not_found() => {
                self.remove(id);
                DeleteResolution::AlreadyGone
            }
            Err(e) => DeleteResolution::Rejected {
                kind: e.server_kind(),
                message: e.user_message(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Customer;
    use pretty_assertions::assert_eq;

    fn customer(id: &str) -> Customer {
        Customer {
            id: EntityId::new(id),
            full_name: format!("Customer {}", id),
            ..Default::default()
        }
    }

    fn customers(ids: &[&str]) -> Vec<Customer> {
        ids.iter().map(|id| customer(id)).collect()
    }

    #[test]
    fn test_first_fetch_reports_nothing_missing() {
        let mut list = ListSync::new();
        let ticket = list.begin_fetch();
        assert!(list.is_loading());

        let outcome = list.complete_fetch(ticket, customers(&["1", "2"]));
        assert_eq!(outcome, FetchOutcome::Applied { missing: vec![] });
        assert_eq!(list.phase(), Phase::Success);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_refetch_reports_missing_ids() {
        let mut list = ListSync::new();
        let t = list.begin_fetch();
        list.complete_fetch(t, customers(&["1", "2", "3"]));

        let t = list.begin_fetch();
        let outcome = list.complete_fetch(t, customers(&["1", "3"]));
        assert_eq!(
            outcome,
            FetchOutcome::Applied {
                missing: vec![EntityId::new("2")]
            }
        );
        assert!(outcome.has_missing());
    }

    #[test]
    fn test_same_size_refetch_is_not_compared() {
        let mut list = ListSync::new();
        let t = list.begin_fetch();
        list.complete_fetch(t, customers(&["1", "2"]));

        let t = list.begin_fetch();
        let outcome = list.complete_fetch(t, customers(&["3", "4"]));
        assert!(!outcome.has_missing());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut list = ListSync::new();
        let old = list.begin_fetch();
        let new = list.begin_fetch();

        assert_eq!(list.complete_fetch(new, customers(&["9"])), FetchOutcome::Applied { missing: vec![] });
        assert_eq!(list.complete_fetch(old, customers(&["1", "2"])), FetchOutcome::Stale);
        assert_eq!(list.items()[0].id.as_str(), "9");
    }

    #[test]
    fn test_failed_fetch_keeps_items() {
        let mut list = ListSync::new();
        let t = list.begin_fetch();
        list.complete_fetch(t, customers(&["1"]));

        let t = list.begin_fetch();
        list.fail_fetch(t, &ConsoleError::server(500, None));
        assert_eq!(list.phase(), Phase::Error);
        assert_eq!(list.len(), 1);
        assert!(list.last_error().is_some());

        list.settle();
        assert_eq!(list.phase(), Phase::Idle);
    }

    #[test]
    fn test_prepend_and_replace() {
        let mut list = ListSync::new();
        let t = list.begin_fetch();
        list.complete_fetch(t, customers(&["1", "2"]));

        list.prepend(customer("3"));
        assert_eq!(list.items()[0].id.as_str(), "3");

        let mut edited = customer("2");
        edited.full_name = "Renamed".to_string();
        assert!(list.replace(edited));
        assert_eq!(list.get(&EntityId::new("2")).unwrap().full_name, "Renamed");
        assert!(!list.replace(customer("404")));
    }

    #[test]
    fn test_fetched_len_ignores_local_changes() {
        let mut list = ListSync::new();
        let t = list.begin_fetch();
        list.complete_fetch(t, customers(&["1", "2", "3"]));
        assert_eq!(list.fetched_len(), 3);

        list.prepend(customer("4"));
        list.remove(&EntityId::new("1"));
        list.prepend(customer("5"));
        assert_eq!(list.len(), 4);
        assert_eq!(list.fetched_len(), 3);

        let t = list.begin_fetch();
        list.complete_fetch(t, customers(&["5"]));
        assert_eq!(list.fetched_len(), 1);
    }

    #[test]
    fn test_delete_not_found_removes_locally() {
        let mut list = ListSync::new();
        let t = list.begin_fetch();
        list.complete_fetch(t, customers(&["1", "2"]));

        let result: Result<(), ConsoleError> = Err(ConsoleError::server(404, None));
        let resolution = list.resolve_delete(&EntityId::new("2"), &result);
        assert_eq!(resolution, DeleteResolution::AlreadyGone);
        assert!(list.get(&EntityId::new("2")).is_none());
    }

    #[test]
    fn test_delete_forbidden_keeps_item() {
        let mut list = ListSync::new();
        let t = list.begin_fetch();
        list.complete_fetch(t, customers(&["1"]));

        let result: Result<(), ConsoleError> = Err(ConsoleError::server(403, None));
        let resolution = list.resolve_delete(&EntityId::new("1"), &result);
        assert!(matches!(
            resolution,
            DeleteResolution::Rejected {
                kind: Some(ServerErrorKind::Forbidden),
                ..
            }
        ));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_delete_success_removes() {
        let mut list = ListSync::new();
        let t = list.begin_fetch();
        list.complete_fetch(t, customers(&["1"]));

        let result: Result<(), ConsoleError> = Ok(());
        assert_eq!(
            list.resolve_delete(&EntityId::new("1"), &result),
            DeleteResolution::Removed
        );
        assert!(list.is_empty());
    }
}
