//! Todo list controller: local state mirrored from server responses.
//!
//! # Design
//! The controller never touches the network. Every operation is split into
//! a `begin_*` method, which applies pre-request state changes and returns a
//! `PendingOp` carrying the `HttpRequest`, and `complete`, which takes the
//! host's outcome for that request and reconciles local state. Hosts that run
//! one operation at a time use the blocking wrappers (`initialize`,
//! `submit_draft`, `toggle_completion`, `remove_item`) with a `Transport`.
//!
//! Overlapping operations complete in whatever order the host reports them.
//! Each `PendingOp` carries a ticket from a monotonic counter; a completion
//! update older than one already applied to the same item is dropped, and
//! only the most recently issued list fetch may replace `items`.
//!
//! Failures never escape: each `ApiError` is logged and folded into
//! `last_error` as the operation's `ErrorKind`.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::messages::{ErrorKind, Locale};
use crate::types::{CreateTodo, TodoId, TodoItem, UpdateTodo};

/// Everything the presentation layer needs to draw the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoListState {
    /// Server order; items created locally are prepended.
    pub items: Vec<TodoItem>,
    pub draft_title: String,
    /// True only while a list fetch is outstanding.
    pub is_loading: bool,
    pub last_error: Option<OperationFailure>,
}

/// The most recent failure, kept as a kind plus the HTTP status if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationFailure {
    pub kind: ErrorKind,
    pub status: Option<u16>,
}

/// What an in-flight request will do once it completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Fetch,
    Create,
    Toggle(TodoId),
    Remove(TodoId),
}

/// An issued request awaiting its outcome. Pass it back to
/// [`TodoListController::complete`] together with the response.
#[derive(Debug, Clone)]
#[must_use = "a pending operation does nothing until it is completed"]
pub struct PendingOp {
    ticket: u64,
    operation: Operation,
    request: HttpRequest,
}

impl PendingOp {
    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    pub fn operation(&self) -> &Operation {
        &self.operation
    }

    pub fn request(&self) -> &HttpRequest {
        &self.request
    }
}

#[derive(Debug)]
pub struct TodoListController {
    client: TodoClient,
    locale: Locale,
    state: TodoListState,
    next_ticket: u64,
    latest_fetch: u64,
    applied_toggles: HashMap<TodoId, u64>,
}

impl TodoListController {
    pub fn new(client: TodoClient) -> Self {
        Self {
            client,
            locale: Locale::default(),
            state: TodoListState::default(),
            next_ticket: 0,
            latest_fetch: 0,
            applied_toggles: HashMap::new(),
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn client(&self) -> &TodoClient {
        &self.client
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn state(&self) -> &TodoListState {
        &self.state
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.state.items
    }

    pub fn draft(&self) -> &str {
        &self.state.draft_title
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    pub fn last_error(&self) -> Option<OperationFailure> {
        self.state.last_error
    }

    /// The user-facing text for `last_error`, in the controller's locale.
    pub fn last_error_message(&self) -> Option<&'static str> {
        self.state
            .last_error
            .map(|failure| self.locale.error_message(failure.kind))
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.state.draft_title = text.into();
    }

    // -----------------------------------------------------------------------
    // Split API
    // -----------------------------------------------------------------------

    pub fn begin_fetch(&mut self) -> PendingOp {
        let ticket = self.issue_ticket();
        self.latest_fetch = ticket;
        self.state.is_loading = true;
        PendingOp {
            ticket,
            operation: Operation::Fetch,
            request: self.client.build_list_todos(),
        }
    }

    /// Returns `None` without issuing anything when the trimmed draft is empty.
    pub fn begin_submit(&mut self) -> Option<PendingOp> {
        let title = self.state.draft_title.trim().to_string();
        if title.is_empty() {
            return None;
        }
        let input = CreateTodo {
            title,
            completed: false,
        };
        match self.client.build_create_todo(&input) {
            Ok(request) => Some(PendingOp {
                ticket: self.issue_ticket(),
                operation: Operation::Create,
                request,
            }),
            Err(err) => {
                self.record_failure(ErrorKind::CreateFailed, &err);
                None
            }
        }
    }

    /// Returns `None` when `id` is not in the local list.
    pub fn begin_toggle(&mut self, id: &TodoId) -> Option<PendingOp> {
        let Some(item) = self.state.items.iter().find(|item| &item.id == id) else {
            debug!(%id, "toggle requested for unknown todo");
            return None;
        };
        let update = UpdateTodo::completion(!item.completed);
        match self.client.build_update_todo(id, &update) {
            Ok(request) => Some(PendingOp {
                ticket: self.issue_ticket(),
                operation: Operation::Toggle(id.clone()),
                request,
            }),
            Err(err) => {
                self.record_failure(ErrorKind::UpdateFailed, &err);
                None
            }
        }
    }

    /// Deletion is issued even for ids missing locally; the server decides.
    pub fn begin_remove(&mut self, id: &TodoId) -> PendingOp {
        PendingOp {
            ticket: self.issue_ticket(),
            operation: Operation::Remove(id.clone()),
            request: self.client.build_delete_todo(id),
        }
    }

    /// Apply the outcome of a request previously issued by a `begin_*` call.
    pub fn complete(&mut self, op: PendingOp, outcome: Result<HttpResponse, ApiError>) {
        let PendingOp {
            ticket, operation, ..
        } = op;
        match operation {
            Operation::Fetch => self.complete_fetch(ticket, outcome),
            Operation::Create => self.complete_create(outcome),
            Operation::Toggle(id) => self.complete_toggle(ticket, id, outcome),
            Operation::Remove(id) => self.complete_remove(id, outcome),
        }
    }

    // -----------------------------------------------------------------------
    // Blocking wrappers
    // -----------------------------------------------------------------------

    pub fn initialize<T: Transport + ?Sized>(&mut self, transport: &T) {
        let op = self.begin_fetch();
        self.execute(transport, op);
    }

    pub fn submit_draft<T: Transport + ?Sized>(&mut self, transport: &T) {
        if let Some(op) = self.begin_submit() {
            self.execute(transport, op);
        }
    }

    pub fn toggle_completion<T: Transport + ?Sized>(&mut self, transport: &T, id: &TodoId) {
        if let Some(op) = self.begin_toggle(id) {
            self.execute(transport, op);
        }
    }

    pub fn remove_item<T: Transport + ?Sized>(&mut self, transport: &T, id: &TodoId) {
        let op = self.begin_remove(id);
        self.execute(transport, op);
    }

    fn execute<T: Transport + ?Sized>(&mut self, transport: &T, op: PendingOp) {
        debug!(
            method = op.request.method.as_str(),
            url = %op.request.url,
            ticket = op.ticket,
            "sending todo request"
        );
        let outcome = transport.execute(&op.request);
        self.complete(op, outcome);
    }

    // -----------------------------------------------------------------------
    // Completion handlers
    // -----------------------------------------------------------------------

    fn complete_fetch(&mut self, ticket: u64, outcome: Result<HttpResponse, ApiError>) {
        let is_latest = ticket == self.latest_fetch;
        if is_latest {
            self.state.is_loading = false;
        }
        match outcome.and_then(|response| self.client.parse_list_todos(response)) {
            Ok(items) if is_latest => {
                self.state.items = dedup_by_id(items);
                let items = &self.state.items;
                self.applied_toggles
                    .retain(|id, _| items.iter().any(|item| &item.id == id));
                self.clear_error();
            }
            Ok(_) => {
                debug!(ticket, latest = self.latest_fetch, "discarding superseded todo list");
            }
            Err(err) => self.record_failure(ErrorKind::FetchFailed, &err),
        }
    }

    fn complete_create(&mut self, outcome: Result<HttpResponse, ApiError>) {
        match outcome.and_then(|response| self.client.parse_create_todo(response)) {
            Ok(item) => {
                self.state.items.retain(|existing| existing.id != item.id);
                self.state.items.insert(0, item);
                self.state.draft_title.clear();
                self.clear_error();
            }
            Err(err) => self.record_failure(ErrorKind::CreateFailed, &err),
        }
    }

    fn complete_toggle(&mut self, ticket: u64, id: TodoId, outcome: Result<HttpResponse, ApiError>) {
        let parsed = outcome
            .and_then(|response| self.client.parse_update_todo(response))
            .and_then(|updated| {
                if updated.id == id {
                    Ok(updated)
                } else {
                    Err(ApiError::IdMismatch {
                        expected: id.clone(),
                        actual: updated.id,
                    })
                }
            });
        let updated = match parsed {
            Ok(updated) => updated,
            Err(err) => {
                self.record_failure(ErrorKind::UpdateFailed, &err);
                return;
            }
        };
        self.clear_error();
        if self
            .applied_toggles
            .get(&id)
            .is_some_and(|&applied| applied > ticket)
        {
            debug!(%id, ticket, "discarding stale completion update");
            return;
        }
        if let Some(slot) = self.state.items.iter_mut().find(|item| item.id == id) {
            *slot = updated;
            self.applied_toggles.insert(id, ticket);
        }
    }

    fn complete_remove(&mut self, id: TodoId, outcome: Result<HttpResponse, ApiError>) {
        match outcome.and_then(|response| self.client.parse_delete_todo(response)) {
            Ok(()) => {
                self.state.items.retain(|item| item.id != id);
                self.applied_toggles.remove(&id);
                self.clear_error();
            }
            Err(err) => self.record_failure(ErrorKind::DeleteFailed, &err),
        }
    }

    fn issue_ticket(&mut self) -> u64 {
        self.next_ticket += 1;
        self.next_ticket
    }

    fn clear_error(&mut self) {
        self.state.last_error = None;
    }

    fn record_failure(&mut self, kind: ErrorKind, err: &ApiError) {
        warn!(
            operation = kind.label(),
            status = ?err.status(),
            error = %err,
            "todo operation failed"
        );
        self.state.last_error = Some(OperationFailure {
            kind,
            status: err.status(),
        });
    }
}

/// Keep the first occurrence of each id.
fn dedup_by_id(items: Vec<TodoItem>) -> Vec<TodoItem> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.id.clone()))
        .collect()
}
