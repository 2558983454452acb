//! Data Fetching
//!
//! One fetch capability shared by every request site in the dashboard.
//!
//! ## Model
//!
//! - [`FetchState`]: uniform `Idle | Loading | Success | Error` view of a request
//! - [`CancellationToken`]: bound to the owning component's lifetime
//! - [`RequestTicket`]: issued when a request starts, presented when it completes
//! - [`Resource`]: in-flight guard plus last good data plus last error
//! - [`OneShot`]: a resource that is requested exactly once
//!
//! A completion is committed only if its ticket is the one currently in
//! flight and the owner has not been torn down. Anything else is dropped
//! without touching state.

mod oneshot;

pub use oneshot::OneShot;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::ApiError;

/// Uniform result shape of a data request
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// Successful payload, if any
    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Error(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Cancellation flag shared between a component and the requests it issued
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// True if both handles refer to the same flag
    pub fn same_as(&self, other: &CancellationToken) -> bool {
        Arc::ptr_eq(&self.cancelled, &other.cancelled)
    }
}

/// Proof that a request was started by a particular resource
#[derive(Debug, Clone)]
pub struct RequestTicket {
    seq: u64,
    token: CancellationToken,
}

impl RequestTicket {
    /// Sequence number, unique per owning resource
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// True once the owner has been torn down
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

/// What happened to a completed request
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// Payload committed
    Loaded,
    /// Failure recorded; previous data kept
    Failed(ApiError),
    /// Owner torn down or ticket stale; state untouched
    Discarded,
}

/// Request bookkeeping for one kind of data
///
/// At most one request is in flight at a time; [`Resource::begin`] returns
/// `None` instead of queuing a second one.
#[derive(Debug, Clone)]
pub struct Resource<T> {
    label: &'static str,
    data: Option<T>,
    error: Option<String>,
    in_flight: Option<u64>,
    next_seq: u64,
    token: CancellationToken,
}

impl<T> Resource<T> {
    /// Create an empty resource. `label` names it in log lines.
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            data: None,
            error: None,
            in_flight: None,
            next_seq: 0,
            token: CancellationToken::new(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Start a request. Returns `None` when one is already outstanding or
    /// the owner has been cancelled.
    pub fn begin(&mut self) -> Option<RequestTicket> {
        if self.token.is_cancelled() {
            tracing::debug!(resource = self.label, "Not starting request, owner torn down");
            return None;
        }
        if self.in_flight.is_some() {
            tracing::debug!(resource = self.label, "Request already in flight, skipping");
            return None;
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.in_flight = Some(seq);

        Some(RequestTicket {
            seq,
            token: self.token.clone(),
        })
    }

    /// Commit the result of a request started with [`Resource::begin`]
    pub fn complete(&mut self, ticket: RequestTicket, result: Result<T, ApiError>) -> Completion {
        if ticket.is_cancelled() || self.token.is_cancelled() {
            tracing::debug!(
                resource = self.label,
                seq = ticket.seq,
                "Discarding completion after teardown"
            );
            return Completion::Discarded;
        }
        if !ticket.token.same_as(&self.token) || self.in_flight != Some(ticket.seq) {
            tracing::debug!(resource = self.label, seq = ticket.seq, "Discarding stale completion");
            return Completion::Discarded;
        }

        self.in_flight = None;

        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
                Completion::Loaded
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Completion::Failed(e)
            }
        }
    }

    /// Tear down: later completions are discarded and no new request starts
    pub fn cancel(&mut self) {
        self.token.cancel();
        self.in_flight = None;
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Last successfully fetched data
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Message of the most recent failure, cleared by the next success
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Uniform view of the resource
    pub fn state(&self) -> FetchState<&T> {
        if self.in_flight.is_some() {
            FetchState::Loading
        } else if let Some(error) = &self.error {
            FetchState::Error(error.clone())
        } else if let Some(data) = &self.data {
            FetchState::Success(data)
        } else {
            FetchState::Idle
        }
    }
}
