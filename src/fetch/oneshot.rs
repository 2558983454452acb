//! One-shot fetches
//!
//! Requested once on mount, never retried or polled. Failures are logged and
//! otherwise invisible: until a payload arrives the view shows its generic
//! loading placeholder.

use super::{Completion, FetchState, RequestTicket, Resource};
use crate::error::ApiError;

/// A resource that is requested at most once
#[derive(Debug, Clone)]
pub struct OneShot<T> {
    resource: Resource<T>,
    started: bool,
}

impl<T> OneShot<T> {
    pub fn new(label: &'static str) -> Self {
        Self {
            resource: Resource::new(label),
            started: false,
        }
    }

    /// Start the single request. Later calls return `None`.
    pub fn start(&mut self) -> Option<RequestTicket> {
        if self.started {
            return None;
        }
        let ticket = self.resource.begin()?;
        self.started = true;
        Some(ticket)
    }

    pub fn resolve(&mut self, ticket: RequestTicket, result: Result<T, ApiError>) -> Completion {
        let outcome = self.resource.complete(ticket, result);
        if let Completion::Failed(e) = &outcome {
            tracing::error!("Error fetching {}: {}", self.resource.label(), e);
        }
        outcome
    }

    pub fn cancel(&mut self) {
        self.resource.cancel();
    }

    /// Payload, once it has arrived. `None` both while loading and after a
    /// failure.
    pub fn loaded(&self) -> Option<&T> {
        self.resource.data()
    }

    pub fn state(&self) -> FetchState<&T> {
        self.resource.state()
    }

    pub fn label(&self) -> &'static str {
        self.resource.label()
    }
}
