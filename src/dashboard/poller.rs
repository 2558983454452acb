//! Trending Topics Poller
//!
//! Request lifecycle behind the topics grid: an immediate fetch on mount,
//! then one attempt per period until unmount. A tick that lands while a
//! fetch is outstanding is dropped, never queued, so a slow backend stretches
//! the effective period instead of building a backlog.

use std::time::Duration;

use crate::api::TrendingTopic;
use crate::error::ApiError;
use crate::fetch::{Completion, FetchState, RequestTicket, Resource};
use crate::notify::{Toast, TOPICS_FAILED};
use crate::render::TopicCard;

/// Nominal polling period
pub const POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Result of committing a poll
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    /// Topic set replaced
    Updated { count: usize },
    /// Poll failed; the previous topic set stays on screen
    Failed { error: ApiError, toast: Toast },
    /// Landed after unmount or out of turn
    Discarded,
}

/// Body of the topics panel
#[derive(Debug, Clone, PartialEq)]
pub enum PanelBody {
    Loading,
    Grid(Vec<TopicCard>),
}

/// Everything the topics panel shows. The banner and the grid are
/// independent: stale topics stay visible under a fresh error.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicsPanel {
    pub banner: Option<String>,
    pub body: PanelBody,
}

/// Poll state for the trending-topics grid
#[derive(Debug, Clone)]
pub struct TopicsPoller {
    resource: Resource<Vec<TrendingTopic>>,
    period: Duration,
}

impl TopicsPoller {
    pub fn new(period: Duration) -> Self {
        Self {
            resource: Resource::new("trending topics"),
            period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Handle a timer tick (the first one fires on mount). Returns the ticket
    /// for a new request, or `None` if the tick is a no-op.
    pub fn tick(&mut self) -> Option<RequestTicket> {
        self.resource.begin()
    }

    /// Commit a finished poll
    pub fn complete(
        &mut self,
        ticket: RequestTicket,
        result: Result<Vec<TrendingTopic>, ApiError>,
    ) -> PollOutcome {
        match self.resource.complete(ticket, result) {
            Completion::Loaded => {
                let count = self.topics().len();
                tracing::debug!(count, "Trending topics updated");
                PollOutcome::Updated { count }
            }
            Completion::Failed(error) => {
                tracing::error!("Error fetching trending topics: {}", error);
                PollOutcome::Failed {
                    error,
                    toast: TOPICS_FAILED,
                }
            }
            Completion::Discarded => PollOutcome::Discarded,
        }
    }

    /// Stop polling. Any request still in flight is ignored when it lands.
    pub fn unmount(&mut self) {
        tracing::debug!("Trending topics poller unmounted");
        self.resource.cancel();
    }

    pub fn is_mounted(&self) -> bool {
        !self.resource.is_cancelled()
    }

    /// Most recently received topic set; empty before the first success
    pub fn topics(&self) -> &[TrendingTopic] {
        self.resource.data().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn error(&self) -> Option<&str> {
        self.resource.error()
    }

    pub fn is_loading(&self) -> bool {
        self.resource.is_loading()
    }

    pub fn state(&self) -> FetchState<&Vec<TrendingTopic>> {
        self.resource.state()
    }

    /// What the topics panel should show right now
    pub fn panel(&self) -> TopicsPanel {
        let body = if self.is_loading() {
            PanelBody::Loading
        } else {
            PanelBody::Grid(self.topics().iter().map(TopicCard::from).collect())
        };

        TopicsPanel {
            banner: self.error().map(str::to_string),
            body,
        }
    }
}

impl Default for TopicsPoller {
    fn default() -> Self {
        Self::new(POLL_INTERVAL)
    }
}
