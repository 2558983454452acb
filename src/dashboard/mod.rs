//! Dashboard View State
//!
//! The dashboard owns three independent requests:
//!
//! - **Trending topics**: polled every period until unmount ([`TopicsPoller`])
//! - **Latest block**: fetched once on mount, rendered as a pretty dump
//! - **Posts**: fetched once on mount, rendered as a title list
//!
//! No state is shared with the chat widget. Each request is bound to the
//! dashboard's lifetime and is ignored if it lands after [`Dashboard::unmount`].

mod poller;

#[cfg(feature = "native")]
mod runtime;

pub use poller::{PanelBody, PollOutcome, TopicsPanel, TopicsPoller, POLL_INTERVAL};

#[cfg(feature = "native")]
pub use runtime::{DashboardEvent, DashboardRuntime};

use std::time::Duration;

use crate::api::{BlockData, Post};
use crate::fetch::{OneShot, RequestTicket};

/// Tickets for the fetches that run once per dashboard
#[derive(Debug, Default)]
pub struct MountTickets {
    pub block: Option<RequestTicket>,
    pub posts: Option<RequestTicket>,
}

/// State behind the dashboard view
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub topics: TopicsPoller,
    pub block: OneShot<BlockData>,
    pub posts: OneShot<Vec<Post>>,
}

impl Dashboard {
    pub fn new(poll_period: Duration) -> Self {
        Self {
            topics: TopicsPoller::new(poll_period),
            block: OneShot::new("block data"),
            posts: OneShot::new("posts"),
        }
    }

    /// Start the one-shot fetches. Mounting again (say, after switching
    /// views) starts nothing and keeps every loaded payload. The topics
    /// poller is driven separately by its timer.
    pub fn mount(&mut self) -> MountTickets {
        MountTickets {
            block: self.block.start(),
            posts: self.posts.start(),
        }
    }

    /// Tear down every request owned by the dashboard
    pub fn unmount(&mut self) {
        self.topics.unmount();
        self.block.cancel();
        self.posts.cancel();
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(POLL_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{SentimentDistribution, TrendData, TrendingTopic};
    use crate::fetch::Completion;

    fn sei() -> TrendingTopic {
        TrendingTopic {
            topic: "sei".to_string(),
            data: TrendData {
                mention_count: 120,
                avg_engagement: 1.0,
                mentions_per_hour: 2.0,
                sentiment_distribution: SentimentDistribution::default(),
            },
        }
    }

    #[test]
    fn test_second_mount_keeps_state_and_refetches_nothing() {
        let mut dashboard = Dashboard::default();

        let tickets = dashboard.mount();
        let block = tickets.block.unwrap();
        let posts = tickets.posts.unwrap();
        dashboard.block.resolve(block, Ok(serde_json::json!({"height": 1})));
        dashboard.posts.resolve(posts, Ok(vec![]));

        let topics = dashboard.topics.tick().unwrap();
        dashboard.topics.complete(topics, Ok(vec![sei()]));

        let again = dashboard.mount();
        assert!(again.block.is_none());
        assert!(again.posts.is_none());
        assert_eq!(dashboard.topics.topics()[0].topic, "sei");
        assert_eq!(dashboard.block.loaded().unwrap()["height"], 1);
    }

    #[test]
    fn test_unmount_cancels_all_requests() {
        let mut dashboard = Dashboard::default();

        let topics = dashboard.topics.tick().unwrap();
        let block = dashboard.block.start().unwrap();
        let posts = dashboard.posts.start().unwrap();

        dashboard.unmount();

        assert_eq!(dashboard.topics.complete(topics, Ok(vec![])), PollOutcome::Discarded);
        assert_eq!(
            dashboard.block.resolve(block, Ok(serde_json::json!({"height": 1}))),
            Completion::Discarded
        );
        assert_eq!(dashboard.posts.resolve(posts, Ok(vec![])), Completion::Discarded);
        assert!(dashboard.block.loaded().is_none());
    }
}
