//! Dashboard Runtime
//!
//! Drives [`Dashboard`] on tokio: a timer task for the topics poller and one
//! task per one-shot fetch. Every commit is announced on an event channel so
//! a front-end can re-render.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, RwLock};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::{Dashboard, PollOutcome};
use crate::api::DashboardApi;
use crate::fetch::Completion;

/// Something in the dashboard changed
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    Topics(PollOutcome),
    Block(Completion),
    Posts(Completion),
    /// A poll tick fired while the previous fetch was still outstanding
    TickSkipped,
}

/// A mounted dashboard
pub struct DashboardRuntime {
    state: Arc<RwLock<Dashboard>>,
    timer: JoinHandle<()>,
}

impl DashboardRuntime {
    /// Mount the dashboard: fetch topics now and every `poll_period` after,
    /// and fetch the block and posts once. Must be called inside a tokio
    /// runtime.
    pub fn mount(
        api: Arc<dyn DashboardApi>,
        poll_period: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<DashboardEvent>) {
        let (events, rx) = mpsc::unbounded_channel();

        let mut dashboard = Dashboard::new(poll_period);
        let tickets = dashboard.mount();
        tracing::debug!(
            block = dashboard.block.label(),
            posts = dashboard.posts.label(),
            "Starting one-shot fetches"
        );
        let state = Arc::new(RwLock::new(dashboard));

        if let Some(ticket) = tickets.block {
            let (api, state, events) = (Arc::clone(&api), Arc::clone(&state), events.clone());
            tokio::spawn(async move {
                let result = api.latest_block().await;
                let outcome = state.write().await.block.resolve(ticket, result);
                if outcome != Completion::Discarded {
                    let _ = events.send(DashboardEvent::Block(outcome));
                }
            });
        }

        if let Some(ticket) = tickets.posts {
            let (api, state, events) = (Arc::clone(&api), Arc::clone(&state), events.clone());
            tokio::spawn(async move {
                let result = api.posts().await;
                let outcome = state.write().await.posts.resolve(ticket, result);
                if outcome != Completion::Discarded {
                    let _ = events.send(DashboardEvent::Posts(outcome));
                }
            });
        }

        let timer = tokio::spawn(poll_loop(api, Arc::clone(&state), events, poll_period));

        tracing::info!(period_secs = poll_period.as_secs(), "Dashboard mounted");
        (Self { state, timer }, rx)
    }

    /// Shared dashboard state
    pub fn state(&self) -> Arc<RwLock<Dashboard>> {
        Arc::clone(&self.state)
    }

    /// Copy of the current dashboard state
    pub async fn snapshot(&self) -> Dashboard {
        self.state.read().await.clone()
    }

    /// Stop the timer and cancel every outstanding request. Requests already
    /// on the wire still finish, but their results are dropped.
    pub async fn unmount(self) {
        self.state.write().await.unmount();
        self.timer.abort();
        tracing::info!("Dashboard unmounted");
    }
}

impl Drop for DashboardRuntime {
    /// Stop polling even when the runtime is dropped without `unmount`
    fn drop(&mut self) {
        self.timer.abort();
        if let Ok(mut dashboard) = self.state.try_write() {
            dashboard.unmount();
        }
    }
}

/// Ticks are scheduled from mount, not from fetch completion, and ticks
/// missed while busy are skipped rather than caught up.
async fn poll_loop(
    api: Arc<dyn DashboardApi>,
    state: Arc<RwLock<Dashboard>>,
    events: mpsc::UnboundedSender<DashboardEvent>,
    period: Duration,
) {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        interval.tick().await;

        let ticket = {
            let mut dashboard = state.write().await;
            if !dashboard.topics.is_mounted() {
                break;
            }
            dashboard.topics.tick()
        };

        let Some(ticket) = ticket else {
            tracing::debug!("Poll tick skipped, previous fetch still in flight");
            let _ = events.send(DashboardEvent::TickSkipped);
            continue;
        };

        let (api, state, events) = (Arc::clone(&api), Arc::clone(&state), events.clone());
        tokio::spawn(async move {
            let result = api.trending_topics().await;
            let outcome = state.write().await.topics.complete(ticket, result);
            if outcome != PollOutcome::Discarded {
                let _ = events.send(DashboardEvent::Topics(outcome));
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{BlockData, ChatResponse, Post, SentimentDistribution, TrendData, TrendingTopic};
    use crate::error::{ApiError, ApiResult};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct FakeApi {
        topics: Mutex<VecDeque<ApiResult<Vec<TrendingTopic>>>>,
        delay: Duration,
        calls: AtomicUsize,
    }

    impl FakeApi {
        fn new(delay: Duration, results: Vec<ApiResult<Vec<TrendingTopic>>>) -> Arc<Self> {
            Arc::new(Self {
                topics: Mutex::new(results.into()),
                delay,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl DashboardApi for FakeApi {
        async fn trending_topics(&self) -> ApiResult<Vec<TrendingTopic>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            self.topics
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(Vec::new()))
        }

        async fn send_chat(&self, _message: &str) -> ApiResult<ChatResponse> {
            Err(ApiError::Transport("not used".to_string()))
        }

        async fn latest_block(&self) -> ApiResult<BlockData> {
            Ok(serde_json::json!({ "height": 7 }))
        }

        async fn posts(&self) -> ApiResult<Vec<Post>> {
            Err(ApiError::status(404, "no posts"))
        }
    }

    fn topic(name: &str, mentions: u64) -> TrendingTopic {
        TrendingTopic {
            topic: name.to_string(),
            data: TrendData {
                mention_count: mentions,
                avg_engagement: 1.0,
                mentions_per_hour: 1.0,
                sentiment_distribution: SentimentDistribution::default(),
            },
        }
    }

    async fn next_topics_event(
        rx: &mut mpsc::UnboundedReceiver<DashboardEvent>,
        skipped: &mut usize,
    ) -> PollOutcome {
        loop {
            match rx.recv().await.unwrap() {
                DashboardEvent::Topics(outcome) => return outcome,
                DashboardEvent::TickSkipped => *skipped += 1,
                _ => {}
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_poll_keeps_previous_topics() {
        let api = FakeApi::new(
            Duration::ZERO,
            vec![
                Ok(vec![topic("sei", 120)]),
                Err(ApiError::status(500, "")),
            ],
        );
        let (runtime, mut rx) = DashboardRuntime::mount(api.clone(), Duration::from_secs(60));
        let mut skipped = 0;

        // t = 0
        let first = next_topics_event(&mut rx, &mut skipped).await;
        assert_eq!(first, PollOutcome::Updated { count: 1 });

        // t = 60s
        let second = next_topics_event(&mut rx, &mut skipped).await;
        assert!(matches!(second, PollOutcome::Failed { .. }));

        let dashboard = runtime.snapshot().await;
        assert_eq!(dashboard.topics.topics()[0].topic, "sei");
        assert_eq!(dashboard.topics.topics()[0].data.mention_count, 120);
        assert!(dashboard.topics.error().is_some());
        assert_eq!(api.calls(), 2);

        runtime.unmount().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_fetch_drops_ticks() {
        let api = FakeApi::new(Duration::from_secs(150), vec![Ok(vec![topic("sei", 1)])]);
        let (runtime, mut rx) = DashboardRuntime::mount(api.clone(), Duration::from_secs(60));
        let mut skipped = 0;

        // Ticks at 60s and 120s land while the first fetch is still running
        let first = next_topics_event(&mut rx, &mut skipped).await;
        assert_eq!(first, PollOutcome::Updated { count: 1 });
        assert_eq!(skipped, 2);
        assert_eq!(api.calls(), 1);

        runtime.unmount().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_drops_in_flight_result() {
        let api = FakeApi::new(Duration::from_secs(10), vec![Ok(vec![topic("sei", 1)])]);
        let (runtime, mut rx) = DashboardRuntime::mount(api.clone(), Duration::from_secs(60));
        let state = runtime.state();

        tokio::time::sleep(Duration::from_secs(1)).await;
        runtime.unmount().await;
        tokio::time::sleep(Duration::from_secs(120)).await;

        assert!(state.read().await.topics.topics().is_empty());
        assert_eq!(api.calls(), 1);
        while let Ok(event) = rx.try_recv() {
            assert!(!matches!(event, DashboardEvent::Topics(_)));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_runtime_stops_polling() {
        let api = FakeApi::new(Duration::ZERO, vec![]);
        let (runtime, mut rx) = DashboardRuntime::mount(api.clone(), Duration::from_secs(60));
        let state = runtime.state();
        let mut skipped = 0;

        next_topics_event(&mut rx, &mut skipped).await;
        drop(runtime);

        tokio::time::sleep(Duration::from_secs(300)).await;
        assert_eq!(api.calls(), 1);
        assert!(!state.read().await.topics.is_mounted());
    }

    #[tokio::test(start_paused = true)]
    async fn test_one_shot_fetches_run_once() {
        let api = FakeApi::new(Duration::ZERO, vec![]);
        let (runtime, mut rx) = DashboardRuntime::mount(api, Duration::from_secs(60));

        let mut block = None;
        let mut posts = None;
        while block.is_none() || posts.is_none() {
            match rx.recv().await.unwrap() {
                DashboardEvent::Block(outcome) => block = Some(outcome),
                DashboardEvent::Posts(outcome) => posts = Some(outcome),
                _ => {}
            }
        }

        assert_eq!(block, Some(Completion::Loaded));
        assert!(matches!(posts, Some(Completion::Failed(_))));

        let dashboard = runtime.snapshot().await;
        assert_eq!(dashboard.block.loaded().unwrap()["height"], 7);
        // Failed posts are indistinguishable from loading
        assert!(dashboard.posts.loaded().is_none());

        runtime.unmount().await;
    }
}
