//! Dashboard State
//!
//! The topics poller and the two one-shot fetches belong to the app, not to
//! a tab: switching to the chat tab keeps polling and keeps every payload.

use gloo_timers::callback::Interval;
use leptos::*;

use sei_dashboard::dashboard::Dashboard;
use sei_dashboard::{PollOutcome, POLL_INTERVAL};

use super::global::GlobalState;
use crate::api;

/// App-wide handle to the dashboard requests
#[derive(Clone, Copy)]
pub struct DashboardState {
    pub dashboard: RwSignal<Dashboard>,
}

/// Mount the dashboard in the current owner and provide it to the tree.
/// Must run after [`super::provide_global_state`].
pub fn provide_dashboard_state() {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let dashboard = create_rw_signal(Dashboard::new(POLL_INTERVAL));

    // Skipped when the previous poll is still in flight
    let poll = move || {
        let Some(ticket) = dashboard.try_update(|d| d.topics.tick()).flatten() else {
            return;
        };

        spawn_local(async move {
            let result = api::fetch_trending_topics().await;
            if let Some(PollOutcome::Failed { toast, .. }) =
                dashboard.try_update(|d| d.topics.complete(ticket, result))
            {
                state.show_toast(toast);
            }
        });
    };

    poll();
    let period_ms = dashboard.with_untracked(|d| d.topics.period().as_millis() as u32);
    let interval = Interval::new(period_ms, poll);

    let tickets = dashboard.try_update(|d| d.mount()).unwrap_or_default();

    if let Some(ticket) = tickets.block {
        spawn_local(async move {
            let result = api::fetch_latest_block().await;
            dashboard.try_update(|d| d.block.resolve(ticket, result));
        });
    }

    if let Some(ticket) = tickets.posts {
        spawn_local(async move {
            let result = api::fetch_posts().await;
            dashboard.try_update(|d| d.posts.resolve(ticket, result));
        });
    }

    on_cleanup(move || {
        drop(interval);
        dashboard.try_update(|d| d.unmount());
    });

    provide_context(DashboardState { dashboard });
}
