//! Trending Topics Page
//!
//! Topics grid over the app-level dashboard state. Polling keeps running
//! while another tab is shown.

use leptos::*;

use crate::components::TopicsGrid;
use crate::state::DashboardState;

/// Trending topics page component
#[component]
pub fn Trending() -> impl IntoView {
    let DashboardState { dashboard } =
        use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <section>
            <h1 class="text-3xl font-bold mb-4">"Trending Topics"</h1>
            <TopicsGrid panel=Signal::derive(move || dashboard.with(|d| d.topics.panel())) />
        </section>
    }
}
