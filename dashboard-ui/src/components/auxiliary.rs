//! Block and Posts Sections
//!
//! Shown under every tab. A failed fetch looks the same as one still in
//! flight.

use leptos::*;

use sei_dashboard::render::{block_dump, post_items};

use super::Loading;
use crate::state::DashboardState;

/// Latest block dump
#[component]
pub fn BlockSection() -> impl IntoView {
    let DashboardState { dashboard } =
        use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Latest Block Information"</h2>
            {move || match dashboard.with(|d| d.block.loaded().map(block_dump)) {
                Some(dump) => view! {
                    <pre class="text-xs text-gray-300 overflow-x-auto">{dump}</pre>
                }.into_view(),
                None => view! { <Loading /> }.into_view(),
            }}
        </section>
    }
}

/// Post titles keyed by post id
#[component]
pub fn PostsSection() -> impl IntoView {
    let DashboardState { dashboard } =
        use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Posts"</h2>
            <ul class="space-y-2">
                <For
                    each=move || dashboard.with(|d| d.posts.loaded().map(|p| post_items(p)).unwrap_or_default())
                    key=|(key, _)| key.clone()
                    children=|(_, title)| view! { <li class="text-gray-300">{title}</li> }
                />
            </ul>
        </section>
    }
}
