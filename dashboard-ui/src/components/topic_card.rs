//! Topic Card Component
//!
//! Grid of trending-topic cards with the error banner above it.

use leptos::*;

use sei_dashboard::render::TopicCard as CardData;
use sei_dashboard::{PanelBody, TopicsPanel};

use super::Loading;

/// Banner plus body of the topics panel
#[component]
pub fn TopicsGrid(
    #[prop(into)]
    panel: Signal<TopicsPanel>,
) -> impl IntoView {
    view! {
        <div class="space-y-4">
            // Banner sits above whatever topics are still on screen
            {move || panel.with(|p| p.banner.clone()).map(|banner| view! {
                <div class="bg-red-900/50 border border-red-700 text-red-200 rounded-lg px-4 py-3">
                    {banner}
                </div>
            })}

            {move || match panel.with(|p| p.body.clone()) {
                PanelBody::Loading => view! { <Loading /> }.into_view(),
                PanelBody::Grid(cards) if cards.is_empty() => view! {
                    <p class="text-gray-400 text-sm">"No trending topics"</p>
                }.into_view(),
                PanelBody::Grid(cards) => view! {
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                        <For
                            each=move || cards.clone()
                            key=|card| card.key.clone()
                            children=|card| view! { <TopicCard card=card /> }
                        />
                    </div>
                }.into_view(),
            }}
        </div>
    }
}

/// A single trending topic
#[component]
pub fn TopicCard(card: CardData) -> impl IntoView {
    let (positive, neutral, negative) = card.sentiment_percent();

    view! {
        <div class="bg-gray-800 rounded-xl p-5 space-y-3">
            <h3 class="text-lg font-semibold text-primary-400">{card.heading}</h3>

            <div class="grid grid-cols-2 gap-2 text-sm">
                <div>
                    <p class="text-gray-400">"Mentions"</p>
                    <p class="text-xl font-bold">{card.mentions}</p>
                </div>
                <div>
                    <p class="text-gray-400">"Engagement"</p>
                    <p class="text-xl font-bold">{card.engagement}</p>
                    <p class="text-xs text-gray-500">"per mention"</p>
                </div>
            </div>

            <p class="text-xs text-gray-400">{format!("{} mentions/hour", card.mentions_per_hour)}</p>

            <div class="space-y-1">
                <SentimentBar label="Positive" percent=positive color="bg-green-500" />
                <SentimentBar label="Neutral" percent=neutral color="bg-gray-400" />
                <SentimentBar label="Negative" percent=negative color="bg-red-500" />
            </div>
        </div>
    }
}

#[component]
fn SentimentBar(
    label: &'static str,
    percent: i64,
    color: &'static str,
) -> impl IntoView {
    // Shares are not normalized upstream; only the bar width is clamped
    let width = percent.clamp(0, 100);

    view! {
        <div class="flex items-center space-x-2 text-xs">
            <span class="w-16 text-gray-400">{label}</span>
            <div class="flex-1 h-2 bg-gray-700 rounded">
                <div class=format!("h-2 rounded {}", color) style=format!("width: {}%", width) />
            </div>
            <span class="w-10 text-right">{format!("{}%", percent)}</span>
        </div>
    }
}
