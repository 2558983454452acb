//! Loading Component

use leptos::*;

use sei_dashboard::render::LOADING;

/// Spinner with the loading caption
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center space-x-2 py-12 text-gray-400">
            <div class="loading-spinner w-6 h-6" />
            <span>{LOADING}</span>
        </div>
    }
}

/// Inline loading spinner
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-4 h-4" />
    }
}
