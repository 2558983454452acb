//! Chat Assistant Page

use leptos::*;

use crate::components::ChatWidget;

#[component]
pub fn Chat() -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Chat Assistant"</h1>
                <p class="text-gray-400 mt-1">"Ask the SEI Agent about the network"</p>
            </div>

            <ChatWidget />
        </div>
    }
}
