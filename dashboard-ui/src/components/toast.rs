//! Toast Notification Component
//!
//! Shows the current toast from [`GlobalState`].

use leptos::*;

use sei_dashboard::{Toast as ToastData, ToastLevel};

use crate::state::global::GlobalState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed bottom-6 right-4 z-50 space-y-2">
            {move || {
                state.toast.get().map(|toast| view! {
                    <ToastMessage toast=toast on_dismiss=move || state.dismiss_toast() />
                })
            }}
        </div>
    }
}

#[component]
fn ToastMessage(
    toast: ToastData,
    on_dismiss: impl Fn() + 'static,
) -> impl IntoView {
    let (icon, bg_class) = match toast.level {
        ToastLevel::Success => ("✓", "bg-green-600"),
        ToastLevel::Error => ("✕", "bg-red-600"),
    };

    view! {
        <div
            role="alert"
            class=format!(
                "flex items-start space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
                 transform transition-all duration-300 ease-out animate-slide-in",
                bg_class
            )
        >
            <span class="text-lg">{icon}</span>
            <div class="flex-1">
                <p class="text-sm font-semibold">{toast.title}</p>
                <p class="text-sm">{toast.description}</p>
            </div>
            <button
                type="button"
                on:click=move |_| on_dismiss()
                class="text-white/70 hover:text-white text-sm"
            >
                "×"
            </button>
        </div>
    }
}
