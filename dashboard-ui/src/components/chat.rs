//! Chat Widget Component
//!
//! Transcript, suggested follow-ups and the input box. All send bookkeeping
//! lives in [`ChatController`]; this component only forwards DOM events and
//! runs the request.

use leptos::*;

use sei_dashboard::chat::{
    is_submit_key, ChatController, ChatMessage, ChatOutcome, Delivery, OutgoingMessage,
};
use sei_dashboard::render::speaker;

use super::loading::InlineLoading;
use crate::api;
use crate::state::global::GlobalState;

/// Chat assistant widget
#[component]
pub fn ChatWidget() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let chat = create_rw_signal(ChatController::new().with_on_send(|text| {
        web_sys::console::log_1(&format!("Chat message sent: {}", text).into());
    }));

    // A reply that lands after the widget is gone finds the signal disposed
    on_cleanup(move || {
        chat.try_update(|c| c.unmount());
    });

    let dispatch = move |outgoing: Option<OutgoingMessage>| {
        let Some(OutgoingMessage { ticket, text }) = outgoing else {
            return;
        };

        spawn_local(async move {
            let result = api::send_chat(&text).await;
            if let Some(ChatOutcome::Failed { toast, .. }) =
                chat.try_update(|c| c.resolve(ticket, result))
            {
                state.show_toast(toast);
            }
        });
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let key = ev.key();
        let shift = ev.shift_key();
        if is_submit_key(&key, shift) {
            ev.prevent_default();
        }
        dispatch(chat.try_update(|c| c.on_key(&key, shift)).flatten());
    };

    let sending = move || chat.with(|c| c.is_sending());

    // Keep the newest entry in view
    let end_ref = create_node_ref::<html::Div>();
    create_effect(move |prev: Option<usize>| {
        let len = chat.with(|c| c.transcript().len());
        if should_scroll(prev, len) {
            if let Some(end) = end_ref.get() {
                end.scroll_into_view();
            }
        }
        len
    });

    view! {
        <div class="bg-gray-800 rounded-xl flex flex-col h-[70vh]">
            <div class="flex-1 overflow-y-auto p-4 space-y-4">
                <For
                    each=move || chat.with(|c| c.transcript().to_vec())
                    key=|message| message.id.clone()
                    children=move |message| view! { <MessageBubble message=message chat=chat /> }
                />
                <div node_ref=end_ref />
            </div>

            <div class="border-t border-gray-700 p-4 flex space-x-2">
                <textarea
                    rows="1"
                    placeholder="Ask about the SEI network..."
                    prop:value=move || chat.with(|c| c.input().to_string())
                    on:input=move |ev| {
                        chat.update(|c| {
                            c.set_input(event_target_value(&ev));
                        });
                    }
                    on:keydown=on_keydown
                    disabled=sending
                    class="flex-1 bg-gray-700 rounded-lg px-4 py-2 resize-none
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
                <button
                    type="button"
                    on:click=move |_| dispatch(chat.try_update(|c| c.submit()).flatten())
                    disabled=move || sending() || chat.with(|c| c.input().trim().is_empty())
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg font-medium transition-colors"
                >
                    {move || if sending() {
                        view! { <InlineLoading /> }.into_view()
                    } else {
                        "Send".into_view()
                    }}
                </button>
            </div>
        </div>
    }
}

/// Whether the transcript grew since the effect last ran
fn should_scroll(prev: Option<usize>, len: usize) -> bool {
    match prev {
        Some(prev) => len > prev,
        None => len > 0,
    }
}

/// One transcript entry
#[component]
fn MessageBubble(
    message: ChatMessage,
    chat: RwSignal<ChatController>,
) -> impl IntoView {
    let is_user = message.is_user();
    let id = message.id.clone();

    let (align, bubble) = if is_user {
        ("justify-end", "bg-primary-600")
    } else {
        ("justify-start", "bg-gray-700")
    };

    view! {
        <div class=format!("flex {}", align)>
            <div class=format!("max-w-[75%] rounded-lg px-4 py-3 space-y-2 {}", bubble)>
                <p class="text-xs text-gray-300">{speaker(message.author)}</p>
                <p class="whitespace-pre-wrap">{message.text.clone()}</p>

                {message.documentation.clone().map(|doc| view! {
                    <p class="text-xs text-gray-300 border-t border-gray-600 pt-2">{doc}</p>
                })}

                {is_user.then(|| view! {
                    <p class="text-xs text-right text-gray-300">
                        {move || match chat.with(|c| c.delivery(&id)) {
                            Some(Delivery::Pending) => "sending...",
                            Some(Delivery::Failed) => "not delivered",
                            Some(Delivery::Sent) | None => "",
                        }}
                    </p>
                })}

                <div class="flex flex-wrap gap-2">
                    {message.suggested_actions.iter().cloned().map(|action| {
                        let label = action.clone();
                        view! {
                            <button
                                type="button"
                                on:click=move |_| {
                                    chat.update(|c| {
                                        c.activate_suggestion(&action);
                                    });
                                }
                                class="px-3 py-1 bg-gray-600 hover:bg-gray-500 rounded-full text-xs text-gray-200 transition-colors"
                            >
                                {label}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
