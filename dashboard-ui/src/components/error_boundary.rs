//! Render Guard
//!
//! Wraps a subtree in Leptos' error boundary. Failed renders are recorded in
//! a [`RenderBoundary`] and replaced by the fallback until the user
//! asks to try again.

use std::collections::HashSet;
use std::hash::Hash;

use leptos::*;

use sei_dashboard::boundary::{ErrorBoundary as RenderBoundary, FALLBACK};

/// Error boundary around routed content
#[component]
pub fn RenderGuard(children: Children) -> impl IntoView {
    let boundary = store_value(RenderBoundary::new());
    let seen = store_value(HashSet::<ErrorKey>::new());

    // Runs again whenever the error set changes; each error is recorded once
    let fallback = move |errors: RwSignal<Errors>| {
        let fresh = errors.with_untracked(|errors| {
            let entries = errors
                .iter()
                .map(|(key, error)| (key.clone(), error.to_string()));
            seen.try_update_value(|seen| take_unseen(seen, entries))
                .unwrap_or_default()
        });

        for message in fresh {
            web_sys::console::error_1(&format!("render failed: {}", message).into());
            boundary.update_value(|b| b.record(message));
        }

        let reset = move |_| {
            boundary.update_value(|b| b.reset());
            seen.update_value(|seen| seen.clear());
            errors.set(Errors::default());
        };

        view! {
            <div class="flex flex-col items-center justify-center min-h-[40vh] text-center space-y-4">
                <p class="text-xl">{FALLBACK.message}</p>
                <button
                    type="button"
                    on:click=reset
                    class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    {FALLBACK.reset_label}
                </button>
            </div>
        }
    };

    view! {
        <ErrorBoundary fallback=fallback>
            {children()}
        </ErrorBoundary>
    }
}

/// Messages for the keys not seen before, marking them seen
fn take_unseen<K: Eq + Hash>(
    seen: &mut HashSet<K>,
    entries: impl IntoIterator<Item = (K, String)>,
) -> Vec<String> {
    entries
        .into_iter()
        .filter_map(|(key, message)| seen.insert(key).then_some(message))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rerun_records_only_new_errors() {
        let mut seen = HashSet::new();

        let first = take_unseen(&mut seen, vec![(1, "topics".to_string())]);
        assert_eq!(first, vec!["topics".to_string()]);

        // second pass still carries the first error
        let second = take_unseen(
            &mut seen,
            vec![(1, "topics".to_string()), (2, "block".to_string())],
        );
        assert_eq!(second, vec!["block".to_string()]);

        assert!(take_unseen(&mut seen, vec![(2, "block".to_string())]).is_empty());
    }

    #[test]
    fn test_cleared_keys_are_recorded_again() {
        let mut seen = HashSet::new();
        take_unseen(&mut seen, vec![("a", "boom".to_string())]);

        seen.clear();
        assert_eq!(
            take_unseen(&mut seen, vec![("a", "boom".to_string())]),
            vec!["boom".to_string()]
        );
    }
}
