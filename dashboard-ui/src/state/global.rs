//! Global Application State
//!
//! Reactive state shared by every route, using Leptos signals.

use leptos::*;

use sei_dashboard::Toast;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Toast currently on screen
    pub toast: RwSignal<Option<Toast>>,
    /// Bumped on every toast so a stale timeout does not clear a newer one
    toast_seq: RwSignal<u64>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState {
        toast: create_rw_signal(None),
        toast_seq: create_rw_signal(0),
    });
}

impl GlobalState {
    /// Show a toast; it clears itself after its duration
    pub fn show_toast(&self, toast: Toast) {
        let duration = toast.duration_ms();
        self.toast.set(Some(toast));

        let seq = self.toast_seq.get_untracked() + 1;
        self.toast_seq.set(seq);

        let toast_signal = self.toast;
        let seq_signal = self.toast_seq;
        gloo_timers::callback::Timeout::new(duration, move || {
            if seq_signal.get_untracked() == seq {
                toast_signal.set(None);
            }
        })
        .forget();
    }

    pub fn dismiss_toast(&self) {
        self.toast.set(None);
    }
}
