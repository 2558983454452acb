//! Render-Failure Boundary
//!
//! Supervisory wrapper around a subtree render. A render that returns an
//! error or panics is recorded and replaced by a static fallback with a
//! "Try again" action; children are not rendered again until [`ErrorBoundary::reset`].
//!
//! Only synchronous render failures land here. Fetch failures are handled by
//! their own request sites and never reach the boundary.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

/// Fallback shown in place of a failed subtree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fallback {
    pub message: &'static str,
    pub reset_label: &'static str,
}

pub const FALLBACK: Fallback = Fallback {
    message: "Something went wrong.",
    reset_label: "Try again",
};

/// Output of a guarded render
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered<T> {
    Content(T),
    Fallback(Fallback),
}

impl<T> Rendered<T> {
    pub fn content(self) -> Option<T> {
        match self {
            Rendered::Content(content) => Some(content),
            Rendered::Fallback(_) => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Rendered::Fallback(_))
    }
}

/// A recorded render failure
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFailure {
    pub message: String,
    pub panicked: bool,
    /// Epoch milliseconds
    pub at: i64,
}

impl fmt::Display for RenderFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.panicked {
            write!(f, "render panicked: {}", self.message)
        } else {
            write!(f, "render failed: {}", self.message)
        }
    }
}

/// Catches render failures of everything beneath it
#[derive(Debug, Default)]
pub struct ErrorBoundary {
    failure: Option<RenderFailure>,
    caught: u64,
}

impl ErrorBoundary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the subtree, or the fallback if it fails (or already failed)
    pub fn render<T, E, F>(&mut self, render: F) -> Rendered<T>
    where
        E: fmt::Display,
        F: FnOnce() -> Result<T, E>,
    {
        if self.failure.is_some() {
            return Rendered::Fallback(FALLBACK);
        }

        let failure = match panic::catch_unwind(AssertUnwindSafe(render)) {
            Ok(Ok(content)) => return Rendered::Content(content),
            Ok(Err(e)) => RenderFailure {
                message: e.to_string(),
                panicked: false,
                at: chrono::Utc::now().timestamp_millis(),
            },
            Err(payload) => RenderFailure {
                message: panic_message(payload.as_ref()),
                panicked: true,
                at: chrono::Utc::now().timestamp_millis(),
            },
        };

        self.trip(failure);
        Rendered::Fallback(FALLBACK)
    }

    /// Record a failure caught by a host framework's own boundary
    pub fn record(&mut self, message: impl Into<String>) {
        self.trip(RenderFailure {
            message: message.into(),
            panicked: false,
            at: chrono::Utc::now().timestamp_millis(),
        });
    }

    fn trip(&mut self, failure: RenderFailure) {
        tracing::error!(error = %failure, "Uncaught render error");
        self.caught += 1;
        self.failure = Some(failure);
    }

    /// Clear the failure so the next render re-attempts the children
    pub fn reset(&mut self) {
        if self.failure.take().is_some() {
            tracing::info!("Render boundary reset");
        }
    }

    pub fn has_error(&self) -> bool {
        self.failure.is_some()
    }

    pub fn failure(&self) -> Option<&RenderFailure> {
        self.failure.as_ref()
    }

    /// Failures caught over the boundary's lifetime
    pub fn caught(&self) -> u64 {
        self.caught
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_passes_through() {
        let mut boundary = ErrorBoundary::new();
        let out = boundary.render(|| Ok::<_, String>("grid"));
        assert_eq!(out, Rendered::Content("grid"));
        assert!(!boundary.has_error());
    }

    #[test]
    fn test_error_swaps_in_fallback_until_reset() {
        let mut boundary = ErrorBoundary::new();

        let out = boundary.render(|| Err::<&str, _>("bad card"));
        assert_eq!(out, Rendered::Fallback(FALLBACK));
        assert_eq!(boundary.failure().unwrap().message, "bad card");

        // Children are not invoked while failed
        let mut called = false;
        let out = boundary.render(|| {
            called = true;
            Ok::<_, String>("grid")
        });
        assert!(out.is_fallback());
        assert!(!called);

        boundary.reset();
        let out = boundary.render(|| Ok::<_, String>("grid"));
        assert_eq!(out.content(), Some("grid"));
        assert_eq!(boundary.caught(), 1);
    }

    #[test]
    fn test_panic_is_caught() {
        let mut boundary = ErrorBoundary::new();

        let out = boundary.render(|| -> Result<(), String> { panic!("index out of bounds") });

        assert!(out.is_fallback());
        let failure = boundary.failure().unwrap();
        assert!(failure.panicked);
        assert_eq!(failure.message, "index out of bounds");
    }

    #[test]
    fn test_recorded_failure_trips_boundary() {
        let mut boundary = ErrorBoundary::new();
        boundary.record("missing field `topic`");

        assert!(boundary.has_error());
        assert!(!boundary.failure().unwrap().panicked);
        assert!(boundary.render(|| Ok::<_, String>("grid")).is_fallback());

        boundary.reset();
        assert!(!boundary.has_error());
        assert_eq!(boundary.caught(), 1);
    }

    #[test]
    fn test_fallback_text() {
        assert_eq!(FALLBACK.message, "Something went wrong.");
        assert_eq!(FALLBACK.reset_label, "Try again");
    }
}
