//! Transient Notifications
//!
//! Toast descriptors raised by the poller and the chat controller. Front-ends
//! decide how to show them; both clear them after `duration`.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

/// A short-lived notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: &'static str,
    pub description: &'static str,
    pub level: ToastLevel,
    pub duration: Duration,
}

/// Raised when a trending-topics poll fails
pub const TOPICS_FAILED: Toast = Toast {
    title: "Error",
    description: "Failed to fetch trending topics",
    level: ToastLevel::Error,
    duration: Duration::from_millis(5000),
};

/// Raised when a chat send fails
pub const CHAT_FAILED: Toast = Toast {
    title: "Error",
    description: "Failed to send message",
    level: ToastLevel::Error,
    duration: Duration::from_millis(5000),
};

impl Toast {
    pub fn is_error(&self) -> bool {
        self.level == ToastLevel::Error
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration.as_millis().min(u32::MAX as u128) as u32
    }
}

impl std::fmt::Display for Toast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_toasts() {
        for toast in [TOPICS_FAILED, CHAT_FAILED] {
            assert!(toast.is_error());
            assert_eq!(toast.duration_ms(), 5000);
        }
        assert_eq!(TOPICS_FAILED.to_string(), "Error: Failed to fetch trending topics");
    }
}
