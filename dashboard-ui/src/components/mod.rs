//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod auxiliary;
pub mod chat;
pub mod error_boundary;
pub mod loading;
pub mod nav;
pub mod toast;
pub mod topic_card;

pub use auxiliary::{BlockSection, PostsSection};
pub use chat::ChatWidget;
pub use error_boundary::RenderGuard;
pub use loading::Loading;
pub use nav::Nav;
pub use toast::Toast;
pub use topic_card::{TopicCard, TopicsGrid};
