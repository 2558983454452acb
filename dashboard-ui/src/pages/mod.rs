//! Pages
//!
//! Top-level page components for each tab.

pub mod chat;
pub mod trending;

pub use chat::Chat;
pub use trending::Trending;
