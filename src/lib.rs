//! # SEI Dashboard
//!
//! Client side of the SEI Network Analytics dashboard: trending-topic
//! polling, a chat assistant, and viewers for the latest block and a posts
//! list.
//!
//! ## Features
//!
//! - **Polling**: trending topics refreshed every minute, one request in flight
//! - **Stale-while-failing**: a failed poll keeps the previous topics on screen
//! - **Chat**: optimistic echo, suggested follow-ups, one outstanding send
//! - **Lifetimes**: every request is bound to the component that issued it
//! - **Render boundary**: failed subtree renders fall back to a reset prompt
//!
//! ## Modules
//!
//! - [`api`]: Wire types and the HTTP client
//! - [`fetch`]: Uniform request bookkeeping and cancellation
//! - [`dashboard`]: Topics poller, one-shot fetches, tokio runtime
//! - [`chat`]: Transcript and send state machine
//! - [`boundary`]: Render-failure boundary
//! - [`render`]: Text formatting shared by every front-end
//!
//! The state machines are runtime-agnostic and are reused by the WASM
//! dashboard. The `native` feature adds the tokio runtime, the `reqwest`
//! client, config files and the binaries.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sei_dashboard::{Config, DashboardRuntime, HttpClient};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let api = Arc::new(HttpClient::new(config.api.clone())?);
//!
//!     let (runtime, mut events) = DashboardRuntime::mount(api, config.polling.period());
//!
//!     while let Some(_event) = events.recv().await {
//!         let dashboard = runtime.snapshot().await;
//!         println!("{}", dashboard.topics.panel());
//!     }
//!
//!     runtime.unmount().await;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod boundary;
pub mod chat;
pub mod dashboard;
pub mod error;
pub mod fetch;
pub mod notify;
pub mod render;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod logging;

// Re-export top-level types for convenience
pub use api::{
    BlockData, ChatRequest, ChatResponse, Post, SentimentDistribution, TrendData,
    TrendingTopic, TrendingTopicsResponse,
};

pub use boundary::{ErrorBoundary, Fallback, RenderFailure, Rendered, FALLBACK};

pub use chat::{Author, ChatController, ChatMessage, ChatOutcome, Delivery, MessageId, APOLOGY};

pub use dashboard::{Dashboard, PanelBody, PollOutcome, TopicsPanel, TopicsPoller, POLL_INTERVAL};

pub use error::{ApiError, ApiResult};

pub use fetch::{CancellationToken, Completion, FetchState, OneShot, RequestTicket, Resource};

pub use notify::{Toast, ToastLevel};

#[cfg(feature = "native")]
pub use api::{DashboardApi, HttpClient};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError};

#[cfg(feature = "native")]
pub use dashboard::{DashboardEvent, DashboardRuntime};
