//! Dashboard Backend API
//!
//! Wire types and the HTTP client for the backend the dashboard polls.
//!
//! # Endpoints
//!
//! - `GET /api/trending/topics` - Trending topics with analytics
//! - `POST /api/chat` - Chat assistant (`{ "message": .. }`)
//! - `GET /api/blockchain/latest-block` - Latest block, opaque JSON
//! - `GET <posts_url>` - Posts list from a separate service
//!
//! No authentication, pagination or cancellation headers are sent.

pub mod dto;

#[cfg(feature = "native")]
pub mod client;

pub use dto::{
    BlockData, ChatRequest, ChatResponse, Post, SentimentDistribution, TrendData,
    TrendingTopic, TrendingTopicsResponse,
};

#[cfg(feature = "native")]
pub use client::{DashboardApi, HttpClient};
