//! HTTP API Client
//!
//! Functions for communicating with the dashboard backend. Every failure is
//! mapped onto the shared [`ApiError`] taxonomy.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use sei_dashboard::{
    ApiError, ApiResult, BlockData, ChatRequest, ChatResponse, Post, TrendingTopic,
    TrendingTopicsResponse,
};

/// Default API base URL: empty, so requests go to the serving origin
pub const DEFAULT_API_BASE: &str = "";

/// Posts are served by a separate service
pub const POSTS_URL: &str = "http://localhost:5000/posts";

const STORAGE_KEY: &str = "sei_dashboard_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());

    normalize_base(stored.as_deref().unwrap_or(DEFAULT_API_BASE))
}

fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    if !response.ok() {
        let message = response.text().await.unwrap_or_default();
        return Err(ApiError::status(response.status(), message));
    }

    let body = response
        .binary()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    Ok(serde_json::from_slice(&body)?)
}

async fn get_json<T: DeserializeOwned>(url: &str) -> ApiResult<T> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    decode(response).await
}

// ============ API Functions ============

/// Fetch the current trending topics
pub async fn fetch_trending_topics() -> ApiResult<Vec<TrendingTopic>> {
    let url = format!("{}/api/trending/topics", get_api_base());
    let result: TrendingTopicsResponse = get_json(&url).await?;
    Ok(result.trending_topics)
}

/// Send one chat message
pub async fn send_chat(message: &str) -> ApiResult<ChatResponse> {
    let url = format!("{}/api/chat", get_api_base());

    let response = Request::post(&url)
        .json(&ChatRequest {
            message: message.to_string(),
        })
        .map_err(|e| ApiError::Transport(format!("Request build error: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    decode(response).await
}

/// Fetch the latest block, kept opaque
pub async fn fetch_latest_block() -> ApiResult<BlockData> {
    get_json(&format!("{}/api/blockchain/latest-block", get_api_base())).await
}

/// Fetch the posts list
pub async fn fetch_posts() -> ApiResult<Vec<Post>> {
    get_json(POSTS_URL).await
}
