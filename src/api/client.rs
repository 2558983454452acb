//! Dashboard Backend Client
//!
//! HTTP client for the trending-topics, chat, latest-block and posts
//! endpoints. Every call is a single attempt; retry policy is the caller's
//! concern and none of the dashboard flows retry.

use async_trait::async_trait;
use reqwest::{header, Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::dto::{BlockData, ChatRequest, ChatResponse, Post, TrendingTopic, TrendingTopicsResponse};
use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};

/// Operations the dashboard needs from its backend
#[async_trait]
pub trait DashboardApi: Send + Sync {
    /// Current trending topics
    async fn trending_topics(&self) -> ApiResult<Vec<TrendingTopic>>;

    /// Send a chat message and wait for the assistant's reply
    async fn send_chat(&self, message: &str) -> ApiResult<ChatResponse>;

    /// Latest block information, verbatim
    async fn latest_block(&self) -> ApiResult<BlockData>;

    /// Posts list
    async fn posts(&self) -> ApiResult<Vec<Post>>;
}

/// `reqwest`-backed implementation of [`DashboardApi`]
pub struct HttpClient {
    client: Client,
    config: ApiConfig,
}

impl HttpClient {
    /// Create a new client with the given configuration
    pub fn new(config: ApiConfig) -> ApiResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        tracing::debug!(url = %url, "GET");

        let response = self.client.get(url).send().await.map_err(map_send_error)?;
        decode(response).await
    }
}

#[async_trait]
impl DashboardApi for HttpClient {
    async fn trending_topics(&self) -> ApiResult<Vec<TrendingTopic>> {
        let url = self.config.url(&self.config.topics_path);
        let body: TrendingTopicsResponse = self.get_json(&url).await?;
        Ok(body.trending_topics)
    }

    async fn send_chat(&self, message: &str) -> ApiResult<ChatResponse> {
        let url = self.config.url(&self.config.chat_path);
        tracing::debug!(url = %url, "POST");

        let response = self
            .client
            .post(&url)
            .json(&ChatRequest {
                message: message.to_string(),
            })
            .send()
            .await
            .map_err(map_send_error)?;

        decode(response).await
    }

    async fn latest_block(&self) -> ApiResult<BlockData> {
        let url = self.config.url(&self.config.block_path);
        self.get_json(&url).await
    }

    async fn posts(&self) -> ApiResult<Vec<Post>> {
        let url = self.config.url(&self.config.posts_url);
        self.get_json(&url).await
    }
}

fn map_send_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::Transport(e.to_string())
    }
}

/// Any non-2xx status is a failure; the code itself is not branched on.
async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let status = response.status();
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        return Err(ApiError::status(status.as_u16(), text));
    }

    let bytes = response.bytes().await.map_err(map_send_error)?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        http::StatusCode,
        routing::{get, post},
        Json, Router,
    };
    use serde_json::{json, Value};

    async fn spawn_backend(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn client_for(base_url: String) -> HttpClient {
        let config = ApiConfig {
            posts_url: format!("{}/posts", base_url),
            base_url,
            ..ApiConfig::default()
        };
        HttpClient::new(config).unwrap()
    }

    fn topic_json(name: &str, mentions: u64) -> Value {
        json!({
            "topic": name,
            "data": {
                "mention_count": mentions,
                "avg_engagement": 2.5,
                "mentions_per_hour": 1.0,
                "sentiment_distribution": {"positive": 0.6, "neutral": 0.3, "negative": 0.1}
            }
        })
    }

    #[tokio::test]
    async fn test_fetch_trending_topics() {
        let router = Router::new().route(
            "/api/trending/topics",
            get(|| async { Json(json!({ "trending_topics": [topic_json("sei", 120)] })) }),
        );
        let client = client_for(spawn_backend(router).await);

        let topics = client.trending_topics().await.unwrap();
        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].topic, "sei");
        assert_eq!(topics[0].data.mention_count, 120);
    }

    #[tokio::test]
    async fn test_non_success_status_is_failure() {
        let router = Router::new().route(
            "/api/trending/topics",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let client = client_for(spawn_backend(router).await);

        let err = client.trending_topics().await.unwrap_err();
        assert_eq!(err, ApiError::status(500, "boom"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let router = Router::new().route(
            "/api/trending/topics",
            get(|| async { Json(json!({ "topics": [] })) }),
        );
        let client = client_for(spawn_backend(router).await);

        let err = client.trending_topics().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_send_chat_posts_message_body() {
        let router = Router::new().route(
            "/api/chat",
            post(|Json(body): Json<Value>| async move {
                Json(json!({
                    "response": format!("echo: {}", body["message"].as_str().unwrap_or("")),
                    "suggested_actions": ["tell me more"]
                }))
            }),
        );
        let client = client_for(spawn_backend(router).await);

        let reply = client.send_chat("hello").await.unwrap();
        assert_eq!(reply.response, "echo: hello");
        assert_eq!(reply.suggested_actions, vec!["tell me more"]);
    }

    #[tokio::test]
    async fn test_block_and_posts() {
        let router = Router::new()
            .route(
                "/api/blockchain/latest-block",
                get(|| async { Json(json!({ "height": 42, "hash": "abc" })) }),
            )
            .route(
                "/posts",
                get(|| async { Json(json!([{ "id": 1, "title": "First" }])) }),
            );
        let client = client_for(spawn_backend(router).await);

        let block = client.latest_block().await.unwrap();
        assert_eq!(block["height"], 42);

        let posts = client.posts().await.unwrap();
        assert_eq!(posts[0].title, "First");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        // Bind then drop to get a port nobody listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(format!("http://{}", addr));
        let err = client.trending_topics().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
