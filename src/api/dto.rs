//! Data Transfer Objects
//!
//! Request and response types exchanged with the dashboard backend.

use serde::{Deserialize, Serialize};

// ============================================
// Trending topics
// ============================================

/// Response body of `GET /api/trending/topics`
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct TrendingTopicsResponse {
    pub trending_topics: Vec<TrendingTopic>,
}

/// One trending topic with its analytics
///
/// `topic` is the render identity and is assumed unique within a response.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(from = "TopicWire")]
pub struct TrendingTopic {
    pub topic: String,
    pub data: TrendData,
}

/// Analytics for a single topic
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct TrendData {
    pub mention_count: u64,
    pub avg_engagement: f64,
    pub mentions_per_hour: f64,
    pub sentiment_distribution: SentimentDistribution,
}

/// Share of positive/neutral/negative mentions.
///
/// Not normalized here; the backend decides whether the three add up to one.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Default)]
pub struct SentimentDistribution {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

/// The backend serializes sorted `(topic, data)` pairs, so a topic arrives
/// either as an object or as a two-element array.
#[derive(Deserialize)]
#[serde(untagged)]
enum TopicWire {
    Object { topic: String, data: TrendData },
    Pair(String, TrendData),
}

impl From<TopicWire> for TrendingTopic {
    fn from(wire: TopicWire) -> Self {
        match wire {
            TopicWire::Object { topic, data } | TopicWire::Pair(topic, data) => {
                TrendingTopic { topic, data }
            }
        }
    }
}

// ============================================
// Chat
// ============================================

/// Body of `POST /api/chat`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatRequest {
    pub message: String,
}

/// Reply from the chat assistant
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatResponse {
    pub response: String,
    #[serde(default)]
    pub suggested_actions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

impl ChatResponse {
    /// Documentation excerpt, ignoring the empty string the backend sends
    /// when it has nothing to attach
    pub fn documentation(&self) -> Option<&str> {
        self.documentation
            .as_deref()
            .map(str::trim)
            .filter(|doc| !doc.is_empty())
    }
}

// ============================================
// Auxiliary payloads
// ============================================

/// Latest block information; the schema belongs to the backend
pub type BlockData = serde_json::Value;

/// A post from the posts service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    pub id: serde_json::Value,
    #[serde(default)]
    pub title: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Post {
    /// Render key derived from the `id` field
    pub fn key(&self) -> String {
        match &self.id {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}
