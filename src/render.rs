//! Text Rendering
//!
//! Formatting shared by the terminal front-ends and the browser dashboard:
//! topic cards, the topics panel, chat transcript lines, the block dump and
//! the posts list.

use std::fmt::{self, Write};

use crate::api::{BlockData, Post, SentimentDistribution, TrendingTopic};
use crate::chat::{Author, ChatMessage};
use crate::dashboard::{Dashboard, PanelBody, TopicsPanel};

/// Placeholder shown while data has not arrived
pub const LOADING: &str = "Loading...";

/// Heading above the dashboard
pub const TITLE: &str = "SEI Network Analytics";

/// View model of a trending-topic card
#[derive(Debug, Clone, PartialEq)]
pub struct TopicCard {
    /// Render key
    pub key: String,
    pub heading: String,
    pub mentions: u64,
    /// Engagement per mention, one decimal
    pub engagement: String,
    pub mentions_per_hour: String,
    pub sentiment: SentimentDistribution,
}

impl From<&TrendingTopic> for TopicCard {
    fn from(topic: &TrendingTopic) -> Self {
        Self {
            key: topic.topic.clone(),
            heading: format!("#{}", topic.topic),
            mentions: topic.data.mention_count,
            engagement: format!("{:.1}", topic.data.avg_engagement),
            mentions_per_hour: format!("{:.1}", topic.data.mentions_per_hour),
            sentiment: topic.data.sentiment_distribution,
        }
    }
}

impl TopicCard {
    /// Sentiment shares as whole percentages (positive, neutral, negative)
    pub fn sentiment_percent(&self) -> (i64, i64, i64) {
        let pct = |v: f64| (v * 100.0).round() as i64;
        (
            pct(self.sentiment.positive),
            pct(self.sentiment.neutral),
            pct(self.sentiment.negative),
        )
    }
}

impl fmt::Display for TopicCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (pos, neu, neg) = self.sentiment_percent();
        writeln!(f, "{}", self.heading)?;
        writeln!(
            f,
            "  Mentions: {:<8} Engagement: {} per mention",
            self.mentions, self.engagement
        )?;
        write!(
            f,
            "  {}/h  sentiment +{}% ~{}% -{}%",
            self.mentions_per_hour, pos, neu, neg
        )
    }
}

impl fmt::Display for TopicsPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(banner) = &self.banner {
            writeln!(f, "[!] {}", banner)?;
        }
        match &self.body {
            PanelBody::Loading => write!(f, "{}", LOADING),
            PanelBody::Grid(cards) if cards.is_empty() => write!(f, "No trending topics"),
            PanelBody::Grid(cards) => {
                for (i, card) in cards.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    writeln!(f, "{}", card)?;
                }
                Ok(())
            }
        }
    }
}

/// Speaker label for a transcript entry
pub fn speaker(author: Author) -> &'static str {
    match author {
        Author::User => "> You:",
        Author::Agent => "> SEI Agent:",
    }
}

/// Transcript entry as terminal lines, suggestions numbered from 1
pub fn message_lines(message: &ChatMessage) -> Vec<String> {
    let mut lines = vec![speaker(message.author).to_string()];
    lines.extend(message.text.lines().map(|line| format!("    {}", line)));

    if let Some(doc) = &message.documentation {
        lines.push(format!("    (docs) {}", doc));
    }
    for (i, action) in message.suggested_actions.iter().enumerate() {
        lines.push(format!("    [{}] {}", i + 1, action));
    }
    lines
}

/// Pretty-printed block dump
pub fn block_dump(block: &BlockData) -> String {
    serde_json::to_string_pretty(block).unwrap_or_else(|_| block.to_string())
}

/// `(key, title)` pairs for the posts list
pub fn post_items(posts: &[Post]) -> Vec<(String, String)> {
    posts.iter().map(|p| (p.key(), p.title.clone())).collect()
}

/// Full terminal screen: title, topics panel, block and posts
pub fn dashboard_screen(dashboard: &Dashboard) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(out, "{}", TITLE)?;
    writeln!(out, "{}", "=".repeat(TITLE.len()))?;
    writeln!(out)?;
    writeln!(out, "Trending Topics")?;
    writeln!(out, "{}", dashboard.topics.panel())?;
    writeln!(out)?;

    writeln!(out, "Latest Block Information")?;
    match dashboard.block.loaded() {
        Some(block) => writeln!(out, "{}", block_dump(block))?,
        None => writeln!(out, "{}", LOADING)?,
    }
    writeln!(out)?;

    writeln!(out, "Posts")?;
    if let Some(posts) = dashboard.posts.loaded() {
        for (_, title) in post_items(posts) {
            writeln!(out, "  - {}", title)?;
        }
    }

    Ok(out)
}
