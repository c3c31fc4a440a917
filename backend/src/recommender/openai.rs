//! OpenAI-compatible chat-completions recommender
//!
//! Sends the watched history to a chat-completions endpoint and parses
//! the model reply against the documented contract: a JSON array of at
//! most five titles, optionally wrapped in a markdown code fence.
//!
//! HTTP 429 and request timeouts become the typed fallback outcome. Any
//! other upstream failure is an error whose detail stays in the logs.

use crate::config::RecommenderConfig;
use crate::recommender::{RecommendationOutcome, RecommendationProvider};
use anyhow::Result;
use cinebook_shared::types::WatchedMovie;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Maximum number of titles relayed from a model reply
const MAX_RECOMMENDATIONS: usize = 5;

const SYSTEM_PROMPT: &str = "You are a movie recommendation assistant.";

/// Chat-completions request body
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// Chat-completions response body (only the fields we read)
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ChatReplyMessage {
    #[serde(default)]
    content: String,
}

/// Recommendation provider backed by an OpenAI-compatible API
pub struct OpenAiRecommender {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl OpenAiRecommender {
    /// Create a provider from configuration
    ///
    /// The client carries the total request budget; a call that exceeds
    /// it is aborted and treated as the fallback outcome.
    pub fn new(config: &RecommenderConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(config.request_timeout_secs))
                .connect_timeout(Duration::from_secs(5))
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            api_url: config.api_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        }
    }

    /// Build the user prompt from the watched history, in order
    fn build_prompt(watched: &[WatchedMovie]) -> String {
        let formatted_movies = watched
            .iter()
            .map(|movie| format!("- {} ({})", movie.title, movie.genre))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "A user has previously watched the following movies:\n\n{}\n\n\
             Based on their interests, recommend 5 new movies.\n\
             Return only movie names as a JSON list.\n\
             Example format:\n\
             [\"Movie 1\", \"Movie 2\", \"Movie 3\", \"Movie 4\", \"Movie 5\"]",
            formatted_movies
        )
    }

    /// Parse a model reply into a list of titles
    ///
    /// Accepts a JSON array of strings, tolerating a ```json fence around
    /// it, and truncates to at most five entries.
    fn parse_titles(reply: &str) -> Result<Vec<String>> {
        let mut body = reply.trim();
        if let Some(stripped) = body.strip_prefix("```json") {
            body = stripped;
        } else if let Some(stripped) = body.strip_prefix("```") {
            body = stripped;
        }
        if let Some(stripped) = body.strip_suffix("```") {
            body = stripped;
        }

        let mut titles: Vec<String> = serde_json::from_str(body.trim())
            .map_err(|e| anyhow::anyhow!("Model reply is not a JSON list of titles: {}", e))?;
        titles.truncate(MAX_RECOMMENDATIONS);
        Ok(titles)
    }
}

#[async_trait::async_trait]
impl RecommendationProvider for OpenAiRecommender {
    async fn recommend(&self, watched: &[WatchedMovie]) -> Result<RecommendationOutcome> {
        let url = format!("{}/v1/chat/completions", self.api_url);

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: Self::build_prompt(watched),
                },
            ],
            temperature: 0.7,
        };

        debug!(model = %self.model, movies = watched.len(), "Requesting recommendations");

        let response = match self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                warn!("Recommendation request timed out, serving fallback");
                return Ok(RecommendationOutcome::Fallback);
            }
            Err(e) => {
                return Err(anyhow::anyhow!("Recommendation request failed: {}", e));
            }
        };

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            warn!("Recommendation upstream rate limited, serving fallback");
            return Ok(RecommendationOutcome::Fallback);
        }

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            anyhow::bail!("Recommendation upstream returned status {}: {}", status, detail);
        }

        // The total request budget can also elapse while the body is being
        // read; that is still a timeout, not an upstream failure
        let chat: ChatResponse = match response.json().await {
            Ok(chat) => chat,
            Err(e) if e.is_timeout() => {
                warn!("Recommendation response read timed out, serving fallback");
                return Ok(RecommendationOutcome::Fallback);
            }
            Err(e) => {
                return Err(anyhow::anyhow!("Failed to parse upstream response: {}", e));
            }
        };

        let content = chat
            .choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .ok_or_else(|| anyhow::anyhow!("Upstream response contained no choices"))?;

        let titles = Self::parse_titles(content)?;
        Ok(RecommendationOutcome::Generated(titles))
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}
