//! Movie recommendation providers
//!
//! A provider turns a watched-movie history into recommended titles.
//! Quota exhaustion and timeouts are not failures here: they surface as
//! the typed `Fallback` outcome, and callers answer with the fixed list
//! below. Only genuinely unexpected upstream behavior is an error.

use anyhow::Result;
use cinebook_shared::types::WatchedMovie;

mod openai;

pub use openai::OpenAiRecommender;

/// Titles served when the upstream is rate limited or out of time.
/// Order is part of the API contract.
pub const FALLBACK_TITLES: [&str; 5] = [
    "The Dark Knight",
    "Interstellar",
    "Mad Max: Fury Road",
    "Edge of Tomorrow",
    "The Prestige",
];

/// The fallback list as owned strings, in contract order
pub fn fallback_titles() -> Vec<String> {
    FALLBACK_TITLES.iter().map(|t| t.to_string()).collect()
}

/// Outcome of a recommendation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecommendationOutcome {
    /// The upstream produced a list of recommended titles
    Generated(Vec<String>),
    /// The upstream was rate limited or timed out; serve the fixed list
    Fallback,
}

/// Trait for recommendation providers
#[async_trait::async_trait]
pub trait RecommendationProvider: Send + Sync {
    /// Recommend titles for an ordered watched-movie history
    ///
    /// Errors carry upstream detail for logging; callers must map them
    /// to a generic response rather than exposing the message.
    async fn recommend(&self, watched: &[WatchedMovie]) -> Result<RecommendationOutcome>;

    /// Provider name for logging
    fn name(&self) -> &'static str;
}
