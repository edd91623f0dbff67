use serde::{Deserialize, Serialize};

/// A public repository as shown on a project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub name: String,
    pub url: String,
    #[serde(rename = "homepageUrl")]
    pub homepage_url: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "primaryLanguage")]
    pub primary_language: Option<String>,
    #[serde(rename = "starCount")]
    pub star_count: u32,
    #[serde(rename = "forkCount")]
    pub fork_count: u32,
    #[serde(rename = "isFork")]
    pub is_fork: bool,
}

/// How a feed load settled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "repositories", rename_all = "snake_case")]
pub enum FeedOutcome {
    /// Curated repositories were rendered into the grid
    Loaded(Vec<RepositorySummary>),
    /// The fetch failed and the fallback card was rendered
    Unavailable,
}

impl FeedOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, FeedOutcome::Loaded(_))
    }
}

/// Rate limit state reported by the API on the last response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitState {
    pub remaining: u32,
    pub limit: u32,
    pub reset_time: chrono::DateTime<chrono::Utc>,
    pub is_limited: bool,
}

impl Default for RateLimitState {
    fn default() -> Self {
        // Unauthenticated requests get 60 per hour
        Self {
            remaining: 60,
            limit: 60,
            reset_time: chrono::Utc::now() + chrono::Duration::hours(1),
            is_limited: false,
        }
    }
}
