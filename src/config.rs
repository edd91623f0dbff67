use std::time::Duration;

pub const API_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_ACCOUNT: &str = "mraafaykhan";
pub const DISPLAY_LIMIT: usize = 6;

/// Resolved settings for the repository feed
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Account whose public repositories are listed
    pub account: String,
    /// Maximum number of cards rendered
    pub display_limit: usize,
    /// Page size requested from the API, before forks are filtered out
    pub per_page: usize,
    pub api_base: String,
    /// No timeout unless one is configured
    pub request_timeout: Option<Duration>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            account: DEFAULT_ACCOUNT.to_string(),
            display_limit: DISPLAY_LIMIT,
            per_page: DISPLAY_LIMIT,
            api_base: API_BASE_URL.to_string(),
            request_timeout: None,
        }
    }
}

impl FeedConfig {
    pub fn profile_url(&self) -> String {
        format!("https://github.com/{}", self.account)
    }
}
