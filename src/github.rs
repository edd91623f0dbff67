use crate::error::{PortfolioError, Result};
use crate::models::RateLimitState;
use crate::types::GitHubRepo;
use chrono::{DateTime, Utc};
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

const USER_AGENT: &str = "portfolio-site/0.1.0";

pub struct GitHubClient {
    client: Client,
    api_base: String,
}

impl GitHubClient {
    pub fn new(api_base: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(GitHubClient {
            client,
            api_base: api_base.into(),
        })
    }

    /// Build `{base}/users/{account}/repos?sort=updated&per_page={n}`
    pub fn repos_url(&self, account: &str, per_page: usize) -> Result<Url> {
        let mut url = Url::parse(&self.api_base)?;
        url.path_segments_mut()
            .map_err(|_| PortfolioError::ApiError(format!("Unusable API base URL: {}", self.api_base)))?
            .pop_if_empty()
            .extend(["users", account, "repos"]);
        url.query_pairs_mut()
            .append_pair("sort", "updated")
            .append_pair("per_page", &per_page.to_string());
        Ok(url)
    }

    async fn make_request(&self, url: &Url) -> Result<Response> {
        let response = self
            .client
            .get(url.clone())
            .header("Accept", "application/vnd.github.v3+json")
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(response),
            reqwest::StatusCode::NOT_FOUND => {
                Err(PortfolioError::NotFound(format!("Resource not found: {}", url)))
            }
            reqwest::StatusCode::FORBIDDEN | reqwest::StatusCode::TOO_MANY_REQUESTS
                if self.get_rate_limit_state(&response).is_limited =>
            {
                let rate_limit = self.get_rate_limit_state(&response);
                Err(PortfolioError::RateLimitExceeded(format!(
                    "API rate limit exceeded. Reset at: {}",
                    rate_limit.reset_time
                )))
            }
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(PortfolioError::HttpStatus {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }

    /// Get current rate limit state from a response
    pub fn get_rate_limit_state(&self, response: &Response) -> RateLimitState {
        let headers = response.headers();

        let header_u32 = |name: &str| {
            headers
                .get(name)
                .and_then(|h| h.to_str().ok())
                .and_then(|s| s.parse::<u32>().ok())
        };

        let limit = header_u32("X-RateLimit-Limit").unwrap_or(60);
        // Missing headers mean the server does not meter us
        let remaining = header_u32("X-RateLimit-Remaining").unwrap_or(limit);

        let reset = headers
            .get("X-RateLimit-Reset")
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.parse::<i64>().ok())
            .map(|timestamp| DateTime::from_timestamp(timestamp, 0).unwrap_or_else(Utc::now))
            .unwrap_or_else(|| Utc::now() + chrono::Duration::hours(1));

        RateLimitState {
            remaining,
            limit,
            reset_time: reset,
            is_limited: remaining == 0,
        }
    }

    /// Fetch one page of an account's public repositories, most recently updated first
    pub async fn list_user_repos(
        &self,
        account: &str,
        per_page: usize,
    ) -> Result<(Vec<GitHubRepo>, RateLimitState)> {
        let url = self.repos_url(account, per_page)?;
        debug!(%url, "Requesting repository listing");

        let response = self.make_request(&url).await?;
        let rate_limit = self.get_rate_limit_state(&response);
        if rate_limit.remaining < 10 {
            warn!(
                remaining = rate_limit.remaining,
                reset = %rate_limit.reset_time,
                "GitHub rate limit running low"
            );
        }

        let body = response.text().await?;
        let repos: Vec<GitHubRepo> = serde_json::from_str(&body)?;

        Ok((repos, rate_limit))
    }
}
