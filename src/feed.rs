use crate::animation::RevealSchedule;
use crate::config::FeedConfig;
use crate::error::Result;
use crate::github::GitHubClient;
use crate::models::{FeedOutcome, RepositorySummary};
use crate::page::ProjectsSection;
use tracing::{error, info};

/// Result of one load: what settled and which cards to reveal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRender {
    pub outcome: FeedOutcome,
    pub reveal: RevealSchedule,
}

/// Drop forks, order by stars (highest first) and keep at most `limit`.
///
/// The sort is stable, so repositories with equal stars keep API order.
pub fn curate(repos: Vec<RepositorySummary>, limit: usize) -> Vec<RepositorySummary> {
    let mut repos: Vec<RepositorySummary> = repos.into_iter().filter(|repo| !repo.is_fork).collect();
    repos.sort_by(|a, b| b.star_count.cmp(&a.star_count));
    repos.truncate(limit);
    repos
}

/// Public repositories of one account, curated for the projects grid
pub struct RepositoryFeed {
    client: GitHubClient,
    config: FeedConfig,
}

impl RepositoryFeed {
    pub fn new(config: FeedConfig) -> Result<Self> {
        let client = GitHubClient::new(config.api_base.clone(), config.request_timeout)?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Fetch the listing and curate it. Any failure is returned whole.
    pub async fn fetch_curated(&self) -> Result<Vec<RepositorySummary>> {
        let (repos, rate_limit) = self
            .client
            .list_user_repos(&self.config.account, self.config.per_page)
            .await?;

        let fetched = repos.len();
        let curated = curate(
            repos.into_iter().map(RepositorySummary::from).collect(),
            self.config.display_limit,
        );

        info!(
            account = %self.config.account,
            fetched,
            shown = curated.len(),
            rate_limit_remaining = rate_limit.remaining,
            "Fetched repositories"
        );
        Ok(curated)
    }

    /// Fetch, then render either the cards or the fallback into `section`
    pub async fn load_and_render(&self, section: &mut ProjectsSection) -> FeedRender {
        let result = self.fetch_curated().await;
        apply_fetch_result(section, &self.config, result)
    }
}

/// Write a settled fetch into the page.
///
/// Success renders the cards and hides the subtitle. Every failure takes
/// the same fallback path.
pub fn apply_fetch_result(
    section: &mut ProjectsSection,
    config: &FeedConfig,
    result: Result<Vec<RepositorySummary>>,
) -> FeedRender {
    match result {
        Ok(repos) => {
            let reveal = section.render_projects(&repos).unwrap_or_default();
            section.hide_subtitle();
            FeedRender {
                outcome: FeedOutcome::Loaded(repos),
                reveal,
            }
        }
        Err(e) => {
            error!(account = %config.account, "Error fetching GitHub repos: {}", e);
            section.render_fallback_projects(&config.profile_url());
            FeedRender {
                outcome: FeedOutcome::Unavailable,
                reveal: RevealSchedule::default(),
            }
        }
    }
}
