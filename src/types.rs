use serde::Deserialize;

use crate::models::RepositorySummary;

// GitHub API response structures
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubRepo {
    pub name: String,
    pub html_url: String,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
}

/// The page treats empty strings the same as missing values.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl From<GitHubRepo> for RepositorySummary {
    fn from(repo: GitHubRepo) -> Self {
        RepositorySummary {
            name: repo.name,
            url: repo.html_url,
            homepage_url: non_empty(repo.homepage),
            description: non_empty(repo.description),
            primary_language: non_empty(repo.language),
            star_count: repo.stargazers_count,
            fork_count: repo.forks_count,
            is_fork: repo.fork,
        }
    }
}
