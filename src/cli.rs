use crate::config::{FeedConfig, API_BASE_URL, DEFAULT_ACCOUNT, DISPLAY_LIMIT};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "portfolio-site")]
#[command(about = "Portfolio page engine - renders the GitHub projects grid and serves page state")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// GitHub account whose repositories are shown
    #[arg(long, env = "GITHUB_ACCOUNT", default_value = DEFAULT_ACCOUNT, global = true)]
    pub account: String,

    /// Maximum number of project cards
    #[arg(long, env = "DISPLAY_LIMIT", default_value_t = DISPLAY_LIMIT, global = true)]
    pub display_limit: usize,

    /// Repositories requested from the API before forks are filtered [default: display limit]
    #[arg(long, env = "PER_PAGE", global = true)]
    pub per_page: Option<usize>,

    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_BASE", default_value = API_BASE_URL, global = true)]
    pub api_base: String,

    /// Request timeout in seconds (none by default)
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", global = true)]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch once and print the projects grid markup
    Render {
        /// Write the markup to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Run the page controller and serve its state over HTTP
    Serve {
        #[arg(long, env = "PORT", default_value_t = 8080)]
        port: u16,
    },
}

impl Cli {
    pub fn feed_config(&self) -> FeedConfig {
        FeedConfig {
            account: self.account.clone(),
            display_limit: self.display_limit,
            per_page: self.per_page.unwrap_or(self.display_limit),
            api_base: self.api_base.clone(),
            request_timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}
