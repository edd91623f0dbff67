#![allow(dead_code)]

use portfolio_site::config::FeedConfig;
use portfolio_site::feed::RepositoryFeed;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ACCOUNT: &str = "mraafaykhan";
pub const REPOS_PATH: &str = "/users/mraafaykhan/repos";

/// A repository record shaped like the GitHub API response
pub fn repo_json(name: &str, fork: bool, stars: u32) -> Value {
    json!({
        "name": name,
        "full_name": format!("{}/{}", ACCOUNT, name),
        "html_url": format!("https://github.com/{}/{}", ACCOUNT, name),
        "homepage": null,
        "description": format!("{} description", name),
        "language": "Rust",
        "fork": fork,
        "stargazers_count": stars,
        "forks_count": 1,
    })
}

pub fn config_for(server: &MockServer) -> FeedConfig {
    FeedConfig {
        api_base: server.uri(),
        ..FeedConfig::default()
    }
}

pub fn feed_for(server: &MockServer) -> RepositoryFeed {
    RepositoryFeed::new(config_for(server)).expect("Failed to create feed")
}

/// Feed pointed at a port nothing listens on
pub fn unreachable_feed() -> RepositoryFeed {
    RepositoryFeed::new(FeedConfig {
        api_base: "http://127.0.0.1:1".to_string(),
        ..FeedConfig::default()
    })
    .expect("Failed to create feed")
}

/// Serve `body` as the repository listing for the default page size
pub async fn mount_repos(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path(REPOS_PATH))
        .and(query_param("sort", "updated"))
        .and(query_param("per_page", "6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mount_status(server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .and(path(REPOS_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_string("{\"message\":\"nope\"}"))
        .mount(server)
        .await;
}

/// Poll the controller until the feed has settled
pub async fn wait_for_outcome(
    controller: &ractor::ActorRef<portfolio_site::actors::PageControllerMessage>,
) -> portfolio_site::models::FeedOutcome {
    use portfolio_site::actors::PageControllerMessage;
    use std::time::Duration;

    for _ in 0..100 {
        if let Ok(ractor::rpc::CallResult::Success(Some(outcome))) = controller
            .call(PageControllerMessage::GetFeedOutcome, Some(Duration::from_secs(1)))
            .await
        {
            return outcome;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("Feed did not settle in time");
}
