mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use common::{feed_for, mount_repos, mount_status, repo_json, wait_for_outcome};
use portfolio_site::actors::{PageController, PageControllerArgs};
use portfolio_site::page::{PageLayout, ProjectsSection};
use portfolio_site::server::{create_router, AppState};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use wiremock::MockServer;

async fn app_for(server: &MockServer) -> (Router, ractor::ActorRef<portfolio_site::actors::PageControllerMessage>) {
    let controller = PageController::spawn_for_page(PageControllerArgs {
        feed: Arc::new(feed_for(server)),
        layout: PageLayout::portfolio(),
        projects: ProjectsSection::default(),
    })
    .await
    .expect("Failed to spawn page controller");

    let router = create_router(AppState {
        controller: controller.clone(),
        start_time: std::time::Instant::now(),
    });
    (router, controller)
}

async fn get(router: &Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_projects_fragment_after_load() {
    let server = MockServer::start().await;
    mount_repos(&server, json!([repo_json("shown", false, 3), repo_json("forked", true, 9)])).await;
    let (router, controller) = app_for(&server).await;
    wait_for_outcome(&controller).await;

    let (status, body) = get(&router, "/projects").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"<h3 class="project-title">shown</h3>"#));
    assert!(!body.contains("forked"));

    controller.stop(None);
}

#[tokio::test]
async fn test_health_reports_loaded_feed() {
    let server = MockServer::start().await;
    mount_repos(&server, json!([repo_json("shown", false, 3)])).await;
    let (router, controller) = app_for(&server).await;
    wait_for_outcome(&controller).await;

    let (status, body) = get(&router, "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    let health: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["repositories_shown"], 1);

    let (status, body) = get(&router, "/readyz").await;
    assert_eq!(status, StatusCode::OK);
    let ready: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(ready["ready"], true);

    controller.stop(None);
}

#[tokio::test]
async fn test_health_degraded_on_fallback() {
    let server = MockServer::start().await;
    mount_status(&server, 404).await;
    let (router, controller) = app_for(&server).await;
    wait_for_outcome(&controller).await;

    let (status, body) = get(&router, "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    let health: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(health["status"], "degraded");

    let (status, body) = get(&router, "/projects").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Check out my projects on"));

    controller.stop(None);
}

#[tokio::test]
async fn test_liveness_and_state() {
    let server = MockServer::start().await;
    mount_repos(&server, json!([])).await;
    let (router, controller) = app_for(&server).await;
    wait_for_outcome(&controller).await;

    let (status, body) = get(&router, "/livez").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("alive"));

    let (status, body) = get(&router, "/state").await;
    assert_eq!(status, StatusCode::OK);
    let state: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(state["menu_open"], false);
    assert_eq!(state["active_section"], "about");
    assert_eq!(state["feed"]["status"], "loaded");

    controller.stop(None);
}

#[tokio::test]
async fn test_unhealthy_when_controller_stopped() {
    let server = MockServer::start().await;
    mount_repos(&server, json!([])).await;
    let (router, controller) = app_for(&server).await;
    wait_for_outcome(&controller).await;

    controller.stop(None);
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;

    let (status, _) = get(&router, "/healthz").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    let (status, _) = get(&router, "/projects").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}
