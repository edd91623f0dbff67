use crate::actors::{PageControllerMessage, PageSnapshot};
use crate::models::FeedOutcome;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use ractor::ActorRef;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

const CALL_TIMEOUT: Duration = Duration::from_secs(5);

/// Health check status
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    pub uptime_seconds: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repositories_shown: Option<usize>,
}

/// Liveness probe response (minimal, just indicates the process is running)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivenessResponse {
    pub status: String,
}

/// Readiness probe response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Application state for the page routes
#[derive(Clone)]
pub struct AppState {
    pub controller: ActorRef<PageControllerMessage>,
    pub start_time: std::time::Instant,
}

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/projects", get(projects_fragment))
        .route("/state", get(page_state))
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
        .route("/livez", get(liveness_check))
        .route("/readyz", get(readiness_check))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Serve the page routes until `shutdown` resolves
pub async fn start_server<F>(
    app_state: AppState,
    port: u16,
    shutdown: F,
) -> std::io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let app = create_router(app_state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Portfolio server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}

async fn fetch_snapshot(state: &AppState) -> Option<PageSnapshot> {
    match state
        .controller
        .call(PageControllerMessage::GetSnapshot, Some(CALL_TIMEOUT))
        .await
    {
        Ok(ractor::rpc::CallResult::Success(snapshot)) => Some(snapshot),
        Ok(_) => {
            error!("Page controller did not answer the snapshot request");
            None
        }
        Err(e) => {
            error!("Failed to contact page controller: {}", e);
            None
        }
    }
}

async fn fetch_outcome(state: &AppState, timeout: Duration) -> Option<Option<FeedOutcome>> {
    match state
        .controller
        .call(PageControllerMessage::GetFeedOutcome, Some(timeout))
        .await
    {
        Ok(ractor::rpc::CallResult::Success(outcome)) => Some(outcome),
        _ => None,
    }
}

/// Current projects grid markup
async fn projects_fragment(State(state): State<AppState>) -> Response {
    let Some(snapshot) = fetch_snapshot(&state).await else {
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    };

    if snapshot.feed.is_none() {
        return (StatusCode::SERVICE_UNAVAILABLE, "Projects are still loading").into_response();
    }

    match snapshot.projects.grid_html() {
        Some(html) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            html.to_string(),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn page_state(State(state): State<AppState>) -> Response {
    match fetch_snapshot(&state).await {
        Some(snapshot) => (StatusCode::OK, Json(snapshot)).into_response(),
        None => StatusCode::SERVICE_UNAVAILABLE.into_response(),
    }
}

/// Healthy with live data, degraded on the fallback card
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let uptime = state.start_time.elapsed().as_secs();

    let (status, message, repositories_shown) = match fetch_outcome(&state, CALL_TIMEOUT).await {
        Some(Some(FeedOutcome::Loaded(repos))) => (HealthStatus::Healthy, None, Some(repos.len())),
        Some(Some(FeedOutcome::Unavailable)) => (
            HealthStatus::Degraded,
            Some("Repository feed unavailable, showing fallback".to_string()),
            None,
        ),
        Some(None) => (
            HealthStatus::Healthy,
            Some("Repository feed still loading".to_string()),
            None,
        ),
        None => (
            HealthStatus::Unhealthy,
            Some("Page controller not responding".to_string()),
            None,
        ),
    };

    let status_code = match status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Degraded => StatusCode::OK, // Still return 200 for degraded
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: uptime,
        message,
        repositories_shown,
    };

    (status_code, Json(response))
}

/// Liveness probe - just checks if the process is alive
async fn liveness_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(LivenessResponse {
            status: "alive".to_string(),
        }),
    )
}

/// Readiness probe - ready once the feed has settled either way
async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let (ready, message) = match fetch_outcome(&state, Duration::from_secs(1)).await {
        Some(Some(_)) => (true, None),
        Some(None) => (false, Some("Repository feed still loading".to_string())),
        None => (false, Some("Page controller not responding".to_string())),
    };

    let status_code = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(ReadinessResponse { ready, message }))
}
