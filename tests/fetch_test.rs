use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, Method, StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tokio::time::sleep;

use version_notifier::notifier::{EndpointConfig, FetchError, QueryParams, fetch};

/// Request as seen by the mock version service
#[derive(Debug, Clone)]
struct SeenRequest {
    method: Method,
    application: String,
    content_type: Option<String>,
    body: String,
}

#[derive(Clone, Default)]
struct MockState {
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

fn sample_report() -> Value {
    json!({
        "current_version": "1.0.0",
        "current_download_url": "foo.com",
        "outdated": true,
        "notifications": [
            { "date": 12345, "message": "message" },
            { "date": 12345, "message": "message" }
        ]
    })
}

async fn latest_version(
    State(state): State<MockState>,
    Path(application): Path<String>,
    method: Method,
    headers: HeaderMap,
    body: String,
) -> Json<Value> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    state.seen.lock().unwrap().push(SeenRequest {
        method,
        application,
        content_type,
        body,
    });

    Json(sample_report())
}

async fn slow_latest_version() -> Json<Value> {
    sleep(Duration::from_secs(4)).await;
    Json(sample_report())
}

async fn html_error_page() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>")
}

async fn wrong_shape() -> Json<Value> {
    Json(json!({ "version": "1.0.0" }))
}

/// Starts the mock version service on a random port and returns its base URL
async fn start_mock_server(state: MockState) -> String {
    let app = Router::new()
        .route("/api/v1/latest-version/slow", get(slow_latest_version))
        .route("/api/v1/latest-version/broken", get(html_error_page))
        .route("/api/v1/latest-version/legacy", get(wrong_shape))
        .route("/api/v1/latest-version/{application}", get(latest_version))
        .with_state(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 0));
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    let bound_addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", bound_addr)
}

/// Address that refuses connections
async fn unreachable_host() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_fetch_success() {
    let host = start_mock_server(MockState::default()).await;

    let params = QueryParams::new("test");
    let report = fetch(&params, &EndpointConfig::new(host)).await.unwrap();

    assert_eq!(report.current_version, "1.0.0");
    assert_eq!(report.current_download_url, "foo.com");
    assert!(report.outdated);
    assert_eq!(report.notifications.len(), 2);
    assert_eq!(report.notifications[0].date, 12345);
    assert_eq!(report.notifications[0].message, "message");
}

#[tokio::test]
async fn test_fetch_sends_component_as_form_body_on_get() {
    let state = MockState::default();
    let host = start_mock_server(state.clone()).await;

    let params = QueryParams::new("my-app")
        .with_component("agent smith")
        .with_version("0.9.0");
    fetch(&params, &EndpointConfig::new(host)).await.unwrap();

    let seen = state.seen.lock().unwrap().clone();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].method, Method::GET);
    assert_eq!(seen[0].application, "my-app");
    assert_eq!(
        seen[0].content_type.as_deref(),
        Some("application/x-www-form-urlencoded")
    );
    assert_eq!(seen[0].body, "component=agent+smith");
    assert!(!seen[0].body.contains("0.9.0"));
}

#[tokio::test]
async fn test_fetch_sends_empty_component() {
    let state = MockState::default();
    let host = start_mock_server(state.clone()).await;

    fetch(&QueryParams::new("test"), &EndpointConfig::new(host))
        .await
        .unwrap();

    let seen = state.seen.lock().unwrap().clone();
    assert_eq!(seen[0].body, "component=");
}

#[tokio::test]
async fn test_fetch_host_with_trailing_slash() {
    let host = start_mock_server(MockState::default()).await;

    let config = EndpointConfig::new(format!("{}/", host));
    let report = fetch(&QueryParams::new("test"), &config).await.unwrap();
    assert_eq!(report.current_version, "1.0.0");
}

#[tokio::test]
async fn test_fetch_timeout() {
    let host = start_mock_server(MockState::default()).await;

    let started = Instant::now();
    let err = fetch(&QueryParams::new("slow"), &EndpointConfig::new(host))
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Transport(_)));
    assert!(err.is_timeout());
    assert!(started.elapsed() >= Duration::from_secs(3));
    assert!(started.elapsed() < Duration::from_secs(4));
}

#[tokio::test]
async fn test_fetch_unreachable_host() {
    let host = unreachable_host().await;

    let err = fetch(&QueryParams::new("test"), &EndpointConfig::new(host))
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Transport(_)));
    assert!(!err.is_timeout());
}

#[tokio::test]
async fn test_fetch_non_json_body_is_decode_error() {
    let host = start_mock_server(MockState::default()).await;

    let err = fetch(&QueryParams::new("broken"), &EndpointConfig::new(host))
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn test_fetch_wrong_shape_is_decode_error() {
    let host = start_mock_server(MockState::default()).await;

    let err = fetch(&QueryParams::new("legacy"), &EndpointConfig::new(host))
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn test_fetch_is_repeatable() {
    let state = MockState::default();
    let host = start_mock_server(state.clone()).await;
    let params = QueryParams::new("test").with_component("core");
    let config = EndpointConfig::new(host);

    let first = fetch(&params, &config).await.unwrap();
    let second = fetch(&params, &config).await.unwrap();
    let third = fetch(&params, &config).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(second, third);
    assert_eq!(state.seen.lock().unwrap().len(), 3);
}
