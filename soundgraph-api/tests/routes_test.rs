//! Endpoint validation tests driven through the router.
//!
//! All tests run against a keyless state, so request validation and the
//! missing-credential mapping are exercised without any network traffic.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use soundgraph_api::config::ApiConfig;
use soundgraph_api::server::create_app;
use soundgraph_api::state::AppState;
use tower::ServiceExt;

fn test_app() -> Router {
    create_app(AppState::from_config(&ApiConfig::default()))
}

fn json_request(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn test_health_check_returns_ok() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_root_returns_ok() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/nope")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_music_duration_out_of_range_is_rejected() {
    let response = test_app()
        .oneshot(json_request(
            "/music/generate",
            json!({"prompt": "lofi beat", "duration_ms": 500}),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["status"], 400);
    assert!(
        body["detail"]
            .as_str()
            .expect("detail")
            .contains("duration_ms")
    );
}

#[tokio::test]
async fn test_music_requires_graph_or_prompt() {
    let response = test_app()
        .oneshot(json_request("/music/generate", json!({})))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(
        body["detail"]
            .as_str()
            .expect("detail")
            .contains("graph or prompt")
    );
}

#[tokio::test]
async fn test_graph_update_without_credentials_returns_400() {
    let response = test_app()
        .oneshot(json_request(
            "/graph/update",
            json!({
                "current_graph": {"nodes": [], "edges": []},
                "instruction": "add a chorus"
            }),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(
        body["detail"]
            .as_str()
            .expect("detail")
            .contains("not configured")
    );
}

#[tokio::test]
async fn test_graph_update_rejects_empty_instruction() {
    let response = test_app()
        .oneshot(json_request(
            "/graph/update",
            json!({
                "current_graph": {"nodes": [], "edges": []},
                "instruction": "   "
            }),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(
        body["detail"]
            .as_str()
            .expect("detail")
            .contains("instruction")
    );
}

#[tokio::test]
async fn test_producer_analyze_text_without_credentials_returns_400() {
    let response = test_app()
        .oneshot(json_request(
            "/producer/analyze-text",
            json!({"nodes": [], "edges": []}),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_recommendations_without_credentials_returns_400() {
    let response = test_app()
        .oneshot(json_request(
            "/recommendations/generate",
            json!({"nodes": [], "edges": []}),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_transcribe_without_file_field_returns_400() {
    let boundary = "test-boundary";
    let body = format!(
        "--{boundary}\r\nContent-Disposition: form-data; name=\"other\"\r\n\r\nhello\r\n--{boundary}--\r\n"
    );

    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/transcribe")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={boundary}"),
                )
                .body(Body::from(body))
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["detail"].as_str().expect("detail").contains("file"));
}

#[tokio::test]
async fn test_error_body_shape() {
    let response = test_app()
        .oneshot(json_request(
            "/music/generate",
            json!({"prompt": "x", "duration_ms": 999_999}),
        ))
        .await
        .expect("response");

    let body = body_json(response).await;
    assert!(body["title"].is_string());
    assert!(body["status"].is_number());
    assert!(body["detail"].is_string());
}
