//! HTTP surface tests against the router, no socket involved.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use revuiq::config::ServerConfig;
use revuiq::server::{AppState, router};
use revuiq::store::MemoryStore;

fn app() -> Router {
    let state = AppState::new(Arc::new(MemoryStore::new()), ServerConfig::default());
    router(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn review_body(business_id: &str, platform_review_id: &str, rating: u8, text: &str) -> Value {
    json!({
        "business_id": business_id,
        "platform": "google",
        "platform_review_id": platform_review_id,
        "author": "Alice",
        "rating": rating,
        "text": text,
        "review_date": "2026-08-20T12:00:00Z",
    })
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app();
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn analyze_returns_labels() {
    let app = app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/analyze",
        Some(json!({ "text": "Amazing food and service!" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sentiment"]["label"], "POSITIVE");
    assert!(body["aspects"].as_array().unwrap().len() >= 2);
}

#[tokio::test]
async fn generate_response_uses_default_business_name() {
    let app = app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/generate-response",
        Some(json!({ "text": "Terrible experience. Long wait times." })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tone"], "apologetic");
    assert!(
        body["response"]
            .as_str()
            .unwrap()
            .contains("our business")
    );
}

#[tokio::test]
async fn review_flow_over_http() {
    let app = app();

    let (status, business) = send(
        &app,
        "POST",
        "/api/businesses",
        Some(json!({ "name": "Luigi's" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let business_id = business["id"].as_str().unwrap().to_string();

    let (status, review) = send(
        &app,
        "POST",
        "/api/reviews",
        Some(review_body(&business_id, "g-1", 5, "Amazing food and service!")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(review["review_approval_status"], "pending");
    let review_id = review["id"].as_str().unwrap().to_string();

    let (status, pending) = send(&app, "GET", "/api/reviews/pending", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(pending.as_array().unwrap().len(), 1);

    let (status, decided) = send(
        &app,
        "POST",
        &format!("/api/reviews/{review_id}/approve"),
        Some(json!({ "is_genuine": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decided["review_approval_status"], "approved");

    // Deciding twice is a conflict and the body names the current state.
    let (status, conflict) = send(
        &app,
        "POST",
        &format!("/api/reviews/{review_id}/approve"),
        Some(json!({ "is_genuine": false })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(conflict["current_status"], "approved");

    let (status, approved) = send(
        &app,
        "POST",
        &format!("/api/responses/{review_id}/approve"),
        Some(json!({ "approved": true, "final_response": "Thanks!" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(approved["response_status"], "approved");

    let (status, posted) = send(
        &app,
        "POST",
        &format!("/api/responses/{review_id}/post"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(posted["response"], "Thanks!");
    assert_eq!(posted["already_posted"], false);

    let (status, reposted) = send(
        &app,
        "POST",
        &format!("/api/responses/{review_id}/post"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reposted["already_posted"], true);
    assert_eq!(reposted["posted_at"], posted["posted_at"]);

    let (status, analytics) = send(
        &app,
        "GET",
        &format!("/api/analytics?business_id={business_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(analytics["total_reviews"], 1);
    assert_eq!(analytics["post_rate"], 100.0);
}

#[tokio::test]
async fn invalid_rating_is_bad_request() {
    let app = app();
    let (_, business) = send(
        &app,
        "POST",
        "/api/businesses",
        Some(json!({ "name": "Luigi's" })),
    )
    .await;
    let business_id = business["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        "POST",
        "/api/reviews",
        Some(review_body(business_id, "g-1", 9, "fine")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("rating"));
}

#[tokio::test]
async fn unknown_review_is_not_found() {
    let app = app();
    let (status, _) = send(
        &app,
        "POST",
        "/api/responses/00000000-0000-0000-0000-000000000000/post",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn bulk_import_reports_duplicates() {
    let app = app();
    let (_, business) = send(
        &app,
        "POST",
        "/api/businesses",
        Some(json!({ "name": "Luigi's" })),
    )
    .await;
    let business_id = business["id"].as_str().unwrap().to_string();

    let reviews = json!({
        "business_id": business_id,
        "reviews": [
            {
                "platform": "google",
                "platform_review_id": "g-1",
                "author": "Alice",
                "rating": 5,
                "text": "Amazing food and service!",
                "review_date": "2026-08-20T12:00:00Z",
            },
            {
                "platform": "google",
                "platform_review_id": "g-1",
                "author": "Alice",
                "rating": 5,
                "text": "Amazing food and service!",
                "review_date": "2026-08-20T12:00:00Z",
            },
        ],
    });
    let (status, report) = send(&app, "POST", "/api/reviews/bulk", Some(reviews)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["created"], 1);
    assert_eq!(report["skipped"], 1);
}
