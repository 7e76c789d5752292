//! Route table and handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Value, json};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use crate::analysis::{self, AnalysisResult};
use crate::analytics::{self, AnalyticsQuery, AnalyticsResult};
use crate::approval::{PostOutcome, ResponseDecision, ReviewDecision};
use crate::error::ValidationError;
use crate::pipeline::BulkImportReport;
use crate::response::{self, ResponseResult, Tone};
use crate::review::model::{Business, Review, ReviewInput};
use crate::server::{ApiError, AppState};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/analyze", post(analyze))
        .route("/api/generate-response", post(generate_response))
        .route("/api/businesses", post(create_business).get(list_businesses))
        .route("/api/reviews", post(create_review))
        .route("/api/reviews/bulk", post(bulk_import))
        .route("/api/reviews/pending", get(pending_reviews))
        .route("/api/reviews/{id}/approve", post(approve_review))
        .route("/api/responses/{id}/approve", post(approve_response))
        .route("/api/responses/{id}/post", post(post_response))
        .route("/api/analytics", get(get_analytics))
        .layer(ServiceBuilder::new().layer(CorsLayer::permissive()))
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[derive(Deserialize)]
struct AnalyzeRequest {
    text: String,
}

async fn analyze(Json(req): Json<AnalyzeRequest>) -> Json<AnalysisResult> {
    Json(analysis::analyze(&req.text))
}

#[derive(Deserialize)]
struct GenerateRequest {
    text: String,
    business_name: Option<String>,
    tone: Option<Tone>,
}

async fn generate_response(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Json<ResponseResult> {
    let business_name = req
        .business_name
        .unwrap_or_else(|| state.config.default_business_name.clone());
    let analysis = analysis::analyze(&req.text);
    Json(response::generate(&analysis, &business_name, req.tone))
}

#[derive(Deserialize)]
struct CreateBusinessRequest {
    name: String,
    #[serde(default = "default_category")]
    category: String,
}

fn default_category() -> String {
    "restaurant".to_string()
}

async fn create_business(
    State(state): State<AppState>,
    Json(req): Json<CreateBusinessRequest>,
) -> Result<(StatusCode, Json<Business>), ApiError> {
    if req.name.trim().is_empty() {
        return Err(ValidationError::EmptyBusinessName.into());
    }
    let business = state
        .store
        .insert_business(Business::new(req.name, req.category))
        .await?;
    Ok((StatusCode::CREATED, Json(business)))
}

async fn list_businesses(
    State(state): State<AppState>,
) -> Result<Json<Vec<Business>>, ApiError> {
    Ok(Json(state.store.list_businesses().await?))
}

#[derive(Deserialize)]
struct CreateReviewRequest {
    business_id: Uuid,
    #[serde(flatten)]
    input: ReviewInput,
}

async fn create_review(
    State(state): State<AppState>,
    Json(req): Json<CreateReviewRequest>,
) -> Result<(StatusCode, Json<Review>), ApiError> {
    let review = state.pipeline.ingest(req.business_id, req.input).await?;
    Ok((StatusCode::CREATED, Json(review)))
}

#[derive(Deserialize)]
struct BulkImportRequest {
    business_id: Uuid,
    reviews: Vec<ReviewInput>,
}

async fn bulk_import(
    State(state): State<AppState>,
    Json(req): Json<BulkImportRequest>,
) -> Result<Json<BulkImportReport>, ApiError> {
    let report = state
        .pipeline
        .ingest_bulk(req.business_id, req.reviews)
        .await?;
    Ok(Json(report))
}

#[derive(Deserialize)]
struct BusinessFilter {
    business_id: Option<Uuid>,
}

async fn pending_reviews(
    State(state): State<AppState>,
    Query(filter): Query<BusinessFilter>,
) -> Result<Json<Vec<Review>>, ApiError> {
    Ok(Json(state.store.pending_reviews(filter.business_id).await?))
}

async fn approve_review(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(decision): Json<ReviewDecision>,
) -> Result<Json<Review>, ApiError> {
    Ok(Json(state.store.decide_review(id, decision).await?))
}

async fn approve_response(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(decision): Json<ResponseDecision>,
) -> Result<Json<Review>, ApiError> {
    Ok(Json(state.store.decide_response(id, decision).await?))
}

async fn post_response(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let (review, outcome) = state.store.post_response(id).await?;
    Ok(Json(json!({
        "outcome": outcome,
        "already_posted": outcome == PostOutcome::AlreadyPosted,
        "posted_at": review.posted_at,
        "response": review.effective_response(),
    })))
}

#[derive(Deserialize)]
struct AnalyticsParams {
    days: Option<i64>,
    business_id: Option<Uuid>,
    #[serde(default)]
    include_rejected: bool,
}

async fn get_analytics(
    State(state): State<AppState>,
    Query(params): Query<AnalyticsParams>,
) -> Result<Json<AnalyticsResult>, ApiError> {
    let reviews = state.store.list_reviews(params.business_id).await?;
    let query = AnalyticsQuery {
        window_days: params.days.unwrap_or(state.config.default_window_days),
        business_id: params.business_id,
        include_rejected: params.include_rejected,
    };
    Ok(Json(analytics::compute(&reviews, query)))
}
