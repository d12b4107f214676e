// Feedback endpoints: public submission form and dashboard listing

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use barberbuzz_core::Feedback;
use serde::{Deserialize, Serialize};

use super::{
    common::ApiError,
    validation::{validate_feedback, CreateFeedbackRequest},
};
use crate::{storage::CreateFeedbackRow, AppState};

#[derive(Debug, Serialize)]
pub struct CreateFeedbackResponse {
    pub success: bool,
    pub feedback: Feedback,
}

#[derive(Debug, Deserialize)]
pub struct FeedbackQuery {
    /// Record ID of the store to list feedback for
    pub store: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/feedback", post(create_feedback).get(list_feedback))
}

/// POST /api/feedback - Submit feedback through the public form
pub async fn create_feedback(
    State(state): State<AppState>,
    Json(req): Json<CreateFeedbackRequest>,
) -> Result<(StatusCode, Json<CreateFeedbackResponse>), ApiError> {
    validate_feedback(&req).map_err(|msg| ApiError::bad_request(&msg))?;

    let store = state
        .db
        .get_store_by_slug(&req.store)
        .await
        .map_err(|e| {
            tracing::error!("Store lookup failed: {:#}", e);
            ApiError::internal("Internal server error")
        })?
        .ok_or_else(|| ApiError::not_found("Store not found"))?;

    let feedback = state
        .db
        .create_feedback(CreateFeedbackRow {
            store: store.id,
            customer_name: req.customer_name,
            rating: req.rating,
            visit_again: req.visit_again,
            contact: req.contact,
            opt_in: req.opt_in,
            comments: req.comments,
        })
        .await
        .map_err(|e| {
            tracing::error!("Feedback creation failed: {:#}", e);
            ApiError::internal("Failed to create feedback")
        })?;

    Ok((
        StatusCode::CREATED,
        Json(CreateFeedbackResponse {
            success: true,
            feedback,
        }),
    ))
}

/// GET /api/feedback?store={id} - Feedback for a store, newest first
pub async fn list_feedback(
    State(state): State<AppState>,
    Query(query): Query<FeedbackQuery>,
) -> Result<Json<Vec<Feedback>>, ApiError> {
    let store_id = query
        .store
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::bad_request("Store ID is required"))?;

    let feedback = state
        .db
        .list_feedback_for_store(&store_id)
        .await
        .map_err(|e| {
            tracing::error!("Feedback listing failed: {:#}", e);
            ApiError::internal("Failed to fetch feedback")
        })?;

    Ok(Json(feedback))
}
