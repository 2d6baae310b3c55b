//! Saved-ideas listing, lookup, and removal

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use nbi_core::IdeaWithScore;

use crate::AppState;

/// Maximum saved ideas returned by the listing endpoint
const SAVED_LIST_LIMIT: usize = 50;

/// Listing response body
#[derive(Debug, Serialize)]
pub struct SavedListResponse {
    pub success: bool,
    pub ideas: Vec<IdeaWithScore>,
}

/// Single-idea response body
#[derive(Debug, Serialize)]
pub struct SavedIdeaResponse {
    pub success: bool,
    pub idea: IdeaWithScore,
}

/// GET /api/ideas/saved
///
/// Returns saved ideas in insertion order, up to 50.
pub async fn list_saved_ideas(State(state): State<AppState>) -> Json<SavedListResponse> {
    let ideas = state.repo.find_all(SAVED_LIST_LIMIT).await;
    Json(SavedListResponse {
        success: true,
        ideas,
    })
}

/// GET /api/ideas/saved/:id
pub async fn get_saved_idea(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SavedIdeaResponse>, SavedError> {
    let id = parse_id(&id)?;

    let idea = state
        .repo
        .find_by_id(id)
        .await
        .ok_or(SavedError::NotFound(id))?;

    Ok(Json(SavedIdeaResponse {
        success: true,
        idea,
    }))
}

/// DELETE /api/ideas/saved/:id
pub async fn delete_saved_idea(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, SavedError> {
    let id = parse_id(&id)?;

    if !state.repo.remove(id).await {
        return Err(SavedError::NotFound(id));
    }

    Ok(Json(json!({ "success": true })))
}

fn parse_id(raw: &str) -> Result<Uuid, SavedError> {
    Uuid::parse_str(raw).map_err(|_| SavedError::InvalidId(raw.to_string()))
}

/// Saved-idea lookup errors
#[derive(Debug)]
pub enum SavedError {
    InvalidId(String),
    NotFound(Uuid),
}

impl IntoResponse for SavedError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            SavedError::InvalidId(raw) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid idea id (must be UUID): {raw}"),
            ),
            SavedError::NotFound(id) => {
                (StatusCode::NOT_FOUND, format!("No saved idea with id {id}"))
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
