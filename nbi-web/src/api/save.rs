//! Save-favorite endpoint

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use nbi_core::{Idea, IdeaScore, IdeaWithScore};

use crate::AppState;

/// Save request: the full idea and score from a generation response
#[derive(Debug, Deserialize)]
pub struct SaveRequest {
    pub idea: Idea,
    pub score: IdeaScore,
}

/// Save response body
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub success: bool,
    pub idea: IdeaWithScore,
}

/// POST /api/ideas/save
///
/// Persists a favorite to the in-memory store. The score must belong to
/// the idea and respect the 0-100 range on every sub-score.
pub async fn save_idea(
    State(state): State<AppState>,
    Json(request): Json<SaveRequest>,
) -> Result<Json<SaveResponse>, SaveError> {
    if request.score.idea_id != request.idea.id {
        return Err(SaveError::IdMismatch);
    }

    let score = &request.score;
    for value in [
        score.demand_score,
        score.competition_score,
        score.feasibility_score,
        score.profitability_score,
        score.overall_score,
    ] {
        if value > 100 {
            return Err(SaveError::ScoreOutOfRange(value));
        }
    }

    let entry = IdeaWithScore {
        idea: request.idea,
        score: request.score,
    };
    state.repo.save(entry.clone()).await;

    info!("Saved idea {} ({})", entry.idea.id, entry.idea.title);

    Ok(Json(SaveResponse {
        success: true,
        idea: entry,
    }))
}

/// Save errors
#[derive(Debug)]
pub enum SaveError {
    IdMismatch,
    ScoreOutOfRange(u8),
}

impl IntoResponse for SaveError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            SaveError::IdMismatch => (
                StatusCode::BAD_REQUEST,
                "Score does not belong to the submitted idea".to_string(),
            ),
            SaveError::ScoreOutOfRange(value) => (
                StatusCode::BAD_REQUEST,
                format!("Scores must be within 0-100, got {value}"),
            ),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
