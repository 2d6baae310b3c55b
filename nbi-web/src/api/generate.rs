//! Idea generation endpoint

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use tracing::info;

use nbi_core::{scoring, IdeaWithScore, UserInputs};

use crate::{generator, AppState};

/// Ideas returned per generation request
const GENERATED_IDEA_COUNT: usize = 10;

/// Upper bound for hoursPerWeek (hours in a week)
const MAX_HOURS_PER_WEEK: u32 = 168;

/// Generation response body
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub ideas: Vec<IdeaWithScore>,
}

/// POST /api/ideas/generate
///
/// Generates up to 10 ideas from the catalog for the submitted profile,
/// scores each, and returns them in catalog-relevance order.
pub async fn generate_ideas(
    State(state): State<AppState>,
    Json(inputs): Json<UserInputs>,
) -> Result<Json<GenerateResponse>, GenerateError> {
    if inputs.hours_per_week > MAX_HOURS_PER_WEEK {
        return Err(GenerateError::HoursOutOfRange(inputs.hours_per_week));
    }

    let ideas = generator::generate_ideas(&inputs, GENERATED_IDEA_COUNT);
    let scores = scoring::score_ideas(&ideas, &inputs, &state.weights);

    let ideas_with_scores: Vec<IdeaWithScore> = ideas
        .into_iter()
        .zip(scores)
        .map(|(idea, score)| IdeaWithScore { idea, score })
        .collect();

    info!(
        "Generated {} ideas for {}, {}",
        ideas_with_scores.len(),
        inputs.location.city,
        inputs.location.state
    );

    Ok(Json(GenerateResponse {
        success: true,
        ideas: ideas_with_scores,
    }))
}

/// Generation errors
#[derive(Debug)]
pub enum GenerateError {
    HoursOutOfRange(u32),
}

impl IntoResponse for GenerateError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            GenerateError::HoursOutOfRange(hours) => (
                StatusCode::BAD_REQUEST,
                format!("hoursPerWeek must be at most {MAX_HOURS_PER_WEEK}, got {hours}"),
            ),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
