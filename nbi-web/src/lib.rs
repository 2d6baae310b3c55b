//! nbi-web library - HTTP service for Next Business Idea
//!
//! Thin axum glue over the nbi-core engine: JSON API routes for idea
//! generation and saved favorites, plus the embedded single-page UI.

use axum::Router;
use nbi_core::ScoringWeights;
use tower_http::trace::TraceLayer;

use crate::repo::SavedIdeaRepository;

pub mod api;
pub mod config;
pub mod generator;
pub mod repo;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Saved-idea store (in-memory, contents lost on restart by design)
    pub repo: SavedIdeaRepository,
    /// Weights blending sub-scores into the overall score
    pub weights: ScoringWeights,
}

impl AppState {
    /// Create application state with an empty store and default weights
    pub fn new() -> Self {
        Self {
            repo: SavedIdeaRepository::new(),
            weights: ScoringWeights::default(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    let ideas = Router::new()
        .route("/api/ideas/generate", post(api::generate_ideas))
        .route("/api/ideas/save", post(api::save_idea))
        .route("/api/ideas/saved", get(api::list_saved_ideas))
        .route(
            "/api/ideas/saved/:id",
            get(api::get_saved_idea).delete(api::delete_saved_idea),
        );

    let ui = Router::new()
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        .merge(api::health_routes());

    Router::new()
        .merge(ideas)
        .merge(ui)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
