//! HTTP API handlers for nbi-web

pub mod generate;
pub mod health;
pub mod save;
pub mod saved;
pub mod ui;

pub use generate::generate_ideas;
pub use health::health_routes;
pub use save::save_idea;
pub use saved::{delete_saved_idea, get_saved_idea, list_saved_ideas};
pub use ui::{serve_app_js, serve_index};
