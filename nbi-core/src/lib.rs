//! # NBI Core Library
//!
//! Shared domain logic for Next Business Idea:
//! - Domain models (user inputs, ideas, scores)
//! - Curated idea catalog and relevance filtering
//! - Deterministic scoring engine
//! - Common error types

pub mod catalog;
pub mod error;
pub mod scoring;
pub mod types;

pub use error::{Error, Result};
pub use types::{Idea, IdeaScore, IdeaWithScore, ScoringWeights, UserInputs};
