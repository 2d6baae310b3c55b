//! Catalog-backed idea generation
//!
//! Filters the curated catalog by the user's interests and business-type
//! preference, instantiates the surviving templates, and personalizes the
//! local viability notes for the user's city.

use nbi_core::catalog;
use nbi_core::types::{Idea, UserInputs};

/// Generate up to `count` personalized ideas from the curated catalog
pub fn generate_ideas(inputs: &UserInputs, count: usize) -> Vec<Idea> {
    // Blank entries from comma-separated form input carry no signal
    let interests: Vec<String> = inputs
        .interests
        .iter()
        .map(|i| i.trim().to_string())
        .filter(|i| !i.is_empty())
        .collect();

    catalog::filter_templates(&interests, Some(inputs.business_type), count)
        .into_iter()
        .map(|template| {
            let mut idea = Idea::from_template(template);
            idea.local_viability_notes = personalize_notes(
                &idea.local_viability_notes,
                &inputs.location.city,
            );
            idea
        })
        .collect()
}

fn personalize_notes(notes: &str, city: &str) -> String {
    format!("{notes} (Localized for {city}: Consider local competition and demographics).")
}
