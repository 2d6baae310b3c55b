//! Idea scoring engine
//!
//! Deterministic scoring rules for business ideas. Each sub-score starts
//! from a baseline, applies additive adjustments, and clamps to 0-100.
//! The catalog carries no live market data; the category tables below are
//! fixed saturation and margin assumptions.

use crate::types::{
    BudgetLevel, ComplexityLevel, Idea, IdeaScore, RiskTolerance, ScoringWeights, UserInputs,
};

/// Category saturation assumptions, matched against idea tags.
/// Lower is better for competition, so saturated niches score high.
const COMPETITION_BASELINE: &[(&str, i32)] = &[
    ("social-media", 85),
    ("dropshipping", 80),
    ("fitness", 75),
    ("content", 70),
    ("service", 60),
    ("marketing", 65),
    ("design", 70),
    ("saas", 72),
    ("ai", 75),
];

/// Typical profit margin assumptions by tag (percent)
const PROFIT_MARGIN_BY_TAG: &[(&str, i32)] = &[
    ("service", 70),
    ("digital", 85),
    ("saas", 80),
    ("product", 40),
    ("ecommerce", 30),
    ("coaching", 75),
    ("affiliate", 20),
];

const DEFAULT_PROFIT_MARGIN: i32 = 45;

fn clamp_score(value: i32) -> u8 {
    value.clamp(0, 100) as u8
}

/// Demand: interest/tag alignment, why-now signals, location adjustment
fn demand_score(idea: &Idea, inputs: &UserInputs) -> u8 {
    let mut score: i32 = 50;

    // +10 per tag matching a user interest
    let matching_tags = idea
        .tags
        .iter()
        .filter(|tag| {
            inputs
                .interests
                .iter()
                .any(|interest| interest.eq_ignore_ascii_case(tag))
        })
        .count() as i32;
    score += matching_tags * 10;

    // Strong why-now signals boost demand
    if idea.why_now_signals.len() >= 2 {
        score += 10;
    }

    // Flat location adjustment; all locations treated as comparable
    score += 5;

    clamp_score(score)
}

/// Competition: category saturation, target specificity, digital discount.
/// Lower is better (0 = low competition, 100 = high competition).
fn competition_score(idea: &Idea) -> u8 {
    let mut score: i32 = 55;

    // First tag matching a known category replaces the baseline
    if let Some(baseline) = idea.tags.iter().find_map(|tag| {
        COMPETITION_BASELINE
            .iter()
            .find(|(category, _)| tag.eq_ignore_ascii_case(category))
            .map(|(_, value)| *value)
    }) {
        score = baseline;
    }

    // More specific target customer = less competition
    if idea.target_customer.len() > 60 {
        score -= 5;
    }

    // Digital products tend to have less local competition
    if idea.tags.iter().any(|t| t == "digital" || t == "online") {
        score -= 3;
    }

    clamp_score(score)
}

/// Hours per week a user can afford to pay for an idea's complexity
fn hours_needed(complexity: ComplexityLevel) -> u32 {
    match complexity {
        ComplexityLevel::Low => 5,
        ComplexityLevel::Medium => 15,
        ComplexityLevel::High => 30,
    }
}

/// Maximum startup cost a budget level can absorb
fn max_affordable(budget: BudgetLevel) -> u32 {
    match budget {
        BudgetLevel::Low => 1000,
        BudgetLevel::Medium => 3000,
        BudgetLevel::High => 10_000,
    }
}

/// Feasibility: budget fit, time fit, startup steps, risk/complexity alignment
fn feasibility_score(idea: &Idea, inputs: &UserInputs) -> u8 {
    let mut score: i32 = 50;

    // Budget alignment
    let affordable = max_affordable(inputs.budget);
    if idea.cost_range.max <= affordable {
        score += 15;
    } else if f64::from(idea.cost_range.max) <= f64::from(affordable) * 1.5 {
        score += 5; // Slightly over budget but manageable
    } else {
        score -= 10;
    }

    // Time availability vs complexity
    let needed = hours_needed(idea.complexity);
    if inputs.hours_per_week >= needed {
        score += 15;
    } else if f64::from(inputs.hours_per_week) >= f64::from(needed) * 0.7 {
        score += 5; // Doable but tight
    } else {
        score -= 10;
    }

    // Fewer steps to start = easier launch
    if idea.steps_to_start.len() <= 3 {
        score += 10;
    } else if idea.steps_to_start.len() > 6 {
        score -= 5;
    }

    // Risk tolerance vs complexity alignment
    match (idea.complexity, inputs.risk_tolerance) {
        (ComplexityLevel::Low, RiskTolerance::Low) => score += 15,
        (ComplexityLevel::High, RiskTolerance::High) => score += 10,
        (ComplexityLevel::High, RiskTolerance::Low) => score -= 20,
        _ => {}
    }

    clamp_score(score)
}

/// Profitability: startup cost leanness blended with category margins
fn profitability_score(idea: &Idea) -> u8 {
    let mut score: i32 = 50;

    // Lower startup costs = higher profitability potential
    if idea.cost_range.max < 1000 {
        score += 20;
    } else if idea.cost_range.max < 3000 {
        score += 10;
    } else if idea.cost_range.max > 5000 {
        score -= 5;
    }

    // Best margin across matching tags
    let best_margin = idea
        .tags
        .iter()
        .filter_map(|tag| {
            PROFIT_MARGIN_BY_TAG
                .iter()
                .find(|(category, _)| tag.eq_ignore_ascii_case(category))
                .map(|(_, margin)| *margin)
        })
        .max()
        .filter(|margin| *margin > DEFAULT_PROFIT_MARGIN)
        .unwrap_or(DEFAULT_PROFIT_MARGIN);

    // Blend cost leanness with margin assumptions
    score = (f64::from(score) * 0.5 + f64::from(best_margin) / 100.0 * 50.0).round() as i32;

    // Service/digital scale without inventory
    if idea.tags.iter().any(|t| t == "service" || t == "digital") {
        score += 5;
    }

    clamp_score(score)
}

/// Score a single idea against the user's profile
pub fn score_idea(idea: &Idea, inputs: &UserInputs, weights: &ScoringWeights) -> IdeaScore {
    IdeaScore::new(
        idea.id,
        demand_score(idea, inputs),
        competition_score(idea),
        feasibility_score(idea, inputs),
        profitability_score(idea),
        weights,
    )
}

/// Score a batch of ideas against the user's profile
pub fn score_ideas(ideas: &[Idea], inputs: &UserInputs, weights: &ScoringWeights) -> Vec<IdeaScore> {
    ideas
        .iter()
        .map(|idea| score_idea(idea, inputs, weights))
        .collect()
}
