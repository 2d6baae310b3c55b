//! Domain models for Next Business Idea
//!
//! Shared between the core engine and the web service. All types serialize
//! to camelCase JSON, matching the wire format the UI consumes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ========================================
// User Input Models
// ========================================

/// User's preferred business model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BusinessType {
    Service,
    Product,
    Digital,
}

/// Startup budget the user can commit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BudgetLevel {
    Low,
    Medium,
    High,
}

/// User's appetite for risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskTolerance {
    Low,
    Medium,
    High,
}

/// How involved an idea is to execute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ComplexityLevel {
    Low,
    Medium,
    High,
}

/// Where the user is located
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub state: String,
}

/// Profile collected from the user before generating ideas
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInputs {
    pub location: Location,
    /// Free-text interest keywords (e.g. "marketing", "pets")
    pub interests: Vec<String>,
    pub budget: BudgetLevel,
    pub hours_per_week: u32,
    pub business_type: BusinessType,
    pub risk_tolerance: RiskTolerance,
}

// ========================================
// Business Idea Models
// ========================================

/// Currency for cost ranges (USD only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "USD")]
    Usd,
}

/// Estimated startup cost range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostRange {
    pub min: u32,
    pub max: u32,
    pub currency: Currency,
}

/// Static, hand-authored catalog entry describing a business concept.
///
/// Templates carry no identity; instantiating one via [`Idea::from_template`]
/// assigns the id and creation timestamp.
#[derive(Debug, Clone, Copy)]
pub struct IdeaTemplate {
    pub title: &'static str,
    pub summary: &'static str,
    pub target_customer: &'static str,
    pub steps_to_start: &'static [&'static str],
    pub cost_min: u32,
    pub cost_max: u32,
    pub complexity: ComplexityLevel,
    pub local_viability_notes: &'static str,
    pub tags: &'static [&'static str],
    pub why_now_signals: &'static [&'static str],
}

/// A generated business idea presented to the user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: Uuid,
    pub title: String,
    pub summary: String,
    pub target_customer: String,
    pub steps_to_start: Vec<String>,
    pub cost_range: CostRange,
    pub complexity: ComplexityLevel,
    pub local_viability_notes: String,
    pub tags: Vec<String>,
    pub why_now_signals: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Idea {
    /// Instantiate a catalog template with a fresh id and timestamp
    pub fn from_template(template: &IdeaTemplate) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: template.title.to_string(),
            summary: template.summary.to_string(),
            target_customer: template.target_customer.to_string(),
            steps_to_start: template.steps_to_start.iter().map(|s| s.to_string()).collect(),
            cost_range: CostRange {
                min: template.cost_min,
                max: template.cost_max,
                currency: Currency::Usd,
            },
            complexity: template.complexity,
            local_viability_notes: template.local_viability_notes.to_string(),
            tags: template.tags.iter().map(|s| s.to_string()).collect(),
            why_now_signals: template.why_now_signals.iter().map(|s| s.to_string()).collect(),
            created_at: Utc::now(),
        }
    }
}

// ========================================
// Scoring Models
// ========================================

/// Weights for blending sub-scores into the overall score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub demand: f64,
    /// Inverted (100 - competition) before weighting
    pub competition: f64,
    pub feasibility: f64,
    pub profitability: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            demand: 0.35,
            competition: 0.20,
            feasibility: 0.25,
            profitability: 0.20,
        }
    }
}

/// Score card for one idea: four sub-scores (0-100), a weighted overall
/// score, and exactly three explainability reasons ranked by the strength
/// of the underlying sub-score.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaScore {
    pub idea_id: Uuid,
    pub demand_score: u8,
    /// Lower is better (0 = low competition, 100 = high competition)
    pub competition_score: u8,
    pub feasibility_score: u8,
    pub profitability_score: u8,
    pub overall_score: u8,
    pub reasons: [String; 3],
}

impl IdeaScore {
    /// Assemble a score card from sub-scores.
    ///
    /// The overall score is the weighted blend (competition inverted),
    /// rounded to the nearest integer. Reasons are the top three sub-scores
    /// in descending order; ties keep the fixed demand, competition,
    /// feasibility, profitability order.
    pub fn new(
        idea_id: Uuid,
        demand: u8,
        competition: u8,
        feasibility: u8,
        profitability: u8,
        weights: &ScoringWeights,
    ) -> Self {
        let competition_inverted = 100u8.saturating_sub(competition);

        let overall = (f64::from(demand) * weights.demand
            + f64::from(competition_inverted) * weights.competition
            + f64::from(feasibility) * weights.feasibility
            + f64::from(profitability) * weights.profitability)
            .round()
            .clamp(0.0, 100.0) as u8;

        let mut ranked = [
            (format!("Demand potential: {demand}/100"), demand),
            (
                format!("Low competition advantage: {competition_inverted}/100"),
                competition_inverted,
            ),
            (format!("Feasibility to execute: {feasibility}/100"), feasibility),
            (
                format!("Profitability potential: {profitability}/100"),
                profitability,
            ),
        ];
        // Stable sort: equal values keep their declaration order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        let [(first, _), (second, _), (third, _), _] = ranked;

        Self {
            idea_id,
            demand_score: demand,
            competition_score: competition,
            feasibility_score: feasibility,
            profitability_score: profitability,
            overall_score: overall,
            reasons: [first, second, third],
        }
    }
}

/// An idea bundled with its score, as returned by the generation API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdeaWithScore {
    #[serde(flatten)]
    pub idea: Idea,
    pub score: IdeaScore,
}

// ========================================
// Tests
// ========================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_template() -> IdeaTemplate {
        IdeaTemplate {
            title: "Test Idea",
            summary: "A test business idea",
            target_customer: "Everyone",
            steps_to_start: &["Step 1"],
            cost_min: 100,
            cost_max: 1000,
            complexity: ComplexityLevel::Low,
            local_viability_notes: "Viable everywhere",
            tags: &["test"],
            why_now_signals: &["Trend 1"],
        }
    }

    #[test]
    fn test_from_template_assigns_identity() {
        let idea = Idea::from_template(&test_template());

        assert!(!idea.id.is_nil());
        assert_eq!(idea.title, "Test Idea");
        assert_eq!(idea.cost_range.min, 100);
        assert_eq!(idea.cost_range.currency, Currency::Usd);
        assert!(idea.created_at <= Utc::now());
    }

    #[test]
    fn test_overall_score_is_weighted_sum() {
        // 80 * 0.35 + (100 - 40) * 0.20 + 90 * 0.25 + 70 * 0.20
        // = 28 + 12 + 22.5 + 14 = 76.5, rounds to 77
        let score = IdeaScore::new(
            Uuid::new_v4(),
            80,
            40,
            90,
            70,
            &ScoringWeights::default(),
        );

        assert_eq!(score.overall_score, 77);
    }

    #[test]
    fn test_reasons_ranked_by_sub_score() {
        let score = IdeaScore::new(
            Uuid::new_v4(),
            90,
            30,
            50,
            40,
            &ScoringWeights::default(),
        );

        // demand 90 > inverted competition 70 > feasibility 50 (> profitability 40)
        assert!(score.reasons[0].contains("Demand"));
        assert!(score.reasons[1].contains("competition"));
        assert!(score.reasons[2].contains("Feasibility"));
    }

    #[test]
    fn test_reason_ties_keep_declaration_order() {
        let score = IdeaScore::new(
            Uuid::new_v4(),
            60,
            40,
            60,
            60,
            &ScoringWeights::default(),
        );

        // All four rank at 60; demand, competition, feasibility win the slice
        assert!(score.reasons[0].contains("Demand"));
        assert!(score.reasons[1].contains("competition"));
        assert!(score.reasons[2].contains("Feasibility"));
    }

    #[test]
    fn test_user_inputs_camel_case_wire_format() {
        let json = r#"{
            "location": {"city": "Austin", "state": "TX"},
            "interests": ["marketing", "technology"],
            "budget": "MEDIUM",
            "hoursPerWeek": 20,
            "businessType": "DIGITAL",
            "riskTolerance": "MEDIUM"
        }"#;

        let inputs: UserInputs = serde_json::from_str(json).unwrap();
        assert_eq!(inputs.location.city, "Austin");
        assert_eq!(inputs.hours_per_week, 20);
        assert_eq!(inputs.budget, BudgetLevel::Medium);
        assert_eq!(inputs.business_type, BusinessType::Digital);
    }

    #[test]
    fn test_idea_with_score_flattens_idea_fields() {
        let idea = Idea::from_template(&test_template());
        let score = IdeaScore::new(idea.id, 50, 50, 50, 50, &ScoringWeights::default());

        let json = serde_json::to_value(IdeaWithScore { idea, score }).unwrap();
        assert!(json["title"].is_string());
        assert!(json["costRange"]["currency"].as_str() == Some("USD"));
        assert_eq!(json["score"]["reasons"].as_array().unwrap().len(), 3);
    }
}
