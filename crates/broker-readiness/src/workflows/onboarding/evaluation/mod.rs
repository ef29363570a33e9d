mod policy;
mod risk;
mod rules;
pub mod tables;

pub use policy::{
    classify_band, select_sales_angle, strongest_dimension, success_probability, weakest_dimension,
};
pub use rules::{budget_score, growth_score, intent_score, operational_score, score_breakdown};

use std::collections::BTreeSet;

use super::domain::{
    OnboardingResponse, RawOnboardingResponse, RiskFlag, SalesAngle, ScoreBreakdown, SuccessBand,
};
use super::intake::{validate, InvalidInputError};
use serde::{Deserialize, Serialize};

/// Score a validated response.
///
/// Pure and deterministic: the result depends on nothing but `response`.
pub fn compute_scores(response: &OnboardingResponse) -> AnalysisResult {
    let scores = rules::score_breakdown(response);
    let success_probability = policy::success_probability(&scores);

    AnalysisResult {
        operational_score: scores.operational_score,
        budget_score: scores.budget_score,
        growth_score: scores.growth_score,
        intent_score: scores.intent_score,
        success_probability,
        risk_flags: risk::evaluate_risks(response, &scores),
        primary_sales_angle: policy::select_sales_angle(&scores),
        success_band: policy::classify_band(success_probability),
    }
}

/// Validate a raw form payload and score it. Invalid input never yields a partial result.
pub fn analyze(raw: &RawOnboardingResponse) -> Result<AnalysisResult, InvalidInputError> {
    let response = validate(raw)?;
    Ok(compute_scores(&response))
}

/// Assessment handed to the consultant and to persistence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub operational_score: u8,
    pub budget_score: u8,
    pub growth_score: u8,
    pub intent_score: u8,
    pub success_probability: u8,
    pub risk_flags: BTreeSet<RiskFlag>,
    pub primary_sales_angle: SalesAngle,
    pub success_band: SuccessBand,
}

impl AnalysisResult {
    pub fn breakdown(&self) -> ScoreBreakdown {
        ScoreBreakdown {
            operational_score: self.operational_score,
            budget_score: self.budget_score,
            growth_score: self.growth_score,
            intent_score: self.intent_score,
        }
    }

    pub fn has_flag(&self, flag: RiskFlag) -> bool {
        self.risk_flags.contains(&flag)
    }
}
