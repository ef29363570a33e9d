use std::collections::BTreeSet;

use super::super::domain::{
    FollowUpClarity, GeographicFocusClarity, GrowthGoalClarity, OnboardingResponse,
    PricingComfort, ProductFocusClarity, RiskFlag, ScoreBreakdown, Timeline,
};
use super::tables::{HIGH_VOLUME_WEEKLY_LEADS, LOW_OPERATIONAL_READINESS};

type RiskRule = fn(&OnboardingResponse, &ScoreBreakdown) -> bool;

/// Every rule is evaluated independently; a response can trip any combination.
const RISK_RULES: [(RiskFlag, RiskRule); 7] = [
    (RiskFlag::CapacityUndefined, capacity_undefined),
    (RiskFlag::CapacityMismatch, capacity_mismatch),
    (RiskFlag::PriceSensitiveHighVolume, price_sensitive_high_volume),
    (RiskFlag::LowOperationalReadiness, low_operational_readiness),
    (RiskFlag::NoFollowUpProcess, no_follow_up_process),
    (RiskFlag::UnclearTargeting, unclear_targeting),
    (RiskFlag::ExploratoryOnly, exploratory_only),
];

fn capacity_undefined(response: &OnboardingResponse, _: &ScoreBreakdown) -> bool {
    response.max_capacity_weekly == 0
}

fn capacity_mismatch(response: &OnboardingResponse, _: &ScoreBreakdown) -> bool {
    response.max_capacity_weekly > 0
        && response.desired_leads_weekly > response.max_capacity_weekly
}

fn price_sensitive_high_volume(response: &OnboardingResponse, _: &ScoreBreakdown) -> bool {
    response.pricing_comfort == PricingComfort::Sensitive
        && response.desired_leads_weekly >= HIGH_VOLUME_WEEKLY_LEADS
}

fn low_operational_readiness(_: &OnboardingResponse, scores: &ScoreBreakdown) -> bool {
    scores.operational_score < LOW_OPERATIONAL_READINESS
}

fn no_follow_up_process(response: &OnboardingResponse, _: &ScoreBreakdown) -> bool {
    response.follow_up_clarity == FollowUpClarity::None
}

fn unclear_targeting(response: &OnboardingResponse, _: &ScoreBreakdown) -> bool {
    response.product_focus_clarity == ProductFocusClarity::Unclear
        && response.geographic_focus_clarity == GeographicFocusClarity::Undefined
}

fn exploratory_only(response: &OnboardingResponse, _: &ScoreBreakdown) -> bool {
    response.timeline == Timeline::Exploring
        && response.growth_goal_clarity == GrowthGoalClarity::Vague
}

pub(crate) fn evaluate_risks(
    response: &OnboardingResponse,
    scores: &ScoreBreakdown,
) -> BTreeSet<RiskFlag> {
    RISK_RULES
        .iter()
        .filter(|(_, applies)| applies(response, scores))
        .map(|(flag, _)| *flag)
        .collect()
}
