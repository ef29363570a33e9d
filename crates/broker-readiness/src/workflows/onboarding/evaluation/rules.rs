use super::super::domain::{Answer, CapacityRatio, OnboardingResponse, ScoreBreakdown};
use super::tables::{self, WeightTable, OVER_CAPACITY_PENALTY};

/// Running sum of awarded and attainable points for one dimension.
#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    awarded: u32,
    attainable: u32,
}

impl Tally {
    fn add<A: Answer>(mut self, table: &WeightTable<A>, answer: A) -> Self {
        self.awarded += table.points(answer);
        self.attainable += table.max_points();
        self
    }

    fn normalized(self) -> u8 {
        if self.attainable == 0 {
            return 0;
        }
        let scaled = ratio_half_up(u64::from(self.awarded) * 100, u64::from(self.attainable));
        scaled.min(100) as u8
    }
}

/// `numerator / denominator` rounded half-up; `denominator` must be non-zero.
pub(crate) fn ratio_half_up(numerator: u64, denominator: u64) -> u64 {
    (numerator * 2 + denominator) / (denominator * 2)
}

pub fn operational_score(response: &OnboardingResponse) -> u8 {
    Tally::default()
        .add(&tables::CRM_USAGE, response.crm_usage)
        .add(&tables::SPEED_TO_CONTACT, response.speed_to_contact)
        .add(&tables::TEAM_SIZE, response.team_size)
        .add(&tables::FOLLOW_UP_CLARITY, response.follow_up_clarity)
        .normalized()
}

pub fn budget_score(response: &OnboardingResponse) -> u8 {
    Tally::default()
        .add(&tables::MONTHLY_SPEND, response.monthly_spend)
        .add(&tables::CPL_AWARENESS, response.cpl_awareness)
        .add(&tables::PRICING_COMFORT, response.pricing_comfort)
        .normalized()
}

pub fn growth_score(response: &OnboardingResponse) -> u8 {
    Tally::default()
        .add(&tables::PRODUCT_FOCUS_CLARITY, response.product_focus_clarity)
        .add(&tables::GEOGRAPHIC_FOCUS_CLARITY, response.geographic_focus_clarity)
        .add(&tables::GROWTH_GOAL_CLARITY, response.growth_goal_clarity)
        .add(&tables::TIMELINE, response.timeline)
        .normalized()
}

pub fn intent_score(response: &OnboardingResponse) -> u8 {
    let (desired, capacity) = match response.capacity() {
        CapacityRatio::Undefined => return 0,
        CapacityRatio::Defined { desired, capacity } => (u64::from(desired), u64::from(capacity)),
    };

    if desired == 0 {
        return 0;
    }

    if desired <= capacity {
        return ratio_half_up(desired * 100, capacity).min(100) as u8;
    }

    let penalty = ratio_half_up((desired - capacity) * OVER_CAPACITY_PENALTY, capacity);
    100u64.saturating_sub(penalty) as u8
}

pub fn score_breakdown(response: &OnboardingResponse) -> ScoreBreakdown {
    ScoreBreakdown {
        operational_score: operational_score(response),
        budget_score: budget_score(response),
        growth_score: growth_score(response),
        intent_score: intent_score(response),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_rounds_half_up() {
        assert_eq!(ratio_half_up(5, 10), 1);
        assert_eq!(ratio_half_up(4, 10), 0);
        assert_eq!(ratio_half_up(15, 10), 2);
        assert_eq!(ratio_half_up(149, 100), 1);
        assert_eq!(ratio_half_up(150, 100), 2);
    }

    #[test]
    fn tally_without_attainable_points_scores_zero() {
        assert_eq!(Tally::default().normalized(), 0);
    }
}
