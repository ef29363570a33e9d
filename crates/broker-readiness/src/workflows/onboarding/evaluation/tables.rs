use super::super::domain::{
    Answer, CplAwareness, CrmUsage, Dimension, FollowUpClarity, GeographicFocusClarity,
    GrowthGoalClarity, MonthlySpend, PricingComfort, ProductFocusClarity, SalesAngle,
    SpeedToContact, SuccessBand, TeamSize, Timeline,
};

/// Points awarded per answer for a single questionnaire field.
#[derive(Debug, Clone, Copy)]
pub struct WeightTable<A: 'static> {
    entries: &'static [(A, u32)],
}

impl<A: Answer> WeightTable<A> {
    pub const fn new(entries: &'static [(A, u32)]) -> Self {
        Self { entries }
    }

    pub fn points(&self, answer: A) -> u32 {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == answer)
            .map(|(_, points)| *points)
            .unwrap_or(0)
    }

    pub fn max_points(&self) -> u32 {
        self.entries
            .iter()
            .map(|(_, points)| *points)
            .max()
            .unwrap_or(0)
    }

    pub fn entries(&self) -> &'static [(A, u32)] {
        self.entries
    }
}

pub const CRM_USAGE: WeightTable<CrmUsage> = WeightTable::new(&[
    (CrmUsage::Full, 30),
    (CrmUsage::Basic, 15),
    (CrmUsage::None, 0),
]);

pub const SPEED_TO_CONTACT: WeightTable<SpeedToContact> = WeightTable::new(&[
    (SpeedToContact::FiveMinutes, 30),
    (SpeedToContact::ThirtyMinutes, 20),
    (SpeedToContact::SameDay, 10),
    (SpeedToContact::NextDay, 0),
]);

pub const TEAM_SIZE: WeightTable<TeamSize> = WeightTable::new(&[
    (TeamSize::Dedicated, 20),
    (TeamSize::Small, 14),
    (TeamSize::Solo, 8),
    (TeamSize::Unclear, 0),
]);

pub const FOLLOW_UP_CLARITY: WeightTable<FollowUpClarity> = WeightTable::new(&[
    (FollowUpClarity::Clear, 20),
    (FollowUpClarity::Basic, 10),
    (FollowUpClarity::None, 0),
]);

pub const MONTHLY_SPEND: WeightTable<MonthlySpend> = WeightTable::new(&[
    (MonthlySpend::Over30k, 40),
    (MonthlySpend::From15kTo30k, 30),
    (MonthlySpend::From5kTo15k, 20),
    (MonthlySpend::Under5k, 10),
    (MonthlySpend::None, 0),
]);

pub const CPL_AWARENESS: WeightTable<CplAwareness> = WeightTable::new(&[
    (CplAwareness::Yes, 30),
    (CplAwareness::Rough, 15),
    (CplAwareness::No, 0),
]);

pub const PRICING_COMFORT: WeightTable<PricingComfort> = WeightTable::new(&[
    (PricingComfort::Comfortable, 30),
    (PricingComfort::Flexible, 18),
    (PricingComfort::Sensitive, 0),
]);

pub const PRODUCT_FOCUS_CLARITY: WeightTable<ProductFocusClarity> = WeightTable::new(&[
    (ProductFocusClarity::Clear, 25),
    (ProductFocusClarity::Multiple, 15),
    (ProductFocusClarity::Unclear, 0),
]);

pub const GEOGRAPHIC_FOCUS_CLARITY: WeightTable<GeographicFocusClarity> = WeightTable::new(&[
    (GeographicFocusClarity::Clear, 25),
    (GeographicFocusClarity::Semi, 12),
    (GeographicFocusClarity::Undefined, 0),
]);

pub const GROWTH_GOAL_CLARITY: WeightTable<GrowthGoalClarity> = WeightTable::new(&[
    (GrowthGoalClarity::Numeric, 25),
    (GrowthGoalClarity::General, 12),
    (GrowthGoalClarity::Vague, 0),
]);

pub const TIMELINE: WeightTable<Timeline> = WeightTable::new(&[
    (Timeline::Immediate, 25),
    (Timeline::ThirtyDays, 15),
    (Timeline::Exploring, 0),
]);

/// Composite weights in percent; they sum to 100.
pub const COMPOSITE_WEIGHTS: [(Dimension, u32); 4] = [
    (Dimension::Operational, 35),
    (Dimension::Budget, 30),
    (Dimension::Growth, 20),
    (Dimension::Intent, 15),
];

/// Inclusive lower bound of each band, highest first.
pub const BAND_FLOORS: [(u8, SuccessBand); 4] = [
    (80, SuccessBand::Excellent),
    (60, SuccessBand::High),
    (40, SuccessBand::Medium),
    (0, SuccessBand::Low),
];

pub const WEAKEST_DIMENSION_ANGLES: [(Dimension, SalesAngle); 4] = [
    (Dimension::Operational, SalesAngle::ProcessAndSpeedCoaching),
    (Dimension::Budget, SalesAngle::RoiAndCostPerLeadEducation),
    (Dimension::Growth, SalesAngle::NicheAndTargetingDefinition),
    (Dimension::Intent, SalesAngle::CapacityPlanning),
];

/// Volume at or above which price sensitivity becomes a risk.
pub const HIGH_VOLUME_WEEKLY_LEADS: u32 = 20;

/// Operational score below which execution is flagged.
pub const LOW_OPERATIONAL_READINESS: u8 = 30;

/// Points lost per unit of desired-to-capacity ratio above 1.
pub const OVER_CAPACITY_PENALTY: u64 = 50;
