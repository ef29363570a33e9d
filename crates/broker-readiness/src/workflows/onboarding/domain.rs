use serde::{Deserialize, Serialize};

/// Identifier wrapper for stored questionnaire submissions.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ResponseId(pub String);

/// Closed set of answers for a single questionnaire field.
///
/// `RANKED` lists every option from most to least sales-ready. Weight tables and the
/// monotonicity checks in the test suite rely on that order.
pub trait Answer: Copy + Eq + std::fmt::Debug + 'static {
    const FIELD: &'static str;
    const RANKED: &'static [Self];

    fn as_str(self) -> &'static str;

    fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        Self::RANKED
            .iter()
            .copied()
            .find(|answer| answer.as_str() == trimmed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrmUsage {
    #[serde(rename = "full")]
    Full,
    #[serde(rename = "basic")]
    Basic,
    #[serde(rename = "none")]
    None,
}

impl Answer for CrmUsage {
    const FIELD: &'static str = "crmUsage";
    const RANKED: &'static [Self] = &[Self::Full, Self::Basic, Self::None];

    fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Basic => "basic",
            Self::None => "none",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpeedToContact {
    #[serde(rename = "5min")]
    FiveMinutes,
    #[serde(rename = "30min")]
    ThirtyMinutes,
    #[serde(rename = "sameDay")]
    SameDay,
    #[serde(rename = "nextDay")]
    NextDay,
}

impl Answer for SpeedToContact {
    const FIELD: &'static str = "speedToContact";
    const RANKED: &'static [Self] = &[
        Self::FiveMinutes,
        Self::ThirtyMinutes,
        Self::SameDay,
        Self::NextDay,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::FiveMinutes => "5min",
            Self::ThirtyMinutes => "30min",
            Self::SameDay => "sameDay",
            Self::NextDay => "nextDay",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamSize {
    #[serde(rename = "dedicated")]
    Dedicated,
    #[serde(rename = "small")]
    Small,
    #[serde(rename = "solo")]
    Solo,
    #[serde(rename = "unclear")]
    Unclear,
}

impl Answer for TeamSize {
    const FIELD: &'static str = "teamSize";
    const RANKED: &'static [Self] = &[Self::Dedicated, Self::Small, Self::Solo, Self::Unclear];

    fn as_str(self) -> &'static str {
        match self {
            Self::Dedicated => "dedicated",
            Self::Small => "small",
            Self::Solo => "solo",
            Self::Unclear => "unclear",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FollowUpClarity {
    #[serde(rename = "clear")]
    Clear,
    #[serde(rename = "basic")]
    Basic,
    #[serde(rename = "none")]
    None,
}

impl Answer for FollowUpClarity {
    const FIELD: &'static str = "followUpClarity";
    const RANKED: &'static [Self] = &[Self::Clear, Self::Basic, Self::None];

    fn as_str(self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Basic => "basic",
            Self::None => "none",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonthlySpend {
    #[serde(rename = "30k+")]
    Over30k,
    #[serde(rename = "15k-30k")]
    From15kTo30k,
    #[serde(rename = "5k-15k")]
    From5kTo15k,
    #[serde(rename = "under5k")]
    Under5k,
    #[serde(rename = "none")]
    None,
}

impl Answer for MonthlySpend {
    const FIELD: &'static str = "monthlySpend";
    const RANKED: &'static [Self] = &[
        Self::Over30k,
        Self::From15kTo30k,
        Self::From5kTo15k,
        Self::Under5k,
        Self::None,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Over30k => "30k+",
            Self::From15kTo30k => "15k-30k",
            Self::From5kTo15k => "5k-15k",
            Self::Under5k => "under5k",
            Self::None => "none",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CplAwareness {
    #[serde(rename = "yes")]
    Yes,
    #[serde(rename = "rough")]
    Rough,
    #[serde(rename = "no")]
    No,
}

impl Answer for CplAwareness {
    const FIELD: &'static str = "cplAwareness";
    const RANKED: &'static [Self] = &[Self::Yes, Self::Rough, Self::No];

    fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::Rough => "rough",
            Self::No => "no",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PricingComfort {
    #[serde(rename = "comfortable")]
    Comfortable,
    #[serde(rename = "flexible")]
    Flexible,
    #[serde(rename = "sensitive")]
    Sensitive,
}

impl Answer for PricingComfort {
    const FIELD: &'static str = "pricingComfort";
    const RANKED: &'static [Self] = &[Self::Comfortable, Self::Flexible, Self::Sensitive];

    fn as_str(self) -> &'static str {
        match self {
            Self::Comfortable => "comfortable",
            Self::Flexible => "flexible",
            Self::Sensitive => "sensitive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductFocusClarity {
    #[serde(rename = "clear")]
    Clear,
    #[serde(rename = "multiple")]
    Multiple,
    #[serde(rename = "unclear")]
    Unclear,
}

impl Answer for ProductFocusClarity {
    const FIELD: &'static str = "productFocusClarity";
    const RANKED: &'static [Self] = &[Self::Clear, Self::Multiple, Self::Unclear];

    fn as_str(self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Multiple => "multiple",
            Self::Unclear => "unclear",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeographicFocusClarity {
    #[serde(rename = "clear")]
    Clear,
    #[serde(rename = "semi")]
    Semi,
    #[serde(rename = "undefined")]
    Undefined,
}

impl Answer for GeographicFocusClarity {
    const FIELD: &'static str = "geographicFocusClarity";
    const RANKED: &'static [Self] = &[Self::Clear, Self::Semi, Self::Undefined];

    fn as_str(self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Semi => "semi",
            Self::Undefined => "undefined",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GrowthGoalClarity {
    #[serde(rename = "numeric")]
    Numeric,
    #[serde(rename = "general")]
    General,
    #[serde(rename = "vague")]
    Vague,
}

impl Answer for GrowthGoalClarity {
    const FIELD: &'static str = "growthGoalClarity";
    const RANKED: &'static [Self] = &[Self::Numeric, Self::General, Self::Vague];

    fn as_str(self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::General => "general",
            Self::Vague => "vague",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeline {
    #[serde(rename = "immediate")]
    Immediate,
    #[serde(rename = "30days")]
    ThirtyDays,
    #[serde(rename = "exploring")]
    Exploring,
}

impl Answer for Timeline {
    const FIELD: &'static str = "timeline";
    const RANKED: &'static [Self] = &[Self::Immediate, Self::ThirtyDays, Self::Exploring];

    fn as_str(self) -> &'static str {
        match self {
            Self::Immediate => "immediate",
            Self::ThirtyDays => "30days",
            Self::Exploring => "exploring",
        }
    }
}

/// Validated questionnaire answers for one broker submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingResponse {
    pub crm_usage: CrmUsage,
    pub speed_to_contact: SpeedToContact,
    pub team_size: TeamSize,
    pub follow_up_clarity: FollowUpClarity,
    pub monthly_spend: MonthlySpend,
    pub cpl_awareness: CplAwareness,
    pub pricing_comfort: PricingComfort,
    pub desired_leads_weekly: u32,
    pub max_capacity_weekly: u32,
    pub product_focus_clarity: ProductFocusClarity,
    pub geographic_focus_clarity: GeographicFocusClarity,
    pub growth_goal_clarity: GrowthGoalClarity,
    pub timeline: Timeline,
}

impl OnboardingResponse {
    /// Desired weekly volume relative to stated capacity.
    pub fn capacity(&self) -> CapacityRatio {
        if self.max_capacity_weekly == 0 {
            CapacityRatio::Undefined
        } else {
            CapacityRatio::Defined {
                desired: self.desired_leads_weekly,
                capacity: self.max_capacity_weekly,
            }
        }
    }
}

/// Capacity ratio guarded against a zero denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityRatio {
    Undefined,
    Defined { desired: u32, capacity: u32 },
}

/// Form payload as posted by the questionnaire, before any validation.
///
/// Every field is optional so that an omitted answer surfaces as an input error
/// naming the field instead of an opaque deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawOnboardingResponse {
    pub crm_usage: Option<String>,
    pub speed_to_contact: Option<String>,
    pub team_size: Option<String>,
    pub follow_up_clarity: Option<String>,
    pub monthly_spend: Option<String>,
    pub cpl_awareness: Option<String>,
    pub pricing_comfort: Option<String>,
    pub desired_leads_weekly: Option<serde_json::Value>,
    pub max_capacity_weekly: Option<serde_json::Value>,
    pub product_focus_clarity: Option<String>,
    pub geographic_focus_clarity: Option<String>,
    pub growth_goal_clarity: Option<String>,
    pub timeline: Option<String>,
}

impl From<&OnboardingResponse> for RawOnboardingResponse {
    fn from(response: &OnboardingResponse) -> Self {
        Self {
            crm_usage: Some(response.crm_usage.as_str().to_string()),
            speed_to_contact: Some(response.speed_to_contact.as_str().to_string()),
            team_size: Some(response.team_size.as_str().to_string()),
            follow_up_clarity: Some(response.follow_up_clarity.as_str().to_string()),
            monthly_spend: Some(response.monthly_spend.as_str().to_string()),
            cpl_awareness: Some(response.cpl_awareness.as_str().to_string()),
            pricing_comfort: Some(response.pricing_comfort.as_str().to_string()),
            desired_leads_weekly: Some(response.desired_leads_weekly.into()),
            max_capacity_weekly: Some(response.max_capacity_weekly.into()),
            product_focus_clarity: Some(response.product_focus_clarity.as_str().to_string()),
            geographic_focus_clarity: Some(response.geographic_focus_clarity.as_str().to_string()),
            growth_goal_clarity: Some(response.growth_goal_clarity.as_str().to_string()),
            timeline: Some(response.timeline.as_str().to_string()),
        }
    }
}

/// Readiness dimensions scored by the engine, in tie-break priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Operational,
    Budget,
    Growth,
    Intent,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Operational,
        Dimension::Budget,
        Dimension::Growth,
        Dimension::Intent,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Dimension::Operational => "operational readiness",
            Dimension::Budget => "budget alignment",
            Dimension::Growth => "growth clarity",
            Dimension::Intent => "intent and capacity",
        }
    }
}

/// Per-dimension sub-scores, each within 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub operational_score: u8,
    pub budget_score: u8,
    pub growth_score: u8,
    pub intent_score: u8,
}

impl ScoreBreakdown {
    pub fn get(&self, dimension: Dimension) -> u8 {
        match dimension {
            Dimension::Operational => self.operational_score,
            Dimension::Budget => self.budget_score,
            Dimension::Growth => self.growth_score,
            Dimension::Intent => self.intent_score,
        }
    }
}

/// Named concern raised independently of the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskFlag {
    CapacityUndefined,
    CapacityMismatch,
    PriceSensitiveHighVolume,
    LowOperationalReadiness,
    NoFollowUpProcess,
    UnclearTargeting,
    ExploratoryOnly,
}

impl RiskFlag {
    pub const fn name(self) -> &'static str {
        match self {
            RiskFlag::CapacityUndefined => "capacity-undefined",
            RiskFlag::CapacityMismatch => "capacity-mismatch",
            RiskFlag::PriceSensitiveHighVolume => "price-sensitive-high-volume",
            RiskFlag::LowOperationalReadiness => "low-operational-readiness",
            RiskFlag::NoFollowUpProcess => "no-follow-up-process",
            RiskFlag::UnclearTargeting => "unclear-targeting",
            RiskFlag::ExploratoryOnly => "exploratory-only",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            RiskFlag::CapacityUndefined => "no weekly lead capacity was stated",
            RiskFlag::CapacityMismatch => "desired volume exceeds stated capacity",
            RiskFlag::PriceSensitiveHighVolume => "price sensitive while asking for high volume",
            RiskFlag::LowOperationalReadiness => "operations are not ready to work leads",
            RiskFlag::NoFollowUpProcess => "no follow-up process in place",
            RiskFlag::UnclearTargeting => "neither product nor geography is defined",
            RiskFlag::ExploratoryOnly => "only exploring, with no concrete growth goal",
        }
    }
}

/// Recommended conversation focus for the consultant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SalesAngle {
    #[serde(rename = "Process & Speed Coaching")]
    ProcessAndSpeedCoaching,
    #[serde(rename = "ROI & Cost-Per-Lead Education")]
    RoiAndCostPerLeadEducation,
    #[serde(rename = "Niche & Targeting Definition")]
    NicheAndTargetingDefinition,
    #[serde(rename = "Capacity Planning")]
    CapacityPlanning,
    #[serde(rename = "Balanced Partnership")]
    BalancedPartnership,
}

impl SalesAngle {
    pub const fn label(self) -> &'static str {
        match self {
            SalesAngle::ProcessAndSpeedCoaching => "Process & Speed Coaching",
            SalesAngle::RoiAndCostPerLeadEducation => "ROI & Cost-Per-Lead Education",
            SalesAngle::NicheAndTargetingDefinition => "Niche & Targeting Definition",
            SalesAngle::CapacityPlanning => "Capacity Planning",
            SalesAngle::BalancedPartnership => "Balanced Partnership",
        }
    }
}

/// Qualitative bucket derived from the success probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SuccessBand {
    Low,
    Medium,
    High,
    Excellent,
}

impl SuccessBand {
    pub const fn label(self) -> &'static str {
        match self {
            SuccessBand::Low => "Low",
            SuccessBand::Medium => "Medium",
            SuccessBand::High => "High",
            SuccessBand::Excellent => "Excellent",
        }
    }
}
