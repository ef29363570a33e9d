use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::{json, Value};

use crate::workflows::onboarding::domain::{
    CplAwareness, CrmUsage, FollowUpClarity, GeographicFocusClarity, GrowthGoalClarity,
    MonthlySpend, OnboardingResponse, PricingComfort, ProductFocusClarity,
    RawOnboardingResponse, ResponseId, SpeedToContact, TeamSize, Timeline,
};
use crate::workflows::onboarding::repository::{
    AnalysisRecord, AnalysisRepository, RepositoryError,
};
use crate::workflows::onboarding::{onboarding_router, OnboardingAnalysisService};

pub(super) fn best_case() -> OnboardingResponse {
    OnboardingResponse {
        crm_usage: CrmUsage::Full,
        speed_to_contact: SpeedToContact::FiveMinutes,
        team_size: TeamSize::Dedicated,
        follow_up_clarity: FollowUpClarity::Clear,
        monthly_spend: MonthlySpend::Over30k,
        cpl_awareness: CplAwareness::Yes,
        pricing_comfort: PricingComfort::Comfortable,
        desired_leads_weekly: 20,
        max_capacity_weekly: 20,
        product_focus_clarity: ProductFocusClarity::Clear,
        geographic_focus_clarity: GeographicFocusClarity::Clear,
        growth_goal_clarity: GrowthGoalClarity::Numeric,
        timeline: Timeline::Immediate,
    }
}

pub(super) fn worst_case() -> OnboardingResponse {
    OnboardingResponse {
        crm_usage: CrmUsage::None,
        speed_to_contact: SpeedToContact::NextDay,
        team_size: TeamSize::Unclear,
        follow_up_clarity: FollowUpClarity::None,
        monthly_spend: MonthlySpend::None,
        cpl_awareness: CplAwareness::No,
        pricing_comfort: PricingComfort::Sensitive,
        desired_leads_weekly: 0,
        max_capacity_weekly: 0,
        product_focus_clarity: ProductFocusClarity::Unclear,
        geographic_focus_clarity: GeographicFocusClarity::Undefined,
        growth_goal_clarity: GrowthGoalClarity::Vague,
        timeline: Timeline::Exploring,
    }
}

/// Middle-of-the-road broker: operational 59, budget 53, growth 54, intent 50.
pub(super) fn mid_case() -> OnboardingResponse {
    OnboardingResponse {
        crm_usage: CrmUsage::Basic,
        speed_to_contact: SpeedToContact::ThirtyMinutes,
        team_size: TeamSize::Small,
        follow_up_clarity: FollowUpClarity::Basic,
        monthly_spend: MonthlySpend::From5kTo15k,
        cpl_awareness: CplAwareness::Rough,
        pricing_comfort: PricingComfort::Flexible,
        desired_leads_weekly: 10,
        max_capacity_weekly: 20,
        product_focus_clarity: ProductFocusClarity::Multiple,
        geographic_focus_clarity: GeographicFocusClarity::Semi,
        growth_goal_clarity: GrowthGoalClarity::General,
        timeline: Timeline::ThirtyDays,
    }
}

pub(super) fn raw_best_case() -> RawOnboardingResponse {
    RawOnboardingResponse::from(&best_case())
}

pub(super) fn raw_payload() -> Value {
    json!({
        "crmUsage": "full",
        "speedToContact": "5min",
        "teamSize": "dedicated",
        "followUpClarity": "clear",
        "monthlySpend": "30k+",
        "cplAwareness": "yes",
        "pricingComfort": "comfortable",
        "desiredLeadsWeekly": 20,
        "maxCapacityWeekly": "20",
        "productFocusClarity": "clear",
        "geographicFocusClarity": "clear",
        "growthGoalClarity": "numeric",
        "timeline": "immediate"
    })
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<BTreeMap<ResponseId, AnalysisRecord>>>,
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("repository mutex poisoned").len()
    }
}

impl AnalysisRepository for MemoryRepository {
    fn insert(&self, record: AnalysisRecord) -> Result<AnalysisRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.response_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.response_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ResponseId) -> Result<Option<AnalysisRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<AnalysisRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.values().rev().take(limit).cloned().collect())
    }
}

pub(super) struct ConflictRepository;

impl AnalysisRepository for ConflictRepository {
    fn insert(&self, _record: AnalysisRecord) -> Result<AnalysisRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &ResponseId) -> Result<Option<AnalysisRecord>, RepositoryError> {
        Ok(None)
    }

    fn recent(&self, _limit: usize) -> Result<Vec<AnalysisRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl AnalysisRepository for UnavailableRepository {
    fn insert(&self, _record: AnalysisRecord) -> Result<AnalysisRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ResponseId) -> Result<Option<AnalysisRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<AnalysisRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service() -> (OnboardingAnalysisService<MemoryRepository>, MemoryRepository) {
    let repository = MemoryRepository::default();
    let service = OnboardingAnalysisService::new(Arc::new(repository.clone()));
    (service, repository)
}

pub(super) fn router_with_service(
    service: OnboardingAnalysisService<MemoryRepository>,
) -> axum::Router {
    onboarding_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
