use broker_readiness::workflows::onboarding::{
    AnalysisRecord, AnalysisRepository, RepositoryError, ResponseId,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local store kept in arrival order.
#[derive(Default, Clone)]
pub(crate) struct InMemoryAnalysisRepository {
    records: Arc<Mutex<Vec<AnalysisRecord>>>,
}

impl InMemoryAnalysisRepository {
    fn guard(&self) -> Result<MutexGuard<'_, Vec<AnalysisRecord>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))
    }
}

impl AnalysisRepository for InMemoryAnalysisRepository {
    fn insert(&self, record: AnalysisRecord) -> Result<AnalysisRecord, RepositoryError> {
        let mut guard = self.guard()?;
        if guard
            .iter()
            .any(|existing| existing.response_id == record.response_id)
        {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ResponseId) -> Result<Option<AnalysisRecord>, RepositoryError> {
        let guard = self.guard()?;
        Ok(guard
            .iter()
            .find(|record| &record.response_id == id)
            .cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<AnalysisRecord>, RepositoryError> {
        let guard = self.guard()?;
        Ok(guard.iter().rev().take(limit).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use broker_readiness::workflows::onboarding::{
        compute_scores, CplAwareness, CrmUsage, FollowUpClarity, GeographicFocusClarity,
        GrowthGoalClarity, MonthlySpend, OnboardingResponse, PricingComfort, ProductFocusClarity,
        SpeedToContact, TeamSize, Timeline,
    };
    use chrono::Utc;

    fn record(id: &str) -> AnalysisRecord {
        let response = OnboardingResponse {
            crm_usage: CrmUsage::Basic,
            speed_to_contact: SpeedToContact::ThirtyMinutes,
            team_size: TeamSize::Small,
            follow_up_clarity: FollowUpClarity::Basic,
            monthly_spend: MonthlySpend::From5kTo15k,
            cpl_awareness: CplAwareness::Rough,
            pricing_comfort: PricingComfort::Flexible,
            desired_leads_weekly: 10,
            max_capacity_weekly: 15,
            product_focus_clarity: ProductFocusClarity::Multiple,
            geographic_focus_clarity: GeographicFocusClarity::Semi,
            growth_goal_clarity: GrowthGoalClarity::General,
            timeline: Timeline::ThirtyDays,
        };
        AnalysisRecord {
            response_id: ResponseId(id.to_string()),
            received_at: Utc::now(),
            result: compute_scores(&response),
            response,
        }
    }

    #[test]
    fn insert_rejects_duplicate_ids() {
        let repository = InMemoryAnalysisRepository::default();
        repository.insert(record("resp-1")).expect("first insert");

        assert!(matches!(
            repository.insert(record("resp-1")),
            Err(RepositoryError::Conflict)
        ));
    }

    #[test]
    fn recent_lists_newest_first() {
        let repository = InMemoryAnalysisRepository::default();
        for id in ["resp-1", "resp-2", "resp-3"] {
            repository.insert(record(id)).expect("insert");
        }

        let recent = repository.recent(2).expect("recent");
        let ids: Vec<_> = recent.iter().map(|r| r.response_id.0.as_str()).collect();
        assert_eq!(ids, vec!["resp-3", "resp-2"]);

        let fetched = repository
            .fetch(&ResponseId("resp-1".to_string()))
            .expect("fetch");
        assert!(fetched.is_some());
    }
}
