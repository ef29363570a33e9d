use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use super::domain::{RawOnboardingResponse, ResponseId};
use super::evaluation::compute_scores;
use super::intake::{validate, InvalidInputError};
use super::repository::{AnalysisRecord, AnalysisRepository, RepositoryError};

/// Form-submission handler: validates, scores, and hands the record to storage once.
pub struct OnboardingAnalysisService<R> {
    repository: Arc<R>,
}

static RESPONSE_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_response_id() -> ResponseId {
    let id = RESPONSE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ResponseId(format!("resp-{id:06}"))
}

impl<R> OnboardingAnalysisService<R>
where
    R: AnalysisRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Score a new submission under a fresh id. Resubmissions never overwrite earlier records.
    pub fn submit(
        &self,
        raw: RawOnboardingResponse,
    ) -> Result<AnalysisRecord, AnalysisServiceError> {
        let response = validate(&raw).map_err(|err| {
            warn!(field = err.field(), error = %err, "rejected onboarding response");
            err
        })?;
        let result = compute_scores(&response);

        let record = AnalysisRecord {
            response_id: next_response_id(),
            received_at: Utc::now(),
            response,
            result,
        };

        let stored = self.repository.insert(record)?;
        info!(
            response_id = %stored.response_id.0,
            probability = stored.result.success_probability,
            band = stored.result.success_band.label(),
            flags = stored.result.risk_flags.len(),
            "onboarding response scored"
        );
        Ok(stored)
    }

    pub fn get(&self, response_id: &ResponseId) -> Result<AnalysisRecord, AnalysisServiceError> {
        debug!(response_id = %response_id.0, "fetching onboarding analysis");
        let record = self
            .repository
            .fetch(response_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn recent(&self, limit: usize) -> Result<Vec<AnalysisRecord>, AnalysisServiceError> {
        Ok(self.repository.recent(limit)?)
    }
}

/// Error raised by the onboarding analysis service.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisServiceError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
