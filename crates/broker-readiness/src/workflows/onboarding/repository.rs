use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{OnboardingResponse, ResponseId, RiskFlag, SalesAngle, SuccessBand};
use super::evaluation::AnalysisResult;

/// Stored pairing of one submission with the assessment computed for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub response_id: ResponseId,
    pub received_at: DateTime<Utc>,
    pub response: OnboardingResponse,
    pub result: AnalysisResult,
}

impl AnalysisRecord {
    pub fn view(&self) -> AnalysisRecordView {
        AnalysisRecordView {
            response_id: self.response_id.clone(),
            received_at: self.received_at,
            operational_score: self.result.operational_score,
            budget_score: self.result.budget_score,
            growth_score: self.result.growth_score,
            intent_score: self.result.intent_score,
            success_probability: self.result.success_probability,
            risk_flags: self.result.risk_flags.clone(),
            primary_sales_angle: self.result.primary_sales_angle,
            success_band: self.result.success_band,
            briefing: self.result.briefing(),
        }
    }
}

/// Storage abstraction; the engine never touches it directly.
pub trait AnalysisRepository: Send + Sync {
    fn insert(&self, record: AnalysisRecord) -> Result<AnalysisRecord, RepositoryError>;
    fn fetch(&self, id: &ResponseId) -> Result<Option<AnalysisRecord>, RepositoryError>;
    fn recent(&self, limit: usize) -> Result<Vec<AnalysisRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Flat row shape, one per response, as written by the persistence consumer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecordView {
    pub response_id: ResponseId,
    pub received_at: DateTime<Utc>,
    pub operational_score: u8,
    pub budget_score: u8,
    pub growth_score: u8,
    pub intent_score: u8,
    pub success_probability: u8,
    pub risk_flags: BTreeSet<RiskFlag>,
    pub primary_sales_angle: SalesAngle,
    pub success_band: SuccessBand,
    pub briefing: String,
}
