//! Broker onboarding intake and readiness scoring.
//!
//! Raw questionnaire payloads are validated by [`intake`], scored by the pure engine in
//! [`evaluation`], and handed to an [`AnalysisRepository`] by the service layer. Only the
//! service and router touch the clock or storage.

mod briefing;
pub mod domain;
pub mod evaluation;
pub mod intake;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Answer, CapacityRatio, CplAwareness, CrmUsage, Dimension, FollowUpClarity,
    GeographicFocusClarity, GrowthGoalClarity, MonthlySpend, OnboardingResponse, PricingComfort,
    ProductFocusClarity, RawOnboardingResponse, ResponseId, RiskFlag, SalesAngle, ScoreBreakdown,
    SpeedToContact, SuccessBand, TeamSize, Timeline,
};
pub use evaluation::{analyze, compute_scores, AnalysisResult};
pub use intake::{validate, InvalidInputError};
pub use repository::{AnalysisRecord, AnalysisRecordView, AnalysisRepository, RepositoryError};
pub use router::onboarding_router;
pub use service::{AnalysisServiceError, OnboardingAnalysisService};
