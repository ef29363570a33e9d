use serde_json::Value;

use super::domain::{Answer, OnboardingResponse, RawOnboardingResponse};

/// Reasons a raw questionnaire payload is rejected before scoring.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidInputError {
    #[error("missing answer for {field}")]
    MissingAnswer { field: &'static str },
    #[error("{field} does not accept '{value}' (expected one of: {expected})")]
    UnknownCategory {
        field: &'static str,
        value: String,
        expected: String,
    },
    #[error("{field} must not be negative (found {value})")]
    NegativeCount { field: &'static str, value: String },
    #[error("{field} must be a whole number (found {value})")]
    NonIntegralCount { field: &'static str, value: String },
    #[error("{field} is out of range (found {value})")]
    CountOutOfRange { field: &'static str, value: String },
}

impl InvalidInputError {
    pub fn field(&self) -> &'static str {
        match self {
            InvalidInputError::MissingAnswer { field }
            | InvalidInputError::UnknownCategory { field, .. }
            | InvalidInputError::NegativeCount { field, .. }
            | InvalidInputError::NonIntegralCount { field, .. }
            | InvalidInputError::CountOutOfRange { field, .. } => field,
        }
    }
}

pub const DESIRED_LEADS_FIELD: &str = "desiredLeadsWeekly";
pub const MAX_CAPACITY_FIELD: &str = "maxCapacityWeekly";

/// Turn a loosely-typed form payload into a validated response.
pub fn validate(raw: &RawOnboardingResponse) -> Result<OnboardingResponse, InvalidInputError> {
    Ok(OnboardingResponse {
        crm_usage: category(raw.crm_usage.as_deref())?,
        speed_to_contact: category(raw.speed_to_contact.as_deref())?,
        team_size: category(raw.team_size.as_deref())?,
        follow_up_clarity: category(raw.follow_up_clarity.as_deref())?,
        monthly_spend: category(raw.monthly_spend.as_deref())?,
        cpl_awareness: category(raw.cpl_awareness.as_deref())?,
        pricing_comfort: category(raw.pricing_comfort.as_deref())?,
        desired_leads_weekly: count(DESIRED_LEADS_FIELD, raw.desired_leads_weekly.as_ref())?,
        max_capacity_weekly: count(MAX_CAPACITY_FIELD, raw.max_capacity_weekly.as_ref())?,
        product_focus_clarity: category(raw.product_focus_clarity.as_deref())?,
        geographic_focus_clarity: category(raw.geographic_focus_clarity.as_deref())?,
        growth_goal_clarity: category(raw.growth_goal_clarity.as_deref())?,
        timeline: category(raw.timeline.as_deref())?,
    })
}

fn category<A: Answer>(raw: Option<&str>) -> Result<A, InvalidInputError> {
    let value = raw
        .filter(|value| !value.trim().is_empty())
        .ok_or(InvalidInputError::MissingAnswer { field: A::FIELD })?;

    A::parse(value).ok_or_else(|| InvalidInputError::UnknownCategory {
        field: A::FIELD,
        value: value.to_string(),
        expected: A::RANKED
            .iter()
            .map(|answer| answer.as_str())
            .collect::<Vec<_>>()
            .join(", "),
    })
}

fn count(field: &'static str, raw: Option<&Value>) -> Result<u32, InvalidInputError> {
    match raw {
        None | Some(Value::Null) => Err(InvalidInputError::MissingAnswer { field }),
        Some(Value::Number(number)) => {
            if let Some(whole) = number.as_u64() {
                return whole_count(field, whole);
            }
            if let Some(signed) = number.as_i64() {
                return Err(InvalidInputError::NegativeCount {
                    field,
                    value: signed.to_string(),
                });
            }
            match number.as_f64() {
                Some(decimal) => decimal_count(field, decimal, number.to_string()),
                None => Err(InvalidInputError::NonIntegralCount {
                    field,
                    value: number.to_string(),
                }),
            }
        }
        Some(Value::String(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Err(InvalidInputError::MissingAnswer { field });
            }
            if let Ok(whole) = trimmed.parse::<u64>() {
                return whole_count(field, whole);
            }
            match trimmed.parse::<f64>() {
                Ok(decimal) => decimal_count(field, decimal, trimmed.to_string()),
                Err(_) => Err(InvalidInputError::NonIntegralCount {
                    field,
                    value: trimmed.to_string(),
                }),
            }
        }
        Some(other) => Err(InvalidInputError::NonIntegralCount {
            field,
            value: other.to_string(),
        }),
    }
}

fn whole_count(field: &'static str, value: u64) -> Result<u32, InvalidInputError> {
    u32::try_from(value).map_err(|_| InvalidInputError::CountOutOfRange {
        field,
        value: value.to_string(),
    })
}

fn decimal_count(field: &'static str, value: f64, shown: String) -> Result<u32, InvalidInputError> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(InvalidInputError::NonIntegralCount {
            field,
            value: shown,
        });
    }
    if value < 0.0 {
        return Err(InvalidInputError::NegativeCount {
            field,
            value: shown,
        });
    }
    if value > u32::MAX as f64 {
        return Err(InvalidInputError::CountOutOfRange {
            field,
            value: shown,
        });
    }
    Ok(value as u32)
}
