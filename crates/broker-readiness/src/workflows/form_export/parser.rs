use serde::{Deserialize, Deserializer};
use std::io::Read;

use crate::workflows::onboarding::{RawOnboardingResponse, ResponseId};

#[derive(Debug)]
pub(crate) struct FormExportRecord {
    pub(crate) response_id: Option<ResponseId>,
    pub(crate) raw: RawOnboardingResponse,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<FormExportRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for record in csv_reader.deserialize::<FormExportRow>() {
        let row = record?;
        records.push(row.into_record());
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FormExportRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    response_id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    crm_usage: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    speed_to_contact: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    team_size: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    follow_up_clarity: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    monthly_spend: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    cpl_awareness: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pricing_comfort: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    desired_leads_weekly: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    max_capacity_weekly: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    product_focus_clarity: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    geographic_focus_clarity: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    growth_goal_clarity: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    timeline: Option<String>,
}

impl FormExportRow {
    fn into_record(self) -> FormExportRecord {
        let raw = RawOnboardingResponse {
            crm_usage: self.crm_usage,
            speed_to_contact: self.speed_to_contact,
            team_size: self.team_size,
            follow_up_clarity: self.follow_up_clarity,
            monthly_spend: self.monthly_spend,
            cpl_awareness: self.cpl_awareness,
            pricing_comfort: self.pricing_comfort,
            desired_leads_weekly: self.desired_leads_weekly.map(serde_json::Value::String),
            max_capacity_weekly: self.max_capacity_weekly.map(serde_json::Value::String),
            product_focus_clarity: self.product_focus_clarity,
            geographic_focus_clarity: self.geographic_focus_clarity,
            growth_goal_clarity: self.growth_goal_clarity,
            timeline: self.timeline,
        };

        FormExportRecord {
            response_id: self.response_id.map(ResponseId),
            raw,
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
