//! The survey-response submission document.
//!
//! This is the JSON envelope posted by the collection front end: submission
//! metadata consumed by the serializer and packaging collaborators, plus the
//! flat `data` mapping of question ids to raw answer text that feeds the
//! transform.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Collection-exercise details for a submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_sid: Option<String>,
    pub instrument_id: String,
    pub period: String,
}

/// Respondent metadata carried alongside the answers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub user_id: String,
    pub ru_ref: String,
}

/// A survey-response submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyResponse {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub response_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    pub survey_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_id: Option<String>,
    pub collection: Collection,
    pub submitted_at: DateTime<Utc>,
    pub metadata: Metadata,
    /// Question id → raw answer text. Not assumed complete; absent keys
    /// resolve through the field table's defaults.
    #[serde(default)]
    pub data: BTreeMap<String, String>,
}

impl SurveyResponse {
    /// The respondent reference the downstream record carries: the first
    /// eleven characters of `ru_ref`.
    #[must_use]
    pub fn respondent_ref(&self) -> &str {
        let ru_ref = self.metadata.ru_ref.as_str();
        ru_ref.get(..11).unwrap_or(ru_ref)
    }

    /// The IDBR check letter, when the reference carries one.
    #[must_use]
    pub fn check_letter(&self) -> Option<char> {
        self.metadata.ru_ref.chars().nth(11)
    }
}
