use thiserror::Error;

use crate::format::AnswerFormat;

/// Errors raised while building or resolving survey definitions.
///
/// Data-quality problems in submitted answers are never errors; the
/// transform is total over its input. These variants cover construction-time
/// invariant violations and the client-facing unsupported-survey condition.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A question id is claimed by more than one rule.
    #[error("duplicate question id in field table: {id}")]
    DuplicateQuestion { id: String },

    /// A rule's default value does not satisfy its own format.
    #[error("default {value:?} for question {id} does not satisfy format {format}")]
    InvalidDefault {
        id: String,
        value: String,
        format: AnswerFormat,
    },

    /// No field table is registered for the submitted survey/instrument pair.
    #[error("unsupported survey/instrument id: {survey_id}.{instrument_id}")]
    UnsupportedSurvey {
        survey_id: String,
        instrument_id: String,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
