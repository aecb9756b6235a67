//! SDX survey data model definitions.
//!
//! - **format**: validation formats for encoded output values
//! - **field**: field rules, derived groups, and the immutable field table
//! - **submission**: the survey-response JSON document
//! - **error**: model error types

pub mod error;
pub mod field;
pub mod format;
pub mod submission;

pub use error::{ModelError, Result};
pub use field::{
    DerivedGroup, DerivedRule, Encoder, FieldEntry, FieldRule, FieldTable, QuestionRange,
    RoutingRule, question_id,
};
pub use format::AnswerFormat;
pub use submission::{Collection, Metadata, SurveyResponse};
