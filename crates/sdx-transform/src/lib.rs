//! Table-driven transformation of survey submissions.
//!
//! - **encode**: the field encoder catalogue
//! - **ukis**: the UKIS (survey 144) field definition table and the survey
//!   registry
//! - **transform**: the orchestrator applying a field table to raw answers

pub mod encode;
pub mod transform;
pub mod ukis;

pub use encode::encode;
pub use transform::{FieldMap, transform};
pub use ukis::{SurveyRegistry, default_registry, ukis};
