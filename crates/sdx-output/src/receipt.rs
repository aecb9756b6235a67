//! IDBR receipt generation.
//!
//! Every archive carries a receipt the intake system uses to mark the
//! respondent as returned.

use chrono::{DateTime, Utc};
use sdx_model::SurveyResponse;

/// Receipt file name: `REC<ddmm>_<sequence>.DAT`.
///
/// e.g. `REC1001_3000.DAT` for a submission on the 10th of January,
/// sequence 3000.
#[must_use]
pub fn receipt_name(submitted_at: &DateTime<Utc>, sequence_no: u32) -> String {
    format!("REC{}_{sequence_no:04}.DAT", submitted_at.format("%d%m"))
}

/// The single receipt line the intake reads: respondent reference, check
/// letter, survey id, period.
#[must_use]
pub fn receipt_content(response: &SurveyResponse) -> String {
    format!(
        "{}:{}:{}:{}\n",
        response.respondent_ref(),
        response.check_letter().map(String::from).unwrap_or_default(),
        response.survey_id,
        response.collection.period
    )
}
