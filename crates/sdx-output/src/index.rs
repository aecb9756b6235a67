//! Image index generation.
//!
//! The downstream imaging system consumes a CSV listing every page image in
//! an archive. No images means no index.

use chrono::{DateTime, Utc};
use sdx_model::SurveyResponse;

/// Page image name from its sequence number, e.g. `S000000001.JPG`.
#[must_use]
pub fn image_name(sequence_no: u32) -> String {
    format!("S{sequence_no:09}.JPG")
}

/// Index file name, e.g. `EDC_144_20160312_1000.csv`.
#[must_use]
pub fn index_name(survey_id: &str, submitted_at: &DateTime<Utc>, sequence_no: u32) -> String {
    format!(
        "EDC_{survey_id}_{}_{sequence_no:04}.csv",
        submitted_at.format("%Y%m%d")
    )
}

/// Builds one index row per image, in page order.
#[must_use]
pub fn index_rows(
    response: &SurveyResponse,
    created: &DateTime<Utc>,
    images: &[String],
) -> Vec<String> {
    images
        .iter()
        .enumerate()
        .map(|(page, image)| {
            format!(
                "{},{image},{},{},{},{},{:03},0",
                created.format("%d/%m/%Y %H:%M:%S"),
                response.survey_id,
                response.collection.instrument_id,
                response.respondent_ref(),
                response.collection.period,
                page + 1
            )
        })
        .collect()
}

/// Full index content, or `None` when there are no images to list.
#[must_use]
pub fn index_content(
    response: &SurveyResponse,
    created: &DateTime<Utc>,
    images: &[String],
) -> Option<String> {
    if images.is_empty() {
        return None;
    }
    let mut content = index_rows(response, created, images).join("\n");
    content.push('\n');
    Some(content)
}
