//! Tkn record serialization.
//!
//! One line per field, colon-delimited:
//! `<survey_code>:<ru_ref>:<page>:<period>:<instance>:<question_id>:<value>`,
//! in the field map's iteration order. Page id and question instance are
//! constant literals for this record type. No escaping is performed; a
//! delimiter inside a value would corrupt the record, which is an accepted
//! constraint of the legacy format.

use sdx_transform::FieldMap;

/// Page id literal for Tkn records.
pub const PAGE_ID: &str = "1";

/// Question instance literal for Tkn records.
pub const QUESTION_INSTANCE: &str = "0";

/// Serializes an ordered field map into Tkn record lines.
#[must_use]
pub fn tkn_lines(survey_code: &str, ru_ref: &str, period: &str, data: &FieldMap) -> Vec<String> {
    data.iter()
        .map(|(question, value)| {
            [
                survey_code,
                ru_ref,
                PAGE_ID,
                period,
                QUESTION_INSTANCE,
                question,
                value,
            ]
            .join(":")
        })
        .collect()
}

/// Full Tkn file content: lines joined by newlines, with a trailing
/// newline.
#[must_use]
pub fn tkn_content(survey_code: &str, ru_ref: &str, period: &str, data: &FieldMap) -> String {
    let mut content = tkn_lines(survey_code, ru_ref, period, data).join("\n");
    content.push('\n');
    content
}

/// Data file name: the survey code and a four-digit sequence number.
#[must_use]
pub fn tkn_name(survey_code: &str, sequence_no: u32) -> String {
    format!("{survey_code}_{sequence_no:04}")
}
