//! Shared fixtures for sdx-output integration tests.

use sdx_model::SurveyResponse;

pub const UKIS_REPLY: &str = r#"{
   "type": "uk.gov.ons.edc.eq:surveyresponse",
   "origin": "uk.gov.ons.edc.eq",
   "survey_id": "144",
   "version": "0.0.1",
   "collection": {
     "exercise_sid": "hfjdskf",
     "instrument_id": "0001",
     "period": "201605"
   },
   "submitted_at": "2016-03-12T10:39:40Z",
   "metadata": {
     "user_id": "789473423",
     "ru_ref": "12345678901A"
   },
   "data": {
     "0210": "1",
     "0410": "Yes",
     "1410": "123456",
     "2700": "Respondent comment data."
   }
}"#;

#[must_use]
pub fn ukis_response() -> SurveyResponse {
    serde_json::from_str(UKIS_REPLY).expect("valid submission fixture")
}
