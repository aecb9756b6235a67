//! Archive assembly for one submission.

use chrono::Utc;
use sdx_model::{FieldTable, SurveyResponse};
use sdx_transform::transform;
use tracing::info;

use crate::archive::{Archive, FTP_DATA_PATH, FTP_IMAGES_PATH, FTP_RECEIPT_PATH};
use crate::error::Result;
use crate::index::{image_name, index_content, index_name};
use crate::receipt::{receipt_content, receipt_name};
use crate::render::{DocumentRenderer, NullRenderer};
use crate::sequence::{LocalSequence, SequenceProvider};
use crate::tkn::{tkn_content, tkn_name};

/// Packs submissions into downstream delivery archives.
///
/// Holds the rendering and sequence-number collaborators; the field table
/// is passed per call because it depends on the submitted instrument.
pub struct SubmissionPacker<R, S> {
    renderer: R,
    sequence: S,
}

impl SubmissionPacker<NullRenderer, LocalSequence> {
    /// A packer with no renderer and a local sequence: archives carry the
    /// data file and receipt only.
    #[must_use]
    pub fn new() -> Self {
        Self::with(NullRenderer, LocalSequence::default())
    }
}

impl Default for SubmissionPacker<NullRenderer, LocalSequence> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: DocumentRenderer, S: SequenceProvider> SubmissionPacker<R, S> {
    #[must_use]
    pub fn with(renderer: R, sequence: S) -> Self {
        Self { renderer, sequence }
    }

    /// Builds the delivery archive for one submission.
    ///
    /// Member order matches the downstream intake: data file first, then
    /// receipt, page images, and the image index.
    ///
    /// # Errors
    ///
    /// Fails when rendering or archive assembly fails.
    pub fn pack(
        &mut self,
        table: &FieldTable,
        response: &SurveyResponse,
        sequence_no: u32,
    ) -> Result<Vec<u8>> {
        let mut archive = Archive::new();

        let data = transform(table, &response.data);
        let data_name = tkn_name(&response.survey_id, sequence_no);
        let content = tkn_content(
            &response.survey_id,
            response.respondent_ref(),
            &response.collection.period,
            &data,
        );
        archive.append(FTP_DATA_PATH, &data_name, content.as_bytes())?;
        info!(file = %data_name, fields = data.len(), "added data file to archive");

        let receipt = receipt_name(&response.submitted_at, sequence_no);
        archive.append(FTP_RECEIPT_PATH, &receipt, receipt_content(response).as_bytes())?;
        info!(file = %receipt, "added receipt to archive");

        let document = self.renderer.render(response)?;
        let mut images = Vec::new();
        for page in &document.pages {
            let name = image_name(self.sequence.next_image_sequence());
            archive.append(&format!("{FTP_IMAGES_PATH}/Images"), &name, page)?;
            info!(file = %name, "added image to archive");
            images.push(name);
        }

        if let Some(index) = index_content(response, &Utc::now(), &images) {
            let name = index_name(&response.survey_id, &response.submitted_at, sequence_no);
            archive.append(&format!("{FTP_IMAGES_PATH}/Index"), &name, index.as_bytes())?;
            info!(file = %name, "added image index to archive");
        }

        archive.into_bytes()
    }
}
