//! Document rendering seam.
//!
//! Rendering a submission into a paginated document is a black-box
//! collaborator; the packer only needs encoded page images back.

use sdx_model::SurveyResponse;

use crate::error::Result;

/// A rendered, paginated document: one encoded image per page.
#[derive(Debug, Default)]
pub struct RenderedDocument {
    pub pages: Vec<Vec<u8>>,
}

/// Renders a submission into page images for the archive.
pub trait DocumentRenderer {
    /// # Errors
    ///
    /// Implementations surface their own rendering failures.
    fn render(&self, response: &SurveyResponse) -> Result<RenderedDocument>;
}

/// Renderer producing no pages; archives built with it carry the data file
/// and receipt only.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl DocumentRenderer for NullRenderer {
    fn render(&self, _response: &SurveyResponse) -> Result<RenderedDocument> {
        Ok(RenderedDocument::default())
    }
}
