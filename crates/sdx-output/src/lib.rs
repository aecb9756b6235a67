//! Downstream output generation.
//!
//! - **tkn**: Tkn record serialization and data file naming
//! - **receipt**: IDBR receipt naming and content
//! - **index**: page image names and the image index CSV
//! - **archive**: in-memory zip assembly with the FTP delivery layout
//! - **render** / **sequence**: the renderer and sequence-number seams
//! - **packer**: drives transform → data → receipt → images → index → zip

pub mod archive;
pub mod error;
pub mod index;
pub mod packer;
pub mod receipt;
pub mod render;
pub mod sequence;
pub mod tkn;

pub use archive::{Archive, FTP_DATA_PATH, FTP_IMAGES_PATH, FTP_RECEIPT_PATH};
pub use error::{OutputError, Result};
pub use index::{image_name, index_content, index_name};
pub use packer::SubmissionPacker;
pub use receipt::{receipt_content, receipt_name};
pub use render::{DocumentRenderer, NullRenderer, RenderedDocument};
pub use sequence::{LocalSequence, SequenceProvider};
pub use tkn::{PAGE_ID, QUESTION_INSTANCE, tkn_content, tkn_lines, tkn_name};
