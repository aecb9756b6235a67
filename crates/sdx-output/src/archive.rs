//! In-memory archive assembly.
//!
//! Files are laid out for FTP delivery: data under `EDC_QData`, receipts
//! under `EDC_QReceipts`, images and the index under `EDC_QImages`.

use std::io::{Cursor, Write};

use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::Result;

/// Archive directory for Tkn data files.
pub const FTP_DATA_PATH: &str = "EDC_QData";

/// Archive directory for IDBR receipts.
pub const FTP_RECEIPT_PATH: &str = "EDC_QReceipts";

/// Archive directory for page images and their index.
pub const FTP_IMAGES_PATH: &str = "EDC_QImages";

/// An in-memory zip under construction.
pub struct Archive {
    writer: ZipWriter<Cursor<Vec<u8>>>,
}

impl Archive {
    #[must_use]
    pub fn new() -> Self {
        Self {
            writer: ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    /// Appends one file at `dir/name`.
    ///
    /// # Errors
    ///
    /// Fails when the entry cannot be written.
    pub fn append(&mut self, dir: &str, name: &str, bytes: &[u8]) -> Result<()> {
        self.writer
            .start_file(format!("{dir}/{name}"), SimpleFileOptions::default())?;
        self.writer.write_all(bytes)?;
        Ok(())
    }

    /// Finishes the archive and returns the zip bytes.
    ///
    /// # Errors
    ///
    /// Fails when the central directory cannot be written.
    pub fn into_bytes(self) -> Result<Vec<u8>> {
        let cursor = self.writer.finish()?;
        Ok(cursor.into_inner())
    }
}

impl Default for Archive {
    fn default() -> Self {
        Self::new()
    }
}
