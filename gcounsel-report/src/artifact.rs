use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::consts::{DEFAULT_REPORT_FILE_NAME, PDF_MIME_TYPE};
use crate::errors::ReportError;

///
/// A rendered report together with how it should be offered for download.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportArtifact {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub mime: String,
    pub page_count: usize,
}

impl ReportArtifact {
    pub fn pdf(bytes: Vec<u8>, page_count: usize) -> Self {
        ReportArtifact {
            bytes,
            file_name: DEFAULT_REPORT_FILE_NAME.to_string(),
            mime: PDF_MIME_TYPE.to_string(),
            page_count,
        }
    }

    /// Write the report bytes to `path`, creating or truncating the file.
    pub fn write_to(&self, path: &Path) -> Result<(), ReportError> {
        let mut file = File::create(path)?;
        file.write_all(&self.bytes)?;
        Ok(())
    }
}
