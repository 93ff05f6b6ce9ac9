use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to build PDF document: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Report has no pages")]
    Empty,
}
