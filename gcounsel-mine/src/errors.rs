use thiserror::Error;

#[derive(Error, Debug)]
pub enum MineError {
    #[error("Unsupported input file type: `{0}`")]
    UnsupportedInput(String),
    #[error("Failed to read PDF: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
