use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SelectError {
    #[error("The per-category limit must be at least 1, got {0}")]
    InvalidCap(usize),
    #[error("Consequence category must not be empty")]
    EmptyCategory,
}
