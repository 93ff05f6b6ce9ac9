use thiserror::Error;

use gcounsel_assist::AssistError;
use gcounsel_report::ReportError;
use gcounsel_select::SelectError;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("No gene names were provided or found in the uploaded documents")]
    NoGenes,
    #[error("Nothing has been fetched yet; run the fetch stage first")]
    NotFetched,
    #[error("No assistant is configured for this session")]
    NoAssistant,
    #[error(transparent)]
    Select(#[from] SelectError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error(transparent)]
    Assist(#[from] AssistError),
}
