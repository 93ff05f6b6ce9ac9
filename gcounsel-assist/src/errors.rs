use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssistError {
    #[error("No API key configured; set the {0} environment variable")]
    MissingApiKey(&'static str),
    #[error("Chat request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Chat API answered with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Could not decode chat API response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Chat API returned no answer")]
    EmptyResponse,
    #[error("Question must not be empty")]
    EmptyQuestion,
}
