//! # gcounsel-assist
//!
//! Answers follow-up questions about a session's genes with a hosted chat model.
//!
//! - [`Assistant`]: one question plus a context blob in, one answer out
//! - [`ChatClient`]: implementation over an OpenAI-compatible `chat/completions`
//!   endpoint (Groq by default)
//! - [`build_context`]: renders a session's gene entries into the context blob
//!
//! Calls are stateless and blocking; there is no streaming.
pub mod chat;
pub mod consts;
pub mod context;
pub mod errors;

pub use chat::*;
pub use context::*;
pub use errors::*;

///
/// Something that can answer a question given free-text context.
///
pub trait Assistant {
    fn answer(&self, question: &str, context: &str) -> Result<String, AssistError>;
}
