//! Environment variables and defaults for the chat client.

/// Environment variable holding the API key. Required; never compiled in.
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

/// Environment variable overriding the OpenAI-compatible base url.
pub const CHAT_API_ENV: &str = "GCOUNSEL_CHAT_API";

/// Environment variable overriding the chat model.
pub const CHAT_MODEL_ENV: &str = "GCOUNSEL_CHAT_MODEL";

pub const DEFAULT_CHAT_API: &str = "https://api.groq.com/openai/v1";

pub const DEFAULT_CHAT_MODEL: &str = "llama3-8b-8192";

pub const SYSTEM_PROMPT: &str = "You are a helpful genetic counseling assistant.";
