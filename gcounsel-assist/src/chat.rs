use std::env;

use log::{debug, info};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::Assistant;
use crate::consts::{
    API_KEY_ENV, CHAT_API_ENV, CHAT_MODEL_ENV, DEFAULT_CHAT_API, DEFAULT_CHAT_MODEL,
    SYSTEM_PROMPT,
};
use crate::errors::AssistError;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        ChatMessage {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        ChatMessage {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Serialize, Debug)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
}

#[derive(Deserialize, Debug)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize, Debug)]
struct ChatChoice {
    message: ChatMessage,
}

///
/// The message sequence sent for one question: the assistant persona, the question, then
/// the gene context as a trailing system message.
///
pub fn build_messages(question: &str, context: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(question),
        ChatMessage::system(format!("Context: {context}")),
    ]
}

/// Content of the first choice of a `chat/completions` response body.
pub fn parse_completion(body: &str) -> Result<String, AssistError> {
    let response: ChatCompletionResponse = serde_json::from_str(body)?;
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or(AssistError::EmptyResponse)
}

/// Builder for [`ChatClient`]. Unset values fall back to environment variables, then defaults.
#[derive(Default)]
pub struct ChatClientBuilder {
    api: Option<String>,
    model: Option<String>,
    api_key: Option<String>,
}

impl ChatClientBuilder {
    pub fn with_api(mut self, api: String) -> Self {
        self.api = Some(api);
        self
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = Some(model);
        self
    }

    pub fn with_api_key(mut self, api_key: String) -> Self {
        self.api_key = Some(api_key);
        self
    }

    pub fn finish(self) -> Result<ChatClient, AssistError> {
        let api_key = self
            .api_key
            .or_else(|| env::var(API_KEY_ENV).ok())
            .filter(|key| !key.trim().is_empty())
            .ok_or(AssistError::MissingApiKey(API_KEY_ENV))?;
        let api = self
            .api
            .or_else(|| env::var(CHAT_API_ENV).ok())
            .unwrap_or_else(|| DEFAULT_CHAT_API.to_string());
        let model = self
            .model
            .or_else(|| env::var(CHAT_MODEL_ENV).ok())
            .unwrap_or_else(|| DEFAULT_CHAT_MODEL.to_string());

        Ok(ChatClient {
            http: Client::builder().build()?,
            api: api.trim_end_matches('/').to_string(),
            model,
            api_key,
        })
    }
}

///
/// Client for an OpenAI-compatible chat-completion API.
///
pub struct ChatClient {
    http: Client,
    pub api: String,
    pub model: String,
    api_key: String,
}

impl ChatClient {
    pub fn builder() -> ChatClientBuilder {
        ChatClientBuilder::default()
    }

    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.api)
    }
}

impl Assistant for ChatClient {
    fn answer(&self, question: &str, context: &str) -> Result<String, AssistError> {
        if question.trim().is_empty() {
            return Err(AssistError::EmptyQuestion);
        }

        let request = ChatCompletionRequest {
            model: &self.model,
            messages: build_messages(question, context),
        };

        info!("Asking {} ({} context chars)", self.model, context.len());
        debug!("POST {}", self.completions_url());
        let response = self
            .http
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()?;

        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(AssistError::Status {
                status: status.as_u16(),
                body,
            });
        }

        parse_completion(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_build_messages_order() {
        let messages = build_messages("Is rs80357069 pathogenic?", "Gene Information: BRCA1");

        let roles: Vec<&str> = messages.iter().map(|m| m.role.as_str()).collect();
        assert_eq!(roles, vec!["system", "user", "system"]);
        assert_eq!(messages[0].content, SYSTEM_PROMPT);
        assert_eq!(messages[1].content, "Is rs80357069 pathogenic?");
        assert_eq!(messages[2].content, "Context: Gene Information: BRCA1");
    }

    #[rstest]
    fn test_request_serialization() {
        let request = ChatCompletionRequest {
            model: "llama3-8b-8192",
            messages: vec![ChatMessage::user("hi")],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "model": "llama3-8b-8192",
                "messages": [{"role": "user", "content": "hi"}]
            })
        );
    }

    #[rstest]
    fn test_parse_completion_first_choice() {
        let body = r#"{
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "BRCA1 is a tumor suppressor."}, "finish_reason": "stop"}
            ],
            "usage": {"total_tokens": 42}
        }"#;
        assert_eq!(parse_completion(body).unwrap(), "BRCA1 is a tumor suppressor.");
    }

    #[rstest]
    #[case(r#"{"choices": []}"#)]
    #[case(r#"{"choices": [{"message": {"role": "assistant", "content": "  "}}]}"#)]
    fn test_parse_completion_without_answer(#[case] body: &str) {
        assert!(matches!(parse_completion(body), Err(AssistError::EmptyResponse)));
    }

    #[rstest]
    #[case("not json")]
    #[case(r#"{"choices": [{"message": {"role": "assistant"}}]}"#)]
    fn test_parse_completion_undecodable(#[case] body: &str) {
        let err = parse_completion(body).unwrap_err();
        assert!(matches!(err, AssistError::Decode(_)));
        assert!(err.to_string().starts_with("Could not decode chat API response"));
    }

    #[rstest]
    fn test_builder_with_explicit_values() {
        let client = ChatClient::builder()
            .with_api("https://example.org/openai/v1/".to_string())
            .with_model("llama-3.1-8b-instant".to_string())
            .with_api_key("test-key".to_string())
            .finish()
            .unwrap();

        assert_eq!(client.completions_url(), "https://example.org/openai/v1/chat/completions");
        assert_eq!(client.model, "llama-3.1-8b-instant");
    }

    #[rstest]
    fn test_blank_api_key_is_rejected() {
        let result = ChatClient::builder().with_api_key("  ".to_string()).finish();
        assert!(matches!(result, Err(AssistError::MissingApiKey(_))));
    }
}
