//! OpenAI-style chat completions client.

use deck_core::{Error, Result};
use serde::{Deserialize, Serialize};

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Model requested by default; fixed at design time.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Chat completions API client.
#[derive(Debug, Clone)]
pub struct ChatClient {
    client: reqwest::blocking::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl ChatClient {
    /// Create a client reading the API key from `OPENAI_API_KEY`.
    pub fn new(model: impl Into<String>) -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| Error::MissingApiKey("OPENAI_API_KEY not set".to_string()))?;
        Ok(Self::with_api_key(api_key, model))
    }

    /// Create a client with an explicit API key.
    pub fn with_api_key(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: OPENAI_API_URL.to_string(),
        }
    }

    /// Point the client at a different base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The model identifier sent with each request.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one user-role prompt and return the model's text response
    /// unmodified. No retries on malformed or truncated output.
    pub fn complete(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        };

        log::debug!(
            "Requesting completion from {} (model {})",
            self.base_url,
            self.model
        );

        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .map_err(|e| Error::GenerationFailed(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            return Err(Error::GenerationFailed(format!(
                "API error {}: {}",
                status, body
            )));
        }

        let completion: ChatResponse = response
            .json()
            .map_err(|e| Error::MalformedResponse(format!("Failed to decode completion: {}", e)))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| Error::MalformedResponse("Completion contained no choices".to_string()))
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let request = ChatRequest {
            model: DEFAULT_MODEL.to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: "hello".to_string(),
            }],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-4o-mini");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "hello");
    }

    #[test]
    fn test_response_decoding() {
        let json = r#"{
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "choices": [
                {
                    "index": 0,
                    "message": {"role": "assistant", "content": "Slide 1: Intro"},
                    "finish_reason": "stop"
                }
            ],
            "usage": {"prompt_tokens": 10, "completion_tokens": 5}
        }"#;

        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.choices.len(), 1);
        assert_eq!(response.choices[0].message.content, "Slide 1: Intro");
    }

    #[test]
    fn test_empty_choices_decodes() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(response.choices.is_empty());
    }

    #[test]
    fn test_client_keeps_model_identifier() {
        let client = ChatClient::with_api_key("sk-test", DEFAULT_MODEL);
        assert_eq!(client.model(), "gpt-4o-mini");
    }
}
