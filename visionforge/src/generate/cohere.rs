//! Cohere chat adapter for the generation boundary.

use super::{GenerationRequest, TextGenerator};
use crate::errors::GenerationError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://api.cohere.com/v1";

/// Talks to Cohere's chat API.
pub struct CohereGenerator {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl CohereGenerator {
    /// Creates a generator against the public Cohere endpoint.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Points the generator at a different endpoint.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    message: &'a str,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    text: String,
}

/// Pulls the generated text out of a successful chat response body.
fn extract_text(body: &str) -> Result<String, GenerationError> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|err| GenerationError::provider(format!("Malformed chat response: {}", err)))?;
    Ok(response.text)
}

#[async_trait]
impl TextGenerator for CohereGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        let chat_request = ChatRequest {
            model: &request.model,
            message: &request.prompt,
            temperature: request.temperature,
        };

        let response = self
            .client
            .post(format!("{}/chat", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&chat_request)
            .send()
            .await
            .map_err(|err| GenerationError::classify(&err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| GenerationError::classify(&err.to_string()))?;

        if !status.is_success() {
            return Err(GenerationError::classify(&body));
        }

        extract_text(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text_from_chat_body() {
        let body = r#"{"text":"Here are the instructions.","generation_id":"abc-123"}"#;
        assert_eq!(
            extract_text(body).unwrap(),
            "Here are the instructions."
        );
    }

    #[test]
    fn test_extract_text_rejects_malformed_body() {
        let err = extract_text("not json").unwrap_err();
        assert!(matches!(err, GenerationError::Provider { .. }));
    }

    #[test]
    fn test_throttled_error_body_classifies_as_rate_limited() {
        // Shape of a 429 body from the chat endpoint.
        let body = r#"{"message":"Rate limit reached for command-r-plus. Please try again in 1m03.45s."}"#;
        let err = GenerationError::classify(body);
        assert!(err.is_rate_limited());
    }
}
