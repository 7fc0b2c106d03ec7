//! Gemini `generateContent` API implementation.

use super::client::GeminiClient;
use crate::providers::{ApiClient, GenerateOptions, ProviderError, ProviderResult};
use serde_json::{Value, json};
use tracing::{debug, instrument};

/// Gemini text completion model.
#[derive(Clone)]
pub struct CompletionModel {
    client: GeminiClient,
    model_id: String,
}

impl std::fmt::Debug for CompletionModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionModel")
            .field("model_id", &self.model_id)
            .finish_non_exhaustive()
    }
}

impl CompletionModel {
    pub(crate) fn new(client: GeminiClient, model_id: impl Into<String>) -> Self {
        Self {
            client,
            model_id: model_id.into(),
        }
    }

    /// Get the model identifier.
    #[must_use]
    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// Build the request body for the API.
    fn build_request_body(prompt: &str, options: &GenerateOptions) -> Value {
        let mut body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let mut config = serde_json::Map::new();
        if let Some(temperature) = options.temperature {
            config.insert("temperature".to_string(), json!(temperature));
        }
        if let Some(top_p) = options.top_p {
            config.insert("topP".to_string(), json!(top_p));
        }
        if let Some(max) = options.max_output_tokens {
            config.insert("maxOutputTokens".to_string(), json!(max));
        }
        if !config.is_empty() {
            body["generationConfig"] = Value::Object(config);
        }

        body
    }

    /// Pull the first candidate's text out of the API response.
    fn parse_response(json: &Value) -> ProviderResult<String> {
        let text = json["candidates"][0]["content"]["parts"]
            .as_array()
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|part| part["text"].as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .filter(|text| !text.is_empty())
            .ok_or_else(|| {
                ProviderError::UnexpectedResponse("no candidate text in response".to_string())
            })?;
        Ok(text.trim().to_string())
    }

    /// Generate a text completion for the given prompt.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::MissingApiKey`] without credentials,
    /// [`ProviderError::Api`] for a non-success status, and
    /// [`ProviderError::UnexpectedResponse`] when the payload carries no
    /// candidate text.
    #[instrument(skip(self, prompt, options), fields(model = %self.model_id))]
    pub async fn generate(
        &self,
        prompt: &str,
        options: &GenerateOptions,
    ) -> ProviderResult<String> {
        let api_key = self.client.api_key()?;
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.client.base_url(),
            self.model_id
        );
        let body = Self::build_request_body(prompt, options);

        debug!("sending request to Gemini API");

        let response = self
            .client
            .http_client()
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::from_response(response).await);
        }

        let json: Value = response.json().await?;
        Self::parse_response(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_request_body_maps_options() {
        let options = GenerateOptions::new()
            .with_temperature(0.1)
            .with_top_p(0.95)
            .with_max_output_tokens(2048);
        let body = CompletionModel::build_request_body("hello", &options);

        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(body["generationConfig"]["topP"], 0.95);
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 2048);
    }

    #[test]
    fn test_build_request_body_omits_empty_config() {
        let body = CompletionModel::build_request_body("hello", &GenerateOptions::new());
        assert!(body.get("generationConfig").is_none());
    }

    #[test]
    fn test_parse_response_joins_parts() {
        let json = json!({
            "candidates": [{
                "content": { "parts": [{"text": "Hello"}, {"text": " world"}] }
            }]
        });
        assert_eq!(CompletionModel::parse_response(&json).unwrap(), "Hello world");
    }

    #[test]
    fn test_parse_response_rejects_empty_payload() {
        let json = json!({ "candidates": [] });
        assert!(matches!(
            CompletionModel::parse_response(&json),
            Err(ProviderError::UnexpectedResponse(_))
        ));
    }
}
