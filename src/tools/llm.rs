use crate::models::{ChatCompletionRequest, ChatMessage};
use anyhow::Context;
use serde_json::Value;
use tracing::{debug, warn};

const TEMPERATURE: f32 = 0.3;
const MAX_TOKENS: u32 = 600;

/// Chat-completion client for Groq's OpenAI-compatible API.
#[derive(Debug, Clone)]
pub struct GroqClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl GroqClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            model: model.into(),
        }
    }

    fn request(&self, prompt: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }

    /// Sends a single-message completion and returns the first choice's content.
    ///
    /// Transport failures and non-JSON bodies are errors. A JSON body without
    /// `choices[0].message.content` yields `Ok(None)`.
    pub async fn complete(&self, api_key: &str, prompt: &str) -> anyhow::Result<Option<String>> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        debug!(model = %self.model, "Requesting completion from {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&self.request(prompt))
            .send()
            .await
            .context("Completion request failed")?;

        let status = response.status();
        let body: Value = response
            .json()
            .await
            .with_context(|| format!("Completion response was not JSON (status {})", status))?;

        if !status.is_success() {
            warn!(%status, "Completion API returned an error status");
        }

        Ok(body
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .map(str::to_owned))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_uses_fixed_sampling_parameters() {
        let client = GroqClient::new(
            reqwest::Client::new(),
            "https://groq.example/openai/v1",
            "llama-3.3-70b-versatile",
        );
        let body = serde_json::to_value(client.request("Analyze this")).unwrap();

        assert_eq!(body["model"], "llama-3.3-70b-versatile");
        assert_eq!(body["messages"], json!([{ "role": "user", "content": "Analyze this" }]));
        assert_eq!(body["max_tokens"], 600);
        assert!((body["temperature"].as_f64().unwrap() - 0.3).abs() < 1e-6);
    }
}
