use std::time::Duration;

use async_openai::Client;
use async_openai::config::OpenAIConfig;
use async_openai::types::chat::{ChatCompletionRequestMessage, CreateChatCompletionRequestArgs};
use backoff::ExponentialBackoff;

use crate::error::AppError;

/// Fixed sampling parameters for one call. These are part of the request
/// contract, not user configuration.
#[derive(Debug, Clone, Copy)]
pub struct SamplingProfile {
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Classification call: deterministic output, room for the full report.
pub const CLASSIFICATION: SamplingProfile = SamplingProfile {
    temperature: 0.0,
    max_tokens: 200,
};

/// Refusal-notice call: some variety, short output.
pub const REFUSAL_NOTICE: SamplingProfile = SamplingProfile {
    temperature: 0.8,
    max_tokens: 100,
};

#[derive(Clone)]
pub struct CompletionClient {
    http: reqwest::Client,
    api_base: String,
    model: String,
}

impl CompletionClient {
    pub fn new(http: reqwest::Client, api_base: &str, model: &str) -> Self {
        Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
            model: model.to_string(),
        }
    }

    /// Issue one chat-completion request and return the first candidate's
    /// text. Exactly one candidate is requested; there is no retry.
    pub async fn complete(
        &self,
        api_key: &str,
        messages: Vec<ChatCompletionRequestMessage>,
        profile: SamplingProfile,
    ) -> Result<String, AppError> {
        // The credential arrives with each submission, so the client config
        // is per-call; the reqwest client and its pool are shared.
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(&self.api_base);
        // A zero backoff window turns off the client's built-in 429/5xx
        // retries; a rejected call is final.
        let client = Client::with_config(config)
            .with_http_client(self.http.clone())
            .with_backoff(ExponentialBackoff {
                max_elapsed_time: Some(Duration::ZERO),
                ..ExponentialBackoff::default()
            });

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .temperature(profile.temperature)
            .max_tokens(profile.max_tokens)
            .n(1u8)
            .build()
            .map_err(|e| AppError::upstream(format!("Failed to build request: {e}")))?;

        let response = client
            .chat()
            .create(request)
            .await
            .map_err(|e| AppError::upstream(format!("Completion API error: {e}")))?;

        let choice = response
            .choices
            .first()
            .ok_or_else(|| AppError::upstream("Empty response from completion API"))?;

        choice
            .message
            .content
            .clone()
            .ok_or_else(|| AppError::upstream("Completion response had no text content"))
    }
}
