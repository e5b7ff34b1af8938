//! Groq chat-completions driver using reqwest.

use crate::groq::dto::{GroqRequest, GroqResponse};
use crate::metrics::StoryMetrics;
use algotale_core::{GeneratedText, InvokeOptions};
use algotale_error::{ProviderError, ProviderErrorKind, ProviderResult};
use algotale_interface::StoryDriver;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Instant;
use tracing::{debug, error, instrument};

const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";
const API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// System instruction sent with every story request.
const SYSTEM_INSTRUCTION: &str = "You are an expert storyteller specializing in \
making complex programming concepts engaging through creative narratives. \
Create educational stories that blend entertainment with clear technical \
explanations.";

/// Groq LPU chat-completions driver.
///
/// First in the orchestrator's priority order: Groq's free tier is the
/// fastest and most reliable of the supported backends.
#[derive(Debug, Clone)]
pub struct GroqDriver {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GroqDriver {
    /// Creates a new Groq driver with the default story model.
    ///
    /// An empty key produces a driver that fails fast with `NotConfigured`
    /// without touching the network.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_model(api_key, DEFAULT_MODEL)
    }

    /// Creates a new Groq driver with an explicit model.
    pub fn with_model(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let model = model.into();
        debug!(model = %model, "Created Groq driver");

        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model,
            base_url: API_URL.to_string(),
        }
    }

    async fn request(&self, prompt: &str, opts: &InvokeOptions) -> ProviderResult<GeneratedText> {
        let body = GroqRequest::new(
            &self.model,
            SYSTEM_INSTRUCTION,
            prompt,
            *opts.temperature(),
            *opts.max_tokens(),
            *opts.top_p(),
        );

        debug!(url = %self.base_url, prompt_len = prompt.len(), "Sending request to Groq");

        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                ProviderError::new(ProviderErrorKind::Transport(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(status = %status, error = %message, "API error");
            return Err(ProviderError::new(ProviderErrorKind::Api {
                status: status.as_u16(),
                message,
            }));
        }

        let parsed: GroqResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse JSON");
            ProviderError::new(ProviderErrorKind::ResponseConversion(format!(
                "Failed to parse JSON: {}",
                e
            )))
        })?;

        let text = parsed
            .choices()
            .first()
            .and_then(|choice| choice.message().content().clone())
            .ok_or_else(|| {
                ProviderError::new(ProviderErrorKind::ResponseConversion(
                    "Missing message content in response".to_string(),
                ))
            })?;

        let len = text.chars().count();
        if len < *opts.min_chars() {
            return Err(ProviderError::new(ProviderErrorKind::EmptyOrShort {
                len,
                min: *opts.min_chars(),
            }));
        }

        debug!(response_len = len, "Received response from Groq");

        let total_tokens = parsed.usage().as_ref().map(|u| *u.total_tokens());
        Ok(GeneratedText {
            text,
            total_tokens,
        })
    }
}

#[async_trait]
impl StoryDriver for GroqDriver {
    #[instrument(skip(self, prompt), fields(provider = "groq", model = %self.model))]
    async fn invoke(&self, prompt: &str, opts: &InvokeOptions) -> ProviderResult<GeneratedText> {
        if self.api_key.is_empty() {
            return Err(ProviderError::new(ProviderErrorKind::NotConfigured(
                "groq".to_string(),
            )));
        }

        let started = Instant::now();
        let result = match tokio::time::timeout(*opts.timeout(), self.request(prompt, opts)).await
        {
            Ok(inner) => inner,
            Err(_) => Err(ProviderError::new(ProviderErrorKind::Timeout(
                *opts.timeout(),
            ))),
        };

        let metrics = StoryMetrics::get();
        match &result {
            Ok(generated) => {
                metrics.record_request("groq", &self.model, started.elapsed().as_secs_f64());
                if let Some(tokens) = generated.total_tokens {
                    metrics.record_tokens(&self.model, tokens);
                }
            }
            Err(e) => metrics.record_failure("groq", &self.model, &e.kind),
        }

        result
    }

    fn provider_name(&self) -> &'static str {
        "groq"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
