//! Gemini generateContent driver using reqwest.

use crate::gemini::dto::{GeminiRequest, GeminiResponse, GenerationConfig};
use crate::metrics::StoryMetrics;
use algotale_core::{GeneratedText, InvokeOptions};
use algotale_error::{ProviderError, ProviderErrorKind, ProviderResult};
use algotale_interface::StoryDriver;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Instant;
use tracing::{debug, error, instrument, warn};

const DEFAULT_MODEL: &str = "gemini-2.0-flash-lite";
const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Google Gemini generateContent driver.
///
/// Second in the orchestrator's priority order. Requests disable all
/// safety categories; a response carrying a block reason instead of
/// candidates is treated as `ContentRejected`.
#[derive(Debug, Clone)]
pub struct GeminiDriver {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiDriver {
    /// Creates a new Gemini driver with the default story model.
    ///
    /// An empty key produces a driver that fails fast with `NotConfigured`
    /// without touching the network.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_model(api_key, DEFAULT_MODEL)
    }

    /// Creates a new Gemini driver with an explicit model.
    pub fn with_model(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let model = model.into();
        debug!(model = %model, "Created Gemini driver");

        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model,
            base_url: BASE_URL.to_string(),
        }
    }

    async fn request(&self, prompt: &str, opts: &InvokeOptions) -> ProviderResult<GeneratedText> {
        let config =
            GenerationConfig::new(*opts.temperature(), *opts.top_p(), *opts.max_tokens());
        let body = GeminiRequest::new(prompt, config);
        let url = format!("{}/{}:generateContent", self.base_url, self.model);

        debug!(url = %url, prompt_len = prompt.len(), "Sending request to Gemini");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
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

        let parsed: GeminiResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse JSON");
            ProviderError::new(ProviderErrorKind::ResponseConversion(format!(
                "Failed to parse JSON: {}",
                e
            )))
        })?;

        if let Some(reason) = parsed
            .prompt_feedback()
            .as_ref()
            .and_then(|f| f.block_reason().clone())
        {
            warn!(reason = %reason, "Prompt blocked by Gemini");
            return Err(ProviderError::new(ProviderErrorKind::ContentRejected(
                reason,
            )));
        }

        let text = parsed
            .candidates()
            .first()
            .and_then(|c| c.content().as_ref())
            .map(|content| content.joined_text())
            .ok_or_else(|| {
                ProviderError::new(ProviderErrorKind::ResponseConversion(
                    "No candidate content in response".to_string(),
                ))
            })?;

        let len = text.chars().count();
        if len < *opts.min_chars() {
            return Err(ProviderError::new(ProviderErrorKind::EmptyOrShort {
                len,
                min: *opts.min_chars(),
            }));
        }

        debug!(response_len = len, "Received response from Gemini");

        Ok(GeneratedText::new(text))
    }
}

#[async_trait]
impl StoryDriver for GeminiDriver {
    #[instrument(skip(self, prompt), fields(provider = "gemini", model = %self.model))]
    async fn invoke(&self, prompt: &str, opts: &InvokeOptions) -> ProviderResult<GeneratedText> {
        if self.api_key.is_empty() {
            return Err(ProviderError::new(ProviderErrorKind::NotConfigured(
                "gemini".to_string(),
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
            Ok(_) => {
                metrics.record_request("gemini", &self.model, started.elapsed().as_secs_f64());
            }
            Err(e) => metrics.record_failure("gemini", &self.model, &e.kind),
        }

        result
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
