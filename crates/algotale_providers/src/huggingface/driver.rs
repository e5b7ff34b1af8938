//! HuggingFace Inference API driver using reqwest.

use crate::huggingface::dto::HuggingFaceRequest;
use crate::metrics::StoryMetrics;
use algotale_core::{GeneratedText, InvokeOptions};
use algotale_error::{ProviderError, ProviderErrorKind, ProviderResult};
use algotale_interface::StoryDriver;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Instant;
use tracing::{debug, error, instrument};

const DEFAULT_MODEL: &str = "mistralai/Mixtral-8x7B-Instruct-v0.1";

// Inference Providers router; the old api-inference.huggingface.co
// endpoint is deprecated.
const BASE_URL: &str = "https://router.huggingface.co/hf-inference/models";

/// HuggingFace serverless inference driver.
///
/// Third in the orchestrator's priority order: free, but slower and less
/// predictable than Groq or Gemini.
#[derive(Debug, Clone)]
pub struct HuggingFaceDriver {
    client: Client,
    api_token: String,
    model: String,
    base_url: String,
}

impl HuggingFaceDriver {
    /// Creates a new HuggingFace driver with the default story model.
    ///
    /// An empty token produces a driver that fails fast with `NotConfigured`
    /// without touching the network.
    pub fn new(api_token: impl Into<String>) -> Self {
        Self::with_model(api_token, DEFAULT_MODEL)
    }

    /// Creates a new HuggingFace driver with an explicit model.
    pub fn with_model(api_token: impl Into<String>, model: impl Into<String>) -> Self {
        let model = model.into();
        debug!(model = %model, "Created HuggingFace driver");

        Self {
            client: Client::new(),
            api_token: api_token.into(),
            model,
            base_url: BASE_URL.to_string(),
        }
    }

    async fn request(&self, prompt: &str, opts: &InvokeOptions) -> ProviderResult<GeneratedText> {
        let body = HuggingFaceRequest::new(
            prompt,
            *opts.max_tokens(),
            *opts.temperature(),
            *opts.top_p(),
            *opts.repetition_penalty(),
        );

        let url = format!("{}/{}", self.base_url, self.model);

        debug!(
            model = %self.model,
            url = %url,
            prompt_len = prompt.len(),
            "Sending request to HuggingFace"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_token)
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

        let response_text = response.text().await.map_err(|e| {
            error!(error = ?e, "Failed to read response");
            ProviderError::new(ProviderErrorKind::Transport(format!(
                "Failed to read response: {}",
                e
            )))
        })?;

        let response_json: serde_json::Value =
            serde_json::from_str(&response_text).map_err(|e| {
                error!(error = ?e, response = %response_text, "Failed to parse JSON");
                ProviderError::new(ProviderErrorKind::ResponseConversion(format!(
                    "Failed to parse JSON: {}",
                    e
                )))
            })?;

        // The API answers with [{"generated_text": ...}] for most models,
        // a bare object for some, and a plain string for a few legacy ones.
        let text = if let Some(array) = response_json.as_array() {
            array
                .first()
                .and_then(|v| v.get("generated_text"))
                .and_then(|v| v.as_str())
                .map(str::to_string)
        } else if let Some(text) = response_json.get("generated_text").and_then(|v| v.as_str()) {
            Some(text.to_string())
        } else {
            response_json.as_str().map(str::to_string)
        };

        let text = text.ok_or_else(|| {
            ProviderError::new(ProviderErrorKind::ResponseConversion(
                "Missing generated_text in response".to_string(),
            ))
        })?;

        let len = text.chars().count();
        if len < *opts.min_chars() {
            return Err(ProviderError::new(ProviderErrorKind::EmptyOrShort {
                len,
                min: *opts.min_chars(),
            }));
        }

        debug!(response_len = len, "Received response from HuggingFace");

        Ok(GeneratedText::new(text))
    }
}

#[async_trait]
impl StoryDriver for HuggingFaceDriver {
    #[instrument(skip(self, prompt), fields(provider = "huggingface", model = %self.model))]
    async fn invoke(&self, prompt: &str, opts: &InvokeOptions) -> ProviderResult<GeneratedText> {
        if self.api_token.is_empty() {
            return Err(ProviderError::new(ProviderErrorKind::NotConfigured(
                "huggingface".to_string(),
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
                metrics.record_request(
                    "huggingface",
                    &self.model,
                    started.elapsed().as_secs_f64(),
                );
            }
            Err(e) => metrics.record_failure("huggingface", &self.model, &e.kind),
        }

        result
    }

    fn provider_name(&self) -> &'static str {
        "huggingface"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
