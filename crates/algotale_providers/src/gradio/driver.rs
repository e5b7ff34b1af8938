//! Gradio Space driver using the two-phase call/poll prediction API.
//!
//! The exchange is `POST /call/predict` to submit the job, then
//! `GET /call/predict/{event_id}` which streams server-sent events until a
//! `process_completed` event carries the output. From the orchestrator's
//! perspective the whole exchange is one invocation under one timeout.

use crate::gradio::dto::{GradioCall, GradioCallAck, GradioEvent};
use crate::metrics::StoryMetrics;
use algotale_core::{GeneratedText, InvokeOptions};
use algotale_error::{ProviderError, ProviderErrorKind, ProviderResult};
use algotale_interface::StoryDriver;
use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::Client;
use std::time::Instant;
use tracing::{debug, error, instrument};

const DEFAULT_SPACE_URL: &str = "https://aaryan17-mistralai-mistral-7b-instruct-v0-2.hf.space";
const MODEL_NAME: &str = "mistralai/Mistral-7B-Instruct-v0.2";

/// Gradio Space prediction driver.
///
/// Last in the orchestrator's priority order; hosted Spaces sleep and
/// restart frequently, so this is a best-effort backend.
#[derive(Debug, Clone)]
pub struct GradioDriver {
    client: Client,
    auth_token: String,
    space_url: String,
    model: String,
}

impl GradioDriver {
    /// Creates a new Gradio driver against the default story Space.
    ///
    /// The token is the HuggingFace token; an empty token produces a driver
    /// that fails fast with `NotConfigured` without touching the network.
    pub fn new(auth_token: impl Into<String>) -> Self {
        Self::with_space(auth_token, DEFAULT_SPACE_URL)
    }

    /// Creates a new Gradio driver with an explicit Space URL.
    pub fn with_space(auth_token: impl Into<String>, space_url: impl Into<String>) -> Self {
        let space_url = space_url.into();
        debug!(space = %space_url, "Created Gradio driver");

        Self {
            client: Client::new(),
            auth_token: auth_token.into(),
            space_url,
            model: MODEL_NAME.to_string(),
        }
    }

    /// Submit the prediction job and return its event id.
    async fn submit(&self, prompt: &str) -> ProviderResult<String> {
        let url = format!("{}/call/predict", self.space_url);

        debug!(url = %url, "Initiating Gradio prediction");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.auth_token)
            .json(&GradioCall::new(prompt))
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                ProviderError::new(ProviderErrorKind::Transport(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(status = %status, error = %message, "Gradio call error");
            return Err(ProviderError::new(ProviderErrorKind::Api {
                status: status.as_u16(),
                message,
            }));
        }

        let ack: GradioCallAck = response.json().await.map_err(|e| {
            ProviderError::new(ProviderErrorKind::ResponseConversion(format!(
                "Failed to parse call acknowledgement: {}",
                e
            )))
        })?;

        debug!(event_id = %ack.event_id(), "Prediction initiated");
        Ok(ack.event_id().clone())
    }

    /// Read the event stream until the completion event arrives.
    async fn poll(&self, event_id: &str) -> ProviderResult<String> {
        let url = format!("{}/call/predict/{}", self.space_url, event_id);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.auth_token)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                ProviderError::new(ProviderErrorKind::Transport(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::new(ProviderErrorKind::Api {
                status: status.as_u16(),
                message: format!("Gradio status error: {}", status),
            }));
        }

        let mut stream = response.bytes_stream();
        let mut buffer = String::new();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| {
                ProviderError::new(ProviderErrorKind::Transport(format!(
                    "Event stream read failed: {}",
                    e
                )))
            })?;
            buffer.push_str(&String::from_utf8_lossy(&chunk));

            // SSE frames are newline-delimited; payload lines carry a
            // "data: " prefix. Anything unparseable is skipped.
            while let Some(pos) = buffer.find('\n') {
                let line: String = buffer.drain(..=pos).collect();
                let line = line.trim_end();

                let Some(payload) = line.strip_prefix("data: ") else {
                    continue;
                };
                let Ok(event) = serde_json::from_str::<GradioEvent>(payload) else {
                    continue;
                };

                if let Some(text) = event.completed_text() {
                    debug!("Received completion from Gradio");
                    return Ok(text.to_string());
                }
                debug!(msg = %event.msg(), "Gradio progress event");
            }
        }

        Err(ProviderError::new(ProviderErrorKind::ResponseConversion(
            "Event stream ended without a completion event".to_string(),
        )))
    }

    async fn request(&self, prompt: &str, opts: &InvokeOptions) -> ProviderResult<GeneratedText> {
        let event_id = self.submit(prompt).await?;
        let text = self.poll(&event_id).await?;

        let len = text.chars().count();
        if len < *opts.min_chars() {
            return Err(ProviderError::new(ProviderErrorKind::EmptyOrShort {
                len,
                min: *opts.min_chars(),
            }));
        }

        Ok(GeneratedText::new(text))
    }
}

#[async_trait]
impl StoryDriver for GradioDriver {
    #[instrument(skip(self, prompt), fields(provider = "gradio", model = %self.model))]
    async fn invoke(&self, prompt: &str, opts: &InvokeOptions) -> ProviderResult<GeneratedText> {
        if self.auth_token.is_empty() {
            return Err(ProviderError::new(ProviderErrorKind::NotConfigured(
                "gradio".to_string(),
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
                metrics.record_request("gradio", &self.model, started.elapsed().as_secs_f64());
            }
            Err(e) => metrics.record_failure("gradio", &self.model, &e.kind),
        }

        result
    }

    fn provider_name(&self) -> &'static str {
        "gradio"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
