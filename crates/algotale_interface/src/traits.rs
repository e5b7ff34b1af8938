//! Trait definitions for generative-text backends.

use algotale_core::{GeneratedText, InvokeOptions};
use algotale_error::ProviderResult;
use async_trait::async_trait;

/// Core trait that all generative-text backends implement.
///
/// A driver owns exactly one outbound network exchange per invocation
/// (submit-then-poll protocols count as one logical exchange) and applies
/// its own hard timeout from the supplied options. Retry and fallback
/// across providers belong to the orchestrator, never to a driver.
///
/// Drivers hold their credential explicitly, injected at construction.
/// A driver without a credential fails fast with
/// [`ProviderErrorKind::NotConfigured`](algotale_error::ProviderErrorKind::NotConfigured)
/// before touching the network.
#[async_trait]
pub trait StoryDriver: Send + Sync {
    /// Generate narrative text for a composed prompt.
    async fn invoke(&self, prompt: &str, opts: &InvokeOptions) -> ProviderResult<GeneratedText>;

    /// Provider name (e.g., "groq", "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "llama-3.1-8b-instant").
    fn model_name(&self) -> &str;
}
