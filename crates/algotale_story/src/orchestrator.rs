//! Story orchestration: the provider priority loop and fallback.

use crate::{compose, fallback, sanitize};
use algotale_core::{
    InvokeOptions, Provenance, StoryPreferences, StoryRequest, StoryResult, Topic,
};
use algotale_interface::StoryDriver;
use chrono::Utc;
use tracing::{debug, info, instrument, warn};

/// Default acceptance threshold: provider output shorter than this many
/// characters after sanitization counts as a failure.
pub const DEFAULT_MIN_STORY_CHARS: usize = 100;

struct ProviderSlot {
    driver: Box<dyn StoryDriver>,
    options: InvokeOptions,
}

/// Iterates providers in priority order and falls back to bundled content.
///
/// Providers are attempted strictly in registration order; the first
/// acceptable result wins and later providers are never consulted, even if
/// one of them would respond faster. Each attempt is awaited fully (success
/// or failure) before the next begins - ordered fallback, not fastest-wins.
///
/// [`generate`](Self::generate) is total: every per-provider failure is
/// recorded and swallowed, and exhaustion yields the topic's fallback entry
/// rather than an error. Calls share no mutable state, so any number of
/// `generate` futures may run concurrently; discarding stale results is the
/// caller's concern.
pub struct StoryOrchestrator {
    providers: Vec<ProviderSlot>,
    min_story_chars: usize,
}

impl StoryOrchestrator {
    /// Create an orchestrator with no providers registered.
    ///
    /// Useful on its own for fully offline operation: with zero providers,
    /// every call serves fallback content.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
            min_story_chars: DEFAULT_MIN_STORY_CHARS,
        }
    }

    /// Override the acceptance threshold.
    pub fn with_min_story_chars(mut self, min_story_chars: usize) -> Self {
        self.min_story_chars = min_story_chars;
        self
    }

    /// Register a provider at the end of the priority order.
    pub fn register(mut self, driver: Box<dyn StoryDriver>, options: InvokeOptions) -> Self {
        debug!(
            provider = driver.provider_name(),
            rank = self.providers.len(),
            "Registered provider"
        );
        self.providers.push(ProviderSlot { driver, options });
        self
    }

    /// Number of registered providers.
    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Generate a story with a fresh uniqueness seed.
    ///
    /// Never fails: the worst case is clearly-labeled fallback content.
    pub async fn generate(&self, topic: Topic, preferences: StoryPreferences) -> StoryResult {
        self.generate_seeded(topic, preferences, rand::random::<f64>())
            .await
    }

    /// Generate a story with an explicit uniqueness seed.
    #[instrument(skip(self), fields(topic = %topic, providers = self.providers.len()))]
    pub async fn generate_seeded(
        &self,
        topic: Topic,
        preferences: StoryPreferences,
        seed: f64,
    ) -> StoryResult {
        let request = StoryRequest::new(topic, preferences, seed);
        let prompt = compose::compose_prompt(
            request.topic,
            request.preferences.level,
            request.preferences.theme,
            request.seed,
        );

        for (rank, slot) in self.providers.iter().enumerate() {
            let provider = slot.driver.provider_name();
            debug!(rank, provider, "Trying provider");

            match slot.driver.invoke(&prompt, &slot.options).await {
                Ok(generated) => {
                    let story = sanitize::clean_response(&generated.text, &prompt);
                    let len = story.chars().count();
                    if len < self.min_story_chars {
                        warn!(
                            provider,
                            len,
                            min = self.min_story_chars,
                            "Sanitized story below acceptance threshold"
                        );
                        continue;
                    }

                    info!(provider, len, "Story generated");
                    return StoryResult {
                        story,
                        code: fallback::code_template(topic).to_string(),
                        topic,
                        provenance: Provenance::Provider(provider.to_string()),
                        model: slot.driver.model_name().to_string(),
                        total_tokens: generated.total_tokens,
                        generated_at: Utc::now(),
                    };
                }
                Err(e) if e.kind.is_skip() => {
                    debug!(provider, "Provider not configured, skipping");
                }
                Err(e) => {
                    warn!(provider, error = %e, "Provider attempt failed");
                }
            }
        }

        info!(topic = %topic, "All providers exhausted, serving fallback content");

        let entry = fallback::entry(topic);
        StoryResult {
            story: entry.story().to_string(),
            code: entry.code().to_string(),
            topic,
            provenance: Provenance::Fallback,
            model: "built-in".to_string(),
            total_tokens: None,
            generated_at: Utc::now(),
        }
    }
}

impl Default for StoryOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}
