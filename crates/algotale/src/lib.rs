//! Algotale - AI-generated stories that teach data structures and algorithms.
//!
//! Algotale turns a `(topic, level, theme)` tuple into an educational
//! narrative by trying generative-text providers in a fixed priority order
//! (Groq, then Gemini, then HuggingFace, then a Gradio Space) and falling
//! back deterministically to bundled content when every provider fails.
//! Generation is total: callers always receive a story, at worst a
//! clearly-labeled offline one.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use algotale::{ProviderCredentials, StoryPreferences, Topic, generate_story};
//!
//! #[tokio::main]
//! async fn main() {
//!     let credentials = ProviderCredentials::from_env();
//!     let result = generate_story(
//!         &credentials,
//!         Topic::Stacks,
//!         StoryPreferences::default(),
//!     )
//!     .await;
//!
//!     println!("{}\n\n[by {}]", result.story, result.provenance);
//! }
//! ```
//!
//! # Architecture
//!
//! Algotale is organized as a workspace with focused crates:
//!
//! - `algotale_core` - Core data types (Topic, StoryResult, etc.)
//! - `algotale_interface` - StoryDriver trait definition
//! - `algotale_error` - Error types
//! - `algotale_providers` - Provider driver implementations
//! - `algotale_story` - Prompt composition, sanitization, fallback
//!   content, and the orchestrator
//!
//! This crate (`algotale`) re-exports everything for convenience and ships
//! the `algotale` CLI binary.

// Re-export the workspace crates
pub use algotale_core::*;
pub use algotale_error::*;
pub use algotale_interface::*;
pub use algotale_providers::*;
pub use algotale_story::*;

use std::time::Duration;

/// Build the provider stack for the given credentials, in priority order:
/// Groq, Gemini, HuggingFace, Gradio.
///
/// A provider whose credential is absent is not registered at all, so it
/// is never invoked and costs nothing when the loop runs. The Gradio Space
/// authenticates with the HuggingFace token.
pub fn orchestrator_from_credentials(credentials: &ProviderCredentials) -> StoryOrchestrator {
    let mut orchestrator = StoryOrchestrator::new();

    if let Some(key) = credentials.groq_api_key() {
        orchestrator = orchestrator.register(
            Box::new(GroqDriver::new(key)),
            InvokeOptions::default().with_timeout(Duration::from_secs(25)),
        );
    }

    if let Some(key) = credentials.gemini_api_key() {
        orchestrator = orchestrator.register(
            Box::new(GeminiDriver::new(key)),
            InvokeOptions::default().with_timeout(Duration::from_secs(30)),
        );
    }

    if let Some(token) = credentials.hf_api_token() {
        orchestrator = orchestrator.register(
            Box::new(HuggingFaceDriver::new(token)),
            InvokeOptions::default()
                .with_timeout(Duration::from_secs(45))
                .with_max_tokens(1200),
        );
        orchestrator = orchestrator.register(
            Box::new(GradioDriver::new(token)),
            InvokeOptions::default().with_timeout(Duration::from_secs(30)),
        );
    }

    orchestrator
}

/// Generate a story using providers wired from the given credentials.
///
/// The sole entry point the rest of an application needs; see
/// [`StoryOrchestrator::generate`] for the contract.
pub async fn generate_story(
    credentials: &ProviderCredentials,
    topic: Topic,
    preferences: StoryPreferences,
) -> StoryResult {
    orchestrator_from_credentials(credentials)
        .generate(topic, preferences)
        .await
}
