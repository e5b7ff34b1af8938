//! Story orchestration engine for Algotale.
//!
//! This crate turns a `(topic, level, theme)` tuple into narrative text by
//! trying generative-text providers in a fixed priority order and falling
//! back deterministically to bundled content when every provider fails.
//!
//! The pieces:
//!
//! - [`compose_prompt`] - builds the provider-agnostic instruction text
//! - [`StoryOrchestrator`] - the provider priority loop
//! - [`clean_response`] - strips prompt echoes and normalizes paragraphs
//! - [`fallback`] - the bundled offline story and code library
//! - [`ProviderCredentials`] - read-once startup configuration
//!
//! # Example
//!
//! ```rust,ignore
//! use algotale_core::{StoryPreferences, Topic};
//! use algotale_story::StoryOrchestrator;
//!
//! # async fn example() {
//! let orchestrator = StoryOrchestrator::new()
//!     .register(Box::new(my_driver), Default::default());
//!
//! let result = orchestrator
//!     .generate(Topic::Stacks, StoryPreferences::default())
//!     .await;
//! println!("{} (by {})", result.story, result.provenance);
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod compose;
mod credentials;
pub mod fallback;
mod orchestrator;
mod sanitize;

pub use compose::compose_prompt;
pub use credentials::ProviderCredentials;
pub use orchestrator::{DEFAULT_MIN_STORY_CHARS, StoryOrchestrator};
pub use sanitize::clean_response;
