//! Story result types.

use crate::Topic;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw text reduced from a provider response.
///
/// Providers differ in what metadata they report; token usage is carried
/// when the backend returns it (Groq does, the others mostly do not).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedText {
    /// The generated narrative text, unsanitized
    pub text: String,
    /// Total tokens consumed, when the provider reports usage
    pub total_tokens: Option<u64>,
}

impl GeneratedText {
    /// Wrap plain text with no usage metadata.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            total_tokens: None,
        }
    }

    /// Wrap text with reported token usage.
    pub fn with_tokens(text: impl Into<String>, total_tokens: u64) -> Self {
        Self {
            text: text.into(),
            total_tokens: Some(total_tokens),
        }
    }
}

/// Which source actually produced a story.
///
/// Exactly one provenance value is recorded per result: the provider that
/// won the priority race, or the fallback library when every provider
/// failed.
///
/// # Examples
///
/// ```
/// use algotale_core::Provenance;
///
/// let from_groq = Provenance::Provider("groq".to_string());
/// assert!(!from_groq.is_fallback());
/// assert_eq!(format!("{}", Provenance::Fallback), "fallback");
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(tag = "source", content = "provider", rename_all = "lowercase")]
pub enum Provenance {
    /// Generated live by the named provider
    #[display("{}", _0)]
    Provider(String),
    /// Served from the bundled fallback library
    #[display("fallback")]
    Fallback,
}

impl Provenance {
    /// True when the story came from the offline fallback library.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback)
    }
}

/// The finished story handed back to the caller.
///
/// Produced exactly once per orchestration call; the orchestrator retains
/// no reference after returning it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryResult {
    /// Sanitized narrative text
    pub story: String,
    /// Illustrative code listing for the topic
    pub code: String,
    /// Topic the story teaches
    pub topic: Topic,
    /// Which provider (or the fallback library) produced the text
    pub provenance: Provenance,
    /// Model identifier, or `"built-in"` for fallback content
    pub model: String,
    /// Total tokens consumed, when reported by the winning provider
    pub total_tokens: Option<u64>,
    /// When the result was produced
    pub generated_at: DateTime<Utc>,
}

impl StoryResult {
    /// True when the caller should surface a "using offline content"
    /// advisory.
    pub fn degraded(&self) -> bool {
        self.provenance.is_fallback()
    }
}
