//! Gemini generateContent data transfer objects.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A single text part inside a content block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GeminiPart {
    /// Text payload
    #[serde(default)]
    text: String,
}

impl GeminiPart {
    /// Create a text part.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A content block: an ordered list of parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GeminiContent {
    /// Ordered parts of the content
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

impl GeminiContent {
    /// Create a content block from a single text part.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![GeminiPart::new(text)],
        }
    }

    /// Concatenate all text parts.
    pub fn joined_text(&self) -> String {
        self.parts
            .iter()
            .map(|p| p.text().as_str())
            .collect::<Vec<_>>()
            .join("")
    }
}

/// A safety-filter setting for one harm category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct SafetySetting {
    /// Harm category identifier
    category: &'static str,
    /// Blocking threshold
    threshold: &'static str,
}

impl SafetySetting {
    /// All four harm categories set to `BLOCK_NONE`.
    ///
    /// Refusals still surface through `promptFeedback.blockReason` and are
    /// mapped to `ContentRejected`.
    pub fn allow_all() -> Vec<Self> {
        [
            "HARM_CATEGORY_HARASSMENT",
            "HARM_CATEGORY_HATE_SPEECH",
            "HARM_CATEGORY_SEXUALLY_EXPLICIT",
            "HARM_CATEGORY_DANGEROUS_CONTENT",
        ]
        .into_iter()
        .map(|category| Self {
            category,
            threshold: "BLOCK_NONE",
        })
        .collect()
    }
}

/// Generation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Sampling temperature
    temperature: f32,
    /// Nucleus sampling parameter
    top_p: f32,
    /// Output length cap in tokens
    max_output_tokens: u32,
}

impl GenerationConfig {
    /// Create a generation config.
    pub fn new(temperature: f32, top_p: f32, max_output_tokens: u32) -> Self {
        Self {
            temperature,
            top_p,
            max_output_tokens,
        }
    }
}

/// Gemini generateContent request body.
#[derive(Debug, Clone, Serialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    /// Conversation contents (single user turn for story generation)
    contents: Vec<GeminiContent>,
    /// Safety-filter configuration
    safety_settings: Vec<SafetySetting>,
    /// Generation parameters
    generation_config: GenerationConfig,
}

impl GeminiRequest {
    /// Build a single-turn request with all safety categories allowed.
    pub fn new(prompt: impl Into<String>, config: GenerationConfig) -> Self {
        Self {
            contents: vec![GeminiContent::from_text(prompt)],
            safety_settings: SafetySetting::allow_all(),
            generation_config: config,
        }
    }
}

/// One response candidate.
#[derive(Debug, Clone, Deserialize, Getters)]
pub struct GeminiCandidate {
    /// Generated content, absent when the candidate was filtered
    #[serde(default)]
    content: Option<GeminiContent>,
}

/// Prompt-level feedback; carries a block reason instead of candidates
/// when the prompt itself was refused.
#[derive(Debug, Clone, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    /// Why the prompt was blocked, when it was
    #[serde(default)]
    block_reason: Option<String>,
}

/// Gemini generateContent response body.
#[derive(Debug, Clone, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GeminiResponse {
    /// Response candidates (first is used)
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    /// Prompt feedback, present on refusals
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_camel_case() {
        let req = GeminiRequest::new("a story", GenerationConfig::new(0.8, 0.9, 1500));
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "a story");
        assert_eq!(json["safetySettings"][0]["threshold"], "BLOCK_NONE");
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 1500);
    }

    #[test]
    fn blocked_response_carries_reason() {
        let body = r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#;
        let parsed: GeminiResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.candidates().is_empty());
        assert_eq!(
            parsed
                .prompt_feedback()
                .as_ref()
                .and_then(|f| f.block_reason().as_deref()),
            Some("SAFETY")
        );
    }

    #[test]
    fn candidate_text_joins_parts() {
        let body = r#"{
            "candidates": [{"content": {"parts": [{"text": "Once "}, {"text": "upon"}]}}]
        }"#;
        let parsed: GeminiResponse = serde_json::from_str(body).unwrap();
        let content = parsed.candidates()[0].content().as_ref().unwrap();
        assert_eq!(content.joined_text(), "Once upon");
    }
}
