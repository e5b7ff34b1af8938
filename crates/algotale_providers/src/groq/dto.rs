//! Groq chat-completions data transfer objects.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Groq message role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroqRole {
    /// System message
    System,
    /// User message
    User,
    /// Assistant message
    Assistant,
}

/// Groq message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct GroqMessage {
    /// Message role
    role: GroqRole,
    /// Message content
    content: String,
}

impl GroqMessage {
    /// Create a message with the given role and content.
    pub fn new(role: GroqRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Groq chat-completions request body.
#[derive(Debug, Clone, Serialize, Getters)]
pub struct GroqRequest {
    /// Model identifier
    model: String,
    /// Conversation messages (system instruction + user prompt)
    messages: Vec<GroqMessage>,
    /// Sampling temperature
    temperature: f32,
    /// Output length cap
    max_tokens: u32,
    /// Nucleus sampling parameter
    top_p: f32,
    /// Whether to stream the response
    stream: bool,
}

impl GroqRequest {
    /// Build a non-streaming request from a system instruction and user prompt.
    pub fn new(
        model: impl Into<String>,
        system: impl Into<String>,
        user: impl Into<String>,
        temperature: f32,
        max_tokens: u32,
        top_p: f32,
    ) -> Self {
        Self {
            model: model.into(),
            messages: vec![
                GroqMessage::new(GroqRole::System, system),
                GroqMessage::new(GroqRole::User, user),
            ],
            temperature,
            max_tokens,
            top_p,
            stream: false,
        }
    }
}

/// The assistant message inside a completion choice.
#[derive(Debug, Clone, Deserialize, Getters)]
pub struct GroqResponseMessage {
    /// Generated text, absent when the model returned nothing
    #[serde(default)]
    content: Option<String>,
}

/// One completion choice.
#[derive(Debug, Clone, Deserialize, Getters)]
pub struct GroqChoice {
    /// The generated message
    message: GroqResponseMessage,
}

/// Token usage statistics from Groq.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Getters)]
pub struct GroqUsage {
    /// Input tokens consumed
    #[serde(default)]
    prompt_tokens: u64,
    /// Output tokens generated
    #[serde(default)]
    completion_tokens: u64,
    /// Total tokens consumed
    #[serde(default)]
    total_tokens: u64,
}

/// Groq chat-completions response body.
#[derive(Debug, Clone, Deserialize, Getters)]
pub struct GroqResponse {
    /// Completion choices (first is used)
    #[serde(default)]
    choices: Vec<GroqChoice>,
    /// Token usage, when reported
    #[serde(default)]
    usage: Option<GroqUsage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_openai_shape() {
        let req = GroqRequest::new("llama-3.1-8b-instant", "sys", "tell a story", 0.8, 1500, 0.9);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["model"], "llama-3.1-8b-instant");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "tell a story");
        assert_eq!(json["stream"], false);
    }

    #[test]
    fn response_parses_with_usage() {
        let body = r#"{
            "choices": [{"message": {"role": "assistant", "content": "Once upon a time"}}],
            "usage": {"prompt_tokens": 120, "completion_tokens": 300, "total_tokens": 420}
        }"#;
        let parsed: GroqResponse = serde_json::from_str(body).unwrap();
        let choice = parsed.choices().first().unwrap();
        assert_eq!(
            choice.message().content().as_deref(),
            Some("Once upon a time")
        );
        assert_eq!(*parsed.usage().as_ref().unwrap().total_tokens(), 420);
    }
}
