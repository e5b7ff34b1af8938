//! Provider credentials, read once at startup.

use tracing::debug;

/// Read-only provider credentials.
///
/// Constructed once at process start and passed into the wiring layer;
/// drivers never read the environment at call time, so the orchestration
/// logic stays testable with injected fake credentials. A `None`
/// credential marks that provider unconfigured, and the wiring layer
/// skips it without error.
///
/// # Examples
///
/// ```
/// use algotale_story::ProviderCredentials;
///
/// let creds = ProviderCredentials::default().with_groq("gsk_test");
/// assert_eq!(creds.groq_api_key(), Some("gsk_test"));
/// assert_eq!(creds.gemini_api_key(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProviderCredentials {
    groq_api_key: Option<String>,
    gemini_api_key: Option<String>,
    hf_api_token: Option<String>,
}

impl ProviderCredentials {
    /// Read credentials from the environment.
    ///
    /// Reads `GROQ_API_KEY`, `GEMINI_API_KEY`, and `HF_API_TOKEN`. A
    /// missing or blank variable leaves that provider unconfigured; it is
    /// never an error.
    pub fn from_env() -> Self {
        let creds = Self {
            groq_api_key: non_empty_var("GROQ_API_KEY"),
            gemini_api_key: non_empty_var("GEMINI_API_KEY"),
            hf_api_token: non_empty_var("HF_API_TOKEN"),
        };

        debug!(
            groq = creds.groq_api_key.is_some(),
            gemini = creds.gemini_api_key.is_some(),
            huggingface = creds.hf_api_token.is_some(),
            "Loaded provider credentials"
        );

        creds
    }

    /// Groq API key, when configured.
    pub fn groq_api_key(&self) -> Option<&str> {
        self.groq_api_key.as_deref()
    }

    /// Gemini API key, when configured.
    pub fn gemini_api_key(&self) -> Option<&str> {
        self.gemini_api_key.as_deref()
    }

    /// HuggingFace token, when configured.
    ///
    /// Shared by the HuggingFace and Gradio providers.
    pub fn hf_api_token(&self) -> Option<&str> {
        self.hf_api_token.as_deref()
    }

    /// Set the Groq key (test wiring).
    pub fn with_groq(mut self, key: impl Into<String>) -> Self {
        self.groq_api_key = Some(key.into());
        self
    }

    /// Set the Gemini key (test wiring).
    pub fn with_gemini(mut self, key: impl Into<String>) -> Self {
        self.gemini_api_key = Some(key.into());
        self
    }

    /// Set the HuggingFace token (test wiring).
    pub fn with_hf_token(mut self, token: impl Into<String>) -> Self {
        self.hf_api_token = Some(token.into());
        self
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_nothing_configured() {
        let creds = ProviderCredentials::default();
        assert!(creds.groq_api_key().is_none());
        assert!(creds.gemini_api_key().is_none());
        assert!(creds.hf_api_token().is_none());
    }

    #[test]
    fn builder_style_injection() {
        let creds = ProviderCredentials::default()
            .with_gemini("g-key")
            .with_hf_token("hf-token");
        assert_eq!(creds.gemini_api_key(), Some("g-key"));
        assert_eq!(creds.hf_api_token(), Some("hf-token"));
        assert!(creds.groq_api_key().is_none());
    }
}
