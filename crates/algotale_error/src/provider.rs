//! Provider attempt errors.

use std::time::Duration;

/// Provider-specific failure conditions for a single generation attempt.
///
/// Every variant means "this provider failed" to the orchestrator, which
/// advances to the next provider in priority order. The variants stay
/// distinct so logs and metrics can tell a timeout from a refusal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ProviderErrorKind {
    /// Credential absent. A skip signal, not a network failure.
    #[display("provider {} not configured", _0)]
    NotConfigured(String),

    /// Call exceeded its allotted wait.
    #[display("timed out after {}s", _0.as_secs())]
    Timeout(Duration),

    /// Network-level failure (connect, DNS, read).
    #[display("transport error: {}", _0)]
    Transport(String),

    /// Provider API returned a non-success status.
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or status text
        message: String,
    },

    /// Provider explicitly blocked or refused the prompt.
    #[display("content rejected: {}", _0)]
    ContentRejected(String),

    /// Response received but below the acceptance threshold.
    #[display("response too short: {} chars (minimum {})", len, min)]
    EmptyOrShort {
        /// Length of the received text
        len: usize,
        /// Configured acceptance threshold
        min: usize,
    },

    /// Response arrived but its schema could not be reduced to text.
    #[display("response conversion failed: {}", _0)]
    ResponseConversion(String),
}

impl ProviderErrorKind {
    /// True when the orchestrator should skip this provider without counting
    /// a network failure.
    pub fn is_skip(&self) -> bool {
        matches!(self, Self::NotConfigured(_))
    }
}

/// Provider error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Provider Error: {} at {}:{}", kind, file, line)]
pub struct ProviderError {
    /// The specific error kind
    pub kind: ProviderErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ProviderError {
    /// Create a new provider error at the current location.
    #[track_caller]
    pub fn new(kind: ProviderErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for provider invocations.
pub type ProviderResult<T> = Result<T, ProviderError>;
