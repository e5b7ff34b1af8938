//! Generation constraints handed to provider drivers.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Constraints for a single provider invocation.
///
/// The orchestrator registers each provider with its own options; drivers
/// read the hard timeout and the sampling parameters from here rather than
/// hard-coding them.
///
/// # Examples
///
/// ```
/// use algotale_core::InvokeOptions;
/// use std::time::Duration;
///
/// let opts = InvokeOptions::default()
///     .with_timeout(Duration::from_secs(25))
///     .with_max_tokens(1200);
/// assert_eq!(*opts.timeout(), Duration::from_secs(25));
/// assert_eq!(*opts.temperature(), 0.8);
/// ```
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters, derive_setters::Setters,
)]
#[builder(setter(into))]
#[setters(prefix = "with_")]
pub struct InvokeOptions {
    /// Hard wall-clock limit for the whole invocation
    #[builder(default = "Duration::from_secs(30)")]
    timeout: Duration,
    /// Sampling temperature
    #[builder(default = "0.8")]
    temperature: f32,
    /// Output length cap in tokens
    #[builder(default = "1500")]
    max_tokens: u32,
    /// Nucleus sampling parameter
    #[builder(default = "0.9")]
    top_p: f32,
    /// Repetition penalty, for providers that accept one
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    repetition_penalty: Option<f32>,
    /// Minimum acceptable response length in characters
    #[builder(default = "100")]
    min_chars: usize,
}

impl InvokeOptions {
    /// Creates a new builder for `InvokeOptions`.
    pub fn builder() -> InvokeOptionsBuilder {
        InvokeOptionsBuilder::default()
    }
}

impl Default for InvokeOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            temperature: 0.8,
            max_tokens: 1500,
            top_p: 0.9,
            repetition_penalty: None,
            min_chars: 100,
        }
    }
}
