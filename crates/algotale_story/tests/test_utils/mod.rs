//! Shared mock driver for orchestrator tests.

use algotale_core::{GeneratedText, InvokeOptions};
use algotale_error::{ProviderError, ProviderErrorKind, ProviderResult};
use algotale_interface::StoryDriver;
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// A scripted response for one invocation.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return this text
    Success(String),
    /// Fail with this kind
    Error(ProviderErrorKind),
}

struct Inner {
    responses: Mutex<Vec<MockResponse>>,
    calls: AtomicUsize,
}

/// Mock driver with a scripted response sequence and call counting.
///
/// Clones share state, so a test can keep one handle for assertions while
/// boxing another into the orchestrator. When the scripted sequence runs
/// out, the last response repeats.
#[derive(Clone)]
pub struct MockDriver {
    name: &'static str,
    model: &'static str,
    inner: Arc<Inner>,
}

impl MockDriver {
    /// A driver that always succeeds with `text`.
    pub fn succeeding(name: &'static str, text: impl Into<String>) -> Self {
        Self::with_sequence(name, vec![MockResponse::Success(text.into())])
    }

    /// A driver that always fails with `kind`.
    pub fn failing(name: &'static str, kind: ProviderErrorKind) -> Self {
        Self::with_sequence(name, vec![MockResponse::Error(kind)])
    }

    /// A driver that plays back `responses` in order.
    pub fn with_sequence(name: &'static str, responses: Vec<MockResponse>) -> Self {
        Self {
            name,
            model: "mock-model",
            inner: Arc::new(Inner {
                responses: Mutex::new(responses),
                calls: AtomicUsize::new(0),
            }),
        }
    }

    /// Number of invocations so far.
    pub fn call_count(&self) -> usize {
        self.inner.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StoryDriver for MockDriver {
    async fn invoke(&self, _prompt: &str, _opts: &InvokeOptions) -> ProviderResult<GeneratedText> {
        let call = self.inner.calls.fetch_add(1, Ordering::SeqCst);

        let responses = self.inner.responses.lock().unwrap();
        let response = responses
            .get(call)
            .or_else(|| responses.last())
            .cloned()
            .unwrap_or(MockResponse::Error(ProviderErrorKind::Transport(
                "no scripted response".to_string(),
            )));
        drop(responses);

        match response {
            MockResponse::Success(text) => Ok(GeneratedText::new(text)),
            MockResponse::Error(kind) => Err(ProviderError::new(kind)),
        }
    }

    fn provider_name(&self) -> &'static str {
        self.name
    }

    fn model_name(&self) -> &str {
        self.model
    }
}

/// A story comfortably above the default acceptance threshold.
pub fn long_story() -> String {
    "Once upon a time, a young engineer met a stack of plates in a busy kitchen \
     and learned that the last plate placed is always the first one taken away. \
     The lesson stuck forever."
        .to_string()
}
