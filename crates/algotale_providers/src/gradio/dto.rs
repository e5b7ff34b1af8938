//! Gradio prediction API data transfer objects.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Body for initiating a prediction; Gradio expects the positional
/// arguments of the Space's `predict` function as an array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GradioCall {
    /// Positional arguments (a single prompt for story Spaces)
    data: Vec<String>,
}

impl GradioCall {
    /// Wrap a single prompt argument.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            data: vec![prompt.into()],
        }
    }
}

/// Acknowledgement of a submitted prediction job.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct GradioCallAck {
    /// Identifier used to poll for the result
    event_id: String,
}

/// Output payload carried by a completion event.
#[derive(Debug, Clone, PartialEq, Deserialize, Getters)]
pub struct GradioOutput {
    /// Positional outputs of the Space's `predict` function
    #[serde(default)]
    data: Vec<serde_json::Value>,
}

/// One server-sent event from the prediction stream.
///
/// `process_generating` events report progress; the terminal
/// `process_completed` event carries the output.
#[derive(Debug, Clone, PartialEq, Deserialize, Getters)]
pub struct GradioEvent {
    /// Event discriminator (`process_generating`, `process_completed`, ...)
    msg: String,
    /// Output payload, present on completion
    #[serde(default)]
    output: Option<GradioOutput>,
}

impl GradioEvent {
    /// True for the terminal completion event.
    pub fn is_completed(&self) -> bool {
        self.msg == "process_completed"
    }

    /// First output string of a completion event, when present.
    pub fn completed_text(&self) -> Option<&str> {
        if !self.is_completed() {
            return None;
        }
        self.output
            .as_ref()
            .and_then(|o| o.data().first())
            .and_then(|v| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_wraps_prompt_in_data_array() {
        let call = GradioCall::new("a story");
        let json = serde_json::to_value(&call).unwrap();
        assert_eq!(json["data"][0], "a story");
    }

    #[test]
    fn generating_event_has_no_text() {
        let event: GradioEvent =
            serde_json::from_str(r#"{"msg": "process_generating"}"#).unwrap();
        assert!(!event.is_completed());
        assert_eq!(event.completed_text(), None);
    }

    #[test]
    fn completed_event_yields_first_output() {
        let event: GradioEvent = serde_json::from_str(
            r#"{"msg": "process_completed", "output": {"data": ["Once upon a time"]}}"#,
        )
        .unwrap();
        assert!(event.is_completed());
        assert_eq!(event.completed_text(), Some("Once upon a time"));
    }
}
