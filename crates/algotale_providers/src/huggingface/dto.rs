//! HuggingFace Inference API data transfer objects.

use derive_getters::Getters;
use serde::Serialize;

/// Generation parameters for a text-generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
pub struct HuggingFaceParameters {
    /// Maximum new tokens to generate
    max_new_tokens: u32,
    /// Sampling temperature
    temperature: f32,
    /// Nucleus sampling parameter
    top_p: f32,
    /// Enable sampling (as opposed to greedy decoding)
    do_sample: bool,
    /// Whether to echo the prompt in the output
    return_full_text: bool,
    /// Repetition penalty, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    repetition_penalty: Option<f32>,
}

/// HuggingFace text-generation request body.
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
pub struct HuggingFaceRequest {
    /// The prompt text
    inputs: String,
    /// Generation parameters
    parameters: HuggingFaceParameters,
}

impl HuggingFaceRequest {
    /// Build a sampling request that omits the prompt echo.
    pub fn new(
        inputs: impl Into<String>,
        max_new_tokens: u32,
        temperature: f32,
        top_p: f32,
        repetition_penalty: Option<f32>,
    ) -> Self {
        Self {
            inputs: inputs.into(),
            parameters: HuggingFaceParameters {
                max_new_tokens,
                temperature,
                top_p,
                do_sample: true,
                return_full_text: false,
                repetition_penalty,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_inference_shape() {
        let req = HuggingFaceRequest::new("a story", 1200, 0.8, 0.9, None);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["inputs"], "a story");
        assert_eq!(json["parameters"]["max_new_tokens"], 1200);
        assert_eq!(json["parameters"]["return_full_text"], false);
        assert!(json["parameters"].get("repetition_penalty").is_none());
    }

    #[test]
    fn repetition_penalty_serialized_when_set() {
        let req = HuggingFaceRequest::new("a story", 400, 0.85, 0.92, Some(1.5));
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["parameters"]["repetition_penalty"], 1.5);
    }
}
