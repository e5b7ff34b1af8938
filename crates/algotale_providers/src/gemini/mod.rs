//! Google Gemini generateContent integration.

mod driver;
mod dto;

pub use driver::GeminiDriver;
pub use dto::{
    GeminiCandidate, GeminiContent, GeminiPart, GeminiRequest, GeminiResponse, GenerationConfig,
    PromptFeedback, SafetySetting,
};
