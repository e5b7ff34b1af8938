//! Groq LPU chat-completions integration.

mod driver;
mod dto;

pub use driver::GroqDriver;
pub use dto::{
    GroqChoice, GroqMessage, GroqRequest, GroqResponse, GroqResponseMessage, GroqRole, GroqUsage,
};
