//! Generative-text provider integrations for Algotale.
//!
//! This crate provides driver implementations for the story-generation
//! backends, tried by the orchestrator in priority order:
//!
//! - **Groq** - OpenAI-compatible chat completions (fastest)
//! - **Gemini** (Google) - generateContent with permissive safety settings
//! - **HuggingFace** - hosted serverless inference
//! - **Gradio** - submit/poll job protocol against a hosted Space
//!
//! Every driver implements [`StoryDriver`](algotale_interface::StoryDriver):
//! one outbound exchange per invocation, a hard timeout from the supplied
//! options, and no internal retries.
//!
//! # Example
//!
//! ```no_run
//! use algotale_core::InvokeOptions;
//! use algotale_interface::StoryDriver;
//! use algotale_providers::GroqDriver;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let driver = GroqDriver::new(std::env::var("GROQ_API_KEY")?);
//! let text = driver
//!     .invoke("Tell a story about stacks", &InvokeOptions::default())
//!     .await?;
//! println!("{}", text.text);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;
mod gradio;
mod groq;
mod huggingface;
mod metrics;

pub use gemini::GeminiDriver;
pub use gradio::GradioDriver;
pub use groq::GroqDriver;
pub use huggingface::HuggingFaceDriver;
pub use metrics::{StoryMetrics, classify_failure};
