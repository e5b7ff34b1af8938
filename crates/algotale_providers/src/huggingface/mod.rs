//! HuggingFace Inference Providers API integration.

mod driver;
mod dto;

pub use driver::HuggingFaceDriver;
pub use dto::{HuggingFaceParameters, HuggingFaceRequest};
