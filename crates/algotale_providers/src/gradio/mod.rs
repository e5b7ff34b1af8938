//! Gradio Space submit/poll job integration.

mod driver;
mod dto;

pub use driver::GradioDriver;
pub use dto::{GradioCall, GradioCallAck, GradioEvent, GradioOutput};
