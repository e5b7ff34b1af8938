//! Core data types for the Algotale story generation library.
//!
//! This crate provides the foundation data types used across all Algotale
//! interfaces: the closed topic set, learner preferences, generation
//! requests and constraints, and the story result handed back to callers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod options;
mod preferences;
mod request;
mod story;
mod topic;

pub use options::{InvokeOptions, InvokeOptionsBuilder};
pub use preferences::{Level, StoryPreferences, Theme};
pub use request::StoryRequest;
pub use story::{GeneratedText, Provenance, StoryResult};
pub use topic::Topic;
