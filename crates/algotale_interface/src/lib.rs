//! Trait definitions for the Algotale story generation library.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::StoryDriver;
