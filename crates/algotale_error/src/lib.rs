//! Error types for the Algotale library.
//!
//! This crate provides the foundation error types used throughout the Algotale
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use algotale_error::{ProviderError, ProviderErrorKind, ProviderResult};
//!
//! fn fetch_story() -> ProviderResult<String> {
//!     Err(ProviderError::new(ProviderErrorKind::Transport(
//!         "connection refused".to_string(),
//!     )))?
//! }
//!
//! match fetch_story() {
//!     Ok(text) => println!("Got: {}", text),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod provider;

pub use builder::{BuilderError, BuilderErrorKind};
pub use config::ConfigError;
pub use error::{AlgotaleError, AlgotaleErrorKind, AlgotaleResult};
pub use provider::{ProviderError, ProviderErrorKind, ProviderResult};
