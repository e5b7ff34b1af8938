//! Top-level error wrapper types.

use crate::{BuilderError, ConfigError, ProviderError};

/// Foundation error enum for the Algotale workspace.
///
/// # Examples
///
/// ```
/// use algotale_error::{AlgotaleError, ConfigError};
///
/// let config_err = ConfigError::new("credential file unreadable");
/// let err: AlgotaleError = config_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum AlgotaleErrorKind {
    /// Provider attempt error
    #[from(ProviderError)]
    Provider(ProviderError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
}

/// Algotale error with kind discrimination.
///
/// # Examples
///
/// ```
/// use algotale_error::{AlgotaleResult, ConfigError};
///
/// fn might_fail() -> AlgotaleResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Algotale Error: {}", _0)]
pub struct AlgotaleError(Box<AlgotaleErrorKind>);

impl AlgotaleError {
    /// Create a new error from a kind.
    pub fn new(kind: AlgotaleErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &AlgotaleErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to AlgotaleErrorKind
impl<T> From<T> for AlgotaleError
where
    T: Into<AlgotaleErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Algotale operations.
pub type AlgotaleResult<T> = std::result::Result<T, AlgotaleError>;
