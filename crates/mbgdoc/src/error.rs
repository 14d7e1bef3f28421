//! Error types for loading comment generator options.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for option loading.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while assembling [`CommentOptions`](crate::CommentOptions)
/// from files or the environment.
///
/// Comment emission itself never fails; these only surface from the loaders.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The options file does not exist.
    #[error("options file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Figment could not read or merge the configured sources.
    #[error("failed to load comment generator options: {0}")]
    Load(#[from] Box<figment::Error>),

    /// An option was present but is not a scalar value.
    #[error("invalid value for option '{key}'{}", hint.as_ref().map(|h| format!(" - {}", h)).unwrap_or_default())]
    InvalidValue {
        /// Option name.
        key: String,
        /// Extra context for the caller.
        hint: Option<String>,
    },
}

impl ConfigError {
    /// Create an InvalidValue error with a hint
    pub fn invalid_value(key: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            hint: Some(hint.into()),
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        Self::Load(Box::new(error))
    }
}
