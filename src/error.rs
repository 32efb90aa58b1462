//! Error types for the underscore library.

use thiserror::Error;

/// Result type alias for fallible underscore operations
pub type Result<T> = std::result::Result<T, UnderscoreError>;

/// Main error type for the library
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnderscoreError {
    #[error("Reduce of empty array with no initial value")]
    EmptyReduce,

    #[error("Unequal lengths: {keys} keys but {values} values")]
    UnequalLengths { keys: usize, values: usize },

    #[error("No runtime: {message}")]
    NoRuntime { message: String },

    #[error("Invalid options: {message}")]
    InvalidOptions { message: String },
}

impl UnderscoreError {
    pub fn unequal_lengths(keys: usize, values: usize) -> Self {
        Self::UnequalLengths { keys, values }
    }

    pub fn no_runtime(msg: impl Into<String>) -> Self {
        Self::NoRuntime {
            message: msg.into(),
        }
    }

    pub fn invalid_options(msg: impl Into<String>) -> Self {
        Self::InvalidOptions {
            message: msg.into(),
        }
    }
}

impl From<serde_json::Error> for UnderscoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::invalid_options(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_reduce_message() {
        assert_eq!(
            UnderscoreError::EmptyReduce.to_string(),
            "Reduce of empty array with no initial value"
        );
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: UnderscoreError = err.into();
        assert!(matches!(err, UnderscoreError::InvalidOptions { .. }));
    }
}
