//! Error types for the rootfind_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Why the root finder could not produce a root.
///
/// Both kinds are recoverable: the caller reports them and moves on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RootError {
    /// Input lies outside `[1, bound]`
    #[error("{number} is outside the valid range 1..={bound}")]
    OutOfBounds { number: i64, bound: i64 },

    /// Input is in range but has no exact integer root
    #[error("{number} has no integer square root")]
    NoRootFound { number: i64 },
}

/// Core error type for rootfind_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Root finder failure
    #[error(transparent)]
    Root(#[from] RootError),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_error_converts_into_error() {
        let err: Error = RootError::NoRootFound { number: 2 }.into();
        assert!(matches!(
            err,
            Error::Root(RootError::NoRootFound { number: 2 })
        ));
        assert_eq!(err.to_string(), "2 has no integer square root");
    }

    #[test]
    fn test_out_of_bounds_message_names_range() {
        let err = RootError::OutOfBounds {
            number: 57600,
            bound: 10000,
        };
        assert_eq!(
            err.to_string(),
            "57600 is outside the valid range 1..=10000"
        );
    }
}
