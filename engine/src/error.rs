use thiserror::Error;

/// Errors that can occur while operating the payload generation engine.
///
/// Rejection of a candidate fragment by the oracle is *not* represented here:
/// per the engine's contract that is an ordinary `None` return from
/// [`crate::assembler::PayloadEngine::generate`], not a typed error. This
/// enum only covers failures that indicate a structural problem (a bad rule
/// table, a misconfigured engine, a file that wouldn't parse).
#[derive(Error, Debug)]
pub enum EngineError {
    /// A rule table failed an internal consistency check.
    #[error("rule table invalid: {0}")]
    RuleTableInvalid(String),

    /// Recursion depth exceeded the configured limit.
    #[error("recursion limit exceeded (max depth {0})")]
    RecursionLimitExceeded(u32),

    /// Every outer wrapper pattern was rejected by the oracle.
    #[error("preparation failed: every outer wrapper was rejected")]
    PreparationFailed,

    /// Configuration or rule-table (de)serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error loading a configuration or rule-table override.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using [`EngineError`].
pub type Result<T> = std::result::Result<T, EngineError>;

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for EngineError {
    fn from(err: serde_yaml::Error) -> Self {
        EngineError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for EngineError {
    fn from(err: config::ConfigError) -> Self {
        EngineError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineError::RecursionLimitExceeded(32);
        assert_eq!(err.to_string(), "recursion limit exceeded (max depth 32)");
    }

    #[test]
    fn test_preparation_failed_display() {
        let err = EngineError::PreparationFailed;
        assert_eq!(
            err.to_string(),
            "preparation failed: every outer wrapper was rejected"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "rule table not found");
        let err: EngineError = io_err.into();
        assert!(matches!(err, EngineError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: EngineError = parse_err.into();
        assert!(matches!(err, EngineError::Serialization(_)));
    }
}
