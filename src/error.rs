//! Unified error types for the frameform engine.

use thiserror::Error;

/// Main engine error type
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("Input exhausted before the session finished")]
    InputExhausted,

    #[error("Handler error: {0}")]
    Handler(String),
}

impl EngineError {
    /// Create a terminal error from a string
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a handler error from a string
    pub fn handler(msg: impl Into<String>) -> Self {
        Self::Handler(msg.into())
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Result type alias for the engine
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineError::terminal("size query failed");
        assert_eq!(err.to_string(), "Terminal error: size query failed");

        let err: EngineError = ConfigError::Invalid("empty glyph".into()).into();
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid configuration: empty glyph"
        );
    }
}
