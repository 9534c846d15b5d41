//! Error types for toolbridge

use thiserror::Error;

/// Result type alias for toolbridge operations
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Main error type for toolbridge
///
/// Malformed or semantically inconsistent schemas are never an error:
/// the converters accept them and either ignore or pass through the odd
/// parts. Only two things can actually fail, and both fail synchronously.
#[derive(Error, Debug, Clone)]
pub enum BridgeError {
    /// A dynamic parameter value could not be serialized to JSON at all
    #[error("failed to serialize tool parameters: {0}")]
    SchemaSerialization(String),

    /// A tool call arguments string was not a valid JSON object
    #[error("invalid arguments for tool '{tool_name}': {message}")]
    ArgumentParse {
        tool_name: String,
        /// The offending arguments string, kept for diagnostics
        arguments: String,
        message: String,
    },
}

impl BridgeError {
    /// Create a new schema serialization error
    pub fn schema_serialization(message: impl Into<String>) -> Self {
        Self::SchemaSerialization(message.into())
    }

    /// Create a new argument parse error
    pub fn argument_parse(
        tool_name: impl Into<String>,
        arguments: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::ArgumentParse {
            tool_name: tool_name.into(),
            arguments: arguments.into(),
            message: message.into(),
        }
    }
}
