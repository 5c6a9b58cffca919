//! Error types for marshal-bench operations

use std::fmt;

/// Result type alias for marshal-bench operations
pub type Result<T> = std::result::Result<T, Error>;

/// Which half of a round trip failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Record to bytes
    Marshal,
    /// Bytes to record
    Unmarshal,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Marshal => f.write_str("marshal"),
            Phase::Unmarshal => f.write_str("unmarshal"),
        }
    }
}

/// Main error type for marshal-bench operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// An encoder or decoder returned an error; always fatal for the run
    #[error("error {phase} {encoding}: {message}")]
    EncodingFailure {
        /// Encoding label
        encoding: String,
        /// Failing phase
        phase: Phase,
        /// Backend error description
        message: String,
    },

    /// Avro schema constant could not be parsed
    #[error("Invalid Avro schema: {0}")]
    Schema(String),

    /// Configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error while writing a report
    #[error("I/O error: {0}")]
    Io(String),
}

impl Error {
    /// Create a marshal-phase encoding failure
    pub fn marshal(encoding: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::EncodingFailure {
            encoding: encoding.into(),
            phase: Phase::Marshal,
            message: message.to_string(),
        }
    }

    /// Create an unmarshal-phase encoding failure
    pub fn unmarshal(encoding: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::EncodingFailure {
            encoding: encoding.into(),
            phase: Phase::Unmarshal,
            message: message.to_string(),
        }
    }

    /// Create a schema error
    pub fn schema(message: impl Into<String>) -> Self {
        Self::Schema(message.into())
    }

    /// Create a configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_failure_display() {
        let err = Error::unmarshal("avro binary", "truncated datum");
        assert_eq!(err.to_string(), "error unmarshal avro binary: truncated datum");
        assert!(matches!(
            err,
            Error::EncodingFailure {
                phase: Phase::Unmarshal,
                ..
            }
        ));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
