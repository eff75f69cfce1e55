//! Shared error type across netatmo crates.

use thiserror::Error;

/// Coarse error classification (stable, used as a log field).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Configuration missing or invalid.
    Config,
    /// Upstream rejected the credentials.
    Auth,
    /// Network failure or non-success upstream status.
    Upstream,
    /// Upstream body could not be decoded.
    Decode,
    /// A measurement value was not numeric.
    Measurement,
    /// Internal server error.
    Internal,
}

impl ErrorKind {
    /// String representation used in structured logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Config => "CONFIG",
            ErrorKind::Auth => "AUTH",
            ErrorKind::Upstream => "UPSTREAM",
            ErrorKind::Decode => "DECODE",
            ErrorKind::Measurement => "MEASUREMENT",
            ErrorKind::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ExporterError>;

/// Unified error type used by core and gateway.
///
/// Only the `kind()` and the display string ever reach the logs; HTTP clients
/// see an opaque 500 regardless of the variant.
#[derive(Debug, Error)]
pub enum ExporterError {
    #[error("config: {0}")]
    Config(String),
    #[error("auth failed: {0}")]
    Auth(String),
    #[error("upstream: {0}")]
    Upstream(String),
    #[error("decode: {0}")]
    Decode(String),
    #[error("measurement {key}: {reason}")]
    Measurement { key: String, reason: String },
    #[error("internal: {0}")]
    Internal(String),
}

impl ExporterError {
    /// Map the error to its stable kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExporterError::Config(_) => ErrorKind::Config,
            ExporterError::Auth(_) => ErrorKind::Auth,
            ExporterError::Upstream(_) => ErrorKind::Upstream,
            ExporterError::Decode(_) => ErrorKind::Decode,
            ExporterError::Measurement { .. } => ErrorKind::Measurement,
            ExporterError::Internal(_) => ErrorKind::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_stable() {
        assert_eq!(ExporterError::Auth("x".into()).kind().as_str(), "AUTH");
        let e = ExporterError::Measurement {
            key: "temperature".into(),
            reason: "not a number".into(),
        };
        assert_eq!(e.kind(), ErrorKind::Measurement);
        assert_eq!(e.to_string(), "measurement temperature: not a number");
    }
}
