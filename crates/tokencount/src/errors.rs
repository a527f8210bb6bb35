//! # Error Types

/// Errors from tokencount operations.
#[derive(Debug, thiserror::Error)]
pub enum TokencountError {
    /// No configuration is registered under the requested name.
    #[error("unknown encoding {0:?}")]
    UnknownEncoding(String),

    /// A vocabulary container was readable but held no usable payload.
    #[error("missing vocabulary payload: {0}")]
    MissingPayload(String),

    /// Rank value out of range for the target token type.
    #[error("token rank out of range")]
    TokenOutOfRange,

    /// Parse error (regex, JSON document, etc.)
    #[error("parse error: {0}")]
    Parse(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Error from an external component (resource loader, downloader).
    #[error("{0}")]
    External(String),
}

/// Result type for tokencount operations.
pub type Result<T> = core::result::Result<T, TokencountError>;
