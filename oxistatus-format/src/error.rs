//! Error types for document parsing.

use std::io;
use thiserror::Error;

/// Result type for document parsing.
pub type Result<T> = std::result::Result<T, FormatError>;

/// Errors raised while turning a serialized document into a [`StatusList`].
///
/// [`StatusList`]: oxistatus_core::StatusList
#[derive(Debug, Error)]
pub enum FormatError {
    /// Malformed JSON, or a JSON member of the wrong type.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed CBOR.
    #[error("CBOR error: {message}")]
    Cbor {
        /// Decoder message.
        message: String,
    },

    /// The `lst` member is not valid base64url.
    #[error("Invalid base64url in lst: {0}")]
    Base64(#[from] base64::DecodeError),

    /// A required member is absent.
    #[error("Missing field: {field}")]
    MissingField {
        /// Member name.
        field: &'static str,
    },

    /// A member is present but holds the wrong kind of value.
    #[error("Invalid field {field}: {message}")]
    InvalidField {
        /// Member name.
        field: &'static str,
        /// What was wrong with it.
        message: String,
    },

    /// The input is neither a JSON object nor a CBOR map.
    #[error("Unknown document format")]
    UnknownFormat,

    /// Reading the document failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl FormatError {
    /// Create a CBOR error.
    pub fn cbor(message: impl Into<String>) -> Self {
        Self::Cbor {
            message: message.into(),
        }
    }

    /// Create a missing-field error.
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Create an invalid-field error.
    pub fn invalid_field(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            message: message.into(),
        }
    }
}

impl<T: std::fmt::Debug> From<ciborium::de::Error<T>> for FormatError {
    fn from(err: ciborium::de::Error<T>) -> Self {
        Self::cbor(format!("{err:?}"))
    }
}
