//! Formatter error types

use thiserror::Error;

/// Failure reported by a sequence-number provider
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct SequenceError(pub String);

impl SequenceError {
    /// Create a new provider error from any message
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Cause of a failed format call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Sequence-number provider failed
    #[error("Sequence number request failed: {0}")]
    Upstream(#[from] SequenceError),

    /// A field the NewsML output requires is absent from the article
    #[error("Missing required field: {0}")]
    MissingRequiredField(&'static str),

    /// A required field is present but cannot be used
    #[error("Invalid field {field}: {reason}")]
    InvalidField {
        /// Article field name
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// XML writer failed while producing the document
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

/// Error returned by [`NewsMl12Formatter::format`](crate::NewsMl12Formatter::format)
///
/// Every failure inside a format call is wrapped into this single type so the
/// caller always knows which destination the failed document was meant for.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("NewsML 1.2 formatter failed for destination '{destination}': {source}")]
pub struct FormatterError {
    /// Name of the destination being formatted for
    pub destination: String,
    /// Underlying cause
    #[source]
    pub source: FormatError,
}

impl FormatterError {
    /// Wrap a cause with its destination context
    pub fn new(destination: impl Into<String>, source: FormatError) -> Self {
        Self {
            destination: destination.into(),
            source,
        }
    }

    /// The underlying cause
    pub fn kind(&self) -> &FormatError {
        &self.source
    }

    /// True if the call failed because a required article field was absent
    pub fn is_missing_field(&self) -> bool {
        matches!(self.source, FormatError::MissingRequiredField(_))
    }
}

/// Result type alias using FormatterError
pub type Result<T> = std::result::Result<T, FormatterError>;
