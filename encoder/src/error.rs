//! Error types for encode operations.

use std::fmt;

/// Result type for encode operations.
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Errors that can occur while encoding a command packet.
///
/// Every variant is a client-input error: the core never retries and
/// never panics, and no bytes are produced once any of these is raised.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EncodeError {
    /// Catalog lookup or validation error.
    Catalog(catalog::CatalogError),

    /// Frame construction error.
    Frame(wire::FrameError),

    /// A required field key is absent from the input.
    MissingField { field: String },

    /// A field value failed to parse as the expected format.
    InvalidField {
        field: String,
        expected: &'static str,
        value: String,
    },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Catalog(err) => write!(f, "catalog error: {err}"),
            Self::Frame(err) => write!(f, "frame error: {err}"),
            Self::MissingField { field } => write!(f, "missing required field {field:?}"),
            Self::InvalidField {
                field,
                expected,
                value,
            } => {
                write!(
                    f,
                    "invalid value {value:?} for field {field:?}: expected {expected}"
                )
            }
        }
    }
}

impl std::error::Error for EncodeError {}

impl From<catalog::CatalogError> for EncodeError {
    fn from(err: catalog::CatalogError) -> Self {
        Self::Catalog(err)
    }
}

impl From<wire::FrameError> for EncodeError {
    fn from(err: wire::FrameError) -> Self {
        Self::Frame(err)
    }
}
