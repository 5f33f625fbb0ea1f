//! Catalog validation and lookup errors.

use std::fmt;

use crate::CommandCode;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur when building or querying a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    /// Code not present in the catalog.
    UnknownCommand { code: CommandCode },

    /// Duplicate command code in a catalog.
    DuplicateCommandCode { code: CommandCode },

    /// Duplicate field name within a command.
    DuplicateFieldName { code: CommandCode, field: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCommand { code } => write!(f, "unknown command code {code}"),
            Self::DuplicateCommandCode { code } => {
                write!(f, "duplicate command code {code}")
            }
            Self::DuplicateFieldName { code, field } => {
                write!(f, "duplicate field {field:?} in command {code}")
            }
        }
    }
}

impl std::error::Error for CatalogError {}
