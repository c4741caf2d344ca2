//! Error handling for the customer dataset pipeline.
//!
//! Every failure the pipeline can hit falls into one of three buckets:
//!
//! - [`DeskError::NotFound`]: the data file is missing when we try to load it.
//! - [`DeskError::Io`]: any other read or write failure.
//! - [`DeskError::Parse`]: the file exists but a column or cell is unusable.
//!
//! The window never sees these as faults. The [`crate::desk::Desk`] controller
//! turns each of them into a notice the user can read and dismiss:
//!
//! ```
//! use customer_desk::error::DeskError;
//! use std::path::PathBuf;
//!
//! let err = DeskError::NotFound(PathBuf::from("customer_data.csv"));
//! assert_eq!(err.title(), "Error");
//! assert_eq!(err.to_string(), "customer_data.csv not found!");
//! ```

use std::fmt;
use std::path::PathBuf;

/// Main error type for dataset operations.
#[derive(Debug)]
pub enum DeskError {
    /// The data file does not exist at load time.
    NotFound(PathBuf),

    /// I/O errors other than a missing file (permissions, disk full, ...)
    Io(std::io::Error),

    /// Malformed cell, missing column or CSV polars cannot make sense of.
    Parse(String),
}

impl DeskError {
    /// Dialog title shown to the user for this error.
    pub fn title(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "Error",
            Self::Io(_) => "I/O Error",
            Self::Parse(_) => "Parse Error",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl fmt::Display for DeskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "{} not found!", path.display()),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Parse(msg) => write!(f, "Parse error: {msg}"),
        }
    }
}

impl std::error::Error for DeskError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::NotFound(_) | Self::Parse(_) => None,
        }
    }
}

impl From<std::io::Error> for DeskError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

// File-system failures keep their `ErrorKind`; everything else polars raises
// is about the contents of the file.
impl From<polars::error::PolarsError> for DeskError {
    fn from(err: polars::error::PolarsError) -> Self {
        match &err {
            polars::error::PolarsError::IO { error, .. } => {
                Self::Io(std::io::Error::new(error.kind(), err.to_string()))
            }
            _ => Self::Parse(err.to_string()),
        }
    }
}

/// Result type alias for dataset operations.
pub type Result<T> = std::result::Result<T, DeskError>;
