use std::fmt;

/// Result type for docstats-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// A calendar date could not be parsed
    InvalidDate {
        value: String,
        source: chrono::ParseError,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDate { value, source } => {
                write!(f, "Invalid date '{}' (expected YYYY-MM-DD): {}", value, source)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidDate { source, .. } => Some(source),
        }
    }
}
