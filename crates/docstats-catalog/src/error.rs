use std::fmt;
use std::path::PathBuf;

/// Result type for docstats-catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading a catalog
#[derive(Debug)]
pub enum Error {
    /// Catalog file could not be read
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Catalog content is not valid JSON
    Parse(serde_json::Error),

    /// Catalog JSON has the wrong shape
    InvalidFormat(String),

    /// A record has a missing or malformed field
    /// (including dates that are not `YYYY-MM-DD`)
    MalformedRecord {
        index: usize,
        source: serde_json::Error,
    },

    /// A record parsed but violates a catalog invariant
    InvalidRecord {
        index: usize,
        path: String,
        reason: String,
    },

    /// Two records share the same path
    DuplicatePath { path: String, first: usize, second: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Read { path, source } => {
                write!(f, "Failed to read catalog {}: {}", path.display(), source)
            }
            Error::Parse(err) => write!(f, "Catalog parse error: {}", err),
            Error::InvalidFormat(msg) => write!(f, "Invalid catalog format: {}", msg),
            Error::MalformedRecord { index, source } => {
                let msg = source.to_string();
                // chrono reports bad dates without naming the field
                if is_date_error(&msg) {
                    write!(
                        f,
                        "Malformed record #{}: {} (dates must be formatted as YYYY-MM-DD)",
                        index, msg
                    )
                } else {
                    write!(f, "Malformed record #{}: {}", index, msg)
                }
            }
            Error::InvalidRecord {
                index,
                path,
                reason,
            } => write!(f, "Invalid record #{} ({}): {}", index, path, reason),
            Error::DuplicatePath {
                path,
                first,
                second,
            } => write!(
                f,
                "Duplicate page path {} (records #{} and #{})",
                path, first, second
            ),
        }
    }
}

fn is_date_error(msg: &str) -> bool {
    msg.contains("input contains invalid characters")
        || msg.contains("premature end of input")
        || msg.contains("input is out of range")
        || msg.contains("no possible date")
        || msg.contains("trailing input")
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Read { source, .. } => Some(source),
            Error::Parse(err) => Some(err),
            Error::MalformedRecord { source, .. } => Some(source),
            Error::InvalidFormat(_) | Error::InvalidRecord { .. } | Error::DuplicatePath { .. } => {
                None
            }
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_date_message_mentions_format() {
        let source = serde_json::from_str::<chrono::NaiveDate>("\"2024-1x-01\"").unwrap_err();
        let msg = Error::MalformedRecord { index: 2, source }.to_string();

        assert!(msg.starts_with("Malformed record #2:"));
        assert!(msg.contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_missing_field_message_has_no_date_hint() {
        let source = serde_json::from_str::<docstats_types::PageRecord>("{}").unwrap_err();
        let msg = Error::MalformedRecord { index: 0, source }.to_string();

        assert!(msg.contains("missing field"));
        assert!(!msg.contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_duplicate_path_message() {
        let err = Error::DuplicatePath {
            path: "/learn/x".to_string(),
            first: 0,
            second: 3,
        };
        assert_eq!(
            err.to_string(),
            "Duplicate page path /learn/x (records #0 and #3)"
        );
    }
}
