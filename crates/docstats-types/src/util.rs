use crate::{Error, Result};
use chrono::NaiveDate;

/// Date format used by catalogs and the CLI (`2025-01-20`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Section a page path belongs to: its first non-empty segment.
///
/// `/learn/managing-state` -> `learn`, `reference/react` -> `reference`,
/// `/` -> `None`.
pub fn section_of(path: &str) -> Option<&str> {
    path.split('/').find(|segment| !segment.is_empty())
}

/// Parse a `YYYY-MM-DD` calendar date
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|source| Error::InvalidDate {
        value: value.to_string(),
        source,
    })
}
