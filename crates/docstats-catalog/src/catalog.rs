use docstats_types::PageRecord;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

use crate::error::{Error, Result};

/// Accepts the two on-disk layouts: a bare array of records or `{ "pages": [...] }`
fn parse_pages(content: &str) -> Result<Vec<PageRecord>> {
    let value: Value = serde_json::from_str(content)?;

    let records = match value {
        Value::Array(records) => records,
        Value::Object(mut map) => match map.remove("pages") {
            Some(Value::Array(records)) => records,
            _ => {
                return Err(Error::InvalidFormat(
                    "expected a \"pages\" array".to_string(),
                ));
            }
        },
        _ => {
            return Err(Error::InvalidFormat(
                "expected an array of page records".to_string(),
            ));
        }
    };

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            serde_json::from_value(record).map_err(|source| Error::MalformedRecord { index, source })
        })
        .collect()
}

/// Validated, read-only collection of page records.
///
/// Record order is the catalog order; the pipeline's stability guarantees
/// are defined relative to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pages: Vec<PageRecord>,
}

impl Catalog {
    /// Build a catalog from records, rejecting any that break catalog invariants
    pub fn from_pages(pages: Vec<PageRecord>) -> Result<Self> {
        validate(&pages)?;
        Ok(Self { pages })
    }

    /// Wrap records already known to be valid (bundled data)
    pub(crate) fn from_trusted(pages: Vec<PageRecord>) -> Self {
        debug_assert!(validate(&pages).is_ok());
        Self { pages }
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Self::from_pages(parse_pages(content)?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&content)?;

        tracing::info!(
            path = %path.display(),
            pages = catalog.len(),
            "loaded page catalog"
        );

        Ok(catalog)
    }

    pub fn pages(&self) -> &[PageRecord] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PageRecord> {
        self.pages.iter()
    }

    /// Look up a page by exact path
    pub fn get(&self, path: &str) -> Option<&PageRecord> {
        self.pages.iter().find(|page| page.path == path)
    }
}

impl AsRef<[PageRecord]> for Catalog {
    fn as_ref(&self) -> &[PageRecord] {
        &self.pages
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a PageRecord;
    type IntoIter = std::slice::Iter<'a, PageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}

fn validate(pages: &[PageRecord]) -> Result<()> {
    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(pages.len());

    for (index, page) in pages.iter().enumerate() {
        if page.section().is_none() {
            return Err(Error::InvalidRecord {
                index,
                path: page.path.clone(),
                reason: "path has no section segment".to_string(),
            });
        }

        if !page.completion_rate.is_finite() || !(0.0..=1.0).contains(&page.completion_rate) {
            return Err(Error::InvalidRecord {
                index,
                path: page.path.clone(),
                reason: format!(
                    "completionRate {} is outside [0, 1]",
                    page.completion_rate
                ),
            });
        }

        if let Some(first) = seen.insert(page.path.as_str(), index) {
            return Err(Error::DuplicatePath {
                path: page.path.clone(),
                first,
                second: index,
            });
        }
    }

    Ok(())
}
