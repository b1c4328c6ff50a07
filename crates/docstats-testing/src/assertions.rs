//! Custom assertions for docstats-specific validation.
//!
//! Provides high-level assertions over the `--format json` envelope:
//! - Page count validation
//! - Section membership checks
//! - Ranking order checks

use anyhow::{Context, Result};
use serde_json::Value;

fn pages(json: &Value) -> Result<&Vec<Value>> {
    json["content"]["pages"]
        .as_array()
        .context("Expected 'content.pages' array in JSON")
}

/// Paths of the ranked pages, in output order.
pub fn page_paths(json: &Value) -> Result<Vec<String>> {
    pages(json)?
        .iter()
        .enumerate()
        .map(|(i, page)| {
            page["path"]
                .as_str()
                .map(str::to_string)
                .with_context(|| format!("Page {} missing path", i))
        })
        .collect()
}

/// Assert that JSON output contains expected number of pages.
pub fn assert_page_count(json: &Value, expected: usize) -> Result<()> {
    let pages = pages(json)?;

    if pages.len() != expected {
        anyhow::bail!("Expected {} pages, got {}", expected, pages.len());
    }

    Ok(())
}

/// Assert that every page's path starts in `section`.
pub fn assert_all_pages_in_section(json: &Value, section: &str) -> Result<()> {
    let prefix = format!("/{}/", section);

    for path in page_paths(json)? {
        if !path.starts_with(&prefix) && path != format!("/{}", section) {
            anyhow::bail!("Page {} is outside section {}", path, section);
        }
    }

    Ok(())
}

/// Assert that pages are ordered by a numeric field (`views`,
/// `engagementScore`, ...), descending unless `ascending` is set.
pub fn assert_sorted_by(json: &Value, field: &str, ascending: bool) -> Result<()> {
    let values: Vec<f64> = pages(json)?
        .iter()
        .enumerate()
        .map(|(i, page)| {
            page[field]
                .as_f64()
                .with_context(|| format!("Page {} missing numeric '{}'", i, field))
        })
        .collect::<Result<_>>()?;

    for (i, pair) in values.windows(2).enumerate() {
        let in_order = if ascending {
            pair[0] <= pair[1]
        } else {
            pair[0] >= pair[1]
        };
        if !in_order {
            anyhow::bail!(
                "Pages {} and {} out of order by {}: {} then {}",
                i,
                i + 1,
                field,
                pair[0],
                pair[1]
            );
        }
    }

    Ok(())
}
