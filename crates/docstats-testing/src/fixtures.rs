//! Fixtures for page records and catalog files.
//!
//! Provides utilities to:
//! - Build `PageRecord`s with only the fields a test cares about
//! - Write catalogs in both on-disk layouts (bare array, `{"pages": [...]}`)

use anyhow::Result;
use chrono::NaiveDate;
use docstats_types::{Difficulty, PageRecord};
use std::fs;
use std::path::Path;

/// Fluent builder for a single page record.
///
/// Unset fields get unremarkable defaults: 1,000 views, 50% completion,
/// 120s, updated 2025-01-01, beginner.
#[derive(Debug, Clone)]
pub struct PageBuilder {
    page: PageRecord,
}

impl PageBuilder {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            page: PageRecord {
                path: path.into(),
                views: 1_000,
                completion_rate: 0.5,
                avg_time_spent: 120,
                last_updated: NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date"),
                difficulty: Difficulty::Beginner,
            },
        }
    }

    pub fn views(mut self, views: u64) -> Self {
        self.page.views = views;
        self
    }

    pub fn completion(mut self, completion_rate: f64) -> Self {
        self.page.completion_rate = completion_rate;
        self
    }

    pub fn time_spent(mut self, seconds: u64) -> Self {
        self.page.avg_time_spent = seconds;
        self
    }

    /// Last update as `YYYY-MM-DD`; panics on a malformed literal
    pub fn updated(mut self, date: &str) -> Self {
        self.page.last_updated = docstats_types::parse_date(date)
            .unwrap_or_else(|e| panic!("bad fixture date {}: {}", date, e));
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.page.difficulty = difficulty;
        self
    }

    pub fn build(self) -> PageRecord {
        self.page
    }
}

/// Write `pages` as a bare JSON array
pub fn write_catalog(path: &Path, pages: &[PageRecord]) -> Result<()> {
    fs::write(path, serde_json::to_string_pretty(pages)?)?;
    Ok(())
}

/// Write `pages` wrapped in a `{"pages": [...]}` object
pub fn write_wrapped_catalog(path: &Path, pages: &[PageRecord]) -> Result<()> {
    let wrapped = serde_json::json!({ "pages": pages });
    fs::write(path, serde_json::to_string_pretty(&wrapped)?)?;
    Ok(())
}

/// A small mixed catalog: two learn pages, two reference pages, one stale blog post
pub fn small_catalog() -> Vec<PageRecord> {
    vec![
        PageBuilder::new("/learn/quick-start")
            .views(90_000)
            .completion(0.8)
            .time_spent(300)
            .updated("2025-02-01")
            .build(),
        PageBuilder::new("/learn/escape-hatches")
            .views(20_000)
            .completion(0.4)
            .time_spent(700)
            .updated("2024-12-01")
            .difficulty(Difficulty::Advanced)
            .build(),
        PageBuilder::new("/reference/react/useState")
            .views(120_000)
            .completion(0.9)
            .time_spent(400)
            .updated("2025-01-20")
            .difficulty(Difficulty::Intermediate)
            .build(),
        PageBuilder::new("/reference/react/useMemo")
            .views(40_000)
            .completion(0.6)
            .time_spent(450)
            .updated("2024-11-15")
            .difficulty(Difficulty::Advanced)
            .build(),
        PageBuilder::new("/blog/2023/03/16/introducing-react-dev")
            .views(30_000)
            .completion(0.85)
            .time_spent(240)
            .updated("2023-03-16")
            .build(),
    ]
}
