use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

use crate::util::section_of;

/// Reading level a page is written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    /// Weight applied to the engagement score
    pub fn multiplier(self) -> f64 {
        match self {
            Difficulty::Beginner => 0.9,
            Difficulty::Intermediate => 1.0,
            Difficulty::Advanced => 1.2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Analytics for a single documentation page, as supplied by the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRecord {
    /// Unique, slash-separated page path (e.g. "/learn/managing-state")
    pub path: String,
    pub views: u64,
    /// Fraction of readers reaching the end of the page, in [0, 1]
    pub completion_rate: f64,
    /// Average reading time in seconds
    pub avg_time_spent: u64,
    pub last_updated: NaiveDate,
    pub difficulty: Difficulty,
}

impl PageRecord {
    /// First path segment (`learn`, `reference`, `blog`, ...)
    pub fn section(&self) -> Option<&str> {
        section_of(&self.path)
    }
}

/// A page record plus its derived engagement score.
///
/// Produced fresh by every query; the source record is cloned, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPageRecord {
    #[serde(flatten)]
    pub page: PageRecord,

    /// Weighted blend of views, completion, time spent and freshness.
    /// Not bounded to [0, 1]: the difficulty multiplier can push it above 1.
    #[serde(rename = "engagementScore")]
    pub engagement_score: f64,
}

impl ScoredPageRecord {
    pub fn new(page: PageRecord, engagement_score: f64) -> Self {
        Self {
            page,
            engagement_score,
        }
    }
}

impl Deref for ScoredPageRecord {
    type Target = PageRecord;

    fn deref(&self) -> &Self::Target {
        &self.page
    }
}
