use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use super::page::Difficulty;

/// Sections shown when the caller does not pick any
pub const DEFAULT_SECTIONS: [&str; 4] = ["learn", "reference", "blog", "community"];

/// Number of rows returned when the caller does not set a limit
pub const DEFAULT_DISPLAY_LIMIT: i64 = 10;

/// Upper bound of `minimum_completion_rate`
pub const MAX_COMPLETION_PERCENT: u32 = 100;

/// Lowercase and strip separators so `timeSpent`, `time_spent` and
/// `time-spent` all name the same key.
fn normalize_token(value: &str) -> String {
    value
        .trim()
        .chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Field the result table is ranked by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    Views,
    Completion,
    TimeSpent,
    Engagement,
    LastUpdated,
    /// Any other value. Sorting by it performs no comparison.
    #[serde(other)]
    Unrecognized,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Views,
        SortKey::Completion,
        SortKey::TimeSpent,
        SortKey::Engagement,
        SortKey::LastUpdated,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Views => "views",
            SortKey::Completion => "completion",
            SortKey::TimeSpent => "timeSpent",
            SortKey::Engagement => "engagement",
            SortKey::LastUpdated => "lastUpdated",
            SortKey::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match normalize_token(s).as_str() {
            "views" => SortKey::Views,
            "completion" | "completionrate" => SortKey::Completion,
            "timespent" | "avgtimespent" => SortKey::TimeSpent,
            "engagement" | "engagementscore" => SortKey::Engagement,
            "lastupdated" => SortKey::LastUpdated,
            _ => SortKey::Unrecognized,
        };
        Ok(key)
    }
}

/// Direction of the ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    /// Anything other than `asc` ranks descending
    #[default]
    #[serde(other)]
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "asc" | "ascending" => Ok(SortOrder::Asc),
            _ => Ok(SortOrder::Desc),
        }
    }
}

/// Difficulty restriction applied by the filter stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyFilter {
    #[default]
    All,
    Beginner,
    Intermediate,
    Advanced,
    /// Any other value. Filtering by it keeps every page.
    #[serde(other)]
    Unrecognized,
}

impl DifficultyFilter {
    pub fn accepts(self, difficulty: Difficulty) -> bool {
        match self {
            DifficultyFilter::All | DifficultyFilter::Unrecognized => true,
            DifficultyFilter::Beginner => difficulty == Difficulty::Beginner,
            DifficultyFilter::Intermediate => difficulty == Difficulty::Intermediate,
            DifficultyFilter::Advanced => difficulty == Difficulty::Advanced,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DifficultyFilter::All => "all",
            DifficultyFilter::Beginner => "beginner",
            DifficultyFilter::Intermediate => "intermediate",
            DifficultyFilter::Advanced => "advanced",
            DifficultyFilter::Unrecognized => "unrecognized",
        }
    }
}

impl From<Difficulty> for DifficultyFilter {
    fn from(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Beginner => DifficultyFilter::Beginner,
            Difficulty::Intermediate => DifficultyFilter::Intermediate,
            Difficulty::Advanced => DifficultyFilter::Advanced,
        }
    }
}

impl fmt::Display for DifficultyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DifficultyFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let filter = match normalize_token(s).as_str() {
            "all" => DifficultyFilter::All,
            "beginner" => DifficultyFilter::Beginner,
            "intermediate" => DifficultyFilter::Intermediate,
            "advanced" => DifficultyFilter::Advanced,
            _ => DifficultyFilter::Unrecognized,
        };
        Ok(filter)
    }
}

/// Everything a dashboard query can be tuned with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryParams {
    /// Sections (first path segment) to include
    pub sections: BTreeSet<String>,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
    pub difficulty_filter: DifficultyFilter,
    /// When false, pages not updated within the last six months are dropped
    pub include_outdated: bool,
    /// 0 disables the threshold
    pub minimum_views: u64,
    /// Percentage (0-100); 0 disables the threshold
    pub minimum_completion_rate: u32,
    /// Maximum rows returned; zero or negative yields nothing
    pub display_limit: i64,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            sections: DEFAULT_SECTIONS.iter().map(|s| s.to_string()).collect(),
            sort_by: SortKey::default(),
            sort_order: SortOrder::default(),
            difficulty_filter: DifficultyFilter::default(),
            include_outdated: true,
            minimum_views: 0,
            minimum_completion_rate: 0,
            display_limit: DEFAULT_DISPLAY_LIMIT,
        }
    }
}

impl QueryParams {
    pub fn with_sections<I, S>(mut self, sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sections = sections.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_sort(mut self, sort_by: SortKey, sort_order: SortOrder) -> Self {
        self.sort_by = sort_by;
        self.sort_order = sort_order;
        self
    }

    pub fn with_difficulty(mut self, difficulty_filter: DifficultyFilter) -> Self {
        self.difficulty_filter = difficulty_filter;
        self
    }

    pub fn with_include_outdated(mut self, include_outdated: bool) -> Self {
        self.include_outdated = include_outdated;
        self
    }

    pub fn with_minimum_views(mut self, minimum_views: u64) -> Self {
        self.minimum_views = minimum_views;
        self
    }

    pub fn with_minimum_completion_rate(mut self, percent: u32) -> Self {
        self.minimum_completion_rate = percent;
        self
    }

    pub fn with_display_limit(mut self, display_limit: i64) -> Self {
        self.display_limit = display_limit;
        self
    }

    /// Completion threshold as a fraction, or `None` when disabled.
    /// Percentages above 100 are treated as 100.
    pub fn completion_threshold(&self) -> Option<f64> {
        (self.minimum_completion_rate > 0).then(|| {
            f64::from(self.minimum_completion_rate.min(MAX_COMPLETION_PERCENT)) / 100.0
        })
    }
}
