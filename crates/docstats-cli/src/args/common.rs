use clap::Args;
use docstats_types::{DifficultyFilter, MAX_COMPLETION_PERCENT, QueryParams, SortKey, SortOrder};

/// Query flags shared by `query` and `export`.
///
/// Every flag is optional: unset flags keep the value from the config
/// file's `[query]` table (or the built-in default).
#[derive(Debug, Clone, Default, Args)]
pub struct QueryArgs {
    #[arg(
        long = "section",
        value_name = "SECTION",
        value_delimiter = ',',
        help = "Sections to include (repeatable or comma separated)"
    )]
    pub sections: Vec<String>,

    #[arg(
        long,
        value_name = "KEY",
        help = "views | completion | timeSpent | engagement | lastUpdated"
    )]
    pub sort_by: Option<SortKey>,

    #[arg(long, value_name = "ORDER", help = "asc | desc")]
    pub order: Option<SortOrder>,

    #[arg(long, help = "all | beginner | intermediate | advanced")]
    pub difficulty: Option<DifficultyFilter>,

    #[arg(
        long,
        conflicts_with = "include_outdated",
        help = "Drop pages not updated in the last six months"
    )]
    pub exclude_outdated: bool,

    #[arg(long, help = "Keep pages regardless of last update")]
    pub include_outdated: bool,

    #[arg(long, value_name = "N")]
    pub min_views: Option<u64>,

    #[arg(
        long,
        value_name = "PERCENT",
        value_parser = clap::value_parser!(u32).range(0..=MAX_COMPLETION_PERCENT as i64)
    )]
    pub min_completion: Option<u32>,

    #[arg(
        long,
        value_name = "N",
        allow_negative_numbers = true,
        help = "Maximum rows shown; zero or less shows nothing"
    )]
    pub limit: Option<i64>,
}

impl QueryArgs {
    /// Layer the flags that were given on top of `base`
    pub fn apply(&self, base: QueryParams) -> QueryParams {
        let mut params = base;

        if !self.sections.is_empty() {
            params = params.with_sections(self.sections.iter().map(|s| s.trim().to_string()));
        }
        if self.sort_by.is_some() || self.order.is_some() {
            let sort_by = self.sort_by.unwrap_or(params.sort_by);
            let order = self.order.unwrap_or(params.sort_order);
            params = params.with_sort(sort_by, order);
        }
        if let Some(difficulty) = self.difficulty {
            params = params.with_difficulty(difficulty);
        }
        if self.exclude_outdated {
            params = params.with_include_outdated(false);
        } else if self.include_outdated {
            params = params.with_include_outdated(true);
        }
        if let Some(views) = self.min_views {
            params = params.with_minimum_views(views);
        }
        if let Some(percent) = self.min_completion {
            params = params.with_minimum_completion_rate(percent);
        }
        if let Some(limit) = self.limit {
            params = params.with_display_limit(limit);
        }

        params
    }
}
