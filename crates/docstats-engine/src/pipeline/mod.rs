// Pipeline module - the four query stages, composed in strict order
// Filter → Score → Sort → Limit; each stage is a pure function of its input

mod filter;
mod limit;
mod score;
mod sort;

pub use filter::{
    filter_pages, is_fresh_enough, matches_difficulty, matches_section, meets_thresholds,
    staleness_cutoff,
};
pub use limit::limit_pages;
pub use score::{ScoreBreakdown, score_breakdown, score_page, score_pages};
pub use sort::{compare_by, sort_pages};

use chrono::NaiveDate;
use docstats_types::{PageRecord, QueryParams, ScoredPageRecord};

use crate::summary::{QueryResult, QuerySummary};

/// Drive a full pass with a caller-supplied scorer (plain or memoized)
pub(crate) fn run<F>(
    pages: &[PageRecord],
    params: &QueryParams,
    today: NaiveDate,
    mut scorer: F,
) -> QueryResult
where
    F: FnMut(&PageRecord) -> f64,
{
    let filtered = filter_pages(pages, params, today);
    tracing::debug!(
        catalog = pages.len(),
        matched = filtered.len(),
        "filter stage complete"
    );

    let mut scored: Vec<ScoredPageRecord> = filtered
        .into_iter()
        .map(|page| ScoredPageRecord::new(page.clone(), scorer(page)))
        .collect();

    sort_pages(&mut scored, params.sort_by, params.sort_order);

    let matched = scored.len();
    let shown = limit_pages(scored, params.display_limit);
    tracing::debug!(matched, shown = shown.len(), "limit stage complete");

    let summary = QuerySummary::from_pages(pages.len(), matched, &shown, params);
    QueryResult {
        today,
        pages: shown,
        summary,
    }
}
