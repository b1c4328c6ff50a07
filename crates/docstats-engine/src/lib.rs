// Engine module - Core processing logic (filter, score, sort, limit, summarize)
// This layer sits between the page catalog (types) and CLI presentation

pub mod cache;
mod dashboard;
pub mod pipeline;
pub mod sections;
pub mod summary;

pub use cache::ScoreCache;
pub use dashboard::Dashboard;
pub use pipeline::{
    ScoreBreakdown, filter_pages, limit_pages, score_breakdown, score_page, score_pages,
    sort_pages,
};
pub use sections::{SectionStats, section_overview};
pub use summary::{QueryResult, QuerySummary};

use chrono::{Local, NaiveDate};
use docstats_types::{PageRecord, QueryParams};

// Façade API - Stable public interface for CLI layer
// CLI should use these functions instead of directly accessing internal modules

/// Run Filter → Score → Sort → Limit over `pages`, recomputing every score.
///
/// `today` is the single reference date for the whole pass.
pub fn run_query(pages: &[PageRecord], params: &QueryParams, today: NaiveDate) -> QueryResult {
    pipeline::run(pages, params, today, |page| score_page(page, today))
}

/// Same as [`run_query`] with `today` read from the local clock once
pub fn run_query_now(pages: &[PageRecord], params: &QueryParams) -> QueryResult {
    run_query(pages, params, Local::now().date_naive())
}
