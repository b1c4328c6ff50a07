use chrono::NaiveDate;
use docstats_types::{PageRecord, QueryParams};

use crate::cache::ScoreCache;
use crate::pipeline;
use crate::summary::QueryResult;

/// Long-lived query runner that memoizes scores across repeated queries.
///
/// Produces exactly what [`crate::run_query`] produces; only the scoring
/// work is shared between calls made on the same day.
#[derive(Debug, Default)]
pub struct Dashboard {
    cache: ScoreCache,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(
        &mut self,
        pages: &[PageRecord],
        params: &QueryParams,
        today: NaiveDate,
    ) -> QueryResult {
        let cache = &mut self.cache;
        let result = pipeline::run(pages, params, today, |page| cache.get_or_score(page, today));

        tracing::debug!(
            hits = self.cache.hits(),
            misses = self.cache.misses(),
            "dashboard query complete"
        );
        result
    }

    pub fn cache(&self) -> &ScoreCache {
        &self.cache
    }
}
