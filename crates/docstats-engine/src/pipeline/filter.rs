use chrono::{Months, NaiveDate};
use docstats_types::{DifficultyFilter, PageRecord, QueryParams};
use std::collections::BTreeSet;

/// How far back `include_outdated = false` reaches
const FRESHNESS_WINDOW_MONTHS: u32 = 6;

/// Keep the pages passing every predicate, in catalog order
pub fn filter_pages<'a>(
    pages: &'a [PageRecord],
    params: &QueryParams,
    today: NaiveDate,
) -> Vec<&'a PageRecord> {
    if params.difficulty_filter == DifficultyFilter::Unrecognized {
        tracing::warn!("unrecognized difficulty filter, keeping all difficulties");
    }

    let cutoff = (!params.include_outdated).then(|| staleness_cutoff(today));

    pages
        .iter()
        .filter(|page| matches_section(page, &params.sections))
        .filter(|page| matches_difficulty(page, params.difficulty_filter))
        .filter(|page| cutoff.is_none_or(|cutoff| is_fresh_enough(page, cutoff)))
        .filter(|page| meets_thresholds(page, params))
        .collect()
}

/// Page's first path segment is one of `sections`
pub fn matches_section(page: &PageRecord, sections: &BTreeSet<String>) -> bool {
    page.section()
        .is_some_and(|section| sections.contains(section))
}

pub fn matches_difficulty(page: &PageRecord, filter: DifficultyFilter) -> bool {
    filter.accepts(page.difficulty)
}

/// Oldest `last_updated` (exclusive) still counted as current: six calendar
/// months before `today`, clamped to the end of shorter months.
pub fn staleness_cutoff(today: NaiveDate) -> NaiveDate {
    today
        .checked_sub_months(Months::new(FRESHNESS_WINDOW_MONTHS))
        .unwrap_or(NaiveDate::MIN)
}

/// Updated strictly after `cutoff`
pub fn is_fresh_enough(page: &PageRecord, cutoff: NaiveDate) -> bool {
    page.last_updated > cutoff
}

/// Minimum views and completion thresholds; a zero threshold is disabled
pub fn meets_thresholds(page: &PageRecord, params: &QueryParams) -> bool {
    if params.minimum_views > 0 && page.views < params.minimum_views {
        return false;
    }
    if let Some(threshold) = params.completion_threshold()
        && page.completion_rate < threshold
    {
        return false;
    }
    true
}
