use docstats_types::{ScoredPageRecord, SortKey, SortOrder};
use std::cmp::Ordering;

/// Ascending comparison of two records on a single key.
///
/// `SortKey::Unrecognized` compares everything as equal.
pub fn compare_by(a: &ScoredPageRecord, b: &ScoredPageRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Views => a.views.cmp(&b.views),
        SortKey::Completion => a.completion_rate.total_cmp(&b.completion_rate),
        SortKey::TimeSpent => a.avg_time_spent.cmp(&b.avg_time_spent),
        SortKey::Engagement => a.engagement_score.total_cmp(&b.engagement_score),
        SortKey::LastUpdated => a.last_updated.cmp(&b.last_updated),
        SortKey::Unrecognized => Ordering::Equal,
    }
}

/// Stable sort on one key. Ties keep their incoming relative order; there is
/// no secondary key.
pub fn sort_pages(pages: &mut [ScoredPageRecord], key: SortKey, order: SortOrder) {
    if key == SortKey::Unrecognized {
        tracing::warn!("unrecognized sort key, leaving pages in catalog order");
        return;
    }

    pages.sort_by(|a, b| {
        let ordering = compare_by(a, b, key);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}
