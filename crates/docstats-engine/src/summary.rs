use chrono::NaiveDate;
use docstats_types::{QueryParams, ScoredPageRecord, SortKey, SortOrder};
use serde::Serialize;

/// Counts and aggregates describing one query pass
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuerySummary {
    /// Records in the catalog before filtering
    pub catalog_size: usize,
    /// Records surviving the filter stage
    pub matched: usize,
    /// Records returned after the limit stage
    pub shown: usize,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
    /// Views summed over the returned records
    pub total_views: u64,
    /// Mean engagement of the returned records; `None` when nothing is shown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_engagement: Option<f64>,
}

impl QuerySummary {
    pub fn from_pages(
        catalog_size: usize,
        matched: usize,
        shown: &[ScoredPageRecord],
        params: &QueryParams,
    ) -> Self {
        let total_views = shown.iter().map(|p| p.views).fold(0, u64::saturating_add);
        let average_engagement = (!shown.is_empty()).then(|| {
            shown.iter().map(|p| p.engagement_score).sum::<f64>() / shown.len() as f64
        });

        Self {
            catalog_size,
            matched,
            shown: shown.len(),
            sort_by: params.sort_by,
            sort_order: params.sort_order,
            total_views,
            average_engagement,
        }
    }

    /// Dashboard caption, e.g. "Showing top 10 pages by views"
    pub fn headline(&self) -> String {
        format!("Showing top {} pages by {}", self.shown, self.sort_by)
    }

    pub fn is_empty(&self) -> bool {
        self.shown == 0
    }
}

/// Ordered, limited pages plus the summary of how they were produced
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    /// Reference date every score in this result was computed against
    pub today: NaiveDate,
    pub pages: Vec<ScoredPageRecord>,
    pub summary: QuerySummary,
}
