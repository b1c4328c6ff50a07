use chrono::NaiveDate;
use docstats_engine::ScoreBreakdown;
use docstats_types::PageRecord;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDetailViewModel {
    #[serde(flatten)]
    pub page: PageRecord,
    pub section: Option<String>,
    pub today: NaiveDate,
    /// 1-based position by views across the whole catalog
    pub views_rank: usize,
    pub catalog_size: usize,
    pub breakdown: ScoreBreakdown,
}
