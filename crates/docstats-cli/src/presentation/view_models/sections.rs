use docstats_engine::SectionStats;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionsViewModel {
    pub catalog: String,
    pub total_pages: usize,
    pub sections: Vec<SectionStats>,
}
