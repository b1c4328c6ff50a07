use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportViewModel {
    pub output_path: String,
    pub exported_count: usize,
    pub headline: String,
}
