use chrono::NaiveDate;
use docstats_engine::{QueryResult, QuerySummary};
use docstats_types::{QueryParams, ScoredPageRecord};
use serde::Serialize;

use crate::context::CatalogSource;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryViewModel {
    pub catalog: String,
    pub today: NaiveDate,
    pub headline: String,
    pub params: QueryParams,
    pub summary: QuerySummary,
    pub pages: Vec<ScoredPageRecord>,
}

impl QueryViewModel {
    pub fn new(source: &CatalogSource, params: QueryParams, result: QueryResult) -> Self {
        Self {
            catalog: source.to_string(),
            today: result.today,
            headline: result.summary.headline(),
            params,
            summary: result.summary,
            pages: result.pages,
        }
    }
}
