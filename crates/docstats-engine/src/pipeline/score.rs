use chrono::NaiveDate;
use docstats_types::{PageRecord, ScoredPageRecord};
use serde::Serialize;

/// Views at which the views component saturates
pub const VIEWS_CEILING: f64 = 250_000.0;
/// Seconds at which the time-spent component saturates
pub const TIME_SPENT_CEILING_SECS: f64 = 600.0;
/// Age unit used by the freshness decay
pub const DAYS_PER_MONTH: f64 = 30.0;
/// Age (in 30-day months) at which freshness reaches zero
pub const FRESHNESS_HORIZON_MONTHS: f64 = 24.0;

const VIEWS_WEIGHT: f64 = 0.4;
const COMPLETION_WEIGHT: f64 = 0.3;
const TIME_SPENT_WEIGHT: f64 = 0.2;
const FRESHNESS_WEIGHT: f64 = 0.1;

/// Every intermediate value behind an engagement score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub views_norm: f64,
    pub completion_norm: f64,
    pub time_spent_norm: f64,
    pub months_old: f64,
    pub freshness: f64,
    pub difficulty_multiplier: f64,
    pub engagement_score: f64,
}

pub fn score_breakdown(page: &PageRecord, today: NaiveDate) -> ScoreBreakdown {
    let views_norm = (page.views as f64 / VIEWS_CEILING).min(1.0);
    let completion_norm = page.completion_rate;
    let time_spent_norm = (page.avg_time_spent as f64 / TIME_SPENT_CEILING_SECS).min(1.0);

    let age_days = (today - page.last_updated).num_days();
    let months_old = age_days as f64 / DAYS_PER_MONTH;
    let freshness = (1.0 - months_old / FRESHNESS_HORIZON_MONTHS).max(0.0);

    let difficulty_multiplier = page.difficulty.multiplier();

    let engagement_score = (VIEWS_WEIGHT * views_norm
        + COMPLETION_WEIGHT * completion_norm
        + TIME_SPENT_WEIGHT * time_spent_norm
        + FRESHNESS_WEIGHT * freshness.powi(2))
        * difficulty_multiplier;

    ScoreBreakdown {
        views_norm,
        completion_norm,
        time_spent_norm,
        months_old,
        freshness,
        difficulty_multiplier,
        engagement_score,
    }
}

/// Engagement score of one page as of `today`. Pure and deterministic.
pub fn score_page(page: &PageRecord, today: NaiveDate) -> f64 {
    score_breakdown(page, today).engagement_score
}

/// Score pages into new records; the inputs are left untouched
pub fn score_pages<'a, I>(pages: I, today: NaiveDate) -> Vec<ScoredPageRecord>
where
    I: IntoIterator<Item = &'a PageRecord>,
{
    pages
        .into_iter()
        .map(|page| ScoredPageRecord::new(page.clone(), score_page(page, today)))
        .collect()
}
