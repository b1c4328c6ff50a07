//! In-memory engagement score cache.
//!
//! Scores are keyed by (page path, day). The cache only ever holds entries
//! for one day: a lookup for any other day drops everything first. Each entry
//! keeps the record it was computed from, so a changed record under the same
//! path is rescored rather than served stale.

use chrono::NaiveDate;
use docstats_types::PageRecord;
use std::collections::HashMap;

use crate::pipeline::score_page;

#[derive(Debug, Clone)]
struct CacheEntry {
    page: PageRecord,
    score: f64,
}

#[derive(Debug, Clone, Default)]
pub struct ScoreCache {
    day: Option<NaiveDate>,
    entries: HashMap<String, CacheEntry>,
    hits: u64,
    misses: u64,
}

impl ScoreCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached score for `page` on `today`, computing and storing it on a miss
    pub fn get_or_score(&mut self, page: &PageRecord, today: NaiveDate) -> f64 {
        self.roll_over(today);

        if let Some(entry) = self.entries.get(&page.path)
            && entry.page == *page
        {
            self.hits += 1;
            return entry.score;
        }

        self.misses += 1;
        let score = score_page(page, today);
        self.entries.insert(
            page.path.clone(),
            CacheEntry {
                page: page.clone(),
                score,
            },
        );
        score
    }

    /// Day the current entries were computed for
    pub fn day(&self) -> Option<NaiveDate> {
        self.day
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.day = None;
    }

    fn roll_over(&mut self, today: NaiveDate) {
        if self.day == Some(today) {
            return;
        }
        if !self.entries.is_empty() {
            tracing::debug!(
                previous = ?self.day,
                %today,
                dropped = self.entries.len(),
                "score cache invalidated for new day"
            );
        }
        self.entries.clear();
        self.day = Some(today);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docstats_types::Difficulty;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn page(path: &str, views: u64) -> PageRecord {
        PageRecord {
            path: path.to_string(),
            views,
            completion_rate: 0.6,
            avg_time_spent: 240,
            last_updated: date(2024, 12, 1),
            difficulty: Difficulty::Intermediate,
        }
    }

    #[test]
    fn test_second_lookup_same_day_hits() {
        let mut cache = ScoreCache::new();
        let today = date(2025, 3, 1);
        let p = page("/learn/a", 1_000);

        let first = cache.get_or_score(&p, today);
        let second = cache.get_or_score(&p, today);

        assert_eq!(first, second);
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_new_day_invalidates() {
        let mut cache = ScoreCache::new();
        let p = page("/learn/a", 1_000);

        let day_one = cache.get_or_score(&p, date(2025, 3, 1));
        cache.get_or_score(&page("/learn/b", 5), date(2025, 3, 1));
        assert_eq!(cache.len(), 2);

        let day_two = cache.get_or_score(&p, date(2025, 3, 2));

        assert_eq!(cache.day(), Some(date(2025, 3, 2)));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.misses(), 3);
        assert!(day_two < day_one, "a day older means slightly less fresh");
        assert_eq!(day_two, score_page(&p, date(2025, 3, 2)));
    }

    #[test]
    fn test_changed_record_is_rescored() {
        let mut cache = ScoreCache::new();
        let today = date(2025, 3, 1);

        let low = cache.get_or_score(&page("/learn/a", 1_000), today);
        let high = cache.get_or_score(&page("/learn/a", 200_000), today);

        assert!(high > low);
        assert_eq!(cache.hits(), 0);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut cache = ScoreCache::new();
        cache.get_or_score(&page("/learn/a", 1), date(2025, 3, 1));
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.day(), None);
    }
}
