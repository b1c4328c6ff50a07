use docstats_types::PageRecord;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionStats {
    pub section: String,
    pub pages: usize,
    pub total_views: u64,
    pub average_completion_rate: f64,
}

/// Per-section page counts and totals, ordered by section name
pub fn section_overview(pages: &[PageRecord]) -> Vec<SectionStats> {
    let mut by_section: BTreeMap<&str, (usize, u64, f64)> = BTreeMap::new();

    for page in pages {
        let Some(section) = page.section() else {
            continue;
        };
        let entry = by_section.entry(section).or_insert((0, 0, 0.0));
        entry.0 += 1;
        entry.1 = entry.1.saturating_add(page.views);
        entry.2 += page.completion_rate;
    }

    by_section
        .into_iter()
        .map(|(section, (count, views, completion_sum))| SectionStats {
            section: section.to_string(),
            pages: count,
            total_views: views,
            average_completion_rate: completion_sum / count as f64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use docstats_types::Difficulty;

    fn page(path: &str, views: u64, completion_rate: f64) -> PageRecord {
        PageRecord {
            path: path.to_string(),
            views,
            completion_rate,
            avg_time_spent: 60,
            last_updated: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            difficulty: Difficulty::Beginner,
        }
    }

    #[test]
    fn test_groups_by_first_segment() {
        let pages = vec![
            page("/reference/react", 100, 0.8),
            page("/learn/a", 10, 0.4),
            page("/reference/react/useRef", 50, 0.6),
        ];

        let overview = section_overview(&pages);

        assert_eq!(overview.len(), 2);
        assert_eq!(overview[0].section, "learn");
        assert_eq!(overview[1].section, "reference");
        assert_eq!(overview[1].pages, 2);
        assert_eq!(overview[1].total_views, 150);
        assert!((overview[1].average_completion_rate - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_section_views_saturate() {
        let huge = u64::MAX / 2 + 1;
        let pages = vec![page("/blog/a", huge, 0.5), page("/blog/b", huge, 0.5)];

        let overview = section_overview(&pages);

        assert_eq!(overview[0].total_views, u64::MAX);
        assert_eq!(overview[0].pages, 2);
    }

    #[test]
    fn test_empty_catalog() {
        assert!(section_overview(&[]).is_empty());
    }
}
