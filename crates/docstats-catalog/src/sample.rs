use chrono::NaiveDate;
use docstats_types::{Difficulty, PageRecord};

use crate::Catalog;

use docstats_types::Difficulty::{Advanced, Beginner, Intermediate};

// path, views, completion rate, avg time spent (s), last updated (y, m, d), difficulty
type Row = (&'static str, u64, f64, u64, (i32, u32, u32), Difficulty);

const SAMPLE_ROWS: [Row; 17] = [
    ("/learn/describing-the-ui", 143_500, 0.72, 340, (2024, 12, 10), Beginner),
    ("/learn/adding-interactivity", 98_200, 0.68, 450, (2024, 11, 25), Beginner),
    ("/learn/managing-state", 120_400, 0.65, 520, (2024, 12, 5), Intermediate),
    ("/learn/escape-hatches", 67_800, 0.58, 380, (2024, 10, 15), Advanced),
    ("/reference/react", 215_600, 0.81, 290, (2025, 1, 20), Intermediate),
    ("/reference/react-dom", 187_300, 0.77, 310, (2025, 1, 5), Intermediate),
    ("/reference/react/useState", 198_700, 0.79, 270, (2025, 2, 10), Beginner),
    ("/reference/react/useEffect", 185_400, 0.75, 340, (2025, 2, 10), Intermediate),
    ("/reference/react/useContext", 112_800, 0.67, 380, (2025, 1, 15), Intermediate),
    ("/reference/react/useReducer", 89_500, 0.64, 420, (2025, 1, 18), Advanced),
    ("/reference/react/useMemo", 103_700, 0.71, 300, (2025, 1, 25), Advanced),
    ("/reference/react/useCallback", 98_200, 0.70, 310, (2025, 1, 25), Advanced),
    ("/reference/react/useRef", 115_900, 0.73, 290, (2025, 1, 20), Intermediate),
    ("/blog/2023/03/16/introducing-react-dev", 85_400, 0.62, 540, (2023, 3, 16), Beginner),
    (
        "/blog/2022/06/15/react-labs-what-we-have-been-working-on-june-2022",
        72_600,
        0.58,
        620,
        (2022, 6, 15),
        Intermediate,
    ),
    ("/community/conferences", 28_900, 0.51, 180, (2024, 12, 20), Beginner),
    ("/community/meetups", 19_500, 0.48, 150, (2024, 11, 10), Beginner),
];

/// The bundled demonstration catalog.
///
/// Callers pass it to the pipeline explicitly like any other catalog.
pub fn sample_catalog() -> Catalog {
    let pages = SAMPLE_ROWS
        .iter()
        .filter_map(|&(path, views, completion_rate, avg_time_spent, (y, m, d), difficulty)| {
            Some(PageRecord {
                path: path.to_string(),
                views,
                completion_rate,
                avg_time_spent,
                last_updated: NaiveDate::from_ymd_opt(y, m, d)?,
                difficulty,
            })
        })
        .collect();

    Catalog::from_trusted(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_sample_catalog_is_complete() {
        let catalog = sample_catalog();
        assert_eq!(catalog.len(), SAMPLE_ROWS.len());
    }

    #[test]
    fn test_sample_catalog_covers_all_sections() {
        let sections: BTreeSet<_> = sample_catalog()
            .iter()
            .filter_map(|page| page.section().map(str::to_string))
            .collect();
        let expected: BTreeSet<_> = ["blog", "community", "learn", "reference"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(sections, expected);
    }

    #[test]
    fn test_sample_catalog_preserves_order() {
        let catalog = sample_catalog();
        assert_eq!(catalog.pages()[0].path, "/learn/describing-the-ui");
        assert_eq!(catalog.pages()[16].path, "/community/meetups");
    }
}
