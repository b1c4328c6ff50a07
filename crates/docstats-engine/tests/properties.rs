//! Properties that must hold for every catalog and parameter set.

use chrono::{Duration, NaiveDate};
use docstats_engine::{
    Dashboard, filter_pages, limit_pages, run_query, score_page, score_pages, sort_pages,
};
use docstats_types::{
    Difficulty, DifficultyFilter, PageRecord, QueryParams, SortKey, SortOrder,
};
use proptest::prelude::*;
use std::cmp::Ordering;

const SECTIONS: [&str; 5] = ["learn", "reference", "blog", "community", "api"];

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
}

fn difficulty() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
        Just(Difficulty::Beginner),
        Just(Difficulty::Intermediate),
        Just(Difficulty::Advanced),
    ]
}

fn catalog() -> impl Strategy<Value = Vec<PageRecord>> {
    prop::collection::vec(
        (
            0..SECTIONS.len(),
            0u64..400_000,
            0.0f64..=1.0,
            0u64..1_200,
            0i64..1_500,
            difficulty(),
        ),
        0..40,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (section, views, completion_rate, avg_time_spent, age, difficulty))| {
                PageRecord {
                    path: format!("/{}/page-{}", SECTIONS[section], i),
                    views,
                    completion_rate,
                    avg_time_spent,
                    last_updated: today() - Duration::days(age),
                    difficulty,
                }
            })
            .collect()
    })
}

fn sort_key() -> impl Strategy<Value = SortKey> {
    prop_oneof![
        Just(SortKey::Views),
        Just(SortKey::Completion),
        Just(SortKey::TimeSpent),
        Just(SortKey::Engagement),
        Just(SortKey::LastUpdated),
        Just(SortKey::Unrecognized),
    ]
}

fn sort_order() -> impl Strategy<Value = SortOrder> {
    prop_oneof![Just(SortOrder::Asc), Just(SortOrder::Desc)]
}

fn params() -> impl Strategy<Value = QueryParams> {
    (
        prop::sample::subsequence(SECTIONS.to_vec(), 0..=SECTIONS.len()),
        sort_key(),
        sort_order(),
        prop_oneof![
            Just(DifficultyFilter::All),
            Just(DifficultyFilter::Beginner),
            Just(DifficultyFilter::Intermediate),
            Just(DifficultyFilter::Advanced),
            Just(DifficultyFilter::Unrecognized),
        ],
        any::<bool>(),
        prop_oneof![Just(0u64), 0u64..300_000],
        prop_oneof![Just(0u32), 0u32..=100],
        -5i64..30,
    )
        .prop_map(
            |(sections, sort_by, sort_order, difficulty, include_outdated, views, completion, limit)| {
                QueryParams::default()
                    .with_sections(sections)
                    .with_sort(sort_by, sort_order)
                    .with_difficulty(difficulty)
                    .with_include_outdated(include_outdated)
                    .with_minimum_views(views)
                    .with_minimum_completion_rate(completion)
                    .with_display_limit(limit)
            },
        )
}

proptest! {
    #[test]
    fn filter_is_an_ordered_subset(pages in catalog(), params in params()) {
        let kept = filter_pages(&pages, &params, today());

        // every kept record appears in the catalog, in catalog order
        let mut cursor = pages.iter();
        for page in &kept {
            prop_assert!(cursor.any(|candidate| std::ptr::eq(candidate, *page)));
        }
    }

    #[test]
    fn score_is_deterministic_and_non_negative(pages in catalog()) {
        for page in &pages {
            let first = score_page(page, today());
            let second = score_page(page, today());
            prop_assert_eq!(first, second);
            prop_assert!(first >= 0.0);
        }
    }

    #[test]
    fn sort_is_idempotent(pages in catalog(), key in sort_key(), order in sort_order()) {
        let mut once = score_pages(&pages, today());
        sort_pages(&mut once, key, order);
        let mut twice = once.clone();
        sort_pages(&mut twice, key, order);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn limit_never_exceeds_bound(items in prop::collection::vec(any::<u8>(), 0..50), n in -10i64..60) {
        let available = items.len();
        let limited = limit_pages(items, n);
        prop_assert!(limited.len() <= n.max(0) as usize);
        prop_assert!(limited.len() <= available);
    }

    #[test]
    fn query_output_is_ranked(pages in catalog(), params in params()) {
        let result = run_query(&pages, &params, today());

        prop_assert!(result.summary.shown <= result.summary.matched);
        prop_assert!(result.summary.matched <= pages.len());
        prop_assert_eq!(result.pages.len(), result.summary.shown);

        if params.sort_by != SortKey::Unrecognized {
            let wrong_way = match params.sort_order {
                SortOrder::Asc => Ordering::Greater,
                SortOrder::Desc => Ordering::Less,
            };
            for pair in result.pages.windows(2) {
                prop_assert_ne!(
                    docstats_engine::pipeline::compare_by(&pair[0], &pair[1], params.sort_by),
                    wrong_way
                );
            }
        }
    }

    #[test]
    fn cached_dashboard_matches_plain_query(pages in catalog(), params in params()) {
        let mut dashboard = Dashboard::new();
        let cached_first = dashboard.query(&pages, &params, today());
        let cached_second = dashboard.query(&pages, &params, today());
        let plain = run_query(&pages, &params, today());

        prop_assert_eq!(&cached_first, &plain);
        prop_assert_eq!(&cached_second, &plain);
    }
}
