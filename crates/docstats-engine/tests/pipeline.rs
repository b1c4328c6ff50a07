//! End-to-end pipeline behaviour over the bundled sample catalog.
//!
//! `today` is pinned so freshness-dependent results are reproducible.

use chrono::{Duration, NaiveDate};
use docstats_catalog::sample_catalog;
use docstats_engine::{QueryResult, run_query};
use docstats_types::{
    Difficulty, DifficultyFilter, PageRecord, QueryParams, SortKey, SortOrder,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
}

fn paths(result: &QueryResult) -> Vec<&str> {
    result.pages.iter().map(|p| p.path.as_str()).collect()
}

#[test]
fn test_default_query_top_ten_by_views() {
    let catalog = sample_catalog();

    let result = run_query(catalog.pages(), &QueryParams::default(), today());

    insta::assert_json_snapshot!(paths(&result), @r#"
    [
      "/reference/react",
      "/reference/react/useState",
      "/reference/react-dom",
      "/reference/react/useEffect",
      "/learn/describing-the-ui",
      "/learn/managing-state",
      "/reference/react/useRef",
      "/reference/react/useContext",
      "/reference/react/useMemo",
      "/learn/adding-interactivity"
    ]
    "#);
    assert_eq!(result.summary.catalog_size, 17);
    assert_eq!(result.summary.matched, 17);
    assert_eq!(result.summary.shown, 10);
    assert_eq!(result.summary.headline(), "Showing top 10 pages by views");
}

#[test]
fn test_view_ties_keep_catalog_order() {
    // adding-interactivity and useCallback both have 98,200 views
    let catalog = sample_catalog();
    let tied = |result: &QueryResult| -> Vec<String> {
        result
            .pages
            .iter()
            .filter(|p| p.views == 98_200)
            .map(|p| p.path.clone())
            .collect()
    };

    for order in [SortOrder::Desc, SortOrder::Asc] {
        let params = QueryParams::default()
            .with_sort(SortKey::Views, order)
            .with_display_limit(100);
        let result = run_query(catalog.pages(), &params, today());
        assert_eq!(
            tied(&result),
            vec![
                "/learn/adding-interactivity".to_string(),
                "/reference/react/useCallback".to_string()
            ],
            "tie order changed for {:?}",
            order
        );
    }
}

#[test]
fn test_single_record_engagement_example() {
    let pages = vec![PageRecord {
        path: "/learn/x".to_string(),
        views: 100_000,
        completion_rate: 0.5,
        avg_time_spent: 300,
        last_updated: today() - Duration::days(13 * 30),
        difficulty: Difficulty::Intermediate,
    }];
    let params = QueryParams::default()
        .with_sections(["learn"])
        .with_include_outdated(true);

    let result = run_query(&pages, &params, today());

    assert_eq!(result.pages.len(), 1);
    let score = result.pages[0].engagement_score;
    assert!((score - 0.4310).abs() < 1e-4, "score was {}", score);
}

#[test]
fn test_minimum_completion_rate_eighty() {
    let catalog = sample_catalog();
    let params = QueryParams::default()
        .with_minimum_completion_rate(80)
        .with_display_limit(100);

    let result = run_query(catalog.pages(), &params, today());

    assert_eq!(paths(&result), vec!["/reference/react"]);
    assert!(result.pages.iter().all(|p| p.completion_rate >= 0.80));
}

#[test]
fn test_blog_section_on_docs_only_catalog_is_empty() {
    let catalog = sample_catalog();
    let docs_only: Vec<PageRecord> = catalog
        .iter()
        .filter(|p| matches!(p.section(), Some("learn") | Some("reference")))
        .cloned()
        .collect();
    let params = QueryParams::default().with_sections(["blog"]);

    let result = run_query(&docs_only, &params, today());

    assert!(result.pages.is_empty());
    assert_eq!(result.summary.shown, 0);
    assert_eq!(result.summary.matched, 0);
    assert_eq!(result.summary.average_engagement, None);
}

#[test]
fn test_empty_catalog_reports_zero() {
    let result = run_query(&[], &QueryParams::default(), today());

    assert!(result.pages.is_empty());
    assert_eq!(result.summary.catalog_size, 0);
    assert_eq!(result.summary.headline(), "Showing top 0 pages by views");
}

#[test]
fn test_exclude_outdated_drops_old_blog_posts() {
    let catalog = sample_catalog();
    let params = QueryParams::default()
        .with_include_outdated(false)
        .with_display_limit(100);

    let result = run_query(catalog.pages(), &params, today());

    assert_eq!(result.summary.matched, 15);
    assert!(result.pages.iter().all(|p| p.section() != Some("blog")));
}

#[test]
fn test_difficulty_filter() {
    let catalog = sample_catalog();
    let params = QueryParams::default()
        .with_difficulty(DifficultyFilter::Advanced)
        .with_sort(SortKey::LastUpdated, SortOrder::Asc);

    let result = run_query(catalog.pages(), &params, today());

    assert_eq!(
        paths(&result),
        vec![
            "/learn/escape-hatches",
            "/reference/react/useReducer",
            "/reference/react/useMemo",
            "/reference/react/useCallback",
        ]
    );
}

#[test]
fn test_unrecognized_params_fall_back() {
    let catalog = sample_catalog();
    let params: QueryParams = serde_json::from_str(
        r#"{"sortBy": "popularity", "difficultyFilter": "expert", "displayLimit": 100}"#,
    )
    .unwrap();

    let result = run_query(catalog.pages(), &params, today());

    assert_eq!(result.pages.len(), catalog.len());
    let catalog_paths: Vec<&str> = catalog.iter().map(|p| p.path.as_str()).collect();
    assert_eq!(paths(&result), catalog_paths);
}

#[test]
fn test_engagement_ranking_is_descending() {
    let catalog = sample_catalog();
    let params = QueryParams::default().with_sort(SortKey::Engagement, SortOrder::Desc);

    let result = run_query(catalog.pages(), &params, today());

    for pair in result.pages.windows(2) {
        assert!(pair[0].engagement_score >= pair[1].engagement_score);
    }
}

#[test]
fn test_non_positive_limit_is_empty() {
    let catalog = sample_catalog();

    for limit in [0, -1] {
        let params = QueryParams::default().with_display_limit(limit);
        let result = run_query(catalog.pages(), &params, today());
        assert!(result.pages.is_empty());
        assert_eq!(result.summary.matched, 17);
    }
}

#[test]
fn test_catalog_is_not_mutated() {
    let catalog = sample_catalog();
    let before = catalog.clone();

    let _ = run_query(catalog.pages(), &QueryParams::default(), today());

    assert_eq!(catalog, before);
}

#[test]
fn test_huge_view_counts_do_not_overflow_summary() {
    let huge = u64::MAX / 2 + 1;
    let pages: Vec<PageRecord> = ["/learn/a", "/learn/b"]
        .into_iter()
        .map(|path| PageRecord {
            path: path.to_string(),
            views: huge,
            completion_rate: 0.5,
            avg_time_spent: 120,
            last_updated: today() - Duration::days(30),
            difficulty: Difficulty::Beginner,
        })
        .collect();

    let result = run_query(&pages, &QueryParams::default(), today());

    assert_eq!(result.summary.shown, 2);
    assert_eq!(result.summary.total_views, u64::MAX);
}
