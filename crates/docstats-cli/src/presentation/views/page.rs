use std::fmt;

use crate::presentation::formatters::{
    format_percent, format_score, format_seconds, format_thousands,
};
use crate::presentation::view_models::{CreateView, PageDetailViewModel};

impl CreateView for PageDetailViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(PageDetailView { data: self })
    }
}

struct PageDetailView<'a> {
    data: &'a PageDetailViewModel,
}

impl<'a> fmt::Display for PageDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let page = &self.data.page;
        let b = &self.data.breakdown;

        writeln!(f, "{}", page.path)?;
        writeln!(
            f,
            "  Section:          {}",
            self.data.section.as_deref().unwrap_or("(none)")
        )?;
        writeln!(f, "  Difficulty:       {}", page.difficulty)?;
        writeln!(
            f,
            "  Views:            {} (#{} of {})",
            format_thousands(page.views),
            self.data.views_rank,
            self.data.catalog_size
        )?;
        writeln!(f, "  Completion Rate:  {}", format_percent(page.completion_rate))?;
        writeln!(f, "  Avg. Time Spent:  {}", format_seconds(page.avg_time_spent))?;
        writeln!(f, "  Last Updated:     {}", page.last_updated)?;
        writeln!(f)?;

        writeln!(f, "Engagement score as of {}", self.data.today)?;
        writeln!(f, "  views       {:.3} x 0.4", b.views_norm)?;
        writeln!(f, "  completion  {:.3} x 0.3", b.completion_norm)?;
        writeln!(f, "  time spent  {:.3} x 0.2", b.time_spent_norm)?;
        writeln!(
            f,
            "  freshness   {:.3}^2 x 0.1 ({:.1} months old)",
            b.freshness, b.months_old
        )?;
        writeln!(f, "  difficulty  x {:.1}", b.difficulty_multiplier)?;
        writeln!(f, "  score       {}", format_score(b.engagement_score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use docstats_engine::score_breakdown;
    use docstats_types::{Difficulty, PageRecord};

    #[test]
    fn test_breakdown_lines() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let page = PageRecord {
            path: "/learn/x".to_string(),
            views: 100_000,
            completion_rate: 0.5,
            avg_time_spent: 300,
            last_updated: today - Duration::days(390),
            difficulty: Difficulty::Intermediate,
        };
        let model = PageDetailViewModel {
            section: page.section().map(str::to_string),
            breakdown: score_breakdown(&page, today),
            page,
            today,
            views_rank: 1,
            catalog_size: 1,
        };

        let output = model.create_view().to_string();

        insta::assert_snapshot!(output, @r"
        /learn/x
          Section:          learn
          Difficulty:       intermediate
          Views:            100,000 (#1 of 1)
          Completion Rate:  50.0%
          Avg. Time Spent:  300s
          Last Updated:     2024-02-05

        Engagement score as of 2025-03-01
          views       0.400 x 0.4
          completion  0.500 x 0.3
          time spent  0.500 x 0.2
          freshness   0.458^2 x 0.1 (13.0 months old)
          difficulty  x 1.0
          score       0.431
        ");
    }
}
