use std::fmt;

use crate::presentation::formatters::{
    format_compact, format_percent, format_score, format_seconds, format_thousands, truncate_path,
};
use crate::presentation::view_models::{CreateView, QueryViewModel};

const PATH_WIDTH: usize = 36;

impl CreateView for QueryViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(QueryView { data: self })
    }
}

struct QueryView<'a> {
    data: &'a QueryViewModel,
}

impl<'a> fmt::Display for QueryView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data;
        writeln!(f, "{}", data.headline)?;
        writeln!(f)?;

        if data.pages.is_empty() {
            writeln!(f, "No pages match the current filters.")?;
        } else {
            writeln!(
                f,
                "{:<width$} {:>9} {:>16} {:>16} {:>17} {:>13}",
                "PAGE",
                "VIEWS",
                "COMPLETION RATE",
                "AVG. TIME SPENT",
                "ENGAGEMENT SCORE",
                "LAST UPDATED",
                width = PATH_WIDTH
            )?;
            writeln!(f, "{}", "-".repeat(PATH_WIDTH + 76))?;

            for page in &data.pages {
                writeln!(
                    f,
                    "{:<width$} {:>9} {:>16} {:>16} {:>17} {:>13}",
                    truncate_path(&page.path, PATH_WIDTH),
                    format_thousands(page.views),
                    format_percent(page.completion_rate),
                    format_seconds(page.avg_time_spent),
                    format_score(page.engagement_score),
                    page.last_updated.to_string(),
                    width = PATH_WIDTH
                )?;
            }
        }

        writeln!(f)?;
        write!(
            f,
            "{} of {} pages matched ({}, as of {})",
            data.summary.matched, data.summary.catalog_size, data.catalog, data.today
        )?;
        if let Some(average) = data.summary.average_engagement {
            write!(
                f,
                ". Total views {}, average engagement {}",
                format_compact(data.summary.total_views),
                format_score(average)
            )?;
        }
        writeln!(f)
    }
}
