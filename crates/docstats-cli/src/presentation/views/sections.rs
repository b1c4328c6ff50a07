use std::fmt;

use crate::presentation::formatters::{format_percent, format_thousands};
use crate::presentation::view_models::{CreateView, SectionsViewModel};

impl CreateView for SectionsViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(SectionsView { data: self })
    }
}

struct SectionsView<'a> {
    data: &'a SectionsViewModel,
}

impl<'a> fmt::Display for SectionsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} pages in {}",
            self.data.total_pages, self.data.catalog
        )?;
        writeln!(f)?;

        if self.data.sections.is_empty() {
            writeln!(f, "No sections found.")?;
            return Ok(());
        }

        writeln!(
            f,
            "{:<16} {:>6} {:>12} {:>16}",
            "SECTION", "PAGES", "VIEWS", "AVG. COMPLETION"
        )?;
        writeln!(f, "{}", "-".repeat(53))?;

        for stats in &self.data.sections {
            writeln!(
                f,
                "{:<16} {:>6} {:>12} {:>16}",
                stats.section,
                stats.pages,
                format_thousands(stats.total_views),
                format_percent(stats.average_completion_rate)
            )?;
        }

        Ok(())
    }
}
