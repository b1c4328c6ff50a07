use crate::args::QueryArgs;
use crate::context::ExecutionContext;
use crate::presentation::view_models::{CommandResultViewModel, ExportViewModel, StatusBadge};
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::{Context, Result};
use docstats_types::ScoredPageRecord;
use std::io::Write;
use std::path::Path;

const HEADER: [&str; 8] = [
    "path",
    "section",
    "views",
    "completionRate",
    "avgTimeSpent",
    "engagementScore",
    "lastUpdated",
    "difficulty",
];

pub fn handle(ctx: &ExecutionContext, args: &QueryArgs, output: Option<&Path>) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let params = ctx.query_params(args);
    let result = docstats_engine::run_query(catalog.pages(), &params, ctx.today());

    let Some(path) = output else {
        // CSV straight to stdout, no envelope
        let stdout = std::io::stdout();
        return write_csv(stdout.lock(), &result.pages);
    };

    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_csv(file, &result.pages)?;
    tracing::info!(path = %path.display(), rows = result.pages.len(), "export written");

    let view = CommandResultViewModel::new(ExportViewModel {
        output_path: path.display().to_string(),
        exported_count: result.pages.len(),
        headline: result.summary.headline(),
    })
    .with_badge(StatusBadge::success("Export complete"));

    ConsoleRenderer::new(ctx.json_mode()).render(view)
}

pub(crate) fn write_csv<W: Write>(writer: W, pages: &[ScoredPageRecord]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(HEADER)?;

    for page in pages {
        wtr.write_record([
            page.path.as_str(),
            page.section().unwrap_or(""),
            &page.views.to_string(),
            &page.completion_rate.to_string(),
            &page.avg_time_spent.to_string(),
            &format!("{:.6}", page.engagement_score),
            &page.last_updated.to_string(),
            page.difficulty.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
