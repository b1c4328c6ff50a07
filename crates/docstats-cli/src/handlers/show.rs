use crate::context::ExecutionContext;
use crate::presentation::view_models::{CommandResultViewModel, Guidance, PageDetailViewModel};
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::{Result, anyhow};
use docstats_engine::score_breakdown;

pub fn handle(ctx: &ExecutionContext, path: &str) -> Result<()> {
    let catalog = ctx.load_catalog()?;

    // `learn/x` and `/learn/x` name the same page
    let page = catalog
        .get(path)
        .or_else(|| catalog.get(&format!("/{}", path.trim_start_matches('/'))))
        .ok_or_else(|| anyhow!("Page not found in {}: {}", ctx.catalog_source(), path))?;

    let views_rank = 1 + catalog.iter().filter(|p| p.views > page.views).count();

    let view = CommandResultViewModel::new(PageDetailViewModel {
        page: page.clone(),
        section: page.section().map(str::to_string),
        today: ctx.today(),
        views_rank,
        catalog_size: catalog.len(),
        breakdown: score_breakdown(page, ctx.today()),
    })
    .with_suggestion(
        Guidance::new("Compare against its section")
            .with_command(format!(
                "docstats query --section {} --sort-by engagement",
                page.section().unwrap_or("learn")
            )),
    );

    ConsoleRenderer::new(ctx.json_mode()).render(view)
}
