use crate::args::QueryArgs;
use crate::context::ExecutionContext;
use crate::presentation::view_models::{CommandResultViewModel, Guidance, QueryViewModel, StatusBadge};
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::Result;
use docstats_types::{DifficultyFilter, SortKey};

pub fn handle(ctx: &ExecutionContext, args: &QueryArgs) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let params = ctx.query_params(args);

    let result = docstats_engine::run_query(catalog.pages(), &params, ctx.today());
    let is_empty = result.summary.is_empty();
    let truncated = result.summary.shown < result.summary.matched;

    let mut view = CommandResultViewModel::new(QueryViewModel::new(
        ctx.catalog_source(),
        params.clone(),
        result,
    ));

    if params.sort_by == SortKey::Unrecognized {
        view = view.with_badge(StatusBadge::warning(
            "Unrecognized sort key; pages are in catalog order",
        ));
    } else if params.difficulty_filter == DifficultyFilter::Unrecognized {
        view = view.with_badge(StatusBadge::warning(
            "Unrecognized difficulty; showing every difficulty",
        ));
    }

    if is_empty {
        view = view.with_suggestion(
            Guidance::new("See which sections the catalog has").with_command("docstats sections"),
        );
    } else if truncated {
        view = view.with_suggestion(
            Guidance::new("Show more rows").with_command("docstats query --limit 50"),
        );
    }

    ConsoleRenderer::new(ctx.json_mode()).render(view)
}
