use crate::context::ExecutionContext;
use crate::presentation::view_models::{CommandResultViewModel, SectionsViewModel};
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::Result;
use docstats_engine::section_overview;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let catalog = ctx.load_catalog()?;

    let view = CommandResultViewModel::new(SectionsViewModel {
        catalog: ctx.catalog_source().to_string(),
        total_pages: catalog.len(),
        sections: section_overview(catalog.pages()),
    });

    ConsoleRenderer::new(ctx.json_mode()).render(view)
}
