use crate::config::Config;
use crate::context::ExecutionContext;
use crate::presentation::view_models::{
    CommandResultViewModel, ConfigInitViewModel, ConfigViewModel, Guidance, StatusBadge,
};
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::{Result, bail};

pub fn show(ctx: &ExecutionContext) -> Result<()> {
    let path = ctx.config_path();
    let exists = path.exists();

    let mut view = CommandResultViewModel::new(ConfigViewModel {
        path: path.display().to_string(),
        exists,
        config: ctx.config().clone(),
    });
    if !exists {
        view = view.with_suggestion(
            Guidance::new("Create it with the defaults").with_command("docstats config init"),
        );
    }

    ConsoleRenderer::new(ctx.json_mode()).render(view)
}

pub fn init(ctx: &ExecutionContext, force: bool) -> Result<()> {
    let path = ctx.config_path();
    let overwritten = path.exists();

    if overwritten && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }

    let config = Config::default();
    config.save_to(path)?;
    tracing::info!(path = %path.display(), "config written");

    let view = CommandResultViewModel::new(ConfigInitViewModel {
        path: path.display().to_string(),
        overwritten,
        config,
    })
    .with_badge(StatusBadge::success("Config initialized"))
    .with_suggestion(
        Guidance::new("Point it at your own catalog by adding")
            .with_command("catalog = \"pages.json\""),
    );

    ConsoleRenderer::new(ctx.json_mode()).render(view)
}
