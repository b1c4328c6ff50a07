use super::args::{Cli, Commands, ConfigCommand, QueryArgs};
use super::handlers;
use crate::context::ExecutionContext;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let ctx = ExecutionContext::new(cli.catalog, cli.config, cli.today.as_deref(), cli.format)?;

    let Some(command) = cli.command else {
        return handlers::query::handle(&ctx, &QueryArgs::default());
    };

    match command {
        Commands::Query { query } => handlers::query::handle(&ctx, &query),

        Commands::Show { path } => handlers::show::handle(&ctx, &path),

        Commands::Sections => handlers::sections::handle(&ctx),

        Commands::Export { query, output } => {
            handlers::export::handle(&ctx, &query, output.as_deref())
        }

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(&ctx),
            ConfigCommand::Init { force } => handlers::config::init(&ctx, force),
        },
    }
}
