use super::common::QueryArgs;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Rank pages (the default when no command is given)")]
    Query {
        #[command(flatten)]
        query: QueryArgs,
    },

    #[command(about = "Show one page with its engagement score breakdown")]
    Show {
        #[arg(help = "Page path, e.g. /learn/managing-state")]
        path: String,
    },

    #[command(about = "Page counts and views per section")]
    Sections,

    #[command(about = "Export a ranked query as CSV")]
    Export {
        #[command(flatten)]
        query: QueryArgs,

        #[arg(long, short, help = "Destination file (stdout when omitted)")]
        output: Option<PathBuf>,
    },

    #[command(about = "Inspect or create the config file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective config and where it was loaded from")]
    Show,

    #[command(about = "Write a config file populated with the defaults")]
    Init {
        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },
}
