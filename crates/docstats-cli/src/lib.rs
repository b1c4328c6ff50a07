// docstats CLI
//
// Thin presentation layer over docstats-engine: argument parsing, TOML
// config, logging init and rendering (plain table, JSON envelope, CSV).
// Every ranking decision lives in the engine; handlers only wire inputs
// to `run_query` / `section_overview` and hand view models to a renderer.

mod args;
mod commands;
pub mod config;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;

pub use args::{Cli, Commands, ConfigCommand, LogLevel, OutputFormat, QueryArgs};
pub use commands::run;
