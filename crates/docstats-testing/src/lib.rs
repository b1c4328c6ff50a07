//! Testing infrastructure for docstats integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: isolated config/catalog directory plus a pinned `--today`
//! - `assertions`: checks over the JSON envelope the CLI prints
//! - `fixtures`: page record builders and catalog files

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use fixtures::PageBuilder;
pub use world::{CliResult, TestWorld};
