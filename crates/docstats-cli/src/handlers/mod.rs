pub mod config;
pub mod export;
pub mod query;
pub mod sections;
pub mod show;
