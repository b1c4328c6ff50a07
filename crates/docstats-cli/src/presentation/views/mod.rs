// Plain-text views. Each file implements `CreateView` for its view model.

mod config;
mod export;
mod page;
mod query;
mod sections;
