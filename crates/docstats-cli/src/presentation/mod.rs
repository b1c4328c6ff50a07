// Presentation layer
//
// view_models: serializable data handed to a renderer (JSON mode prints these)
// views:       Display adapters turning a view model into plain text
// formatters:  column/number helpers shared by views and the CSV export
// renderers:   where the output goes (stdout, plain or JSON envelope)

pub mod formatters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel};
