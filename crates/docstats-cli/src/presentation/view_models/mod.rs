pub mod common;
pub mod config;
pub mod export;
pub mod page;
pub mod query;
pub mod sections;

pub use common::{Guidance, StatusBadge, StatusLevel};
pub use config::{ConfigInitViewModel, ConfigViewModel};
pub use export::ExportViewModel;
pub use page::PageDetailViewModel;
pub use query::QueryViewModel;
pub use sections::SectionsViewModel;

use serde::Serialize;
use std::fmt;

/// Bridge from a view model to its plain-text view
pub trait CreateView {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a>;
}

/// Envelope every command hands to a renderer.
///
/// In JSON mode this is printed as-is: `{"badge": ..., "content": ..., "suggestions": [...]}`.
#[derive(Debug, Serialize)]
pub struct CommandResultViewModel<T>
where
    T: Serialize,
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<StatusBadge>,

    pub content: T,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Guidance>,
}

impl<T> CommandResultViewModel<T>
where
    T: Serialize,
{
    pub fn new(content: T) -> Self {
        Self {
            badge: None,
            content,
            suggestions: Vec::new(),
        }
    }

    pub fn with_badge(mut self, badge: StatusBadge) -> Self {
        self.badge = Some(badge);
        self
    }

    pub fn with_suggestion(mut self, guide: Guidance) -> Self {
        self.suggestions.push(guide);
        self
    }
}
