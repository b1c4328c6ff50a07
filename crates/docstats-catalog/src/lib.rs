// Page catalog
// Loads and validates the page records the pipeline runs over

mod catalog;
mod error;
mod sample;

// Public API
pub use catalog::Catalog;
pub use error::{Error, Result};
pub use sample::sample_catalog;
