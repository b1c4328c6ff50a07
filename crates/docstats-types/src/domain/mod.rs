pub mod page;
pub mod query;

pub use page::*;
pub use query::*;
