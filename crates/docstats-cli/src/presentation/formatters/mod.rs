pub mod number;
pub mod text;

pub use number::{format_compact, format_percent, format_score, format_seconds, format_thousands};
pub use text::{truncate, truncate_path};
