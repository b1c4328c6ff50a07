/// Keep the first `display_limit` items; zero or negative keeps none
pub fn limit_pages<T>(mut pages: Vec<T>, display_limit: i64) -> Vec<T> {
    if display_limit <= 0 {
        pages.clear();
    } else {
        pages.truncate(usize::try_from(display_limit).unwrap_or(usize::MAX));
    }
    pages
}
