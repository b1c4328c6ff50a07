/// Fit `text` into `max_len` characters, marking the cut with "..."
pub fn truncate(text: &str, max_len: usize) -> String {
    let char_count = text.chars().count();

    if char_count <= max_len {
        text.to_string()
    } else if max_len <= 3 {
        text.chars().take(max_len).collect()
    } else {
        let truncated: String = text.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Page paths keep their tail (the page name) and lose the middle:
/// `/reference/react/...Transition`
pub fn truncate_path(path: &str, max_len: usize) -> String {
    let char_count = path.chars().count();
    if char_count <= max_len || max_len <= 3 {
        return truncate(path, max_len);
    }

    let keep = max_len - 3;
    let head = keep / 2;
    let tail = keep - head;
    let start: String = path.chars().take(head).collect();
    let end: String = path.chars().skip(char_count - tail).collect();
    format!("{}...{}", start, end)
}
