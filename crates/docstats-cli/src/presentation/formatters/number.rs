/// Abbreviated count for summary lines: `950`, `12.3k`, `1.2M`
pub fn format_compact(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}k", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

/// Full count with thousands separators: `125,000`
pub fn format_thousands(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Completion rate in [0,1] as a percentage with one decimal: `92.0%`
pub fn format_percent(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}

/// Whole seconds: `420s`
pub fn format_seconds(seconds: u64) -> String {
    format!("{}s", seconds)
}

/// Engagement score with three decimals
pub fn format_score(score: f64) -> String {
    format!("{:.3}", score)
}
