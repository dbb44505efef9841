// src/core/sanitize.rs

/// Collapse whitespace runs into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Filename-safe token for a city: keep alphanumerics, space, '-' and '_',
/// trim, then turn spaces into underscores. Empty results fall back to "unknown".
pub fn sanitize_city_filename(city: &str) -> String {
    let kept: String = city
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();
    let out = kept.trim().replace(' ', "_");
    if out.is_empty() { s!("unknown") } else { out }
}
