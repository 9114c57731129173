/// Reduce a keyword to lowercase ASCII alphanumerics, replacing everything else with `_`.
pub fn sanitize_keyword(keyword: &str) -> String {
    keyword
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect()
}

/// Object name for a stored image: `<sanitized keyword>_<unix millis>.png`.
pub fn object_name(keyword: &str, unix_millis: i64) -> String {
    format!("{}_{}.png", sanitize_keyword(keyword), unix_millis)
}
