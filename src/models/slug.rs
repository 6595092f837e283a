//! Slug generation for taxonomy terms

/// Generate a URL-friendly slug from a display name.
///
/// ASCII letters and digits are kept (lowercased), non-ASCII characters are
/// kept as-is, everything else collapses into single hyphens. Leading and
/// trailing hyphens are dropped.
pub fn slugify(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut prev_hyphen = false;

    for c in name.trim().to_lowercase().chars() {
        if c.is_ascii_alphanumeric() || !c.is_ascii() {
            result.push(c);
            prev_hyphen = false;
        } else if !prev_hyphen && !result.is_empty() {
            result.push('-');
            prev_hyphen = true;
        }
    }

    result.trim_end_matches('-').to_string()
}
