//! URL utilities for resolving candidate references against a base.

use url::Url;

/// Check if a string is a valid absolute URL.
///
/// # Returns
/// * `(is_absolute, parsed_url)` - Whether URL is absolute and the parsed URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if s.is_empty() {
        return (false, None);
    }

    if !s.starts_with("http://") && !s.starts_with("https://") {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) => {
            if url.host().is_some() {
                (true, Some(url))
            } else {
                (false, None)
            }
        }
        Err(_) => (false, None),
    }
}

/// Resolve a possibly-relative URL against an optional base.
///
/// Already-absolute URLs are returned unchanged, so resolution is idempotent.
/// Special schemes (`data:`, `javascript:`, `mailto:`, `tel:`) are preserved
/// as-is, and resolution failures fall back to the original string.
#[must_use]
pub fn resolve(base: Option<&Url>, url_str: &str) -> String {
    let url_str = url_str.trim();

    if url_str.is_empty() {
        return String::new();
    }

    if url_str.starts_with("data:")
        || url_str.starts_with("javascript:")
        || url_str.starts_with("mailto:")
        || url_str.starts_with("tel:")
    {
        return url_str.to_string();
    }

    let (is_abs, _) = is_absolute_url(url_str);
    if is_abs {
        return url_str.to_string();
    }

    match base {
        Some(base) => base
            .join(url_str)
            .map_or_else(|_| url_str.to_string(), |resolved| resolved.to_string()),
        None => url_str.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(clippy::unwrap_used)]
    fn base() -> Url {
        Url::parse("https://example.com/posts/article").unwrap()
    }

    #[test]
    fn relative_urls_resolve_against_base() {
        let base = base();
        assert_eq!(
            resolve(Some(&base), "/img/cover.jpg"),
            "https://example.com/img/cover.jpg"
        );
        assert_eq!(
            resolve(Some(&base), "cover.jpg"),
            "https://example.com/posts/cover.jpg"
        );
    }

    #[test]
    fn absolute_urls_are_unchanged_by_any_base() {
        let base = base();
        assert_eq!(
            resolve(Some(&base), "https://cdn.example.org/a.png"),
            "https://cdn.example.org/a.png"
        );
        assert_eq!(
            resolve(None, "https://cdn.example.org/a.png"),
            "https://cdn.example.org/a.png"
        );
    }

    #[test]
    fn resolution_is_idempotent() {
        let base = base();
        let once = resolve(Some(&base), "/img/cover.jpg");
        assert_eq!(resolve(Some(&base), &once), once);
    }

    #[test]
    fn special_schemes_pass_through() {
        let base = base();
        assert_eq!(resolve(Some(&base), "data:image/png;base64,AA"), "data:image/png;base64,AA");
        assert_eq!(resolve(Some(&base), "mailto:jane@example.com"), "mailto:jane@example.com");
    }

    #[test]
    fn missing_base_leaves_relative_urls_alone() {
        assert_eq!(resolve(None, "img/cover.jpg"), "img/cover.jpg");
        assert_eq!(resolve(None, ""), "");
    }

    #[test]
    fn is_absolute_requires_scheme_and_host() {
        assert!(is_absolute_url("https://example.com/a").0);
        assert!(!is_absolute_url("/relative/path").0);
        assert!(!is_absolute_url("ftp://example.com/a").0);
        assert!(!is_absolute_url("").0);
    }
}
