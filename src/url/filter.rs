use url::Url;

/// Path fragments that mark a URL as documentation
const DOC_PATTERNS: &[&str] = &[
    "/docs",
    "/api",
    "/guide",
    "/reference",
    "/tutorial",
    "/examples",
    "/ref/",
    "/documentation",
];

/// Path fragments of sections that are clearly not documentation
const EXCLUDED_PATTERNS: &[&str] = &[
    "/blog",
    "/changelog",
    "/careers",
    "/about",
    "/contact",
    "/privacy",
    "/terms",
];

/// Checks whether a URL path looks like part of a documentation set
///
/// The filter is permissive: a path is kept when it matches a documentation
/// pattern, or when it matches none of the excluded sections.
///
/// # Examples
///
/// ```
/// use sumi_scroll::url::is_documentation_path;
///
/// assert!(is_documentation_path("/docs/intro"));
/// assert!(is_documentation_path("/pricing"));
/// assert!(!is_documentation_path("/blog/news"));
/// assert!(is_documentation_path("/docs/blog-integration"));
/// ```
pub fn is_documentation_path(path: &str) -> bool {
    let path = path.to_lowercase();

    if DOC_PATTERNS.iter().any(|p| path.contains(p)) {
        return true;
    }

    !EXCLUDED_PATTERNS.iter().any(|p| path.contains(p))
}

/// Keeps only the URLs whose path passes [`is_documentation_path`]
///
/// Strings that are not absolute URLs are dropped.
pub fn filter_documentation_urls(urls: Vec<String>) -> Vec<String> {
    urls.into_iter()
        .filter(|raw| match Url::parse(raw.trim()) {
            Ok(url) => is_documentation_path(url.path()),
            Err(_) => false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documentation_patterns_kept() {
        assert!(is_documentation_path("/docs"));
        assert!(is_documentation_path("/API/widgets"));
        assert!(is_documentation_path("/guides/setup"));
        assert!(is_documentation_path("/ref/core"));
        assert!(is_documentation_path("/documentation/index.html"));
    }

    #[test]
    fn test_excluded_sections_dropped() {
        for path in [
            "/blog/post",
            "/changelog",
            "/careers/open-roles",
            "/about-us",
            "/contact",
            "/privacy",
            "/terms-of-service",
        ] {
            assert!(!is_documentation_path(path), "{} should be excluded", path);
        }
    }

    #[test]
    fn test_unknown_paths_kept() {
        assert!(is_documentation_path("/"));
        assert!(is_documentation_path("/install"));
    }

    #[test]
    fn test_filter_documentation_urls() {
        let urls = vec![
            "https://docs.example.com/docs/intro".to_string(),
            "https://docs.example.com/api/widgets".to_string(),
            "https://docs.example.com/blog/news".to_string(),
            "garbage".to_string(),
        ];

        let kept = filter_documentation_urls(urls);
        assert_eq!(
            kept,
            vec![
                "https://docs.example.com/docs/intro".to_string(),
                "https://docs.example.com/api/widgets".to_string(),
            ]
        );
    }
}
