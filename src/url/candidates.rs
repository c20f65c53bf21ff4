use std::collections::HashSet;
use url::Url;

/// Ordered, deduplicated set of candidate documentation URLs
///
/// Identity is the serialized absolute URL. The first insertion of a URL
/// fixes its position; later duplicates are ignored. The seed URL is always
/// the first entry.
#[derive(Debug, Clone)]
pub struct CandidateSet {
    urls: Vec<String>,
    seen: HashSet<String>,
}

impl CandidateSet {
    /// Creates a set whose first entry is the seed URL
    pub fn new(seed: &Url) -> Self {
        let seed = seed.to_string();
        let mut seen = HashSet::new();
        seen.insert(seed.clone());
        Self {
            urls: vec![seed],
            seen,
        }
    }

    /// Adds a URL, returning true if it was not already present
    ///
    /// Strings that do not parse as absolute URLs are ignored.
    pub fn insert(&mut self, url: &str) -> bool {
        let normalized = match Url::parse(url.trim()) {
            Ok(parsed) => parsed.to_string(),
            Err(e) => {
                tracing::debug!("Skipping unparsable candidate {}: {}", url, e);
                return false;
            }
        };

        if !self.seen.insert(normalized.clone()) {
            return false;
        }
        self.urls.push(normalized);
        true
    }

    /// Adds every URL in order
    pub fn extend<I, S>(&mut self, urls: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for url in urls {
            self.insert(url.as_ref());
        }
    }

    /// The seed URL
    pub fn seed(&self) -> &str {
        &self.urls[0]
    }

    /// Number of distinct candidates, seed included
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// Always false: the seed is present from construction
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// All candidates in discovery order
    pub fn as_slice(&self) -> &[String] {
        &self.urls
    }

    /// The first `cap` candidates; the seed survives any cap of at least one
    pub fn capped(&self, cap: usize) -> Vec<String> {
        self.urls.iter().take(cap.max(1)).cloned().collect()
    }
}
