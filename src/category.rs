//! Page categorization
//!
//! Every page lands in exactly one of six fixed categories, decided from the
//! shape of its URL. Categories are emitted in a fixed priority order that is
//! part of the output contract.

use crate::page::PageRecord;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// Topical bucket of a documentation page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    GettingStarted,
    ApiReference,
    GuidesAndTutorials,
    Examples,
    Concepts,
    GeneralDocumentation,
}

impl Category {
    /// All categories in output priority order
    pub const PRIORITY: [Category; 6] = [
        Category::GettingStarted,
        Category::ApiReference,
        Category::GuidesAndTutorials,
        Category::Examples,
        Category::Concepts,
        Category::GeneralDocumentation,
    ];

    /// Display name used in reports and JSON
    pub fn name(&self) -> &'static str {
        match self {
            Self::GettingStarted => "Getting Started",
            Self::ApiReference => "API Reference",
            Self::GuidesAndTutorials => "Guides & Tutorials",
            Self::Examples => "Examples",
            Self::Concepts => "Concepts",
            Self::GeneralDocumentation => "General Documentation",
        }
    }

    /// Position in [`Category::PRIORITY`]
    pub fn priority(&self) -> usize {
        match self {
            Self::GettingStarted => 0,
            Self::ApiReference => 1,
            Self::GuidesAndTutorials => 2,
            Self::Examples => 3,
            Self::Concepts => 4,
            Self::GeneralDocumentation => 5,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Categorizes a page by its URL
///
/// Rules are checked against the lowercased URL in this order; the first
/// match wins:
///
/// | Rule | Category |
/// |------|----------|
/// | `/api/`, `/reference/`, `/ref/`, ends with `/api`, "reference" | API Reference |
/// | `/example/`, `/examples/`, `/sample/`, "example" | Examples |
/// | `/guide/`, `/guides/`, `/tutorial/`, `/tutorials/`, "guide", "tutorial" | Guides & Tutorials |
/// | `/quick`, `/start`, `/getting`, "quickstart", "introduction" | Getting Started |
/// | `/concept/`, `/concepts/`, `/overview/`, "concept", "overview" | Concepts |
/// | anything else | General Documentation |
///
/// # Examples
///
/// ```
/// use sumi_scroll::category::{categorize_url, Category};
///
/// assert_eq!(categorize_url("https://x.com/api/widgets"), Category::ApiReference);
/// assert_eq!(categorize_url("https://x.com/guide/start"), Category::GuidesAndTutorials);
/// assert_eq!(categorize_url("https://x.com/blog/post"), Category::GeneralDocumentation);
/// ```
pub fn categorize_url(url: &str) -> Category {
    let url = url.to_lowercase();
    let has = |patterns: &[&str]| patterns.iter().any(|p| url.contains(p));

    if has(&["/api/", "/reference/", "/ref/", "reference"]) || url.ends_with("/api") {
        Category::ApiReference
    } else if has(&["/example/", "/examples/", "/sample/", "example"]) {
        Category::Examples
    } else if has(&[
        "/guide/",
        "/guides/",
        "/tutorial/",
        "/tutorials/",
        "guide",
        "tutorial",
    ]) {
        Category::GuidesAndTutorials
    } else if has(&["/quick", "/start", "/getting", "quickstart", "introduction"]) {
        Category::GettingStarted
    } else if has(&["/concept/", "/concepts/", "/overview/", "concept", "overview"]) {
        Category::Concepts
    } else {
        Category::GeneralDocumentation
    }
}

/// Items grouped by category, in priority order
///
/// Only categories with at least one item are present. Items keep their
/// input order within a group.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroups<T> {
    groups: Vec<(Category, Vec<T>)>,
}

impl<T> CategoryGroups<T> {
    /// Groups items by the category returned from `category_of`
    pub fn group_by<I, F>(items: I, category_of: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> Category,
    {
        let mut buckets: Vec<Vec<T>> = Category::PRIORITY.iter().map(|_| Vec::new()).collect();
        for item in items {
            buckets[category_of(&item).priority()].push(item);
        }

        let groups = Category::PRIORITY
            .into_iter()
            .zip(buckets)
            .filter(|(_, items)| !items.is_empty())
            .collect();

        Self { groups }
    }

    /// Present categories in output order
    pub fn categories(&self) -> Vec<Category> {
        self.groups.iter().map(|(category, _)| *category).collect()
    }

    /// Items of one category, if present
    pub fn get(&self, category: Category) -> Option<&[T]> {
        self.groups
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, items)| items.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &[T])> {
        self.groups
            .iter()
            .map(|(category, items)| (*category, items.as_slice()))
    }

    /// Total number of items across all groups
    pub fn total(&self) -> usize {
        self.groups.iter().map(|(_, items)| items.len()).sum()
    }

    /// Transforms every item, keeping the grouping
    pub fn map<U, F>(self, mut f: F) -> CategoryGroups<U>
    where
        F: FnMut(T) -> U,
    {
        CategoryGroups {
            groups: self
                .groups
                .into_iter()
                .map(|(category, items)| (category, items.into_iter().map(&mut f).collect()))
                .collect(),
        }
    }
}

/// Serialized as a JSON object keyed by category name, in priority order
impl<T: Serialize> Serialize for CategoryGroups<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (category, items) in &self.groups {
            map.serialize_entry(category.name(), items)?;
        }
        map.end()
    }
}

/// Groups page records by their category
pub fn categorize_pages(pages: Vec<PageRecord>) -> CategoryGroups<PageRecord> {
    CategoryGroups::group_by(pages, |page| page.category)
}
