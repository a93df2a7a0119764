//! Heading anchor allocation.
//!
//! Markdown renderers derive a fragment identifier from each heading and
//! disambiguate repeats with a numeric suffix: the first `map` heading is
//! `#map`, the second `#map-1`, the third `#map-2`. Because the suffix
//! depends on how many times a name has already been seen, anchors must be
//! allocated in exactly the order headings are written.

use indexmap::IndexMap;

/// Convert a heading name into a URL-fragment-safe slug.
///
/// # Rules
/// 1. Lowercase the entire string
/// 2. Strip `.` characters
/// 3. Replace each run of whitespace with a single `-`
#[must_use]
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .map(|word| word.replace('.', ""))
        .collect::<Vec<_>>()
        .join("-")
}

/// Running record of every heading name seen during one document build.
///
/// Only grows; a fresh registry is created for each build so repeated
/// builds over the same input allocate identical anchors.
#[derive(Debug, Clone, Default)]
pub struct AnchorRegistry {
    occurrences: IndexMap<String, usize>,
}

impl AnchorRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one more occurrence of `name` and return its anchor.
    ///
    /// The first occurrence gets the bare slug; occurrence `n` (1-based,
    /// `n > 1`) gets the slug suffixed with `-{n - 1}`.
    pub fn allocate(&mut self, name: &str) -> String {
        let count = self.occurrences.entry(name.to_string()).or_insert(0);
        *count += 1;

        let slug = slugify(name);
        if *count > 1 {
            format!("{slug}-{}", *count - 1)
        } else {
            slug
        }
    }

    /// Number of times `name` has been registered so far.
    #[must_use]
    pub fn occurrences(&self, name: &str) -> usize {
        self.occurrences.get(name).copied().unwrap_or(0)
    }

    /// Number of registrations across all names.
    #[must_use]
    pub fn total(&self) -> usize {
        self.occurrences.values().sum()
    }

    /// Distinct names in first-seen order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.occurrences.keys().map(String::as_str)
    }
}
