use rustc_hash::FxHashMap;

use std::cmp::Ordering;

/// Index of unique URLs mapped back to the files that referenced them.
///
/// Built append-only during extraction. A URL appears as a key exactly once
/// no matter how often it was seen; every sighting appends the source file
/// to the referencing list, so a URL referenced twice by one file carries
/// that file twice. Every key has at least one referencing file.
#[derive(Debug, Default)]
pub struct UrlIndex {
    entries: FxHashMap<String, Vec<String>>,
    total_references: usize,
}

impl UrlIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one sighting of `url` in `file`.
    pub fn record(&mut self, url: String, file: &str) {
        self.entries.entry(url).or_default().push(file.to_string());
        self.total_references += 1;
    }

    /// Number of unique URLs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total sightings across all files, duplicates included.
    pub fn total_references(&self) -> usize {
        self.total_references
    }

    /// Referencing files for `url`, in the order the sightings were made.
    pub fn files_for(&self, url: &str) -> Option<&[String]> {
        self.entries.get(url).map(|files| files.as_slice())
    }

    /// Consume the index into entries sorted by URL.
    ///
    /// Key order in the underlying map is arbitrary; checking and reporting
    /// need a stable order.
    pub fn into_sorted_entries(self) -> Vec<UrlEntry> {
        let mut entries: Vec<UrlEntry> = self
            .entries
            .into_iter()
            .map(|(url, files)| UrlEntry { url, files })
            .collect();
        entries.sort();
        entries
    }
}

/// A unique URL together with its referencing files.
#[derive(Debug, Eq, Clone)]
pub struct UrlEntry {
    /// The URL, trailing punctuation already stripped
    pub url: String,
    /// Files the URL was seen in, first sighting first
    pub files: Vec<String>,
}

impl Ord for UrlEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.url.cmp(&other.url)
    }
}

impl PartialOrd for UrlEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for UrlEntry {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn test_record__same_url_in_two_files_dedups() {
        let mut index = UrlIndex::new();
        index.record("https://example.com".to_string(), "a.md");
        index.record("https://example.com".to_string(), "b.md");

        assert_eq!(index.len(), 1);
        assert_eq!(index.total_references(), 2);
        assert_eq!(
            index.files_for("https://example.com").unwrap(),
            &["a.md".to_string(), "b.md".to_string()]
        );
    }

    #[test]
    fn test_record__duplicate_in_same_file_keeps_both_sightings() {
        let mut index = UrlIndex::new();
        index.record("https://example.com".to_string(), "a.md");
        index.record("https://example.com".to_string(), "a.md");

        assert_eq!(index.len(), 1);
        assert_eq!(
            index.files_for("https://example.com").unwrap(),
            &["a.md".to_string(), "a.md".to_string()]
        );
    }

    #[test]
    fn test_record__distinct_urls_stay_distinct() {
        let mut index = UrlIndex::new();
        index.record("https://example.com/a".to_string(), "a.md");
        index.record("https://example.com/b".to_string(), "a.md");

        assert_eq!(index.len(), 2);
        assert_eq!(index.total_references(), 2);
    }

    #[test]
    fn test_files_for__unknown_url() {
        let index = UrlIndex::new();
        assert!(index.files_for("https://unknown.example").is_none());
        assert!(index.is_empty());
    }

    #[test]
    fn test_into_sorted_entries__sorted_by_url() {
        let mut index = UrlIndex::new();
        index.record("https://b.example".to_string(), "file.md");
        index.record("https://a.example".to_string(), "file.md");
        index.record("https://c.example".to_string(), "file.md");

        let entries = index.into_sorted_entries();
        let urls: Vec<&str> = entries.iter().map(|entry| entry.url.as_str()).collect();

        assert_eq!(
            urls,
            vec!["https://a.example", "https://b.example", "https://c.example"]
        );
    }

    #[test]
    fn test_into_sorted_entries__every_entry_has_a_file() {
        let mut index = UrlIndex::new();
        index.record("https://a.example".to_string(), "a.md");
        index.record("https://b.example".to_string(), "b.md");

        for entry in index.into_sorted_entries() {
            assert!(!entry.files.is_empty());
        }
    }

    #[test]
    fn test_url_entry_ordering() {
        let a = UrlEntry {
            url: "https://a.example".to_string(),
            files: vec!["file.md".to_string()],
        };
        let b = UrlEntry {
            url: "https://b.example".to_string(),
            files: vec!["file.md".to_string()],
        };

        assert!(a < b);
        assert!(b > a);
    }

    #[test]
    fn test_url_entry_equality_ignores_files() {
        let from_readme = UrlEntry {
            url: "https://example.com".to_string(),
            files: vec!["readme.md".to_string()],
        };
        let from_guide = UrlEntry {
            url: "https://example.com".to_string(),
            files: vec!["guide.rst".to_string()],
        };

        assert_eq!(from_readme, from_guide);
    }
}
