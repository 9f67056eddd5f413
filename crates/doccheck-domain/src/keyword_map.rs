//! Keyword maps - per-document and per-corpus extraction results
//!
//! Both maps preserve insertion order. Reports list documents and keywords
//! in the order they were encountered, so a hash map is not an option here.

/// Keyword to value mapping for a single document
///
/// Holds at most one value per keyword. The first value inserted for a
/// keyword wins; later insertions for the same keyword are discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentKeywordMap {
    entries: Vec<(String, String)>,
}

impl DocumentKeywordMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a value for a keyword
    ///
    /// Returns `false` (and leaves the map untouched) when the keyword
    /// already has a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use doccheck_domain::DocumentKeywordMap;
    ///
    /// let mut map = DocumentKeywordMap::new();
    /// assert!(map.insert("budget", "$5000"));
    /// assert!(!map.insert("budget", "$7000"));
    /// assert_eq!(map.get("budget"), Some("$5000"));
    /// ```
    pub fn insert(&mut self, keyword: impl Into<String>, value: impl Into<String>) -> bool {
        let keyword = keyword.into();
        if self.contains(&keyword) {
            return false;
        }
        self.entries.push((keyword, value.into()));
        true
    }

    /// Get the value recorded for a keyword
    pub fn get(&self, keyword: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == keyword)
            .map(|(_, v)| v.as_str())
    }

    /// Check whether a keyword has a value
    pub fn contains(&self, keyword: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == keyword)
    }

    /// Number of keywords with a value
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no keyword has a value
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (keyword, value) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate over keywords in insertion order
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DocumentKeywordMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = DocumentKeywordMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

/// Document identifier to keyword map, for every document in one request
///
/// Inserting a document id that is already present replaces its map but
/// keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusKeywordMap {
    documents: Vec<(String, DocumentKeywordMap)>,
}

impl CorpusKeywordMap {
    /// Create an empty corpus
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the keyword map of a document
    pub fn insert(&mut self, document_id: impl Into<String>, keywords: DocumentKeywordMap) {
        let document_id = document_id.into();
        match self.documents.iter_mut().find(|(id, _)| *id == document_id) {
            Some((_, existing)) => *existing = keywords,
            None => self.documents.push((document_id, keywords)),
        }
    }

    /// Get the keyword map of a document
    pub fn get(&self, document_id: &str) -> Option<&DocumentKeywordMap> {
        self.documents
            .iter()
            .find(|(id, _)| id == document_id)
            .map(|(_, map)| map)
    }

    /// Number of documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the corpus has no documents
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Iterate over (document id, keyword map) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DocumentKeywordMap)> {
        self.documents.iter().map(|(id, map)| (id.as_str(), map))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_value_wins() {
        let mut map = DocumentKeywordMap::new();
        assert!(map.insert("deadline", "march 1"));
        assert!(!map.insert("deadline", "april 15"));
        assert_eq!(map.get("deadline"), Some("march 1"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_iteration_follows_insertion_order() {
        let map: DocumentKeywordMap =
            vec![("version", "2"), ("budget", "$10"), ("cost", "$3")].into_iter().collect();
        let keywords: Vec<_> = map.keywords().collect();
        assert_eq!(keywords, vec!["version", "budget", "cost"]);
    }

    #[test]
    fn test_missing_keyword() {
        let map = DocumentKeywordMap::new();
        assert!(map.is_empty());
        assert_eq!(map.get("budget"), None);
        assert!(!map.contains("budget"));
    }

    #[test]
    fn test_corpus_replaces_in_place() {
        let mut corpus = CorpusKeywordMap::new();
        corpus.insert("a.txt", [("budget", "$1")].into_iter().collect());
        corpus.insert("b.txt", DocumentKeywordMap::new());
        corpus.insert("a.txt", [("budget", "$2")].into_iter().collect());

        let ids: Vec<_> = corpus.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["a.txt", "b.txt"]);
        assert_eq!(corpus.get("a.txt").and_then(|m| m.get("budget")), Some("$2"));
        assert_eq!(corpus.len(), 2);
    }
}
