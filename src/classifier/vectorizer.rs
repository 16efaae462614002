//! TF-IDF vectorization of normalized lyrics.
//!
//! Rows are sparse: only non-zero `(feature index, weight)` pairs are stored,
//! sorted by index.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::constants::training::{DEFAULT_MAX_FEATURES, MIN_TOKEN_LEN};
use crate::lyrics::tokens;

/// Sparse feature row: `(feature index, weight)` sorted by index.
pub type SparseRow = Vec<(usize, f64)>;

/// Term-frequency / inverse-document-frequency vectorizer.
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    /// Vocabulary cap, most frequent terms first.
    max_features: usize,
    /// Term -> feature index.
    vocabulary: HashMap<String, usize>,
    /// Feature index -> term.
    terms: Vec<String>,
    /// Smoothed IDF per feature.
    idf: Vec<f64>,
}

impl TfIdfVectorizer {
    /// Create an unfitted vectorizer.
    pub fn new() -> Self {
        Self {
            max_features: DEFAULT_MAX_FEATURES,
            vocabulary: HashMap::new(),
            terms: Vec::new(),
            idf: Vec::new(),
        }
    }

    /// Cap the vocabulary size.
    #[must_use]
    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.max_features = max_features;
        self
    }

    /// Terms the vectorizer counts in a document.
    fn analyze(doc: &str) -> impl Iterator<Item = &str> {
        tokens(doc).filter(|t| t.len() >= MIN_TOKEN_LEN)
    }

    /// Learn vocabulary and IDF weights from a corpus.
    pub fn fit(&mut self, documents: &[&str]) {
        let mut term_freq: BTreeMap<&str, usize> = BTreeMap::new();
        let mut doc_freq: BTreeMap<&str, usize> = BTreeMap::new();

        for doc in documents {
            let mut seen: BTreeSet<&str> = BTreeSet::new();
            for term in Self::analyze(doc) {
                *term_freq.entry(term).or_insert(0) += 1;
                if seen.insert(term) {
                    *doc_freq.entry(term).or_insert(0) += 1;
                }
            }
        }

        // Keep the most frequent terms; BTreeMap order breaks ties by term.
        let mut ranked: Vec<(&str, usize)> = term_freq.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(self.max_features);

        let mut kept: Vec<&str> = ranked.into_iter().map(|(term, _)| term).collect();
        kept.sort_unstable();

        let n_docs = documents.len() as f64;
        self.vocabulary.clear();
        self.terms.clear();
        self.idf.clear();
        for (idx, term) in kept.into_iter().enumerate() {
            let df = doc_freq.get(term).copied().unwrap_or(0) as f64;
            self.idf.push(((1.0 + n_docs) / (1.0 + df)).ln() + 1.0);
            self.vocabulary.insert(term.to_string(), idx);
            self.terms.push(term.to_string());
        }

        tracing::debug!("Fitted TF-IDF vocabulary of {} terms over {} documents", self.terms.len(), documents.len());
    }

    /// Vectorize a document with the fitted vocabulary. Unknown terms are ignored.
    pub fn transform(&self, document: &str) -> SparseRow {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for term in Self::analyze(document) {
            if let Some(&idx) = self.vocabulary.get(term) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let mut row: SparseRow = counts
            .into_iter()
            .map(|(idx, tf)| (idx, tf * self.idf[idx]))
            .collect();

        let norm = row.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, w) in &mut row {
                *w /= norm;
            }
        }
        row
    }

    /// Fit, then vectorize every document.
    pub fn fit_transform(&mut self, documents: &[&str]) -> Vec<SparseRow> {
        self.fit(documents);
        documents.iter().map(|d| self.transform(d)).collect()
    }

    /// Number of features.
    pub fn n_features(&self) -> usize {
        self.terms.len()
    }

    /// Feature index of a term.
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// IDF weight of a term.
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.index_of(term).map(|idx| self.idf[idx])
    }

    /// Term at a feature index.
    pub fn term(&self, idx: usize) -> Option<&str> {
        self.terms.get(idx).map(String::as_str)
    }
}

impl Default for TfIdfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_vocabulary_is_sorted_and_skips_short_tokens() {
        let mut v = TfIdfVectorizer::new();
        v.fit(&["aku cinta kamu", "kamu a b cinta"]);
        assert_eq!(v.n_features(), 3);
        assert_eq!(v.term(0), Some("aku"));
        assert_eq!(v.term(1), Some("cinta"));
        assert_eq!(v.term(2), Some("kamu"));
        assert_eq!(v.index_of("a"), None);
    }

    #[test]
    fn test_idf_favors_rare_terms() {
        let mut v = TfIdfVectorizer::new();
        v.fit(&["hujan turun", "hujan reda", "hujan lagi"]);
        assert!(v.idf("turun").unwrap() > v.idf("hujan").unwrap());
        assert!((v.idf("hujan").unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_max_features_keeps_most_frequent() {
        let mut v = TfIdfVectorizer::new().with_max_features(2);
        v.fit(&["satu dua dua tiga tiga tiga", "tiga dua empat"]);
        assert_eq!(v.n_features(), 2);
        assert!(v.index_of("tiga").is_some());
        assert!(v.index_of("dua").is_some());
        assert!(v.index_of("satu").is_none());
    }

    #[test]
    fn test_transform_is_l2_normalized_and_sparse() {
        let mut v = TfIdfVectorizer::new();
        let rows = v.fit_transform(&["malam sunyi malam", "pagi cerah"]);
        let norm: f64 = rows[0].iter().map(|(_, w)| w * w).sum();
        assert!((norm - 1.0).abs() < 1e-9);
        assert_eq!(rows[0].len(), 2);
        assert!(rows[0].windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_transform_unknown_terms_is_empty() {
        let mut v = TfIdfVectorizer::new();
        v.fit(&["lagu cinta"]);
        assert!(v.transform("sesuatu lain").is_empty());
        assert!(v.transform("").is_empty());
    }
}
