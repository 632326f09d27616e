//! TF-IDF vectorizer for text feature extraction.
//!
//! Turns cleaned review text into fixed-dimensional numeric vectors using
//! term-frequency / inverse-document-frequency weighting over unigrams and
//! bigrams. Fitting constructs the vectorizer, so a fitted vocabulary is
//! immutable and refitting always replaces it wholesale.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{Result, VerdictError};

/// Parameters for fitting a [`TfIdfVectorizer`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TfIdfParams {
    /// Vocabulary cap: only the terms with the highest corpus frequency are kept.
    pub max_features: usize,
    /// Smallest n-gram size.
    pub ngram_min: usize,
    /// Largest n-gram size.
    pub ngram_max: usize,
}

impl Default for TfIdfParams {
    fn default() -> Self {
        TfIdfParams {
            max_features: 1000,
            ngram_min: 1,
            ngram_max: 2,
        }
    }
}

/// TF-IDF vectorizer over whitespace-separated cleaned text.
///
/// # Examples
///
/// ```
/// use verdict::features::TfIdfVectorizer;
///
/// let documents = vec![
///     "great movie great act".to_string(),
///     "terrible waste time".to_string(),
/// ];
/// let vectorizer = TfIdfVectorizer::fit(&documents).unwrap();
///
/// let features = vectorizer.transform("great movie");
/// assert_eq!(features.len(), vectorizer.vocabulary_size());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TfIdfVectorizer {
    /// Term -> feature index, indices assigned in lexicographic term order.
    vocabulary: HashMap<String, usize>,
    /// Inverse document frequency per feature index.
    idf: Vec<f64>,
    /// Number of documents seen at fit time.
    n_documents: usize,
    /// Smallest n-gram size.
    ngram_min: usize,
    /// Largest n-gram size.
    ngram_max: usize,
}

impl TfIdfVectorizer {
    /// Fit a vectorizer on cleaned documents with default parameters.
    pub fn fit(documents: &[String]) -> Result<Self> {
        Self::fit_with(documents, TfIdfParams::default())
    }

    /// Fit a vectorizer on cleaned documents.
    pub fn fit_with(documents: &[String], params: TfIdfParams) -> Result<Self> {
        if documents.is_empty() {
            return Err(VerdictError::training(
                "cannot fit vectorizer on an empty document set",
            ));
        }
        if params.ngram_min == 0 || params.ngram_max < params.ngram_min {
            return Err(VerdictError::training(format!(
                "invalid n-gram range ({}, {})",
                params.ngram_min, params.ngram_max
            )));
        }

        let mut term_counts: HashMap<String, u64> = HashMap::new();
        let mut document_frequency: HashMap<String, usize> = HashMap::new();

        for doc in documents {
            let terms = Self::ngrams(doc, params.ngram_min, params.ngram_max);
            let unique: HashSet<&String> = terms.iter().collect();
            for term in &unique {
                *document_frequency.entry((*term).clone()).or_insert(0) += 1;
            }
            for term in terms {
                *term_counts.entry(term).or_insert(0) += 1;
            }
        }

        if term_counts.is_empty() {
            return Err(VerdictError::training(
                "document set contains no terms after cleaning",
            ));
        }

        // Keep the most frequent terms, ties broken lexicographically, then
        // assign feature indices in lexicographic order.
        let mut ranked: Vec<(String, u64)> = term_counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(params.max_features);

        let mut selected: Vec<String> = ranked.into_iter().map(|(term, _)| term).collect();
        selected.sort();

        let n_documents = documents.len();
        let mut vocabulary = HashMap::with_capacity(selected.len());
        let mut idf = Vec::with_capacity(selected.len());
        for (index, term) in selected.into_iter().enumerate() {
            let df = document_frequency.get(&term).copied().unwrap_or(0);
            // Smoothed IDF: ln((1 + N) / (1 + df)) + 1
            idf.push(((1.0 + n_documents as f64) / (1.0 + df as f64)).ln() + 1.0);
            vocabulary.insert(term, index);
        }

        Ok(TfIdfVectorizer {
            vocabulary,
            idf,
            n_documents,
            ngram_min: params.ngram_min,
            ngram_max: params.ngram_max,
        })
    }

    /// Transform a cleaned document into an L2-normalized TF-IDF vector.
    ///
    /// Terms outside the fitted vocabulary contribute nothing.
    pub fn transform(&self, document: &str) -> Vec<f64> {
        let mut features = vec![0.0; self.vocabulary.len()];

        for term in Self::ngrams(document, self.ngram_min, self.ngram_max) {
            if let Some(&index) = self.vocabulary.get(&term) {
                features[index] += 1.0;
            }
        }

        for (index, value) in features.iter_mut().enumerate() {
            *value *= self.idf[index];
        }

        let norm: f64 = features.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in &mut features {
                *value /= norm;
            }
        }

        features
    }

    /// Transform a batch of cleaned documents.
    pub fn transform_batch(&self, documents: &[String]) -> Vec<Vec<f64>> {
        documents.iter().map(|doc| self.transform(doc)).collect()
    }

    /// Get the size of the fitted vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Get the number of documents seen at fit time.
    pub fn n_documents(&self) -> usize {
        self.n_documents
    }

    /// Check whether a term is in the fitted vocabulary.
    pub fn contains_term(&self, term: &str) -> bool {
        self.vocabulary.contains_key(term)
    }

    /// Word n-grams of a whitespace-separated document, inner tokens joined
    /// with single spaces.
    fn ngrams(document: &str, ngram_min: usize, ngram_max: usize) -> Vec<String> {
        let tokens: Vec<&str> = document.split_whitespace().collect();
        let mut terms = Vec::new();
        for n in ngram_min..=ngram_max {
            for window in tokens.windows(n) {
                terms.push(window.join(" "));
            }
        }
        terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_fit_builds_unigrams_and_bigrams() {
        let vectorizer =
            TfIdfVectorizer::fit(&docs(&["great movie", "terrible movie"])).unwrap();

        assert!(vectorizer.contains_term("great"));
        assert!(vectorizer.contains_term("movie"));
        assert!(vectorizer.contains_term("great movie"));
        assert!(vectorizer.contains_term("terrible movie"));
        assert_eq!(vectorizer.vocabulary_size(), 5);
    }

    #[test]
    fn test_transform_is_l2_normalized() {
        let vectorizer =
            TfIdfVectorizer::fit(&docs(&["great movie", "terrible movie"])).unwrap();

        let features = vectorizer.transform("great movie");
        let norm: f64 = features.iter().map(|v| v * v).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_transform_ignores_unseen_terms() {
        let vectorizer = TfIdfVectorizer::fit(&docs(&["great movie"])).unwrap();

        let features = vectorizer.transform("unseen words only");
        assert!(features.iter().all(|&v| v == 0.0));
        assert_eq!(features.len(), vectorizer.vocabulary_size());
    }

    #[test]
    fn test_max_features_cap() {
        let params = TfIdfParams {
            max_features: 2,
            ngram_min: 1,
            ngram_max: 1,
        };
        let vectorizer = TfIdfVectorizer::fit_with(
            &docs(&["common common common rare", "common other"]),
            params,
        )
        .unwrap();

        assert_eq!(vectorizer.vocabulary_size(), 2);
        assert!(vectorizer.contains_term("common"));
    }

    #[test]
    fn test_fit_is_deterministic() {
        let documents = docs(&["great movie great act", "terrible waste time", "boring plot"]);
        let a = TfIdfVectorizer::fit(&documents).unwrap();
        let b = TfIdfVectorizer::fit(&documents).unwrap();

        assert_eq!(a.vocabulary, b.vocabulary);
        assert_eq!(a.idf, b.idf);
        assert_eq!(a.transform("great movie"), b.transform("great movie"));
    }

    #[test]
    fn test_fit_empty_documents_fails() {
        assert!(TfIdfVectorizer::fit(&[]).is_err());
        assert!(TfIdfVectorizer::fit(&docs(&["", ""])).is_err());
    }

    #[test]
    fn test_rarer_terms_weigh_heavier() {
        let vectorizer = TfIdfVectorizer::fit(&docs(&[
            "movie great",
            "movie terrible",
            "movie fine",
        ]))
        .unwrap();

        // "movie" appears in every document, "great" in one; for a document
        // containing both once, the rarer term must dominate.
        let features = vectorizer.transform("movie great");
        let movie_idx = *vectorizer.vocabulary.get("movie").unwrap();
        let great_idx = *vectorizer.vocabulary.get("great").unwrap();
        assert!(features[great_idx] > features[movie_idx]);
    }
}
