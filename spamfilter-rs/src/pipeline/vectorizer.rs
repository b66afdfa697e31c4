//! Bag-of-words count vectorization
//!
//! Maps normalized token streams onto a fixed vocabulary learned at training
//! time. The vocabulary is immutable once fitted; tokens it does not know
//! are ignored at transform time, never added.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Sparse count vector over a fitted vocabulary's index space
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// (column index, occurrence count) pairs, sorted by index
    counts: Vec<(usize, u32)>,
    /// Vocabulary size at transform time
    dim: usize,
}

impl FeatureVector {
    /// Non-zero (index, count) entries, sorted by index
    pub fn counts(&self) -> &[(usize, u32)] {
        &self.counts
    }

    /// Vector dimension (equals the vocabulary size)
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// True if every component is zero
    pub fn is_zero(&self) -> bool {
        self.counts.is_empty()
    }

    /// Count at a single column
    pub fn count(&self, index: usize) -> u32 {
        self.counts
            .iter()
            .find(|(i, _)| *i == index)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }
}

/// Count vectorizer over a fixed vocabulary
///
/// `fit` is the only constructor of the vocabulary; re-fitting always builds
/// a fresh vectorizer rather than merging into an existing one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountVectorizer {
    vocabulary: HashMap<String, usize>,
}

impl CountVectorizer {
    /// Learn the vocabulary from a corpus of normalized documents
    ///
    /// Every distinct token receives a column index in sorted token order,
    /// so the mapping is independent of document order. No frequency or
    /// length filtering is applied.
    pub fn fit<I, S>(corpus: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tokens = BTreeSet::new();
        for doc in corpus {
            for token in doc.as_ref().split_whitespace() {
                if !tokens.contains(token) {
                    tokens.insert(token.to_string());
                }
            }
        }

        let vocabulary = tokens
            .into_iter()
            .enumerate()
            .map(|(index, token)| (token, index))
            .collect();

        Self { vocabulary }
    }

    /// Count token occurrences of a normalized document over the vocabulary
    ///
    /// Tokens absent from the vocabulary contribute nothing; the vocabulary
    /// itself is never modified.
    pub fn transform(&self, doc: &str) -> FeatureVector {
        let mut counts: BTreeMap<usize, u32> = BTreeMap::new();
        for token in doc.split_whitespace() {
            if let Some(&index) = self.vocabulary.get(token) {
                *counts.entry(index).or_insert(0) += 1;
            }
        }

        FeatureVector {
            counts: counts.into_iter().collect(),
            dim: self.vocabulary.len(),
        }
    }

    /// Number of tokens in the vocabulary
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Column index of a token, if known
    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.vocabulary.get(token).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_assigns_sorted_indices() {
        let vectorizer = CountVectorizer::fit(["win money", "click money"]);

        assert_eq!(vectorizer.vocabulary_size(), 3);
        assert_eq!(vectorizer.index_of("click"), Some(0));
        assert_eq!(vectorizer.index_of("money"), Some(1));
        assert_eq!(vectorizer.index_of("win"), Some(2));
    }

    #[test]
    fn test_fit_is_independent_of_document_order() {
        let forward = CountVectorizer::fit(["win money", "click prize"]);
        let backward = CountVectorizer::fit(["click prize", "win money"]);

        for token in ["click", "money", "prize", "win"] {
            assert_eq!(forward.index_of(token), backward.index_of(token));
        }
    }

    #[test]
    fn test_transform_counts_occurrences() {
        let vectorizer = CountVectorizer::fit(["win money", "click money"]);

        let vector = vectorizer.transform("money money win");

        assert_eq!(vector.counts(), &[(1, 2), (2, 1)]);
        assert_eq!(vector.dim(), 3);
    }

    #[test]
    fn test_transform_ignores_unknown_tokens() {
        let vectorizer = CountVectorizer::fit(["win money"]);

        let vector = vectorizer.transform("lottery jackpot casino");

        assert!(vector.is_zero());
        assert_eq!(vector.dim(), 2);
    }

    #[test]
    fn test_transform_empty_document() {
        let vectorizer = CountVectorizer::fit(["win money"]);

        let vector = vectorizer.transform("");

        assert!(vector.is_zero());
        assert_eq!(vector.dim(), 2);
    }

    #[test]
    fn test_transform_reproduces_fitting_counts() {
        let corpus = ["win money win", "click free prize"];
        let vectorizer = CountVectorizer::fit(corpus);

        let vector = vectorizer.transform(corpus[0]);

        assert_eq!(vector.count(vectorizer.index_of("win").unwrap()), 2);
        assert_eq!(vector.count(vectorizer.index_of("money").unwrap()), 1);
        assert_eq!(vector.count(vectorizer.index_of("click").unwrap()), 0);
    }

    #[test]
    fn test_serialization_round_trip() {
        let vectorizer = CountVectorizer::fit(["win money", "click prize"]);

        let json = serde_json::to_string(&vectorizer).unwrap();
        let restored: CountVectorizer = serde_json::from_str(&json).unwrap();

        assert_eq!(
            vectorizer.transform("win money click oov"),
            restored.transform("win money click oov")
        );
    }
}
