//! Text normalization
//!
//! Cleans raw email text into the stemmed token stream used for both
//! training and prediction. The stopword list and stemming rules are fixed
//! so the two sides always agree on the token space.

use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;

/// English stopwords excluded from feature extraction.
///
/// Entries containing apostrophes can never match once punctuation has been
/// stripped from the input.
const STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you",
    "you're", "you've", "you'll", "you'd", "your", "yours", "yourself",
    "yourselves", "he", "him", "his", "himself", "she", "she's", "her",
    "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this",
    "that", "that'll", "these", "those", "am", "is", "are", "was", "were",
    "be", "been", "being", "have", "has", "had", "having", "do", "does",
    "did", "doing", "a", "an", "the", "and", "but", "if", "or", "because",
    "as", "until", "while", "of", "at", "by", "for", "with", "about",
    "against", "between", "into", "through", "during", "before", "after",
    "above", "below", "to", "from", "up", "down", "in", "out", "on", "off",
    "over", "under", "again", "further", "then", "once", "here", "there",
    "when", "where", "why", "how", "all", "any", "both", "each", "few",
    "more", "most", "other", "some", "such", "no", "nor", "not", "only",
    "own", "same", "so", "than", "too", "very", "s", "t", "can", "will",
    "just", "don", "don't", "should", "should've", "now", "d", "ll", "m",
    "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't",
    "didn", "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn",
    "hasn't", "haven", "haven't", "isn", "isn't", "ma", "mightn",
    "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won",
    "won't", "wouldn", "wouldn't",
];

/// Text normalizer
///
/// Lowercases, strips every character outside `[a-z\s]`, drops stopwords and
/// stems the remaining tokens with the Snowball English stemmer. Removed
/// characters are dropped rather than replaced, so tokens adjacent to a
/// removed run can merge ("http://x" becomes "httpx"); that behavior is part
/// of the token space the model is trained on.
pub struct TextNormalizer {
    stopwords: HashSet<&'static str>,
    stemmer: Stemmer,
    non_letter: Regex,
}

impl TextNormalizer {
    /// Create a normalizer with the fixed stopword list and stemmer
    pub fn new() -> Self {
        Self {
            stopwords: STOPWORDS.iter().copied().collect(),
            stemmer: Stemmer::create(Algorithm::English),
            non_letter: Regex::new(r"[^a-z\s]").expect("static pattern compiles"),
        }
    }

    /// Normalize raw text into space-joined stemmed tokens
    ///
    /// Empty input (or input with no surviving tokens) yields an empty
    /// string, not an error.
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let stripped = self.non_letter.replace_all(&lowered, "");

        stripped
            .split_whitespace()
            .filter(|token| !self.stopwords.contains(token))
            .map(|token| self.stemmer.stem(token).to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
