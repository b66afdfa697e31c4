//! Classification pipeline
//!
//! The normalize → vectorize → classify chain shared by the training binary
//! and the serving endpoint. Training fits the vectorizer and classifier;
//! serving wraps the fitted pair in [`SpamClassifier`] and treats it as
//! read-only for the life of the process.

pub mod classifier;
pub mod normalizer;
pub mod vectorizer;

pub use classifier::{MultinomialNb, LABEL_HAM, LABEL_SPAM};
pub use normalizer::TextNormalizer;
pub use vectorizer::{CountVectorizer, FeatureVector};

use serde::Serialize;

use crate::error::{Result, SpamFilterError};

/// Label string reported for spam
pub const SPAM_LABEL: &str = "Spam";
/// Label string reported for legitimate mail
pub const HAM_LABEL: &str = "Not Spam";

/// Outcome of classifying one piece of text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    /// Spam flag
    pub spam: bool,
    /// Human-readable label
    pub label: String,
}

/// Full inference pipeline over fitted artifacts
///
/// Holds the fixed normalizer together with a fitted vectorizer and model.
/// `classify` is a pure function of its input, so a shared instance is safe
/// to use from concurrent requests without locking.
pub struct SpamClassifier {
    normalizer: TextNormalizer,
    vectorizer: CountVectorizer,
    model: MultinomialNb,
}

impl SpamClassifier {
    /// Assemble the pipeline from fitted artifacts
    ///
    /// Rejects a vectorizer/model pair whose dimensions disagree; a
    /// mismatched artifact set must fail at load time, not at predict time.
    pub fn new(vectorizer: CountVectorizer, model: MultinomialNb) -> Result<Self> {
        if vectorizer.vocabulary_size() != model.n_features() {
            return Err(SpamFilterError::Model(format!(
                "vocabulary has {} tokens but the model was trained over {} features",
                vectorizer.vocabulary_size(),
                model.n_features()
            )));
        }

        Ok(Self {
            normalizer: TextNormalizer::new(),
            vectorizer,
            model,
        })
    }

    /// Classify raw text as spam or ham
    pub fn classify(&self, text: &str) -> Prediction {
        let cleaned = self.normalizer.normalize(text);
        let vector = self.vectorizer.transform(&cleaned);
        let label = self.model.predict(&vector);

        Prediction {
            spam: label == LABEL_SPAM,
            label: if label == LABEL_SPAM {
                SPAM_LABEL.to_string()
            } else {
                HAM_LABEL.to_string()
            },
        }
    }

    /// Vocabulary size of the loaded artifacts
    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.vocabulary_size()
    }
}
