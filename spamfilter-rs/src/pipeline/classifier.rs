//! Multinomial Naive Bayes classification
//!
//! Class priors come from label frequencies; per-token likelihoods use
//! Laplace (add-one) smoothing over token counts aggregated per class. All
//! scoring happens in log space so long documents cannot underflow.

use serde::{Deserialize, Serialize};

use super::vectorizer::FeatureVector;
use crate::error::{Result, SpamFilterError};

/// Class label for legitimate mail
pub const LABEL_HAM: u8 = 0;
/// Class label for spam
pub const LABEL_SPAM: u8 = 1;

/// Fitted multinomial Naive Bayes parameters, immutable after training
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultinomialNb {
    /// ln P(class), indexed ham = 0, spam = 1
    class_log_prior: [f64; 2],
    /// ln P(token | class) per vocabulary column, one table per class
    feature_log_prob: [Vec<f64>; 2],
}

impl MultinomialNb {
    /// Fit the model on vectorized documents and their {0, 1} labels
    ///
    /// Requires at least one example of each class; a class with zero
    /// examples has no finite log-prior.
    pub fn fit(vectors: &[FeatureVector], labels: &[u8], n_features: usize) -> Result<Self> {
        if vectors.len() != labels.len() {
            return Err(SpamFilterError::Model(format!(
                "{} vectors but {} labels",
                vectors.len(),
                labels.len()
            )));
        }
        if vectors.is_empty() {
            return Err(SpamFilterError::Model("training set is empty".to_string()));
        }

        let mut doc_counts = [0u64; 2];
        let mut token_counts = [vec![0u64; n_features], vec![0u64; n_features]];

        for (vector, &label) in vectors.iter().zip(labels) {
            if label > LABEL_SPAM {
                return Err(SpamFilterError::Model(format!(
                    "label must be 0 or 1, got {}",
                    label
                )));
            }
            let class = label as usize;
            doc_counts[class] += 1;
            for &(index, count) in vector.counts() {
                if index >= n_features {
                    return Err(SpamFilterError::Model(format!(
                        "feature index {} out of range for {} features",
                        index, n_features
                    )));
                }
                token_counts[class][index] += u64::from(count);
            }
        }

        if doc_counts[0] == 0 || doc_counts[1] == 0 {
            return Err(SpamFilterError::Model(
                "training set must contain both spam and ham examples".to_string(),
            ));
        }

        let total_docs = vectors.len() as f64;
        let class_log_prior = [
            (doc_counts[0] as f64 / total_docs).ln(),
            (doc_counts[1] as f64 / total_docs).ln(),
        ];

        let feature_log_prob = [
            Self::log_likelihoods(&token_counts[0]),
            Self::log_likelihoods(&token_counts[1]),
        ];

        Ok(Self {
            class_log_prior,
            feature_log_prob,
        })
    }

    /// Add-one smoothed ln P(token | class) for one class
    fn log_likelihoods(token_counts: &[u64]) -> Vec<f64> {
        let total: u64 = token_counts.iter().sum();
        let denominator = (total + token_counts.len() as u64) as f64;

        token_counts
            .iter()
            .map(|&count| ((count + 1) as f64 / denominator).ln())
            .collect()
    }

    /// Predict the class of a vectorized document
    ///
    /// Scores are log-prior plus count-weighted log-likelihood sums. An
    /// exact tie resolves to ham, every call.
    pub fn predict(&self, vector: &FeatureVector) -> u8 {
        let mut scores = self.class_log_prior;
        for &(index, count) in vector.counts() {
            for class in 0..2 {
                scores[class] += f64::from(count) * self.feature_log_prob[class][index];
            }
        }

        if scores[LABEL_SPAM as usize] > scores[LABEL_HAM as usize] {
            LABEL_SPAM
        } else {
            LABEL_HAM
        }
    }

    /// Number of vocabulary columns the model was trained over
    pub fn n_features(&self) -> usize {
        self.feature_log_prob[0].len()
    }
}
