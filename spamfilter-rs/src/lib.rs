//! spamfilter-rs: Naive Bayes email spam filter
//!
//! A small spam classification service: an offline training binary fits a
//! bag-of-words multinomial Naive Bayes model from a labeled CSV, and an
//! HTTP server loads the fitted artifacts once and answers predictions.
//!
//! # Features
//!
//! - **Shared pipeline**: one normalize/vectorize/classify chain used
//!   identically at training and serving time
//! - **Explicit artifacts**: vocabulary and model parameters persisted as
//!   plain JSON files
//! - **Fail-fast startup**: the server refuses to start without valid
//!   artifacts rather than serving degraded predictions
//! - **Stateless serving**: prediction is a pure function over immutable
//!   shared state, safe under concurrent requests
//!
//! # Example
//!
//! ```
//! use spamfilter_rs::pipeline::{
//!     CountVectorizer, MultinomialNb, SpamClassifier, TextNormalizer, LABEL_HAM, LABEL_SPAM,
//! };
//!
//! let normalizer = TextNormalizer::new();
//! let corpus: Vec<String> = ["WIN free money now!!!", "Lunch meeting at noon"]
//!     .iter()
//!     .map(|text| normalizer.normalize(text))
//!     .collect();
//!
//! let vectorizer = CountVectorizer::fit(&corpus);
//! let vectors: Vec<_> = corpus.iter().map(|doc| vectorizer.transform(doc)).collect();
//! let model = MultinomialNb::fit(&vectors, &[LABEL_SPAM, LABEL_HAM], vectorizer.vocabulary_size())
//!     .expect("labeled corpus");
//!
//! let classifier = SpamClassifier::new(vectorizer, model).expect("matching artifacts");
//! assert!(classifier.classify("free money").spam);
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling
//! - [`pipeline`]: Normalization, vectorization and classification
//! - [`dataset`]: Training CSV loading
//! - [`artifacts`]: Fitted artifact persistence
//! - [`api`]: HTTP prediction API

pub mod api;
pub mod artifacts;
pub mod config;
pub mod dataset;
pub mod error;
pub mod pipeline;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, SpamFilterError};
pub use pipeline::SpamClassifier;
