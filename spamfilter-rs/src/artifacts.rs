//! Model artifact persistence
//!
//! The fitted vocabulary and classifier parameters are stored as two plain
//! JSON files: token-to-index pairs for the vocabulary, per-class
//! log-probability tables for the model. The serialize/deserialize round
//! trip is exact.

use serde::{de::DeserializeOwned, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{Result, SpamFilterError};
use crate::pipeline::{CountVectorizer, MultinomialNb};

fn save<T: Serialize, P: AsRef<Path>>(path: P, value: &T, what: &str) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| {
        SpamFilterError::Model(format!(
            "failed to create {} artifact at {}: {}",
            what,
            path.display(),
            e
        ))
    })?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}

fn load<T: DeserializeOwned, P: AsRef<Path>>(path: P, what: &str) -> Result<T> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        SpamFilterError::Model(format!(
            "failed to open {} artifact at {}: {}",
            what,
            path.display(),
            e
        ))
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        SpamFilterError::Model(format!(
            "corrupt {} artifact at {}: {}",
            what,
            path.display(),
            e
        ))
    })
}

/// Write the fitted vectorizer to disk
pub fn save_vectorizer<P: AsRef<Path>>(path: P, vectorizer: &CountVectorizer) -> Result<()> {
    save(path, vectorizer, "vectorizer")
}

/// Load a fitted vectorizer from disk
pub fn load_vectorizer<P: AsRef<Path>>(path: P) -> Result<CountVectorizer> {
    load(path, "vectorizer")
}

/// Write the fitted classifier model to disk
pub fn save_model<P: AsRef<Path>>(path: P, model: &MultinomialNb) -> Result<()> {
    save(path, model, "model")
}

/// Load a fitted classifier model from disk
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<MultinomialNb> {
    load(path, "model")
}
