//! Train the spam model from a labeled CSV dataset and write the artifacts

use anyhow::Context;
use spamfilter_rs::artifacts;
use spamfilter_rs::config::Config;
use spamfilter_rs::dataset;
use spamfilter_rs::pipeline::{CountVectorizer, MultinomialNb, TextNormalizer};

fn main() -> anyhow::Result<()> {
    let config = if std::path::Path::new("config.toml").exists() {
        Config::from_file("config.toml").context("failed to load config.toml")?
    } else {
        Config::default()
    };

    println!("Training from: {}", config.training.dataset_path);

    let records = dataset::load(&config.training.dataset_path)
        .context("failed to load training dataset")?;
    println!("Loaded {} examples", records.len());

    let normalizer = TextNormalizer::new();
    let corpus: Vec<String> = records
        .iter()
        .map(|record| normalizer.normalize(&record.text))
        .collect();
    let labels: Vec<u8> = records.iter().map(|record| record.spam).collect();

    let vectorizer = CountVectorizer::fit(&corpus);
    let vectors: Vec<_> = corpus.iter().map(|doc| vectorizer.transform(doc)).collect();
    println!("Vocabulary: {} tokens", vectorizer.vocabulary_size());

    let model = MultinomialNb::fit(&vectors, &labels, vectorizer.vocabulary_size())
        .context("training failed")?;

    artifacts::save_vectorizer(&config.artifacts.vectorizer_path, &vectorizer)?;
    artifacts::save_model(&config.artifacts.model_path, &model)?;

    println!(
        "Saved: {}, {}",
        config.artifacts.vectorizer_path, config.artifacts.model_path
    );

    Ok(())
}
