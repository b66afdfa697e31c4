use spamfilter_rs::api::handlers::AppState;
use spamfilter_rs::api::ApiServer;
use spamfilter_rs::artifacts;
use spamfilter_rs::config::Config;
use spamfilter_rs::pipeline::SpamClassifier;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .pretty()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    info!("Starting spamfilter-rs server");

    // Load configuration
    let config = if std::path::Path::new("config.toml").exists() {
        Config::from_file("config.toml")?
    } else {
        info!("No config file found, using defaults");
        Config::default()
    };

    info!("Configuration loaded");
    info!("  Listening on: {}", config.server.listen_addr);
    info!("  Vectorizer artifact: {}", config.artifacts.vectorizer_path);
    info!("  Model artifact: {}", config.artifacts.model_path);

    // Load the fitted artifacts exactly once; a missing or corrupt artifact
    // aborts startup before the listener binds.
    let vectorizer = artifacts::load_vectorizer(&config.artifacts.vectorizer_path)?;
    let model = artifacts::load_model(&config.artifacts.model_path)?;
    let classifier = SpamClassifier::new(vectorizer, model)?;

    info!(
        "Model artifacts loaded ({} vocabulary tokens)",
        classifier.vocabulary_size()
    );

    let state = Arc::new(AppState { classifier });
    let server = ApiServer::new(state, config.server.listen_addr.clone());
    server.run().await?;

    Ok(())
}
