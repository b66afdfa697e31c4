//! API request handlers

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::pipeline::{Prediction, SpamClassifier};

/// Shared application state
///
/// Built once at startup from the loaded artifacts and never mutated; every
/// request reads it through the same `Arc`.
pub struct AppState {
    pub classifier: SpamClassifier,
}

/// Prediction request body
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub text: String,
}

/// Prediction response
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub spam: bool,
    pub label: String,
}

impl From<Prediction> for PredictResponse {
    fn from(prediction: Prediction) -> Self {
        Self {
            spam: prediction.spam,
            label: prediction.label,
        }
    }
}

/// Service information response
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub message: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub vocabulary_size: usize,
}

/// GET / - service information
pub async fn root() -> Json<InfoResponse> {
    Json(InfoResponse {
        message: "Spam Detector API. POST /predict {text: ...}".to_string(),
    })
}

/// GET /health - liveness probe
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        vocabulary_size: state.classifier.vocabulary_size(),
    })
}

/// POST /predict - classify an email body
///
/// A malformed body is rejected by the `Json` extractor before this handler
/// runs; nothing here can affect other requests or the shared state.
pub async fn predict(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PredictRequest>,
) -> Json<PredictResponse> {
    let prediction = state.classifier.classify(&req.text);
    debug!("Classified message: spam={}", prediction.spam);

    Json(prediction.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{
        CountVectorizer, MultinomialNb, TextNormalizer, LABEL_HAM, LABEL_SPAM,
    };

    fn test_state() -> Arc<AppState> {
        let normalizer = TextNormalizer::new();
        let corpus: Vec<String> = [
            "WIN free money now",
            "Click here to claim your prize",
            "Lunch meeting moved to noon",
            "Quarterly report attached",
        ]
        .iter()
        .map(|text| normalizer.normalize(text))
        .collect();
        let labels = [LABEL_SPAM, LABEL_SPAM, LABEL_HAM, LABEL_HAM];

        let vectorizer = CountVectorizer::fit(&corpus);
        let vectors: Vec<_> = corpus.iter().map(|doc| vectorizer.transform(doc)).collect();
        let model =
            MultinomialNb::fit(&vectors, &labels, vectorizer.vocabulary_size()).unwrap();

        Arc::new(AppState {
            classifier: SpamClassifier::new(vectorizer, model).unwrap(),
        })
    }

    #[tokio::test]
    async fn test_root_message() {
        let Json(body) = root().await;

        assert!(body.message.contains("/predict"));
    }

    #[tokio::test]
    async fn test_health_reports_vocabulary() {
        let state = test_state();

        let Json(body) = health(State(state.clone())).await;

        assert_eq!(body.status, "healthy");
        assert_eq!(body.vocabulary_size, state.classifier.vocabulary_size());
    }

    #[tokio::test]
    async fn test_predict_spam() {
        let state = test_state();

        let Json(body) = predict(
            State(state),
            Json(PredictRequest {
                text: "WIN free money!!!".to_string(),
            }),
        )
        .await;

        assert!(body.spam);
        assert_eq!(body.label, "Spam");
    }

    #[tokio::test]
    async fn test_predict_ham() {
        let state = test_state();

        let Json(body) = predict(
            State(state),
            Json(PredictRequest {
                text: "the quarterly report is attached".to_string(),
            }),
        )
        .await;

        assert!(!body.spam);
        assert_eq!(body.label, "Not Spam");
    }
}
