use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub artifacts: ArtifactConfig,
    pub training: TrainingConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub listen_addr: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtifactConfig {
    pub vectorizer_path: String,
    pub model_path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrainingConfig {
    pub dataset_path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::error::SpamFilterError::Config(e.to_string()))?;

        toml::from_str(&content)
            .map_err(|e| crate::error::SpamFilterError::Config(e.to_string()))
    }

    pub fn default() -> Self {
        Self {
            server: ServerConfig {
                listen_addr: "0.0.0.0:8000".to_string(),
            },
            artifacts: ArtifactConfig {
                vectorizer_path: "vectorizer.json".to_string(),
                model_path: "model.json".to_string(),
            },
            training: TrainingConfig {
                dataset_path: "emails.csv".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.server.listen_addr, "0.0.0.0:8000");
        assert_eq!(config.artifacts.vectorizer_path, "vectorizer.json");
        assert_eq!(config.artifacts.model_path, "model.json");
        assert_eq!(config.training.dataset_path, "emails.csv");
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[server]
listen_addr = "127.0.0.1:9000"

[artifacts]
vectorizer_path = "/var/lib/spamfilter/vectorizer.json"
model_path = "/var/lib/spamfilter/model.json"

[training]
dataset_path = "/var/lib/spamfilter/emails.csv"

[logging]
level = "debug"
format = "json"
"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();

        assert_eq!(config.server.listen_addr, "127.0.0.1:9000");
        assert_eq!(
            config.artifacts.vectorizer_path,
            "/var/lib/spamfilter/vectorizer.json"
        );
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_from_file_missing() {
        let result = Config::from_file("/nonexistent/config.toml");
        assert!(result.is_err());
    }
}
