use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub dataset: DatasetConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Where the question table lives and which columns to read.
///
/// Column names are overridable because source spreadsheets carry
/// deployment-specific headers; only the key column is required to exist.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    pub path: String,
    pub key_column: String,
    pub revised_column: String,
    pub sample_column: String,
    pub templates_column: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (for local development)
        dotenvy::dotenv().ok();

        let config = Config {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "8080".to_string())
                    .parse()
                    .context("Failed to parse PORT")?,
            },
            dataset: DatasetConfig {
                path: env::var("QUESTION_TABLE_PATH")
                    .context("QUESTION_TABLE_PATH must be set")?,
                key_column: env::var("QUESTION_KEY_COLUMN")
                    .unwrap_or_else(|_| "Sub-lesson".to_string()),
                revised_column: env::var("QUESTION_REVISED_COLUMN")
                    .unwrap_or_else(|_| "Revised Sample Question".to_string()),
                sample_column: env::var("QUESTION_SAMPLE_COLUMN")
                    .unwrap_or_else(|_| "Sample Questions".to_string()),
                templates_column: env::var("QUESTION_TEMPLATES_COLUMN")
                    .unwrap_or_else(|_| "Templates".to_string()),
            },
        };

        Ok(config)
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
