//! Configuration and document errors

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading configuration or the demo document
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`crate::DemoConfig`]
    #[error("invalid config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Config could not be rendered back to TOML
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Document file is not valid JSON
    #[error("invalid document {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Document parsed but has nothing to show
    #[error("document has no content")]
    EmptyDocument,
}

pub type Result<T> = std::result::Result<T, ConfigError>;
