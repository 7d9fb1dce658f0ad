//! Demo document loading
//!
//! A document is a JSON object with a single `content` string holding the
//! markdown answer to reveal.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ConfigError, Result};

/// Built-in answer to "What is the Pythagorean Theorem"
const BUILTIN_ANSWER: &str = include_str!("../assets/answer.md");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoDocument {
    pub content: String,
}

impl DemoDocument {
    /// The answer bundled with the binary
    pub fn builtin() -> Self {
        Self {
            content: BUILTIN_ANSWER.to_string(),
        }
    }

    /// Parse a document from JSON text
    pub fn from_json_str(raw: &str, path: &Path) -> Result<Self> {
        let doc: Self = serde_json::from_str(raw).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        if doc.content.trim().is_empty() {
            return Err(ConfigError::EmptyDocument);
        }
        Ok(doc)
    }

    /// Read and parse a document file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let doc = Self::from_json_str(&raw, path)?;
        info!(path = %path.display(), chars = doc.content.chars().count(), "Loaded document");
        Ok(doc)
    }

    /// Load `path` if given, otherwise the built-in answer
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::builtin()),
        }
    }
}
