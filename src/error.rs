// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("I/O error: {source} (path: {})", path.display())]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("malformed metrics record for `{class_name}`: {reason}")]
    MetricParse { class_name: String, reason: String },

    #[error("malformed bean configuration {}: {reason}", path.display())]
    ConfigParse { path: PathBuf, reason: String },

    #[error("analyzer command `{command}` failed: {detail}")]
    Process { command: String, detail: String },

    #[error("Regex error: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
