// src/config.rs
use crate::error::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Optional config file, looked up in the working directory.
pub const CONFIG_FILE: &str = "dicoup.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base directory holding one subdirectory per project.
    #[serde(default = "default_projects_dir")]
    pub projects_dir: PathBuf,
    /// Command invoked once per project; reads the class-file list from the
    /// handoff file and prints protocol lines to stdout.
    #[serde(default = "default_analyzer_command")]
    pub analyzer_command: String,
    /// Extension of the files handed to the analyzer.
    #[serde(default = "default_class_extension")]
    pub class_extension: String,
    /// Filename pattern selecting bean-configuration documents.
    #[serde(default = "default_bean_doc_pattern")]
    pub bean_doc_pattern: String,
    /// Report destination.
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
    #[serde(default)]
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            projects_dir: default_projects_dir(),
            analyzer_command: default_analyzer_command(),
            class_extension: default_class_extension(),
            bean_doc_pattern: default_bean_doc_pattern(),
            output_path: default_output_path(),
            verbose: false,
        }
    }
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `dicoup.toml` when present; a missing file means defaults.
    #[must_use]
    pub fn load() -> Self {
        match fs::read_to_string(CONFIG_FILE) {
            Ok(content) => Self::parse_toml(&content),
            Err(_) => Self::default(),
        }
    }

    /// An invalid config file falls back to defaults with a warning rather
    /// than aborting the run.
    #[must_use]
    pub fn parse_toml(content: &str) -> Self {
        toml::from_str(content).unwrap_or_else(|e| {
            eprintln!("WARN: {CONFIG_FILE} is invalid ({e}); using defaults");
            Self::default()
        })
    }

    /// Compiled filename filter for bean-configuration documents.
    ///
    /// # Errors
    /// Returns error if the configured pattern is not a valid regex.
    pub fn bean_doc_regex(&self) -> Result<Regex> {
        Ok(Regex::new(&self.bean_doc_pattern)?)
    }
}

fn default_projects_dir() -> PathBuf {
    PathBuf::from("projects")
}

fn default_analyzer_command() -> String {
    if cfg!(windows) {
        "ckjm_analysis.bat".to_string()
    } else {
        "./ckjm_analysis.sh".to_string()
    }
}

fn default_class_extension() -> String {
    "class".to_string()
}

fn default_bean_doc_pattern() -> String {
    r"(?i)\.xml$".to_string()
}

fn default_output_path() -> PathBuf {
    PathBuf::from("metric_output.csv")
}
