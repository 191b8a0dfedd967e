// src/runner.rs
//! Invokes the external analyzer and captures its output stream.

use crate::error::{AnalyzerError, Result};
use std::fs;
use std::path::PathBuf;
use std::process::Command;

/// Handoff file the analyzer script reads the class-file list from.
pub const FILE_LIST_NAME: &str = "fileNames.txt";

/// Runs the configured analyzer over one project's class files and returns
/// the full captured stdout as a single text blob. The call blocks until the
/// process exits; there is no streaming.
///
/// # Errors
/// Returns error if the handoff file cannot be written, the process cannot
/// be spawned, or the process exits unsuccessfully.
pub fn capture_output(command: &str, class_files: &[PathBuf]) -> Result<String> {
    write_file_list(class_files)?;
    let (program, args) = split_command(command)?;
    let output = Command::new(program)
        .args(&args)
        .output()
        .map_err(|source| AnalyzerError::Io {
            source,
            path: PathBuf::from(program),
        })?;
    if !output.status.success() {
        return Err(AnalyzerError::Process {
            command: command.to_string(),
            detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn write_file_list(class_files: &[PathBuf]) -> Result<()> {
    let joined = class_files
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join("\n");
    fs::write(FILE_LIST_NAME, joined).map_err(|source| AnalyzerError::Io {
        source,
        path: PathBuf::from(FILE_LIST_NAME),
    })
}

fn split_command(command: &str) -> Result<(&str, Vec<&str>)> {
    let mut parts = command.split_whitespace();
    let Some(program) = parts.next() else {
        return Err(AnalyzerError::Process {
            command: command.to_string(),
            detail: "empty analyzer command".to_string(),
        });
    };
    Ok((program, parts.collect()))
}
