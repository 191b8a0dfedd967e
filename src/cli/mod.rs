// src/cli/mod.rs
//! CLI entry: merges flags over the config file and drives the project loop.

pub mod args;

pub use args::Cli;

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;

use crate::analysis;
use crate::config::Config;
use crate::discovery::{self, ProjectLayout};
use crate::reporting::{self, ProjectRow};
use crate::runner;

pub fn run(cli: &Cli) -> Result<()> {
    let config = merge_config(cli);
    let projects = discovery::discover_projects(&config)?;
    if projects.is_empty() {
        println!(
            "{}",
            format!("No projects found under {}", config.projects_dir.display()).yellow()
        );
        return Ok(());
    }

    let rows = analyze_all(&projects, &config);
    let payload = reporting::render(&rows, cli.format)?;
    fs::write(&config.output_path, payload)
        .with_context(|| format!("Failed to write {}", config.output_path.display()))?;
    print_summary(&rows, &projects, &config);
    Ok(())
}

fn merge_config(cli: &Cli) -> Config {
    let mut config = Config::load();
    if let Some(dir) = &cli.projects {
        config.projects_dir = dir.clone();
    }
    if let Some(cmd) = &cli.command {
        config.analyzer_command = cmd.clone();
    }
    if let Some(ext) = &cli.extension {
        config.class_extension = ext.trim_start_matches('.').to_string();
    }
    if let Some(out) = &cli.output {
        config.output_path = out.clone();
    }
    config.verbose |= cli.verbose;
    config
}

/// One project at a time, parse-to-report. A failed project is skipped with
/// a warning; its row is simply absent from the output.
fn analyze_all(projects: &[ProjectLayout], config: &Config) -> Vec<ProjectRow> {
    let total = projects.len();
    let mut rows = Vec::new();
    for (index, project) in projects.iter().enumerate() {
        println!(
            "Analyzing project {} of {}: {}",
            index + 1,
            total,
            project.name.bold()
        );
        match analyze_one(project, config) {
            Ok(row) => rows.push(row),
            Err(e) => {
                eprintln!(
                    "{} {e}",
                    format!("warning: skipping `{}`:", project.name).yellow()
                );
            }
        }
    }
    rows
}

fn analyze_one(project: &ProjectLayout, config: &Config) -> crate::error::Result<ProjectRow> {
    let output = runner::capture_output(&config.analyzer_command, &project.class_files)?;
    let bean_documents = discovery::load_bean_documents(&project.bean_documents)?;
    analysis::analyze_project(&project.name, &output, &bean_documents, config.verbose)
}

fn print_summary(rows: &[ProjectRow], projects: &[ProjectLayout], config: &Config) {
    let skipped = projects.len() - rows.len();
    let line = format!(
        "{} of {} project(s) analyzed ({} skipped) -> {}",
        rows.len(),
        projects.len(),
        skipped,
        config.output_path.display()
    );
    println!("{}", line.green());
}
