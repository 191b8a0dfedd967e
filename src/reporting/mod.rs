// src/reporting/mod.rs
//! Project-level report compilation and rendering.

mod json;
mod table;

use clap::ValueEnum;
use serde::Serialize;

use crate::analysis::aggregator::{MetricKey, ProjectTotals};

/// Column order of the report table.
pub const HEADER: [&str; 10] = [
    "Project", "DI", "LOC", "CBO", "NCBO", "DCBO", "NDCBO", "CA", "CE", "DCE",
];

/// Maps an unbounded non-negative coupling value into [0, 1).
#[must_use]
pub fn normalized_coupling(x: f64) -> f64 {
    1.0 - 1.0 / (1.0 + x)
}

/// Ratio with an explicit zero-denominator guard.
#[must_use]
pub fn guarded_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// One output row per analyzed project; immutable once compiled. Mean-based
/// fields are NaN for a project with zero classes and stay that way.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectRow {
    pub project: String,
    pub di_proportion: f64,
    pub total_loc: f64,
    pub mean_cbo: f64,
    pub normalized_cbo: f64,
    pub mean_effective_coupling: f64,
    pub normalized_effective_coupling: f64,
    pub mean_ca: f64,
    pub mean_ce: f64,
    pub mean_effective_ce: f64,
}

/// Reduces a project's frozen totals to its report row.
#[must_use]
pub fn compile_row(project: &str, totals: &ProjectTotals) -> ProjectRow {
    let mean_cbo = totals.mean(MetricKey::Cbo);
    let mean_dcbo = totals.mean(MetricKey::Dcbo);
    ProjectRow {
        project: project.to_string(),
        di_proportion: guarded_ratio(totals.sum(MetricKey::DiParams), totals.sum(MetricKey::Ce)),
        total_loc: totals.sum(MetricKey::Loc),
        mean_cbo,
        normalized_cbo: normalized_coupling(mean_cbo),
        mean_effective_coupling: mean_dcbo,
        normalized_effective_coupling: normalized_coupling(mean_dcbo),
        mean_ca: totals.mean(MetricKey::Ca),
        mean_ce: totals.mean(MetricKey::Ce),
        mean_effective_ce: totals.mean(MetricKey::Dce),
    }
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Renders all rows in the requested format.
///
/// # Errors
/// Returns error if serialization fails.
pub fn render(rows: &[ProjectRow], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Csv => table::render(rows),
        OutputFormat::Json => json::render(rows),
    }
}
