// src/analysis/mod.rs
//! Staged per-project analysis pipeline.
//!
//! Each stage produces a typed intermediate the next one consumes: bean
//! extraction and output parsing populate a fresh `ProjectContext`, the DI
//! reclassifier finalizes every record, aggregation freezes the totals, and
//! the report compiler reduces them to one row. Nothing is shared across
//! projects.

pub mod aggregator;
pub mod di;

use crate::beans::{self, BeanDocument};
use crate::error::Result;
use crate::protocol;
use crate::reporting::{self, ProjectRow};
use crate::types::ProjectContext;

use aggregator::{Aggregator, ProjectTotals};

/// Runs the full pipeline for one project.
///
/// # Errors
/// Fails on a malformed `metrics` record or bean document; the caller skips
/// the project and moves on.
pub fn analyze_project(
    name: &str,
    analyzer_output: &str,
    bean_documents: &[BeanDocument],
    verbose: bool,
) -> Result<ProjectRow> {
    let bean_classes = beans::concrete_classes(bean_documents)?;
    let mut ctx = ProjectContext::new();
    protocol::ingest_output(analyzer_output, &mut ctx)?;
    di::reclassify(&mut ctx, &bean_classes);
    let totals = aggregate(&ctx, verbose);
    Ok(reporting::compile_row(name, &totals))
}

/// Folds every finalized class into fresh accumulators and freezes them.
/// Classes that never received a `metrics` record carry nothing to fold.
fn aggregate(ctx: &ProjectContext, verbose: bool) -> ProjectTotals {
    let mut agg = Aggregator::new();
    for rec in ctx.classes() {
        match (rec.metrics, rec.di) {
            (Some(metrics), Some(di)) => agg.fold_class(&metrics, &di),
            _ => {
                if verbose {
                    eprintln!(
                        "WARN: `{}` has no metrics record; excluded from aggregation",
                        rec.name
                    );
                }
            }
        }
    }
    agg.finalize()
}
