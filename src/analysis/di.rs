// src/analysis/di.rs
//! DI reclassification: splits each class's coupling into an organic share
//! and a share supplied by injection.

use std::collections::HashSet;

use crate::types::{ClassRecord, DiFacts, ProjectContext};

/// An efferent coupling containing this namespace marks the class as wired
/// through XML bean configuration.
pub const DI_FRAMEWORK_MARKER: &str = "springframework";

/// Interface names implemented by classes that are declared as beans.
/// Bean entries with no parsed record, and records with no interface, are
/// dropped; an empty name can never match a coupling target.
#[must_use]
pub fn interface_bindings(
    ctx: &ProjectContext,
    bean_classes: &HashSet<String>,
) -> HashSet<String> {
    bean_classes
        .iter()
        .filter_map(|class| ctx.records.get(class))
        .map(|rec| rec.interface.clone())
        .filter(|name| !name.is_empty())
        .collect()
}

/// Finalizes every record in the context. Runs once, after parsing and bean
/// extraction are both complete; the derived values are never recomputed.
pub fn reclassify(ctx: &mut ProjectContext, bean_classes: &HashSet<String>) {
    let bindings = interface_bindings(ctx, bean_classes);
    let registry = &ctx.registry;
    for rec in ctx.records.values_mut() {
        rec.di = compute_facts(rec, registry, &bindings);
    }
}

/// `None` when the class never received a `metrics` record: there is no CE
/// or CA to reclassify against.
fn compute_facts(
    rec: &ClassRecord,
    registry: &HashSet<String>,
    bindings: &HashSet<String>,
) -> Option<DiFacts> {
    let metrics = rec.metrics?;

    // Constructor injection proxy: parameter types defined inside the
    // analyzed project.
    let mut injected: HashSet<&str> = rec
        .parameter_types
        .iter()
        .filter(|t| registry.contains(t.as_str()))
        .map(String::as_str)
        .collect();

    // XML injection only counts for classes that actually touch the DI
    // framework somewhere in their efferent couplings.
    if rec
        .efferent_couplings
        .iter()
        .any(|c| c.contains(DI_FRAMEWORK_MARKER))
    {
        injected.extend(
            rec.efferent_couplings
                .iter()
                .filter(|c| bindings.contains(c.as_str()))
                .map(String::as_str),
        );
    }

    let di_param_count = injected.len();
    // Not clamped: a DI count above CE goes negative and stays negative.
    let effective_ce = metrics.ce - di_param_count as f64;
    Some(DiFacts {
        di_param_count,
        effective_ce,
        effective_coupling: metrics.ca + effective_ce,
    })
}
