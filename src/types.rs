// src/types.rs
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// The 18 per-class indicators carried by one `metrics` record, in wire
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RawMetrics {
    /// Weighted methods per class.
    pub wmc: f64,
    /// Depth of inheritance tree.
    pub dit: f64,
    /// Number of children.
    pub noc: f64,
    /// Coupling between objects.
    pub cbo: f64,
    /// Response for class.
    pub rfc: f64,
    /// Lack of cohesion in methods.
    pub lcom: f64,
    /// Afferent couplings.
    pub ca: f64,
    /// Efferent couplings.
    pub ce: f64,
    /// Number of public methods.
    pub npm: f64,
    /// Lack of cohesion in methods, varying between 0 and 2.
    pub lcom3: f64,
    /// Lines of code.
    pub loc: f64,
    /// Data access metric.
    pub dam: f64,
    /// Measure of aggregation.
    pub moa: f64,
    /// Measure of functional abstraction.
    pub mfa: f64,
    /// Cohesion among methods of a class.
    pub cam: f64,
    /// Inheritance coupling.
    pub ic: f64,
    /// Coupling between methods.
    pub cbm: f64,
    /// Average method complexity.
    pub amc: f64,
}

/// Coupling shares attributable to dependency injection, written once per
/// class after parsing completes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiFacts {
    /// Distinct collaborators supplied by injection rather than construction.
    pub di_param_count: usize,
    /// Raw CE minus the DI parameter count. Negative values are preserved.
    pub effective_ce: f64,
    /// Raw CA plus the effective efferent coupling.
    pub effective_coupling: f64,
}

/// Everything known about one analyzed class.
///
/// Structural facts accumulate across multiple protocol lines; the interface
/// name and the raw metrics are replaced wholesale when their records repeat.
#[derive(Debug, Clone, Default)]
pub struct ClassRecord {
    pub name: String,
    pub metrics: Option<RawMetrics>,
    pub parameter_types: Vec<String>,
    pub interface: String,
    pub efferent_couplings: Vec<String>,
    pub di: Option<DiFacts>,
}

impl ClassRecord {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }
}

/// Per-project analysis state, created fresh for each project and handed
/// through the pipeline stages explicitly.
#[derive(Debug, Default)]
pub struct ProjectContext {
    /// Every class name seen while parsing. Membership here is the test for
    /// "type defined within the analyzed project".
    pub registry: HashSet<String>,
    /// Class names in first-seen order.
    pub order: Vec<String>,
    pub records: HashMap<String, ClassRecord>,
}

impl ProjectContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches the record for `class`, creating it (and registering the
    /// name) on first reference.
    pub fn record_mut(&mut self, class: &str) -> &mut ClassRecord {
        if !self.records.contains_key(class) {
            self.registry.insert(class.to_string());
            self.order.push(class.to_string());
        }
        self.records
            .entry(class.to_string())
            .or_insert_with(|| ClassRecord::new(class))
    }

    #[must_use]
    pub fn is_local_type(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    #[must_use]
    pub fn class_count(&self) -> usize {
        self.order.len()
    }

    /// Records in first-seen order.
    pub fn classes(&self) -> impl Iterator<Item = &ClassRecord> {
        self.order.iter().filter_map(|name| self.records.get(name))
    }
}
