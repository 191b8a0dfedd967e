// src/analysis/aggregator.rs
//! Running-aggregate statistics, one accumulator per tracked metric.

use std::collections::HashMap;

use crate::types::{DiFacts, RawMetrics};

/// Keys of the per-project accumulators. `Dce` and `Dcbo` are the
/// DI-excluded counterparts of the raw coupling values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKey {
    Ca,
    Ce,
    Dce,
    Cbo,
    Loc,
    Dcbo,
    Lcom,
    Rfc,
    DiParams,
}

impl MetricKey {
    pub const ALL: [MetricKey; 9] = [
        MetricKey::Ca,
        MetricKey::Ce,
        MetricKey::Dce,
        MetricKey::Cbo,
        MetricKey::Loc,
        MetricKey::Dcbo,
        MetricKey::Lcom,
        MetricKey::Rfc,
        MetricKey::DiParams,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            MetricKey::Ca => "CA",
            MetricKey::Ce => "CE",
            MetricKey::Dce => "DCE",
            MetricKey::Cbo => "CBO",
            MetricKey::Loc => "LOC",
            MetricKey::Dcbo => "DCBO",
            MetricKey::Lcom => "LCOM",
            MetricKey::Rfc => "RFC",
            MetricKey::DiParams => "DI_PARAMS",
        }
    }
}

/// Running sum and count for one named metric. The mean is computed once at
/// freeze time; with zero values folded it is 0.0/0.0 = NaN, which is
/// propagated rather than masked.
#[derive(Debug, Clone)]
pub struct MetricAccumulator {
    name: &'static str,
    sum: f64,
    count: u64,
    mean: f64,
}

impl MetricAccumulator {
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            sum: 0.0,
            count: 0,
            mean: f64::NAN,
        }
    }

    pub fn add(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    pub fn compute_mean(&mut self) {
        self.mean = self.sum / self.count as f64;
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn sum(&self) -> f64 {
        self.sum
    }

    #[must_use]
    pub fn count(&self) -> u64 {
        self.count
    }

    #[must_use]
    pub fn mean(&self) -> f64 {
        self.mean
    }
}

/// Folds per-class values into the per-project accumulators.
#[derive(Debug)]
pub struct Aggregator {
    totals: HashMap<MetricKey, MetricAccumulator>,
}

impl Aggregator {
    /// Pre-creates every tracked accumulator, fresh for one project.
    #[must_use]
    pub fn new() -> Self {
        let totals = MetricKey::ALL
            .into_iter()
            .map(|key| (key, MetricAccumulator::new(key.name())))
            .collect();
        Self { totals }
    }

    pub fn add(&mut self, key: MetricKey, value: f64) {
        self.totals
            .entry(key)
            .or_insert_with(|| MetricAccumulator::new(key.name()))
            .add(value);
    }

    /// One fold per class: raw couplings, size, cohesion, and the
    /// DI-excluded derivatives. Each accumulator's count advances by exactly
    /// one.
    pub fn fold_class(&mut self, metrics: &RawMetrics, di: &DiFacts) {
        self.add(MetricKey::Ca, metrics.ca);
        self.add(MetricKey::Ce, metrics.ce);
        self.add(MetricKey::Dce, di.effective_ce);
        self.add(MetricKey::Cbo, metrics.cbo);
        self.add(MetricKey::Loc, metrics.loc);
        self.add(MetricKey::Dcbo, di.effective_coupling);
        self.add(MetricKey::Lcom, metrics.lcom);
        self.add(MetricKey::Rfc, metrics.rfc);
        self.add(MetricKey::DiParams, di.di_param_count as f64);
    }

    /// Computes every mean and freezes the result. Consuming the aggregator
    /// is what keeps anything from being added after the means are read.
    #[must_use]
    pub fn finalize(mut self) -> ProjectTotals {
        for acc in self.totals.values_mut() {
            acc.compute_mean();
        }
        ProjectTotals {
            totals: self.totals,
        }
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}

/// Frozen per-project aggregates.
#[derive(Debug)]
pub struct ProjectTotals {
    totals: HashMap<MetricKey, MetricAccumulator>,
}

impl ProjectTotals {
    #[must_use]
    pub fn sum(&self, key: MetricKey) -> f64 {
        self.totals.get(&key).map_or(f64::NAN, MetricAccumulator::sum)
    }

    #[must_use]
    pub fn mean(&self, key: MetricKey) -> f64 {
        self.totals.get(&key).map_or(f64::NAN, MetricAccumulator::mean)
    }

    #[must_use]
    pub fn count(&self, key: MetricKey) -> u64 {
        self.totals.get(&key).map_or(0, MetricAccumulator::count)
    }
}
