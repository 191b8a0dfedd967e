// tests/unit_aggregator.rs
use dicoup_core::analysis::aggregator::{Aggregator, MetricAccumulator, MetricKey};
use dicoup_core::types::{DiFacts, RawMetrics};

fn metrics(cbo: f64, ca: f64, ce: f64, loc: f64) -> RawMetrics {
    RawMetrics {
        wmc: 0.0,
        dit: 0.0,
        noc: 0.0,
        cbo,
        rfc: 4.0,
        lcom: 3.0,
        ca,
        ce,
        npm: 0.0,
        lcom3: 0.0,
        loc,
        dam: 0.0,
        moa: 0.0,
        mfa: 0.0,
        cam: 0.0,
        ic: 0.0,
        cbm: 0.0,
        amc: 0.0,
    }
}

#[test]
fn test_mean_is_sum_over_count() {
    let mut acc = MetricAccumulator::new("CBO");
    for value in [1.0, 2.0, 3.0, 4.0] {
        acc.add(value);
    }
    acc.compute_mean();
    assert_eq!(acc.sum(), 10.0);
    assert_eq!(acc.count(), 4);
    assert_eq!(acc.mean(), 2.5);
}

#[test]
fn test_empty_accumulator_mean_is_nan() {
    let mut acc = MetricAccumulator::new("CBO");
    acc.compute_mean();
    assert!(acc.mean().is_nan(), "Zero classes must surface as NaN, not 0");
}

#[test]
fn test_fold_class_advances_every_key_once() {
    let mut agg = Aggregator::new();
    let di = DiFacts {
        di_param_count: 1,
        effective_ce: 1.0,
        effective_coupling: 2.0,
    };
    agg.fold_class(&metrics(3.0, 1.0, 2.0, 10.0), &di);
    agg.fold_class(&metrics(1.0, 2.0, 0.0, 5.0), &di);

    let totals = agg.finalize();
    for key in MetricKey::ALL {
        assert_eq!(totals.count(key), 2, "{} should be folded once per class", key.name());
    }
}

#[test]
fn test_finalize_freezes_expected_values() {
    let mut agg = Aggregator::new();
    agg.fold_class(
        &metrics(3.0, 1.0, 2.0, 10.0),
        &DiFacts {
            di_param_count: 1,
            effective_ce: 1.0,
            effective_coupling: 2.0,
        },
    );
    agg.fold_class(
        &metrics(1.0, 2.0, 0.0, 5.0),
        &DiFacts {
            di_param_count: 0,
            effective_ce: 0.0,
            effective_coupling: 2.0,
        },
    );

    let totals = agg.finalize();
    assert_eq!(totals.mean(MetricKey::Cbo), 2.0);
    assert_eq!(totals.sum(MetricKey::Ce), 2.0);
    assert_eq!(totals.sum(MetricKey::Loc), 15.0);
    assert_eq!(totals.sum(MetricKey::DiParams), 1.0);
    assert_eq!(totals.mean(MetricKey::Dce), 0.5);
    assert_eq!(totals.mean(MetricKey::Dcbo), 2.0);
    assert_eq!(totals.mean(MetricKey::Lcom), 3.0);
    assert_eq!(totals.mean(MetricKey::Rfc), 4.0);
}

#[test]
fn test_direct_add_reaches_named_accumulator() {
    let mut agg = Aggregator::new();
    agg.add(MetricKey::Loc, 7.0);
    agg.add(MetricKey::Loc, 3.0);
    let totals = agg.finalize();
    assert_eq!(totals.sum(MetricKey::Loc), 10.0);
    assert_eq!(totals.count(MetricKey::Loc), 2);
    // Untouched accumulators exist but have seen nothing.
    assert_eq!(totals.count(MetricKey::Cbo), 0);
    assert!(totals.mean(MetricKey::Cbo).is_nan());
}
