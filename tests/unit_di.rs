// tests/unit_di.rs
use std::collections::HashSet;

use dicoup_core::analysis::di::{interface_bindings, reclassify, DI_FRAMEWORK_MARKER};
use dicoup_core::types::{ProjectContext, RawMetrics};

fn metrics(cbo: f64, ca: f64, ce: f64, loc: f64) -> RawMetrics {
    RawMetrics {
        wmc: 0.0,
        dit: 0.0,
        noc: 0.0,
        cbo,
        rfc: 0.0,
        lcom: 0.0,
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

fn add_class(ctx: &mut ProjectContext, name: &str, m: Option<RawMetrics>) {
    let rec = ctx.record_mut(name);
    rec.metrics = m;
}

fn beans(names: &[&str]) -> HashSet<String> {
    names.iter().map(|n| (*n).to_string()).collect()
}

#[test]
fn test_local_parameters_count_distinct() {
    let mut ctx = ProjectContext::new();
    add_class(&mut ctx, "com.app.B", Some(metrics(0.0, 0.0, 0.0, 0.0)));
    add_class(&mut ctx, "com.app.C", Some(metrics(0.0, 0.0, 0.0, 0.0)));
    add_class(&mut ctx, "com.app.A", Some(metrics(3.0, 1.0, 5.0, 10.0)));
    {
        let rec = ctx.record_mut("com.app.A");
        rec.parameter_types = vec![
            "com.app.B".to_string(),
            "com.app.B".to_string(),
            "com.app.C".to_string(),
            "java.lang.String".to_string(),
        ];
    }

    reclassify(&mut ctx, &HashSet::new());

    let di = ctx.records["com.app.A"].di.expect("record should be finalized");
    assert_eq!(di.di_param_count, 2, "B twice counts once; String is not local");
    assert_eq!(di.effective_ce, 3.0);
    assert_eq!(di.effective_coupling, 1.0 + 3.0);
}

#[test]
fn test_external_parameters_do_not_count() {
    let mut ctx = ProjectContext::new();
    add_class(&mut ctx, "com.app.A", Some(metrics(2.0, 0.0, 2.0, 5.0)));
    ctx.record_mut("com.app.A").parameter_types =
        vec!["java.util.List".to_string(), "int".to_string()];

    reclassify(&mut ctx, &HashSet::new());

    let di = ctx.records["com.app.A"].di.expect("record should be finalized");
    assert_eq!(di.di_param_count, 0);
    assert_eq!(di.effective_ce, 2.0);
}

#[test]
fn test_xml_injection_requires_framework_marker() {
    let mut ctx = ProjectContext::new();
    add_class(&mut ctx, "com.app.Svc", Some(metrics(0.0, 0.0, 0.0, 0.0)));
    ctx.record_mut("com.app.Svc").interface = "com.app.ISvc".to_string();
    add_class(&mut ctx, "com.app.A", Some(metrics(1.0, 0.0, 1.0, 5.0)));
    // Couples to the bound interface but never touches the framework.
    ctx.record_mut("com.app.A").efferent_couplings = vec!["com.app.ISvc".to_string()];

    reclassify(&mut ctx, &beans(&["com.app.Svc"]));

    let di = ctx.records["com.app.A"].di.expect("record should be finalized");
    assert_eq!(di.di_param_count, 0, "No marker means no XML-mediated injection");
}

#[test]
fn test_xml_injection_counts_bound_interfaces() {
    let mut ctx = ProjectContext::new();
    add_class(&mut ctx, "com.app.Svc", Some(metrics(0.0, 0.0, 0.0, 0.0)));
    ctx.record_mut("com.app.Svc").interface = "com.app.ISvc".to_string();
    add_class(&mut ctx, "com.app.A", Some(metrics(2.0, 1.0, 4.0, 5.0)));
    ctx.record_mut("com.app.A").efferent_couplings = vec![
        format!("org.{DI_FRAMEWORK_MARKER}.context.ApplicationContext"),
        "com.app.ISvc".to_string(),
        "com.app.ISvc".to_string(),
    ];

    reclassify(&mut ctx, &beans(&["com.app.Svc"]));

    let di = ctx.records["com.app.A"].di.expect("record should be finalized");
    assert_eq!(di.di_param_count, 1, "Bound interface counts once despite duplicates");
    assert_eq!(di.effective_ce, 3.0);
    assert_eq!(di.effective_coupling, 1.0 + 3.0);
}

#[test]
fn test_union_of_param_and_xml_injection_is_distinct() {
    let mut ctx = ProjectContext::new();
    // The interface itself is also a project-local type and a parameter.
    add_class(&mut ctx, "com.app.ISvc", Some(metrics(0.0, 0.0, 0.0, 0.0)));
    add_class(&mut ctx, "com.app.Svc", Some(metrics(0.0, 0.0, 0.0, 0.0)));
    ctx.record_mut("com.app.Svc").interface = "com.app.ISvc".to_string();
    add_class(&mut ctx, "com.app.A", Some(metrics(2.0, 0.0, 3.0, 5.0)));
    {
        let rec = ctx.record_mut("com.app.A");
        rec.parameter_types = vec!["com.app.ISvc".to_string()];
        rec.efferent_couplings = vec![
            format!("org.{DI_FRAMEWORK_MARKER}.beans.factory.BeanFactory"),
            "com.app.ISvc".to_string(),
        ];
    }

    reclassify(&mut ctx, &beans(&["com.app.Svc"]));

    let di = ctx.records["com.app.A"].di.expect("record should be finalized");
    assert_eq!(di.di_param_count, 1, "Same name via both routes counts once");
}

#[test]
fn test_negative_effective_ce_is_preserved() {
    let mut ctx = ProjectContext::new();
    add_class(&mut ctx, "com.app.B", Some(metrics(0.0, 0.0, 0.0, 0.0)));
    add_class(&mut ctx, "com.app.C", Some(metrics(0.0, 0.0, 0.0, 0.0)));
    add_class(&mut ctx, "com.app.A", Some(metrics(1.0, 2.0, 1.0, 5.0)));
    ctx.record_mut("com.app.A").parameter_types =
        vec!["com.app.B".to_string(), "com.app.C".to_string()];

    reclassify(&mut ctx, &HashSet::new());

    let di = ctx.records["com.app.A"].di.expect("record should be finalized");
    assert_eq!(di.effective_ce, -1.0, "DI count above CE must not be clamped");
    assert_eq!(di.effective_coupling, 2.0 - 1.0);
}

#[test]
fn test_class_without_metrics_stays_unfinalized() {
    let mut ctx = ProjectContext::new();
    add_class(&mut ctx, "com.app.A", None);
    ctx.record_mut("com.app.A").parameter_types = vec!["com.app.A".to_string()];

    reclassify(&mut ctx, &HashSet::new());

    assert!(ctx.records["com.app.A"].di.is_none());
}

#[test]
fn test_interface_bindings_skip_unknown_and_empty() {
    let mut ctx = ProjectContext::new();
    add_class(&mut ctx, "com.app.WithIface", Some(metrics(0.0, 0.0, 0.0, 0.0)));
    ctx.record_mut("com.app.WithIface").interface = "com.app.I".to_string();
    add_class(&mut ctx, "com.app.NoIface", Some(metrics(0.0, 0.0, 0.0, 0.0)));

    let bindings = interface_bindings(
        &ctx,
        &beans(&["com.app.WithIface", "com.app.NoIface", "com.other.Unparsed"]),
    );

    assert_eq!(bindings.len(), 1);
    assert!(bindings.contains("com.app.I"));
}
