use funnel_chart::telemetry::init_default_tracing;

#[cfg(feature = "telemetry")]
#[test]
fn default_tracing_installs_once() {
    assert!(init_default_tracing());
    assert!(!init_default_tracing());
}

#[cfg(not(feature = "telemetry"))]
#[test]
fn default_tracing_is_inert_without_feature() {
    assert!(!init_default_tracing());
}
