use funnel_chart::api::{FUNNEL_SNAPSHOT_JSON_SCHEMA_V1, FunnelSnapshot};
use funnel_chart::core::{Direction, PercentageMode};
use funnel_chart::render::NullRenderer;
use funnel_chart::{FunnelChart, FunnelChartConfig, FunnelError};

fn chart() -> FunnelChart<NullRenderer> {
    let config = FunnelChartConfig::new(300.0, 100.0)
        .with_direction(Direction::Horizontal)
        .with_values(vec![20.0, 10.0, 5.0])
        .with_labels(["Visits", "Carts", "Orders"])
        .with_display_percent(true);
    FunnelChart::new(NullRenderer::default(), config).expect("chart")
}

#[test]
fn snapshot_captures_derived_state() {
    let snapshot = chart().snapshot();

    assert_eq!(snapshot.direction, Direction::Horizontal);
    assert_eq!(snapshot.pct_mode, PercentageMode::Max);
    assert_eq!(snapshot.data_size, 3);
    assert_eq!(snapshot.sub_data_size, 0);
    assert_eq!(snapshot.percentages, vec![100.0, 50.0, 25.0]);
    assert!(snapshot.percentages_2d.is_empty());
    assert_eq!(snapshot.geometry.cross_axis_points.len(), 2);
    assert_eq!(snapshot.geometry.path_definitions.len(), 1);
    assert_eq!(snapshot.info[2].percentage.as_deref(), Some("25%"));
}

#[test]
fn snapshot_metadata_keeps_insertion_order() {
    let snapshot = chart().snapshot();

    let keys: Vec<&str> = snapshot.metadata.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["graph_type", "gradient_direction", "labels", "sub_labels"]);
    assert_eq!(snapshot.metadata["graph_type"], "normal");
    assert_eq!(snapshot.metadata["labels"], "3");
}

#[test]
fn snapshot_json_roundtrip() {
    let snapshot = chart().snapshot();

    let json = snapshot
        .to_json_contract_v1_pretty()
        .expect("snapshot should serialize");
    assert!(json.contains(&format!("\"schema_version\": {FUNNEL_SNAPSHOT_JSON_SCHEMA_V1}")));

    let restored = FunnelSnapshot::from_json_compat_str(&json).expect("snapshot should parse");
    assert_eq!(restored, snapshot);
}

#[test]
fn bare_snapshot_json_is_accepted() {
    let snapshot = chart().snapshot();

    let json = serde_json::to_string(&snapshot).expect("bare snapshot");
    let restored = FunnelSnapshot::from_json_compat_str(&json).expect("snapshot should parse");
    assert_eq!(restored, snapshot);
}

#[test]
fn unknown_schema_version_is_rejected() {
    let snapshot = chart().snapshot();
    let json = snapshot
        .to_json_contract_v1_pretty()
        .expect("snapshot should serialize")
        .replacen("\"schema_version\": 1", "\"schema_version\": 7", 1);

    let err = FunnelSnapshot::from_json_compat_str(&json).expect_err("version 7 is unknown");
    assert!(matches!(err, FunnelError::Serialization(_)));
}

#[test]
fn nested_snapshot_reports_sub_series() {
    let config = FunnelChartConfig::new(300.0, 100.0)
        .with_nested_values(vec![vec![30.0, 10.0], vec![10.0, 10.0]])
        .with_sub_labels(["Direct", "Social"]);
    let chart = FunnelChart::new(NullRenderer::default(), config).expect("chart");

    let snapshot = chart.snapshot();
    assert_eq!(snapshot.direction, Direction::Vertical);
    assert_eq!(snapshot.sub_data_size, 2);
    assert_eq!(snapshot.percentages_2d, vec![vec![75.0, 25.0], vec![50.0, 50.0]]);
    assert_eq!(snapshot.geometry.cross_axis_points.len(), 3);
    assert_eq!(snapshot.metadata["graph_type"], "2d");
    assert_eq!(snapshot.metadata["sub_labels"], "2");
}

#[test]
fn config_json_roundtrip() {
    let config = FunnelChartConfig::new(640.0, 480.0)
        .with_nested_values(vec![vec![3.0, 1.0], vec![2.0, 2.0]])
        .with_labels(["Visits", "Orders"])
        .with_pct_mode(PercentageMode::Previous);

    let json = config.to_json_pretty().expect("config should serialize");
    assert!(json.contains("\"pctMode\": \"previous\""));
    let restored = FunnelChartConfig::from_json_str(&json).expect("config should deserialize");
    assert_eq!(restored, config);
}
