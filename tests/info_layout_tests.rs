use funnel_chart::api::StageInfo;
use funnel_chart::core::{Direction, SubLabelValue};
use funnel_chart::render::LinePrimitive;
use funnel_chart::{ChartState, FunnelChartConfig};

fn horizontal_state(values: Vec<f64>) -> ChartState {
    let config = FunnelChartConfig::new(300.0, 100.0)
        .with_direction(Direction::Horizontal)
        .with_values(values);
    ChartState::new(config).expect("state")
}

#[test]
fn info_formats_values_and_falls_back_to_na_labels() {
    let config = FunnelChartConfig::new(300.0, 100.0)
        .with_values(vec![1234.0, 567.0])
        .with_labels(["Impressions"])
        .with_display_percent(true);
    let state = ChartState::new(config).expect("state");

    assert_eq!(
        state.info(),
        vec![
            StageInfo {
                label: "Impressions".to_owned(),
                sub_label: None,
                value: "1,234".to_owned(),
                percentage: Some("100%".to_owned()),
            },
            StageInfo {
                label: "NA".to_owned(),
                sub_label: None,
                value: "567".to_owned(),
                percentage: Some("45.9%".to_owned()),
            },
        ]
    );
}

#[test]
fn info_hides_percentage_unless_requested() {
    let state = horizontal_state(vec![10.0, 5.0]);
    assert!(state.info().iter().all(|info| info.percentage.is_none()));
}

#[test]
fn nested_info_carries_sub_series_breakdown() {
    let config = FunnelChartConfig::new(300.0, 100.0)
        .with_nested_values(vec![vec![3000.0, 1000.0], vec![0.0, 0.0]])
        .with_labels(["Visits", "Orders"])
        .with_sub_labels(["Direct", "Social"]);
    let state = ChartState::new(config.clone()).expect("state");

    let info = state.info();
    assert_eq!(info[0].value, "4,000");
    assert_eq!(info[0].sub_label.as_deref(), Some("Direct: 75%, Social: 25%"));
    assert_eq!(info[1].sub_label.as_deref(), Some("Direct: 0%, Social: 0%"));

    let raw = ChartState::new(config.with_sub_label_value(SubLabelValue::Raw)).expect("state");
    assert_eq!(
        raw.info()[0].sub_label.as_deref(),
        Some("Direct: 3,000, Social: 1,000")
    );
}

#[test]
fn horizontal_layout_spaces_stages_along_x() {
    let state = horizontal_state(vec![30.0, 20.0, 10.0]);

    let layout = state.info_layout();
    assert_eq!(layout.spacing, 100.0);
    assert_eq!(layout.line_positions, vec![160.0, 260.0, 360.0]);
    assert_eq!(
        layout.text_anchors,
        vec![(85.0, 10.0), (185.0, 10.0), (285.0, 10.0)]
    );
    assert_eq!(
        layout.dividers,
        vec![
            LinePrimitive::new(160.0, 0.0, 160.0, 280.0),
            LinePrimitive::new(260.0, 0.0, 260.0, 280.0),
        ]
    );
}

#[test]
fn vertical_layout_spaces_stages_along_y() {
    let config = FunnelChartConfig::new(300.0, 100.0).with_values(vec![30.0, 20.0, 10.0]);
    let state = ChartState::new(config).expect("state");

    let layout = state.info_layout();
    assert_eq!(layout.line_positions, vec![220.0, 320.0, 420.0]);
    assert_eq!(
        layout.text_anchors,
        vec![(10.0, 145.0), (10.0, 245.0), (10.0, 345.0)]
    );
    assert_eq!(layout.dividers[0], LinePrimitive::new(0.0, 220.0, 220.0, 220.0));
}

#[test]
fn empty_values_have_no_layout() {
    let state = horizontal_state(Vec::new());
    assert!(state.info().is_empty());
    assert!(state.info_layout().line_positions.is_empty());
    assert_eq!(state.section_at(100.0, 10.0), None);
}

#[test]
fn section_lookup_follows_line_positions() {
    let state = horizontal_state(vec![30.0, 20.0, 10.0]);

    assert_eq!(state.section_at(50.0, 0.0), None);
    assert_eq!(state.section_at(60.0, 0.0), Some(0));
    assert_eq!(state.section_at(170.0, 0.0), Some(1));
    assert_eq!(state.section_at(360.0, 0.0), Some(2));
    assert_eq!(state.section_at(361.0, 0.0), None);
    assert_eq!(state.section_at(f64::NAN, 0.0), None);
}
