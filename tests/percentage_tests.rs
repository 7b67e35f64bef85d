use funnel_chart::core::PercentageMode;
use funnel_chart::{ChartState, FunnelChartConfig, FunnelGeometrySource, FunnelUpdate};

fn state_with(values: Vec<f64>, mode: PercentageMode) -> ChartState {
    let config = FunnelChartConfig::new(400.0, 200.0)
        .with_values(values)
        .with_pct_mode(mode);
    ChartState::new(config).expect("state")
}

#[test]
fn previous_mode_compares_consecutive_stages() {
    let state = state_with(vec![50.0, 25.0, 25.0], PercentageMode::Previous);
    assert_eq!(state.percentages(), vec![100.0, 50.0, 100.0]);
}

#[test]
fn max_mode_rounds_to_one_decimal() {
    let state = state_with(vec![1234.0, 567.0, 0.0], PercentageMode::Max);
    assert_eq!(state.percentages(), vec![100.0, 45.9, 0.0]);
}

#[test]
fn first_mode_compares_against_first_stage() {
    let state = state_with(vec![200.0, 150.0, 300.0], PercentageMode::First);
    assert_eq!(state.percentages(), vec![100.0, 75.0, 150.0]);
}

#[test]
fn zero_magnitudes_never_produce_nan() {
    for mode in [
        PercentageMode::Max,
        PercentageMode::Previous,
        PercentageMode::First,
    ] {
        let state = state_with(vec![0.0, 0.0, 7.0, 0.0], mode);
        let percentages = state.percentages();
        assert_eq!(percentages.len(), 4);
        assert!(percentages.iter().all(|pct| pct.is_finite() && *pct >= 0.0));
    }
}

#[test]
fn nested_values_aggregate_before_percentages() {
    let config = FunnelChartConfig::new(400.0, 200.0)
        .with_nested_values(vec![vec![60.0, 40.0], vec![30.0, 20.0], vec![0.0, 0.0]]);
    let state = ChartState::new(config).expect("state");

    assert_eq!(state.values_2d(), vec![100.0, 50.0, 0.0]);
    assert_eq!(state.percentages(), vec![100.0, 50.0, 0.0]);
    assert_eq!(
        state.percentages_2d(),
        vec![vec![60.0, 40.0], vec![60.0, 40.0], vec![0.0, 0.0]]
    );
}

#[test]
fn percentages_follow_mode_changes() {
    let mut state = state_with(vec![80.0, 40.0, 10.0], PercentageMode::Max);
    assert_eq!(state.percentages(), vec![100.0, 50.0, 12.5]);

    state
        .update(FunnelUpdate::new().with_pct_mode(PercentageMode::Previous))
        .expect("update");
    assert_eq!(state.percentages(), vec![100.0, 50.0, 25.0]);

    state
        .update(FunnelUpdate::new().with_values(vec![10.0, 40.0]))
        .expect("update");
    assert_eq!(state.percentages(), vec![100.0, 400.0]);
}
