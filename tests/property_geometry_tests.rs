use funnel_chart::core::{Direction, PercentageMode};
use funnel_chart::{ChartState, FunnelChartConfig};
use proptest::prelude::*;

fn flat_state(values: Vec<f64>, width: f64, height: f64, direction: Direction) -> ChartState {
    let config = FunnelChartConfig::new(width, height)
        .with_direction(direction)
        .with_values(values);
    ChartState::new(config).expect("valid state")
}

fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Horizontal), Just(Direction::Vertical)]
}

fn pct_mode_strategy() -> impl Strategy<Value = PercentageMode> {
    prop_oneof![
        Just(PercentageMode::Max),
        Just(PercentageMode::Previous),
        Just(PercentageMode::First),
    ]
}

proptest! {
    #[test]
    fn flat_boundaries_mirror_about_centerline(
        values in prop::collection::vec(0.0f64..1_000_000.0, 1..24),
        width in 10.0f64..2_000.0,
        height in 10.0f64..2_000.0,
        direction in direction_strategy()
    ) {
        let state = flat_state(values.clone(), width, height, direction);
        let full = match direction {
            Direction::Horizontal => height,
            Direction::Vertical => width,
        };

        let points = state.geometry().cross_axis_points;
        prop_assert_eq!(points.len(), 2);
        prop_assert_eq!(points[0].len(), values.len() + 1);
        for (outer, mirror) in points[0].iter().zip(&points[1]) {
            prop_assert!((outer + mirror - full).abs() <= 0.1 + 1e-9);
            prop_assert!(*outer >= 0.0 && *outer <= full / 2.0 + 0.05);
        }
    }

    #[test]
    fn percentages_are_finite_and_non_negative(
        values in prop::collection::vec(0.0f64..1_000_000.0, 0..24),
        pct_mode in pct_mode_strategy()
    ) {
        let config = FunnelChartConfig::new(300.0, 200.0)
            .with_values(values.clone())
            .with_pct_mode(pct_mode);
        let state = ChartState::new(config).expect("valid state");

        let percentages = state.percentages();
        prop_assert_eq!(percentages.len(), values.len());
        prop_assert!(percentages.iter().all(|pct| pct.is_finite() && *pct >= 0.0));
    }

    #[test]
    fn geometry_is_idempotent(
        values in prop::collection::vec(0.0f64..10_000.0, 0..16),
        direction in direction_strategy()
    ) {
        let state = flat_state(values, 640.0, 360.0, direction);
        prop_assert_eq!(state.geometry(), state.geometry());
    }

    #[test]
    fn nested_boundaries_are_ordered_across_the_band(
        rows in (1usize..8, 2usize..5).prop_flat_map(|(stages, series)| {
            prop::collection::vec(prop::collection::vec(0.0f64..10_000.0, series), stages)
        })
    ) {
        let config = FunnelChartConfig::new(400.0, 300.0)
            .with_direction(Direction::Horizontal)
            .with_nested_values(rows.clone());
        let state = ChartState::new(config).expect("valid state");

        let points = state.geometry().cross_axis_points;
        prop_assume!(points[0].iter().any(|&point| point != 0.0));

        prop_assert_eq!(points.len(), rows[0].len() + 1);
        for pair in points.windows(2) {
            for (inner, outer) in pair[0].iter().zip(&pair[1]) {
                prop_assert!(*outer + 1.5 >= *inner);
            }
        }
    }
}
