use ordered_float::OrderedFloat;

use crate::core::number::percent_of;
use crate::core::types::PercentageMode;

/// Largest magnitude of a series, `0.0` when empty.
#[must_use]
pub fn max_magnitude(values: &[f64]) -> f64 {
    values
        .iter()
        .copied()
        .map(OrderedFloat)
        .max()
        .map_or(0.0, |max| max.0)
}

/// Derives one chart-level percentage per stage from aggregated magnitudes.
///
/// Zero bases never produce NaN or infinity: the affected stage reports `0`.
#[must_use]
pub fn stage_percentages(magnitudes: &[f64], mode: PercentageMode) -> Vec<f64> {
    match mode {
        PercentageMode::Max => {
            let max = max_magnitude(magnitudes);
            magnitudes
                .iter()
                .map(|&value| percent_of(value, max))
                .collect()
        }
        PercentageMode::Previous => magnitudes
            .iter()
            .enumerate()
            .map(|(index, &value)| match index {
                0 => 100.0,
                _ => percent_of(value, magnitudes[index - 1]),
            })
            .collect(),
        PercentageMode::First => {
            let first = magnitudes.first().copied().unwrap_or(0.0);
            magnitudes
                .iter()
                .map(|&value| percent_of(value, first))
                .collect()
        }
    }
}

/// Share of each sub-series within its stage total.
#[must_use]
pub fn share_percentages(rows: &[Vec<f64>]) -> Vec<Vec<f64>> {
    rows.iter()
        .map(|row| {
            let total: f64 = row.iter().sum();
            row.iter().map(|&value| percent_of(value, total)).collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previous_mode_starts_at_hundred() {
        assert_eq!(
            stage_percentages(&[50.0, 25.0, 25.0], PercentageMode::Previous),
            vec![100.0, 50.0, 100.0]
        );
    }

    #[test]
    fn previous_mode_after_zero_stage_is_zero() {
        assert_eq!(
            stage_percentages(&[10.0, 0.0, 5.0], PercentageMode::Previous),
            vec![100.0, 0.0, 0.0]
        );
    }

    #[test]
    fn max_mode_scales_to_largest_stage() {
        assert_eq!(
            stage_percentages(&[10.0, 20.0, 5.0], PercentageMode::Max),
            vec![50.0, 100.0, 25.0]
        );
    }

    #[test]
    fn first_mode_with_zero_first_stage_is_all_zero() {
        assert_eq!(
            stage_percentages(&[0.0, 20.0, 5.0], PercentageMode::First),
            vec![0.0, 0.0, 0.0]
        );
    }

    #[test]
    fn empty_magnitudes_give_empty_percentages() {
        for mode in [
            PercentageMode::Max,
            PercentageMode::Previous,
            PercentageMode::First,
        ] {
            assert!(stage_percentages(&[], mode).is_empty());
        }
    }

    #[test]
    fn share_of_empty_stage_is_zero() {
        assert_eq!(
            share_percentages(&[vec![0.0, 0.0], vec![10.0, 30.0]]),
            vec![vec![0.0, 0.0], vec![25.0, 75.0]]
        );
    }
}
