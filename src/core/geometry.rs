//! Stage boundary computation for funnel outlines.
//!
//! The funnel is symmetric about the centerline of the cross axis. Boundary
//! array `A` is the outer envelope, `D` its mirror, and for sub-series data
//! the arrays in between split the band proportionally per stage:
//!
//! ```text
//! #0..................
//!                    ...#1................
//!                                        ......
//! #0********************#1**                    #2.........................#3 (A)
//!                           *******************
//!                                               #2*************************#3 (B)
//!                                               #2+++++++++++++++++++++++++#3 (C)
//!                           +++++++++++++++++++
//! #0++++++++++++++++++++#1++                    #2-------------------------#3 (D)
//!                                        ------
//!                    ---#1----------------
//! #0-----------------
//! ```
//!
//! Three stages give four main-axis points (`#0..#3`); the last stage's cross
//! coordinate is repeated so `#2` and `#3` share it.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::number::{finite_or_zero, round_point};
use crate::core::path::{PathDefinition, path_definitions};
use crate::core::percentages::{max_magnitude, share_percentages};
use crate::core::types::{Direction, FunnelValues, Margin};

/// Read-only view of chart state consumed by the geometry engine.
pub trait FunnelGeometrySource {
    fn values(&self) -> &FunnelValues;
    fn direction(&self) -> Direction;
    /// Plotting width, margin excluded.
    fn plot_width(&self) -> f64;
    /// Plotting height, margin excluded.
    fn plot_height(&self) -> f64;
    fn margin(&self) -> Margin;

    fn is_vertical(&self) -> bool {
        self.direction() == Direction::Vertical
    }

    fn is_2d(&self) -> bool {
        self.values().is_2d()
    }

    fn data_size(&self) -> usize {
        self.values().data_size()
    }

    fn sub_data_size(&self) -> usize {
        self.values().sub_data_size()
    }

    fn values_2d(&self) -> Vec<f64> {
        self.values().stage_totals()
    }

    fn percentages_2d(&self) -> Vec<Vec<f64>> {
        match self.values() {
            FunnelValues::Flat(_) => Vec::new(),
            FunnelValues::Nested(rows) => share_percentages(rows),
        }
    }
}

/// Plotting extents resolved into main (stage) and cross (magnitude) axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisFrame {
    pub direction: Direction,
    pub main: f64,
    pub cross: f64,
}

impl AxisFrame {
    #[must_use]
    pub fn resolve(direction: Direction, plot_width: f64, plot_height: f64) -> Self {
        match direction {
            Direction::Horizontal => Self {
                direction,
                main: plot_width,
                cross: plot_height,
            },
            Direction::Vertical => Self {
                direction,
                main: plot_height,
                cross: plot_width,
            },
        }
    }

    #[must_use]
    pub fn from_source<S: FunnelGeometrySource + ?Sized>(source: &S) -> Self {
        Self::resolve(source.direction(), source.plot_width(), source.plot_height())
    }

    /// Maps a `(main, cross)` pair to `(x, y)`.
    #[must_use]
    pub fn orient(self, main: f64, cross: f64) -> (f64, f64) {
        match self.direction {
            Direction::Horizontal => (main, cross),
            Direction::Vertical => (cross, main),
        }
    }
}

/// Boundaries plus the outlines built from them, computed in one pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FunnelGeometry {
    pub cross_axis_points: Vec<Vec<f64>>,
    pub path_definitions: Vec<PathDefinition>,
}

impl FunnelGeometry {
    #[must_use]
    pub fn compute<S: FunnelGeometrySource + ?Sized>(source: &S) -> Self {
        let cross_axis_points = cross_axis_points(source);
        let path_definitions = path_definitions(source, &cross_axis_points);
        Self {
            cross_axis_points,
            path_definitions,
        }
    }

    /// `true` when there is nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path_definitions.is_empty()
    }
}

/// `data_size + 1` evenly spaced stage boundaries along the main axis.
#[must_use]
pub fn main_axis_points(data_size: usize, full_main_dimension: f64) -> Vec<f64> {
    if data_size == 0 {
        return Vec::new();
    }
    let size = data_size as f64;
    (0..=data_size)
        .map(|index| round_point(full_main_dimension * index as f64 / size))
        .collect()
}

/// Cross-axis boundary arrays, each holding `data_size + 1` coordinates.
///
/// Flat data yields `[A, D]`; sub-series data yields
/// `[A, P_1, .., P_{n-1}, D]`. Empty values yield no arrays.
#[must_use]
pub fn cross_axis_points<S: FunnelGeometrySource + ?Sized>(source: &S) -> Vec<Vec<f64>> {
    let values = source.values();
    if values.is_empty() {
        return Vec::new();
    }

    let full_dimension = AxisFrame::from_source(source).cross;
    let points = match values {
        FunnelValues::Flat(flat) => flat_cross_axis_points(flat, full_dimension),
        FunnelValues::Nested(_) => nested_cross_axis_points(source, full_dimension),
    };
    trace!(
        boundaries = points.len(),
        data_size = source.data_size(),
        "computed cross-axis points"
    );
    points
}

/// Envelope of one boundary array: distance from the cross-axis edge for
/// each magnitude, with the last stage repeated as the closing edge.
fn envelope(magnitudes: &[f64], full_dimension: f64) -> Vec<f64> {
    let max = max_magnitude(magnitudes);
    let dimension = full_dimension / 2.0;
    magnitudes
        .iter()
        .chain(magnitudes.last())
        .map(|&value| finite_or_zero(round_point((max - value) / max * dimension)))
        .collect()
}

fn flat_cross_axis_points(values: &[f64], full_dimension: f64) -> Vec<Vec<f64>> {
    let outer = envelope(values, full_dimension);
    let mirror = outer.iter().map(|point| full_dimension - point).collect();
    vec![outer, mirror]
}

fn nested_cross_axis_points<S: FunnelGeometrySource + ?Sized>(
    source: &S,
    full_dimension: f64,
) -> Vec<Vec<f64>> {
    let data_size = source.data_size();
    let sub_data_size = source.sub_data_size();
    let shares = source.percentages_2d();

    let outer = envelope(&source.values_2d(), full_dimension);
    let mut points = Vec::with_capacity(sub_data_size.max(1) + 1);
    points.push(outer.clone());

    // Each inner boundary builds on the previous one, adding its sub-series
    // share of the span left between the outer envelope and its mirror.
    for series in 1..sub_data_size {
        let previous = &points[series - 1];
        let mut boundary: Vec<f64> = (0..data_size)
            .map(|stage| {
                let span = full_dimension - outer[stage] * 2.0;
                let share = shares[stage][series - 1] / 100.0;
                finite_or_zero(round_point(previous[stage] + span * share))
            })
            .collect();
        if let Some(&last) = boundary.last() {
            boundary.push(last);
        }
        points.push(boundary);
    }

    if outer.iter().all(|&point| point == 0.0) {
        points.push(outer);
    } else {
        points.push(outer.iter().map(|point| full_dimension - point).collect());
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_axis_points_are_evenly_spaced() {
        assert_eq!(main_axis_points(3, 100.0), vec![0.0, 33.3, 66.7, 100.0]);
        assert!(main_axis_points(0, 100.0).is_empty());
    }

    #[test]
    fn envelope_repeats_last_stage() {
        assert_eq!(
            envelope(&[10.0, 20.0, 5.0], 50.0),
            vec![12.5, 0.0, 18.8, 18.8]
        );
    }

    #[test]
    fn envelope_of_all_zero_magnitudes_is_zero() {
        assert_eq!(envelope(&[0.0, 0.0], 80.0), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn axis_frame_swaps_axes_for_vertical() {
        let frame = AxisFrame::resolve(Direction::Vertical, 300.0, 600.0);
        assert_eq!(frame.main, 600.0);
        assert_eq!(frame.cross, 300.0);
        assert_eq!(frame.orient(10.0, 20.0), (20.0, 10.0));
    }
}
