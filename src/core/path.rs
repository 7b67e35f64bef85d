//! Closed outline strings for funnel segments.
//!
//! Every segment walks its first boundary forward with smooth cubic curves,
//! joins the last point of the next boundary with a straight line, walks the
//! next boundary backward and closes. Horizontal charts therefore draw
//! clockwise and vertical charts counter-clockwise:
//!
//! ```text
//! horizontal        vertical
//! 1---------->2     1<----------4
//! ^           |     |           ^
//! |           v     v           |
//! 4<----------3     2---------->3
//! ```

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core::geometry::{AxisFrame, FunnelGeometrySource, main_axis_points};
use crate::core::number::{push_js_number, round_point};

/// Outline of one drawable funnel segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathDefinition {
    pub path: String,
}

/// Builds one path per consecutive pair of boundary arrays, in draw order.
///
/// Pairs whose first boundary is entirely zero are skipped, so the output is
/// dense and indices do not map back to boundary positions.
#[must_use]
pub fn path_definitions<S: FunnelGeometrySource + ?Sized>(
    source: &S,
    cross_axis_points: &[Vec<f64>],
) -> Vec<PathDefinition> {
    if cross_axis_points.len() < 2 {
        return Vec::new();
    }

    let frame = AxisFrame::from_source(source);
    let main_points = main_axis_points(source.data_size(), frame.main);
    if main_points.is_empty()
        || cross_axis_points
            .iter()
            .any(|boundary| boundary.len() != main_points.len())
    {
        warn!(
            main_points = main_points.len(),
            boundaries = cross_axis_points.len(),
            "cross-axis points do not match stage count; nothing to draw"
        );
        return Vec::new();
    }

    let mut writer = PathWriter::new(frame);
    let paths: Vec<PathDefinition> = cross_axis_points
        .windows(2)
        .filter(|pair| pair[0].iter().any(|&point| point != 0.0))
        .map(|pair| PathDefinition {
            path: writer.segment(&main_points, &pair[0], &pair[1]),
        })
        .collect();
    trace!(paths = paths.len(), "built path definitions");
    paths
}

struct PathWriter {
    frame: AxisFrame,
    buf: ryu_js::Buffer,
}

impl PathWriter {
    fn new(frame: AxisFrame) -> Self {
        Self {
            frame,
            buf: ryu_js::Buffer::new(),
        }
    }

    fn segment(&mut self, main: &[f64], cross: &[f64], cross_next: &[f64]) -> String {
        let mut out = String::new();
        let last = main.len() - 1;

        out.push('M');
        self.point(&mut out, main[0], cross[0]);

        for index in 0..last {
            self.curve(
                &mut out,
                (main[index], cross[index]),
                (main[index + 1], cross[index + 1]),
            );
        }

        out.push_str(" L");
        self.point(&mut out, main[last], cross_next[last]);

        for index in (1..=last).rev() {
            self.curve(
                &mut out,
                (main[index], cross_next[index]),
                (main[index - 1], cross_next[index - 1]),
            );
        }

        out.push_str(" Z");
        out
    }

    /// Cubic from `from` to `to` with both control points at the main-axis
    /// midpoint, each holding its own end's cross coordinate.
    fn curve(&mut self, out: &mut String, from: (f64, f64), to: (f64, f64)) {
        let (main_from, cross_from) = from;
        let (main_to, cross_to) = to;
        let middle = round_point((main_from + main_to) / 2.0);

        out.push_str(" C");
        self.point(out, middle, cross_from);
        out.push(' ');
        self.point(out, middle, cross_to);
        out.push(' ');
        self.point(out, main_to, cross_to);
    }

    fn point(&mut self, out: &mut String, main: f64, cross: f64) {
        let (x, y) = self.frame.orient(main, cross);
        push_js_number(out, round_point(x), &mut self.buf);
        out.push(',');
        push_js_number(out, round_point(y), &mut self.buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Direction;

    #[test]
    fn horizontal_segment_runs_clockwise() {
        let mut writer = PathWriter::new(AxisFrame::resolve(Direction::Horizontal, 100.0, 50.0));
        let path = writer.segment(&[0.0, 50.0, 100.0], &[10.0, 20.0, 20.0], &[40.0, 30.0, 30.0]);
        assert_eq!(
            path,
            "M0,10 C25,10 25,20 50,20 C75,20 75,20 100,20 L100,30 \
             C75,30 75,30 50,30 C25,30 25,40 0,40 Z"
        );
    }

    #[test]
    fn vertical_segment_swaps_coordinates() {
        let mut writer = PathWriter::new(AxisFrame::resolve(Direction::Vertical, 50.0, 100.0));
        let path = writer.segment(&[0.0, 100.0], &[10.0, 10.0], &[40.0, 40.0]);
        assert_eq!(path, "M10,0 C10,50 10,50 10,100 L40,100 C40,50 40,50 40,0 Z");
    }
}
