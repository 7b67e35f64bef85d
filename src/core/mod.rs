pub mod geometry;
pub mod number;
pub mod path;
pub mod percentages;
pub mod types;

pub use geometry::{
    AxisFrame, FunnelGeometry, FunnelGeometrySource, cross_axis_points, main_axis_points,
};
pub use number::{finite_or_zero, format_number, js_number, percent_of, round_point};
pub use path::{PathDefinition, path_definitions};
pub use percentages::{max_magnitude, share_percentages, stage_percentages};
pub use types::{
    Direction, FunnelValues, GradientDirection, Margin, MarginPatch, PercentageMode,
    SubLabelValue, Viewport,
};
