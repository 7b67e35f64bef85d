//! funnel-chart: deterministic geometry for funnel charts.
//!
//! The crate turns a matrix of stage magnitudes into the boundary
//! coordinates and smooth closed outlines of every funnel segment, plus the
//! percentages and label layout used to annotate them. Drawing is delegated
//! to a [`render::Renderer`] that consumes backend-agnostic frames.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartState, FunnelChart, FunnelChartConfig, FunnelUpdate};
pub use core::FunnelGeometrySource;
pub use error::{FunnelError, FunnelResult};
