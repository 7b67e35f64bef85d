mod frame;
mod null_renderer;
mod primitives;
mod svg_renderer;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, GradientStop, LinePrimitive, PathFill, PathPrimitive, TextPrimitive, TextRole,
    TooltipRegion,
};
pub use svg_renderer::{SvgRenderStats, SvgRenderer};

use crate::error::FunnelResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from chart state and geometry.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> FunnelResult<()>;
}
