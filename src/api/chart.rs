use tracing::{debug, warn};

use crate::core::{FunnelGeometry, FunnelGeometrySource, Viewport};
use crate::error::FunnelResult;
use crate::render::{PathPrimitive, RenderFrame, Renderer, TextPrimitive, TextRole};

use super::colors::path_fill;
use super::{ChartState, FunnelChartConfig, FunnelUpdate, StageInfo};

/// Main facade consumed by host applications.
///
/// `FunnelChart` owns the chart state and a rendering backend. Every
/// mutation goes through the state, then a fresh frame is computed and
/// handed to the renderer; no geometry is kept between draws.
pub struct FunnelChart<R: Renderer> {
    renderer: R,
    state: ChartState,
}

impl<R: Renderer> FunnelChart<R> {
    pub fn new(renderer: R, config: FunnelChartConfig) -> FunnelResult<Self> {
        let state = ChartState::new(config)?;
        Ok(Self { renderer, state })
    }

    #[must_use]
    pub fn state(&self) -> &ChartState {
        &self.state
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    #[must_use]
    pub fn geometry(&self) -> FunnelGeometry {
        self.state.geometry()
    }

    #[must_use]
    pub fn info(&self) -> Vec<StageInfo> {
        self.state.info()
    }

    #[must_use]
    pub fn section_at(&self, x: f64, y: f64) -> Option<usize> {
        self.state.section_at(x, y)
    }

    /// Materializes the current state into a backend-agnostic frame.
    pub fn build_frame(&self) -> FunnelResult<RenderFrame> {
        let state = &self.state;
        let margin = state.margin();
        let viewport = Viewport::new(state.width(true), state.height(true)).validate()?;
        let mut frame = RenderFrame::new(viewport, (margin.left, margin.top));

        let geometry = state.geometry();
        for (index, definition) in geometry.path_definitions.into_iter().enumerate() {
            let fill = path_fill(
                state.colors(),
                state.is_2d(),
                index,
                state.gradient_direction(),
            )?;
            frame = frame.with_path(PathPrimitive::new(definition.path, fill));
        }

        if state.show_details() {
            let layout = state.info_layout();
            for (info, &(x, y)) in state.info().into_iter().zip(&layout.text_anchors) {
                frame = frame
                    .with_text(TextPrimitive::new(info.value, x, y, TextRole::Value))
                    .with_text(TextPrimitive::new(info.label, x, y, TextRole::Title));
                if let Some(percentage) = info.percentage {
                    frame = frame.with_text(TextPrimitive::new(
                        percentage,
                        x,
                        y,
                        TextRole::Percentage,
                    ));
                }
            }
            for divider in layout.dividers {
                frame = frame.with_divider(divider);
            }
        }

        if state.show_tooltip() {
            for tooltip in state.tooltip_regions() {
                frame = frame.with_tooltip(tooltip);
            }
        }

        Ok(frame)
    }

    /// Computes a frame from the current state and renders it.
    pub fn draw(&mut self) -> FunnelResult<()> {
        let frame = self.build_frame()?;
        debug!(
            paths = frame.paths.len(),
            texts = frame.texts.len(),
            dividers = frame.dividers.len(),
            "drawing funnel frame"
        );
        self.renderer.render(&frame).inspect_err(|err| {
            warn!(error = %err, "renderer rejected funnel frame");
        })
    }

    /// Applies a change set and redraws.
    pub fn update_data(&mut self, update: FunnelUpdate) -> FunnelResult<()> {
        self.state.update(update)?;
        self.draw()
    }

    pub fn make_vertical(&mut self) -> FunnelResult<()> {
        if self.state.make_vertical(false) {
            self.draw()?;
        }
        Ok(())
    }

    pub fn make_horizontal(&mut self) -> FunnelResult<()> {
        if self.state.make_horizontal(false) {
            self.draw()?;
        }
        Ok(())
    }

    pub fn toggle_direction(&mut self) -> FunnelResult<()> {
        self.state.toggle_direction();
        self.draw()
    }

    pub fn gradient_make_vertical(&mut self) -> FunnelResult<()> {
        if self.state.gradient_make_vertical() {
            self.draw()?;
        }
        Ok(())
    }

    pub fn gradient_make_horizontal(&mut self) -> FunnelResult<()> {
        if self.state.gradient_make_horizontal() {
            self.draw()?;
        }
        Ok(())
    }

    pub fn gradient_toggle_direction(&mut self) -> FunnelResult<()> {
        self.state.gradient_toggle_direction();
        self.draw()
    }
}
