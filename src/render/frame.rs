use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::FunnelResult;
use crate::render::{LinePrimitive, PathPrimitive, TextPrimitive, TooltipRegion};

/// Backend-agnostic scene for one funnel draw pass.
///
/// `viewport` is the full chart size, margins included. Paths are expressed
/// in plot coordinates and must be translated by `plot_offset`; texts and
/// dividers are already in chart coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub plot_offset: (f64, f64),
    pub paths: Vec<PathPrimitive>,
    pub texts: Vec<TextPrimitive>,
    pub dividers: Vec<LinePrimitive>,
    /// Per-stage hover areas; empty when tooltips are disabled.
    pub tooltips: Vec<TooltipRegion>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport, plot_offset: (f64, f64)) -> Self {
        Self {
            viewport,
            plot_offset,
            paths: Vec::new(),
            texts: Vec::new(),
            dividers: Vec::new(),
            tooltips: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_path(mut self, path: PathPrimitive) -> Self {
        self.paths.push(path);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    #[must_use]
    pub fn with_divider(mut self, divider: LinePrimitive) -> Self {
        self.dividers.push(divider);
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: TooltipRegion) -> Self {
        self.tooltips.push(tooltip);
        self
    }

    pub fn validate(&self) -> FunnelResult<()> {
        self.viewport.validate()?;

        for path in &self.paths {
            path.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        for divider in &self.dividers {
            divider.validate()?;
        }
        for tooltip in &self.tooltips {
            tooltip.validate()?;
        }

        Ok(())
    }
}
