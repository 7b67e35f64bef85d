use crate::error::FunnelResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so invalid geometry surfaces without a
/// drawing backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_path_count: usize,
    pub last_text_count: usize,
    pub last_divider_count: usize,
    pub last_tooltip_count: usize,
    pub render_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> FunnelResult<()> {
        frame.validate()?;
        self.last_path_count = frame.paths.len();
        self.last_text_count = frame.texts.len();
        self.last_divider_count = frame.dividers.len();
        self.last_tooltip_count = frame.tooltips.len();
        self.render_count += 1;
        Ok(())
    }
}
