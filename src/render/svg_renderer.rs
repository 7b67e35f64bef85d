use std::fmt::Write as _;

use crate::core::js_number;
use crate::error::{FunnelError, FunnelResult};
use crate::render::{PathFill, RenderFrame, Renderer, TextRole};

const LABEL_PADDING_PX: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub paths_drawn: usize,
    pub gradients_defined: usize,
    pub texts_drawn: usize,
    pub dividers_drawn: usize,
    pub tooltips_drawn: usize,
}

/// Renderer that serializes each frame into a standalone SVG document.
///
/// Label lines of one stage stack below their anchor using a fixed line
/// height, since no text measurement is available.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    font_size_px: f64,
    document: Option<String>,
    last_stats: SvgRenderStats,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self {
            font_size_px: 14.0,
            document: None,
            last_stats: SvgRenderStats::default(),
        }
    }
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font_size_px(mut self, font_size_px: f64) -> FunnelResult<Self> {
        if !font_size_px.is_finite() || font_size_px <= 0.0 {
            return Err(FunnelError::InvalidConfig(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.font_size_px = font_size_px;
        Ok(self)
    }

    /// Last rendered document, if any frame has been drawn.
    #[must_use]
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }

    fn write_document(&self, frame: &RenderFrame) -> (String, SvgRenderStats) {
        let mut stats = SvgRenderStats::default();
        let mut out = String::new();
        let width = js_number(frame.viewport.width);
        let height = js_number(frame.viewport.height);
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" class="funnel-chart" width="{width}" height="{height}" viewBox="0 0 {width} {height}" preserveAspectRatio="xMidYMin meet">"#
        );

        let (offset_x, offset_y) = frame.plot_offset;
        let _ = write!(
            out,
            r#"<g class="funnel-chart__graph" transform="translate({}, {})">"#,
            js_number(offset_x),
            js_number(offset_y)
        );

        let gradients: Vec<&PathFill> = frame
            .paths
            .iter()
            .map(|path| &path.fill)
            .filter(|fill| matches!(fill, PathFill::Gradient { .. }))
            .collect();
        if !gradients.is_empty() {
            out.push_str("<defs>");
            for fill in gradients {
                if let PathFill::Gradient {
                    id,
                    direction,
                    stops,
                } = fill
                {
                    let (x1, y1, x2, y2) = direction.vector();
                    let _ = write!(
                        out,
                        r#"<linearGradient id="{}" x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}">"#,
                        escape_xml(id)
                    );
                    for stop in stops {
                        let _ = write!(
                            out,
                            r#"<stop offset="{}%" stop-color="{}""#,
                            stop.offset_percent,
                            stop.color.to_hex()
                        );
                        if let Some(opacity) = stop.color.opacity() {
                            let _ = write!(out, r#" stop-opacity="{}""#, js_number(opacity));
                        }
                        out.push_str("/>");
                    }
                    out.push_str("</linearGradient>");
                    stats.gradients_defined += 1;
                }
            }
            out.push_str("</defs>");
        }

        for path in &frame.paths {
            let (paint, opacity) = match &path.fill {
                PathFill::Solid(color) => (color.to_hex(), color.opacity()),
                PathFill::Gradient { id, .. } => (format!("url(#{})", escape_xml(id)), None),
            };
            let _ = write!(
                out,
                r#"<path d="{}" fill="{paint}" stroke="{paint}""#,
                path.d
            );
            if let Some(opacity) = opacity {
                let opacity = js_number(opacity);
                let _ = write!(
                    out,
                    r#" fill-opacity="{opacity}" stroke-opacity="{opacity}""#
                );
            }
            out.push_str("/>");
            stats.paths_drawn += 1;
        }
        out.push_str("</g>");

        out.push_str(r#"<g class="funnel-chart__info">"#);
        let line_height = self.font_size_px + LABEL_PADDING_PX;
        for text in &frame.texts {
            let (class, line) = match text.role {
                TextRole::Value => ("label__value", 1.0),
                TextRole::Title => ("label__title", 2.0),
                TextRole::Percentage => ("label__percentage", 3.0),
            };
            let _ = write!(
                out,
                r#"<text class="{class}" x="{}" y="{}" font-size="{}">{}</text>"#,
                js_number(text.x),
                js_number(text.y + line * line_height),
                js_number(self.font_size_px),
                escape_xml(&text.text)
            );
            stats.texts_drawn += 1;
        }
        for divider in &frame.dividers {
            let _ = write!(
                out,
                r#"<line class="divider" x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
                js_number(divider.x1),
                js_number(divider.y1),
                js_number(divider.x2),
                js_number(divider.y2)
            );
            stats.dividers_drawn += 1;
        }
        out.push_str("</g>");

        if !frame.tooltips.is_empty() {
            out.push_str(r#"<g class="funnel-chart__tooltips">"#);
            for tooltip in &frame.tooltips {
                let _ = write!(
                    out,
                    r#"<rect x="{}" y="{}" width="{}" height="{}" fill="transparent"><title>{}</title></rect>"#,
                    js_number(tooltip.x),
                    js_number(tooltip.y),
                    js_number(tooltip.width),
                    js_number(tooltip.height),
                    escape_xml(&tooltip.text)
                );
                stats.tooltips_drawn += 1;
            }
            out.push_str("</g>");
        }
        out.push_str("</svg>");

        (out, stats)
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> FunnelResult<()> {
        frame.validate()?;
        let (document, stats) = self.write_document(frame);
        self.document = Some(document);
        self.last_stats = stats;
        Ok(())
    }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
