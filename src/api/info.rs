use serde::{Deserialize, Serialize};

use crate::core::{FunnelGeometrySource, FunnelValues, SubLabelValue, format_number, js_number};
use crate::render::{LinePrimitive, TooltipRegion};

use super::ChartState;

/// On-chart text of one stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageInfo {
    pub label: String,
    /// Per-sub-series breakdown, present for sub-series data only.
    pub sub_label: Option<String>,
    /// Stage magnitude with thousands separators.
    pub value: String,
    /// `"<pct>%"`, present when percentages are displayed.
    pub percentage: Option<String>,
}

/// Label anchors and stage dividers in chart coordinates (margins included).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InfoLayout {
    /// Main-axis spacing between stage boundaries.
    pub spacing: f64,
    /// Main-axis coordinate of the far edge of every stage.
    pub line_positions: Vec<f64>,
    /// `(x, y)` anchor of each stage's label block.
    pub text_anchors: Vec<(f64, f64)>,
    /// Separators between consecutive stages.
    pub dividers: Vec<LinePrimitive>,
}

impl ChartState {
    /// Per-stage label projection used for on-chart text.
    #[must_use]
    pub fn info(&self) -> Vec<StageInfo> {
        let totals = self.values().stage_totals();
        let shares = self.percentages_2d();

        self.percentages()
            .into_iter()
            .enumerate()
            .map(|(stage, percentage)| StageInfo {
                label: self
                    .labels()
                    .get(stage)
                    .filter(|label| !label.is_empty())
                    .cloned()
                    .unwrap_or_else(|| "NA".to_owned()),
                sub_label: self.sub_label_breakdown(stage, shares.get(stage)),
                value: format_number(totals.get(stage).copied().unwrap_or(0.0)),
                percentage: self
                    .display_percent()
                    .then(|| format!("{}%", js_number(percentage))),
            })
            .collect()
    }

    fn sub_label_breakdown(&self, stage: usize, shares: Option<&Vec<f64>>) -> Option<String> {
        let FunnelValues::Nested(rows) = self.values() else {
            return None;
        };
        let row = rows.get(stage)?;

        let parts: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(series, &value)| {
                let name = self
                    .sub_labels()
                    .get(series)
                    .map_or("NA", String::as_str);
                let figure = match self.sub_label_value() {
                    SubLabelValue::Percent => {
                        let share = shares
                            .and_then(|shares| shares.get(series))
                            .copied()
                            .unwrap_or(0.0);
                        format!("{}%", js_number(share))
                    }
                    SubLabelValue::Raw => format_number(value),
                };
                format!("{name}: {figure}")
            })
            .collect();
        Some(parts.join(", "))
    }

    /// Positions of stage labels and dividers.
    ///
    /// Labels sit `spacing / (n + 1)` into their stage along the main axis and
    /// `margin.text` from the chart edge on the cross axis; dividers span the
    /// whole chart on the cross axis.
    #[must_use]
    pub fn info_layout(&self) -> InfoLayout {
        let stages = self.data_size();
        if stages == 0 {
            return InfoLayout::default();
        }

        let margin = self.margin();
        let vertical = self.is_vertical();
        let (main_extent, main_offset, cross_extent) = if vertical {
            (self.height(false), margin.top, self.width(true))
        } else {
            (self.width(false), margin.left, self.height(true))
        };
        let spacing = main_extent / stages as f64;
        let text_gap = (stages + 1) as f64;

        let line_positions: Vec<f64> = (0..stages)
            .map(|stage| spacing * (stage + 1) as f64 + main_offset)
            .collect();

        let text_anchors = (0..stages)
            .map(|stage| {
                let along = spacing * stage as f64 + main_offset + spacing / text_gap;
                if vertical {
                    (margin.text, along)
                } else {
                    (along, margin.text)
                }
            })
            .collect();

        let dividers = line_positions
            .iter()
            .take(stages - 1)
            .map(|&position| {
                if vertical {
                    LinePrimitive::new(0.0, position, cross_extent, position)
                } else {
                    LinePrimitive::new(position, 0.0, position, cross_extent)
                }
            })
            .collect();

        InfoLayout {
            spacing,
            line_positions,
            text_anchors,
            dividers,
        }
    }

    /// Hover area of every stage over the plotting band, with the stage's
    /// label, value, percentage and sub-series breakdown one per line.
    #[must_use]
    pub fn tooltip_regions(&self) -> Vec<TooltipRegion> {
        let layout = self.info_layout();
        let margin = self.margin();
        let (plot_width, plot_height) = (self.width(false), self.height(false));

        self.info()
            .into_iter()
            .zip(&layout.line_positions)
            .map(|(info, &line)| {
                let start = line - layout.spacing;
                let text = [Some(info.label), Some(info.value), info.percentage, info.sub_label]
                    .into_iter()
                    .flatten()
                    .collect::<Vec<_>>()
                    .join("\n");
                if self.is_vertical() {
                    TooltipRegion::new(margin.left, start, plot_width, layout.spacing, text)
                } else {
                    TooltipRegion::new(start, margin.top, layout.spacing, plot_height, text)
                }
            })
            .collect()
    }

    /// Stage under a point given in chart coordinates, if it lies within the
    /// plotting extent along the main axis.
    #[must_use]
    pub fn section_at(&self, x: f64, y: f64) -> Option<usize> {
        let stages = self.data_size();
        if stages == 0 || !x.is_finite() || !y.is_finite() {
            return None;
        }

        let margin = self.margin();
        let (coordinate, start, extent) = if self.is_vertical() {
            (y, margin.top, self.height(false))
        } else {
            (x, margin.left, self.width(false))
        };
        if coordinate < start || coordinate > start + extent {
            return None;
        }

        let crossed = self
            .info_layout()
            .line_positions
            .iter()
            .filter(|&&position| coordinate > position)
            .count();
        Some(crossed.min(stages - 1))
    }
}
