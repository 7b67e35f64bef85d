use serde::{Deserialize, Serialize};

use crate::core::{
    Direction, FunnelValues, GradientDirection, Margin, MarginPatch, PercentageMode,
    SubLabelValue,
};
use crate::error::{FunnelError, FunnelResult};

use super::ColorSpec;

/// Chart construction options.
///
/// Keys follow the camelCase option names used by browser-side hosts, so an
/// options document can be loaded unchanged with [`FunnelChartConfig::from_json_str`].
/// `width`/`height` describe the horizontal layout; vertical charts swap them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunnelChartConfig {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub values: FunnelValues,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub sub_labels: Vec<String>,
    #[serde(default)]
    pub colors: Option<Vec<ColorSpec>>,
    #[serde(default)]
    pub direction: Direction,
    #[serde(default)]
    pub pct_mode: PercentageMode,
    /// Merged over [`Margin::default`]; unset sides keep their default.
    #[serde(default)]
    pub margin: MarginPatch,
    #[serde(default)]
    pub display_percent: bool,
    #[serde(default = "default_true")]
    pub details: bool,
    #[serde(default = "default_true")]
    pub tooltip: bool,
    #[serde(default)]
    pub gradient_direction: GradientDirection,
    #[serde(default)]
    pub sub_label_value: SubLabelValue,
}

fn default_true() -> bool {
    true
}

impl FunnelChartConfig {
    /// Creates a config with no data and default options.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            values: FunnelValues::default(),
            labels: Vec::new(),
            sub_labels: Vec::new(),
            colors: None,
            direction: Direction::default(),
            pct_mode: PercentageMode::default(),
            margin: MarginPatch::default(),
            display_percent: false,
            details: true,
            tooltip: true,
            gradient_direction: GradientDirection::default(),
            sub_label_value: SubLabelValue::default(),
        }
    }

    pub fn from_json_str(input: &str) -> FunnelResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            FunnelError::InvalidConfig(format!("failed to parse funnel options: {e}"))
        })
    }

    pub fn to_json_pretty(&self) -> FunnelResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            FunnelError::Serialization(format!("failed to serialize funnel options: {e}"))
        })
    }

    /// One magnitude per stage.
    #[must_use]
    pub fn with_values(mut self, values: Vec<f64>) -> Self {
        self.values = FunnelValues::Flat(values);
        self
    }

    /// One row of sub-series magnitudes per stage.
    #[must_use]
    pub fn with_nested_values(mut self, values: Vec<Vec<f64>>) -> Self {
        self.values = FunnelValues::Nested(values);
        self
    }

    #[must_use]
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_sub_labels<I, S>(mut self, sub_labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sub_labels = sub_labels.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: Vec<ColorSpec>) -> Self {
        self.colors = Some(colors);
        self
    }

    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    #[must_use]
    pub fn with_pct_mode(mut self, pct_mode: PercentageMode) -> Self {
        self.pct_mode = pct_mode;
        self
    }

    #[must_use]
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin.into();
        self
    }

    #[must_use]
    pub fn with_display_percent(mut self, display_percent: bool) -> Self {
        self.display_percent = display_percent;
        self
    }

    #[must_use]
    pub fn with_details(mut self, details: bool) -> Self {
        self.details = details;
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: bool) -> Self {
        self.tooltip = tooltip;
        self
    }

    #[must_use]
    pub fn with_gradient_direction(mut self, gradient_direction: GradientDirection) -> Self {
        self.gradient_direction = gradient_direction;
        self
    }

    #[must_use]
    pub fn with_sub_label_value(mut self, sub_label_value: SubLabelValue) -> Self {
        self.sub_label_value = sub_label_value;
        self
    }
}
