use serde::{Deserialize, Serialize};

use crate::core::{
    Direction, FunnelValues, GradientDirection, MarginPatch, PercentageMode, SubLabelValue,
};

use super::ColorSpec;

/// Partial change set applied atomically by [`super::ChartState::update`].
///
/// Unset fields keep their current value. `colors: Some(vec![])` resets the
/// palette to defaults sized for the (possibly new) values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunnelUpdate {
    #[serde(default)]
    pub values: Option<FunnelValues>,
    #[serde(default)]
    pub labels: Option<Vec<String>>,
    #[serde(default)]
    pub sub_labels: Option<Vec<String>>,
    #[serde(default)]
    pub colors: Option<Vec<ColorSpec>>,
    /// Plotting width in the current orientation.
    #[serde(default)]
    pub width: Option<f64>,
    /// Plotting height in the current orientation.
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub margin: Option<MarginPatch>,
    #[serde(default)]
    pub direction: Option<Direction>,
    #[serde(default)]
    pub pct_mode: Option<PercentageMode>,
    #[serde(default)]
    pub display_percent: Option<bool>,
    #[serde(default)]
    pub details: Option<bool>,
    #[serde(default)]
    pub tooltip: Option<bool>,
    #[serde(default)]
    pub gradient_direction: Option<GradientDirection>,
    #[serde(default)]
    pub sub_label_value: Option<SubLabelValue>,
}

impl FunnelUpdate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_values(mut self, values: Vec<f64>) -> Self {
        self.values = Some(FunnelValues::Flat(values));
        self
    }

    #[must_use]
    pub fn with_nested_values(mut self, values: Vec<Vec<f64>>) -> Self {
        self.values = Some(FunnelValues::Nested(values));
        self
    }

    #[must_use]
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_sub_labels<I, S>(mut self, sub_labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sub_labels = Some(sub_labels.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: Vec<ColorSpec>) -> Self {
        self.colors = Some(colors);
        self
    }

    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn with_margin(mut self, margin: MarginPatch) -> Self {
        self.margin = Some(margin);
        self
    }

    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    #[must_use]
    pub fn with_pct_mode(mut self, pct_mode: PercentageMode) -> Self {
        self.pct_mode = Some(pct_mode);
        self
    }

    #[must_use]
    pub fn with_display_percent(mut self, display_percent: bool) -> Self {
        self.display_percent = Some(display_percent);
        self
    }

    #[must_use]
    pub fn with_details(mut self, details: bool) -> Self {
        self.details = Some(details);
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: bool) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    #[must_use]
    pub fn with_gradient_direction(mut self, gradient_direction: GradientDirection) -> Self {
        self.gradient_direction = Some(gradient_direction);
        self
    }

    #[must_use]
    pub fn with_sub_label_value(mut self, sub_label_value: SubLabelValue) -> Self {
        self.sub_label_value = Some(sub_label_value);
        self
    }
}
