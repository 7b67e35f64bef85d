use serde::{Deserialize, Serialize};

use crate::error::{FunnelError, FunnelResult};

/// Plotting-area size in user units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn validate(self) -> FunnelResult<Self> {
        if !self.is_valid() {
            return Err(FunnelError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

/// Axis along which funnel stages progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Horizontal,
    #[default]
    Vertical,
}

impl Direction {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// Base used when deriving chart-level stage percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PercentageMode {
    /// Relative to the largest stage.
    #[default]
    Max,
    /// Relative to the preceding stage.
    Previous,
    /// Relative to the first stage.
    First,
}

/// Orientation of the linear gradient applied to multi-color segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientDirection {
    #[default]
    Horizontal,
    Vertical,
}

impl GradientDirection {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Gradient vector as `(x1, y1, x2, y2)` in object-bounding-box units.
    #[must_use]
    pub fn vector(self) -> (f64, f64, f64, f64) {
        match self {
            Self::Horizontal => (0.0, 0.0, 1.0, 0.0),
            Self::Vertical => (0.0, 0.0, 0.0, 1.0),
        }
    }
}

/// How per-sub-series figures are printed in the stage info.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubLabelValue {
    #[default]
    Percent,
    Raw,
}

/// Insets around the plotting area. `text` is the cross-axis offset of labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
    pub text: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 120.0,
            right: 60.0,
            bottom: 60.0,
            left: 60.0,
            text: 10.0,
        }
    }
}

impl Margin {
    pub fn validate(self) -> FunnelResult<Self> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
            ("text", self.text),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(FunnelError::InvalidConfig(format!(
                    "margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }

    #[must_use]
    pub fn horizontal(self) -> f64 {
        self.left + self.right
    }

    #[must_use]
    pub fn vertical(self) -> f64 {
        self.top + self.bottom
    }
}

/// Partial margin used by updates; unset sides keep their current value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MarginPatch {
    #[serde(default)]
    pub top: Option<f64>,
    #[serde(default)]
    pub right: Option<f64>,
    #[serde(default)]
    pub bottom: Option<f64>,
    #[serde(default)]
    pub left: Option<f64>,
    #[serde(default)]
    pub text: Option<f64>,
}

impl MarginPatch {
    #[must_use]
    pub fn apply_to(self, margin: Margin) -> Margin {
        Margin {
            top: self.top.unwrap_or(margin.top),
            right: self.right.unwrap_or(margin.right),
            bottom: self.bottom.unwrap_or(margin.bottom),
            left: self.left.unwrap_or(margin.left),
            text: self.text.unwrap_or(margin.text),
        }
    }
}

impl From<Margin> for MarginPatch {
    fn from(margin: Margin) -> Self {
        Self {
            top: Some(margin.top),
            right: Some(margin.right),
            bottom: Some(margin.bottom),
            left: Some(margin.left),
            text: Some(margin.text),
        }
    }
}

/// Stage magnitudes: one value per stage, or one row of sub-series values per stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FunnelValues {
    Flat(Vec<f64>),
    Nested(Vec<Vec<f64>>),
}

impl Default for FunnelValues {
    fn default() -> Self {
        Self::Flat(Vec::new())
    }
}

impl FunnelValues {
    /// Collapses a matrix made only of empty rows into an empty series.
    #[must_use]
    pub fn normalized(self) -> Self {
        match self {
            Self::Nested(rows) if rows.iter().all(Vec::is_empty) => Self::Flat(Vec::new()),
            other => other,
        }
    }

    #[must_use]
    pub fn is_2d(&self) -> bool {
        matches!(self, Self::Nested(_))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data_size() == 0
    }

    #[must_use]
    pub fn data_size(&self) -> usize {
        match self {
            Self::Flat(values) => values.len(),
            Self::Nested(rows) => rows.len(),
        }
    }

    #[must_use]
    pub fn sub_data_size(&self) -> usize {
        match self {
            Self::Flat(_) => 0,
            Self::Nested(rows) => rows.first().map_or(0, Vec::len),
        }
    }

    /// Per-stage magnitude: the value itself, or the sum of the stage row.
    #[must_use]
    pub fn stage_totals(&self) -> Vec<f64> {
        match self {
            Self::Flat(values) => values.clone(),
            Self::Nested(rows) => rows.iter().map(|row| row.iter().sum()).collect(),
        }
    }

    /// Rejects non-finite or negative magnitudes and ragged sub-series rows.
    pub fn validate(&self) -> FunnelResult<()> {
        let check = |value: f64| -> FunnelResult<()> {
            if !value.is_finite() || value < 0.0 {
                return Err(FunnelError::InvalidData(
                    "funnel values must be finite and >= 0".to_owned(),
                ));
            }
            Ok(())
        };

        match self {
            Self::Flat(values) => values.iter().try_for_each(|value| check(*value)),
            Self::Nested(rows) => {
                let expected = self.sub_data_size();
                for (stage, row) in rows.iter().enumerate() {
                    if row.len() != expected {
                        return Err(FunnelError::InvalidData(format!(
                            "stage {stage} has {} sub-series values, expected {expected}",
                            row.len()
                        )));
                    }
                    row.iter().try_for_each(|value| check(*value))?;
                }
                Ok(())
            }
        }
    }
}
