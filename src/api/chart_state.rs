use tracing::{debug, warn};

use crate::core::{
    Direction, FunnelGeometry, FunnelGeometrySource, FunnelValues, GradientDirection, Margin,
    PercentageMode, SubLabelValue, stage_percentages,
};
use crate::error::FunnelResult;
use crate::render::Color;

use super::colors::resolve_colors;
use super::validation::{validate_margin, validate_plot_size, validate_values};
use super::{FunnelChartConfig, FunnelUpdate};

/// Data model of one funnel chart.
///
/// Holds the value matrix, labels, presentation options and the plotting
/// size (margins excluded). Derived quantities such as percentages are
/// recomputed from the current values on every query, so they cannot go
/// stale between mutations.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartState {
    values: FunnelValues,
    labels: Vec<String>,
    sub_labels: Vec<String>,
    colors: Vec<Vec<Color>>,
    explicit_colors: bool,
    direction: Direction,
    pct_mode: PercentageMode,
    margin: Margin,
    width: f64,
    height: f64,
    orig_width: f64,
    orig_height: f64,
    display_percent: bool,
    details: bool,
    tooltip: bool,
    gradient_direction: GradientDirection,
    sub_label_value: SubLabelValue,
}

impl ChartState {
    pub fn new(config: FunnelChartConfig) -> FunnelResult<Self> {
        let values = validate_values(config.values)?;
        validate_plot_size(config.width, config.height)?;
        let margin = validate_margin(config.margin.apply_to(Margin::default()))?;
        let colors = resolve_colors(config.colors.as_deref(), &values)?;
        let explicit_colors = config.colors.as_ref().is_some_and(|specs| !specs.is_empty());

        let mut state = Self {
            values,
            labels: config.labels,
            sub_labels: config.sub_labels,
            colors,
            explicit_colors,
            direction: Direction::Horizontal,
            pct_mode: config.pct_mode,
            margin,
            width: config.width,
            height: config.height,
            orig_width: config.width,
            orig_height: config.height,
            display_percent: config.display_percent,
            details: config.details,
            tooltip: config.tooltip,
            gradient_direction: config.gradient_direction,
            sub_label_value: config.sub_label_value,
        };
        match config.direction {
            Direction::Vertical => state.make_vertical(true),
            Direction::Horizontal => state.make_horizontal(true),
        };

        debug!(
            data_size = state.data_size(),
            sub_data_size = state.sub_data_size(),
            direction = ?state.direction,
            "created funnel chart state"
        );
        Ok(state)
    }

    /// Applies a change set atomically: either every field is applied and
    /// validated, or the state is left untouched.
    pub fn update(&mut self, update: FunnelUpdate) -> FunnelResult<()> {
        let mut next = self.clone();
        match next.apply(update) {
            Ok(()) => {
                debug!(
                    data_size = next.data_size(),
                    sub_data_size = next.sub_data_size(),
                    "updated funnel chart state"
                );
                *self = next;
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "rejected funnel chart update");
                Err(err)
            }
        }
    }

    fn apply(&mut self, update: FunnelUpdate) -> FunnelResult<()> {
        if let Some(direction) = update.direction {
            match direction {
                Direction::Vertical => self.make_vertical(false),
                Direction::Horizontal => self.make_horizontal(false),
            };
        }

        if update.width.is_some() || update.height.is_some() {
            let width = update.width.unwrap_or(self.width);
            let height = update.height.unwrap_or(self.height);
            validate_plot_size(width, height)?;
            self.width = width;
            self.height = height;
            // Keep the unswapped size in sync so later toggles restore it.
            match self.direction {
                Direction::Horizontal => {
                    self.orig_width = width;
                    self.orig_height = height;
                }
                Direction::Vertical => {
                    self.orig_width = height;
                    self.orig_height = width;
                }
            }
        }

        if let Some(patch) = update.margin {
            self.margin = validate_margin(patch.apply_to(self.margin))?;
        }

        let values_changed = update.values.is_some();
        if let Some(values) = update.values {
            self.values = validate_values(values)?;
        }
        if let Some(labels) = update.labels {
            self.labels = labels;
        }
        if let Some(sub_labels) = update.sub_labels {
            self.sub_labels = sub_labels;
        }

        if let Some(specs) = update.colors {
            self.colors = resolve_colors(Some(&specs), &self.values)?;
            self.explicit_colors = !specs.is_empty();
        } else if values_changed && !self.explicit_colors {
            self.colors = resolve_colors(None, &self.values)?;
        }

        if let Some(pct_mode) = update.pct_mode {
            self.pct_mode = pct_mode;
        }
        if let Some(display_percent) = update.display_percent {
            self.display_percent = display_percent;
        }
        if let Some(details) = update.details {
            self.details = details;
        }
        if let Some(tooltip) = update.tooltip {
            self.tooltip = tooltip;
        }
        if let Some(gradient_direction) = update.gradient_direction {
            self.gradient_direction = gradient_direction;
        }
        if let Some(sub_label_value) = update.sub_label_value {
            self.sub_label_value = sub_label_value;
        }
        Ok(())
    }

    /// Switches to vertical layout, swapping the unswapped plotting size.
    ///
    /// Returns `false` when already vertical and `force` is not set.
    pub fn make_vertical(&mut self, force: bool) -> bool {
        if !force && self.direction == Direction::Vertical {
            return false;
        }
        self.direction = Direction::Vertical;
        self.width = self.orig_height;
        self.height = self.orig_width;
        true
    }

    /// Switches to horizontal layout, restoring the unswapped plotting size.
    ///
    /// Returns `false` when already horizontal and `force` is not set.
    pub fn make_horizontal(&mut self, force: bool) -> bool {
        if !force && self.direction == Direction::Horizontal {
            return false;
        }
        self.direction = Direction::Horizontal;
        self.width = self.orig_width;
        self.height = self.orig_height;
        true
    }

    pub fn toggle_direction(&mut self) {
        match self.direction.toggled() {
            Direction::Vertical => self.make_vertical(false),
            Direction::Horizontal => self.make_horizontal(false),
        };
    }

    /// Returns `false` when the gradient was already vertical.
    pub fn gradient_make_vertical(&mut self) -> bool {
        let changed = self.gradient_direction != GradientDirection::Vertical;
        self.gradient_direction = GradientDirection::Vertical;
        changed
    }

    /// Returns `false` when the gradient was already horizontal.
    pub fn gradient_make_horizontal(&mut self) -> bool {
        let changed = self.gradient_direction != GradientDirection::Horizontal;
        self.gradient_direction = GradientDirection::Horizontal;
        changed
    }

    pub fn gradient_toggle_direction(&mut self) {
        self.gradient_direction = self.gradient_direction.toggled();
    }

    /// Chart width; margins are added when `include_margin` is set.
    #[must_use]
    pub fn width(&self, include_margin: bool) -> f64 {
        if include_margin {
            self.width + self.margin.horizontal()
        } else {
            self.width
        }
    }

    /// Chart height; margins are added when `include_margin` is set.
    #[must_use]
    pub fn height(&self, include_margin: bool) -> f64 {
        if include_margin {
            self.height + self.margin.vertical()
        } else {
            self.height
        }
    }

    /// Chart-level percentage per stage according to the percentage mode.
    #[must_use]
    pub fn percentages(&self) -> Vec<f64> {
        stage_percentages(&self.values.stage_totals(), self.pct_mode)
    }

    /// Cross-axis boundaries and segment outlines for the current state.
    #[must_use]
    pub fn geometry(&self) -> FunnelGeometry {
        FunnelGeometry::compute(self)
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn sub_labels(&self) -> &[String] {
        &self.sub_labels
    }

    #[must_use]
    pub fn colors(&self) -> &[Vec<Color>] {
        &self.colors
    }

    #[must_use]
    pub fn pct_mode(&self) -> PercentageMode {
        self.pct_mode
    }

    #[must_use]
    pub fn display_percent(&self) -> bool {
        self.display_percent
    }

    #[must_use]
    pub fn show_details(&self) -> bool {
        self.details
    }

    #[must_use]
    pub fn show_tooltip(&self) -> bool {
        self.tooltip
    }

    #[must_use]
    pub fn gradient_direction(&self) -> GradientDirection {
        self.gradient_direction
    }

    #[must_use]
    pub fn sub_label_value(&self) -> SubLabelValue {
        self.sub_label_value
    }

    /// `"2d"` for sub-series data, `"normal"` otherwise.
    #[must_use]
    pub fn graph_type(&self) -> &'static str {
        if self.values.is_2d() { "2d" } else { "normal" }
    }
}

impl FunnelGeometrySource for ChartState {
    fn values(&self) -> &FunnelValues {
        &self.values
    }

    fn direction(&self) -> Direction {
        self.direction
    }

    fn plot_width(&self) -> f64 {
        self.width
    }

    fn plot_height(&self) -> f64 {
        self.height
    }

    fn margin(&self) -> Margin {
        self.margin
    }
}
