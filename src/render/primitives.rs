use serde::{Deserialize, Serialize};

use crate::core::GradientDirection;
use crate::error::{FunnelError, FunnelResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
        )
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(input: &str) -> FunnelResult<Self> {
        let invalid = || FunnelError::InvalidConfig(format!("invalid hex color `{input}`"));
        let digits = input.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !digits.is_ascii() {
            return Err(invalid());
        }

        let channel = |hex: &str| -> FunnelResult<f64> {
            u8::from_str_radix(hex, 16)
                .map(|value| f64::from(value) / 255.0)
                .map_err(|_| invalid())
        };

        match digits.len() {
            3 => {
                let mut channels = [0.0; 3];
                for (slot, index) in channels.iter_mut().zip(0..3) {
                    let nibble = &digits[index..=index];
                    *slot = channel(&format!("{nibble}{nibble}"))?;
                }
                Ok(Self::rgb(channels[0], channels[1], channels[2]))
            }
            6 | 8 => {
                let alpha = if digits.len() == 8 {
                    channel(&digits[6..8])?
                } else {
                    1.0
                };
                Ok(Self::rgba(
                    channel(&digits[0..2])?,
                    channel(&digits[2..4])?,
                    channel(&digits[4..6])?,
                    alpha,
                ))
            }
            _ => Err(invalid()),
        }
    }

    /// `#RRGGBB` form; see [`Color::opacity`] for the alpha channel.
    #[must_use]
    pub fn to_hex(self) -> String {
        let byte = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02X}{:02X}{:02X}",
            byte(self.red),
            byte(self.green),
            byte(self.blue)
        )
    }

    /// Alpha rounded to three decimals, `None` when fully opaque.
    #[must_use]
    pub fn opacity(self) -> Option<f64> {
        let alpha = (self.alpha.clamp(0.0, 1.0) * 1000.0).round() / 1000.0;
        (alpha < 1.0).then_some(alpha)
    }

    pub fn validate(self) -> FunnelResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(FunnelError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// One color stop of a linear gradient, `offset_percent` in 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub offset_percent: u32,
    pub color: Color,
}

/// Fill and stroke paint of one funnel segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PathFill {
    Solid(Color),
    Gradient {
        id: String,
        direction: GradientDirection,
        stops: Vec<GradientStop>,
    },
}

impl PathFill {
    /// Solid paint for one color, an evenly spaced gradient for several.
    ///
    /// `index` is the 1-based draw position used to name the gradient.
    pub fn from_colors(
        colors: &[Color],
        index: usize,
        direction: GradientDirection,
    ) -> FunnelResult<Self> {
        match colors {
            [] => Err(FunnelError::InvalidConfig(
                "segment color list must not be empty".to_owned(),
            )),
            [color] => Ok(Self::Solid(*color)),
            _ => {
                let last = (colors.len() - 1) as f64;
                let stops = colors
                    .iter()
                    .enumerate()
                    .map(|(position, color)| GradientStop {
                        offset_percent: (100.0 * position as f64 / last).round() as u32,
                        color: *color,
                    })
                    .collect();
                Ok(Self::Gradient {
                    id: format!("funnelGradient-{index}"),
                    direction,
                    stops,
                })
            }
        }
    }

    pub fn validate(&self) -> FunnelResult<()> {
        match self {
            Self::Solid(color) => color.validate(),
            Self::Gradient { stops, .. } => {
                if stops.len() < 2 {
                    return Err(FunnelError::InvalidData(
                        "gradient needs at least two stops".to_owned(),
                    ));
                }
                stops.iter().try_for_each(|stop| {
                    if stop.offset_percent > 100 {
                        return Err(FunnelError::InvalidData(
                            "gradient stop offset must be <= 100".to_owned(),
                        ));
                    }
                    stop.color.validate()
                })
            }
        }
    }
}

/// Draw command for one closed funnel segment in plot coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPrimitive {
    pub d: String,
    pub fill: PathFill,
}

impl PathPrimitive {
    #[must_use]
    pub fn new(d: impl Into<String>, fill: PathFill) -> Self {
        Self { d: d.into(), fill }
    }

    pub fn validate(&self) -> FunnelResult<()> {
        if !self.d.starts_with('M') || !self.d.ends_with('Z') {
            return Err(FunnelError::InvalidData(
                "path data must start with `M` and close with `Z`".to_owned(),
            ));
        }
        self.fill.validate()
    }
}

/// Draw command for one stage divider in chart coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn validate(self) -> FunnelResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(FunnelError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Which line of a stage label block a text belongs to.
///
/// Lines stack in declaration order below the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextRole {
    Value,
    Title,
    Percentage,
}

/// Draw command for one label line, anchored in chart coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub role: TextRole,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(text: impl Into<String>, x: f64, y: f64, role: TextRole) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            role,
        }
    }

    pub fn validate(&self) -> FunnelResult<()> {
        if self.text.is_empty() {
            return Err(FunnelError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(FunnelError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Hover area of one stage carrying its tooltip text, in chart coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipRegion {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub text: String,
}

impl TooltipRegion {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            text: text.into(),
        }
    }

    pub fn validate(&self) -> FunnelResult<()> {
        if ![self.x, self.y, self.width, self.height]
            .iter()
            .all(|value| value.is_finite())
            || self.width < 0.0
            || self.height < 0.0
        {
            return Err(FunnelError::InvalidData(
                "tooltip region must have finite, non-negative extent".to_owned(),
            ));
        }
        Ok(())
    }
}
