use serde::{Deserialize, Serialize};

use crate::core::{FunnelValues, GradientDirection};
use crate::error::FunnelResult;
use crate::render::{Color, PathFill};

/// Default segment palette, taken in order.
pub const DEFAULT_PALETTE: [Color; 10] = [
    Color::from_rgb8(0xFF, 0x45, 0x89),
    Color::from_rgb8(0xFF, 0x50, 0x50),
    Color::from_rgb8(0x05, 0xDF, 0x9D),
    Color::from_rgb8(0x4F, 0xF2, 0xFD),
    Color::from_rgb8(0x2D, 0x9C, 0xDB),
    Color::from_rgb8(0xA0, 0xBB, 0xFF),
    Color::from_rgb8(0xFF, 0xD7, 0x6F),
    Color::from_rgb8(0xF2, 0xC9, 0x4C),
    Color::from_rgb8(0xFF, 0x9A, 0x9A),
    Color::from_rgb8(0xFF, 0xB1, 0x78),
];

/// Color option of one segment: a single hex color or a gradient of several.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Solid(String),
    Gradient(Vec<String>),
}

impl ColorSpec {
    #[must_use]
    pub fn solid(color: impl Into<String>) -> Self {
        Self::Solid(color.into())
    }

    #[must_use]
    pub fn gradient<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Gradient(colors.into_iter().map(Into::into).collect())
    }

    pub fn parse(&self) -> FunnelResult<Vec<Color>> {
        match self {
            Self::Solid(color) => Ok(vec![Color::from_hex(color)?]),
            Self::Gradient(colors) => colors.iter().map(|color| Color::from_hex(color)).collect(),
        }
    }
}

/// Parsed colors, one entry per segment; falls back to the palette when unset.
///
/// The default count is one color per sub-series, or two (a gradient) for
/// flat data.
pub(super) fn resolve_colors(
    specs: Option<&[ColorSpec]>,
    values: &FunnelValues,
) -> FunnelResult<Vec<Vec<Color>>> {
    match specs {
        Some(specs) if !specs.is_empty() => specs.iter().map(ColorSpec::parse).collect(),
        _ => {
            let count = if values.is_2d() {
                values.sub_data_size()
            } else {
                2
            };
            Ok(DEFAULT_PALETTE
                .iter()
                .cycle()
                .take(count)
                .map(|color| vec![*color])
                .collect())
        }
    }
}

/// Paint of the path drawn at `path_index` (dense draw order).
///
/// Sub-series charts paint each band with its own entry; flat charts use the
/// whole color list as one paint.
pub(super) fn path_fill(
    colors: &[Vec<Color>],
    is_2d: bool,
    path_index: usize,
    direction: GradientDirection,
) -> FunnelResult<PathFill> {
    let gradient_index = path_index + 1;
    if is_2d {
        return match colors.get(path_index) {
            Some(entry) if !entry.is_empty() => {
                PathFill::from_colors(entry, gradient_index, direction)
            }
            _ => Ok(PathFill::Solid(
                DEFAULT_PALETTE[path_index % DEFAULT_PALETTE.len()],
            )),
        };
    }

    let flattened: Vec<Color> = colors.iter().flatten().copied().collect();
    if flattened.is_empty() {
        return PathFill::from_colors(&DEFAULT_PALETTE[..2], gradient_index, direction);
    }
    PathFill::from_colors(&flattened, gradient_index, direction)
}
