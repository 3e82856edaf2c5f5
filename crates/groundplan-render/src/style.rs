//! Fixed palette and per-space style resolution.

use std::fmt;

use groundplan_core::{Rgb, Space, SpaceKind};

use crate::options::RenderOptions;

/// Id of the `<pattern>` used to hatch stairs.
pub const STAIR_PATTERN_ID: &str = "stairs";
/// Id of the `<marker>` drawn at both ends of dimension lines.
pub const DIMENSION_ARROW_ID: &str = "dim-arrow";
/// Id of the `<title>` referenced by `aria-labelledby`.
pub const TITLE_ID: &str = "floor-title";

pub mod palette {
    use groundplan_core::Rgb;

    pub const CANVAS_BACKGROUND: Rgb = Rgb::from_hex(0xe2e8f0);
    pub const OUTLINE_FILL: Rgb = Rgb::from_hex(0xf8fafc);
    pub const OUTLINE_STROKE: Rgb = Rgb::from_hex(0x0f172a);
    pub const SPACE_STROKE: Rgb = Rgb::from_hex(0x1f2937);
    pub const TEXT: Rgb = Rgb::from_hex(0x0f172a);
    pub const DIMENSION: Rgb = Rgb::from_hex(0x334155);
    pub const STAIR_TILE: Rgb = Rgb::from_hex(0xfed7e2);
    pub const STAIR_HATCH: Rgb = Rgb::from_hex(0xf472b6);
    /// Light band of the legend's CSS stair swatch.
    pub const STAIR_SWATCH_LIGHT: Rgb = Rgb::from_hex(0xfbcfe8);
    pub const RIDGE_SWATCH: Rgb = Rgb::from_hex(0x94a3b8);
}

/// How a space's rectangle is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    Solid(Rgb),
    /// Reference to a `<pattern>` in `<defs>`.
    Pattern(&'static str),
}

impl fmt::Display for Fill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solid(color) => write!(f, "{color}"),
            Self::Pattern(id) => write!(f, "url(#{id})"),
        }
    }
}

/// Resolved drawing style of one space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpaceStyle {
    pub fill: Fill,
    pub corner_radius: f64,
}

impl SpaceStyle {
    pub fn for_space(space: &Space, options: &RenderOptions) -> Self {
        let fill = match space.kind {
            SpaceKind::Stair => Fill::Pattern(STAIR_PATTERN_ID),
            SpaceKind::Room | SpaceKind::Hall => Fill::Solid(space.color),
        };
        let corner_radius = match space.kind {
            SpaceKind::Hall => options.hall_radius,
            SpaceKind::Room | SpaceKind::Stair => options.room_radius,
        };
        Self { fill, corner_radius }
    }
}
