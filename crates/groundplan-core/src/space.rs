//! Spaces: the labeled rectangles that make up a floor plan.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::geometry::Point;

/// Visual style variant of a space.
///
/// Resolved once when a plan is built; renderers match on it instead of
/// inspecting the label text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpaceKind {
    /// Ordinary room: solid fill, default corner radius.
    #[default]
    Room,
    /// Circulation hall: solid fill, larger corner radius. Also the target
    /// of the hall dimension lines.
    Hall,
    /// Staircase: hatch pattern fill regardless of the declared color.
    Stair,
}

impl SpaceKind {
    pub const STAIR_PREFIX: &'static str = "Stair";
    pub const HALL_PREFIX: &'static str = "Hall";

    /// Infer a kind from the leading word of a label.
    ///
    /// Only used while loading plan files that leave `kind` out.
    #[must_use]
    pub fn from_label_prefix(label: &str) -> Self {
        if label.starts_with(Self::STAIR_PREFIX) {
            Self::Stair
        } else if label.starts_with(Self::HALL_PREFIX) {
            Self::Hall
        } else {
            Self::Room
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Room => "room",
            Self::Hall => "hall",
            Self::Stair => "stair",
        }
    }
}

/// A labeled axis-aligned rectangle, in feet.
#[derive(Debug, Clone, PartialEq)]
pub struct Space {
    pub label: String,
    pub kind: SpaceKind,
    /// Offset of the top-left corner from the plan origin.
    pub x: f64,
    pub y: f64,
    /// Extent along x.
    pub width: f64,
    /// Extent along y.
    pub height: f64,
    /// Fill for non-stair rendering.
    pub color: Rgb,
    /// Legend-only annotation.
    pub details: Option<String>,
}

impl Space {
    pub fn new(
        label: impl Into<String>,
        kind: SpaceKind,
        origin: Point,
        width: f64,
        height: f64,
        color: Rgb,
    ) -> Self {
        Self {
            label: label.into(),
            kind,
            x: origin.x,
            y: origin.y,
            width,
            height,
            color,
            details: None,
        }
    }

    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    #[inline]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}
