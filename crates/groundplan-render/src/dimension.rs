//! Dimension lines: arrowed spans with a caption.
//!
//! Endpoints are given in feet and may lie outside the plan (negative or
//! past [`Overall`](groundplan_core::Overall)) so the annotation sits beside
//! the drawing. [`DimensionLine::layout`] turns them into pixel geometry.

use groundplan_core::{FloorPlan, Point, format_feet};

/// Distance (ft) of the top and left annotations outside the plan.
pub const NEAR_SIDE_OFFSET: f64 = 1.4;
/// Distance (ft) of the bottom and right annotations outside the plan.
pub const FAR_SIDE_OFFSET: f64 = 1.2;

/// Caption offset (px) from the midpoint of a horizontal line.
pub const HORIZONTAL_LABEL_OFFSET: (f64, f64) = (0.0, -8.0);
/// Caption offset (px) from the midpoint of a vertical line, before rotation.
pub const VERTICAL_LABEL_OFFSET: (f64, f64) = (-12.0, 4.0);

/// Caption rotation for vertical lines, so text reads bottom-to-top.
pub const VERTICAL_ROTATION_DEG: f64 = -90.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// SVG `text-anchor` of a caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Middle,
    End,
}

impl TextAnchor {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DimensionLine {
    pub from: Point,
    pub to: Point,
    pub label: String,
    pub orientation: Orientation,
}

/// Pixel geometry of a dimension line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionLayout {
    pub start: Point,
    pub end: Point,
    /// Exact midpoint of `start` and `end`.
    pub midpoint: Point,
    /// Where the caption is anchored: the midpoint moved off the line.
    pub anchor: Point,
    /// Degrees to rotate the caption about `anchor`, if any.
    pub rotation: Option<f64>,
    /// Vertical captions end at the anchor; horizontal ones center on it.
    pub text_anchor: TextAnchor,
}

impl DimensionLine {
    pub fn horizontal(from: Point, to: Point, label: impl Into<String>) -> Self {
        Self {
            from,
            to,
            label: label.into(),
            orientation: Orientation::Horizontal,
        }
    }

    pub fn vertical(from: Point, to: Point, label: impl Into<String>) -> Self {
        Self {
            from,
            to,
            label: label.into(),
            orientation: Orientation::Vertical,
        }
    }

    pub fn layout(&self, scale: f64) -> DimensionLayout {
        let start = self.from.scaled(scale);
        let end = self.to.scaled(scale);
        let midpoint = start.midpoint(end);
        let ((dx, dy), rotation, text_anchor) = match self.orientation {
            Orientation::Horizontal => (HORIZONTAL_LABEL_OFFSET, None, TextAnchor::Middle),
            Orientation::Vertical => (
                VERTICAL_LABEL_OFFSET,
                Some(VERTICAL_ROTATION_DEG),
                TextAnchor::End,
            ),
        };
        DimensionLayout {
            start,
            end,
            midpoint,
            anchor: midpoint.offset(dx, dy),
            rotation,
            text_anchor,
        }
    }
}

/// The plan's annotations: total width and length, then hall width and
/// length when the plan has a hall.
pub fn plan_dimensions(plan: &FloorPlan) -> Vec<DimensionLine> {
    let overall = plan.overall();
    let mut lines = vec![
        DimensionLine::horizontal(
            Point::new(0.0, -NEAR_SIDE_OFFSET),
            Point::new(overall.width, -NEAR_SIDE_OFFSET),
            format!("Total width {}", format_feet(overall.width)),
        ),
        DimensionLine::vertical(
            Point::new(-NEAR_SIDE_OFFSET, 0.0),
            Point::new(-NEAR_SIDE_OFFSET, overall.height),
            format!("Total length {}", format_feet(overall.height)),
        ),
    ];

    if let Some(hall) = plan.hall() {
        let below = overall.height + FAR_SIDE_OFFSET;
        let beside = overall.width + FAR_SIDE_OFFSET;
        lines.push(DimensionLine::horizontal(
            Point::new(hall.x, below),
            Point::new(hall.right(), below),
            format!("Hall width {}", format_feet(hall.width)),
        ));
        lines.push(DimensionLine::vertical(
            Point::new(beside, hall.y),
            Point::new(beside, hall.bottom()),
            format!("Hall length {}", format_feet(hall.height)),
        ));
    } else {
        tracing::debug!(title = %plan.title(), "plan has no hall; skipping hall dimensions");
    }

    lines
}
