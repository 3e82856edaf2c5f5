//! Plan-space geometry and unit formatting.
//!
//! Plan coordinates are in feet with the origin at the plan's top-left
//! corner, x growing rightward and y growing downward. Renderers convert to
//! pixels by multiplying by a single scale factor.

/// A point in plan space (feet) or, after [`Point::scaled`], in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Multiply both coordinates by `factor`.
    #[inline]
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    #[inline]
    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Point halfway between `self` and `other`.
    #[inline]
    #[must_use]
    pub fn midpoint(self, other: Point) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// Format a length in feet with exactly one decimal, e.g. `12.0 ft`.
///
/// A value exactly halfway between two tenths rounds away from zero, so
/// `2.25` prints as `2.3 ft`.
#[must_use]
pub fn format_feet(value: f64) -> String {
    format!("{} ft", fixed_one_decimal(value))
}

fn fixed_one_decimal(value: f64) -> String {
    // Odd multiples of 0.25 are the only binary values that sit exactly
    // halfway between two tenths. `{:.1}` would round those to even.
    let quarters = value.abs() * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 == 1.0 {
        let tenths = (quarters * 2.5).ceil() as u64;
        let sign = if value.is_sign_negative() { "-" } else { "" };
        return format!("{sign}{}.{}", tenths / 10, tenths % 10);
    }
    format!("{value:.1}")
}
