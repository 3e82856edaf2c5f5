#![forbid(unsafe_code)]

//! Floor-plan renderer.
//!
//! Turns a validated [`FloorPlan`](groundplan_core::FloorPlan) into SVG
//! markup ([`render_svg`]) or a standalone HTML page ([`render_page`]).
//! Rendering is a pure, single-pass function of the plan and
//! [`RenderOptions`]: no state is kept between calls.
//!
//! ```
//! use groundplan_core::FloorPlan;
//! use groundplan_render::{RenderOptions, render_svg};
//!
//! let svg = render_svg(&FloorPlan::reference(), &RenderOptions::default());
//! assert!(svg.contains("viewBox=\"0 0 408 288\""));
//! ```

pub mod dimension;
pub mod legend;
pub mod options;
pub mod page;
pub mod style;
pub mod svg;

pub use dimension::{DimensionLayout, DimensionLine, Orientation, TextAnchor, plan_dimensions};
pub use legend::{Legend, LegendRow, Swatch};
pub use options::{DEFAULT_SCALE, RenderOptions};
pub use page::render_page;
pub use style::{Fill, SpaceStyle};
pub use svg::{Px, render_svg, write_svg};
