#![forbid(unsafe_code)]

//! Layout table for groundplan.
//!
//! A [`FloorPlan`] is an ordered list of [`Space`]s plus one [`Overall`]
//! bounding size, all in feet. Plans come from [`FloorPlan::reference`] or
//! from a plan file parsed into a [`FloorPlanConfig`] and checked by
//! [`FloorPlan::from_config`]. Once built, a plan never changes.

pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod plan;
pub mod reference;
pub mod space;

pub use color::Rgb;
pub use config::{FloorPlanConfig, RenderOverrides, SpaceConfig};
pub use error::{ConfigError, Result};
pub use geometry::{Point, format_feet};
pub use plan::{FloorPlan, Overall};
pub use space::{Space, SpaceKind};
