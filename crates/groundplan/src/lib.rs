#![forbid(unsafe_code)]

//! groundplan public facade and CLI.
//!
//! Re-exports the layout table ([`groundplan_core`]) and the renderer
//! ([`groundplan_render`]), and hosts the `groundplan` command-line tool.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod source;

pub use cli::{run, run_from_env};
pub use error::{CliError, Result};

pub use groundplan_core::{
    ConfigError, FloorPlan, FloorPlanConfig, Overall, Point, RenderOverrides, Rgb, Space,
    SpaceConfig, SpaceKind, format_feet,
};
pub use groundplan_render::{
    DimensionLine, Legend, LegendRow, Orientation, RenderOptions, Swatch, plan_dimensions,
    render_page, render_svg,
};
